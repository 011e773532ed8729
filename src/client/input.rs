//! Command normalization for interactive input.

/// Turn user input into the line to send, or `None` for blank input.
///
/// - `available`, `avail`, `a` → `AVAILABLE`
/// - `book ...`, `b ...` → `BOOK ...`
/// - `cancel ...`, `c ...` → `CANCEL ...`
/// - `exit`, `quit`, `q` → `EXIT`
///
/// Anything else is sent upper-cased so the server can reject it.
pub fn normalize_command(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    let upper = trimmed.to_ascii_uppercase();
    let (verb, rest) = match upper.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim_start()),
        None => (upper.as_str(), ""),
    };

    let canonical = match verb {
        "AVAILABLE" | "AVAIL" | "A" => return Some("AVAILABLE".to_string()),
        "EXIT" | "QUIT" | "Q" => return Some("EXIT".to_string()),
        "BOOK" | "B" => "BOOK",
        "CANCEL" | "C" => "CANCEL",
        _ => return Some(upper),
    };

    if rest.is_empty() {
        Some(canonical.to_string())
    } else {
        Some(format!("{canonical} {rest}"))
    }
}
