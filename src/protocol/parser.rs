//! Command parsing.
//!
//! Pure functions from a text line to a [`Request`]. The parser knows the
//! table capacity so that every seat id it hands to the store is in range.

use thiserror::Error;

use crate::protocol::request::{Request, Verb};
use crate::store::SeatId;

/// Why a line was rejected. Display text is the reason sent after `FAIL`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown command")]
    UnknownCommand,

    #[error("invalid command format")]
    MissingCount,

    #[error("invalid count")]
    InvalidCount,

    #[error("invalid seat number {0}")]
    InvalidSeat(String),

    #[error("duplicate seat {0}")]
    DuplicateSeat(SeatId),

    #[error("count mismatch: expected {expected} seats, got {got}")]
    CountMismatch { expected: usize, got: usize },

    /// Raised by the line reader, before parsing.
    #[error("line too long")]
    LineTooLong,
}

/// Recognize a command keyword, ignoring case.
///
/// `AVAILABLE` matches any token that starts with the keyword; the others
/// must match exactly.
pub fn parse_verb(token: &str) -> Option<Verb> {
    let upper = token.to_ascii_uppercase();
    if upper.starts_with(Verb::Available.as_str()) {
        return Some(Verb::Available);
    }
    match upper.as_str() {
        "BOOK" => Some(Verb::Book),
        "CANCEL" => Some(Verb::Cancel),
        "EXIT" => Some(Verb::Exit),
        _ => None,
    }
}

/// Parse one protocol line.
///
/// Returns `Ok(None)` for blank lines, which get no reply.
pub fn parse_request(line: &str, capacity: u32) -> Result<Option<Request>, ParseError> {
    let mut tokens = line.split_whitespace();
    let Some(first) = tokens.next() else {
        return Ok(None);
    };

    let request = match parse_verb(first).ok_or(ParseError::UnknownCommand)? {
        Verb::Available => Request::Query,
        Verb::Exit => Request::Disconnect,
        Verb::Book => Request::Book {
            seats: parse_seat_list(tokens, capacity)?,
        },
        Verb::Cancel => Request::Cancel {
            seats: parse_seat_list(tokens, capacity)?,
        },
    };

    Ok(Some(request))
}

/// Keyword used when logging a line, `UNKNOWN` if it has none.
pub fn action_label(line: &str) -> &'static str {
    line.split_whitespace()
        .next()
        .and_then(parse_verb)
        .map_or("UNKNOWN", |verb| verb.as_str())
}

/// `<count> <id> ...` with every id in `1..=capacity`.
fn parse_seat_list<'a>(
    mut tokens: impl Iterator<Item = &'a str>,
    capacity: u32,
) -> Result<Vec<SeatId>, ParseError> {
    let count = tokens.next().ok_or(ParseError::MissingCount)?;
    let expected = count
        .parse::<u32>()
        .ok()
        .filter(|n| (1..=capacity).contains(n))
        .ok_or(ParseError::InvalidCount)? as usize;

    let mut seats: Vec<SeatId> = Vec::with_capacity(expected);
    for token in tokens {
        let seat = token
            .parse::<u32>()
            .ok()
            .filter(|id| (1..=capacity).contains(id))
            .map(SeatId::new)
            .ok_or_else(|| ParseError::InvalidSeat(token.to_string()))?;

        if seats.contains(&seat) {
            return Err(ParseError::DuplicateSeat(seat));
        }
        seats.push(seat);
    }

    if seats.len() != expected {
        return Err(ParseError::CountMismatch {
            expected,
            got: seats.len(),
        });
    }

    Ok(seats)
}
