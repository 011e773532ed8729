//! Reply formatting.
//!
//! Every wire literal the server emits is defined here.

use std::fmt::Display;

use crate::store::{Outcome, SeatId};

const AVAILABLE: &str = "AVAILABLE";
const NONE: &str = "NONE";
const BOOKED: &str = "OK BOOKED";
const CANCELLED: &str = "OK CANCELLED";
const FAIL: &str = "FAIL";

/// Render a store outcome as one `\n`-terminated reply line.
pub fn render(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Available(seats) if seats.is_empty() => format!("{AVAILABLE} {NONE}\n"),
        Outcome::Available(seats) => with_seats(AVAILABLE, seats),
        Outcome::Booked(seats) => with_seats(BOOKED, seats),
        Outcome::Cancelled(seats) => with_seats(CANCELLED, seats),
        Outcome::Rejected(conflict) => render_failure(conflict),
    }
}

/// Render a `FAIL <reason>` line.
pub fn render_failure(reason: &dyn Display) -> String {
    format!("{FAIL} {reason}\n")
}

/// Seat numbers listed in an `AVAILABLE` reply.
///
/// Returns `None` if `line` is not an `AVAILABLE` reply; `AVAILABLE NONE`
/// yields an empty list.
pub fn parse_available(line: &str) -> Option<Vec<u32>> {
    let mut tokens = line.split_whitespace();
    if tokens.next()? != AVAILABLE {
        return None;
    }
    Some(
        tokens
            .take_while(|token| *token != NONE)
            .filter_map(|token| token.parse().ok())
            .collect(),
    )
}

fn with_seats(prefix: &str, seats: &[SeatId]) -> String {
    let mut line = String::from(prefix);
    for seat in seats {
        line.push(' ');
        line.push_str(&seat.to_string());
    }
    line.push('\n');
    line
}
