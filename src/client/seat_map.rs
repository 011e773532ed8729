//! Seat map rendering for `AVAILABLE` replies.

use std::fmt::Write;

use crate::protocol::response::parse_available;

/// Seats drawn per row.
pub const SEATS_PER_ROW: u32 = 5;

const SCREEN: &str = "* * * * * * * * * * * *   S C R E E N   * * * * * * * * * * * *";

/// Render an `AVAILABLE` reply for a table of `capacity` seats.
///
/// Returns `None` when `reply` is not an `AVAILABLE` line.
pub fn render_seat_map(reply: &str, capacity: u32) -> Option<String> {
    let available = parse_available(reply)?;
    let mut out = String::new();

    let _ = writeln!(out, "\n{SCREEN}\n");
    if available.is_empty() {
        let _ = writeln!(out, "All seats are booked!");
        return Some(out);
    }

    let _ = writeln!(out, "Seat map (available seats show their number, booked seats show X):\n");
    let _ = write!(out, "        ");
    for col in 1..=SEATS_PER_ROW.min(capacity) {
        let _ = write!(out, "Col {col} ");
    }
    out.push('\n');

    let rows = capacity.div_ceil(SEATS_PER_ROW);
    for row in 0..rows {
        let _ = write!(out, "Row {:<3} ", row + 1);
        let first = row * SEATS_PER_ROW + 1;
        let last = (first + SEATS_PER_ROW - 1).min(capacity);
        for seat in first..=last {
            if available.contains(&seat) {
                let _ = write!(out, "[{seat:>2}]  ");
            } else {
                let _ = write!(out, "[ X]  ");
            }
        }
        out.push('\n');
    }

    let _ = writeln!(out, "\nLegend: [NN] = available, [ X] = booked");
    let _ = writeln!(out, "Total available seats: {}", available.len());
    Some(out)
}
