//! Typed client requests.

use crate::store::SeatId;

/// Command keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Available,
    Book,
    Cancel,
    Exit,
}

impl Verb {
    /// Canonical upper-case keyword.
    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Available => "AVAILABLE",
            Verb::Book => "BOOK",
            Verb::Cancel => "CANCEL",
            Verb::Exit => "EXIT",
        }
    }
}

impl std::fmt::Display for Verb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A successfully parsed command.
///
/// Seat lists are non-empty, in range, duplicate-free and in the order the
/// client sent them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Query,
    Book { seats: Vec<SeatId> },
    Cancel { seats: Vec<SeatId> },
    Disconnect,
}

impl Request {
    pub fn verb(&self) -> Verb {
        match self {
            Request::Query => Verb::Available,
            Request::Book { .. } => Verb::Book,
            Request::Cancel { .. } => Verb::Cancel,
            Request::Disconnect => Verb::Exit,
        }
    }

    /// Number of seats named by a book or cancel.
    pub fn count(&self) -> usize {
        match self {
            Request::Book { seats } | Request::Cancel { seats } => seats.len(),
            Request::Query | Request::Disconnect => 0,
        }
    }
}
