//! Results produced by the seat store.

use thiserror::Error;

use crate::store::seat::SeatId;

/// Result of a store operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Free seats, ascending.
    Available(Vec<SeatId>),
    /// Seats booked, in request order.
    Booked(Vec<SeatId>),
    /// Seats released, in request order.
    Cancelled(Vec<SeatId>),
    /// Nothing was changed.
    Rejected(Conflict),
}

/// Business-rule conflict for the first offending seat.
///
/// Display text is the reason sent after `FAIL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Conflict {
    #[error("seat {0} already booked")]
    AlreadyBooked(SeatId),

    #[error("seat {0} is not booked")]
    NotBooked(SeatId),

    #[error("seat {0} was not booked by you")]
    NotOwner(SeatId),
}

impl Outcome {
    /// Short label used for logs and metrics.
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Available(_) => "available",
            Outcome::Booked(_) => "booked",
            Outcome::Cancelled(_) => "cancelled",
            Outcome::Rejected(_) => "rejected",
        }
    }
}
