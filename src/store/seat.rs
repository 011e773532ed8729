//! Seat identity and state.

use crate::net::connection::ConnectionId;

/// Stable seat number, `1..=capacity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SeatId(u32);

impl SeatId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl From<u32> for SeatId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for SeatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single seat in the table.
///
/// The owner lives inside the booked state so a free seat can never carry a
/// stale owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seat {
    id: SeatId,
    owner: Option<ConnectionId>,
}

impl Seat {
    pub(crate) fn new(id: SeatId) -> Self {
        Self { id, owner: None }
    }

    pub fn id(&self) -> SeatId {
        self.id
    }

    pub fn is_booked(&self) -> bool {
        self.owner.is_some()
    }

    /// Connection holding the booking, if any.
    pub fn owner(&self) -> Option<ConnectionId> {
        self.owner
    }

    pub(crate) fn book(&mut self, owner: ConnectionId) {
        self.owner = Some(owner);
    }

    pub(crate) fn release(&mut self) {
        self.owner = None;
    }
}
