//! The shared seat table.
//!
//! # Responsibilities
//! - Own every seat and its booking state
//! - Execute query/book/cancel as single critical sections
//! - Guarantee all-or-nothing semantics for multi-seat requests
//!
//! # Concurrency
//! Every operation takes the same mutex for its whole check-then-mutate
//! sequence. Two requests naming an overlapping seat are therefore strictly
//! ordered: whichever acquires the lock second sees the first one's effect.
//! The free-seat count lives under the same lock and the `seats_available`
//! gauge is set before it is released, so the gauge never lags a write.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::net::connection::ConnectionId;
use crate::observability::metrics;
use crate::store::outcome::{Conflict, Outcome};
use crate::store::seat::{Seat, SeatId};

/// Fixed-capacity seat table shared by every connection.
#[derive(Debug)]
pub struct SeatStore {
    table: Mutex<Table>,
    capacity: u32,
}

#[derive(Debug)]
struct Table {
    seats: Vec<Seat>,
    free: usize,
}

impl SeatStore {
    /// Create a table of `capacity` free seats numbered `1..=capacity`.
    pub fn new(capacity: u32) -> Self {
        let seats: Vec<Seat> = (1..=capacity).map(|id| Seat::new(SeatId::new(id))).collect();
        let free = seats.len();
        Self {
            table: Mutex::new(Table { seats, free }),
            capacity,
        }
    }

    /// Number of seats in the table.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// List free seats in ascending order.
    pub fn query(&self) -> Outcome {
        let table = self.lock();
        Outcome::Available(
            table
                .seats
                .iter()
                .filter(|seat| !seat.is_booked())
                .map(Seat::id)
                .collect(),
        )
    }

    /// Book every seat in `ids` for `owner`, or none of them.
    ///
    /// `ids` must be non-empty, in range and free of duplicates; the parser
    /// guarantees this and a violation here panics.
    pub fn book(&self, ids: &[SeatId], owner: ConnectionId) -> Outcome {
        self.check_request(ids);
        let mut table = self.lock();

        for &id in ids {
            if table.seats[self.index(id)].is_booked() {
                return Outcome::Rejected(Conflict::AlreadyBooked(id));
            }
        }

        for &id in ids {
            let index = self.index(id);
            table.seats[index].book(owner);
        }
        table.free -= ids.len();
        metrics::record_available_seats(table.free);

        Outcome::Booked(ids.to_vec())
    }

    /// Release every seat in `ids` held by `owner`, or none of them.
    ///
    /// Same preconditions as [`SeatStore::book`].
    pub fn cancel(&self, ids: &[SeatId], owner: ConnectionId) -> Outcome {
        self.check_request(ids);
        let mut table = self.lock();

        for &id in ids {
            match table.seats[self.index(id)].owner() {
                None => return Outcome::Rejected(Conflict::NotBooked(id)),
                Some(holder) if holder != owner => {
                    return Outcome::Rejected(Conflict::NotOwner(id));
                }
                Some(_) => {}
            }
        }

        for &id in ids {
            let index = self.index(id);
            table.seats[index].release();
        }
        table.free += ids.len();
        metrics::record_available_seats(table.free);

        Outcome::Cancelled(ids.to_vec())
    }

    /// Number of free seats.
    pub fn available_count(&self) -> usize {
        self.lock().free
    }

    /// Copy of the whole table, taken under the lock.
    pub fn snapshot(&self) -> Vec<Seat> {
        self.lock().seats.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Table> {
        // A panic under the lock can only come from a precondition check,
        // which runs before any seat is touched, so the table is consistent.
        self.table.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn index(&self, id: SeatId) -> usize {
        let raw = id.as_u32();
        assert!(
            (1..=self.capacity).contains(&raw),
            "seat {raw} outside table of {} seats",
            self.capacity
        );
        (raw - 1) as usize
    }

    fn check_request(&self, ids: &[SeatId]) {
        assert!(!ids.is_empty(), "seat request must name at least one seat");
        debug_assert!(
            ids.iter()
                .enumerate()
                .all(|(i, id)| !ids[..i].contains(id)),
            "seat request contains duplicates: {ids:?}"
        );
    }
}
