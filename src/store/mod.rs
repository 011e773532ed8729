//! Seat reservation engine.
//!
//! # Data Flow
//! ```text
//! Request (from protocol::parser)
//!     → SeatStore::{query, book, cancel}
//!         lock table → validate every seat → mutate all or none → unlock
//!     → Outcome (to protocol::response)
//! ```
//!
//! # Design Decisions
//! - One mutex covers the whole table; no per-seat locks
//! - The lock is held only for the in-memory scan, never across I/O
//! - Conflicts are ordinary `Outcome` values, not errors

pub mod outcome;
pub mod seat;
pub mod table;

pub use outcome::{Conflict, Outcome};
pub use seat::{Seat, SeatId};
pub use table::SeatStore;
