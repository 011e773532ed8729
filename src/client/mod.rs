//! Interactive client helpers.
//!
//! Pure functions used by the `seat-client` binary: turning what a person
//! types into a protocol line, and drawing `AVAILABLE` replies as a seat map.
//! The aliases accepted here are a convenience of the client only; the
//! server speaks the canonical keywords.

pub mod input;
pub mod seat_map;

pub use input::normalize_command;
pub use seat_map::render_seat_map;
