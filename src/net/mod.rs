//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming TCP connection
//!     → listener.rs (accept loop, connection limits)
//!     → connection.rs (connection id, active tracking)
//!     → line_reader.rs (bounded \n framing)
//!     → Hand off to server::session
//!
//! Session States:
//!     Active → Closing
//! ```
//!
//! # Design Decisions
//! - Bounded accept queue prevents resource exhaustion
//! - Each connection tracked for graceful shutdown
//! - Connection ids come from a process-wide counter and are never reused
//! - Input lines are length-capped so a client cannot grow server memory

pub mod connection;
pub mod line_reader;
pub mod listener;

pub use connection::{ConnectionGuard, ConnectionId, ConnectionState, ConnectionTracker};
pub use line_reader::{Line, LineReader, DEFAULT_MAX_LINE_BYTES};
pub use listener::{ConnectionPermit, Listener, ListenerError};
