//! Line protocol.
//!
//! # Data Flow
//! ```text
//! "BOOK 2 4 7\n"
//!     → parser.rs (line → Request | ParseError)
//!     → store::SeatStore
//!     → response.rs (Outcome | ParseError → "OK BOOKED 4 7\n")
//! ```
//!
//! # Wire Format
//! Client → server, one command per line, keyword case-insensitive:
//! - `AVAILABLE`
//! - `BOOK <n> <s1> ... <sn>`
//! - `CANCEL <n> <s1> ... <sn>`
//! - `EXIT`
//!
//! Server → client:
//! - `AVAILABLE NONE` / `AVAILABLE <id> ...`
//! - `OK BOOKED <id> ...`
//! - `OK CANCELLED <id> ...`
//! - `FAIL <reason>`

pub mod parser;
pub mod request;
pub mod response;

pub use parser::{parse_request, ParseError};
pub use request::{Request, Verb};
pub use response::{render, render_failure};
