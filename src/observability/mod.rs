//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Sessions produce:
//!     → logging.rs (request log records, structured tracing events)
//!     → metrics.rs (command counters, connection and seat gauges)
//!
//! Consumers:
//!     → stdout via tracing-subscriber
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - The request log is a trait so tests can capture records
//! - Metrics are cheap (atomic increments) and no-ops until a recorder is installed

pub mod logging;
pub mod metrics;

pub use logging::{ClientInfo, RequestLog, TracingRequestLog};
