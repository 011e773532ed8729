//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (seat capacity, connection and line limits)
//! - Check that addresses parse before anything binds to them
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServerConfig → Result<(), Vec<ValidationError>>

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::ServerConfig;

/// Largest seat table the server will build.
pub const MAX_CAPACITY: u32 = 1000;

/// Bounds for `listener.max_line_bytes`. The lower bound still fits a
/// short `BOOK` line; the upper keeps per-connection buffering small.
pub const MIN_LINE_BYTES: usize = 16;
pub const MAX_LINE_BYTES: usize = 64 * 1024;

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("seats.capacity must be between 1 and {max}, got {0}", max = MAX_CAPACITY)]
    Capacity(u32),

    #[error("listener.max_connections must be at least 1")]
    MaxConnections,

    #[error(
        "listener.max_line_bytes must be between {min} and {max}, got {0}",
        min = MIN_LINE_BYTES,
        max = MAX_LINE_BYTES
    )]
    MaxLineBytes(usize),

    #[error("listener.bind_address '{0}' is not a socket address")]
    BindAddress(String),

    #[error("observability.metrics_address '{0}' is not a socket address")]
    MetricsAddress(String),
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &ServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.seats.capacity == 0 || config.seats.capacity > MAX_CAPACITY {
        errors.push(ValidationError::Capacity(config.seats.capacity));
    }

    if config.listener.max_connections == 0 {
        errors.push(ValidationError::MaxConnections);
    }

    if !(MIN_LINE_BYTES..=MAX_LINE_BYTES).contains(&config.listener.max_line_bytes) {
        errors.push(ValidationError::MaxLineBytes(config.listener.max_line_bytes));
    }

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(config.listener.bind_address.clone()));
    }

    // Only checked when it will actually be bound.
    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::MetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
