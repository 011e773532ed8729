//! Structured logging and the per-request log sink.

use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::net::connection::ConnectionId;

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `default_level`.
pub fn init_tracing(default_level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("seat_reservation={default_level},seat_server={default_level}").into());

    // Ignore the error when a subscriber is already installed (tests, embedding).
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

/// Who issued a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientInfo {
    pub id: ConnectionId,
    pub peer: SocketAddr,
}

impl std::fmt::Display for ClientInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.peer, self.id)
    }
}

/// Sink for one record per handled command or connection event.
///
/// Called after the reply has been written; it cannot influence the reply
/// and has no way to fail the session.
pub trait RequestLog: Send + Sync {
    fn record(&self, action: &str, client: &ClientInfo, outcome: &str);
}

/// Request log backed by `tracing` events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingRequestLog;

impl RequestLog for TracingRequestLog {
    fn record(&self, action: &str, client: &ClientInfo, outcome: &str) {
        tracing::info!(
            target: "seat_reservation::requests",
            connection_id = %client.id,
            peer_addr = %client.peer,
            action,
            outcome,
            "request"
        );
    }
}
