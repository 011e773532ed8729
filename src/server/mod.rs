//! Seat reservation server.
//!
//! # Responsibilities
//! - Build the shared seat table from configuration
//! - Accept connections and spawn one session task per connection
//! - Hand every session the same `Arc<SeatStore>` and request log
//! - Stop accepting on shutdown and wait for sessions to drain

pub mod session;

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::lifecycle::Shutdown;
use crate::net::{ConnectionTracker, Listener, ListenerError};
use crate::observability::metrics;
use crate::observability::{ClientInfo, RequestLog, TracingRequestLog};
use crate::store::SeatStore;

pub use session::{Session, SessionEnd, SessionError};

/// TCP front end for a [`SeatStore`].
pub struct SeatServer {
    store: Arc<SeatStore>,
    log: Arc<dyn RequestLog>,
    tracker: ConnectionTracker,
    max_line_bytes: usize,
}

impl SeatServer {
    /// Create a server with a fresh seat table sized from `config`.
    pub fn new(config: &ServerConfig) -> Self {
        let store = Arc::new(SeatStore::new(config.seats.capacity));
        metrics::record_available_seats(store.available_count());
        Self {
            store,
            log: Arc::new(TracingRequestLog),
            tracker: ConnectionTracker::new(),
            max_line_bytes: config.listener.max_line_bytes,
        }
    }

    /// Replace the default tracing-backed request log.
    pub fn with_request_log(mut self, log: Arc<dyn RequestLog>) -> Self {
        self.log = log;
        self
    }

    /// Handle to the shared seat table.
    pub fn store(&self) -> Arc<SeatStore> {
        Arc::clone(&self.store)
    }

    /// Connection tracker, for observing active sessions.
    pub fn tracker(&self) -> ConnectionTracker {
        self.tracker.clone()
    }

    /// Accept connections until `shutdown` fires, then drain sessions.
    pub async fn run(self, listener: Listener, shutdown: Shutdown) -> Result<(), ListenerError> {
        let mut stop = shutdown.subscribe();

        if let Ok(addr) = listener.local_addr() {
            tracing::info!(
                address = %addr,
                seats = self.store.capacity(),
                "Seat server accepting connections"
            );
        }

        loop {
            let accepted = tokio::select! {
                accepted = listener.accept() => accepted,
                _ = stop.recv() => break,
            };

            let (stream, peer, permit) = match accepted {
                Ok(conn) => conn,
                Err(ListenerError::Accept(e)) => {
                    tracing::warn!(error = %e, "Accept failed");
                    continue;
                }
                Err(e) => return Err(e),
            };

            let guard = self.tracker.track();
            let client = ClientInfo {
                id: guard.id(),
                peer,
            };
            let (reader, writer) = stream.into_split();
            let mut session = Session::new(
                reader,
                writer,
                Arc::clone(&self.store),
                Arc::clone(&self.log),
                client,
                self.max_line_bytes,
            );
            let session_shutdown = shutdown.subscribe();

            tokio::spawn(async move {
                // Held for the session's lifetime.
                let _permit = permit;
                let _guard = guard;

                match session.run(session_shutdown).await {
                    Ok(end) => {
                        tracing::debug!(connection_id = %client.id, reason = ?end, "Session ended");
                    }
                    Err(e) => {
                        tracing::warn!(connection_id = %client.id, error = %e, "Session failed");
                    }
                }
            });
        }

        tracing::info!(
            active_connections = self.tracker.active_count(),
            "Stopped accepting, draining sessions"
        );
        self.tracker.wait_for_drain().await;
        tracing::info!("Seat server stopped");
        Ok(())
    }
}
