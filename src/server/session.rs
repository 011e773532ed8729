//! Per-connection command loop.
//!
//! # Responsibilities
//! - Read one line at a time from the transport
//! - Parse, execute against the seat store, write exactly one reply
//! - Record every handled command in the request log
//! - End on `EXIT`, peer close, transport error, or server shutdown
//!
//! Bookings outlive the session. Nothing is released when a connection
//! closes; only an explicit `CANCEL` from the owning connection frees a seat.

use std::sync::Arc;

use thiserror::Error;
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};
use tokio::sync::broadcast;

use crate::net::{ConnectionState, Line, LineReader};
use crate::observability::metrics;
use crate::observability::{ClientInfo, RequestLog};
use crate::protocol::{parse_request, parser, render, render_failure, ParseError, Request};
use crate::store::SeatStore;

/// Transport failure; fatal to the session only.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("transport error: {0}")]
    Transport(#[from] std::io::Error),
}

/// Why a session ended without error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Client sent `EXIT`.
    Exit,
    /// Client closed the connection.
    PeerClosed,
    /// Server is shutting down.
    Shutdown,
}

/// What to do with one input line.
enum Step {
    Ignore,
    Reply {
        action: &'static str,
        line: String,
    },
    Exit,
}

/// One client connection.
pub struct Session<R, W> {
    lines: LineReader<R>,
    writer: W,
    store: Arc<SeatStore>,
    log: Arc<dyn RequestLog>,
    client: ClientInfo,
    state: ConnectionState,
}

impl<R, W> Session<R, W>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(
        reader: R,
        writer: W,
        store: Arc<SeatStore>,
        log: Arc<dyn RequestLog>,
        client: ClientInfo,
        max_line_bytes: usize,
    ) -> Self {
        Self {
            lines: LineReader::new(reader, max_line_bytes),
            writer,
            store,
            log,
            client,
            state: ConnectionState::Active,
        }
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    /// Serve commands until the session ends.
    ///
    /// `shutdown` fires (or closes) when the server stops; the command being
    /// handled at that moment still completes.
    pub async fn run(
        &mut self,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<SessionEnd, SessionError> {
        self.log.record("CONNECT", &self.client, "New client connected");

        let result = self.serve(&mut shutdown).await;
        self.state = ConnectionState::Closing;

        match &result {
            Ok(SessionEnd::Exit) => {
                self.log.record("EXIT", &self.client, "Client disconnecting");
            }
            Ok(SessionEnd::PeerClosed) => {
                self.log.record("DISCONNECT", &self.client, "Client closed connection");
            }
            Ok(SessionEnd::Shutdown) => {
                self.log.record("SHUTDOWN", &self.client, "Server shutting down");
            }
            Err(e) => {
                self.log.record("ERROR", &self.client, &e.to_string());
                return result;
            }
        }

        self.writer.flush().await?;
        // Peer may already be gone; the session is over either way.
        let _ = self.writer.shutdown().await;
        result
    }

    async fn serve(
        &mut self,
        shutdown: &mut broadcast::Receiver<()>,
    ) -> Result<SessionEnd, SessionError> {
        loop {
            let line = tokio::select! {
                line = self.lines.next_line() => line?,
                _ = shutdown.recv() => return Ok(SessionEnd::Shutdown),
            };

            let Some(line) = line else {
                return Ok(SessionEnd::PeerClosed);
            };

            let step = match line {
                Line::Text(text) => self.dispatch(&text),
                Line::TooLong => self.reject_oversized(),
            };

            match step {
                Step::Ignore => {}
                Step::Exit => return Ok(SessionEnd::Exit),
                Step::Reply { action, line } => {
                    self.writer.write_all(line.as_bytes()).await?;
                    self.writer.flush().await?;
                    self.log.record(action, &self.client, line.trim_end());
                }
            }
        }
    }

    /// Oversized lines are never parsed; the rest of the stream is still served.
    fn reject_oversized(&self) -> Step {
        tracing::debug!(connection_id = %self.client.id, "Line too long");
        metrics::record_command("UNKNOWN", "malformed");
        Step::Reply {
            action: "OVERSIZED",
            line: render_failure(&ParseError::LineTooLong),
        }
    }

    /// Parse a line and run it against the store.
    fn dispatch(&self, line: &str) -> Step {
        let request = match parse_request(line, self.store.capacity()) {
            Ok(Some(request)) => request,
            Ok(None) => return Step::Ignore,
            Err(e) => {
                let action = parser::action_label(line);
                tracing::debug!(connection_id = %self.client.id, error = %e, "Malformed command");
                metrics::record_command(action, "malformed");
                return Step::Reply {
                    action,
                    line: render_failure(&e),
                };
            }
        };

        let owner = self.client.id;
        let outcome = match &request {
            Request::Disconnect => {
                metrics::record_command(request.verb().as_str(), "ok");
                return Step::Exit;
            }
            Request::Query => self.store.query(),
            Request::Book { seats } => self.store.book(seats, owner),
            Request::Cancel { seats } => self.store.cancel(seats, owner),
        };

        metrics::record_command(request.verb().as_str(), outcome.label());

        tracing::debug!(
            connection_id = %owner,
            command = %request.verb(),
            seats = request.count(),
            outcome = outcome.label(),
            "Command handled"
        );

        Step::Reply {
            action: request.verb().as_str(),
            line: render(&outcome),
        }
    }
}
