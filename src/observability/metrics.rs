//! Metrics collection and exposition.
//!
//! # Metrics
//! - `seat_commands_total` (counter): handled commands by command, result
//! - `seat_active_connections` (gauge): current connection count
//! - `seats_available` (gauge): free seats after the last mutation

use std::net::SocketAddr;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus recorder and its HTTP listener.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(metrics_address = %addr, "Metrics endpoint started"),
        Err(e) => tracing::error!(metrics_address = %addr, error = %e, "Failed to start metrics endpoint"),
    }
}

/// Count one handled command.
pub fn record_command(command: &'static str, result: &'static str) {
    metrics::counter!("seat_commands_total", "command" => command, "result" => result).increment(1);
}

pub fn record_active_connections(count: u64) {
    metrics::gauge!("seat_active_connections").set(count as f64);
}

pub fn record_available_seats(count: usize) {
    metrics::gauge!("seats_available").set(count as f64);
}
