//! Seat reservation server.
//!
//! # Architecture Overview
//!
//! ```text
//!                        ┌──────────────────────────────────────────────┐
//!                        │               SEAT SERVER                     │
//!                        │                                               │
//!   "BOOK 2 3 7\n"       │  ┌──────────┐   ┌──────────┐   ┌───────────┐ │
//!   ─────────────────────┼─▶│   net    │──▶│ session  │──▶│ protocol  │ │
//!                        │  │ listener │   │  (task)  │   │  parser   │ │
//!                        │  └──────────┘   └────┬─────┘   └─────┬─────┘ │
//!                        │                      │               ▼       │
//!                        │                      │        ┌───────────┐  │
//!                        │                      │        │ SeatStore │  │
//!                        │                      │        │ (1 mutex) │  │
//!                        │                      │        └─────┬─────┘  │
//!   "OK BOOKED 3 7\n"    │                      ▼               ▼       │
//!   ◀────────────────────┼──────────────── response formatter ◀─┘       │
//!                        │                                               │
//!                        │  config · observability · lifecycle           │
//!                        └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;

use seat_reservation::lifecycle::signals::shutdown_signal;
use seat_reservation::lifecycle::startup::{resolve_config, Overrides};
use seat_reservation::net::Listener;
use seat_reservation::observability::{logging, metrics};
use seat_reservation::{SeatServer, Shutdown};

#[derive(Parser)]
#[command(name = "seat-server")]
#[command(about = "Multi-client seat reservation server", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to listen on (overrides the config file).
    #[arg(short, long)]
    bind: Option<String>,

    /// Number of seats (overrides the config file).
    #[arg(short, long)]
    seats: Option<u32>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = resolve_config(
        cli.config.as_deref(),
        Overrides {
            bind_address: cli.bind,
            capacity: cli.seats,
        },
    )?;

    logging::init_tracing(&config.observability.log_level);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        max_connections = config.listener.max_connections,
        seats = config.seats.capacity,
        "seat-server v0.1.0 starting"
    );

    if config.observability.metrics_enabled {
        // Address already validated.
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        }
    }

    let listener = Listener::bind(&config.listener).await?;
    let server = SeatServer::new(&config);

    let shutdown = Shutdown::new();
    let trigger = shutdown.clone();
    tokio::spawn(async move {
        shutdown_signal().await;
        trigger.trigger();
    });

    server.run(listener, shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
