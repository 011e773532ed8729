//! Concurrent seat reservation server library.

pub mod client;
pub mod config;
pub mod lifecycle;
pub mod net;
pub mod observability;
pub mod protocol;
pub mod server;
pub mod store;

pub use config::ServerConfig;
pub use lifecycle::Shutdown;
pub use server::SeatServer;
pub use store::SeatStore;
