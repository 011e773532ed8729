//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use seat_reservation::config::ServerConfig;
use seat_reservation::net::{Listener, ListenerError};
use seat_reservation::{SeatServer, SeatStore, Shutdown};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::TcpStream;
use tokio::task::JoinHandle;

/// A server running on an ephemeral local port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub store: Arc<SeatStore>,
    pub handle: JoinHandle<Result<(), ListenerError>>,
}

/// Start a seat server with `capacity` seats.
pub async fn start_server(capacity: u32) -> TestServer {
    let mut config = ServerConfig::default();
    config.seats.capacity = capacity;
    config.listener.bind_address = "127.0.0.1:0".into();

    let listener = Listener::bind(&config.listener).await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = SeatServer::new(&config);
    let store = server.store();
    let shutdown = Shutdown::new();

    let handle = tokio::spawn(server.run(listener, shutdown.clone()));

    TestServer {
        addr,
        shutdown,
        store,
        handle,
    }
}

/// Line-oriented test client.
pub struct LineClient {
    lines: Lines<BufReader<OwnedReadHalf>>,
    writer: OwnedWriteHalf,
}

impl LineClient {
    pub async fn connect(addr: SocketAddr) -> Self {
        let stream = TcpStream::connect(addr).await.unwrap();
        let (reader, writer) = stream.into_split();
        Self {
            lines: BufReader::new(reader).lines(),
            writer,
        }
    }

    /// Send one command and wait for its reply.
    pub async fn send(&mut self, command: &str) -> String {
        self.send_raw(format!("{command}\n")).await;
        self.read_line()
            .await
            .unwrap_or_else(|| panic!("connection closed after {command:?}"))
    }

    /// Write bytes exactly as given.
    pub async fn send_raw(&mut self, bytes: impl AsRef<[u8]>) {
        self.writer.write_all(bytes.as_ref()).await.unwrap();
    }

    /// Next reply line, or `None` once the server closed the connection.
    pub async fn read_line(&mut self) -> Option<String> {
        tokio::time::timeout(Duration::from_secs(5), self.lines.next_line())
            .await
            .expect("timed out waiting for reply")
            .unwrap()
    }
}
