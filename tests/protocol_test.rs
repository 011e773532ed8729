//! End-to-end protocol tests over real TCP connections.

use std::time::Duration;

mod common;

use common::{start_server, LineClient};

#[tokio::test]
async fn fresh_server_lists_every_seat() {
    let server = start_server(20).await;
    let mut client = LineClient::connect(server.addr).await;

    let expected = format!(
        "AVAILABLE {}",
        (1..=20).map(|n| n.to_string()).collect::<Vec<_>>().join(" ")
    );
    assert_eq!(client.send("AVAILABLE").await, expected);
    assert_eq!(client.send("available").await, expected);
}

#[tokio::test]
async fn book_then_cancel_round_trip() {
    let server = start_server(10).await;
    let mut client = LineClient::connect(server.addr).await;

    assert_eq!(client.send("BOOK 2 7 3").await, "OK BOOKED 7 3");
    assert_eq!(client.send("AVAILABLE").await, "AVAILABLE 1 2 4 5 6 8 9 10");
    assert_eq!(client.send("CANCEL 2 3 7").await, "OK CANCELLED 3 7");
    assert_eq!(client.send("AVAILABLE").await, "AVAILABLE 1 2 3 4 5 6 7 8 9 10");
}

#[tokio::test]
async fn ownership_is_per_connection() {
    let server = start_server(10).await;
    let mut x = LineClient::connect(server.addr).await;
    let mut y = LineClient::connect(server.addr).await;

    assert_eq!(x.send("BOOK 1 4").await, "OK BOOKED 4");
    assert_eq!(y.send("CANCEL 1 4").await, "FAIL seat 4 was not booked by you");
    assert_eq!(y.send("BOOK 1 4").await, "FAIL seat 4 already booked");
    assert_eq!(y.send("CANCEL 1 5").await, "FAIL seat 5 is not booked");
    assert_eq!(x.send("CANCEL 1 4").await, "OK CANCELLED 4");
    assert_eq!(y.send("BOOK 1 4").await, "OK BOOKED 4");
}

#[tokio::test]
async fn multi_seat_book_is_atomic() {
    let server = start_server(10).await;
    let mut x = LineClient::connect(server.addr).await;
    let mut y = LineClient::connect(server.addr).await;

    assert_eq!(x.send("BOOK 1 6").await, "OK BOOKED 6");
    assert_eq!(y.send("BOOK 2 5 6").await, "FAIL seat 6 already booked");
    assert!(!server.store.snapshot()[4].is_booked());
    assert_eq!(y.send("AVAILABLE").await, "AVAILABLE 1 2 3 4 5 7 8 9 10");
}

#[tokio::test]
async fn malformed_input_gets_fail_and_connection_stays_open() {
    let server = start_server(20).await;
    let mut client = LineClient::connect(server.addr).await;

    assert_eq!(client.send("BOOK 2 5").await, "FAIL count mismatch: expected 2 seats, got 1");
    assert_eq!(client.send("BOOK 1 5 5").await, "FAIL duplicate seat 5");
    assert_eq!(client.send("BOOK 0").await, "FAIL invalid count");
    assert_eq!(client.send("BOOK 1 21").await, "FAIL invalid seat number 21");
    assert_eq!(client.send("BOOK").await, "FAIL invalid command format");
    assert_eq!(client.send("DANCE").await, "FAIL unknown command");
    assert_eq!(server.store.available_count(), 20);

    assert_eq!(client.send("BOOK 1 5").await, "OK BOOKED 5");
}

#[tokio::test]
async fn garbage_bytes_and_long_lines_do_not_end_the_connection() {
    let server = start_server(5).await;
    let mut client = LineClient::connect(server.addr).await;

    client.send_raw(b"BOOK 1 \xff\n").await;
    assert_eq!(
        client.read_line().await.as_deref(),
        Some("FAIL invalid seat number \u{fffd}")
    );

    client.send_raw(format!("BOOK 1 {}\n", "3 ".repeat(4096))).await;
    assert_eq!(client.read_line().await.as_deref(), Some("FAIL line too long"));

    assert_eq!(client.send("BOOK 1 3").await, "OK BOOKED 3");
    assert_eq!(client.send("AVAILABLE").await, "AVAILABLE 1 2 4 5");
}

#[tokio::test]
async fn fully_booked_reports_none() {
    let server = start_server(3).await;
    let mut client = LineClient::connect(server.addr).await;

    assert_eq!(client.send("BOOK 3 1 2 3").await, "OK BOOKED 1 2 3");
    assert_eq!(client.send("AVAILABLE").await, "AVAILABLE NONE");
}

#[tokio::test]
async fn pipelined_lines_are_answered_in_order() {
    let server = start_server(5).await;
    let mut client = LineClient::connect(server.addr).await;

    client.send_raw("BOOK 1 2\r\n\n  \nAVAILABLE\nCANCEL 1 2\n").await;
    assert_eq!(client.read_line().await.as_deref(), Some("OK BOOKED 2"));
    assert_eq!(client.read_line().await.as_deref(), Some("AVAILABLE 1 3 4 5"));
    assert_eq!(client.read_line().await.as_deref(), Some("OK CANCELLED 2"));
}

#[tokio::test]
async fn exit_closes_connection_but_keeps_bookings() {
    let server = start_server(5).await;
    let mut client = LineClient::connect(server.addr).await;

    assert_eq!(client.send("BOOK 2 1 2").await, "OK BOOKED 1 2");
    client.send_raw("EXIT\n").await;
    assert_eq!(client.read_line().await, None);

    let mut other = LineClient::connect(server.addr).await;
    assert_eq!(other.send("AVAILABLE").await, "AVAILABLE 3 4 5");
    assert_eq!(other.send("CANCEL 1 1").await, "FAIL seat 1 was not booked by you");
}

#[tokio::test]
async fn shutdown_closes_sessions_and_stops_server() {
    let server = start_server(5).await;
    let mut client = LineClient::connect(server.addr).await;
    assert_eq!(client.send("AVAILABLE").await, "AVAILABLE 1 2 3 4 5");

    server.shutdown.trigger();
    assert_eq!(client.read_line().await, None);

    let result = tokio::time::timeout(Duration::from_secs(5), server.handle)
        .await
        .expect("server should stop")
        .unwrap();
    assert!(result.is_ok());
}
