//! Concurrency tests: contended bookings must never double-book.
//!
//! Run with: `cargo test --test concurrency_test -- --nocapture`

use std::collections::HashMap;
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use seat_reservation::net::ConnectionId;
use seat_reservation::store::{Outcome, SeatId, SeatStore};

mod common;

use common::{start_server, LineClient};

const SEATS: u32 = 20;

/// Random distinct seat subsets, one per client.
fn random_requests(clients: usize, seed: u64) -> Vec<Vec<u32>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let all: Vec<u32> = (1..=SEATS).collect();
    (0..clients)
        .map(|_| {
            let size = rng.gen_range(1..=4);
            all.choose_multiple(&mut rng, size).copied().collect()
        })
        .collect()
}

fn book_line(seats: &[u32]) -> String {
    let ids: Vec<String> = seats.iter().map(u32::to_string).collect();
    format!("BOOK {} {}", seats.len(), ids.join(" "))
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_clients_never_double_book() {
    let server = start_server(SEATS).await;
    let requests = random_requests(64, 7);

    let mut tasks = Vec::new();
    for seats in requests {
        let addr = server.addr;
        tasks.push(tokio::spawn(async move {
            let mut client = LineClient::connect(addr).await;
            let reply = client.send(&book_line(&seats)).await;
            (seats, reply)
        }));
    }

    let mut winners: HashMap<u32, usize> = HashMap::new();
    for task in tasks {
        let (seats, reply) = task.await.unwrap();
        if reply.starts_with("OK BOOKED") {
            for seat in seats {
                *winners.entry(seat).or_default() += 1;
            }
        } else {
            assert!(reply.starts_with("FAIL seat "), "unexpected reply: {reply}");
            assert!(reply.ends_with("already booked"), "unexpected reply: {reply}");
        }
    }

    // Every booked seat was granted to exactly one request, and only granted
    // seats are booked.
    assert!(winners.values().all(|&count| count == 1), "double booking: {winners:?}");
    for seat in server.store.snapshot() {
        assert_eq!(
            seat.is_booked(),
            winners.contains_key(&seat.id().as_u32()),
            "seat {} state disagrees with replies",
            seat.id()
        );
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn last_seat_goes_to_one_of_many() {
    let server = start_server(1).await;

    let mut tasks = Vec::new();
    for _ in 0..50 {
        let addr = server.addr;
        tasks.push(tokio::spawn(async move {
            let mut client = LineClient::connect(addr).await;
            client.send("BOOK 1 1").await
        }));
    }

    let mut booked = 0;
    for task in tasks {
        match task.await.unwrap().as_str() {
            "OK BOOKED 1" => booked += 1,
            "FAIL seat 1 already booked" => {}
            other => panic!("unexpected reply: {other}"),
        }
    }

    assert_eq!(booked, 1);
    assert_eq!(server.store.available_count(), 0);
}

#[test]
fn store_consistent_under_mixed_book_and_cancel() {
    let store = Arc::new(SeatStore::new(SEATS));
    let requests = random_requests(16, 42);

    let handles: Vec<_> = requests
        .into_iter()
        .map(|seats| {
            let store = Arc::clone(&store);
            std::thread::spawn(move || {
                let owner = ConnectionId::new();
                let ids: Vec<SeatId> = seats.into_iter().map(SeatId::new).collect();
                let mut held = false;
                for _ in 0..200 {
                    if held {
                        assert_eq!(store.cancel(&ids, owner), Outcome::Cancelled(ids.clone()));
                        held = false;
                    } else if let Outcome::Booked(_) = store.book(&ids, owner) {
                        held = true;
                    }
                    // Whatever we hold must still be ours.
                    if held {
                        let snapshot = store.snapshot();
                        for id in &ids {
                            assert_eq!(snapshot[(id.as_u32() - 1) as usize].owner(), Some(owner));
                        }
                    }
                }
                if held {
                    store.cancel(&ids, owner);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(store.available_count(), SEATS as usize);
}
