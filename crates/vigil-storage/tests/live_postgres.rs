// Live database round trip
//
// Requires a running PostgreSQL reachable via the DATABASE_* environment
// variables, with the events table created:
//
//   CREATE TABLE events (event_type TEXT NOT NULL, event_payload TEXT NOT NULL);

use vigil_core::{Event, EventStore};
use vigil_storage::{DbConfig, PostgresEventStore};

#[tokio::test]
#[ignore] // Run with: cargo test -p vigil-storage --test live_postgres -- --ignored
async fn test_store_against_live_database() {
    let store = PostgresEventStore::new(DbConfig::from_env());

    store
        .store(&Event::new("live_round_trip", "stored by the integration test"))
        .await
        .expect("insert should succeed against a live database");
}

#[tokio::test]
#[ignore] // Run with: cargo test -p vigil-storage --test live_postgres -- --ignored
async fn test_store_unicode_payload_against_live_database() {
    let store = PostgresEventStore::new(DbConfig::from_env());

    store
        .store(&Event::new("unicode", "特殊文字 payload"))
        .await
        .expect("unicode payload should be stored verbatim");
}
