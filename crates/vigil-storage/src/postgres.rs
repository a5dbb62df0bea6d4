// Database-backed EventStore implementation
//
// This module implements the core EventStore trait for persisting events to
// PostgreSQL. Each call runs against its own short-lived connection:
// connect, begin, insert, commit, close. Dropping the transaction without a
// commit rolls it back, and the connection is closed on every path.

use async_trait::async_trait;
use sqlx::postgres::PgConnection;
use sqlx::Connection;
use tracing::{error, warn};

use vigil_core::{Event, EventStore, Result, StoreError};

use crate::config::DbConfig;

// ============================================================================
// PostgresEventStore - Stores events in PostgreSQL
// ============================================================================

/// PostgreSQL-backed event store
///
/// Opens a fresh connection for every insert, so the store can be shared
/// freely across concurrent handler invocations.
pub struct PostgresEventStore {
    config: DbConfig,
    insert_statement: String,
}

impl PostgresEventStore {
    pub fn new(config: DbConfig) -> Self {
        let insert_statement = format!(
            "INSERT INTO {} (event_type, event_payload) VALUES ($1, $2)",
            quote_ident(&config.table_name)
        );
        Self {
            config,
            insert_statement,
        }
    }

    async fn insert(&self, conn: &mut PgConnection, event: &Event) -> Result<()> {
        let mut tx = conn.begin().await.map_err(|e| {
            error!("Failed to begin transaction: {}", e);
            StoreError::query(e.to_string())
        })?;

        sqlx::query(&self.insert_statement)
            .bind(&event.event_type)
            .bind(&event.event_payload)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                error!("Failed to insert event: {}", e);
                StoreError::query(e.to_string())
            })?;

        tx.commit().await.map_err(|e| {
            error!("Failed to commit event insert: {}", e);
            StoreError::query(e.to_string())
        })
    }
}

#[async_trait]
impl EventStore for PostgresEventStore {
    async fn store(&self, event: &Event) -> Result<()> {
        let mut conn = PgConnection::connect_with(&self.config.connect_options())
            .await
            .map_err(|e| {
                error!("Failed to connect to database: {}", e);
                StoreError::connection(e.to_string())
            })?;

        let result = self.insert(&mut conn, event).await;

        if let Err(e) = conn.close().await {
            warn!("Failed to close database connection: {}", e);
        }

        result
    }
}

/// Quote a SQL identifier
///
/// Wraps the name in double quotes and doubles embedded double quotes, so a
/// configured table name can never terminate the identifier early.
fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
