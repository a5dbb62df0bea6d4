// Database configuration
//
// Read from environment variables with defaults that match a stock local
// PostgreSQL. Malformed numeric values fall back to the default.

use sqlx::postgres::PgConnectOptions;

/// Connection settings for the events database
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: String,
    /// Target table for event inserts
    pub table_name: String,
}

impl DbConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("DATABASE_HOST").unwrap_or_else(|_| "localhost".to_string()),
            port: std::env::var("DATABASE_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5432),
            database: std::env::var("DATABASE_NAME").unwrap_or_else(|_| "events_db".to_string()),
            user: std::env::var("DATABASE_USER").unwrap_or_else(|_| "postgres".to_string()),
            password: std::env::var("DATABASE_PASSWORD")
                .unwrap_or_else(|_| "postgres".to_string()),
            table_name: std::env::var("DATABASE_TABLE_NAME")
                .unwrap_or_else(|_| "events".to_string()),
        }
    }

    /// Build sqlx connect options from this configuration
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.database)
            .username(&self.user)
            .password(&self.password)
    }
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            database: "events_db".to_string(),
            user: "postgres".to_string(),
            password: "postgres".to_string(),
            table_name: "events".to_string(),
        }
    }
}
