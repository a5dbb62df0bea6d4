// Error types for event persistence

use thiserror::Error;

/// Result type alias for storage operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur while persisting an event
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing database could not be reached or refused the session
    #[error("Connection error: {0}")]
    Connection(String),

    /// The database rejected the insert or the transaction
    #[error("Query error: {0}")]
    Query(String),
}

impl StoreError {
    /// Create a connection error
    pub fn connection(msg: impl Into<String>) -> Self {
        StoreError::Connection(msg.into())
    }

    /// Create a query error
    pub fn query(msg: impl Into<String>) -> Self {
        StoreError::Query(msg.into())
    }
}
