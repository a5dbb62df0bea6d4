// In-memory implementations for examples and testing
//
// These implementations keep all data in memory, making them perfect for:
// - Unit tests that assert on store invocations
// - Exercising the receiver without a database

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{Result, StoreError};
use crate::event::Event;
use crate::traits::EventStore;

// ============================================================================
// InMemoryEventStore - Stores events in memory
// ============================================================================

/// In-memory event store
///
/// Appends events to a Vec in insertion order.
#[derive(Debug, Default, Clone)]
pub struct InMemoryEventStore {
    events: Arc<RwLock<Vec<Event>>>,
}

impl InMemoryEventStore {
    /// Create a new in-memory event store
    pub fn new() -> Self {
        Self {
            events: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Get all stored events
    pub async fn events(&self) -> Vec<Event> {
        self.events.read().await.clone()
    }

    /// Number of stored events
    pub async fn len(&self) -> usize {
        self.events.read().await.len()
    }

    /// Whether nothing has been stored yet
    pub async fn is_empty(&self) -> bool {
        self.events.read().await.is_empty()
    }

    /// Clear all events
    pub async fn clear(&self) {
        self.events.write().await.clear();
    }
}

#[async_trait]
impl EventStore for InMemoryEventStore {
    async fn store(&self, event: &Event) -> Result<()> {
        self.events.write().await.push(event.clone());
        Ok(())
    }
}

// ============================================================================
// FailingEventStore - Always returns an error
// ============================================================================

/// Event store that always fails
///
/// Useful for testing the receiver's storage-failure path.
#[derive(Debug, Clone)]
pub struct FailingEventStore {
    message: String,
}

impl FailingEventStore {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for FailingEventStore {
    fn default() -> Self {
        Self::new("Simulated storage failure")
    }
}

#[async_trait]
impl EventStore for FailingEventStore {
    async fn store(&self, _event: &Event) -> Result<()> {
        Err(StoreError::query(self.message.clone()))
    }
}
