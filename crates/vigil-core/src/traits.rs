// Core traits for pluggable backends
//
// The EventStore trait lets the receiver run against different backends:
// - A PostgreSQL implementation for production
// - In-memory implementations for examples and testing

use async_trait::async_trait;

use crate::error::Result;
use crate::event::Event;

// ============================================================================
// EventStore - For persisting received events
// ============================================================================

/// Trait for persisting events
///
/// Implementations can:
/// - Store events in a database
/// - Collect events in memory for testing
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Persist a single event
    ///
    /// `Ok(())` means the event was durably stored. `Err` carries the cause;
    /// one attempt per call, no retries.
    async fn store(&self, event: &Event) -> Result<()>;
}
