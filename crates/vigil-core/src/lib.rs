// Event Ingestion Abstractions
//
// This crate provides the shared vocabulary for the Vigil pipeline: the Event
// entity, the validation predicate applied to raw request bodies, and the
// EventStore trait that keeps the receiver store-agnostic.
//
// Key design decisions:
// - Validation is a total predicate over serde_json::Value (never panics)
// - Storage is pluggable via the EventStore trait (async_trait)
// - Store failures carry their cause as a tagged StoreError
// - OpenAPI schema derives are feature-gated so non-API consumers skip utoipa

pub mod error;
pub mod event;
pub mod traits;

// In-memory implementations for examples and testing
pub mod memory;

// Re-exports for convenience
pub use error::{Result, StoreError};
pub use event::{validate_event, Event};
pub use memory::{FailingEventStore, InMemoryEventStore};
pub use traits::EventStore;
