// Synthetic event traffic for the Vigil receiver
//
// This crate replays sample events from a JSON file against the receiver's
// POST /event endpoint at a fixed period.
//
// Key design decisions:
// - The events file is loaded once at startup; load failures reduce to an
//   empty list and a clean exit instead of a crash
// - Each tick draws one event uniformly at random; a failed delivery is
//   never retried, the next tick simply draws again
// - Delivery failures are classified (status, timeout, connect, transport)
//   before being reduced to the boolean the loop consumes

pub mod config;
pub mod events;
pub mod sender;

// Re-exports for convenience
pub use config::PropagatorConfig;
pub use events::{load_events, try_load_events, LoadError};
pub use sender::{EventSender, SendError};
