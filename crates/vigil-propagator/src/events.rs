// Events file loading
//
// The sample events are read once at startup and held immutable for the
// process lifetime. The file must be a JSON array of event objects; extra
// keys on an entry are ignored.

use std::path::Path;

use thiserror::Error;
use tracing::{error, info};

use vigil_core::Event;

/// Errors that can occur while loading the events file
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read
    #[error("Failed to read events file: {0}")]
    Io(String),

    /// The contents are not a JSON array of events
    #[error("Failed to parse events file: {0}")]
    Parse(String),
}

/// Try to load events, keeping the failure cause
pub fn try_load_events(path: &Path) -> Result<Vec<Event>, LoadError> {
    let contents = std::fs::read_to_string(path).map_err(|e| LoadError::Io(e.to_string()))?;
    serde_json::from_str(&contents).map_err(|e| LoadError::Parse(e.to_string()))
}

/// Load events for the propagation loop
///
/// Failures are logged and reduced to an empty list; the caller exits
/// cleanly instead of looping over nothing.
pub fn load_events(path: &Path) -> Vec<Event> {
    match try_load_events(path) {
        Ok(events) => {
            info!("Loaded {} events from {}", events.len(), path.display());
            events
        }
        Err(e) => {
            error!("Could not load events from {}: {}", path.display(), e);
            Vec::new()
        }
    }
}
