// Propagator configuration

use std::time::Duration;

/// Settings for the propagation loop
#[derive(Debug, Clone)]
pub struct PropagatorConfig {
    /// Receiver endpoint events are POSTed to
    pub endpoint: String,
    /// Path of the JSON file holding sample events
    pub events_file: String,
    /// Seconds to sleep between delivery attempts
    pub period_secs: u64,
    /// Client timeout for a single delivery
    pub timeout_secs: u64,
}

impl PropagatorConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            endpoint: std::env::var("PROPAGATOR_ENDPOINT")
                .unwrap_or_else(|_| "http://localhost:8000/event".to_string()),
            events_file: std::env::var("PROPAGATOR_EVENTS_FILE")
                .unwrap_or_else(|_| "events.json".to_string()),
            period_secs: std::env::var("PROPAGATOR_PERIOD")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
            timeout_secs: std::env::var("PROPAGATOR_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }

    /// Sleep interval between delivery attempts
    pub fn period(&self) -> Duration {
        Duration::from_secs(self.period_secs)
    }

    /// Per-request delivery timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
