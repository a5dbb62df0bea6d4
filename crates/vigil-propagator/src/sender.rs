// Event delivery
//
// One POST per attempt against the receiver endpoint, bounded by the client
// timeout. Failures are classified before the loop reduces them to a
// boolean; nothing here retries.

use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;
use tracing::{error, info, warn};

use vigil_core::Event;

/// Errors that can occur while delivering an event
#[derive(Debug, Error)]
pub enum SendError {
    /// The receiver answered outside the 2xx range
    #[error("Unexpected status {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// The request did not complete within the configured timeout
    #[error("Request timed out")]
    Timeout,

    /// No connection to the receiver could be established
    #[error("Connection failed: {0}")]
    Connect(String),

    /// Any other transport failure
    #[error("Request failed: {0}")]
    Transport(String),
}

/// HTTP sender for propagated events
pub struct EventSender {
    client: reqwest::Client,
    endpoint: String,
}

impl EventSender {
    /// Create a sender with a bounded per-request timeout
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Deliver one event, keeping the failure cause
    pub async fn try_send(&self, event: &Event) -> Result<(), SendError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(event)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SendError::Timeout
                } else if e.is_connect() {
                    SendError::Connect(e.to_string())
                } else {
                    SendError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(SendError::Status { status, body })
    }

    /// Deliver one event, reduced to the boolean the loop consumes
    ///
    /// Success means the receiver answered 2xx. Every failure is logged with
    /// its classification; the same event is never retried.
    pub async fn send(&self, event: &Event) -> bool {
        match self.try_send(event).await {
            Ok(()) => {
                info!(event_type = %event.event_type, "Event sent to {}", self.endpoint);
                true
            }
            Err(SendError::Status { status, body }) => {
                warn!("Receiver rejected event with status {}: {}", status, body);
                false
            }
            Err(SendError::Timeout) => {
                error!("Timed out sending event to {}", self.endpoint);
                false
            }
            Err(SendError::Connect(cause)) => {
                error!("Could not connect to {}: {}", self.endpoint, cause);
                false
            }
            Err(e) => {
                error!("Failed to send event: {}", e);
                false
            }
        }
    }
}
