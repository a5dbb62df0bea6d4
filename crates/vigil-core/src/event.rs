// Event entity type and validation
//
// An Event is the sole domain entity: a free-form category label plus a
// free-form payload. The system assigns no identity, timestamp, or ordering;
// persistence order is insertion order.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Event - a single security event notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Event {
    /// Free-form category label; no enumeration enforced
    pub event_type: String,
    /// Free-form content; may be empty, arbitrarily long, arbitrary Unicode
    pub event_payload: String,
}

impl Event {
    /// Create a new event
    pub fn new(event_type: impl Into<String>, event_payload: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            event_payload: event_payload.into(),
        }
    }

    /// Extract an event from an arbitrary JSON value
    ///
    /// Returns `Some` only when the value passes [`validate_event`]. Extra
    /// keys are ignored; only the two contract fields are copied out.
    pub fn from_value(value: &Value) -> Option<Self> {
        if !validate_event(value) {
            return None;
        }
        let map = value.as_object()?;
        Some(Self {
            event_type: map.get("event_type")?.as_str()?.to_string(),
            event_payload: map.get("event_payload")?.as_str()?.to_string(),
        })
    }
}

/// Check whether a JSON value has the shape of an event
///
/// True iff the value is an object with `event_type` and `event_payload`
/// keys, both holding strings (empty strings are valid). Everything else is
/// rejected. Total over all JSON values.
pub fn validate_event(value: &Value) -> bool {
    match value.as_object() {
        Some(map) => {
            matches!(map.get("event_type"), Some(Value::String(_)))
                && matches!(map.get("event_payload"), Some(Value::String(_)))
        }
        None => false,
    }
}
