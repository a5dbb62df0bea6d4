// Event ingestion HTTP route
//
// The body is read raw and parsed by hand instead of using a typed JSON
// extractor, so a parse failure and a shape failure produce their own
// distinct 400 responses.

use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use utoipa::ToSchema;

use vigil_core::{Event, EventStore};

/// App state for event routes
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn EventStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn EventStore>) -> Self {
        Self { store }
    }
}

/// Create event routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/event", post(receive_event))
        // Payload length is unbounded by contract, so the default body cap
        // must not reject oversized events with a 413
        .layer(DefaultBodyLimit::disable())
        .with_state(state)
}

/// Body returned when an event is accepted and stored
#[derive(Debug, Serialize, ToSchema)]
pub struct EventResponse {
    pub status: String,
    pub message: String,
}

impl EventResponse {
    fn stored() -> Self {
        Self {
            status: "success".to_string(),
            message: "Event stored successfully".to_string(),
        }
    }
}

/// Ingestion error returned to the client
#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    pub detail: String,
    #[serde(skip)]
    pub status: StatusCode,
}

impl ApiError {
    pub fn bad_request(detail: &str) -> Self {
        Self {
            detail: detail.to_string(),
            status: StatusCode::BAD_REQUEST,
        }
    }

    pub fn internal(detail: &str) -> Self {
        Self {
            detail: detail.to_string(),
            status: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

/// POST /event - Receive and store a single event
#[utoipa::path(
    post,
    path = "/event",
    request_body = Event,
    responses(
        (status = 200, description = "Event stored successfully", body = EventResponse),
        (status = 400, description = "Body is not JSON or lacks the event shape"),
        (status = 500, description = "Event could not be stored")
    ),
    tag = "events"
)]
pub async fn receive_event(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<EventResponse>, ApiError> {
    let value: Value = serde_json::from_slice(&body).map_err(|e| {
        tracing::warn!("Rejected body that is not JSON: {}", e);
        ApiError::bad_request("Invalid JSON")
    })?;
    tracing::info!("Received event: {}", value);

    let event = Event::from_value(&value).ok_or_else(|| {
        tracing::warn!("Rejected JSON without event shape: {}", value);
        ApiError::bad_request("Invalid event format")
    })?;

    state.store.store(&event).await.map_err(|e| {
        tracing::error!("Failed to store event: {}", e);
        ApiError::internal("Failed to store event")
    })?;

    tracing::info!(event_type = %event.event_type, "Event stored");
    Ok(Json(EventResponse::stored()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use serde_json::json;
    use tower::ServiceExt;
    use vigil_core::{FailingEventStore, InMemoryEventStore};

    fn app_with_store(store: Arc<dyn EventStore>) -> Router {
        routes(AppState::new(store))
    }

    fn post_event(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/event")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_receive_event_stores_and_responds_success() {
        let store = Arc::new(InMemoryEventStore::new());
        let app = app_with_store(store.clone());

        let response = app
            .oneshot(post_event(
                r#"{"event_type": "login_attempt", "event_payload": "user: admin"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({"status": "success", "message": "Event stored successfully"})
        );
        assert_eq!(
            store.events().await,
            vec![Event::new("login_attempt", "user: admin")]
        );
    }

    #[tokio::test]
    async fn test_receive_event_rejects_invalid_json() {
        let store = Arc::new(InMemoryEventStore::new());
        let app = app_with_store(store.clone());

        let response = app.oneshot(post_event("this is not json")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, json!({"detail": "Invalid JSON"}));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_receive_event_rejects_invalid_shape() {
        let store = Arc::new(InMemoryEventStore::new());
        let app = app_with_store(store.clone());

        let response = app
            .oneshot(post_event(r#"{"event_type": "missing payload"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({"detail": "Invalid event format"})
        );
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_receive_event_rejects_non_object_json() {
        let store = Arc::new(InMemoryEventStore::new());
        let app = app_with_store(store.clone());

        let response = app.oneshot(post_event("[1, 2, 3]")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({"detail": "Invalid event format"})
        );
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_receive_event_ignores_extra_keys() {
        let store = Arc::new(InMemoryEventStore::new());
        let app = app_with_store(store.clone());

        let response = app
            .oneshot(post_event(
                r#"{"event_type": "scan", "event_payload": "ports 1-1024", "severity": "high"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(store.events().await, vec![Event::new("scan", "ports 1-1024")]);
    }

    #[tokio::test]
    async fn test_receive_event_accepts_multi_megabyte_payload() {
        let store = Arc::new(InMemoryEventStore::new());
        let app = app_with_store(store.clone());

        let body = json!({
            "event_type": "bulk",
            "event_payload": "x".repeat(3 * 1024 * 1024)
        })
        .to_string();

        let response = app.oneshot(post_event(&body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let events = store.events().await;
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_payload.len(), 3 * 1024 * 1024);
    }

    #[tokio::test]
    async fn test_receive_event_accepts_empty_strings() {
        let store = Arc::new(InMemoryEventStore::new());
        let app = app_with_store(store.clone());

        let response = app
            .oneshot(post_event(r#"{"event_type": "", "event_payload": ""}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_receive_event_reports_storage_failure() {
        let app = app_with_store(Arc::new(FailingEventStore::default()));

        let response = app
            .oneshot(post_event(
                r#"{"event_type": "doomed", "event_payload": "will not persist"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({"detail": "Failed to store event"})
        );
    }
}
