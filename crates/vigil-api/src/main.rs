// Vigil API server
// Decision: The event store is built here and injected through router state,
//           never reached through a global
// Decision: Health, Swagger UI, and request tracing ride alongside the single
//           ingestion route

mod config;
mod events;

use anyhow::{Context, Result};
use axum::{routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use vigil_core::Event;
use vigil_storage::{DbConfig, PostgresEventStore};

use crate::config::ServerConfig;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(events::receive_event),
    components(schemas(Event, events::EventResponse)),
    tags(
        (name = "events", description = "Event ingestion endpoints")
    ),
    info(
        title = "Vigil API",
        version = "0.1.0",
        description = "Receiver that validates and persists security event notifications",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vigil_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("vigil-api starting...");

    // Load environment
    if let Ok(path) = dotenvy::dotenv() {
        tracing::info!("Loaded .env from {:?}", path);
    }

    let server_config = ServerConfig::from_env();
    let db_config = DbConfig::from_env();
    tracing::info!(
        host = %db_config.host,
        port = db_config.port,
        database = %db_config.database,
        table = %db_config.table_name,
        "Database configured"
    );

    // Create app state
    let store = Arc::new(PostgresEventStore::new(db_config));
    let events_state = events::AppState::new(store);

    // Build main router with health, the ingestion route, and Swagger UI
    let app = Router::new()
        .route("/health", get(health))
        .merge(events::routes(events_state))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = server_config.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
