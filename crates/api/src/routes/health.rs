use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::config::APP_TITLE;
use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the storage backend answered.
    pub storage_healthy: bool,
}

/// GET / -- plain-text landing response.
async fn index() -> String {
    format!("Reached {APP_TITLE}")
}

/// GET /health -- returns service and storage health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let storage_healthy = match state.storage.health_check().await {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = %err, "Storage health check failed");
            false
        }
    };

    let status = if storage_healthy { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        storage_healthy,
    })
}

/// Mount root-level routes (NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
}
