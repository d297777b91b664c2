use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the content source answered its health probe.
    pub baas_healthy: bool,
}

/// GET /health -- returns service and content source health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let baas_healthy = match state.source.health_check().await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Content source health check failed");
            false
        }
    };

    let status = if baas_healthy { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        baas_healthy,
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
