//! # Health and Metrics
//!
//! Routes:
//! - GET /health — liveness check, unauthenticated
//! - GET /metrics — Prometheus text exposition, when the exporter is
//!   installed

use axum::extract::State;
use axum::Json;

use cetplan_auth::IdentityProvider;

use crate::error::AppError;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Service is up"))
)]
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

pub async fn metrics<P: IdentityProvider>(
    State(state): State<AppState<P>>,
) -> Result<String, AppError> {
    state
        .metrics
        .as_ref()
        .map(|handle| handle.render())
        .ok_or_else(|| AppError::NotFound("metrics exporter not installed".into()))
}
