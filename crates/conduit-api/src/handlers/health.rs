//! Health check handlers
//!
//! Liveness and readiness probes, mounted outside `/api` and outside auth.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Liveness response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Readiness response
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub database: &'static str,
}

/// Liveness probe: the process is up
///
/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Readiness probe: the database answers
///
/// GET /health/ready
pub async fn readiness_check(
    State(state): State<AppState>,
) -> ApiResult<Json<ReadinessResponse>> {
    state
        .service_context()
        .pool()
        .acquire()
        .await
        .map_err(ApiError::internal)?;

    Ok(Json(ReadinessResponse {
        status: "ok",
        database: "ok",
    }))
}
