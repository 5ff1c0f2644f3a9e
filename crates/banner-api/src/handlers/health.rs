//! Health check handlers

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use banner_service::{HealthResponse, ReadinessResponse};

use crate::state::AppState;

/// Liveness probe
///
/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Readiness probe
///
/// GET /health/ready
///
/// Verifies that a database connection can be acquired.
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<ReadinessResponse>) {
    let database_healthy = state.pool().acquire().await.is_ok();

    let status = if database_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(ReadinessResponse::ready(database_healthy)))
}
