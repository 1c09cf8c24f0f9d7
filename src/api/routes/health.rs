//! Health Routes
//!
//! Health check endpoints for monitoring and container health checks.
//!
//! - GET /health/live - Liveness check (process is alive)
//! - GET /health/ready - Readiness check (priority storage reachable)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;

/// GET /health/live
///
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Returns 200 if the priority data directory is reachable.
pub async fn readiness(State(state): State<Arc<AppState>>) -> StatusCode {
    if check_storage_health(&state).await {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

/// GET /health
///
/// Full health status with component details.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let storage_ok = check_storage_health(&state).await;
    let tracker_ok = state.tracker_configured;

    let status = if storage_ok && tracker_ok {
        "healthy"
    } else {
        "degraded"
    };

    Json(HealthResponse {
        status: status.to_string(),
        priorities: if storage_ok { "ok" } else { "error" }.to_string(),
        tracker: if tracker_ok { "configured" } else { "unconfigured" }.to_string(),
        priority_count: state.priorities.all().await.len(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// The data directory holding priorities.json must still exist
async fn check_storage_health(state: &AppState) -> bool {
    match state.priorities.path().parent() {
        Some(dir) => tokio::fs::metadata(dir)
            .await
            .map(|m| m.is_dir())
            .unwrap_or(false),
        None => false,
    }
}
