//! Priority Routes
//!
//! CRUD endpoints for custom priority overrides.
//!
//! - GET /api/priorities - Full issue key → label map
//! - POST /api/priorities/:issue_key - Set one override
//! - DELETE /api/priorities/:issue_key - Remove one override
//! - DELETE /api/priorities - Remove every override

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use dashboard_core::{CustomPriorities, PriorityEntry, SetPriorityRequest};
use std::sync::Arc;

use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;

/// GET /api/priorities
pub async fn list_priorities(State(state): State<Arc<AppState>>) -> Json<CustomPriorities> {
    Json(state.priorities.all().await)
}

/// POST /api/priorities/:issue_key
pub async fn set_priority(
    State(state): State<Arc<AppState>>,
    Path(issue_key): Path<String>,
    Json(req): Json<SetPriorityRequest>,
) -> ApiResult<Json<PriorityEntry>> {
    let priority = req.priority.trim();
    if priority.is_empty() {
        return Err(ApiError::Validation("priority must not be empty".into()));
    }
    if issue_key.trim().is_empty() {
        return Err(ApiError::Validation("issue key must not be empty".into()));
    }

    state.priorities.set(&issue_key, priority).await?;
    tracing::info!(issue_key = %issue_key, priority = %priority, "Stored custom priority");

    Ok(Json(PriorityEntry {
        issue_key,
        priority: priority.to_string(),
    }))
}

/// DELETE /api/priorities/:issue_key
///
/// Idempotent: removing a missing override still succeeds.
pub async fn remove_priority(
    State(state): State<Arc<AppState>>,
    Path(issue_key): Path<String>,
) -> ApiResult<StatusCode> {
    let existed = state.priorities.remove(&issue_key).await?;
    tracing::info!(issue_key = %issue_key, existed, "Removed custom priority");
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/priorities
pub async fn clear_priorities(State(state): State<Arc<AppState>>) -> ApiResult<StatusCode> {
    state.priorities.clear().await?;
    tracing::info!("Cleared all custom priorities");
    Ok(StatusCode::NO_CONTENT)
}
