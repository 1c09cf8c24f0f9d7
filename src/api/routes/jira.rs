//! Tracker Proxy Routes
//!
//! Pass-through endpoints in front of the Jira REST API. Response bodies are
//! forwarded unchanged.
//!
//! - POST /api/jira/search - Search issues with JQL
//! - GET /api/jira/ - List projects
//! - GET /api/jira/users - List human user accounts

use axum::{extract::State, Json};
use dashboard_core::SearchRequest;
use serde_json::Value;
use std::sync::Arc;

use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::tracker::filter_human_accounts;

/// POST /api/jira/search
///
/// Body: `{jql, startAt, maxResults, fields}`.
pub async fn search(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SearchRequest>,
) -> ApiResult<Json<Value>> {
    if req.max_results == 0 {
        return Err(ApiError::Validation("maxResults must be positive".into()));
    }

    tracing::info!(jql = %req.jql, start_at = req.start_at, max_results = req.max_results, "Proxying search");

    let body = serde_json::to_value(&req).map_err(|e| ApiError::Internal(e.to_string()))?;
    let result = state.tracker.search(body).await?;
    Ok(Json(result))
}

/// GET /api/jira/
pub async fn list_projects(State(state): State<Arc<AppState>>) -> ApiResult<Json<Value>> {
    Ok(Json(state.tracker.projects().await?))
}

/// GET /api/jira/users
///
/// App and bot accounts are dropped before the list reaches the client.
pub async fn list_users(State(state): State<Arc<AppState>>) -> ApiResult<Json<Value>> {
    let users = state.tracker.users().await?;
    Ok(Json(filter_human_accounts(users)))
}
