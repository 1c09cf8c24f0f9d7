//! Issue Tracker Client
//!
//! Native client for the dashboard backend's tracker proxy
//! (`/api/jira/*`). Builds JQL from the filter set and returns typed results.

use async_trait::async_trait;
use dashboard_core::types::sort_assignees;
use dashboard_core::{
    Assignee, ClientError, ClientResult, IssueSource, Project, SearchParams, SearchRequest,
    SearchResponse,
};
use reqwest::Client;

use crate::http::{build_client, join_url, send_json};

/// Client for the tracker proxy
#[derive(Debug, Clone)]
pub struct TrackerClient {
    client: Client,
    api_base: String,
}

impl TrackerClient {
    /// Create a client for a backend base URL (e.g. "http://localhost:3001")
    pub fn new(backend_url: &str) -> ClientResult<Self> {
        Ok(Self {
            client: build_client()?,
            api_base: join_url(backend_url, "api/jira"),
        })
    }

    /// Proxy root, e.g. "http://localhost:3001/api/jira"
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Fetch assignees without the soft-failure policy
    pub async fn try_list_assignees(&self) -> ClientResult<Vec<Assignee>> {
        let url = join_url(&self.api_base, "users");
        let mut users: Vec<Assignee> = send_json(self.client.get(&url)).await?;
        sort_assignees(&mut users);
        tracing::debug!(count = users.len(), "Fetched users from tracker");
        Ok(users)
    }
}

#[async_trait(?Send)]
impl IssueSource for TrackerClient {
    async fn search(&self, params: &SearchParams) -> ClientResult<SearchResponse> {
        let url = join_url(&self.api_base, "search");
        let request = SearchRequest::from_params(params);

        tracing::debug!(url = %url, jql = %request.jql, "Searching issues");

        send_json(self.client.post(&url).json(&request))
            .await
            .map_err(|e| {
                tracing::error!(
                    url = %url,
                    jql = %request.jql,
                    start_at = request.start_at,
                    max_results = request.max_results,
                    status = ?e.status(),
                    error = %e,
                    "Error fetching issues"
                );
                e
            })
    }

    async fn list_projects(&self) -> ClientResult<Vec<Project>> {
        let url = format!("{}/", self.api_base);

        send_json(self.client.get(&url)).await.map_err(|e: ClientError| {
            tracing::error!(url = %url, status = ?e.status(), error = %e, "Error fetching projects");
            e
        })
    }

    async fn list_assignees(&self) -> Vec<Assignee> {
        match self.try_list_assignees().await {
            Ok(users) => users,
            Err(e) => {
                tracing::error!(error = %e, "Error fetching users");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_base() {
        let client = TrackerClient::new("http://localhost:3001/").unwrap();
        assert_eq!(client.api_base(), "http://localhost:3001/api/jira");
    }

    #[tokio::test]
    async fn test_unreachable_backend() {
        // Port 9 (discard) is closed on test machines
        let client = TrackerClient::new("http://127.0.0.1:9").unwrap();

        let err = client.search(&SearchParams::default()).await.unwrap_err();
        assert!(matches!(err, ClientError::Transport(_)));
        assert!(client.list_projects().await.is_err());
        assert!(client.list_assignees().await.is_empty());
    }
}
