//! Priority Override Client
//!
//! Native client for the backend's `/api/priorities` endpoints.

use async_trait::async_trait;
use dashboard_core::{ClientResult, CustomPriorities, PriorityStore, SetPriorityRequest};
use reqwest::Client;

use crate::http::{build_client, join_url, send, send_json};

/// Client for the priority override endpoints
#[derive(Debug, Clone)]
pub struct PriorityClient {
    client: Client,
    api_base: String,
}

impl PriorityClient {
    /// Create a client for a backend base URL (e.g. "http://localhost:3001")
    pub fn new(backend_url: &str) -> ClientResult<Self> {
        Ok(Self {
            client: build_client()?,
            api_base: join_url(backend_url, "api/priorities"),
        })
    }

    fn entry_url(&self, issue_key: &str) -> String {
        format!("{}/{}", self.api_base, urlencoding::encode(issue_key))
    }

    /// Fetch the override map without the soft-failure policy
    pub async fn try_get(&self) -> ClientResult<CustomPriorities> {
        send_json(self.client.get(&self.api_base)).await
    }
}

#[async_trait(?Send)]
impl PriorityStore for PriorityClient {
    async fn get(&self) -> CustomPriorities {
        match self.try_get().await {
            Ok(map) => map,
            Err(e) => {
                tracing::error!(url = %self.api_base, error = %e, "Error fetching custom priorities");
                CustomPriorities::new()
            }
        }
    }

    async fn set(&self, issue_key: &str, priority: &str) -> ClientResult<()> {
        let body = SetPriorityRequest {
            priority: priority.to_string(),
        };

        send(self.client.post(self.entry_url(issue_key)).json(&body))
            .await
            .map(|_| ())
            .map_err(|e| {
                tracing::error!(issue_key, priority, error = %e, "Error storing custom priority");
                e
            })
    }

    async fn clear(&self, issue_key: &str) -> ClientResult<()> {
        send(self.client.delete(self.entry_url(issue_key)))
            .await
            .map(|_| ())
            .map_err(|e| {
                tracing::error!(issue_key, error = %e, "Error removing custom priority");
                e
            })
    }

    async fn clear_all(&self) -> ClientResult<()> {
        send(self.client.delete(&self.api_base))
            .await
            .map(|_| ())
            .map_err(|e| {
                tracing::error!(error = %e, "Error clearing custom priorities");
                e
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_url_encodes_key() {
        let client = PriorityClient::new("http://localhost:3001").unwrap();
        assert_eq!(
            client.entry_url("OPS-1"),
            "http://localhost:3001/api/priorities/OPS-1"
        );
        assert_eq!(
            client.entry_url("A B/1"),
            "http://localhost:3001/api/priorities/A%20B%2F1"
        );
    }

    #[tokio::test]
    async fn test_get_is_soft_on_failure() {
        let client = PriorityClient::new("http://127.0.0.1:9").unwrap();
        assert!(client.get().await.is_empty());
        assert!(client.set("OPS-1", "High").await.is_err());
        assert!(client.clear("OPS-1").await.is_err());
        assert!(client.clear_all().await.is_err());
    }
}
