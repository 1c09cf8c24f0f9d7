//! Jira Upstream
//!
//! Server-side client for the Jira Cloud REST API. The proxy routes pass
//! bodies through with minimal shape assumptions, so everything here works
//! on raw JSON values. The API token never leaves the server.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

use crate::config::TrackerConfig;

/// Tracker operations the proxy forwards
#[async_trait]
pub trait TrackerUpstream: Send + Sync {
    /// Forward a search body (`{jql, startAt, maxResults, fields}`)
    async fn search(&self, body: Value) -> Result<Value, UpstreamError>;

    /// List projects
    async fn projects(&self) -> Result<Value, UpstreamError>;

    /// List user accounts, as returned by the tracker
    async fn users(&self) -> Result<Value, UpstreamError>;
}

/// Jira Cloud REST v3 upstream
pub struct JiraUpstream {
    client: Client,
    config: TrackerConfig,
}

impl JiraUpstream {
    /// Create a new upstream client with the given configuration
    pub fn new(config: TrackerConfig) -> Result<Self, UpstreamError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(concat!("jira-dashboard/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}/rest/api/3/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn ensure_configured(&self) -> Result<(), UpstreamError> {
        if self.config.is_configured() {
            Ok(())
        } else {
            Err(UpstreamError::NotConfigured)
        }
    }

    /// Send an authenticated request and decode the JSON body
    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Value, UpstreamError> {
        self.ensure_configured()?;

        let response = request
            .basic_auth(&self.config.email, Some(&self.config.api_token))
            .header("Accept", "application/json")
            .send()
            .await?;

        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            Err(UpstreamError::Api { status, message })
        }
    }
}

#[async_trait]
impl TrackerUpstream for JiraUpstream {
    async fn search(&self, body: Value) -> Result<Value, UpstreamError> {
        let url = self.url("search");
        self.send(self.client.post(&url).json(&body)).await
    }

    async fn projects(&self) -> Result<Value, UpstreamError> {
        let url = self.url("project");
        self.send(self.client.get(&url)).await
    }

    async fn users(&self) -> Result<Value, UpstreamError> {
        let url = self.url("users/search");
        self.send(self.client.get(&url).query(&[("maxResults", "1000")]))
            .await
    }
}

/// Keep only human accounts; entries without an `accountType` are kept
pub fn filter_human_accounts(users: Value) -> Value {
    match users {
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .filter(|u| {
                    u.get("accountType")
                        .and_then(Value::as_str)
                        .map_or(true, |t| t == "atlassian")
                })
                .collect(),
        ),
        other => other,
    }
}

/// Errors that can occur when calling the upstream tracker
#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("Tracker is not configured (base_url, email and api_token are required)")]
    NotConfigured,

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Tracker API error {status}: {message}")]
    Api { status: u16, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn configured() -> TrackerConfig {
        TrackerConfig {
            base_url: "https://acme.atlassian.net/".into(),
            email: "ops@acme.test".into(),
            api_token: "token".into(),
            request_timeout_secs: 5,
        }
    }

    #[test]
    fn test_url_building() {
        let upstream = JiraUpstream::new(configured()).unwrap();
        assert_eq!(
            upstream.url("search"),
            "https://acme.atlassian.net/rest/api/3/search"
        );
    }

    #[tokio::test]
    async fn test_unconfigured_fails_fast() {
        let upstream = JiraUpstream::new(TrackerConfig::default()).unwrap();
        let err = upstream.projects().await.unwrap_err();
        assert!(matches!(err, UpstreamError::NotConfigured));
    }

    #[test]
    fn test_filter_human_accounts() {
        let users = json!([
            { "accountId": "1", "displayName": "Ada", "accountType": "atlassian" },
            { "accountId": "2", "displayName": "Automation", "accountType": "app" },
            { "accountId": "3", "displayName": "Legacy" }
        ]);

        let filtered = filter_human_accounts(users);
        let ids: Vec<_> = filtered
            .as_array()
            .unwrap()
            .iter()
            .map(|u| u["accountId"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["1", "3"]);
    }
}
