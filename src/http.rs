//! Shared reqwest plumbing for the native dashboard clients.

use dashboard_core::ClientError;
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;

/// Build the HTTP client used by the dashboard clients
pub(crate) fn build_client() -> Result<reqwest::Client, ClientError> {
    reqwest::Client::builder()
        .user_agent(concat!("jira-dashboard/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| ClientError::Transport(e.to_string()))
}

/// Send a request and fail on anything but a 2xx status
pub(crate) async fn send(request: RequestBuilder) -> Result<Response, ClientError> {
    let response = request
        .send()
        .await
        .map_err(|e| ClientError::Transport(e.to_string()))?;

    if response.status().is_success() {
        Ok(response)
    } else {
        let status = response.status().as_u16();
        let message = response.text().await.unwrap_or_default();
        Err(ClientError::Status { status, message })
    }
}

/// Send a request and decode a JSON body
pub(crate) async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ClientError> {
    let response = send(request).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| ClientError::Decode(e.to_string()))
}

/// Join a base URL and a path without doubling slashes
pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("http://h:1/", "/api/jira"), "http://h:1/api/jira");
        assert_eq!(join_url("http://h:1", "api/jira/"), "http://h:1/api/jira/");
    }
}
