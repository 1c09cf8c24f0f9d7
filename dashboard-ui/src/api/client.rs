//! HTTP API Client
//!
//! gloo-net implementations of the dashboard client traits.

use async_trait::async_trait;
use dashboard_core::types::sort_assignees;
use dashboard_core::{
    Assignee, ClientError, ClientResult, CustomPriorities, IssueSource, PriorityStore, Project,
    SearchParams, SearchRequest, SearchResponse, SetPriorityRequest,
};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

/// Issue source backed by the `/api/jira` proxy
#[derive(Debug, Clone)]
pub struct HttpIssueSource {
    api_base: String,
}

impl HttpIssueSource {
    pub fn new(backend_url: &str) -> Self {
        Self {
            api_base: format!("{}/api/jira", backend_url.trim_end_matches('/')),
        }
    }
}

/// Priority store backed by `/api/priorities`
#[derive(Debug, Clone)]
pub struct HttpPriorityStore {
    api_base: String,
}

impl HttpPriorityStore {
    pub fn new(backend_url: &str) -> Self {
        Self {
            api_base: format!("{}/api/priorities", backend_url.trim_end_matches('/')),
        }
    }

    fn entry_url(&self, issue_key: &str) -> String {
        let encoded: String = js_sys::encode_uri_component(issue_key).into();
        format!("{}/{}", self.api_base, encoded)
    }
}

fn log_error(message: &str, error: &ClientError) {
    web_sys::console::error_1(&format!("{}: {}", message, error).into());
}

/// Map a transport result to a response with a 2xx status
async fn expect_success(result: Result<Response, gloo_net::Error>) -> ClientResult<Response> {
    let response = result.map_err(|e| ClientError::Transport(e.to_string()))?;

    if response.ok() {
        Ok(response)
    } else {
        let status = response.status();
        let message = response.text().await.unwrap_or_default();
        Err(ClientError::Status { status, message })
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    response
        .json::<T>()
        .await
        .map_err(|e| ClientError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl IssueSource for HttpIssueSource {
    async fn search(&self, params: &SearchParams) -> ClientResult<SearchResponse> {
        let request = SearchRequest::from_params(params);

        let result = async {
            let built = Request::post(&format!("{}/search", self.api_base))
                .json(&request)
                .map_err(|e| ClientError::Transport(e.to_string()))?;
            let response = expect_success(built.send().await).await?;
            decode(response).await
        }
        .await;

        if let Err(e) = &result {
            log_error(&format!("Error fetching issues (jql: {})", request.jql), e);
        }
        result
    }

    async fn list_projects(&self) -> ClientResult<Vec<Project>> {
        let result = async {
            let response =
                expect_success(Request::get(&format!("{}/", self.api_base)).send().await).await?;
            decode(response).await
        }
        .await;

        if let Err(e) = &result {
            log_error("Error fetching projects", e);
        }
        result
    }

    async fn list_assignees(&self) -> Vec<Assignee> {
        let result: ClientResult<Vec<Assignee>> = async {
            let response =
                expect_success(Request::get(&format!("{}/users", self.api_base)).send().await)
                    .await?;
            decode(response).await
        }
        .await;

        match result {
            Ok(mut users) => {
                sort_assignees(&mut users);
                users
            }
            Err(e) => {
                log_error("Error fetching users", &e);
                Vec::new()
            }
        }
    }
}

#[async_trait(?Send)]
impl PriorityStore for HttpPriorityStore {
    async fn get(&self) -> CustomPriorities {
        let result: ClientResult<CustomPriorities> = async {
            let response = expect_success(Request::get(&self.api_base).send().await).await?;
            decode(response).await
        }
        .await;

        result.unwrap_or_else(|e| {
            log_error("Error fetching custom priorities", &e);
            CustomPriorities::new()
        })
    }

    async fn set(&self, issue_key: &str, priority: &str) -> ClientResult<()> {
        let body = SetPriorityRequest {
            priority: priority.to_string(),
        };

        let result = async {
            let built = Request::post(&self.entry_url(issue_key))
                .json(&body)
                .map_err(|e| ClientError::Transport(e.to_string()))?;
            expect_success(built.send().await).await.map(|_| ())
        }
        .await;

        if let Err(e) = &result {
            log_error(&format!("Error storing custom priority for {}", issue_key), e);
        }
        result
    }

    async fn clear(&self, issue_key: &str) -> ClientResult<()> {
        let result = expect_success(Request::delete(&self.entry_url(issue_key)).send().await)
            .await
            .map(|_| ());

        if let Err(e) = &result {
            log_error(&format!("Error removing custom priority for {}", issue_key), e);
        }
        result
    }

    async fn clear_all(&self) -> ClientResult<()> {
        let result = expect_success(Request::delete(&self.api_base).send().await)
            .await
            .map(|_| ());

        if let Err(e) = &result {
            log_error("Error clearing custom priorities", e);
        }
        result
    }
}
