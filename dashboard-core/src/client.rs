//! Client Traits
//!
//! Seams between the dashboard logic and the HTTP transports. The native
//! server-side clients (reqwest) and the browser clients (gloo-net) both
//! implement these, and tests substitute in-memory fakes.
//!
//! Futures are not required to be `Send` so that browser transports, whose
//! futures are tied to the JS event loop, can implement the traits too.
//!
//! # Error contract
//!
//! | Operation                      | On failure                       |
//! |--------------------------------|----------------------------------|
//! | [`IssueSource::search`]        | logged, propagated               |
//! | [`IssueSource::list_projects`] | logged, propagated               |
//! | [`IssueSource::list_assignees`]| logged, empty list returned      |
//! | [`PriorityStore::get`]         | logged, empty map returned       |
//! | [`PriorityStore::set`]         | logged, propagated               |
//! | [`PriorityStore::clear`]       | logged, propagated               |
//! | [`PriorityStore::clear_all`]   | logged, propagated               |

use async_trait::async_trait;

use crate::error::ClientResult;
use crate::filters::SearchParams;
use crate::priorities::CustomPriorities;
use crate::types::{Assignee, Project, SearchResponse};

/// Read access to the issue tracker through the backend proxy
#[async_trait(?Send)]
pub trait IssueSource {
    /// Run a search for the given filter set
    async fn search(&self, params: &SearchParams) -> ClientResult<SearchResponse>;

    /// List all projects
    async fn list_projects(&self) -> ClientResult<Vec<Project>>;

    /// List assignable users sorted by display name; empty on failure
    async fn list_assignees(&self) -> Vec<Assignee>;
}

/// Custom priority override storage
#[async_trait(?Send)]
pub trait PriorityStore {
    /// Load the full override map; empty on failure
    async fn get(&self) -> CustomPriorities;

    /// Set the override for one issue
    async fn set(&self, issue_key: &str, priority: &str) -> ClientResult<()>;

    /// Remove the override for one issue
    async fn clear(&self, issue_key: &str) -> ClientResult<()>;

    /// Remove every override
    async fn clear_all(&self) -> ClientResult<()>;
}
