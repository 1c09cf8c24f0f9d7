//! Issue Tracker
//!
//! Two sides of the tracker integration:
//!
//! - **Client**: native [`IssueSource`](dashboard_core::IssueSource) talking to
//!   the dashboard backend's `/api/jira` proxy
//! - **Upstream**: the proxy's own connection to the Jira REST API

mod client;
mod upstream;

pub use client::TrackerClient;
pub use upstream::{filter_human_accounts, JiraUpstream, TrackerUpstream, UpstreamError};
