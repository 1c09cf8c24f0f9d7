//! Backend API
//!
//! Browser transports for the dashboard backend plus the compile-time
//! endpoints they talk to.

pub mod client;

pub use client::{HttpIssueSource, HttpPriorityStore};

/// Backend used when `JIRA_DASHBOARD_API_URL` is not set at build time
pub const DEFAULT_API_BASE: &str = "http://localhost:3001";

/// Backend base URL, without a trailing slash
pub fn api_base() -> String {
    option_env!("JIRA_DASHBOARD_API_URL")
        .unwrap_or(DEFAULT_API_BASE)
        .trim_end_matches('/')
        .to_string()
}

/// Tracker web UI base for card links
pub fn browse_base() -> String {
    option_env!("JIRA_BROWSE_URL")
        .unwrap_or_default()
        .trim_end_matches('/')
        .to_string()
}
