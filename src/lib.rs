//! # Jira Dashboard
//!
//! Backend and native clients for a password-gated Jira issue dashboard.
//!
//! ## Modules
//!
//! - [`api`]: Axum server that proxies the Jira REST API and stores custom priorities
//! - [`tracker`]: Jira upstream plus a native client for the proxy
//! - [`priorities`]: Priority override repository and its native client
//! - [`config`]: TOML and environment configuration
//!
//! The filter model, JQL builder, dashboard state machine and login gate live
//! in [`dashboard_core`] so the browser frontend can share them.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use jira_dashboard::{Dashboard, DashboardOptions, FilterChange, PriorityClient, TrackerClient};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let issues = TrackerClient::new("http://localhost:3001")?;
//!     let priorities = PriorityClient::new("http://localhost:3001")?;
//!
//!     let mut dashboard = Dashboard::new(issues, priorities, DashboardOptions::default());
//!     dashboard.mount().await;
//!     dashboard.update_filter(FilterChange::Status(vec!["In Progress".into()])).await;
//!
//!     println!("{} issues", dashboard.state().total());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod priorities;
pub mod tracker;

mod http;

pub use api::{build_router, serve, ApiError, AppState};
pub use config::{Config, ConfigError};
pub use priorities::{PriorityClient, PriorityRepository, StoreError};
pub use tracker::{JiraUpstream, TrackerClient, TrackerUpstream, UpstreamError};

pub use dashboard_core;
pub use dashboard_core::{
    Dashboard, DashboardOptions, DashboardState, DashboardView, FilterChange, SearchParams,
};
