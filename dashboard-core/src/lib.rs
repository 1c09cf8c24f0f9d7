//! # Dashboard Core
//!
//! Target-independent logic of the Jira dashboard, shared by the native
//! backend (`jira-dashboard`) and the WASM front end (`dashboard-ui`).
//!
//! ## Modules
//!
//! - [`types`]: Issue, project and assignee records
//! - [`filters`]: The client-held filter set
//! - [`query`]: Filter set → JQL translation and search request body
//! - [`priorities`]: Custom priority override map
//! - [`client`]: Async traits the HTTP transports implement
//! - [`session`]: Password login gate over a durable flag
//! - [`dashboard`]: Fetch orchestration and render state
//! - [`view`]: Card view model and presentation helpers
//!
//! ## Example
//!
//! ```rust
//! use dashboard_core::filters::{FilterChange, SearchParams, UNASSIGNED};
//! use dashboard_core::query::build_jql;
//!
//! let params = SearchParams::default()
//!     .with(FilterChange::Project(Some("OPS".into())))
//!     .with(FilterChange::Assignee(vec![UNASSIGNED.into(), "acc-1".into()]));
//!
//! assert_eq!(
//!     build_jql(&params),
//!     "project = \"OPS\" AND (assignee is EMPTY OR assignee in (\"acc-1\")) ORDER BY created DESC"
//! );
//! ```

pub mod client;
pub mod dashboard;
pub mod error;
pub mod filters;
pub mod priorities;
pub mod query;
pub mod session;
pub mod types;
pub mod view;

pub use client::{IssueSource, PriorityStore};
pub use dashboard::{
    fetch_page, load_mount_data, write_priority, Dashboard, DashboardOptions, DashboardState,
    FetchTicket, MountData, PageData,
};
pub use error::{ClientError, ClientResult};
pub use filters::{FilterChange, SearchParams, UNASSIGNED};
pub use priorities::{CustomPriorities, PriorityEntry, SetPriorityRequest};
pub use query::{build_jql, SearchRequest};
pub use session::{AuthState, FlagStore, LoginError, LoginGate, MemoryFlagStore};
pub use types::{Assignee, Issue, Project, SearchResponse};
pub use view::{DashboardView, IssueCard, Tone};
