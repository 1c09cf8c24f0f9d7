//! Custom Priorities
//!
//! - **Client**: native [`PriorityStore`](dashboard_core::PriorityStore) for
//!   the backend's `/api/priorities` endpoints
//! - **Store**: the backend's JSON-persisted override map

mod client;
mod store;

pub use client::PriorityClient;
pub use store::{PriorityRepository, StoreError};
