//! Data Transfer Objects
//!
//! Request and response types for the proxy endpoints that are not already
//! defined by `dashboard_core`. Tracker payloads are passed through as raw
//! JSON and have no DTOs here.

use serde::Serialize;

// ============================================
// HEALTH DTOs
// ============================================

/// Full health status response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy, degraded
    pub status: String,
    /// Priority storage status
    pub priorities: String,
    /// Upstream tracker status: configured, unconfigured
    pub tracker: String,
    /// Number of stored priority overrides
    pub priority_count: usize,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}
