//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::Instant;

use crate::config::ServerConfig;
use crate::priorities::PriorityRepository;
use crate::tracker::TrackerUpstream;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Upstream issue tracker
    pub tracker: Arc<dyn TrackerUpstream>,
    /// Custom priority storage
    pub priorities: Arc<PriorityRepository>,
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Whether the upstream has credentials
    pub tracker_configured: bool,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(
        tracker: Arc<dyn TrackerUpstream>,
        priorities: Arc<PriorityRepository>,
        config: ServerConfig,
        tracker_configured: bool,
    ) -> Self {
        Self {
            tracker,
            priorities,
            config: Arc::new(config),
            tracker_configured,
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
