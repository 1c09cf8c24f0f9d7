//! Global Application State
//!
//! Reactive state management using Leptos signals. The dashboard state
//! machine itself lives in `dashboard_core`; this module drives it from
//! `spawn_local` tasks and pushes the results into signals.

use dashboard_core::{
    fetch_page, load_mount_data, write_priority, AuthState, DashboardOptions, DashboardState,
    FilterChange, LoginError, LoginGate, PriorityStore,
};
use leptos::*;

use crate::api::{self, HttpIssueSource, HttpPriorityStore};
use crate::state::storage::LocalStorageFlags;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Login gate state
    pub auth: RwSignal<AuthState>,
    /// Filters, issues, overrides and fetch generation
    pub dashboard: RwSignal<DashboardState>,
    /// Whether the filter panel is expanded
    pub filters_open: RwSignal<bool>,
    /// Error message (for toasts)
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
    /// Browse link base and default assignees
    pub options: DashboardOptions,
    source: HttpIssueSource,
    store: HttpPriorityStore,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let api_base = api::api_base();
    let auth = LoginGate::new(LocalStorageFlags).restore();

    let state = GlobalState {
        auth: create_rw_signal(auth),
        dashboard: create_rw_signal(DashboardState::new()),
        filters_open: create_rw_signal(true),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
        options: DashboardOptions {
            browse_base: api::browse_base(),
            ..Default::default()
        },
        source: HttpIssueSource::new(&api_base),
        store: HttpPriorityStore::new(&api_base),
    };

    provide_context(state);
}

impl GlobalState {
    /// Check a password and persist the auth flag on success
    pub fn login(&self, password: &str) -> Result<(), LoginError> {
        let mut gate = LoginGate::new(LocalStorageFlags);
        let state = gate.submit(password)?;
        self.auth.set(state);
        Ok(())
    }

    /// Clear the auth flag and drop loaded data
    pub fn logout(&self) {
        let mut gate = LoginGate::new(LocalStorageFlags);
        self.auth.set(gate.logout());
        self.dashboard.update(|d| d.reset());
    }

    /// Initial load: unfiltered refresh, then overrides, assignees and
    /// default assignee selection
    pub fn mount(&self) {
        let state = self.clone();
        spawn_local(async move {
            state.run_refresh().await;

            let data = load_mount_data(&state.source, &state.store).await;
            let narrowed = state
                .dashboard
                .try_update(|d| d.apply_mount_data(data, &state.options.default_assignees))
                .unwrap_or(false);
            if narrowed {
                state.run_refresh().await;
            }
        });
    }

    /// Fetch projects and issues for the current filters
    pub fn refresh(&self) {
        let state = self.clone();
        spawn_local(async move {
            state.run_refresh().await;
        });
    }

    async fn run_refresh(&self) {
        let Some(ticket) = self.dashboard.try_update(|d| d.begin_refresh()) else {
            return;
        };

        let outcome = fetch_page(&self.source, &ticket.params).await;
        let generation = ticket.generation;
        let committed = self
            .dashboard
            .try_update(|d| d.commit(ticket, outcome))
            .unwrap_or(false);

        if !committed {
            web_sys::console::debug_1(&format!("Dropped stale refresh #{}", generation).into());
        }
    }

    /// Edit one filter and refresh when it changed anything
    pub fn update_filter(&self, change: FilterChange) {
        if self.dashboard.try_update(|d| d.update_filter(change)) == Some(true) {
            self.refresh();
        }
    }

    /// Reset every filter and refresh
    pub fn clear_filters(&self) {
        self.dashboard.update(|d| {
            d.clear_filters();
        });
        self.refresh();
    }

    /// Set (`Some`) or remove (`None`) a custom priority; local state changes first
    pub fn set_priority(&self, issue_key: String, label: Option<String>) {
        self.dashboard
            .update(|d| d.override_priority(&issue_key, label.as_deref()));

        let state = self.clone();
        spawn_local(async move {
            if let Err(e) = write_priority(&state.store, &issue_key, label.as_deref()).await {
                state
                    .dashboard
                    .update(|d| d.record_priority_failure(&issue_key, &e));
                if let Some(notice) = state.dashboard.try_update(|d| d.take_notice()).flatten() {
                    state.show_error(&notice);
                }
            }
        });
    }

    /// Remove every custom priority
    pub fn clear_all_priorities(&self) {
        let state = self.clone();
        spawn_local(async move {
            match state.store.clear_all().await {
                Ok(()) => {
                    state.dashboard.update(|d| d.replace_overrides(Default::default()));
                    state.show_success("Custom priorities cleared");
                }
                Err(_) => state.show_error("Failed to clear custom priorities"),
            }
        });
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}
