//! Dashboard State & Orchestration
//!
//! Holds everything the dashboard view renders and drives the fetch cycle:
//!
//! 1. On mount, load the override map and the assignee list (both soft
//!    failures) and pre-select the default assignees.
//! 2. On every filter change, fetch projects and the issue page concurrently,
//!    join them, and replace state only if both succeed.
//!
//! Each refresh is stamped with a generation. Only the most recently issued
//! generation may commit, so a slow response for an outdated filter set can
//! never overwrite a newer one.

use futures_util::future::try_join;

use crate::client::{IssueSource, PriorityStore};
use crate::error::{ClientError, ClientResult};
use crate::filters::{FilterChange, SearchParams};
use crate::priorities::{apply_override, CustomPriorities};
use crate::types::{Assignee, Issue, Project, SearchResponse};
use crate::view::{DashboardView, IssueCard, FETCH_ERROR_MESSAGE};

/// Display names pre-selected in the assignee filter when present
pub const DEFAULT_ASSIGNEE_NAMES: [&str; 2] = ["Jane Doe", "John Smith"];

/// Dashboard settings
#[derive(Debug, Clone)]
pub struct DashboardOptions {
    /// Tracker web UI base used for outbound card links
    pub browse_base: String,
    /// Display names to pre-select in the assignee filter
    pub default_assignees: Vec<String>,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            browse_base: String::new(),
            default_assignees: DEFAULT_ASSIGNEE_NAMES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Handle for one in-flight refresh
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    /// Filter set the refresh was issued for
    pub params: SearchParams,
}

/// Result of one joined refresh
#[derive(Debug, Clone, PartialEq)]
pub struct PageData {
    pub projects: Vec<Project>,
    pub page: SearchResponse,
}

/// Data loaded once on mount
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MountData {
    pub overrides: CustomPriorities,
    pub assignees: Vec<Assignee>,
}

/// Everything the dashboard renders
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    filters: SearchParams,
    issues: Vec<Issue>,
    projects: Vec<Project>,
    assignees: Vec<Assignee>,
    overrides: CustomPriorities,
    total: u64,
    loading: bool,
    loaded: bool,
    error: Option<String>,
    notice: Option<String>,
    generation: u64,
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Default::default()
        }
    }

    /// Drop all loaded data and filters. The generation advances so that
    /// refreshes issued before the reset can never commit afterwards.
    pub fn reset(&mut self) {
        let generation = self.generation + 1;
        *self = Self::new();
        self.generation = generation;
    }

    /// Start a refresh for the current filters
    pub fn begin_refresh(&mut self) -> FetchTicket {
        self.generation += 1;
        self.loading = true;
        FetchTicket {
            generation: self.generation,
            params: self.filters.clone(),
        }
    }

    /// Apply a refresh result; returns false if the ticket is stale
    pub fn commit(&mut self, ticket: FetchTicket, outcome: ClientResult<PageData>) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(
                stale = ticket.generation,
                latest = self.generation,
                "Dropping stale refresh result"
            );
            return false;
        }

        self.loading = false;
        self.loaded = true;

        match outcome {
            Ok(data) => {
                self.total = data.page.total;
                self.issues = data.page.issues;
                self.projects = data.projects;
                self.error = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Dashboard refresh failed");
                self.error = Some(FETCH_ERROR_MESSAGE.to_string());
            }
        }

        true
    }

    /// Edit one filter field; returns true if the filter set changed
    pub fn update_filter(&mut self, change: FilterChange) -> bool {
        let before = self.filters.clone();
        self.filters.apply(change);
        self.filters != before
    }

    /// Reset the filter set; returns true if it was not already empty
    pub fn clear_filters(&mut self) -> bool {
        let was_empty = self.filters.is_empty();
        self.filters.clear();
        !was_empty
    }

    /// Store mount data and pre-select default assignees.
    ///
    /// Returns true if the pre-selection changed the filter set.
    pub fn apply_mount_data(&mut self, data: MountData, defaults: &[String]) -> bool {
        self.overrides = data.overrides;
        self.assignees = data.assignees;

        let selected: Vec<String> = self
            .assignees
            .iter()
            .filter(|a| defaults.iter().any(|name| *name == a.display_name))
            .map(|a| a.account_id.clone())
            .collect();

        if selected.is_empty() {
            return false;
        }

        self.update_filter(FilterChange::Assignee(selected))
    }

    /// Optimistically set (`Some`) or remove (`None`) an override
    pub fn override_priority(&mut self, issue_key: &str, label: Option<&str>) {
        apply_override(&mut self.overrides, issue_key, label);
    }

    /// Record a failed override write for the user
    pub fn record_priority_failure(&mut self, issue_key: &str, error: &ClientError) {
        tracing::warn!(issue_key, error = %error, "Priority write failed");
        self.notice = Some(format!("Failed to save priority for {}", issue_key));
    }

    /// Take the pending user notice, if any
    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }

    pub fn replace_overrides(&mut self, overrides: CustomPriorities) {
        self.overrides = overrides;
    }

    pub fn filters(&self) -> &SearchParams {
        &self.filters
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn assignees(&self) -> &[Assignee] {
        &self.assignees
    }

    pub fn overrides(&self) -> &CustomPriorities {
        &self.overrides
    }

    /// Total matches reported by the tracker (may exceed the page)
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Label for the assignee filter control
    pub fn assignee_summary(&self) -> String {
        match self.filters.assignee.as_slice() {
            [] => "All Assignees".to_string(),
            [only] => self
                .assignees
                .iter()
                .find(|a| &a.account_id == only)
                .map(|a| a.display_name.clone())
                .unwrap_or_else(|| "Unassigned".to_string()),
            many => format!("{} assignees selected", many.len()),
        }
    }

    /// Body to render
    pub fn view(&self, browse_base: &str) -> DashboardView {
        if self.loading && !self.loaded {
            return DashboardView::Loading;
        }
        if let Some(error) = &self.error {
            return DashboardView::Error(error.clone());
        }
        if self.issues.is_empty() {
            return DashboardView::Empty;
        }

        DashboardView::Grid(
            self.issues
                .iter()
                .map(|issue| IssueCard::build(issue, &self.overrides, browse_base))
                .collect(),
        )
    }
}

/// Fetch projects and an issue page concurrently; fails as one unit
pub async fn fetch_page<I>(source: &I, params: &SearchParams) -> ClientResult<PageData>
where
    I: IssueSource + ?Sized,
{
    let (projects, page) = try_join(source.list_projects(), source.search(params)).await?;
    Ok(PageData { projects, page })
}

/// Load the override map and the assignee list; never fails
pub async fn load_mount_data<I, P>(source: &I, store: &P) -> MountData
where
    I: IssueSource + ?Sized,
    P: PriorityStore + ?Sized,
{
    let overrides = store.get().await;
    let assignees = source.list_assignees().await;
    MountData {
        overrides,
        assignees,
    }
}

/// Persist one override edit: `Some` sets, `None` removes
pub async fn write_priority<P>(store: &P, issue_key: &str, label: Option<&str>) -> ClientResult<()>
where
    P: PriorityStore + ?Sized,
{
    match label {
        Some(label) => store.set(issue_key, label).await,
        None => store.clear(issue_key).await,
    }
}

/// Dashboard controller owning its clients
pub struct Dashboard<I, P> {
    source: I,
    store: P,
    options: DashboardOptions,
    state: DashboardState,
}

impl<I: IssueSource, P: PriorityStore> Dashboard<I, P> {
    pub fn new(source: I, store: P, options: DashboardOptions) -> Self {
        Self {
            source,
            store,
            options,
            state: DashboardState::new(),
        }
    }

    /// Initial load: unfiltered refresh, then mount data and default
    /// assignees (refreshing again if they narrowed the filter)
    pub async fn mount(&mut self) {
        self.refresh().await;

        let data = load_mount_data(&self.source, &self.store).await;
        if self
            .state
            .apply_mount_data(data, &self.options.default_assignees)
        {
            self.refresh().await;
        }
    }

    /// Refresh for the current filters; returns whether the result was committed
    pub async fn refresh(&mut self) -> bool {
        let ticket = self.state.begin_refresh();
        let outcome = fetch_page(&self.source, &ticket.params).await;
        self.state.commit(ticket, outcome)
    }

    /// Edit one filter and refresh if it changed anything
    pub async fn update_filter(&mut self, change: FilterChange) {
        if self.state.update_filter(change) {
            self.refresh().await;
        }
    }

    /// Reset filters and refresh
    pub async fn clear_filters(&mut self) {
        self.state.clear_filters();
        self.refresh().await;
    }

    /// Set (`Some`) or remove (`None`) an override, updating local state first
    pub async fn set_priority(&mut self, issue_key: &str, label: Option<&str>) -> ClientResult<()> {
        self.state.override_priority(issue_key, label);

        let result = write_priority(&self.store, issue_key, label).await;
        if let Err(e) = &result {
            self.state.record_priority_failure(issue_key, e);
        }
        result
    }

    /// Remove every override
    pub async fn clear_all_priorities(&mut self) -> ClientResult<()> {
        self.store.clear_all().await?;
        self.state.replace_overrides(CustomPriorities::new());
        Ok(())
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut DashboardState {
        &mut self.state
    }

    pub fn options(&self) -> &DashboardOptions {
        &self.options
    }

    pub fn view(&self) -> DashboardView {
        self.state.view(&self.options.browse_base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::UNASSIGNED;
    use crate::query::build_jql;
    use crate::types::{IssueFields, NamedField};
    use async_trait::async_trait;
    use std::cell::{Cell, RefCell};

    fn issue(key: &str) -> Issue {
        Issue {
            id: format!("id-{}", key),
            key: key.to_string(),
            fields: IssueFields {
                summary: format!("Summary of {}", key),
                description: None,
                status: NamedField { name: "To Do".into() },
                priority: Some(NamedField { name: "Medium".into() }),
                assignee: None,
                created: "2024-01-15T10:30:00.000+0000".into(),
                updated: None,
            },
        }
    }

    fn page(keys: &[&str]) -> SearchResponse {
        SearchResponse {
            issues: keys.iter().map(|k| issue(k)).collect(),
            total: keys.len() as u64,
            max_results: 50,
            start_at: 0,
        }
    }

    #[derive(Default)]
    struct FakeSource {
        issues: Vec<&'static str>,
        assignees: Vec<Assignee>,
        fail_search: Cell<bool>,
        fail_assignees: bool,
        searches: RefCell<Vec<String>>,
    }

    #[async_trait(?Send)]
    impl IssueSource for FakeSource {
        async fn search(&self, params: &SearchParams) -> ClientResult<SearchResponse> {
            self.searches.borrow_mut().push(build_jql(params));
            if self.fail_search.get() {
                return Err(ClientError::Transport("connection refused".into()));
            }
            Ok(page(&self.issues))
        }

        async fn list_projects(&self) -> ClientResult<Vec<Project>> {
            Ok(vec![Project {
                id: "1".into(),
                key: "OPS".into(),
                name: "Operations".into(),
            }])
        }

        async fn list_assignees(&self) -> Vec<Assignee> {
            if self.fail_assignees {
                return Vec::new();
            }
            self.assignees.clone()
        }
    }

    #[derive(Default)]
    struct FakeStore {
        map: RefCell<CustomPriorities>,
        fail_writes: bool,
    }

    #[async_trait(?Send)]
    impl PriorityStore for FakeStore {
        async fn get(&self) -> CustomPriorities {
            self.map.borrow().clone()
        }

        async fn set(&self, issue_key: &str, priority: &str) -> ClientResult<()> {
            if self.fail_writes {
                return Err(ClientError::Status {
                    status: 500,
                    message: "boom".into(),
                });
            }
            self.map
                .borrow_mut()
                .insert(issue_key.to_string(), priority.to_string());
            Ok(())
        }

        async fn clear(&self, issue_key: &str) -> ClientResult<()> {
            self.map.borrow_mut().remove(issue_key);
            Ok(())
        }

        async fn clear_all(&self) -> ClientResult<()> {
            self.map.borrow_mut().clear();
            Ok(())
        }
    }

    fn assignee(id: &str, name: &str) -> Assignee {
        Assignee {
            account_id: id.to_string(),
            display_name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn test_mount_renders_grid() {
        let source = FakeSource {
            issues: vec!["OPS-1", "OPS-2"],
            ..Default::default()
        };
        let mut dashboard = Dashboard::new(source, FakeStore::default(), DashboardOptions::default());

        assert_eq!(dashboard.view(), DashboardView::Loading);
        dashboard.mount().await;

        match dashboard.view() {
            DashboardView::Grid(cards) => {
                assert_eq!(cards.len(), 2);
                assert_eq!(cards[0].key, "OPS-1");
            }
            other => panic!("expected grid, got {:?}", other),
        }
        assert_eq!(dashboard.state().projects().len(), 1);
        assert_eq!(dashboard.state().total(), 2);
    }

    #[tokio::test]
    async fn test_mount_preselects_default_assignees() {
        let source = FakeSource {
            issues: vec!["OPS-1"],
            assignees: vec![
                assignee("acc-jane", "Jane Doe"),
                assignee("acc-bob", "Bob"),
                assignee("acc-john", "John Smith"),
            ],
            ..Default::default()
        };
        let mut dashboard = Dashboard::new(source, FakeStore::default(), DashboardOptions::default());
        dashboard.mount().await;

        assert_eq!(
            dashboard.state().filters().assignee,
            vec!["acc-jane".to_string(), "acc-john".to_string()]
        );

        let searches = dashboard.source.searches.borrow();
        assert_eq!(searches.len(), 2);
        assert_eq!(searches[0], "ORDER BY created DESC");
        assert!(searches[1].starts_with("assignee in (\"acc-jane\",\"acc-john\")"));
        assert_eq!(dashboard.state().assignee_summary(), "2 assignees selected");
    }

    #[tokio::test]
    async fn test_search_failure_shows_error_without_grid() {
        let source = FakeSource {
            issues: vec!["OPS-1"],
            ..Default::default()
        };
        source.fail_search.set(true);
        let mut dashboard = Dashboard::new(source, FakeStore::default(), DashboardOptions::default());
        dashboard.mount().await;

        assert_eq!(
            dashboard.view(),
            DashboardView::Error(FETCH_ERROR_MESSAGE.to_string())
        );
        assert!(dashboard.state().issues().is_empty());
        assert!(dashboard.state().projects().is_empty());
    }

    #[tokio::test]
    async fn test_assignee_failure_is_soft() {
        let source = FakeSource {
            issues: vec!["OPS-1"],
            fail_assignees: true,
            ..Default::default()
        };
        let mut dashboard = Dashboard::new(source, FakeStore::default(), DashboardOptions::default());
        dashboard.mount().await;

        assert!(dashboard.state().assignees().is_empty());
        assert!(dashboard.state().error().is_none());
        assert!(matches!(dashboard.view(), DashboardView::Grid(_)));
    }

    #[tokio::test]
    async fn test_empty_result_placeholder() {
        let mut dashboard = Dashboard::new(
            FakeSource::default(),
            FakeStore::default(),
            DashboardOptions::default(),
        );
        dashboard.mount().await;
        assert_eq!(dashboard.view(), DashboardView::Empty);
    }

    #[tokio::test]
    async fn test_filter_change_and_clear_refetch() {
        let source = FakeSource {
            issues: vec!["OPS-1"],
            ..Default::default()
        };
        let mut dashboard = Dashboard::new(source, FakeStore::default(), DashboardOptions::default());
        dashboard.mount().await;

        dashboard
            .update_filter(FilterChange::Assignee(vec![UNASSIGNED.into(), "acc-1".into()]))
            .await;
        // Same value again: nothing to refetch
        dashboard
            .update_filter(FilterChange::Assignee(vec![UNASSIGNED.into(), "acc-1".into()]))
            .await;
        dashboard.clear_filters().await;

        let searches = dashboard.source.searches.borrow();
        assert_eq!(searches.len(), 3);
        assert_eq!(
            searches[1],
            "(assignee is EMPTY OR assignee in (\"acc-1\")) ORDER BY created DESC"
        );
        assert_eq!(searches[2], "ORDER BY created DESC");
    }

    #[tokio::test]
    async fn test_set_then_clear_priority() {
        let mut dashboard = Dashboard::new(
            FakeSource::default(),
            FakeStore::default(),
            DashboardOptions::default(),
        );

        dashboard.set_priority("OPS-9", Some("High")).await.unwrap();
        assert_eq!(
            dashboard.store.get().await.get("OPS-9").map(String::as_str),
            Some("High")
        );
        assert_eq!(
            dashboard.state().overrides().get("OPS-9").map(String::as_str),
            Some("High")
        );

        dashboard.set_priority("OPS-9", None).await.unwrap();
        assert!(dashboard.store.get().await.is_empty());
        assert!(dashboard.state().overrides().is_empty());
    }

    #[tokio::test]
    async fn test_priority_write_failure_keeps_optimistic_value() {
        let store = FakeStore {
            fail_writes: true,
            ..Default::default()
        };
        let mut dashboard = Dashboard::new(FakeSource::default(), store, DashboardOptions::default());

        let result = dashboard.set_priority("OPS-3", Some("Low")).await;
        assert!(result.is_err());
        assert_eq!(
            dashboard.state().overrides().get("OPS-3").map(String::as_str),
            Some("Low")
        );
        assert_eq!(
            dashboard.state_mut().take_notice().as_deref(),
            Some("Failed to save priority for OPS-3")
        );
        assert!(dashboard.state().notice().is_none());
    }

    #[tokio::test]
    async fn test_clear_all_priorities() {
        let store = FakeStore::default();
        store.map.borrow_mut().insert("A-1".into(), "High".into());
        let mut dashboard = Dashboard::new(FakeSource::default(), store, DashboardOptions::default());
        dashboard.mount().await;
        assert_eq!(dashboard.state().overrides().len(), 1);

        dashboard.clear_all_priorities().await.unwrap();
        assert!(dashboard.state().overrides().is_empty());
        assert!(dashboard.store.get().await.is_empty());
    }

    #[test]
    fn test_stale_refresh_is_dropped() {
        let mut state = DashboardState::new();

        let first = state.begin_refresh();
        state.update_filter(FilterChange::Status(vec!["Done".into()]));
        let second = state.begin_refresh();

        let newer = PageData {
            projects: vec![],
            page: page(&["NEW-1"]),
        };
        let older = PageData {
            projects: vec![],
            page: page(&["OLD-1", "OLD-2"]),
        };

        assert!(state.commit(second, Ok(newer)));
        assert!(!state.commit(first, Ok(older)));
        assert_eq!(state.issues().len(), 1);
        assert_eq!(state.issues()[0].key, "NEW-1");
    }

    #[test]
    fn test_refresh_from_before_reset_is_dropped() {
        let mut state = DashboardState::new();
        let before = state.begin_refresh();

        state.reset();
        assert!(state.is_loading());
        assert!(!state.commit(
            before.clone(),
            Ok(PageData {
                projects: vec![],
                page: page(&["OLD-1"]),
            })
        ));

        let after = state.begin_refresh();
        assert_ne!(after.generation, before.generation);
        assert!(!state.commit(before, Err(ClientError::Transport("late".into()))));
        assert!(state.issues().is_empty());
        assert!(state.error().is_none());
    }

    #[test]
    fn test_stale_failure_does_not_mask_success() {
        let mut state = DashboardState::new();
        let first = state.begin_refresh();
        let second = state.begin_refresh();

        assert!(state.commit(
            second,
            Ok(PageData {
                projects: vec![],
                page: page(&["A-1"]),
            })
        ));
        assert!(!state.commit(first, Err(ClientError::Transport("late".into()))));
        assert!(state.error().is_none());
    }

    #[test]
    fn test_assignee_summary_single() {
        let mut state = DashboardState::new();
        state.apply_mount_data(
            MountData {
                overrides: CustomPriorities::new(),
                assignees: vec![assignee("acc-1", "Ada")],
            },
            &[],
        );
        assert_eq!(state.assignee_summary(), "All Assignees");

        state.update_filter(FilterChange::Assignee(vec!["acc-1".into()]));
        assert_eq!(state.assignee_summary(), "Ada");

        state.update_filter(FilterChange::Assignee(vec![UNASSIGNED.into()]));
        assert_eq!(state.assignee_summary(), "Unassigned");
    }
}
