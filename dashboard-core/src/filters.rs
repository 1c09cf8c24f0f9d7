//! Filter Set
//!
//! Client-held criteria narrowing which issues are fetched. Every field is
//! optional and toggled independently; the empty set means "unfiltered,
//! newest first".

use serde::{Deserialize, Serialize};

/// Sentinel assignee value selecting issues with no assignee
pub const UNASSIGNED: &str = "UNASSIGNED";

/// Default page offset
pub const DEFAULT_START_AT: u32 = 0;

/// Default page size
pub const DEFAULT_MAX_RESULTS: u32 = 50;

/// Status values offered by the filter panel
pub const STATUS_OPTIONS: [&str; 3] = ["To Do", "In Progress", "Done"];

/// Native priority values offered by the filter panel
pub const PRIORITY_OPTIONS: [&str; 4] = ["Highest", "High", "Medium", "Low"];

/// Search criteria
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    pub project: Option<String>,
    #[serde(default)]
    pub status: Vec<String>,
    #[serde(default)]
    pub priority: Vec<String>,
    /// Account ids, may include [`UNASSIGNED`]
    #[serde(default)]
    pub assignee: Vec<String>,
    pub has_dependencies: Option<bool>,
    /// ISO date (`YYYY-MM-DD`)
    pub created_after: Option<String>,
    /// ISO date (`YYYY-MM-DD`)
    pub created_before: Option<String>,
    pub start_at: Option<u32>,
    pub max_results: Option<u32>,
}

/// A single-field edit coming from one filter control
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterChange {
    Project(Option<String>),
    Status(Vec<String>),
    Priority(Vec<String>),
    Assignee(Vec<String>),
    HasDependencies(Option<bool>),
    CreatedAfter(Option<String>),
    CreatedBefore(Option<String>),
    Page { start_at: u32, max_results: u32 },
}

impl SearchParams {
    /// True when no criterion is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Apply one control's edit, keeping every other field.
    ///
    /// Any criterion change returns to the first page; the page size is kept.
    pub fn apply(&mut self, change: FilterChange) {
        if !matches!(change, FilterChange::Page { .. }) {
            self.start_at = None;
        }

        match change {
            // An empty selection in a single-select means "all projects"
            FilterChange::Project(project) => {
                self.project = project.filter(|p| !p.is_empty());
            }
            FilterChange::Status(values) => self.status = values,
            FilterChange::Priority(values) => self.priority = values,
            FilterChange::Assignee(values) => self.assignee = values,
            FilterChange::HasDependencies(flag) => self.has_dependencies = flag,
            FilterChange::CreatedAfter(date) => {
                self.created_after = date.filter(|d| !d.is_empty());
            }
            FilterChange::CreatedBefore(date) => {
                self.created_before = date.filter(|d| !d.is_empty());
            }
            FilterChange::Page {
                start_at,
                max_results,
            } => {
                self.start_at = Some(start_at);
                self.max_results = Some(max_results);
            }
        }
    }

    /// Builder-style variant of [`SearchParams::apply`]
    pub fn with(mut self, change: FilterChange) -> Self {
        self.apply(change);
        self
    }

    /// Reset to the empty set
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn start_at_or_default(&self) -> u32 {
        self.start_at.unwrap_or(DEFAULT_START_AT)
    }

    /// Page size; zero counts as unset
    pub fn max_results_or_default(&self) -> u32 {
        self.max_results
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_MAX_RESULTS)
    }

    /// Whether the unassigned sentinel is selected
    pub fn includes_unassigned(&self) -> bool {
        self.assignee.iter().any(|a| a == UNASSIGNED)
    }
}
