//! Card View Model
//!
//! Pure presentation helpers: badge tones, date formatting, grid layout and
//! the per-issue card model the UI renders.

use crate::priorities::CustomPriorities;
use crate::types::Issue;

/// Message shown when a refresh fails
pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch data. Please check your API configuration.";

/// Placeholder title for an empty result
pub const EMPTY_TITLE: &str = "No issues found";

/// Placeholder hint for an empty result
pub const EMPTY_HINT: &str = "Try adjusting your filters or create new issues";

/// Badge colour family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Info,
    Warning,
    Error,
    Default,
}

impl Tone {
    /// CSS modifier class for the badge
    pub fn css_class(self) -> &'static str {
        match self {
            Tone::Success => "badge-success",
            Tone::Info => "badge-info",
            Tone::Warning => "badge-warning",
            Tone::Error => "badge-error",
            Tone::Default => "badge-default",
        }
    }
}

/// Tone for a status badge, keyed by status name
pub fn status_tone(status: &str) -> Tone {
    match status.to_lowercase().as_str() {
        "done" => Tone::Success,
        "in progress" => Tone::Info,
        "to do" => Tone::Warning,
        _ => Tone::Default,
    }
}

/// Tone for a priority badge, keyed by priority name
pub fn priority_tone(priority: &str) -> Tone {
    match priority.to_lowercase().as_str() {
        "highest" => Tone::Error,
        "high" => Tone::Warning,
        "medium" => Tone::Info,
        "low" => Tone::Success,
        _ => Tone::Default,
    }
}

/// Number of grid columns for a viewport width in CSS pixels
pub fn grid_columns(viewport_width: u32) -> u8 {
    match viewport_width {
        0..=599 => 1,
        600..=899 => 2,
        900..=1199 => 3,
        _ => 4,
    }
}

/// Link to an issue in the tracker's web UI
pub fn browse_url(browse_base: &str, issue_key: &str) -> String {
    format!("{}/browse/{}", browse_base.trim_end_matches('/'), issue_key)
}

/// Creation date as `MM/DD/YYYY`, or the raw value if it cannot be parsed
pub fn format_created(issue: &Issue) -> String {
    issue
        .created_at()
        .map(|dt| dt.format("%m/%d/%Y").to_string())
        .unwrap_or_else(|| issue.fields.created.clone())
}

/// Everything one card displays
#[derive(Debug, Clone, PartialEq)]
pub struct IssueCard {
    pub id: String,
    pub key: String,
    pub url: String,
    pub summary: String,
    pub status: String,
    pub status_tone: Tone,
    pub priority: String,
    pub priority_tone: Tone,
    /// Custom override label, if one is stored for this key
    pub custom_priority: Option<String>,
    pub assignee: Option<String>,
    pub created: String,
}

impl IssueCard {
    /// Combine an issue with the override map by key lookup
    pub fn build(issue: &Issue, overrides: &CustomPriorities, browse_base: &str) -> Self {
        Self {
            id: issue.id.clone(),
            key: issue.key.clone(),
            url: browse_url(browse_base, &issue.key),
            summary: issue.fields.summary.clone(),
            status: issue.status_name().to_string(),
            status_tone: status_tone(issue.status_name()),
            priority: issue.priority_name().to_string(),
            priority_tone: priority_tone(issue.priority_name()),
            custom_priority: overrides.get(&issue.key).cloned(),
            assignee: issue.assignee_name().map(str::to_string),
            created: format_created(issue),
        }
    }
}

/// What the dashboard body shows
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardView {
    Loading,
    Error(String),
    Empty,
    Grid(Vec<IssueCard>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AssigneeRef, IssueFields, NamedField};

    fn issue(key: &str, status: &str, created: &str) -> Issue {
        Issue {
            id: format!("id-{}", key),
            key: key.to_string(),
            fields: IssueFields {
                summary: "Summary".into(),
                description: None,
                status: NamedField { name: status.into() },
                priority: Some(NamedField { name: "Highest".into() }),
                assignee: Some(AssigneeRef { display_name: "Grace".into() }),
                created: created.into(),
                updated: None,
            },
        }
    }

    #[test]
    fn test_status_tones() {
        assert_eq!(status_tone("Done"), Tone::Success);
        assert_eq!(status_tone("IN PROGRESS"), Tone::Info);
        assert_eq!(status_tone("to do"), Tone::Warning);
        assert_eq!(status_tone("Blocked"), Tone::Default);
    }

    #[test]
    fn test_priority_tones() {
        assert_eq!(priority_tone("Highest"), Tone::Error);
        assert_eq!(priority_tone("high"), Tone::Warning);
        assert_eq!(priority_tone("Medium"), Tone::Info);
        assert_eq!(priority_tone("Low"), Tone::Success);
        assert_eq!(priority_tone("None"), Tone::Default);
    }

    #[test]
    fn test_grid_columns_breakpoints() {
        assert_eq!(grid_columns(320), 1);
        assert_eq!(grid_columns(600), 2);
        assert_eq!(grid_columns(1024), 3);
        assert_eq!(grid_columns(1920), 4);
    }

    #[test]
    fn test_browse_url_trims_slash() {
        assert_eq!(
            browse_url("https://acme.atlassian.net/", "OPS-1"),
            "https://acme.atlassian.net/browse/OPS-1"
        );
    }

    #[test]
    fn test_card_combines_override() {
        let mut overrides = CustomPriorities::new();
        overrides.insert("OPS-1".into(), "Low".into());

        let card = IssueCard::build(
            &issue("OPS-1", "Done", "2024-03-05T09:00:00.000+0000"),
            &overrides,
            "https://acme.atlassian.net",
        );

        assert_eq!(card.custom_priority.as_deref(), Some("Low"));
        assert_eq!(card.priority, "Highest");
        assert_eq!(card.status_tone, Tone::Success);
        assert_eq!(card.assignee.as_deref(), Some("Grace"));
        assert_eq!(card.created, "03/05/2024");
        assert_eq!(card.url, "https://acme.atlassian.net/browse/OPS-1");

        let plain = IssueCard::build(&issue("OPS-2", "Done", "garbage"), &overrides, "");
        assert!(plain.custom_priority.is_none());
        assert_eq!(plain.created, "garbage");
    }

    #[test]
    fn test_unassigned_card_has_no_assignee() {
        let mut unassigned = issue("OPS-3", "To Do", "2024-03-05T09:00:00.000+0000");
        unassigned.fields.assignee = None;

        let card = IssueCard::build(&unassigned, &CustomPriorities::new(), "");
        assert!(card.assignee.is_none());
    }
}
