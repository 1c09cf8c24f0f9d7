//! Tracker Data Model
//!
//! Read-only records returned by the issue tracker. Only the fields the
//! dashboard actually reads are modelled; anything else in the payload is
//! ignored on deserialization.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A tracked work item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub id: String,
    /// Human-readable key, e.g. "OPS-42"
    pub key: String,
    pub fields: IssueFields,
}

/// Field block of an issue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueFields {
    #[serde(default)]
    pub summary: String,
    /// Plain string on older APIs, a rich document on newer ones
    #[serde(default)]
    pub description: Option<serde_json::Value>,
    pub status: NamedField,
    #[serde(default)]
    pub priority: Option<NamedField>,
    #[serde(default)]
    pub assignee: Option<AssigneeRef>,
    pub created: String,
    #[serde(default)]
    pub updated: Option<String>,
}

/// `{ "name": ... }` shaped fields (status, priority)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedField {
    pub name: String,
}

/// Assignee as embedded in an issue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssigneeRef {
    pub display_name: String,
}

impl Issue {
    pub fn status_name(&self) -> &str {
        &self.fields.status.name
    }

    /// Native priority name, "None" when the tracker has none set
    pub fn priority_name(&self) -> &str {
        self.fields
            .priority
            .as_ref()
            .map(|p| p.name.as_str())
            .unwrap_or("None")
    }

    pub fn assignee_name(&self) -> Option<&str> {
        self.fields.assignee.as_ref().map(|a| a.display_name.as_str())
    }

    /// Description text when the tracker sent a plain string
    pub fn description_text(&self) -> Option<&str> {
        self.fields.description.as_ref().and_then(|d| d.as_str())
    }

    /// Parsed creation timestamp
    pub fn created_at(&self) -> Option<DateTime<FixedOffset>> {
        parse_tracker_timestamp(&self.fields.created)
    }
}

/// Parse a tracker timestamp.
///
/// Jira emits `2024-01-15T10:30:00.000+0000` (no colon in the offset), which
/// is not RFC 3339; both shapes are accepted.
pub fn parse_tracker_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f%z")
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .ok()
}

/// Result page of an issue search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    #[serde(default)]
    pub issues: Vec<Issue>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub max_results: u64,
    #[serde(default)]
    pub start_at: u64,
}

/// Tracker project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub key: String,
    pub name: String,
}

/// Assignable user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignee {
    pub account_id: String,
    pub display_name: String,
}

/// Sort assignees by display name, case-insensitive, ties broken by the raw name
pub fn sort_assignees(assignees: &mut [Assignee]) {
    assignees.sort_by(|a, b| {
        a.display_name
            .to_lowercase()
            .cmp(&b.display_name.to_lowercase())
            .then_with(|| a.display_name.cmp(&b.display_name))
    });
}
