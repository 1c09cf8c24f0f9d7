//! JQL Builder
//!
//! Translates a [`SearchParams`] filter set into the tracker's query
//! language and the search request body sent to the proxy.
//!
//! Clauses are emitted in a fixed order (project, status, priority,
//! assignee, dependencies, created bounds), joined with `AND`, and the
//! query always ends with `ORDER BY created DESC`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::filters::{SearchParams, UNASSIGNED};

/// Ordering directive appended to every query
pub const ORDER_BY_CREATED_DESC: &str = "ORDER BY created DESC";

/// Issue fields requested from the tracker
pub const SEARCH_FIELDS: [&str; 9] = [
    "summary",
    "description",
    "status",
    "priority",
    "assignee",
    "created",
    "updated",
    "project",
    "issuelinks",
];

/// One AND-joined term of a query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Clause {
    /// `field = "value"`
    Equals { field: &'static str, value: String },
    /// `field in ("a","b")`
    In { field: &'static str, values: Vec<String> },
    /// `field is EMPTY`, optionally OR-ed with an `in` list
    EmptyOrIn { field: &'static str, values: Vec<String> },
    /// `issueFunction in linkedIssuesOf("issueKey")`, negated with `NOT`
    LinkedIssues { present: bool },
    /// `field >= "value"`
    AtLeast { field: &'static str, value: String },
    /// `field <= "value"`
    AtMost { field: &'static str, value: String },
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Clause::Equals { field, value } => write!(f, "{} = {}", field, quote(value)),
            Clause::In { field, values } => write!(f, "{} in ({})", field, quote_list(values)),
            Clause::EmptyOrIn { field, values } if values.is_empty() => {
                write!(f, "{} is EMPTY", field)
            }
            Clause::EmptyOrIn { field, values } => write!(
                f,
                "({field} is EMPTY OR {field} in ({}))",
                quote_list(values)
            ),
            Clause::LinkedIssues { present: true } => {
                write!(f, "issueFunction in linkedIssuesOf(\"issueKey\")")
            }
            Clause::LinkedIssues { present: false } => {
                write!(f, "NOT issueFunction in linkedIssuesOf(\"issueKey\")")
            }
            Clause::AtLeast { field, value } => write!(f, "{} >= {}", field, quote(value)),
            Clause::AtMost { field, value } => write!(f, "{} <= {}", field, quote(value)),
        }
    }
}

/// Quote a value as a JQL string literal
fn quote(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{}\"", escaped)
}

fn quote_list(values: &[String]) -> String {
    values.iter().map(|v| quote(v)).collect::<Vec<_>>().join(",")
}

/// Collect the clauses a filter set contributes; absent filters add nothing
pub fn clauses(params: &SearchParams) -> Vec<Clause> {
    let mut clauses = Vec::new();

    if let Some(project) = &params.project {
        clauses.push(Clause::Equals {
            field: "project",
            value: project.clone(),
        });
    }

    if !params.status.is_empty() {
        clauses.push(Clause::In {
            field: "status",
            values: params.status.clone(),
        });
    }

    if !params.priority.is_empty() {
        clauses.push(Clause::In {
            field: "priority",
            values: params.priority.clone(),
        });
    }

    if !params.assignee.is_empty() {
        if params.includes_unassigned() {
            let others = params
                .assignee
                .iter()
                .filter(|a| a.as_str() != UNASSIGNED)
                .cloned()
                .collect();
            clauses.push(Clause::EmptyOrIn {
                field: "assignee",
                values: others,
            });
        } else {
            clauses.push(Clause::In {
                field: "assignee",
                values: params.assignee.clone(),
            });
        }
    }

    if let Some(present) = params.has_dependencies {
        clauses.push(Clause::LinkedIssues { present });
    }

    if let Some(after) = &params.created_after {
        clauses.push(Clause::AtLeast {
            field: "created",
            value: after.clone(),
        });
    }

    if let Some(before) = &params.created_before {
        clauses.push(Clause::AtMost {
            field: "created",
            value: before.clone(),
        });
    }

    clauses
}

/// Build the full JQL string for a filter set
pub fn build_jql(params: &SearchParams) -> String {
    let clauses = clauses(params);
    if clauses.is_empty() {
        return ORDER_BY_CREATED_DESC.to_string();
    }

    let joined = clauses
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" AND ");

    format!("{} {}", joined, ORDER_BY_CREATED_DESC)
}

/// Body of `POST /search`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub jql: String,
    pub start_at: u32,
    pub max_results: u32,
    pub fields: Vec<String>,
}

impl SearchRequest {
    /// Build the request for a filter set, applying paging defaults
    pub fn from_params(params: &SearchParams) -> Self {
        Self {
            jql: build_jql(params),
            start_at: params.start_at_or_default(),
            max_results: params.max_results_or_default(),
            fields: SEARCH_FIELDS.iter().map(|f| f.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::FilterChange;

    #[test]
    fn test_empty_filters_only_order() {
        let jql = build_jql(&SearchParams::default());
        assert_eq!(jql, "ORDER BY created DESC");
    }

    #[test]
    fn test_empty_lists_contribute_nothing() {
        let params = SearchParams {
            status: vec![],
            priority: vec![],
            assignee: vec![],
            ..Default::default()
        };
        assert_eq!(build_jql(&params), ORDER_BY_CREATED_DESC);
    }

    #[test]
    fn test_all_clauses_in_order() {
        let params = SearchParams::default()
            .with(FilterChange::Project(Some("OPS".into())))
            .with(FilterChange::Status(vec!["To Do".into(), "Done".into()]))
            .with(FilterChange::Priority(vec!["High".into()]))
            .with(FilterChange::Assignee(vec!["acc-1".into()]))
            .with(FilterChange::HasDependencies(Some(true)))
            .with(FilterChange::CreatedAfter(Some("2024-01-01".into())))
            .with(FilterChange::CreatedBefore(Some("2024-12-31".into())));

        assert_eq!(
            build_jql(&params),
            "project = \"OPS\" AND status in (\"To Do\",\"Done\") AND priority in (\"High\") \
             AND assignee in (\"acc-1\") AND issueFunction in linkedIssuesOf(\"issueKey\") \
             AND created >= \"2024-01-01\" AND created <= \"2024-12-31\" ORDER BY created DESC"
        );
    }

    #[test]
    fn test_unassigned_sentinel_or_clause() {
        let params = SearchParams::default().with(FilterChange::Assignee(vec![
            "acc-1".into(),
            UNASSIGNED.into(),
            "acc-2".into(),
        ]));

        assert_eq!(
            build_jql(&params),
            "(assignee is EMPTY OR assignee in (\"acc-1\",\"acc-2\")) ORDER BY created DESC"
        );
    }

    #[test]
    fn test_unassigned_only() {
        let params = SearchParams::default().with(FilterChange::Assignee(vec![UNASSIGNED.into()]));
        assert_eq!(build_jql(&params), "assignee is EMPTY ORDER BY created DESC");
    }

    #[test]
    fn test_without_dependencies_negated() {
        let params = SearchParams::default().with(FilterChange::HasDependencies(Some(false)));
        assert_eq!(
            build_jql(&params),
            "NOT issueFunction in linkedIssuesOf(\"issueKey\") ORDER BY created DESC"
        );
    }

    #[test]
    fn test_quotes_are_escaped() {
        let params = SearchParams::default().with(FilterChange::Project(Some("A\"B".into())));
        assert_eq!(build_jql(&params), "project = \"A\\\"B\" ORDER BY created DESC");
    }

    #[test]
    fn test_search_request_defaults() {
        let request = SearchRequest::from_params(&SearchParams::default());
        assert_eq!(request.start_at, 0);
        assert_eq!(request.max_results, 50);
        assert!(request.fields.iter().any(|f| f == "issuelinks"));

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["maxResults"], 50);
        assert_eq!(body["jql"], "ORDER BY created DESC");
    }

    #[test]
    fn test_zero_max_results_sent_as_default() {
        let params = SearchParams {
            max_results: Some(0),
            ..Default::default()
        };
        assert_eq!(SearchRequest::from_params(&params).max_results, 50);
    }
}
