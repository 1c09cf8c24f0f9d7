//! Custom Priority Overrides
//!
//! A label per issue key, stored by the backend and layered over the
//! tracker's native priority at render time. Never written back to the
//! tracker.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Issue key → override label
pub type CustomPriorities = BTreeMap<String, String>;

/// Labels offered by the per-card priority selector
pub const CUSTOM_PRIORITY_LABELS: [&str; 5] = ["Highest", "High", "Medium", "Low", "Lowest"];

/// Body of `POST /api/priorities/{issueKey}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetPriorityRequest {
    pub priority: String,
}

/// Response of `POST /api/priorities/{issueKey}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriorityEntry {
    pub issue_key: String,
    pub priority: String,
}

/// Apply an override edit to a map: `Some` sets, `None` removes
pub fn apply_override(map: &mut CustomPriorities, issue_key: &str, label: Option<&str>) {
    match label {
        Some(label) => {
            map.insert(issue_key.to_string(), label.to_string());
        }
        None => {
            map.remove(issue_key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_override_set_and_remove() {
        let mut map = CustomPriorities::new();
        apply_override(&mut map, "OPS-1", Some("High"));
        assert_eq!(map.get("OPS-1").map(String::as_str), Some("High"));

        apply_override(&mut map, "OPS-1", Some("Low"));
        assert_eq!(map.get("OPS-1").map(String::as_str), Some("Low"));

        apply_override(&mut map, "OPS-1", None);
        assert!(map.is_empty());
    }

    #[test]
    fn test_map_serializes_as_object() {
        let mut map = CustomPriorities::new();
        map.insert("A-1".into(), "High".into());
        assert_eq!(serde_json::to_string(&map).unwrap(), r#"{"A-1":"High"}"#);
    }
}
