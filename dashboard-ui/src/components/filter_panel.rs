//! Filter Panel Component
//!
//! Controls for every filter criterion. Each control emits exactly one
//! [`FilterChange`]; the dashboard state keeps the other criteria.

use dashboard_core::filters::{PRIORITY_OPTIONS, STATUS_OPTIONS};
use dashboard_core::{FilterChange, UNASSIGNED};
use leptos::*;

use crate::state::global::GlobalState;

/// Add `value` if absent, remove it if present
fn toggle(selected: &[String], value: &str) -> Vec<String> {
    if selected.iter().any(|s| s == value) {
        selected.iter().filter(|s| *s != value).cloned().collect()
    } else {
        let mut next = selected.to_vec();
        next.push(value.to_string());
        next
    }
}

/// Parse the dependency select: "" any, "true" with links, "false" without
fn parse_dependency_choice(value: &str) -> Option<bool> {
    match value {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Option value for the current dependency filter
fn dependency_choice_value(choice: Option<bool>) -> &'static str {
    match choice {
        Some(true) => "true",
        Some(false) => "false",
        None => "",
    }
}

/// Filter controls
#[component]
pub fn FilterPanel() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let dashboard = state.dashboard;

    let project_state = state.clone();
    let status_state = state.clone();
    let priority_state = state.clone();
    let assignee_state = state.clone();
    let dependency_state = state.clone();
    let after_state = state.clone();
    let before_state = state.clone();
    let clear_state = state;

    view! {
        <div class="filter-panel">
            // Project
            <label>
                "Project"
                <select on:change=move |ev| {
                    let value = event_target_value(&ev);
                    project_state.update_filter(FilterChange::Project(Some(value)));
                }>
                    <option value="">"All Projects"</option>
                    {move || {
                        let current = dashboard.with(|d| d.filters().project.clone()).unwrap_or_default();
                        dashboard.with(|d| d.projects().to_vec()).into_iter().map(|project| {
                            let selected = project.key == current;
                            view! {
                                <option value=project.key.clone() selected=selected>
                                    {project.name}
                                </option>
                            }
                        }).collect_view()
                    }}
                </select>
            </label>

            // Status
            <MultiSelect
                legend="Status"
                options=STATUS_OPTIONS.iter().map(|s| (s.to_string(), s.to_string())).collect()
                selected=Signal::derive(move || dashboard.with(|d| d.filters().status.clone()))
                on_change=Callback::new(move |values| {
                    status_state.update_filter(FilterChange::Status(values))
                })
            />

            // Priority
            <MultiSelect
                legend="Priority"
                options=PRIORITY_OPTIONS.iter().map(|s| (s.to_string(), s.to_string())).collect()
                selected=Signal::derive(move || dashboard.with(|d| d.filters().priority.clone()))
                on_change=Callback::new(move |values| {
                    priority_state.update_filter(FilterChange::Priority(values))
                })
            />

            // Assignee
            <div>
                <div>{move || dashboard.with(|d| d.assignee_summary())}</div>
                {move || {
                    let mut options = vec![(UNASSIGNED.to_string(), "Unassigned".to_string())];
                    options.extend(dashboard.with(|d| {
                        d.assignees()
                            .iter()
                            .map(|a| (a.account_id.clone(), a.display_name.clone()))
                            .collect::<Vec<_>>()
                    }));
                    let state = assignee_state.clone();
                    view! {
                        <MultiSelect
                            legend="Assignee"
                            options=options
                            selected=Signal::derive(move || dashboard.with(|d| d.filters().assignee.clone()))
                            on_change=Callback::new(move |values| {
                                state.update_filter(FilterChange::Assignee(values))
                            })
                        />
                    }
                }}
            </div>

            // Dependencies
            <label>
                "Dependencies"
                <select
                    prop:value=move || {
                        dependency_choice_value(dashboard.with(|d| d.filters().has_dependencies))
                    }
                    on:change=move |ev| {
                        let choice = parse_dependency_choice(&event_target_value(&ev));
                        dependency_state.update_filter(FilterChange::HasDependencies(choice));
                    }
                >
                    <option value="">"Any"</option>
                    <option value="true">"Has dependencies"</option>
                    <option value="false">"No dependencies"</option>
                </select>
            </label>

            // Created range
            <label>
                "Created after"
                <input
                    type="date"
                    prop:value=move || dashboard.with(|d| d.filters().created_after.clone()).unwrap_or_default()
                    on:change=move |ev| {
                        after_state.update_filter(FilterChange::CreatedAfter(Some(event_target_value(&ev))));
                    }
                />
            </label>
            <label>
                "Created before"
                <input
                    type="date"
                    prop:value=move || dashboard.with(|d| d.filters().created_before.clone()).unwrap_or_default()
                    on:change=move |ev| {
                        before_state.update_filter(FilterChange::CreatedBefore(Some(event_target_value(&ev))));
                    }
                />
            </label>

            <div>
                <button class="btn" on:click=move |_| clear_state.clear_filters()>
                    "Clear Filters"
                </button>
            </div>
        </div>
    }
}

/// Checkbox group emitting the full selection on every toggle
#[component]
fn MultiSelect(
    legend: &'static str,
    /// (value, label) pairs
    options: Vec<(String, String)>,
    #[prop(into)]
    selected: Signal<Vec<String>>,
    on_change: Callback<Vec<String>>,
) -> impl IntoView {
    view! {
        <fieldset>
            <legend>{legend}</legend>
            {options.into_iter().map(|(value, label)| {
                let checked_value = value.clone();
                view! {
                    <label style="display: block;">
                        <input
                            type="checkbox"
                            prop:checked=move || selected.with(|s| s.contains(&checked_value))
                            on:change=move |_| {
                                let next = toggle(&selected.get_untracked(), &value);
                                on_change.call(next);
                            }
                        />
                        {label}
                    </label>
                }
            }).collect_view()}
        </fieldset>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_and_removes() {
        let selected = vec!["To Do".to_string()];
        assert_eq!(toggle(&selected, "Done"), vec!["To Do", "Done"]);
        assert!(toggle(&selected, "To Do").is_empty());
    }

    #[test]
    fn test_parse_dependency_choice() {
        assert_eq!(parse_dependency_choice("true"), Some(true));
        assert_eq!(parse_dependency_choice("false"), Some(false));
        assert_eq!(parse_dependency_choice(""), None);
    }

    #[test]
    fn test_dependency_select_reflects_filter() {
        for choice in [None, Some(true), Some(false)] {
            assert_eq!(parse_dependency_choice(dependency_choice_value(choice)), choice);
        }
    }
}
