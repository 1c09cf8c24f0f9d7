//! Issue Card Component
//!
//! One issue in the grid, with a custom priority selector.

use dashboard_core::priorities::CUSTOM_PRIORITY_LABELS;
use dashboard_core::view::IssueCard as CardData;
use leptos::*;

use crate::state::global::GlobalState;

/// Select value meaning "no override"
const NO_OVERRIDE: &str = "";

/// Card for a single issue
#[component]
pub fn IssueCard(card: CardData) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let key = card.key.clone();
    let on_priority_change = move |ev: ev::Event| {
        let value = event_target_value(&ev);
        let label = (value != NO_OVERRIDE).then_some(value);
        state.set_priority(key.clone(), label);
    };

    let current = card.custom_priority.clone().unwrap_or_default();

    view! {
        <div class="issue-card">
            <div style="display: flex; justify-content: space-between; align-items: center;">
                <a href=card.url target="_blank" rel="noopener noreferrer">{card.key}</a>
                <span class=format!("badge {}", card.status_tone.css_class())>{card.status}</span>
            </div>

            <div class="issue-summary">{card.summary}</div>

            <div style="display: flex; gap: 8px; align-items: center;">
                <span class=format!("badge {}", card.priority_tone.css_class())>{card.priority}</span>
                {card.custom_priority.map(|label| view! {
                    <span class="badge badge-default">{format!("Custom: {}", label)}</span>
                })}
            </div>

            <label>
                "Custom priority "
                <select on:change=on_priority_change>
                    <option value=NO_OVERRIDE selected=current.is_empty()>"None"</option>
                    {CUSTOM_PRIORITY_LABELS.iter().map(|label| {
                        let selected = current == *label;
                        view! { <option value=*label selected=selected>{*label}</option> }
                    }).collect_view()}
                </select>
            </label>

            <div style="display: flex; justify-content: space-between; gap: 8px; font-size: 12px;">
                {card.assignee.map(|name| view! { <span>{name}</span> })}
                <span>{card.created}</span>
            </div>
        </div>
    }
}
