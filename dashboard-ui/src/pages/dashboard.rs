//! Dashboard Page
//!
//! Header, filter panel and the issue grid.

use dashboard_core::view::{grid_columns, EMPTY_HINT, EMPTY_TITLE};
use dashboard_core::{DashboardView, FilterChange};
use leptos::*;

use crate::components::{FilterPanel, IssueCard, Loading};
use crate::state::global::GlobalState;

fn viewport_width() -> u32 {
    window()
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .map(|w| w as u32)
        .unwrap_or(1200)
}

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let dashboard = state.dashboard;

    // Fetch initial data on mount
    state.mount();

    let width = create_rw_signal(viewport_width());
    let resize = window_event_listener(ev::resize, move |_| width.set(viewport_width()));
    on_cleanup(move || resize.remove());

    let browse_base = state.options.browse_base.clone();
    let filters_open = state.filters_open;
    let logout_state = state.clone();
    let reset_state = state.clone();

    view! {
        <header class="app-bar">
            <h1 style="margin: 0; font-size: 20px;">"Jira Issues Dashboard"</h1>
            <div style="display: flex; gap: 8px; align-items: center;">
                <span>{move || format!("Total Issues: {}", dashboard.with(|d| d.total()))}</span>
                <button class="btn btn-outline" on:click=move |_| filters_open.update(|open| *open = !*open)>
                    {move || if filters_open.get() { "Hide Filters" } else { "Show Filters" }}
                </button>
                <button class="btn btn-outline" on:click=move |_| reset_state.clear_all_priorities()>
                    "Reset Priorities"
                </button>
                <button class="btn btn-outline" on:click=move |_| logout_state.logout()>
                    "Logout"
                </button>
            </div>
        </header>

        <main class="container">
            <Show when=move || filters_open.get()>
                <FilterPanel />
            </Show>

            {move || match dashboard.with(|d| d.view(&browse_base)) {
                DashboardView::Loading => view! { <Loading /> }.into_view(),
                DashboardView::Error(message) => view! {
                    <div class="alert-error">{message}</div>
                }.into_view(),
                DashboardView::Empty => view! {
                    <div class="empty-state">
                        <h2>{EMPTY_TITLE}</h2>
                        <p>{EMPTY_HINT}</p>
                    </div>
                }.into_view(),
                DashboardView::Grid(cards) => view! {
                    <div
                        class="issue-grid"
                        style=move || format!(
                            "grid-template-columns: repeat({}, minmax(0, 1fr));",
                            grid_columns(width.get())
                        )
                    >
                        {cards.into_iter().map(|card| view! { <IssueCard card=card /> }).collect_view()}
                    </div>
                    <Pager />
                }.into_view(),
            }}
        </main>
    }
}

/// Previous / next page controls
#[component]
fn Pager() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let dashboard = state.dashboard;

    let page = move || {
        dashboard.with(|d| {
            let filters = d.filters();
            (filters.start_at_or_default(), filters.max_results_or_default(), d.total())
        })
    };

    let prev_state = state.clone();
    let next_state = state;

    view! {
        <div style="display: flex; justify-content: center; gap: 16px; padding: 24px 0;">
            <button
                class="btn"
                disabled=move || page().0 == 0
                on:click=move |_| {
                    let (start_at, max_results, _) = page();
                    prev_state.update_filter(FilterChange::Page {
                        start_at: start_at.saturating_sub(max_results),
                        max_results,
                    });
                }
            >
                "Previous"
            </button>
            <span>{move || {
                let (start_at, max_results, total) = page();
                let last = (u64::from(start_at) + u64::from(max_results)).min(total);
                format!("{}-{} of {}", u64::from(start_at) + 1, last, total)
            }}</span>
            <button
                class="btn"
                disabled=move || {
                    let (start_at, max_results, total) = page();
                    u64::from(start_at) + u64::from(max_results) >= total
                }
                on:click=move |_| {
                    let (start_at, max_results, _) = page();
                    next_state.update_filter(FilterChange::Page {
                        start_at: start_at + max_results,
                        max_results,
                    });
                }
            >
                "Next"
            </button>
        </div>
    }
}
