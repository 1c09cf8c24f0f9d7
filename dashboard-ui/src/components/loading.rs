//! Loading Component

use leptos::*;

/// Centered loading spinner
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div style="display: flex; justify-content: center; padding: 48px 0;">
            <div class="loading-spinner" style="width: 32px; height: 32px;" />
        </div>
    }
}
