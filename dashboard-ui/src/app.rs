//! App Root Component
//!
//! Provides global state and switches between the login prompt and the
//! dashboard on the auth flag.

use dashboard_core::AuthState;
use leptos::*;

use crate::components::Toast;
use crate::pages::{Dashboard, Login};
use crate::state::global::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_global_state();

    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="app">
            {move || match state.auth.get() {
                AuthState::Authenticated => view! { <Dashboard /> }.into_view(),
                AuthState::Unauthenticated => view! { <Login /> }.into_view(),
            }}

            <Toast />
        </div>
    }
}
