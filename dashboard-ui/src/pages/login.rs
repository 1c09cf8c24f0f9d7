//! Login Page
//!
//! Password prompt in front of the dashboard.

use leptos::*;

use crate::state::global::GlobalState;

/// Login page component
#[component]
pub fn Login() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (password, set_password) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        match state.login(&password.get()) {
            Ok(()) => set_error.set(None),
            Err(e) => {
                set_error.set(Some(e.to_string()));
                set_password.set(String::new());
            }
        }
    };

    view! {
        <form class="login-card" on:submit=on_submit>
            <h1>"Jira Issues Dashboard"</h1>
            <p>"Enter the dashboard password to continue."</p>

            <input
                type="password"
                placeholder="Password"
                autofocus=true
                prop:value=move || password.get()
                on:input=move |ev| set_password.set(event_target_value(&ev))
            />

            {move || error.get().map(|msg| view! {
                <div class="alert-error">{msg}</div>
            })}

            <button type="submit" class="btn">"Login"</button>
        </form>
    }
}
