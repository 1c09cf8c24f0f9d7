//! Jira Issues Dashboard
//!
//! Password-gated issue dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Login gate backed by `localStorage`
//! - Project, status, priority, assignee, dependency and date filters
//! - Custom priority overrides stored by the backend
//!
//! # Architecture
//!
//! Client-side rendered (CSR) Leptos application. All tracker traffic goes
//! through the dashboard backend (`/api/jira/*`, `/api/priorities`), so the
//! tracker credentials never reach the browser.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
