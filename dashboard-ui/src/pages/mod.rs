//! Pages
//!
//! Top-level views selected by the auth state.

pub mod dashboard;
pub mod login;

pub use dashboard::Dashboard;
pub use login::Login;
