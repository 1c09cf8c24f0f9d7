//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod filter_panel;
pub mod issue_card;
pub mod loading;
pub mod toast;

pub use filter_panel::FilterPanel;
pub use issue_card::IssueCard;
pub use loading::Loading;
pub use toast::Toast;
