//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome and static mock data. They hold no
//! business logic: navigation intents go back to the page through callbacks.

pub mod analysis_panel;
pub mod dashboard_nav;
pub mod forms_panel;
pub mod forms_table;
pub mod inert_modals;
pub mod not_found_panel;
pub mod overview_panel;
pub mod score_badge;
pub mod settings_panel;
pub mod stat_card;
pub mod submission_panel;
pub mod submissions_table;
