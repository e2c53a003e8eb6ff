//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render console chrome and the two collection panels while
//! reading/writing shared state from Leptos context providers.

pub mod card_panel;
pub mod notice;
pub mod topbar;
pub mod user_panel;
