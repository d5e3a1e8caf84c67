//! Reusable widgets shared across the TUI.

pub mod client_form;
