//! Dialog modules for the TUI
//!
//! Contains modal dialogs for destructive operations

pub mod confirm;
