//! Terminal dashboard
//!
//! A single-screen ratatui view of the ledger: summary header, recent
//! transactions, budget gauges and the budget chart, with confirmation
//! dialogs for destructive actions.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
