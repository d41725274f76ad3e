//! Display formatting for terminal output
//!
//! Provides utilities for formatting ledger data for terminal display,
//! including tables and status indicators.

pub mod budget;
pub mod transaction;

pub use budget::{format_allocation, format_budget_table, format_projection};
pub use transaction::{format_date, format_transaction_details, format_transaction_table};
