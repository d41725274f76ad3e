//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod income;
pub mod prompt;
pub mod report;
pub mod transaction;

pub use budget::{handle_budget_command, BudgetCommands};
pub use income::{handle_income_command, IncomeCommands};
pub use report::{handle_audit_command, handle_charts_command, handle_summary_command};
pub use transaction::{handle_transaction_command, TransactionCommands};
