//! Core data models for FinanceFlow
//!
//! This module contains the data structures that represent the tracking
//! domain: money amounts, categories, budgets, transactions and periods.

pub mod budget;
pub mod category;
pub mod ids;
pub mod money;
pub mod period;
pub mod state;
pub mod transaction;

pub use budget::{Budget, BudgetValidationError};
pub use category::{Category, CategoryParseError};
pub use ids::{IdGenerator, TransactionId};
pub use money::{Money, MoneyParseError, CURRENCY_SYMBOL};
pub use period::{Period, PeriodParseError};
pub use state::LedgerState;
pub use transaction::{Transaction, TransactionValidationError};
