//! The complete set of persisted records
//!
//! Bundles income, budget and transactions so they can be loaded, saved and
//! handed to the statistics functions as one value.

use serde::{Deserialize, Serialize};

use super::budget::Budget;
use super::money::Money;
use super::transaction::Transaction;

/// Income, budget and transaction list as one snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerState {
    /// Monthly income, unset until the user provides one
    pub income: Option<Money>,

    /// Per-category allocations
    pub budget: Budget,

    /// Transactions, newest first
    pub transactions: Vec<Transaction>,
}

impl LedgerState {
    /// An empty state: no income, zeroed budget, no transactions
    pub fn empty() -> Self {
        Self::default()
    }
}
