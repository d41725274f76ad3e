//! Persistence adapter
//!
//! Maps the three ledger records onto store keys and owns their
//! serialization format:
//!
//! - `financeflow.income`: decimal number as text ("50000")
//! - `financeflow.budget`: JSON object with the six category keys
//! - `financeflow.transactions`: JSON array of transaction records

use crate::error::{FinanceError, FinanceResult};
use crate::models::{Budget, LedgerState, Money, Transaction};

use super::store::{KeyValueStore, StoreOp};

pub const INCOME_KEY: &str = "financeflow.income";
pub const BUDGET_KEY: &str = "financeflow.budget";
pub const TRANSACTIONS_KEY: &str = "financeflow.transactions";

/// Reads and writes ledger records through a [`KeyValueStore`]
#[derive(Debug)]
pub struct PersistenceAdapter<S> {
    store: S,
}

impl<S: KeyValueStore> PersistenceAdapter<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Load all three records
    pub fn load(&self) -> FinanceResult<LedgerState> {
        Ok(LedgerState {
            income: self.load_income()?,
            budget: self.load_budget()?,
            transactions: self.load_transactions()?,
        })
    }

    /// Load income; absent, unparseable or non-positive text means unset
    pub fn load_income(&self) -> FinanceResult<Option<Money>> {
        let Some(text) = self.store.get(INCOME_KEY)? else {
            return Ok(None);
        };

        Ok(text
            .trim()
            .parse::<f64>()
            .ok()
            .and_then(Money::from_f64)
            .filter(|income| income.is_positive()))
    }

    /// Load the budget map, falling back to all-zero when absent
    pub fn load_budget(&self) -> FinanceResult<Budget> {
        match self.store.get(BUDGET_KEY)? {
            Some(json) => serde_json::from_str(&json).map_err(|e| {
                FinanceError::Storage(format!("Failed to parse stored budget: {}", e))
            }),
            None => Ok(Budget::zeroed()),
        }
    }

    /// Load the transaction list, newest first
    pub fn load_transactions(&self) -> FinanceResult<Vec<Transaction>> {
        match self.store.get(TRANSACTIONS_KEY)? {
            Some(json) => serde_json::from_str(&json).map_err(|e| {
                FinanceError::Storage(format!("Failed to parse stored transactions: {}", e))
            }),
            None => Ok(Vec::new()),
        }
    }

    /// Write operation for the income record
    pub fn income_op(income: Option<Money>) -> StoreOp {
        match income {
            Some(amount) => StoreOp::set(INCOME_KEY, amount.to_decimal_string()),
            None => StoreOp::remove(INCOME_KEY),
        }
    }

    /// Write operation for the budget record
    pub fn budget_op(budget: &Budget) -> FinanceResult<StoreOp> {
        Ok(StoreOp::set(BUDGET_KEY, serde_json::to_string(budget)?))
    }

    /// Write operation for the transactions record; an empty list removes it
    pub fn transactions_op(transactions: &[Transaction]) -> FinanceResult<StoreOp> {
        if transactions.is_empty() {
            return Ok(StoreOp::remove(TRANSACTIONS_KEY));
        }
        Ok(StoreOp::set(
            TRANSACTIONS_KEY,
            serde_json::to_string(transactions)?,
        ))
    }

    /// Apply a batch of record writes atomically
    pub fn commit(&mut self, batch: &[StoreOp]) -> FinanceResult<()> {
        self.store.apply(batch)
    }

    /// Persist every record of `state` in one batch
    pub fn save_all(&mut self, state: &LedgerState) -> FinanceResult<()> {
        let batch = [
            Self::income_op(state.income),
            Self::budget_op(&state.budget)?,
            Self::transactions_op(&state.transactions)?,
        ];
        self.commit(&batch)
    }

    /// The underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mutable access to the underlying store
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}
