//! Ledger service
//!
//! The ledger owns income, budget and transactions for the running session.
//! Every mutation validates its input, builds the next state, writes it to
//! the store in one batch and only then replaces the in-memory state. A store
//! failure therefore leaves the ledger exactly as it was.
//!
//! Audit entries are written after the commit. A failed audit write does not
//! undo or fail the change; it is kept for the caller to report through
//! [`Ledger::take_audit_failure`].

use chrono::NaiveDate;
use serde_json::json;

use crate::audit::{AuditEntry, AuditLogger, AuditTarget};
use crate::error::{FinanceError, FinanceResult};
use crate::models::{
    Budget, Category, IdGenerator, LedgerState, Money, Transaction, TransactionId,
};
use crate::storage::{KeyValueStore, PersistenceAdapter, StoreOp};

use super::confirmation::{Confirmation, Outcome};

/// Result of a single-transaction delete
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Removal {
    /// The transaction existed and is gone
    Removed(Transaction),
    /// No transaction had that id; nothing changed
    NotFound,
    /// The user declined
    Cancelled,
}

impl Removal {
    pub fn is_removed(&self) -> bool {
        matches!(self, Self::Removed(_))
    }
}

/// The authoritative record of income, budget and transactions
pub struct Ledger<S: KeyValueStore> {
    state: LedgerState,
    adapter: PersistenceAdapter<S>,
    ids: IdGenerator,
    audit: Option<AuditLogger>,
    audit_failure: Option<FinanceError>,
}

impl<S: KeyValueStore> Ledger<S> {
    /// Load the ledger from `store`
    pub fn open(store: S) -> FinanceResult<Self> {
        let adapter = PersistenceAdapter::new(store);
        let state = adapter.load()?;
        let ids = IdGenerator::seeded(state.transactions.iter().map(|t| &t.id));

        Ok(Self {
            state,
            adapter,
            ids,
            audit: None,
            audit_failure: None,
        })
    }

    /// Record every successful mutation in `logger`
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    /// Monthly income, if set
    pub fn income(&self) -> Option<Money> {
        self.state.income
    }

    pub fn budget(&self) -> &Budget {
        &self.state.budget
    }

    /// All transactions, newest first
    pub fn transactions(&self) -> &[Transaction] {
        &self.state.transactions
    }

    /// Snapshot for the statistics functions
    pub fn state(&self) -> &LedgerState {
        &self.state
    }

    /// Find a transaction by id
    pub fn find_transaction(&self, id: TransactionId) -> Option<&Transaction> {
        self.state.transactions.iter().find(|t| t.id == id)
    }

    /// The underlying store
    pub fn store(&self) -> &S {
        self.adapter.store()
    }

    /// The last audit write that failed since this was last called
    ///
    /// The change it described was committed regardless.
    pub fn take_audit_failure(&mut self) -> Option<FinanceError> {
        self.audit_failure.take()
    }

    /// Set the monthly income
    ///
    /// Budgets are left alone even if they now exceed the new income; the
    /// statistics report that as an over-allocation.
    pub fn set_income(&mut self, amount: Money) -> FinanceResult<()> {
        if !amount.is_positive() || amount.exceeds_limit() {
            return Err(FinanceError::Validation(
                "Please enter a valid monthly income".into(),
            ));
        }

        let before = self.state.income;
        let mut next = self.state.clone();
        next.income = Some(amount);

        self.commit(next, &[PersistenceAdapter::<S>::income_op(Some(amount))])?;

        let summary = format!(
            "{} -> {}",
            before.map_or_else(|| "unset".to_string(), |m| m.to_string()),
            amount
        );
        self.record(vec![
            AuditEntry::updated(AuditTarget::Income, &before, &Some(amount)).described(summary),
        ]);
        Ok(())
    }

    /// Clear income, budgets and transactions
    pub fn reset_income(&mut self, confirmation: Confirmation) -> FinanceResult<Outcome> {
        if !confirmation.is_confirmed() {
            return Ok(Outcome::Cancelled);
        }

        let before = self.state.clone();
        let next = LedgerState::empty();
        let batch = [
            PersistenceAdapter::<S>::income_op(None),
            PersistenceAdapter::<S>::budget_op(&next.budget)?,
            PersistenceAdapter::<S>::transactions_op(&next.transactions)?,
        ];
        self.commit(next, &batch)?;

        let mut entries = vec![AuditEntry::deleted(AuditTarget::Income, &before.income)];
        entries.extend(budget_reset_entries(&before));
        self.record(entries);

        Ok(Outcome::Applied)
    }

    /// Zero every budget and clear all transactions; income is kept
    pub fn reset_all_budgets(&mut self, confirmation: Confirmation) -> FinanceResult<Outcome> {
        if !confirmation.is_confirmed() {
            return Ok(Outcome::Cancelled);
        }

        let before = self.state.clone();
        let mut next = self.state.clone();
        next.budget = Budget::zeroed();
        next.transactions.clear();

        let batch = [
            PersistenceAdapter::<S>::budget_op(&next.budget)?,
            PersistenceAdapter::<S>::transactions_op(&next.transactions)?,
        ];
        self.commit(next, &batch)?;
        self.record(budget_reset_entries(&before));

        Ok(Outcome::Applied)
    }

    /// Allocate `amount` to `category`
    ///
    /// Rejected when the new total of all budgets would exceed income. An
    /// unset income counts as zero, so only zero allocations pass until
    /// income is set.
    pub fn set_budget(&mut self, category: Category, amount: Money) -> FinanceResult<()> {
        Budget::validate_amount(amount).map_err(|e| FinanceError::Validation(e.to_string()))?;

        let income = self.state.income.unwrap_or_default();
        let projected = self.state.budget.projected_total(category, amount);
        if projected > income {
            return Err(FinanceError::OverAllocation { projected, income });
        }

        let before = self.state.budget;
        let mut next = self.state.clone();
        next.budget.set(category, amount);

        let op = PersistenceAdapter::<S>::budget_op(&next.budget)?;
        self.commit(next, &[op])?;

        let after = self.state.budget;
        self.record(vec![AuditEntry::updated(
            AuditTarget::Budget(category),
            &before,
            &after,
        )
        .labelled(category.label())]);
        Ok(())
    }

    /// Record a new expense and return it
    ///
    /// The merchant is stored trimmed. New transactions go to the front of
    /// the list.
    pub fn add_transaction(
        &mut self,
        merchant: &str,
        amount: Money,
        category: Category,
        date: NaiveDate,
    ) -> FinanceResult<Transaction> {
        let mut ids = self.ids.clone();
        let txn = Transaction::new(ids.next(), merchant.trim(), amount, category, date);
        txn.validate()
            .map_err(|e| FinanceError::Validation(e.to_string()))?;

        let mut next = self.state.clone();
        next.transactions.insert(0, txn.clone());

        let op = PersistenceAdapter::<S>::transactions_op(&next.transactions)?;
        self.commit(next, &[op])?;
        self.ids = ids;

        self.record(vec![
            AuditEntry::created(AuditTarget::Transaction(txn.id), &txn).labelled(txn.merchant.clone()),
        ]);

        Ok(txn)
    }

    /// Delete one transaction
    ///
    /// Deleting an id that does not exist is a no-op, so repeating a delete
    /// is harmless.
    pub fn delete_transaction(
        &mut self,
        id: TransactionId,
        confirmation: Confirmation,
    ) -> FinanceResult<Removal> {
        if !confirmation.is_confirmed() {
            return Ok(Removal::Cancelled);
        }

        let Some(position) = self.state.transactions.iter().position(|t| t.id == id) else {
            return Ok(Removal::NotFound);
        };

        let mut next = self.state.clone();
        let removed = next.transactions.remove(position);

        let op = PersistenceAdapter::<S>::transactions_op(&next.transactions)?;
        self.commit(next, &[op])?;

        self.record(vec![AuditEntry::deleted(
            AuditTarget::Transaction(removed.id),
            &removed,
        )
        .labelled(removed.merchant.clone())]);

        Ok(Removal::Removed(removed))
    }

    /// Delete every transaction
    pub fn delete_all_transactions(
        &mut self,
        confirmation: Confirmation,
    ) -> FinanceResult<Outcome> {
        if !confirmation.is_confirmed() {
            return Ok(Outcome::Cancelled);
        }

        let before = self.state.clone();
        let mut next = self.state.clone();
        next.transactions.clear();

        let op = PersistenceAdapter::<S>::transactions_op(&next.transactions)?;
        self.commit(next, &[op])?;
        self.record(transaction_delete_entries(&before.transactions));

        Ok(Outcome::Applied)
    }

    /// Write `batch`, then adopt `next` as the current state
    fn commit(&mut self, next: LedgerState, batch: &[StoreOp]) -> FinanceResult<()> {
        self.adapter.commit(batch)?;
        self.state = next;
        Ok(())
    }

    fn record(&mut self, entries: Vec<AuditEntry>) {
        let Some(logger) = &self.audit else {
            return;
        };
        if let Err(e) = logger.log_batch(&entries) {
            self.audit_failure = Some(e);
        }
    }
}

/// Parse user input for a budget amount
///
/// Anything that is not a number counts as zero.
pub fn parse_budget_input(input: &str) -> Money {
    Money::parse(input).unwrap_or_default()
}

fn budget_reset_entries(before: &LedgerState) -> Vec<AuditEntry> {
    let zeroed = Budget::zeroed();
    let mut entries = Vec::new();

    if before.budget != zeroed {
        entries.push(AuditEntry::updated(
            AuditTarget::AllBudgets,
            &before.budget,
            &zeroed,
        ));
    }

    entries.extend(transaction_delete_entries(&before.transactions));
    entries
}

fn transaction_delete_entries(transactions: &[Transaction]) -> Vec<AuditEntry> {
    if transactions.is_empty() {
        return Vec::new();
    }

    let ids: Vec<i64> = transactions.iter().map(|t| t.id.as_i64()).collect();
    vec![AuditEntry::deleted(AuditTarget::AllTransactions, &json!({ "ids": ids }))
        .labelled(format!("{} transactions", transactions.len()))]
}
