//! Confirmation of destructive operations
//!
//! Resetting income, resetting budgets and deleting transactions all need an
//! affirmative answer first. The ledger takes the answer as a plain
//! [`Confirmation`] value; the CLI prompt and the dashboard dialog both drive
//! a [`ConfirmationFlow`] to get one.

use std::fmt;

use crate::models::TransactionId;

/// The user's answer to a confirmation prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Cancelled,
}

impl Confirmation {
    /// Map a yes/no answer
    pub fn from_bool(confirmed: bool) -> Self {
        if confirmed {
            Self::Confirmed
        } else {
            Self::Cancelled
        }
    }

    pub fn is_confirmed(&self) -> bool {
        matches!(self, Self::Confirmed)
    }
}

/// What a destructive ledger operation ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The change was made and persisted
    Applied,
    /// The user declined; nothing changed
    Cancelled,
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// A destructive operation waiting for confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    ResetIncome,
    ResetAllBudgets,
    DeleteTransaction(TransactionId),
    DeleteAllTransactions,
}

impl PendingAction {
    /// Short title for dialogs
    pub fn title(&self) -> &'static str {
        match self {
            Self::ResetIncome => "Reset Income",
            Self::ResetAllBudgets => "Reset Budgets",
            Self::DeleteTransaction(_) => "Delete Transaction",
            Self::DeleteAllTransactions => "Delete All Transactions",
        }
    }

    /// The question put to the user
    pub fn prompt(&self) -> &'static str {
        match self {
            Self::ResetIncome => {
                "⚠️ Reset monthly income AND delete all expenditure data?\nThis action cannot be undone."
            }
            Self::ResetAllBudgets => {
                "⚠️ Reset ALL budgets and DELETE all expenditure history?\nThis action cannot be undone."
            }
            Self::DeleteTransaction(_) => "Delete this transaction?",
            Self::DeleteAllTransactions => "⚠️ Delete ALL transactions? This cannot be undone!",
        }
    }
}

impl fmt::Display for PendingAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DeleteTransaction(id) => write!(f, "{} #{}", self.title(), id),
            _ => write!(f, "{}", self.title()),
        }
    }
}

/// Where a confirmation currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfirmationFlow {
    /// Nothing pending
    #[default]
    Idle,
    /// Waiting for the user to answer
    Confirming(PendingAction),
    /// The user said yes; the action should be carried out
    Committed(PendingAction),
    /// The user said no
    Cancelled(PendingAction),
}

impl ConfirmationFlow {
    pub fn new() -> Self {
        Self::Idle
    }

    /// Ask for confirmation of `action`
    ///
    /// Replaces any unanswered request.
    pub fn request(&mut self, action: PendingAction) {
        *self = Self::Confirming(action);
    }

    /// Record the user's answer
    ///
    /// Ignored unless a request is pending.
    pub fn answer(&mut self, confirmation: Confirmation) {
        if let Self::Confirming(action) = *self {
            *self = match confirmation {
                Confirmation::Confirmed => Self::Committed(action),
                Confirmation::Cancelled => Self::Cancelled(action),
            };
        }
    }

    /// The action awaiting an answer, if any
    pub fn pending(&self) -> Option<PendingAction> {
        match self {
            Self::Confirming(action) => Some(*action),
            _ => None,
        }
    }

    pub fn is_confirming(&self) -> bool {
        matches!(self, Self::Confirming(_))
    }

    /// Take the resolved action and its answer, returning to `Idle`
    ///
    /// Returns `None` while idle or still waiting.
    pub fn take_resolved(&mut self) -> Option<(PendingAction, Confirmation)> {
        let resolved = match *self {
            Self::Committed(action) => (action, Confirmation::Confirmed),
            Self::Cancelled(action) => (action, Confirmation::Cancelled),
            Self::Idle | Self::Confirming(_) => return None,
        };
        *self = Self::Idle;
        Some(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_path() {
        let mut flow = ConfirmationFlow::new();
        flow.request(PendingAction::ResetIncome);
        assert!(flow.is_confirming());
        assert_eq!(flow.pending(), Some(PendingAction::ResetIncome));

        flow.answer(Confirmation::Confirmed);
        assert_eq!(flow, ConfirmationFlow::Committed(PendingAction::ResetIncome));

        let resolved = flow.take_resolved();
        assert_eq!(
            resolved,
            Some((PendingAction::ResetIncome, Confirmation::Confirmed))
        );
        assert_eq!(flow, ConfirmationFlow::Idle);
    }

    #[test]
    fn test_cancel_path() {
        let mut flow = ConfirmationFlow::new();
        flow.request(PendingAction::DeleteAllTransactions);
        flow.answer(Confirmation::Cancelled);

        assert_eq!(
            flow.take_resolved(),
            Some((PendingAction::DeleteAllTransactions, Confirmation::Cancelled))
        );
    }

    #[test]
    fn test_answer_without_request_is_ignored() {
        let mut flow = ConfirmationFlow::new();
        flow.answer(Confirmation::Confirmed);
        assert_eq!(flow, ConfirmationFlow::Idle);
        assert!(flow.take_resolved().is_none());
    }

    #[test]
    fn test_unanswered_is_not_resolved() {
        let mut flow = ConfirmationFlow::new();
        flow.request(PendingAction::ResetAllBudgets);
        assert!(flow.take_resolved().is_none());
        assert!(flow.is_confirming());
    }

    #[test]
    fn test_prompts() {
        assert_eq!(
            PendingAction::DeleteTransaction(TransactionId::from_raw(5)).prompt(),
            "Delete this transaction?"
        );
        assert!(PendingAction::ResetIncome
            .prompt()
            .contains("cannot be undone"));
        assert_eq!(
            PendingAction::DeleteTransaction(TransactionId::from_raw(5)).to_string(),
            "Delete Transaction #5"
        );
    }

    #[test]
    fn test_from_bool() {
        assert!(Confirmation::from_bool(true).is_confirmed());
        assert!(!Confirmation::from_bool(false).is_confirmed());
    }
}
