//! Service layer for FinanceFlow
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, confirmation of destructive operations and the
//! choice of the active period.

pub mod confirmation;
pub mod ledger;
pub mod period;

pub use confirmation::{Confirmation, ConfirmationFlow, Outcome, PendingAction};
pub use ledger::{parse_budget_input, Ledger, Removal};
pub use period::{resolver_for, CurrentMonth, FixedPeriod, PeriodResolver};
