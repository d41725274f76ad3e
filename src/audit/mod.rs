//! Audit logging system for FinanceFlow
//!
//! Records every committed income, budget and transaction change with
//! before/after values in an append-only audit log.
//!
//! # Architecture
//!
//! - `AuditEntry`: one change, addressed by an `AuditTarget` (income, a
//!   category budget, a transaction id, or a bulk target).
//! - `AuditLogger`: appends entries to the log file as JSON lines.
//! - `diff`: builds the one-line change summaries for updates.
//!
//! # Example
//!
//! ```rust,ignore
//! use financeflow::audit::{AuditEntry, AuditLogger, AuditTarget};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! let entry = AuditEntry::created(AuditTarget::Transaction(txn.id), &txn)
//!     .labelled(txn.merchant.clone());
//! logger.log_batch(&[entry])?;
//! ```

mod diff;
mod entry;
mod logger;

pub use entry::{AuditEntry, AuditTarget, Operation};
pub use logger::AuditLogger;
