//! Audit entry data structures
//!
//! An entry records one committed change to the ledger: what was touched,
//! how, and the JSON values on either side of the change.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::models::{Category, TransactionId};

use super::diff::generate_diff;

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// The part of the ledger a change applied to
///
/// Stored as `{"kind": "budget", "key": "food"}`; bulk targets carry no key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "key", rename_all = "snake_case")]
pub enum AuditTarget {
    Income,
    Budget(Category),
    AllBudgets,
    Transaction(TransactionId),
    AllTransactions,
}

impl fmt::Display for AuditTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuditTarget::Income => write!(f, "Income"),
            AuditTarget::Budget(category) => write!(f, "Budget {}", category.key()),
            AuditTarget::AllBudgets => write!(f, "Budget (all)"),
            AuditTarget::Transaction(id) => write!(f, "Transaction #{}", id),
            AuditTarget::AllTransactions => write!(f, "Transaction (all)"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the change was committed (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub target: AuditTarget,

    /// Merchant name or category label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<Value>,

    /// One-line description of what changed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change: Option<String>,
}

impl AuditEntry {
    fn new(operation: Operation, target: AuditTarget) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            target,
            label: None,
            before: None,
            after: None,
            change: None,
        }
    }

    /// `target` was created with value `after`
    pub fn created<T: Serialize>(target: AuditTarget, after: &T) -> Self {
        Self {
            after: serde_json::to_value(after).ok(),
            ..Self::new(Operation::Create, target)
        }
    }

    /// `target` changed from `before` to `after`
    ///
    /// The change line is the field-level diff of the two values.
    pub fn updated<T: Serialize>(target: AuditTarget, before: &T, after: &T) -> Self {
        let before = serde_json::to_value(before).ok();
        let after = serde_json::to_value(after).ok();
        let change = match (&before, &after) {
            (Some(b), Some(a)) => generate_diff(b, a),
            _ => None,
        };

        Self {
            before,
            after,
            change,
            ..Self::new(Operation::Update, target)
        }
    }

    /// `target` was removed; `before` is what it held
    pub fn deleted<T: Serialize>(target: AuditTarget, before: &T) -> Self {
        Self {
            before: serde_json::to_value(before).ok(),
            ..Self::new(Operation::Delete, target)
        }
    }

    pub fn labelled(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Replace the generated change line
    pub fn described(mut self, change: impl Into<String>) -> Self {
        self.change = Some(change.into());
        self
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.target
        );

        if let Some(label) = &self.label {
            output.push_str(&format!(" ({})", label));
        }

        if let Some(change) = &self.change {
            output.push_str(&format!("\n  Changes: {}", change));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Budget, Money};
    use serde_json::json;

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Create.to_string(), "CREATE");
        assert_eq!(Operation::Update.to_string(), "UPDATE");
        assert_eq!(Operation::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_target_display() {
        assert_eq!(AuditTarget::Income.to_string(), "Income");
        assert_eq!(AuditTarget::Budget(Category::Food).to_string(), "Budget food");
        assert_eq!(
            AuditTarget::Transaction(TransactionId::from_raw(42)).to_string(),
            "Transaction #42"
        );
    }

    #[test]
    fn test_created_entry() {
        let target = AuditTarget::Transaction(TransactionId::from_raw(1736899200000));
        let entry = AuditEntry::created(target, &json!({"merchant": "Café X", "amount": 250}))
            .labelled("Café X");

        assert_eq!(entry.operation, Operation::Create);
        assert_eq!(entry.target, target);
        assert!(entry.before.is_none());
        assert!(entry.after.is_some());
        assert_eq!(entry.label.as_deref(), Some("Café X"));
    }

    #[test]
    fn test_updated_entry_diffs_budget() {
        let before = Budget::zeroed();
        let mut after = before;
        after.set(Category::Food, Money::from_units(20000));

        let entry = AuditEntry::updated(AuditTarget::Budget(Category::Food), &before, &after);

        assert_eq!(entry.operation, Operation::Update);
        assert_eq!(entry.change.as_deref(), Some("food: 0 -> 20000"));
    }

    #[test]
    fn test_described_overrides_diff() {
        let entry = AuditEntry::updated(AuditTarget::Income, &None::<Money>, &Some(Money::from_units(50000)))
            .described("unset -> ₹50,000.00");

        assert_eq!(entry.change.as_deref(), Some("unset -> ₹50,000.00"));
    }

    #[test]
    fn test_deleted_entry() {
        let entry = AuditEntry::deleted(AuditTarget::AllTransactions, &json!({"ids": [1, 2]}));

        assert_eq!(entry.operation, Operation::Delete);
        assert!(entry.before.is_some());
        assert!(entry.after.is_none());
    }

    #[test]
    fn test_serialized_target_shape() {
        let entry = AuditEntry::created(AuditTarget::Budget(Category::Bills), &json!(100));

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["target"], json!({"kind": "budget", "key": "bills"}));

        let income = serde_json::to_value(AuditTarget::Income).unwrap();
        assert_eq!(income, json!({"kind": "income"}));

        let parsed: AuditEntry = serde_json::from_value(value).unwrap();
        assert_eq!(parsed.target, AuditTarget::Budget(Category::Bills));
    }

    #[test]
    fn test_human_readable_format() {
        let entry = AuditEntry::deleted(
            AuditTarget::Transaction(TransactionId::from_raw(1736899200000)),
            &json!({}),
        )
        .labelled("Café X");

        let formatted = entry.format_human_readable();
        assert!(formatted.contains("DELETE"));
        assert!(formatted.contains("Transaction #1736899200000"));
        assert!(formatted.contains("Café X"));
    }
}
