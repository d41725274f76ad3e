//! Transaction model
//!
//! A single expense. Transactions are immutable once created; they are only
//! ever added or deleted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::TransactionId;
use super::money::Money;

/// A logged expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Where the money was spent
    pub merchant: String,

    /// Amount spent (always positive)
    pub amount: Money,

    /// Expense category
    pub category: Category,

    /// Date of the expense (`YYYY-MM-DD` on disk)
    pub date: NaiveDate,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        id: TransactionId,
        merchant: impl Into<String>,
        amount: Money,
        category: Category,
        date: NaiveDate,
    ) -> Self {
        Self {
            id,
            merchant: merchant.into(),
            amount,
            category,
            date,
        }
    }

    /// Case-insensitive substring match on merchant or category key
    ///
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        self.merchant.to_lowercase().contains(needle) || self.category.key().contains(needle)
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.merchant.trim().is_empty() {
            return Err(TransactionValidationError::EmptyMerchant);
        }

        if !self.amount.is_positive() {
            return Err(TransactionValidationError::NonPositiveAmount);
        }

        if self.amount.exceeds_limit() {
            return Err(TransactionValidationError::AmountTooLarge);
        }

        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.date.format("%Y-%m-%d"),
            self.merchant,
            self.amount,
            self.category
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    EmptyMerchant,
    NonPositiveAmount,
    AmountTooLarge,
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyMerchant => write!(f, "Merchant name is required"),
            Self::NonPositiveAmount => write!(f, "Amount must be greater than zero"),
            Self::AmountTooLarge => {
                write!(f, "Amount cannot exceed {}", Money::MAX.format_whole())
            }
        }
    }
}

impl std::error::Error for TransactionValidationError {}
