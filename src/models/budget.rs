//! Budget model
//!
//! Tracks how much of the monthly income is allocated to each category.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::money::Money;

/// Per-category allocations for the active month
///
/// Every category is always present; serialization emits exactly the six
/// category keys and missing keys load as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Budget {
    pub food: Money,
    pub transport: Money,
    pub entertainment: Money,
    pub shopping: Money,
    pub bills: Money,
    pub other: Money,
}

impl Budget {
    /// A budget with every category at zero
    pub fn zeroed() -> Self {
        Self::default()
    }

    /// Get the allocation for a category
    pub fn get(&self, category: Category) -> Money {
        match category {
            Category::Food => self.food,
            Category::Transport => self.transport,
            Category::Entertainment => self.entertainment,
            Category::Shopping => self.shopping,
            Category::Bills => self.bills,
            Category::Other => self.other,
        }
    }

    /// Set the allocation for a category
    pub fn set(&mut self, category: Category, amount: Money) {
        let slot = match category {
            Category::Food => &mut self.food,
            Category::Transport => &mut self.transport,
            Category::Entertainment => &mut self.entertainment,
            Category::Shopping => &mut self.shopping,
            Category::Bills => &mut self.bills,
            Category::Other => &mut self.other,
        };
        *slot = amount;
    }

    /// Iterate allocations in category display order
    pub fn iter(&self) -> impl Iterator<Item = (Category, Money)> + '_ {
        Category::ALL.into_iter().map(move |c| (c, self.get(c)))
    }

    /// Sum of all allocations
    pub fn total(&self) -> Money {
        self.iter().map(|(_, amount)| amount).sum()
    }

    /// Total after replacing one category's allocation with `amount`
    ///
    /// Saturates instead of wrapping, so an absurd total never looks small.
    pub fn projected_total(&self, category: Category, amount: Money) -> Money {
        self.total() - self.get(category) + amount
    }

    /// Check if nothing has been allocated
    pub fn is_zeroed(&self) -> bool {
        self.iter().all(|(_, amount)| amount.is_zero())
    }

    /// Validate a single allocation amount
    pub fn validate_amount(amount: Money) -> Result<(), BudgetValidationError> {
        if amount.is_negative() {
            return Err(BudgetValidationError::NegativeBudget);
        }
        if amount.exceeds_limit() {
            return Err(BudgetValidationError::TooLarge);
        }
        Ok(())
    }
}

/// Validation errors for budget allocations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    NegativeBudget,
    TooLarge,
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeBudget => write!(f, "Budget amount cannot be negative"),
            Self::TooLarge => write!(
                f,
                "Budget amount cannot exceed {}",
                Money::MAX.format_whole()
            ),
        }
    }
}

impl std::error::Error for BudgetValidationError {}
