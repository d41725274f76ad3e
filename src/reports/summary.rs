//! Monthly Summary Report
//!
//! Balance, spending, income and savings rate for the active month, followed
//! by the budget overview for every category.

use crate::models::{LedgerState, Money, Period};

use super::stats::{
    all_utilizations, balance, over_allocation, period_transactions, savings_rate, total_budgeted,
    total_spent, unallocated, BudgetStatus, Utilization,
};

/// Monthly summary
#[derive(Debug, Clone)]
pub struct SummaryReport {
    pub period: Period,
    pub income: Option<Money>,
    pub total_spent: Money,
    /// `None` while income is unset
    pub balance: Option<Money>,
    pub savings_rate: Option<i64>,
    pub transaction_count: usize,
    pub budgets: Vec<Utilization>,
    pub total_budgeted: Money,
    pub unallocated: Option<Money>,
    pub over_allocation: Option<Money>,
}

impl SummaryReport {
    /// Generate the summary for `period`
    pub fn generate(state: &LedgerState, period: Period) -> Self {
        Self {
            period,
            income: state.income,
            total_spent: total_spent(state, period),
            balance: balance(state, period),
            savings_rate: savings_rate(state, period),
            transaction_count: period_transactions(state, period).len(),
            budgets: all_utilizations(state, period),
            total_budgeted: total_budgeted(state),
            unallocated: unallocated(state),
            over_allocation: over_allocation(state),
        }
    }

    /// Categories whose spending exceeds their budget
    pub fn overspent(&self) -> Vec<&Utilization> {
        self.budgets
            .iter()
            .filter(|u| u.status == BudgetStatus::Over)
            .collect()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Summary: {}\n", self.period.friendly_name()));
        output.push_str(&"=".repeat(60));
        output.push('\n');

        output.push_str(&format!(
            "Balance:       {}\n",
            placeholder(self.balance.map(|b| b.format_whole()))
        ));
        output.push_str(&format!(
            "Total Spent:   {}\n",
            self.total_spent.format_whole()
        ));
        output.push_str(&format!(
            "Income:        {}\n",
            placeholder(self.income.map(|i| i.format_whole()))
        ));
        output.push_str(&format!(
            "Savings Rate:  {}\n",
            placeholder(self.savings_rate.map(|r| format!("{}%", r)))
        ));
        output.push_str(&format!("Transactions:  {}\n\n", self.transaction_count));

        output.push_str(&format!(
            "{:<15} {:<16} {:>22} {:>6}\n",
            "Category", "Status", "Spent / Budget", "Used"
        ));
        output.push_str(&"-".repeat(60));
        output.push('\n');

        for row in &self.budgets {
            let amounts = if row.budget.is_positive() {
                format!("{} / {}", row.spent.format_whole(), row.budget.format_whole())
            } else {
                row.spent.format_whole()
            };
            output.push_str(&format!(
                "{:<15} {:<16} {:>22} {:>5}%\n",
                row.category.label(),
                row.status.label(),
                amounts,
                row.percent()
            ));
        }

        output.push_str(&"-".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "{:<32} {:>22}\n",
            "Total Budgeted",
            self.total_budgeted.format_whole()
        ));
        if let Some(free) = self.unallocated.filter(|m| !m.is_negative()) {
            output.push_str(&format!("{:<32} {:>22}\n", "Unallocated", free.format_whole()));
        }
        let overspent = self.overspent();
        if !overspent.is_empty() {
            let names: Vec<&str> = overspent.iter().map(|u| u.category.label()).collect();
            output.push_str(&format!("\nOver budget: {}\n", names.join(", ")));
        }
        if let Some(over) = self.over_allocation {
            output.push_str(&format!(
                "\n⚠️ Budgets exceed income by {}\n",
                over.format_whole()
            ));
        }

        output
    }
}

fn placeholder(value: Option<String>) -> String {
    value.unwrap_or_else(|| "—".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Budget, Category, Transaction, TransactionId};
    use chrono::NaiveDate;

    fn jan() -> Period {
        Period::monthly(2026, 1).unwrap()
    }

    fn sample_state() -> LedgerState {
        let mut budget = Budget::zeroed();
        budget.set(Category::Food, Money::from_units(200));

        LedgerState {
            income: Some(Money::from_units(1000)),
            budget,
            transactions: vec![Transaction::new(
                TransactionId::from_raw(1),
                "Café X",
                Money::from_units(250),
                Category::Food,
                NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            )],
        }
    }

    #[test]
    fn test_generate() {
        let report = SummaryReport::generate(&sample_state(), jan());

        assert_eq!(report.total_spent, Money::from_units(250));
        assert_eq!(report.balance, Some(Money::from_units(750)));
        assert_eq!(report.savings_rate, Some(75));
        assert_eq!(report.transaction_count, 1);
        assert_eq!(report.budgets.len(), 6);
        assert_eq!(report.overspent().len(), 1);
        assert_eq!(report.unallocated, Some(Money::from_units(800)));
    }

    #[test]
    fn test_terminal_format() {
        let output = SummaryReport::generate(&sample_state(), jan()).format_terminal();

        assert!(output.contains("January 2026"));
        assert!(output.contains("₹750"));
        assert!(output.contains("75%"));
        assert!(output.contains("⚠️ Over Budget"));
        assert!(output.contains("₹250 / ₹200"));
        assert!(output.contains("⚠️ Not Set"));
    }

    #[test]
    fn test_overspent_categories_are_listed() {
        let output = SummaryReport::generate(&sample_state(), jan()).format_terminal();
        assert!(output.contains("Over budget: Food"));

        let quiet = SummaryReport::generate(&LedgerState::empty(), jan()).format_terminal();
        assert!(!quiet.contains("Over budget:"));
    }

    #[test]
    fn test_placeholders_without_income() {
        let output = SummaryReport::generate(&LedgerState::empty(), jan()).format_terminal();
        assert!(output.contains("Balance:       —"));
        assert!(output.contains("Savings Rate:  —"));
    }

    #[test]
    fn test_over_allocation_warning() {
        let mut state = sample_state();
        state.income = Some(Money::from_units(150));

        let output = SummaryReport::generate(&state, jan()).format_terminal();
        assert!(output.contains("Budgets exceed income by ₹50"));
    }
}
