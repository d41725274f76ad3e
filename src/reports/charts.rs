//! Chart data
//!
//! The pie chart shows how period spending splits across categories; the
//! bar chart compares each category's spending with its budget. Both are
//! plain data so the text report and the dashboard can draw them their own
//! way.

use crate::models::{Budget, Category, LedgerState, Money, Period};

use super::stats::{category_spending, CategorySpending};

/// One category's share of total spending
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub category: Category,
    pub amount: Money,
    /// Share of total spending, 0 to 100
    pub percentage: f64,
    /// Palette colour (`#rrggbb`)
    pub color: &'static str,
}

/// One category's budget bar
#[derive(Debug, Clone, PartialEq)]
pub struct BarRow {
    pub category: Category,
    pub budget: Money,
    pub spent: Money,
    /// Fill of the bar, `spent / budget` capped at 1; 0 when unbudgeted
    pub ratio: f64,
}

/// Slices for every category with spending, in display order
///
/// Empty when nothing was spent.
pub fn pie_data(spending: &CategorySpending) -> Vec<PieSlice> {
    let total = spending.total();
    if !total.is_positive() {
        return Vec::new();
    }

    spending
        .iter()
        .filter(|(_, amount)| !amount.is_zero())
        .map(|(category, amount)| PieSlice {
            category,
            amount,
            percentage: amount.as_f64() / total.as_f64() * 100.0,
            color: category.color_hex(),
        })
        .collect()
}

/// One bar per category, in display order
pub fn bar_data(budget: &Budget, spending: &CategorySpending) -> Vec<BarRow> {
    budget
        .iter()
        .map(|(category, budget)| {
            let spent = spending.get(category);
            let ratio = if budget.is_positive() {
                (spent.as_f64() / budget.as_f64()).min(1.0)
            } else {
                0.0
            };
            BarRow {
                category,
                budget,
                spent,
                ratio,
            }
        })
        .collect()
}

/// Both charts for one period
#[derive(Debug, Clone)]
pub struct ChartsReport {
    pub period: Period,
    pub total_spent: Money,
    pub pie: Vec<PieSlice>,
    pub bars: Vec<BarRow>,
}

impl ChartsReport {
    /// Build chart data for `period`
    pub fn generate(state: &LedgerState, period: Period) -> Self {
        let spending = category_spending(state, period);
        Self {
            period,
            total_spent: spending.total(),
            pie: pie_data(&spending),
            bars: bar_data(&state.budget, &spending),
        }
    }

    /// Draw both charts as text
    pub fn format_terminal(&self) -> String {
        const BAR_WIDTH: usize = 30;
        let mut output = String::new();

        output.push_str(&format!(
            "Spending by Category: {}\n",
            self.period.friendly_name()
        ));
        output.push_str(&"=".repeat(60));
        output.push('\n');

        if self.pie.is_empty() {
            output.push_str("No Spending\n");
        } else {
            for slice in &self.pie {
                let width = (slice.percentage / 100.0 * BAR_WIDTH as f64).round() as usize;
                output.push_str(&format!(
                    "{:<15} {:<30} {:>5.1}%  {}\n",
                    slice.category.label(),
                    "●".repeat(width.max(1)),
                    slice.percentage,
                    slice.amount.format_whole()
                ));
            }
            output.push_str(&format!(
                "{:<15} {:<30} {:>6}  {}\n",
                "Total",
                "",
                "",
                self.total_spent.format_whole()
            ));
        }

        output.push('\n');
        output.push_str("Budget vs Spending\n");
        output.push_str(&"=".repeat(60));
        output.push('\n');

        for bar in &self.bars {
            let filled = (bar.ratio * BAR_WIDTH as f64).round() as usize;
            let budget = if bar.budget.is_positive() {
                format!(" /{}", bar.budget.format_whole())
            } else {
                String::new()
            };
            output.push_str(&format!(
                "{:<15} {}{} {}{}\n",
                bar.category.label(),
                "█".repeat(filled),
                "░".repeat(BAR_WIDTH - filled),
                bar.spent.format_whole(),
                budget
            ));
        }

        output
    }
}
