//! Budget display formatting
//!
//! Formats the budget overview table and budget-change previews.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::models::Money;
use crate::reports::{BudgetProjection, Utilization};

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "Category")]
    category: &'static str,
    #[tabled(rename = "Status")]
    status: &'static str,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Budget")]
    budget: String,
    #[tabled(rename = "Used")]
    used: String,
}

/// Format every category's budget as a table
pub fn format_budget_table(rows: &[Utilization]) -> String {
    let rows = rows.iter().map(|u| BudgetRow {
        category: u.category.label(),
        status: u.status.label(),
        spent: u.spent.format_whole(),
        budget: if u.budget.is_positive() {
            u.budget.format_whole()
        } else {
            "—".to_string()
        },
        used: format!("{}%", u.percent()),
    });

    Table::new(rows)
        .with(Style::rounded())
        .modify(Columns::new(2..), Alignment::right())
        .to_string()
}

/// Describe what a budget change would do
pub fn format_projection(projection: &BudgetProjection) -> String {
    match projection.exceeds_by {
        Some(over) => format!(
            "⚠️ Exceeds income by {} (total {} of {})",
            over.format_whole(),
            projection.projected.format_whole(),
            projection.income.format_whole()
        ),
        None if projection.is_allowed() => format!(
            "OK: total budgets would be {} of {} ({} left)",
            projection.projected.format_whole(),
            projection.income.format_whole(),
            (projection.income - projection.projected).format_whole()
        ),
        None => format!(
            "⚠️ Budgets already exceed income ({} of {})",
            projection.projected.format_whole(),
            projection.income.format_whole()
        ),
    }
}

/// One-line allocation summary
pub fn format_allocation(total_budgeted: Money, income: Option<Money>) -> String {
    match income {
        Some(income) => format!(
            "Budgeted {} of {} income",
            total_budgeted.format_whole(),
            income.format_whole()
        ),
        None => format!("Budgeted {} (income not set)", total_budgeted.format_whole()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use crate::reports::BudgetStatus;

    #[test]
    fn test_budget_table() {
        let rows = [
            Utilization {
                category: Category::Food,
                budget: Money::from_units(20000),
                spent: Money::from_units(250),
                ratio: 0.0125,
                status: BudgetStatus::OnTrack,
            },
            Utilization {
                category: Category::Bills,
                budget: Money::zero(),
                spent: Money::zero(),
                ratio: 0.0,
                status: BudgetStatus::Unset,
            },
        ];

        let table = format_budget_table(&rows);
        assert!(table.contains("Food"));
        assert!(table.contains("✅ Set"));
        assert!(table.contains("₹20,000"));
        assert!(table.contains("⚠️ Not Set"));
    }

    #[test]
    fn test_projection_messages() {
        let over = BudgetProjection {
            projected: Money::from_units(55000),
            income: Money::from_units(50000),
            exceeds_by: Some(Money::from_units(5000)),
        };
        assert!(format_projection(&over).contains("Exceeds income by ₹5,000"));

        let fine = BudgetProjection {
            projected: Money::from_units(20000),
            income: Money::from_units(50000),
            exceeds_by: None,
        };
        assert!(format_projection(&fine).contains("₹30,000 left"));
    }

    #[test]
    fn test_allocation_line() {
        assert_eq!(
            format_allocation(Money::from_units(100), None),
            "Budgeted ₹100 (income not set)"
        );
    }
}
