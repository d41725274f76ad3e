//! Reports module for FinanceFlow
//!
//! Derived statistics over the ledger plus the monthly summary and chart
//! reports built from them.

pub mod charts;
pub mod stats;
pub mod summary;

pub use charts::{bar_data, pie_data, BarRow, ChartsReport, PieSlice};
pub use stats::{
    all_utilizations, balance, budget_projection, budget_utilization, category_spending, listing,
    over_allocation, period_transactions, savings_rate, search, total_budgeted, total_spent,
    unallocated, BudgetProjection, BudgetStatus, CategorySpending, Utilization,
};
pub use summary::SummaryReport;
