//! Derived statistics
//!
//! Read-only computations over a ledger snapshot and the active period.
//! Nothing here is cached; callers recompute on every render.

use crate::models::{Budget, Category, LedgerState, Money, Period, Transaction};

/// Transactions dated inside `period`, in stored order (newest first)
pub fn period_transactions(state: &LedgerState, period: Period) -> Vec<&Transaction> {
    state
        .transactions
        .iter()
        .filter(|t| period.contains(t.date))
        .collect()
}

/// Sum of all amounts spent in `period`
pub fn total_spent(state: &LedgerState, period: Period) -> Money {
    period_transactions(state, period)
        .iter()
        .map(|t| t.amount)
        .sum()
}

/// Income minus spending, or `None` while income is unset
pub fn balance(state: &LedgerState, period: Period) -> Option<Money> {
    state
        .income
        .map(|income| income - total_spent(state, period))
}

/// Per-category spending totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CategorySpending([Money; 6]);

impl CategorySpending {
    pub fn get(&self, category: Category) -> Money {
        self.0[category.index()]
    }

    /// All categories in display order, including those with no spending
    pub fn iter(&self) -> impl Iterator<Item = (Category, Money)> + '_ {
        Category::ALL.iter().map(|c| (*c, self.get(*c)))
    }

    pub fn total(&self) -> Money {
        self.0.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|m| m.is_zero())
    }
}

/// Spending per category in `period`
pub fn category_spending(state: &LedgerState, period: Period) -> CategorySpending {
    let mut totals = [Money::zero(); 6];
    for txn in period_transactions(state, period) {
        totals[txn.category.index()] += txn.amount;
    }
    CategorySpending(totals)
}

/// How a category's spending compares with its budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    /// No budget allocated
    Unset,
    /// Spending exceeds the budget
    Over,
    OnTrack,
}

impl BudgetStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Unset => "⚠️ Not Set",
            Self::Over => "⚠️ Over Budget",
            Self::OnTrack => "✅ Set",
        }
    }
}

/// Budget usage of one category
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Utilization {
    pub category: Category,
    pub budget: Money,
    pub spent: Money,
    /// `spent / budget`, capped at 1; 0 when no budget is set
    pub ratio: f64,
    pub status: BudgetStatus,
}

impl Utilization {
    /// Capped usage as a whole percent (0 to 100)
    pub fn percent(&self) -> u8 {
        (self.ratio * 100.0).round() as u8
    }
}

/// Usage of `category`'s budget in `period`
pub fn budget_utilization(state: &LedgerState, period: Period, category: Category) -> Utilization {
    utilization_of(
        category,
        state.budget.get(category),
        category_spending(state, period).get(category),
    )
}

/// Usage of every category's budget, in display order
pub fn all_utilizations(state: &LedgerState, period: Period) -> Vec<Utilization> {
    let spending = category_spending(state, period);
    state
        .budget
        .iter()
        .map(|(category, budget)| utilization_of(category, budget, spending.get(category)))
        .collect()
}

fn utilization_of(category: Category, budget: Money, spent: Money) -> Utilization {
    let (ratio, status) = if budget.is_positive() {
        let ratio = (spent.as_f64() / budget.as_f64()).min(1.0);
        let status = if spent > budget {
            BudgetStatus::Over
        } else {
            BudgetStatus::OnTrack
        };
        (ratio, status)
    } else {
        (0.0, BudgetStatus::Unset)
    };

    Utilization {
        category,
        budget,
        spent,
        ratio,
        status,
    }
}

/// Share of income left after spending, as a whole percent
///
/// Halves round up (`74.5` becomes `75`, `-0.5` becomes `0`). Negative when
/// spending exceeds income; `None` while income is unset.
pub fn savings_rate(state: &LedgerState, period: Period) -> Option<i64> {
    let income = state.income.filter(|i| i.is_positive())?;
    let saved = income - total_spent(state, period);
    // Widened so large incomes can't overflow the percentage scaling
    let rate = (i128::from(saved.cents()) * 100) as f64 / income.cents() as f64;
    Some((rate + 0.5).floor() as i64)
}

/// Period transactions whose merchant or category key contains `query`
///
/// Case-insensitive. An empty or blank query matches everything. Results
/// come back newest first.
pub fn search<'a>(state: &'a LedgerState, period: Period, query: &str) -> Vec<&'a Transaction> {
    let needle = query.trim().to_lowercase();
    let mut matches: Vec<&Transaction> = period_transactions(state, period)
        .into_iter()
        .filter(|t| needle.is_empty() || t.matches(&needle))
        .collect();
    newest_first(&mut matches);
    matches
}

/// The `limit` most recent of `transactions`, newest first
///
/// Shared by the default listing and search results.
pub fn listing<'a>(transactions: &[&'a Transaction], limit: usize) -> Vec<&'a Transaction> {
    let mut sorted = transactions.to_vec();
    newest_first(&mut sorted);
    sorted.truncate(limit);
    sorted
}

// Ids are creation timestamps, so they order by recency regardless of the
// date the user entered.
fn newest_first(transactions: &mut [&Transaction]) {
    transactions.sort_by(|a, b| b.id.cmp(&a.id));
}

/// Sum of all category budgets
pub fn total_budgeted(state: &LedgerState) -> Money {
    state.budget.total()
}

/// Income not yet allocated to any budget
///
/// Negative when budgets exceed income; `None` while income is unset.
pub fn unallocated(state: &LedgerState) -> Option<Money> {
    state.income.map(|income| income - state.budget.total())
}

/// How far budgets exceed income, if they do
///
/// Only reachable by lowering income after allocating, since budget saves
/// are checked against income.
pub fn over_allocation(state: &LedgerState) -> Option<Money> {
    unallocated(state)
        .filter(|m| m.is_negative())
        .map(|m| -m)
}

/// Preview of a budget change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetProjection {
    /// Total of all budgets if the change were saved
    pub projected: Money,
    /// Income the total is checked against (zero while unset)
    pub income: Money,
    /// Amount by which the projected total would exceed income
    pub exceeds_by: Option<Money>,
}

impl BudgetProjection {
    pub fn is_allowed(&self) -> bool {
        self.projected <= self.income
    }
}

/// What setting `category` to `amount` would do, without changing anything
pub fn budget_projection(state: &LedgerState, category: Category, amount: Money) -> BudgetProjection {
    projection_of(&state.budget, state.income, category, amount)
}

fn projection_of(
    budget: &Budget,
    income: Option<Money>,
    category: Category,
    amount: Money,
) -> BudgetProjection {
    let income = income.unwrap_or_default();
    let projected = budget.projected_total(category, amount);
    let exceeds_by = (projected > income && amount.is_positive()).then(|| projected - income);

    BudgetProjection {
        projected,
        income,
        exceeds_by,
    }
}
