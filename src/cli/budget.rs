//! Budget CLI commands
//!
//! Implements CLI commands for category budgets: setting, previewing,
//! showing and resetting.

use clap::Subcommand;

use crate::display::{format_allocation, format_budget_table, format_projection};
use crate::error::{FinanceError, FinanceResult};
use crate::models::{Category, Period};
use crate::reports::{all_utilizations, budget_projection, over_allocation, total_budgeted};
use crate::services::{parse_budget_input, Ledger, PendingAction};
use crate::storage::KeyValueStore;

use super::prompt::confirm;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set the budget for a category
    Set {
        /// Category (food, transport, entertainment, shopping, bills, other)
        category: String,
        /// Budget amount; anything that is not a number counts as zero
        amount: String,
    },

    /// Show every category's budget and spending for the period
    Show,

    /// Preview a budget change without saving it
    Check {
        /// Category
        category: String,
        /// Proposed amount
        amount: String,
    },

    /// Reset all budgets to zero and delete all transactions
    Reset {
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Handle a budget command
pub fn handle_budget_command<S: KeyValueStore>(
    ledger: &mut Ledger<S>,
    period: Period,
    cmd: BudgetCommands,
) -> FinanceResult<()> {
    match cmd {
        BudgetCommands::Set { category, amount } => {
            let category = parse_category(&category)?;
            let amount = parse_budget_input(&amount);

            ledger.set_budget(category, amount)?;
            println!(
                "Set {} budget to {}",
                category.label(),
                amount.format_whole()
            );
            println!(
                "{}",
                format_allocation(total_budgeted(ledger.state()), ledger.income())
            );
        }

        BudgetCommands::Show => {
            let state = ledger.state();
            println!("Budgets for {}", period.friendly_name());
            println!("{}", format_budget_table(&all_utilizations(state, period)));
            println!("{}", format_allocation(total_budgeted(state), state.income));
            if let Some(over) = over_allocation(state) {
                println!("⚠️ Budgets exceed income by {}", over.format_whole());
            }
        }

        BudgetCommands::Check { category, amount } => {
            let category = parse_category(&category)?;
            let amount = parse_budget_input(&amount);
            let projection = budget_projection(ledger.state(), category, amount);
            println!("{}", format_projection(&projection));
        }

        BudgetCommands::Reset { yes } => {
            let confirmation = confirm(PendingAction::ResetAllBudgets, yes)?;
            if ledger.reset_all_budgets(confirmation)?.is_applied() {
                println!("✅ Budgets and all expenditure data have been reset");
            } else {
                println!("Cancelled.");
            }
        }
    }

    Ok(())
}

pub(crate) fn parse_category(input: &str) -> FinanceResult<Category> {
    input
        .parse()
        .map_err(|e: crate::models::CategoryParseError| FinanceError::Validation(e.to_string()))
}
