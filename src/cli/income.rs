//! Income CLI commands
//!
//! Implements CLI commands for setting, showing and resetting the monthly
//! income.

use clap::Subcommand;

use crate::display::format_allocation;
use crate::error::{FinanceError, FinanceResult};
use crate::models::Money;
use crate::reports::{over_allocation, total_budgeted, unallocated};
use crate::services::{Ledger, PendingAction};
use crate::storage::KeyValueStore;

use super::prompt::confirm;

/// Income subcommands
#[derive(Subcommand)]
pub enum IncomeCommands {
    /// Set the monthly income
    Set {
        /// Income amount (e.g., "50000" or "50,000.50")
        amount: String,
    },

    /// Show the monthly income and how much of it is budgeted
    Show,

    /// Clear income, all budgets and all transactions
    Reset {
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Handle an income command
pub fn handle_income_command<S: KeyValueStore>(
    ledger: &mut Ledger<S>,
    cmd: IncomeCommands,
) -> FinanceResult<()> {
    match cmd {
        IncomeCommands::Set { amount } => {
            let amount = Money::parse(&amount)
                .map_err(|_| FinanceError::Validation("Please enter a valid monthly income".into()))?;

            ledger.set_income(amount)?;
            println!("Monthly income set to {}", amount.format_whole());

            if let Some(over) = over_allocation(ledger.state()) {
                println!(
                    "Warning: budgets exceed income by {}. Lower some budgets.",
                    over.format_whole()
                );
            }
        }

        IncomeCommands::Show => {
            let state = ledger.state();
            match state.income {
                Some(income) => {
                    println!("Monthly Income: {}", income.format_whole());
                    println!("{}", format_allocation(total_budgeted(state), Some(income)));
                    if let Some(left) = unallocated(state).filter(|m| !m.is_negative()) {
                        println!("Unallocated:    {}", left.format_whole());
                    }
                    if let Some(over) = over_allocation(state) {
                        println!("Over-allocated: {} ⚠", over.format_whole());
                    }
                }
                None => {
                    println!("Monthly income not set.");
                    println!("Run 'financeflow income set <amount>' to set it.");
                }
            }
        }

        IncomeCommands::Reset { yes } => {
            let confirmation = confirm(PendingAction::ResetIncome, yes)?;
            if ledger.reset_income(confirmation)?.is_applied() {
                println!("✅ Income, budgets, and all expenditure data have been reset");
            } else {
                println!("Cancelled.");
            }
        }
    }

    Ok(())
}
