//! Transaction CLI commands
//!
//! Implements CLI commands for logging, listing, searching and deleting
//! expenses.

use chrono::{Local, NaiveDate};
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_date, format_transaction_details, format_transaction_table};
use crate::error::{FinanceError, FinanceResult};
use crate::models::{Category, Money, Period, TransactionId};
use crate::reports::{listing, period_transactions, search};
use crate::services::{Ledger, PendingAction, Removal};
use crate::storage::KeyValueStore;

use super::budget::parse_category;
use super::prompt::confirm;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Log a new expense
    Add {
        /// Where the money was spent
        merchant: String,
        /// Amount spent (e.g., "250" or "1,250.50")
        amount: String,
        /// Category (food, transport, entertainment, shopping, bills, other)
        #[arg(short, long, default_value = "other")]
        category: String,
        /// Date of the expense (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List the most recent transactions of the period
    List {
        /// Number of transactions to show
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Search the period's transactions by merchant or category
    Search {
        /// Text to look for (case-insensitive)
        query: String,
        /// Number of results to show
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Delete a transaction
    Delete {
        /// Transaction ID
        id: String,
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Delete every transaction
    Clear {
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command<S: KeyValueStore>(
    ledger: &mut Ledger<S>,
    settings: &Settings,
    period: Period,
    cmd: TransactionCommands,
) -> FinanceResult<()> {
    match cmd {
        TransactionCommands::Add {
            merchant,
            amount,
            category,
            date,
        } => {
            let amount = Money::parse(&amount)
                .map_err(|e| FinanceError::Validation(format!("Invalid amount: {}", e)))?;
            let category: Category = parse_category(&category)?;
            let date = match date {
                Some(d) => parse_date(&d)?,
                None => Local::now().date_naive(),
            };

            let txn = ledger.add_transaction(&merchant, amount, category, date)?;
            println!("Added transaction: {}", txn.id);
            println!("  Date:     {}", format_date(txn.date, &settings.date_format));
            println!("  Merchant: {}", txn.merchant);
            println!("  Amount:   {}", txn.amount);
            println!("  Category: {}", txn.category.label());

            if !period.contains(txn.date) {
                println!(
                    "Note: this expense is outside {} and won't appear in its totals.",
                    period.friendly_name()
                );
            }
        }

        TransactionCommands::List { limit } => {
            let limit = limit.unwrap_or(settings.listing_limit);
            let in_period = period_transactions(ledger.state(), period);
            let shown = listing(&in_period, limit);

            println!(
                "Recent transactions for {} ({} of {})",
                period.friendly_name(),
                shown.len(),
                in_period.len()
            );
            println!("{}", format_transaction_table(&shown, &settings.date_format));
        }

        TransactionCommands::Search { query, limit } => {
            let limit = limit.unwrap_or(settings.listing_limit);
            let matches = search(ledger.state(), period, &query);
            if matches.is_empty() {
                println!("No transactions match '{}'.", query);
                return Ok(());
            }

            let shown = listing(&matches, limit);
            println!("{} match(es), showing {}", matches.len(), shown.len());
            println!("{}", format_transaction_table(&shown, &settings.date_format));
        }

        TransactionCommands::Delete { id, yes } => {
            let id: TransactionId = id
                .parse()
                .map_err(|_| FinanceError::Validation(format!("Invalid transaction ID: {}", id)))?;

            let Some(txn) = ledger.find_transaction(id) else {
                println!("Transaction {} not found; nothing to delete.", id);
                return Ok(());
            };

            print!("{}", format_transaction_details(txn, &settings.date_format));
            let confirmation = confirm(PendingAction::DeleteTransaction(id), yes)?;

            match ledger.delete_transaction(id, confirmation)? {
                Removal::Removed(txn) => {
                    println!("Deleted transaction: {} ({})", txn.id, txn.merchant)
                }
                Removal::NotFound => println!("Transaction {} not found; nothing to delete.", id),
                Removal::Cancelled => println!("Cancelled."),
            }
        }

        TransactionCommands::Clear { yes } => {
            let count = ledger.transactions().len();
            if count == 0 {
                println!("No transactions to delete.");
                return Ok(());
            }

            let confirmation = confirm(PendingAction::DeleteAllTransactions, yes)?;
            if ledger.delete_all_transactions(confirmation)?.is_applied() {
                println!("Deleted {} transaction(s).", count);
            } else {
                println!("Cancelled.");
            }
        }
    }

    Ok(())
}

fn parse_date(input: &str) -> FinanceResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        FinanceError::Validation(format!("Invalid date '{}'. Use YYYY-MM-DD.", input))
    })
}
