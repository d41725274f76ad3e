//! Transaction display formatting
//!
//! Formats transaction listings and single transactions for terminal output.

use chrono::NaiveDate;
use std::fmt::Write;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::models::Transaction;

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Merchant")]
    merchant: String,
    #[tabled(rename = "Category")]
    category: &'static str,
    #[tabled(rename = "Amount")]
    amount: String,
}

impl TransactionRow {
    fn new(txn: &Transaction, date_format: &str) -> Self {
        Self {
            id: txn.id.to_string(),
            date: format_date(txn.date, date_format),
            merchant: truncate(&txn.merchant, 30),
            category: txn.category.key(),
            amount: txn.amount.format_whole(),
        }
    }
}

/// Format transactions as a table, in the order given
pub fn format_transaction_table(transactions: &[&Transaction], date_format: &str) -> String {
    if transactions.is_empty() {
        return "No transactions yet!".to_string();
    }

    let rows = transactions
        .iter()
        .map(|txn| TransactionRow::new(txn, date_format));

    Table::new(rows)
        .with(Style::rounded())
        .modify(Columns::single(4), Alignment::right())
        .to_string()
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, date_format: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Date:        {}\n", format_date(txn.date, date_format)));
    output.push_str(&format!("Merchant:    {}\n", txn.merchant));
    output.push_str(&format!("Amount:      {}\n", txn.amount));
    output.push_str(&format!("Category:    {}\n", txn.category.label()));

    output
}

/// Render `date` with a strftime format, falling back to `YYYY-MM-DD` when
/// the format can't be applied to a date
pub fn format_date(date: NaiveDate, date_format: &str) -> String {
    let mut rendered = String::new();
    match write!(rendered, "{}", date.format(date_format)) {
        Ok(()) => rendered,
        Err(_) => date.format("%Y-%m-%d").to_string(),
    }
}

/// Truncate to at most `max_len` characters
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money, TransactionId};

    fn sample() -> Transaction {
        Transaction::new(
            TransactionId::from_raw(1736899200000),
            "Café X",
            Money::from_cents(25050),
            Category::Food,
            NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
        )
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(format_transaction_table(&[], "%Y-%m-%d"), "No transactions yet!");
    }

    #[test]
    fn test_table_contents() {
        let txn = sample();
        let table = format_transaction_table(&[&txn], "%Y-%m-%d");

        assert!(table.contains("Merchant"));
        assert!(table.contains("Café X"));
        assert!(table.contains("2026-01-15"));
        assert!(table.contains("food"));
        assert!(table.contains("₹251"));
        assert!(table.contains("1736899200000"));
    }

    #[test]
    fn test_date_format_setting() {
        let txn = sample();
        let table = format_transaction_table(&[&txn], "%d/%m/%Y");
        assert!(table.contains("15/01/2026"));
    }

    #[test]
    fn test_unusable_date_format_falls_back() {
        let txn = sample();

        let table = format_transaction_table(&[&txn], "%H:%M");
        assert!(table.contains("2026-01-15"));
        assert_eq!(format_date(txn.date, "%Q"), "2026-01-15");
        assert!(format_transaction_details(&txn, "%H:%M").contains("Date:        2026-01-15"));
    }

    #[test]
    fn test_details() {
        let details = format_transaction_details(&sample(), "%Y-%m-%d");
        assert!(details.contains("Amount:      ₹250.50"));
        assert!(details.contains("Category:    Food"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("ééééééééééééé", 6), "ééé...");
    }
}
