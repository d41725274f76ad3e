//! Report CLI commands
//!
//! Prints the monthly summary, the text charts and the audit trail.

use crate::audit::AuditLogger;
use crate::error::FinanceResult;
use crate::models::{LedgerState, Period};
use crate::reports::{ChartsReport, SummaryReport};

/// Print the monthly summary
pub fn handle_summary_command(state: &LedgerState, period: Period) -> FinanceResult<()> {
    let report = SummaryReport::generate(state, period);
    print!("{}", report.format_terminal());
    Ok(())
}

/// Print the spending and budget charts
pub fn handle_charts_command(state: &LedgerState, period: Period) -> FinanceResult<()> {
    let report = ChartsReport::generate(state, period);
    print!("{}", report.format_terminal());
    Ok(())
}

/// Print the most recent audit entries, oldest first
pub fn handle_audit_command(logger: &AuditLogger, count: usize) -> FinanceResult<()> {
    let entries = logger.read_recent(count)?;
    if entries.is_empty() {
        println!("Audit log is empty.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}
