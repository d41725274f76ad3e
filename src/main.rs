use anyhow::Result;
use clap::{Parser, Subcommand};

use financeflow::audit::AuditLogger;
use financeflow::cli::{
    handle_audit_command, handle_budget_command, handle_charts_command, handle_income_command,
    handle_summary_command, handle_transaction_command,
};
use financeflow::config::{paths::FinancePaths, settings::Settings};
use financeflow::models::Period;
use financeflow::services::{resolver_for, Ledger};
use financeflow::storage::open_file_store;

#[derive(Parser)]
#[command(
    name = "financeflow",
    version,
    about = "Track monthly income, category budgets and expenses",
    long_about = "FinanceFlow keeps a monthly income, a budget for each spending \
                  category and a list of expenses, and shows where the month's \
                  money went from the command line or an interactive dashboard."
)]
struct Cli {
    /// Pin the active month (YYYY-MM) instead of using the current one
    #[arg(long, global = true, env = "FINANCEFLOW_PERIOD", value_parser = Period::parse)]
    period: Option<Period>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive dashboard
    #[command(aliases = ["tui", "ui"])]
    Dashboard,

    /// Monthly income commands
    #[command(subcommand)]
    Income(financeflow::cli::IncomeCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(financeflow::cli::BudgetCommands),

    /// Transaction management commands
    #[command(subcommand, alias = "transaction")]
    Txn(financeflow::cli::TransactionCommands),

    /// Show the monthly summary
    Summary,

    /// Show spending charts
    Charts,

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = FinancePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let resolver = resolver_for(cli.period, &settings)?;

    let audit = AuditLogger::new(paths.audit_log());

    // Config doesn't need the store
    let command = match cli.command {
        Some(Commands::Config) => {
            if !paths.settings_file().exists() {
                settings.save(&paths)?;
                println!("Created {}", paths.settings_file().display());
                println!();
            }
            println!("FinanceFlow Configuration");
            println!("=========================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Store file:      {}", paths.store_file().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Audit log:       {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Active period:  {}", resolver.active_period().friendly_name());
            println!("  Listing limit:  {}", settings.listing_limit);
            println!("  Audit enabled:  {}", settings.audit_enabled);
            println!("  Date format:    {}", settings.date_format);
            return Ok(());
        }
        Some(Commands::Audit { count }) => {
            handle_audit_command(&audit, count)?;
            return Ok(());
        }
        None => {
            println!("FinanceFlow - monthly income, budget and expense tracking");
            println!();
            println!("Run 'financeflow --help' for usage information.");
            println!("Run 'financeflow dashboard' to launch the interactive interface.");
            return Ok(());
        }
        Some(command) => command,
    };

    let mut ledger = Ledger::open(open_file_store(&paths)?)?;
    if settings.audit_enabled {
        ledger = ledger.with_audit(audit);
    }
    let period = resolver.active_period();

    match command {
        Commands::Dashboard => {
            financeflow::tui::run_tui(&mut ledger, &settings, resolver.as_ref())?;
        }
        Commands::Income(cmd) => {
            handle_income_command(&mut ledger, cmd)?;
        }
        Commands::Budget(cmd) => {
            handle_budget_command(&mut ledger, period, cmd)?;
        }
        Commands::Txn(cmd) => {
            handle_transaction_command(&mut ledger, &settings, period, cmd)?;
        }
        Commands::Summary => {
            handle_summary_command(ledger.state(), period)?;
        }
        Commands::Charts => {
            handle_charts_command(ledger.state(), period)?;
        }
        Commands::Config | Commands::Audit { .. } => {}
    }

    // The change itself is saved; only its audit record is missing
    if let Some(e) = ledger.take_audit_failure() {
        eprintln!("Warning: change saved but not recorded in the audit log: {}", e);
    }

    Ok(())
}
