//! FinanceFlow - personal finance tracking for the terminal
//!
//! This library provides the core functionality for FinanceFlow: a monthly
//! income, per-category budgets and a list of expense transactions, with
//! statistics derived from them on demand.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, categories, budgets, transactions)
//! - `storage`: Key-value persistence and the ledger's storage adapter
//! - `services`: The ledger, period resolution and confirmations
//! - `reports`: Derived statistics, summaries and chart data
//! - `audit`: Audit logging of committed changes
//! - `cli`, `display`, `tui`: Presentation
//!
//! # Example
//!
//! ```rust,ignore
//! use financeflow::config::{paths::FinancePaths, settings::Settings};
//! use financeflow::services::Ledger;
//! use financeflow::storage::open_file_store;
//!
//! let paths = FinancePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let ledger = Ledger::open(open_file_store(&paths)?)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{FinanceError, FinanceResult};
