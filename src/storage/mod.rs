//! Storage layer for FinanceFlow
//!
//! A flat key-value string store (file-backed or in-memory) plus the adapter
//! that maps ledger records onto it.

pub mod adapter;
pub mod file_io;
pub mod store;

pub use adapter::{PersistenceAdapter, BUDGET_KEY, INCOME_KEY, TRANSACTIONS_KEY};
pub use file_io::{read_json, write_json_atomic};
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreOp};

use crate::config::paths::FinancePaths;
use crate::error::FinanceError;

/// Open the file-backed store under the data directory
pub fn open_file_store(paths: &FinancePaths) -> Result<FileStore, FinanceError> {
    paths.ensure_directories()?;
    FileStore::open(paths.store_file())
}
