//! Key-value string stores
//!
//! The persistence layer only needs a flat map of string keys to string
//! values. Writes go through [`KeyValueStore::apply`] as a batch so that
//! multi-record changes (a full reset touches all three records) land
//! together or not at all.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::FinanceResult;

use super::file_io::{read_json, write_json_atomic};

/// A single write in a store batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreOp {
    /// Store `value` under `key`, replacing any previous value
    Set { key: String, value: String },
    /// Remove `key` if present
    Remove { key: String },
}

impl StoreOp {
    pub fn set(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Set {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn remove(key: impl Into<String>) -> Self {
        Self::Remove { key: key.into() }
    }

    fn apply_to(&self, map: &mut BTreeMap<String, String>) {
        match self {
            Self::Set { key, value } => {
                map.insert(key.clone(), value.clone());
            }
            Self::Remove { key } => {
                map.remove(key);
            }
        }
    }
}

/// A string key-value store
pub trait KeyValueStore {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> FinanceResult<Option<String>>;

    /// Apply a batch of writes atomically
    fn apply(&mut self, batch: &[StoreOp]) -> FinanceResult<()>;

    /// Store a single value
    fn save(&mut self, key: &str, value: &str) -> FinanceResult<()> {
        self.apply(&[StoreOp::set(key, value)])
    }

    /// Remove a single value
    fn clear(&mut self, key: &str) -> FinanceResult<()> {
        self.apply(&[StoreOp::remove(key)])
    }
}

/// In-process store, used for tests and throwaway sessions
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> FinanceResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn apply(&mut self, batch: &[StoreOp]) -> FinanceResult<()> {
        for op in batch {
            op.apply_to(&mut self.entries);
        }
        Ok(())
    }
}

/// Store backed by a single JSON object file
///
/// The whole map is rewritten atomically on every batch; the in-memory copy
/// is only replaced after the file write succeeds.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`, starting empty if the file doesn't exist
    pub fn open(path: impl Into<PathBuf>) -> FinanceResult<Self> {
        let path = path.into();
        let entries = read_json(&path)?;
        Ok(Self { path, entries })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> FinanceResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn apply(&mut self, batch: &[StoreOp]) -> FinanceResult<()> {
        if batch.is_empty() {
            return Ok(());
        }

        let mut next = self.entries.clone();
        for op in batch {
            op.apply_to(&mut next);
        }

        write_json_atomic(&self.path, &next)?;
        self.entries = next;
        Ok(())
    }
}
