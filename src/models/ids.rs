//! Transaction identifiers
//!
//! Ids are millisecond timestamps taken at creation time. The generator bumps
//! past the last issued id so two transactions created within the same
//! millisecond still get distinct, strictly increasing ids.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Unique identifier of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(i64);

impl TransactionId {
    /// Wrap a raw id
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// Get the raw numeric id
    pub const fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TransactionId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        Ok(Self(s.parse()?))
    }
}

/// Issues time-derived, strictly increasing transaction ids
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    /// Create a generator that will never reissue any of `existing`
    pub fn seeded<'a>(existing: impl IntoIterator<Item = &'a TransactionId>) -> Self {
        let last = existing.into_iter().map(|id| id.0).max().unwrap_or(0);
        Self { last }
    }

    /// Issue an id for a transaction created at `now_millis`
    pub fn next_at(&mut self, now_millis: i64) -> TransactionId {
        let id = now_millis.max(self.last + 1);
        self.last = id;
        TransactionId(id)
    }

    /// Issue an id using the system clock
    pub fn next(&mut self) -> TransactionId {
        self.next_at(chrono::Utc::now().timestamp_millis())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_instant_does_not_collide() {
        let mut ids = IdGenerator::default();
        let a = ids.next_at(1_700_000_000_000);
        let b = ids.next_at(1_700_000_000_000);
        let c = ids.next_at(1_700_000_000_000);

        assert!(a < b && b < c);
        assert_eq!(a.as_i64(), 1_700_000_000_000);
    }

    #[test]
    fn test_clock_going_backwards_still_increases() {
        let mut ids = IdGenerator::default();
        let a = ids.next_at(2_000);
        let b = ids.next_at(1_000);
        assert!(b > a);
    }

    #[test]
    fn test_seeded_skips_existing() {
        let existing = [TransactionId::from_raw(5_000), TransactionId::from_raw(9_000)];
        let mut ids = IdGenerator::seeded(existing.iter());
        assert_eq!(ids.next_at(100).as_i64(), 9_001);
    }

    #[test]
    fn test_parse_and_display() {
        let id: TransactionId = "#1736899200000".parse().unwrap();
        assert_eq!(id.as_i64(), 1_736_899_200_000);
        assert_eq!(id.to_string(), "1736899200000");
        assert!("txn".parse::<TransactionId>().is_err());
    }

    #[test]
    fn test_serializes_as_number() {
        let id = TransactionId::from_raw(42);
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");
    }
}
