//! Expense categories
//!
//! The tracker works with a fixed set of six categories. They are used both
//! for budgeting and for tagging transactions, so the set is modelled as an
//! enum rather than as user data.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the six fixed expense classifications
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Transport,
    Entertainment,
    Shopping,
    Bills,
    #[default]
    Other,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 6] = [
        Category::Food,
        Category::Transport,
        Category::Entertainment,
        Category::Shopping,
        Category::Bills,
        Category::Other,
    ];

    /// The storage key ("food", "transport", ...)
    pub fn key(&self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Transport => "transport",
            Self::Entertainment => "entertainment",
            Self::Shopping => "shopping",
            Self::Bills => "bills",
            Self::Other => "other",
        }
    }

    /// Capitalized label for headings
    pub fn label(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Entertainment => "Entertainment",
            Self::Shopping => "Shopping",
            Self::Bills => "Bills",
            Self::Other => "Other",
        }
    }

    /// Palette colour as a hex string
    pub fn color_hex(&self) -> &'static str {
        match self {
            Self::Food => "#ef4444",
            Self::Transport => "#f59e0b",
            Self::Entertainment => "#8b5cf6",
            Self::Shopping => "#10b981",
            Self::Bills => "#6b7280",
            Self::Other => "#9ca3af",
        }
    }

    /// Palette colour as an RGB triple
    pub fn color_rgb(&self) -> (u8, u8, u8) {
        match self {
            Self::Food => (0xef, 0x44, 0x44),
            Self::Transport => (0xf5, 0x9e, 0x0b),
            Self::Entertainment => (0x8b, 0x5c, 0xf6),
            Self::Shopping => (0x10, 0xb9, 0x81),
            Self::Bills => (0x6b, 0x72, 0x80),
            Self::Other => (0x9c, 0xa3, 0xaf),
        }
    }

    /// Position within [`Category::ALL`]
    pub fn index(&self) -> usize {
        match self {
            Self::Food => 0,
            Self::Transport => 1,
            Self::Entertainment => 2,
            Self::Shopping => 3,
            Self::Bills => 4,
            Self::Other => 5,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.key() == key)
            .ok_or_else(|| CategoryParseError(s.trim().to_string()))
    }
}

/// Error returned for a category key outside the fixed set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryParseError(pub String);

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keys: Vec<&str> = Category::ALL.iter().map(|c| c.key()).collect();
        write!(
            f,
            "Unknown category '{}' (expected one of: {})",
            self.0,
            keys.join(", ")
        )
    }
}

impl std::error::Error for CategoryParseError {}
