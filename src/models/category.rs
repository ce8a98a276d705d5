//! Entry categories
//!
//! Each entry kind has its own fixed category set; `Other` is shared.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::entry::EntryKind;

/// Category of an expense or income entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    // Expense
    Food,
    Transport,
    Housing,
    Utilities,
    Entertainment,
    Health,
    Shopping,
    Education,
    Travel,
    // Income
    Salary,
    Freelance,
    Business,
    Investment,
    Gift,
    Rental,
    Refund,
    // Both
    Other,
}

impl Category {
    pub const EXPENSE: [Category; 10] = [
        Category::Food,
        Category::Transport,
        Category::Housing,
        Category::Utilities,
        Category::Entertainment,
        Category::Health,
        Category::Shopping,
        Category::Education,
        Category::Travel,
        Category::Other,
    ];

    pub const INCOME: [Category; 8] = [
        Category::Salary,
        Category::Freelance,
        Category::Business,
        Category::Investment,
        Category::Gift,
        Category::Rental,
        Category::Refund,
        Category::Other,
    ];

    /// Categories valid for the given entry kind
    pub fn for_kind(kind: EntryKind) -> &'static [Category] {
        match kind {
            EntryKind::Expense => &Self::EXPENSE,
            EntryKind::Income => &Self::INCOME,
        }
    }

    /// Check whether this category may be used on an entry of `kind`
    pub fn is_valid_for(&self, kind: EntryKind) -> bool {
        Self::for_kind(kind).contains(self)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Transport => "transport",
            Self::Housing => "housing",
            Self::Utilities => "utilities",
            Self::Entertainment => "entertainment",
            Self::Health => "health",
            Self::Shopping => "shopping",
            Self::Education => "education",
            Self::Travel => "travel",
            Self::Salary => "salary",
            Self::Freelance => "freelance",
            Self::Business => "business",
            Self::Investment => "investment",
            Self::Gift => "gift",
            Self::Rental => "rental",
            Self::Refund => "refund",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for unknown category names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown category: {}", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Self::EXPENSE
            .into_iter()
            .chain(Self::INCOME)
            .find(|c| c.name() == name)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
