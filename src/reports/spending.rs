//! Spending Report
//!
//! Breaks a user's active expenses down by category.

use serde::Serialize;
use std::collections::HashMap;

use crate::models::{Category, Entry, Money, UserId};

/// Spending in a single category
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpendingByCategory {
    pub category: Category,
    pub total_spending: Money,
    pub entry_count: usize,
    /// Percentage of total spending
    pub percentage: f64,
}

/// Spending Report
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpendingReport {
    /// Categories sorted by total spending, largest first
    pub categories: Vec<SpendingByCategory>,
    pub total_spending: Money,
}

impl SpendingReport {
    /// Generate a spending report for one user
    pub fn generate(entries: &[Entry], user_id: &UserId) -> Self {
        let mut by_category: HashMap<Category, (Money, usize)> = HashMap::new();

        for entry in entries
            .iter()
            .filter(|e| e.is_expense() && e.is_active() && e.is_owned_by(user_id))
        {
            let slot = by_category
                .entry(entry.category)
                .or_insert((Money::zero(), 0));
            slot.0 += entry.amount;
            slot.1 += 1;
        }

        let total_spending: Money = by_category.values().map(|(total, _)| *total).sum();

        let mut categories: Vec<_> = by_category
            .into_iter()
            .map(|(category, (total, count))| SpendingByCategory {
                category,
                total_spending: total,
                entry_count: count,
                percentage: if total_spending.is_zero() {
                    0.0
                } else {
                    (total.minor_units() as f64 / total_spending.minor_units() as f64) * 100.0
                },
            })
            .collect();

        // Largest first; ties broken by category for a stable order
        categories.sort_by(|a, b| {
            b.total_spending
                .cmp(&a.total_spending)
                .then(a.category.cmp(&b.category))
        });

        Self {
            categories,
            total_spending,
        }
    }

    /// Get the top N spending categories
    pub fn top_categories(&self, n: usize) -> &[SpendingByCategory] {
        &self.categories[..n.min(self.categories.len())]
    }
}

/// Per-category spending of one user's active expenses
pub fn spending_by_category(entries: &[Entry], user_id: &UserId) -> SpendingReport {
    SpendingReport::generate(entries, user_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryKind, EntryStatus};
    use crate::test_support::{entry, user};

    #[test]
    fn test_empty_report() {
        let report = SpendingReport::generate(&[], &user("alice"));
        assert!(report.categories.is_empty());
        assert!(report.total_spending.is_zero());
    }

    #[test]
    fn test_groups_and_sorts_by_category() {
        let mut archived = entry(EntryKind::Expense, "alice", 999, Category::Travel);
        archived.status = EntryStatus::Archived;

        let entries = vec![
            entry(EntryKind::Expense, "alice", 100, Category::Food),
            entry(EntryKind::Expense, "alice", 50, Category::Food),
            entry(EntryKind::Expense, "alice", 450, Category::Housing),
            entry(EntryKind::Income, "alice", 5000, Category::Salary),
            entry(EntryKind::Expense, "bob", 70, Category::Food),
            archived,
        ];

        let report = SpendingReport::generate(&entries, &user("alice"));

        assert_eq!(report.total_spending, Money::from_major(600));
        assert_eq!(report.categories.len(), 2);
        assert_eq!(report.categories[0].category, Category::Housing);
        assert_eq!(report.categories[1].category, Category::Food);
        assert_eq!(report.categories[1].entry_count, 2);
        assert!((report.categories[0].percentage - 75.0).abs() < 1e-9);
        assert_eq!(report.top_categories(1).len(), 1);
        assert_eq!(report.top_categories(10).len(), 2);
    }
}
