//! Dashboard summary
//!
//! Totals over one user's decrypted records. The summary is never stored;
//! it is recomputed from the current record set on every call.

use serde::Serialize;
use std::ops::Add;

use crate::models::{Entry, EntryKind, Loan, LoanDirection, LoanStatus, Money, UserId};

/// Headline totals for a user's dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_income: Money,
    pub total_expense: Money,
    /// Income minus expense
    pub balance: Money,
    /// Remaining amount on active loans where the user is the lender
    pub total_loaned: Money,
    /// Remaining amount on active loans where the user is the borrower
    pub total_borrowed: Money,
    /// Loaned minus borrowed
    pub net_loan: Money,
}

impl DashboardSummary {
    /// Build a summary from the four base totals
    pub fn from_totals(
        total_income: Money,
        total_expense: Money,
        total_loaned: Money,
        total_borrowed: Money,
    ) -> Self {
        Self {
            total_income,
            total_expense,
            balance: total_income - total_expense,
            total_loaned,
            total_borrowed,
            net_loan: total_loaned - total_borrowed,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl Add for DashboardSummary {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::from_totals(
            self.total_income + other.total_income,
            self.total_expense + other.total_expense,
            self.total_loaned + other.total_loaned,
            self.total_borrowed + other.total_borrowed,
        )
    }
}

impl std::iter::Sum for DashboardSummary {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, s| acc + s)
    }
}

/// Summarize a user's active entries and active loans
///
/// Entries owned by other users are ignored. A loan counts toward
/// `total_loaned` or `total_borrowed` only when the user lent or borrowed on
/// it; being a collaborator does not count.
pub fn summarize(entries: &[Entry], loans: &[Loan], user_id: &UserId) -> DashboardSummary {
    let mut total_income = Money::zero();
    let mut total_expense = Money::zero();

    for entry in entries
        .iter()
        .filter(|e| e.is_active() && e.is_owned_by(user_id))
    {
        match entry.kind {
            EntryKind::Income => total_income += entry.amount,
            EntryKind::Expense => total_expense += entry.amount,
        }
    }

    let mut total_loaned = Money::zero();
    let mut total_borrowed = Money::zero();

    for loan in loans.iter().filter(|l| l.status == LoanStatus::Active) {
        match loan.direction_for(user_id) {
            Some(LoanDirection::Lent) => total_loaned += loan.remaining_amount(),
            Some(LoanDirection::Borrowed) => total_borrowed += loan.remaining_amount(),
            None => {}
        }
    }

    DashboardSummary::from_totals(total_income, total_expense, total_loaned, total_borrowed)
}
