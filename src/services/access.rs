//! Record-level authorization
//!
//! An entry is visible to its owner. A loan is visible to its lender, its
//! borrower and its collaborators.

use crate::models::{Entry, LedgerRecord, Loan, UserId};

/// Records that can answer whether a user may see and act on them
pub trait Owned {
    fn is_authorized(&self, user_id: &UserId) -> bool;
}

impl Owned for Entry {
    fn is_authorized(&self, user_id: &UserId) -> bool {
        self.is_owned_by(user_id)
    }
}

impl Owned for Loan {
    fn is_authorized(&self, user_id: &UserId) -> bool {
        self.is_party(user_id) || self.is_collaborator(user_id)
    }
}

impl Owned for LedgerRecord {
    fn is_authorized(&self, user_id: &UserId) -> bool {
        match self {
            Self::Entry(entry) => entry.is_authorized(user_id),
            Self::Loan(loan) => loan.is_authorized(user_id),
        }
    }
}

/// Keep only the records `user_id` may see
pub fn visible_to<'a, T: Owned>(
    records: impl IntoIterator<Item = &'a T>,
    user_id: &'a UserId,
) -> impl Iterator<Item = &'a T>
where
    T: 'a,
{
    records
        .into_iter()
        .filter(move |record| record.is_authorized(user_id))
}
