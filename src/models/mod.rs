//! Core data models for the sealed ledger
//!
//! This module contains the plaintext, in-memory form of every ledger
//! record: expense and income entries, loans with their payments and
//! comments, and user preferences. The encrypted at-rest form lives in
//! `sealing`.

pub mod category;
pub mod currency;
pub mod entry;
pub mod ids;
pub mod loan;
pub mod money;
pub mod payment;
pub mod preferences;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use category::Category;
pub use currency::Currency;
pub use entry::{Entry, EntryKind, EntryStatus};
pub use ids::{CommentId, EntryId, LoanId, PaymentId, UserId};
pub use loan::{ExternalParty, Loan, LoanDirection, LoanStatus, PartyRole};
pub use money::Money;
pub use payment::{LoanComment, LoanPayment};
pub use preferences::UserPreferences;

/// The three kinds of ledger record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Expense,
    Income,
    Loan,
}

impl From<EntryKind> for RecordKind {
    fn from(kind: EntryKind) -> Self {
        match kind {
            EntryKind::Expense => Self::Expense,
            EntryKind::Income => Self::Income,
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expense => write!(f, "expense"),
            Self::Income => write!(f, "income"),
            Self::Loan => write!(f, "loan"),
        }
    }
}

/// A plaintext ledger record of any kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LedgerRecord {
    Entry(Entry),
    Loan(Loan),
}

impl LedgerRecord {
    pub fn kind(&self) -> RecordKind {
        match self {
            Self::Entry(entry) => entry.kind.into(),
            Self::Loan(_) => RecordKind::Loan,
        }
    }

    /// Record id as a string, for logs and notifications
    pub fn id_string(&self) -> String {
        match self {
            Self::Entry(entry) => entry.id.as_uuid().to_string(),
            Self::Loan(loan) => loan.id.as_uuid().to_string(),
        }
    }

    pub fn as_entry(&self) -> Option<&Entry> {
        match self {
            Self::Entry(entry) => Some(entry),
            Self::Loan(_) => None,
        }
    }

    pub fn as_loan(&self) -> Option<&Loan> {
        match self {
            Self::Loan(loan) => Some(loan),
            Self::Entry(_) => None,
        }
    }
}

impl From<Entry> for LedgerRecord {
    fn from(entry: Entry) -> Self {
        Self::Entry(entry)
    }
}

impl From<Loan> for LedgerRecord {
    fn from(loan: Loan) -> Self {
        Self::Loan(loan)
    }
}
