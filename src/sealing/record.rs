//! At-rest record shapes
//!
//! The persisted, field-encrypted form of each ledger record. Ledger fields
//! are carried as envelopes; identifiers, statuses, currencies, categories
//! and timestamps stay in plaintext. Unknown keys are rejected so that a
//! mistyped or injected field never passes silently.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::crypto::Envelope;
use crate::models::{
    Category, CommentId, Currency, EntryId, EntryStatus, LoanId, LoanStatus, PartyRole,
    PaymentId, RecordKind, UserId,
};

/// Sealed expense or income entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SealedEntry {
    pub id: EntryId,
    pub user_id: UserId,
    pub encrypted_amount: Envelope,
    pub currency: Currency,
    pub category: Category,
    pub encrypted_description: Envelope,
    pub status: EntryStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SealedExternalParty {
    pub encrypted_name: Envelope,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encrypted_email: Option<Envelope>,
    pub role: PartyRole,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SealedPayment {
    pub id: PaymentId,
    pub encrypted_amount: Envelope,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encrypted_note: Option<Envelope>,
    pub recorded_by: UserId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SealedComment {
    pub id: CommentId,
    pub author_id: UserId,
    pub encrypted_text: Envelope,
    pub created_at: DateTime<Utc>,
}

/// Sealed loan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SealedLoan {
    pub id: LoanId,
    pub lender_id: UserId,
    pub borrower_id: UserId,
    pub created_by: UserId,
    pub encrypted_amount: Envelope,
    pub currency: Currency,
    pub encrypted_description: Envelope,
    pub status: LoanStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_party: Option<SealedExternalParty>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub payments: Vec<SealedPayment>,

    /// Written for display; never read back as the loan balance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encrypted_remaining_amount: Option<Envelope>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub collaborators: Vec<UserId>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<SealedComment>,

    pub version: u64,
}

/// Any sealed ledger record, tagged by `kind`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SealedRecord {
    Expense(SealedEntry),
    Income(SealedEntry),
    Loan(SealedLoan),
}

impl SealedRecord {
    pub fn kind(&self) -> RecordKind {
        match self {
            Self::Expense(_) => RecordKind::Expense,
            Self::Income(_) => RecordKind::Income,
            Self::Loan(_) => RecordKind::Loan,
        }
    }

    /// Record id as a string
    pub fn id_string(&self) -> String {
        match self {
            Self::Expense(entry) | Self::Income(entry) => entry.id.as_uuid().to_string(),
            Self::Loan(loan) => loan.id.as_uuid().to_string(),
        }
    }
}
