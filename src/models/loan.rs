//! Loan model
//!
//! A loan between two account holders, or between one account holder and an
//! external party without an account. The remaining amount is never stored
//! here; it is always derived from the payment ledger.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::currency::Currency;
use super::ids::{LoanId, UserId};
use super::money::Money;
use super::payment::{LoanComment, LoanPayment};
use crate::reports::loan_balance;

/// Status of a loan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoanStatus {
    /// Waiting for the counterparty to accept
    Pending,
    /// Accepted; payments may be recorded
    Active,
    /// Fully repaid or manually closed; terminal
    Settled,
}

impl LoanStatus {
    /// Check whether moving to `next` follows pending -> active -> settled
    pub fn can_transition_to(&self, next: LoanStatus) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Active) | (Self::Active, Self::Settled)
        )
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Settled)
    }
}

impl fmt::Display for LoanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Active => write!(f, "active"),
            Self::Settled => write!(f, "settled"),
        }
    }
}

/// Which side of the loan the external party is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartyRole {
    Lender,
    Borrower,
}

/// A counterparty without an account
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalParty {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub role: PartyRole,
}

/// Direction of a loan from one user's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoanDirection {
    Lent,
    Borrowed,
}

/// A plaintext loan record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Loan {
    pub id: LoanId,
    pub lender_id: UserId,
    pub borrower_id: UserId,

    /// Account holder who created the loan
    pub created_by: UserId,

    pub principal: Money,
    pub currency: Currency,
    pub description: String,
    pub status: LoanStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,

    /// When set, both user ids hold the creator and this party fills the
    /// side named by its role
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_party: Option<ExternalParty>,

    /// Payments in the order they were recorded
    pub payments: Vec<LoanPayment>,

    pub collaborators: Vec<UserId>,
    pub comments: Vec<LoanComment>,

    /// Optimistic concurrency token, bumped on every mutation
    pub version: u64,
}

impl Loan {
    pub fn is_settled(&self) -> bool {
        self.status == LoanStatus::Settled
    }

    pub fn has_external_party(&self) -> bool {
        self.external_party.is_some()
    }

    /// Sum of all recorded payments
    pub fn total_paid(&self) -> Money {
        loan_balance::total_paid(self)
    }

    /// Principal minus payments, floored at zero
    pub fn remaining_amount(&self) -> Money {
        loan_balance::remaining_amount(self)
    }

    /// Check whether `user_id` is the lender or the borrower
    pub fn is_party(&self, user_id: &UserId) -> bool {
        &self.lender_id == user_id || &self.borrower_id == user_id
    }

    pub fn is_collaborator(&self, user_id: &UserId) -> bool {
        self.collaborators.contains(user_id)
    }

    /// The account holder on the other side of the loan from `user_id`
    ///
    /// Returns `None` for loans with an external party, and for users who
    /// are not a party. A collaborator's counterparty is the lender, so a
    /// payment or comment recorded by a collaborator notifies the lender
    /// only; the borrower sees it on the loan itself.
    pub fn counterparty_of(&self, user_id: &UserId) -> Option<&UserId> {
        if self.has_external_party() {
            return None;
        }
        if user_id == &self.lender_id {
            Some(&self.borrower_id)
        } else if user_id == &self.borrower_id {
            Some(&self.lender_id)
        } else if self.is_collaborator(user_id) {
            Some(&self.lender_id)
        } else {
            None
        }
    }

    /// Whether `user_id` lent or borrowed on this loan
    ///
    /// Collaborators have no direction.
    pub fn direction_for(&self, user_id: &UserId) -> Option<LoanDirection> {
        if let Some(party) = &self.external_party {
            if !self.is_party(user_id) {
                return None;
            }
            return Some(match party.role {
                PartyRole::Borrower => LoanDirection::Lent,
                PartyRole::Lender => LoanDirection::Borrowed,
            });
        }

        if user_id == &self.lender_id {
            Some(LoanDirection::Lent)
        } else if user_id == &self.borrower_id {
            Some(LoanDirection::Borrowed)
        } else {
            None
        }
    }
}
