//! Loan payments and comments
//!
//! Both are owned by their parent loan and never referenced on their own.
//! Neither is edited after creation; a correction is a new payment.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use super::ids::{CommentId, PaymentId, UserId};
use super::money::Money;

/// A single repayment recorded against a loan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanPayment {
    pub id: PaymentId,

    /// Always positive
    pub amount: Money,

    pub date: NaiveDate,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    /// User who recorded the payment
    pub recorded_by: UserId,
}

/// A discussion comment attached to a loan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanComment {
    pub id: CommentId,
    pub author_id: UserId,
    pub text: String,
    pub created_at: DateTime<Utc>,
}
