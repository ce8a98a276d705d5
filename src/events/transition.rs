//! Descriptions of ledger state changes
//!
//! Record operations return these alongside the new record value. They are
//! plain data; turning them into notifications is the emitter's job.

use crate::models::{CommentId, LoanId, PaymentId, UserId};

/// A state change on a loan, as seen by the notification layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// A loan was created naming an account holder as counterparty
    LoanCreated {
        loan_id: LoanId,
        actor: UserId,
        counterparty: Option<UserId>,
    },
    /// The counterparty accepted a pending loan
    LoanAccepted {
        loan_id: LoanId,
        actor: UserId,
        counterparty: Option<UserId>,
    },
    /// A payment was appended to a loan
    PaymentAppended {
        loan_id: LoanId,
        payment_id: PaymentId,
        actor: UserId,
        counterparty: Option<UserId>,
    },
    /// A loan reached the settled status
    LoanSettled {
        loan_id: LoanId,
        actor: UserId,
        counterparty: Option<UserId>,
    },
    /// The creator of a pending loan asked the counterparty to approve it
    ApprovalRequested {
        loan_id: LoanId,
        actor: UserId,
        approver: UserId,
    },
    /// A comment was added to a loan
    CommentAdded {
        loan_id: LoanId,
        comment_id: CommentId,
        actor: UserId,
        counterparty: Option<UserId>,
    },
}

impl Transition {
    pub fn loan_id(&self) -> LoanId {
        match self {
            Self::LoanCreated { loan_id, .. }
            | Self::LoanAccepted { loan_id, .. }
            | Self::PaymentAppended { loan_id, .. }
            | Self::LoanSettled { loan_id, .. }
            | Self::ApprovalRequested { loan_id, .. }
            | Self::CommentAdded { loan_id, .. } => *loan_id,
        }
    }

    pub fn actor(&self) -> &UserId {
        match self {
            Self::LoanCreated { actor, .. }
            | Self::LoanAccepted { actor, .. }
            | Self::PaymentAppended { actor, .. }
            | Self::LoanSettled { actor, .. }
            | Self::ApprovalRequested { actor, .. }
            | Self::CommentAdded { actor, .. } => actor,
        }
    }
}
