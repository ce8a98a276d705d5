//! Domain event data structures

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{RecordKind, UserId};

/// Kinds of notification-worthy events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    LoanInvite,
    PaymentAdded,
    LoanClosed,
    ApprovalRequest,
    CommentAdded,
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LoanInvite => write!(f, "loan_invite"),
            Self::PaymentAdded => write!(f, "payment_added"),
            Self::LoanClosed => write!(f, "loan_closed"),
            Self::ApprovalRequest => write!(f, "approval_request"),
            Self::CommentAdded => write!(f, "comment_added"),
        }
    }
}

/// A notification to be delivered by an external collaborator
///
/// Messages never include amounts, descriptions or other encrypted fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainEvent {
    pub kind: NotificationKind,
    pub target_user_id: UserId,
    pub message: String,
    pub related_id: String,
    pub related_kind: RecordKind,
}
