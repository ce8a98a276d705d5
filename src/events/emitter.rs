//! Domain event emitter
//!
//! Maps a transition to at most one notification. Pure: no clock, no I/O.

use crate::models::{RecordKind, UserId};

use super::event::{DomainEvent, NotificationKind};
use super::transition::Transition;

/// Produce the notification for a transition, if any
///
/// No event is produced when there is no account holder to notify, when
/// the target would be the actor, or for transitions nobody needs to hear
/// about (loan acceptance).
pub fn emit(transition: &Transition) -> Option<DomainEvent> {
    let (kind, target, message) = match transition {
        Transition::LoanCreated {
            actor,
            counterparty,
            ..
        } => (
            NotificationKind::LoanInvite,
            counterparty.as_ref()?,
            format!("{} invited you to a loan", actor),
        ),
        Transition::LoanAccepted { .. } => return None,
        Transition::PaymentAppended {
            actor,
            counterparty,
            ..
        } => (
            NotificationKind::PaymentAdded,
            counterparty.as_ref()?,
            format!("{} recorded a payment on your loan", actor),
        ),
        Transition::LoanSettled {
            actor,
            counterparty,
            ..
        } => (
            NotificationKind::LoanClosed,
            counterparty.as_ref()?,
            format!("Your loan with {} has been settled", actor),
        ),
        Transition::ApprovalRequested {
            actor, approver, ..
        } => (
            NotificationKind::ApprovalRequest,
            approver,
            format!("{} is waiting for you to approve a loan", actor),
        ),
        Transition::CommentAdded {
            actor,
            counterparty,
            ..
        } => (
            NotificationKind::CommentAdded,
            counterparty.as_ref()?,
            format!("{} commented on your loan", actor),
        ),
    };

    if target == transition.actor() {
        return None;
    }

    Some(DomainEvent {
        kind,
        target_user_id: UserId::clone(target),
        message,
        related_id: transition.loan_id().as_uuid().to_string(),
        related_kind: RecordKind::Loan,
    })
}

/// Produce the notifications for a sequence of transitions, in order
pub fn emit_all(transitions: &[Transition]) -> Vec<DomainEvent> {
    transitions.iter().filter_map(emit).collect()
}
