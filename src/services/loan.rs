//! Loan service
//!
//! Lifecycle of a loan: creation, acceptance, payments, manual settlement,
//! detail edits, collaborators and comments. Each mutation checks the
//! caller's expected version against the loan, returns a new loan value with
//! the version bumped, and reports the transitions that happened.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

use super::access::Owned;
use super::validate;
use crate::error::{LedgerError, LedgerResult};
use crate::events::Transition;
use crate::models::{
    CommentId, ExternalParty, Loan, LoanComment, LoanId, LoanPayment, LoanStatus, Money,
    PartyRole, PaymentId, UserId,
};

/// A new record value plus the transitions that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome<T> {
    pub record: T,
    pub transitions: Vec<Transition>,
}

pub type LoanOutcome = Outcome<Loan>;

/// Result of `apply_payment`
pub type PaymentOutcome = LoanOutcome;

impl<T> Outcome<T> {
    fn new(record: T, transitions: Vec<Transition>) -> Self {
        Self {
            record,
            transitions,
        }
    }
}

/// A counterparty without an account
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewExternalParty {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    pub role: PartyRole,
}

/// Caller-supplied fields for a new loan
///
/// Without an external party both user ids are required and one of them
/// must be the creator. With an external party both ids default to the
/// creator.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewLoan {
    #[serde(default)]
    pub lender_id: Option<UserId>,
    #[serde(default)]
    pub borrower_id: Option<UserId>,
    pub amount: Money,
    pub currency: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub external_party: Option<NewExternalParty>,
}

/// Caller-supplied fields for a payment
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewPayment {
    pub amount: Money,
    /// Defaults to today
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub note: Option<String>,
}

/// Partial update of a loan's descriptive fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LoanUpdate {
    #[serde(default)]
    pub description: Option<String>,
    /// `Some(None)` clears the due date
    #[serde(default, deserialize_with = "validate::double_option")]
    pub due_date: Option<Option<NaiveDate>>,
}

fn check_version(loan: &Loan, expected_version: u64) -> LedgerResult<()> {
    if loan.version != expected_version {
        return Err(LedgerError::ConcurrentModification {
            expected: expected_version,
            actual: loan.version,
        });
    }
    Ok(())
}

/// Clone the loan as the starting point of its next version
fn next_version(loan: &Loan, now: DateTime<Utc>) -> Loan {
    let mut next = loan.clone();
    next.version = loan.version + 1;
    next.updated_at = now;
    next
}

fn set_status(loan: &mut Loan, status: LoanStatus) -> LedgerResult<()> {
    if !loan.status.can_transition_to(status) {
        return Err(LedgerError::invalid_state(format!(
            "loan cannot move from {} to {}",
            loan.status, status
        )));
    }
    tracing::debug!(loan_id = %loan.id, from = %loan.status, to = %status, "Loan status changed");
    loan.status = status;
    Ok(())
}

fn optional_text(text: Option<String>) -> Option<String> {
    text.filter(|t| !t.trim().is_empty())
}

/// Create a validated loan on behalf of `creator`
pub fn create_loan(new: NewLoan, creator: &UserId) -> LedgerResult<LoanOutcome> {
    validate::user("createdBy", creator)?;
    let principal = validate::positive_amount("amount", new.amount)?;
    let currency = validate::currency("currency", &new.currency)?;

    let (lender_id, borrower_id, external_party, status) = match new.external_party {
        Some(party) => {
            validate::non_blank("externalParty.name", &party.name)?;
            let email = optional_text(party.email);
            if let Some(email) = &email {
                if !email.contains('@') {
                    return Err(LedgerError::validation(
                        "externalParty.email",
                        "is not an email address",
                    ));
                }
            }
            for (field, id) in [("lenderId", &new.lender_id), ("borrowerId", &new.borrower_id)] {
                if id.as_ref().is_some_and(|id| id != creator) {
                    return Err(LedgerError::validation(
                        field,
                        "must be the creator when an external party is named",
                    ));
                }
            }
            let party = ExternalParty {
                name: party.name,
                email,
                role: party.role,
            };
            (creator.clone(), creator.clone(), Some(party), LoanStatus::Active)
        }
        None => {
            let lender_id = new
                .lender_id
                .ok_or_else(|| LedgerError::validation("lenderId", "is required"))?;
            let borrower_id = new
                .borrower_id
                .ok_or_else(|| LedgerError::validation("borrowerId", "is required"))?;
            validate::user("lenderId", &lender_id)?;
            validate::user("borrowerId", &borrower_id)?;
            if lender_id == borrower_id {
                return Err(LedgerError::validation(
                    "borrowerId",
                    "must differ from the lender",
                ));
            }
            if &lender_id != creator && &borrower_id != creator {
                return Err(LedgerError::validation(
                    "createdBy",
                    "must be the lender or the borrower",
                ));
            }
            (lender_id, borrower_id, None, LoanStatus::Pending)
        }
    };

    let now = Utc::now();
    let loan = Loan {
        id: LoanId::new(),
        lender_id,
        borrower_id,
        created_by: creator.clone(),
        principal,
        currency,
        description: new.description,
        status,
        created_at: now,
        updated_at: now,
        due_date: new.due_date,
        external_party,
        payments: Vec::new(),
        collaborators: Vec::new(),
        comments: Vec::new(),
        version: 0,
    };

    let transition = Transition::LoanCreated {
        loan_id: loan.id,
        actor: creator.clone(),
        counterparty: loan.counterparty_of(creator).cloned(),
    };
    Ok(Outcome::new(loan, vec![transition]))
}

/// The counterparty accepts a pending loan
pub fn accept_loan(loan: &Loan, expected_version: u64, actor: &UserId) -> LedgerResult<LoanOutcome> {
    check_version(loan, expected_version)?;
    if loan.status != LoanStatus::Pending {
        return Err(LedgerError::invalid_state(format!(
            "only pending loans can be accepted, loan is {}",
            loan.status
        )));
    }
    if !loan.is_party(actor) || actor == &loan.created_by {
        return Err(LedgerError::validation(
            "actor",
            "only the counterparty can accept a loan",
        ));
    }

    let mut next = next_version(loan, Utc::now());
    set_status(&mut next, LoanStatus::Active)?;

    let transition = Transition::LoanAccepted {
        loan_id: loan.id,
        actor: actor.clone(),
        counterparty: loan.counterparty_of(actor).cloned(),
    };
    Ok(Outcome::new(next, vec![transition]))
}

/// Append a payment to an active loan
///
/// Settles the loan when the remaining amount reaches zero.
pub fn apply_payment(
    loan: &Loan,
    expected_version: u64,
    payment: NewPayment,
    actor: &UserId,
) -> LedgerResult<PaymentOutcome> {
    check_version(loan, expected_version)?;
    match loan.status {
        LoanStatus::Settled => {
            return Err(LedgerError::invalid_state(
                "loan is settled and accepts no further payments",
            ))
        }
        LoanStatus::Pending => {
            return Err(LedgerError::invalid_state(
                "loan has not been accepted yet",
            ))
        }
        LoanStatus::Active => {}
    }
    let amount = validate::positive_amount("amount", payment.amount)?;
    validate::user("recordedBy", actor)?;

    let now = Utc::now();
    let recorded = LoanPayment {
        id: PaymentId::new(),
        amount,
        date: payment.date.unwrap_or_else(|| now.date_naive()),
        note: optional_text(payment.note),
        recorded_by: actor.clone(),
    };

    let counterparty = loan.counterparty_of(actor).cloned();
    let mut transitions = vec![Transition::PaymentAppended {
        loan_id: loan.id,
        payment_id: recorded.id,
        actor: actor.clone(),
        counterparty: counterparty.clone(),
    }];

    let mut next = next_version(loan, now);
    next.payments.push(recorded);

    if next.remaining_amount().is_zero() {
        set_status(&mut next, LoanStatus::Settled)?;
        transitions.push(Transition::LoanSettled {
            loan_id: loan.id,
            actor: actor.clone(),
            counterparty,
        });
    }

    Ok(Outcome::new(next, transitions))
}

/// Manually settle an active loan, whatever its remaining amount
pub fn settle_loan(loan: &Loan, expected_version: u64, actor: &UserId) -> LedgerResult<LoanOutcome> {
    check_version(loan, expected_version)?;
    if loan.is_settled() {
        return Err(LedgerError::invalid_state("loan is already settled"));
    }
    if !loan.is_party(actor) {
        return Err(LedgerError::validation(
            "actor",
            "only the lender or the borrower can settle a loan",
        ));
    }

    let mut next = next_version(loan, Utc::now());
    set_status(&mut next, LoanStatus::Settled)?;

    let transition = Transition::LoanSettled {
        loan_id: loan.id,
        actor: actor.clone(),
        counterparty: loan.counterparty_of(actor).cloned(),
    };
    Ok(Outcome::new(next, vec![transition]))
}

/// Apply a partial update to a loan's description and due date
pub fn update_loan_details(
    loan: &Loan,
    expected_version: u64,
    update: LoanUpdate,
) -> LedgerResult<LoanOutcome> {
    check_version(loan, expected_version)?;
    if loan.is_settled() {
        return Err(LedgerError::invalid_state("settled loans cannot be edited"));
    }
    if update == LoanUpdate::default() {
        return Ok(Outcome::new(loan.clone(), Vec::new()));
    }

    let mut next = next_version(loan, Utc::now());
    if let Some(description) = update.description {
        next.description = description;
    }
    if let Some(due_date) = update.due_date {
        next.due_date = due_date;
    }

    Ok(Outcome::new(next, Vec::new()))
}

/// Grant a user collaborator access to a loan
///
/// Adding an existing collaborator returns the loan unchanged.
pub fn add_collaborator(
    loan: &Loan,
    expected_version: u64,
    user_id: &UserId,
) -> LedgerResult<LoanOutcome> {
    check_version(loan, expected_version)?;
    validate::user("collaborator", user_id)?;
    if loan.is_party(user_id) {
        return Err(LedgerError::validation(
            "collaborator",
            "lender and borrower cannot be collaborators",
        ));
    }
    if loan.is_collaborator(user_id) {
        return Ok(Outcome::new(loan.clone(), Vec::new()));
    }

    let mut next = next_version(loan, Utc::now());
    next.collaborators.push(user_id.clone());
    Ok(Outcome::new(next, Vec::new()))
}

/// Append a comment by an authorized user
///
/// Settled loans still accept comments.
pub fn add_comment(
    loan: &Loan,
    expected_version: u64,
    author: &UserId,
    text: &str,
) -> LedgerResult<LoanOutcome> {
    check_version(loan, expected_version)?;
    if !loan.is_authorized(author) {
        return Err(LedgerError::validation(
            "authorId",
            "only participants can comment on a loan",
        ));
    }
    validate::non_blank("text", text)?;

    let now = Utc::now();
    let comment = LoanComment {
        id: CommentId::new(),
        author_id: author.clone(),
        text: text.to_string(),
        created_at: now,
    };

    let transition = Transition::CommentAdded {
        loan_id: loan.id,
        comment_id: comment.id,
        actor: author.clone(),
        counterparty: loan.counterparty_of(author).cloned(),
    };

    let mut next = next_version(loan, now);
    next.comments.push(comment);
    Ok(Outcome::new(next, vec![transition]))
}

/// Ask the counterparty of a pending loan to approve it
///
/// The loan itself does not change.
pub fn request_approval(loan: &Loan, actor: &UserId) -> LedgerResult<Transition> {
    if loan.status != LoanStatus::Pending {
        return Err(LedgerError::invalid_state(format!(
            "only pending loans need approval, loan is {}",
            loan.status
        )));
    }
    if actor != &loan.created_by {
        return Err(LedgerError::validation(
            "actor",
            "only the creator can request approval",
        ));
    }
    let approver = loan
        .counterparty_of(actor)
        .cloned()
        .ok_or_else(|| LedgerError::invalid_state("loan has no counterparty to approve it"))?;

    Ok(Transition::ApprovalRequested {
        loan_id: loan.id,
        actor: actor.clone(),
        approver,
    })
}
