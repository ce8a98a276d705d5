//! Service layer for the sealed ledger
//!
//! The service layer holds the record operations: validation of caller
//! input, lifecycle transitions and partial updates. Every operation takes
//! the current plaintext value by reference and returns a new one.

pub mod access;
pub mod entry;
pub mod loan;
pub mod preferences;
pub mod validate;

use serde::Deserialize;

use crate::error::LedgerResult;
use crate::models::{EntryKind, LedgerRecord, UserId};

pub use access::{visible_to, Owned};
pub use entry::{archive_entry, create_entry, update_entry, EntryUpdate, NewEntry};
pub use loan::{
    accept_loan, add_collaborator, add_comment, apply_payment, create_loan, request_approval,
    settle_loan, update_loan_details, LoanOutcome, LoanUpdate, NewExternalParty, NewLoan,
    NewPayment, Outcome, PaymentOutcome,
};
pub use preferences::{update_preferences, PreferencesUpdate};

/// Caller input for a new ledger record, tagged by `kind`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NewRecord {
    Expense(NewEntry),
    Income(NewEntry),
    Loan(NewLoan),
}

/// Create a validated ledger record on behalf of `actor`
///
/// Entries are owned by the actor. Loans report their creation transition.
pub fn create_record(new: NewRecord, actor: &UserId) -> LedgerResult<Outcome<LedgerRecord>> {
    let outcome = match new {
        NewRecord::Expense(fields) => Outcome {
            record: create_entry(EntryKind::Expense, fields, actor)?.into(),
            transitions: Vec::new(),
        },
        NewRecord::Income(fields) => Outcome {
            record: create_entry(EntryKind::Income, fields, actor)?.into(),
            transitions: Vec::new(),
        },
        NewRecord::Loan(fields) => {
            let created = create_loan(fields, actor)?;
            Outcome {
                record: created.record.into(),
                transitions: created.transitions,
            }
        }
    };
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LedgerError;
    use crate::models::{Category, Money, RecordKind};
    use crate::test_support::user;
    use serde_json::json;

    #[test]
    fn test_create_expense_from_json() {
        let new: NewRecord = serde_json::from_value(json!({
            "kind": "expense",
            "amount": 4250,
            "currency": "USD",
            "category": "food",
            "description": "Groceries"
        }))
        .unwrap();

        let outcome = create_record(new, &user("alice")).unwrap();
        assert_eq!(outcome.record.kind(), RecordKind::Expense);
        assert!(outcome.transitions.is_empty());

        let entry = outcome.record.as_entry().unwrap();
        assert_eq!(entry.amount, Money::from_minor(4250));
        assert_eq!(entry.category, Category::Food);
        assert_eq!(entry.user_id, user("alice"));
    }

    #[test]
    fn test_create_loan_from_json() {
        let new: NewRecord = serde_json::from_value(json!({
            "kind": "loan",
            "lenderId": "alice",
            "borrowerId": "bob",
            "amount": 100000,
            "currency": "USD"
        }))
        .unwrap();

        let outcome = create_record(new, &user("alice")).unwrap();
        assert_eq!(outcome.record.kind(), RecordKind::Loan);
        assert_eq!(outcome.transitions.len(), 1);
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result: Result<NewRecord, _> = serde_json::from_value(json!({
            "kind": "income",
            "amount": 100,
            "currency": "USD",
            "category": "salary",
            "isAdmin": true
        }));
        assert!(result.is_err());

        let result: Result<NewRecord, _> = serde_json::from_value(json!({
            "kind": "gift",
            "amount": 100
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_surfaces_field() {
        let new = NewRecord::Income(NewEntry {
            amount: Money::zero(),
            currency: "USD".to_string(),
            category: "salary".to_string(),
            description: String::new(),
        });
        let err = create_record(new, &user("alice")).unwrap_err();
        assert!(matches!(err, LedgerError::Validation { field: "amount", .. }));
    }
}
