//! Shared fixtures for unit tests

use chrono::{NaiveDate, Utc};

use crate::crypto::KeyMaterial;
use crate::models::{
    Category, Currency, Entry, EntryId, EntryKind, EntryStatus, Loan, LoanId, LoanPayment,
    LoanStatus, Money, PaymentId, UserId,
};

/// The fixed all-zero test key
pub fn test_key() -> KeyMaterial {
    KeyMaterial::from_bytes([0u8; 32])
}

pub fn user(id: &str) -> UserId {
    UserId::from(id)
}

pub fn entry(kind: EntryKind, owner: &str, major: i64, category: Category) -> Entry {
    let now = Utc::now();
    Entry {
        id: EntryId::new(),
        kind,
        user_id: user(owner),
        amount: Money::from_major(major),
        currency: Currency::Usd,
        category,
        description: format!("{} {}", kind, category),
        status: EntryStatus::Active,
        created_at: now,
        updated_at: now,
    }
}

pub fn loan(lender: &str, borrower: &str, principal: i64, status: LoanStatus) -> Loan {
    let now = Utc::now();
    Loan {
        id: LoanId::new(),
        lender_id: user(lender),
        borrower_id: user(borrower),
        created_by: user(lender),
        principal: Money::from_major(principal),
        currency: Currency::Usd,
        description: "Test loan".to_string(),
        status,
        created_at: now,
        updated_at: now,
        due_date: None,
        external_party: None,
        payments: Vec::new(),
        collaborators: Vec::new(),
        comments: Vec::new(),
        version: 0,
    }
}

pub fn payment(major: i64, by: &str) -> LoanPayment {
    LoanPayment {
        id: PaymentId::new(),
        amount: Money::from_major(major),
        date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        note: None,
        recorded_by: user(by),
    }
}
