//! Sealing of ledger records
//!
//! `encrypt_record` turns a plaintext record into its at-rest form and
//! `decrypt_record` reverses it. Every ledger field passes through the field
//! codec; nothing else is encrypted. Decryption fails on the first envelope
//! that does not authenticate and never falls back to plaintext.

pub mod record;

use crate::crypto::{Envelope, FieldCodec, KeyMaterial};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{
    Entry, EntryKind, ExternalParty, LedgerRecord, Loan, LoanComment, LoanPayment, Money,
};

pub use record::{
    SealedComment, SealedEntry, SealedExternalParty, SealedLoan, SealedPayment, SealedRecord,
};

/// Encrypt every ledger field of a record
pub fn encrypt_record(record: &LedgerRecord, key: &KeyMaterial) -> LedgerResult<SealedRecord> {
    let codec = FieldCodec::new(key);
    let sealed = match record {
        LedgerRecord::Entry(entry) => {
            let sealed = seal_entry(entry, &codec)?;
            match entry.kind {
                EntryKind::Expense => SealedRecord::Expense(sealed),
                EntryKind::Income => SealedRecord::Income(sealed),
            }
        }
        LedgerRecord::Loan(loan) => SealedRecord::Loan(seal_loan(loan, &codec)?),
    };

    tracing::debug!(kind = %sealed.kind(), id = %sealed.id_string(), "Sealed record");
    Ok(sealed)
}

/// Decrypt every ledger field of a sealed record
///
/// Fails with `AuthenticationFailure` on any tampered or wrong-key envelope
/// and with `CorruptField` when an authenticated value is not valid for its
/// field. The loan balance is re-derived from the payments.
pub fn decrypt_record(sealed: &SealedRecord, key: &KeyMaterial) -> LedgerResult<LedgerRecord> {
    let codec = FieldCodec::new(key);
    let record = match sealed {
        SealedRecord::Expense(entry) => open_entry(EntryKind::Expense, entry, &codec)?.into(),
        SealedRecord::Income(entry) => open_entry(EntryKind::Income, entry, &codec)?.into(),
        SealedRecord::Loan(loan) => open_loan(loan, &codec)?.into(),
    };

    tracing::debug!(kind = %sealed.kind(), id = %sealed.id_string(), "Unsealed record");
    Ok(record)
}

/// Decode an amount that must be strictly positive
fn positive_amount(
    codec: &FieldCodec<'_>,
    envelope: &Envelope,
    field: &'static str,
) -> LedgerResult<Money> {
    let amount = codec.decode_amount(envelope, field)?;
    if !amount.is_positive() {
        return Err(LedgerError::corrupt(field));
    }
    Ok(amount)
}

fn seal_entry(entry: &Entry, codec: &FieldCodec<'_>) -> LedgerResult<SealedEntry> {
    Ok(SealedEntry {
        id: entry.id,
        user_id: entry.user_id.clone(),
        encrypted_amount: codec.encode_amount(entry.amount)?,
        currency: entry.currency,
        category: entry.category,
        encrypted_description: codec.encode_text(&entry.description)?,
        status: entry.status,
        created_at: entry.created_at,
        updated_at: entry.updated_at,
    })
}

fn open_entry(
    kind: EntryKind,
    sealed: &SealedEntry,
    codec: &FieldCodec<'_>,
) -> LedgerResult<Entry> {
    if !sealed.category.is_valid_for(kind) {
        return Err(LedgerError::corrupt("category"));
    }

    Ok(Entry {
        id: sealed.id,
        kind,
        user_id: sealed.user_id.clone(),
        amount: positive_amount(codec, &sealed.encrypted_amount, "encryptedAmount")?,
        currency: sealed.currency,
        category: sealed.category,
        description: codec.decode_text(&sealed.encrypted_description, "encryptedDescription")?,
        status: sealed.status,
        created_at: sealed.created_at,
        updated_at: sealed.updated_at,
    })
}

fn seal_loan(loan: &Loan, codec: &FieldCodec<'_>) -> LedgerResult<SealedLoan> {
    let external_party = loan
        .external_party
        .as_ref()
        .map(|party| -> LedgerResult<SealedExternalParty> {
            Ok(SealedExternalParty {
                encrypted_name: codec.encode_text(&party.name)?,
                encrypted_email: codec.encode_optional_text(party.email.as_deref())?,
                role: party.role,
            })
        })
        .transpose()?;

    let payments = loan
        .payments
        .iter()
        .map(|payment| -> LedgerResult<SealedPayment> {
            Ok(SealedPayment {
                id: payment.id,
                encrypted_amount: codec.encode_amount(payment.amount)?,
                date: payment.date,
                encrypted_note: codec.encode_optional_text(payment.note.as_deref())?,
                recorded_by: payment.recorded_by.clone(),
            })
        })
        .collect::<LedgerResult<Vec<_>>>()?;

    let comments = loan
        .comments
        .iter()
        .map(|comment| -> LedgerResult<SealedComment> {
            Ok(SealedComment {
                id: comment.id,
                author_id: comment.author_id.clone(),
                encrypted_text: codec.encode_text(&comment.text)?,
                created_at: comment.created_at,
            })
        })
        .collect::<LedgerResult<Vec<_>>>()?;

    Ok(SealedLoan {
        id: loan.id,
        lender_id: loan.lender_id.clone(),
        borrower_id: loan.borrower_id.clone(),
        created_by: loan.created_by.clone(),
        encrypted_amount: codec.encode_amount(loan.principal)?,
        currency: loan.currency,
        encrypted_description: codec.encode_text(&loan.description)?,
        status: loan.status,
        created_at: loan.created_at,
        updated_at: loan.updated_at,
        due_date: loan.due_date,
        external_party,
        payments,
        encrypted_remaining_amount: Some(codec.encode_amount(loan.remaining_amount())?),
        collaborators: loan.collaborators.clone(),
        comments,
        version: loan.version,
    })
}

fn open_loan(sealed: &SealedLoan, codec: &FieldCodec<'_>) -> LedgerResult<Loan> {
    if sealed.external_party.is_none() && sealed.lender_id == sealed.borrower_id {
        return Err(LedgerError::corrupt("borrowerId"));
    }

    let external_party = sealed
        .external_party
        .as_ref()
        .map(|party| -> LedgerResult<ExternalParty> {
            Ok(ExternalParty {
                name: codec.decode_text(&party.encrypted_name, "externalParty.encryptedName")?,
                email: codec.decode_optional_text(
                    party.encrypted_email.as_ref(),
                    "externalParty.encryptedEmail",
                )?,
                role: party.role,
            })
        })
        .transpose()?;

    let payments = sealed
        .payments
        .iter()
        .map(|payment| -> LedgerResult<LoanPayment> {
            Ok(LoanPayment {
                id: payment.id,
                amount: positive_amount(
                    codec,
                    &payment.encrypted_amount,
                    "payments.encryptedAmount",
                )?,
                date: payment.date,
                note: codec.decode_optional_text(
                    payment.encrypted_note.as_ref(),
                    "payments.encryptedNote",
                )?,
                recorded_by: payment.recorded_by.clone(),
            })
        })
        .collect::<LedgerResult<Vec<_>>>()?;

    let comments = sealed
        .comments
        .iter()
        .map(|comment| -> LedgerResult<LoanComment> {
            Ok(LoanComment {
                id: comment.id,
                author_id: comment.author_id.clone(),
                text: codec.decode_text(&comment.encrypted_text, "comments.encryptedText")?,
                created_at: comment.created_at,
            })
        })
        .collect::<LedgerResult<Vec<_>>>()?;

    let loan = Loan {
        id: sealed.id,
        lender_id: sealed.lender_id.clone(),
        borrower_id: sealed.borrower_id.clone(),
        created_by: sealed.created_by.clone(),
        principal: positive_amount(codec, &sealed.encrypted_amount, "encryptedAmount")?,
        currency: sealed.currency,
        description: codec.decode_text(&sealed.encrypted_description, "encryptedDescription")?,
        status: sealed.status,
        created_at: sealed.created_at,
        updated_at: sealed.updated_at,
        due_date: sealed.due_date,
        external_party,
        payments,
        collaborators: sealed.collaborators.clone(),
        comments,
        version: sealed.version,
    };

    // A fully repaid loan is always settled
    if !loan.is_settled() && loan.remaining_amount().is_zero() {
        return Err(LedgerError::corrupt("status"));
    }

    Ok(loan)
}
