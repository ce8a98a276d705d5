//! Entry service
//!
//! Creation, partial update and archival of expense and income entries.
//! Every operation takes the current value and returns a new one.

use chrono::Utc;
use serde::Deserialize;

use super::validate;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Entry, EntryId, EntryKind, EntryStatus, Money, UserId};

/// Caller-supplied fields for a new entry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewEntry {
    pub amount: Money,
    pub currency: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
}

/// Partial update of an entry; absent fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EntryUpdate {
    #[serde(default)]
    pub amount: Option<Money>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl EntryUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Create a validated entry owned by `owner`
pub fn create_entry(kind: EntryKind, new: NewEntry, owner: &UserId) -> LedgerResult<Entry> {
    validate::user("userId", owner)?;
    let amount = validate::positive_amount("amount", new.amount)?;
    let currency = validate::currency("currency", &new.currency)?;
    let category = validate::category(kind, &new.category)?;

    let now = Utc::now();
    Ok(Entry {
        id: EntryId::new(),
        kind,
        user_id: owner.clone(),
        amount,
        currency,
        category,
        description: new.description,
        status: EntryStatus::Active,
        created_at: now,
        updated_at: now,
    })
}

/// Apply a partial update to an entry
///
/// An empty update returns the entry unchanged, timestamp included.
pub fn update_entry(entry: &Entry, update: EntryUpdate) -> LedgerResult<Entry> {
    if update.is_empty() {
        return Ok(entry.clone());
    }

    let mut updated = entry.clone();

    if let Some(amount) = update.amount {
        updated.amount = validate::positive_amount("amount", amount)?;
    }
    if let Some(code) = update.currency {
        updated.currency = validate::currency("currency", &code)?;
    }
    if let Some(name) = update.category {
        updated.category = validate::category(entry.kind, &name)?;
    }
    if let Some(description) = update.description {
        updated.description = description;
    }

    updated.updated_at = Utc::now();
    Ok(updated)
}

/// Archive an entry so it no longer counts toward summaries
pub fn archive_entry(entry: &Entry) -> LedgerResult<Entry> {
    if entry.status == EntryStatus::Archived {
        return Err(LedgerError::invalid_state("entry is already archived"));
    }

    let mut archived = entry.clone();
    archived.status = EntryStatus::Archived;
    archived.updated_at = Utc::now();
    Ok(archived)
}
