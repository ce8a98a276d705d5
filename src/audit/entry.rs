//! Audit entry data structures
//!
//! An audit entry records one mutation: what kind of entity changed, its id,
//! who changed it and the before/after snapshots. Snapshots of ledger
//! records are always taken from the sealed form, so the audit log never
//! holds a decrypted ledger field.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{RecordKind, UserId, UserPreferences};
use crate::sealing::{SealedPayment, SealedRecord};

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// Types of entities that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Expense,
    Income,
    Loan,
    LoanPayment,
    Preferences,
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityType::Expense => write!(f, "Expense"),
            EntityType::Income => write!(f, "Income"),
            EntityType::Loan => write!(f, "Loan"),
            EntityType::LoanPayment => write!(f, "LoanPayment"),
            EntityType::Preferences => write!(f, "Preferences"),
        }
    }
}

impl From<RecordKind> for EntityType {
    fn from(kind: RecordKind) -> Self {
        match kind {
            RecordKind::Expense => EntityType::Expense,
            RecordKind::Income => EntityType::Income,
            RecordKind::Loan => EntityType::Loan,
        }
    }
}

/// Values that may be snapshotted into the audit log
///
/// Implemented only for sealed ledger shapes and for data that carries no
/// ledger field.
pub trait Auditable: Serialize {
    fn entity_type(&self) -> EntityType;
    fn entity_id(&self) -> String;
}

impl Auditable for SealedRecord {
    fn entity_type(&self) -> EntityType {
        self.kind().into()
    }

    fn entity_id(&self) -> String {
        self.id_string()
    }
}

impl Auditable for SealedPayment {
    fn entity_type(&self) -> EntityType {
        EntityType::LoanPayment
    }

    fn entity_id(&self) -> String {
        self.id.as_uuid().to_string()
    }
}

impl Auditable for UserPreferences {
    fn entity_type(&self) -> EntityType {
        EntityType::Preferences
    }

    fn entity_id(&self) -> String {
        self.user_id.to_string()
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,
    pub entity_type: EntityType,
    pub entity_id: String,

    /// User who performed the operation
    pub actor: UserId,

    /// Snapshot before the operation (updates and deletes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    /// Snapshot after the operation (creates and updates)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,
}

impl AuditEntry {
    fn new<T: Auditable>(operation: Operation, entity: &T, actor: &UserId) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            entity_type: entity.entity_type(),
            entity_id: entity.entity_id(),
            actor: actor.clone(),
            before: None,
            after: None,
        }
    }

    /// Create a new audit entry for a create operation
    pub fn create<T: Auditable>(entity: &T, actor: &UserId) -> Self {
        Self {
            after: serde_json::to_value(entity).ok(),
            ..Self::new(Operation::Create, entity, actor)
        }
    }

    /// Create a new audit entry for an update operation
    pub fn update<T: Auditable>(before: &T, after: &T, actor: &UserId) -> Self {
        Self {
            before: serde_json::to_value(before).ok(),
            after: serde_json::to_value(after).ok(),
            ..Self::new(Operation::Update, after, actor)
        }
    }

    /// Create a new audit entry for a delete operation
    pub fn delete<T: Auditable>(entity: &T, actor: &UserId) -> Self {
        Self {
            before: serde_json::to_value(entity).ok(),
            ..Self::new(Operation::Delete, entity, actor)
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        format!(
            "[{}] {} {} {} by {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            self.entity_id,
            self.actor
        )
    }
}
