//! Audit logging for the sealed ledger
//!
//! Records create, update and delete operations with before/after snapshots
//! in an append-only audit log.
//!
//! # Architecture
//!
//! - `AuditEntry`: a single audit log entry with timestamp, operation,
//!   entity information, actor and snapshots. Ledger records are always
//!   snapshotted in their sealed form (see `Auditable`).
//! - `AuditLogger`: writes entries to the audit log file as line-delimited
//!   JSON (JSONL).
//!
//! # Example
//!
//! ```rust,ignore
//! use sealed_ledger::audit::{AuditEntry, AuditLogger};
//! use sealed_ledger::sealing::encrypt_record;
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! let sealed = encrypt_record(&record, &key)?;
//! logger.log(&AuditEntry::create(&sealed, &actor))?;
//! ```

mod entry;
mod logger;

pub use entry::{Auditable, AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
