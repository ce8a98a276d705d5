//! Sealed Ledger - encrypted field layer for a shared personal-finance ledger
//!
//! This library is the core of a multi-user expense, income and loan
//! tracker. Monetary amounts and free-text fields ("ledger fields") are held
//! in plaintext in memory and sealed with AES-256-GCM at rest. On top of the
//! cipher sit the record model and its lifecycle operations, loan balance
//! and dashboard aggregation, and the domain events emitted to the
//! notification collaborator.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `crypto`: Key material, cipher engine, envelopes and the field codec
//! - `models`: Plaintext record types (entries, loans, payments, preferences)
//! - `sealing`: At-rest record shapes and `encrypt_record`/`decrypt_record`
//! - `services`: Record creation, updates and the loan lifecycle
//! - `reports`: Loan balances, dashboard summary and spending breakdown
//! - `events`: Transitions, domain events and notification dispatch
//! - `audit`: Append-only audit log of sealed snapshots
//! - `config`: Path resolution, settings and key loading
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust,ignore
//! use sealed_ledger::config::{LedgerPaths, Settings};
//! use sealed_ledger::sealing::decrypt_record;
//!
//! let paths = LedgerPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let key = settings.load_key()?;
//! let record = decrypt_record(&sealed, &key)?;
//! ```

pub mod audit;
pub mod config;
pub mod crypto;
pub mod error;
pub mod events;
pub mod models;
pub mod reports;
pub mod sealing;
pub mod services;

#[cfg(test)]
mod test_support;

pub use error::{LedgerError, LedgerResult};
