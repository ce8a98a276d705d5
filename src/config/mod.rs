//! Configuration module for the sealed ledger
//!
//! This module provides configuration management including:
//! - Platform path resolution for the settings file and audit log
//! - Settings persistence
//! - Loading the encryption key from the configured environment variable

pub mod paths;
pub mod settings;

pub use paths::LedgerPaths;
pub use settings::Settings;
