//! Custom error types for the sealed ledger
//!
//! This module defines the error hierarchy for the ledger core using thiserror
//! for ergonomic error definitions. Messages never carry key material,
//! envelope bytes or decrypted values.

use thiserror::Error;

/// The main error type for ledger operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Tampered, malformed or wrong-key ciphertext
    #[error("Authentication failure: envelope could not be verified")]
    AuthenticationFailure,

    /// Authenticated plaintext that is not a valid value for the field
    #[error("Corrupt field: {field}")]
    CorruptField { field: &'static str },

    /// Caller-supplied value violates a domain invariant
    #[error("Validation error on '{field}': {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// Operation is illegal for the current record status
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Mutation attempted against a stale record version
    #[error("Concurrent modification: expected version {expected}, found {actual}")]
    ConcurrentModification { expected: u64, actual: u64 },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Cipher construction errors
    #[error("Encryption error: {0}")]
    Encryption(String),
}

impl LedgerError {
    /// Create a validation error for a named field
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// Create a corrupt-field error
    pub fn corrupt(field: &'static str) -> Self {
        Self::CorruptField { field }
    }

    /// Create an invalid-state error
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState(message.into())
    }

    /// Stable machine-readable code for mapping errors to responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::AuthenticationFailure => "authentication_failure",
            Self::CorruptField { .. } => "corrupt_field",
            Self::Validation { .. } => "validation_error",
            Self::InvalidState(_) => "invalid_state",
            Self::ConcurrentModification { .. } => "concurrent_modification",
            Self::Config(_) => "config_error",
            Self::Io(_) => "io_error",
            Self::Json(_) => "json_error",
            Self::Encryption(_) => "encryption_error",
        }
    }

    /// Check if this is an authentication failure
    pub fn is_authentication_failure(&self) -> bool {
        matches!(self, Self::AuthenticationFailure)
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Check if this is an invalid-state error
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, Self::InvalidState(_))
    }

    /// Check if this is a concurrent modification error
    pub fn is_concurrent_modification(&self) -> bool {
        matches!(self, Self::ConcurrentModification { .. })
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
