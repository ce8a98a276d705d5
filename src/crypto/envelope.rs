//! Base64 text form of a cipher envelope
//!
//! This is the representation stored in at-rest records. The decoded bytes
//! are `nonce || tag || ciphertext` as produced by the cipher engine.

use std::fmt;

use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};

use super::{cipher, KeyMaterial};

/// An encrypted ledger field, base64 encoded
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Envelope(String);

impl Envelope {
    /// Encrypt raw bytes into a new envelope
    pub fn seal(plaintext: &[u8], key: &KeyMaterial) -> LedgerResult<Self> {
        let bytes = cipher::encrypt(plaintext, key)?;
        Ok(Self::from_bytes(&bytes))
    }

    /// Decrypt the envelope back into raw bytes
    pub fn open(&self, key: &KeyMaterial) -> LedgerResult<Vec<u8>> {
        cipher::decrypt(&self.to_bytes()?, key)
    }

    /// Wrap already-encrypted envelope bytes
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(STANDARD.encode(bytes))
    }

    /// Wrap base64 text read from storage
    pub fn from_base64(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Decode the base64 text
    ///
    /// Text that is not valid base64 cannot be an envelope, so it is reported
    /// as an authentication failure rather than treated as plaintext.
    pub fn to_bytes(&self) -> LedgerResult<Vec<u8>> {
        STANDARD
            .decode(&self.0)
            .map_err(|_| LedgerError::AuthenticationFailure)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Envelopes are opaque; keep their contents out of logs
impl fmt::Debug for Envelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Envelope({} chars)", self.0.len())
    }
}
