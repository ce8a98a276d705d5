//! Key material for field encryption
//!
//! A single 32-byte AES-256 key, supplied by the environment and immutable
//! for the lifetime of the process. The bytes are zeroed when dropped.

use std::fmt;

use base64::{engine::general_purpose::STANDARD, Engine};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Length of the symmetric key in bytes (AES-256)
pub const KEY_SIZE: usize = 32;

/// The symmetric key used by the cipher engine
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct KeyMaterial {
    key: [u8; KEY_SIZE],
}

impl KeyMaterial {
    /// Create key material from exact key bytes
    pub fn from_bytes(key: [u8; KEY_SIZE]) -> Self {
        Self { key }
    }

    /// Derive key material from a configured secret string
    ///
    /// A secret that is valid base64 and decodes to exactly 32 bytes is used
    /// verbatim. Any other secret is taken as raw bytes, right-padded with
    /// zeros when shorter than 32 bytes and truncated when longer.
    pub fn from_secret(secret: &str) -> Self {
        let mut key = [0u8; KEY_SIZE];

        if let Ok(decoded) = STANDARD.decode(secret) {
            let decoded = Zeroizing::new(decoded);
            if decoded.len() == KEY_SIZE {
                key.copy_from_slice(&decoded);
                return Self { key };
            }
        }

        let raw = secret.as_bytes();
        let len = raw.len().min(KEY_SIZE);
        key[..len].copy_from_slice(&raw[..len]);
        Self { key }
    }

    /// Get the key bytes
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.key
    }
}

// Never print the key in Debug output
impl fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyMaterial")
            .field("len", &KEY_SIZE)
            .finish_non_exhaustive()
    }
}
