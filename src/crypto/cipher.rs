//! AES-256-GCM cipher engine
//!
//! Provides authenticated encryption of opaque byte strings. Each encryption
//! draws a fresh 96-bit nonce from the operating system CSPRNG. The output
//! layout is `nonce(12) || tag(16) || ciphertext`; no associated data is used.

use aes_gcm::aead::rand_core::RngCore;
use aes_gcm::{
    aead::{AeadInPlace, KeyInit, OsRng},
    Aes256Gcm, Nonce, Tag,
};

use crate::error::{LedgerError, LedgerResult};

use super::KeyMaterial;

/// Size of the AES-GCM nonce in bytes (96 bits)
pub const NONCE_SIZE: usize = 12;

/// Size of the AES-GCM authentication tag in bytes (128 bits)
pub const TAG_SIZE: usize = 16;

/// Smallest possible envelope: nonce and tag around an empty ciphertext
pub const MIN_ENVELOPE_SIZE: usize = NONCE_SIZE + TAG_SIZE;

fn cipher_for(key: &KeyMaterial) -> LedgerResult<Aes256Gcm> {
    Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| LedgerError::Encryption(format!("Failed to create cipher: {}", e)))
}

/// Encrypt plaintext bytes into an envelope
pub fn encrypt(plaintext: &[u8], key: &KeyMaterial) -> LedgerResult<Vec<u8>> {
    let cipher = cipher_for(key)?;

    let mut nonce_bytes = [0u8; NONCE_SIZE];
    OsRng.fill_bytes(&mut nonce_bytes);
    let nonce = Nonce::from_slice(&nonce_bytes);

    let mut buffer = plaintext.to_vec();
    let tag = cipher
        .encrypt_in_place_detached(nonce, b"", &mut buffer)
        .map_err(|_| LedgerError::Encryption("Encryption failed".to_string()))?;

    let mut envelope = Vec::with_capacity(MIN_ENVELOPE_SIZE + buffer.len());
    envelope.extend_from_slice(&nonce_bytes);
    envelope.extend_from_slice(tag.as_slice());
    envelope.extend_from_slice(&buffer);
    Ok(envelope)
}

/// Decrypt an envelope back into plaintext bytes
///
/// Fails closed with `AuthenticationFailure` when the envelope is too short
/// to hold a nonce and tag, or when the tag does not verify under `key`.
pub fn decrypt(envelope: &[u8], key: &KeyMaterial) -> LedgerResult<Vec<u8>> {
    if envelope.len() < MIN_ENVELOPE_SIZE {
        return Err(LedgerError::AuthenticationFailure);
    }

    let cipher = cipher_for(key)?;

    let (nonce_bytes, rest) = envelope.split_at(NONCE_SIZE);
    let (tag_bytes, ciphertext) = rest.split_at(TAG_SIZE);

    let mut buffer = ciphertext.to_vec();
    cipher
        .decrypt_in_place_detached(
            Nonce::from_slice(nonce_bytes),
            b"",
            &mut buffer,
            Tag::from_slice(tag_bytes),
        )
        .map_err(|_| LedgerError::AuthenticationFailure)?;

    Ok(buffer)
}
