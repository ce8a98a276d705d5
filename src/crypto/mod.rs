//! Cryptographic functions for the sealed ledger
//!
//! Provides AES-256-GCM field encryption under a single injected key. No
//! function in this module reads configuration or the process environment.

pub mod cipher;
pub mod envelope;
pub mod field;
pub mod key;

pub use cipher::{decrypt, encrypt};
pub use envelope::Envelope;
pub use field::FieldCodec;
pub use key::KeyMaterial;
