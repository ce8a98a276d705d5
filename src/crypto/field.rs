//! Field codec
//!
//! Maps typed plaintext ledger values to and from envelopes. Amounts are
//! encrypted in their canonical text form so that decoding is exact.

use crate::error::{LedgerError, LedgerResult};
use crate::models::Money;

use super::{Envelope, KeyMaterial};

/// Encrypts and decrypts ledger fields under a borrowed key
///
/// The codec holds nothing but the key reference, so it is cheap to build
/// per call and safe to share across threads.
#[derive(Debug, Clone, Copy)]
pub struct FieldCodec<'k> {
    key: &'k KeyMaterial,
}

impl<'k> FieldCodec<'k> {
    pub fn new(key: &'k KeyMaterial) -> Self {
        Self { key }
    }

    /// Encrypt a monetary amount
    pub fn encode_amount(&self, value: Money) -> LedgerResult<Envelope> {
        Envelope::seal(value.to_canonical_string().as_bytes(), self.key)
    }

    /// Decrypt a monetary amount
    ///
    /// `field` names the record attribute in errors.
    pub fn decode_amount(&self, envelope: &Envelope, field: &'static str) -> LedgerResult<Money> {
        let plaintext = self.open(envelope, field)?;
        let text = std::str::from_utf8(&plaintext).map_err(|_| LedgerError::corrupt(field))?;
        Money::parse(text).map_err(|_| LedgerError::corrupt(field))
    }

    /// Encrypt free text
    pub fn encode_text(&self, value: &str) -> LedgerResult<Envelope> {
        Envelope::seal(value.as_bytes(), self.key)
    }

    /// Decrypt free text
    pub fn decode_text(&self, envelope: &Envelope, field: &'static str) -> LedgerResult<String> {
        let plaintext = self.open(envelope, field)?;
        String::from_utf8(plaintext).map_err(|_| LedgerError::corrupt(field))
    }

    pub fn encode_optional_text(&self, value: Option<&str>) -> LedgerResult<Option<Envelope>> {
        value.map(|v| self.encode_text(v)).transpose()
    }

    pub fn decode_optional_text(
        &self,
        envelope: Option<&Envelope>,
        field: &'static str,
    ) -> LedgerResult<Option<String>> {
        envelope.map(|e| self.decode_text(e, field)).transpose()
    }

    fn open(&self, envelope: &Envelope, field: &'static str) -> LedgerResult<Vec<u8>> {
        envelope.open(self.key).inspect_err(|err| {
            if err.is_authentication_failure() {
                tracing::warn!(field, "Ledger field failed authentication");
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_key() -> KeyMaterial {
        KeyMaterial::from_bytes([0u8; 32])
    }

    #[test]
    fn test_amount_round_trip() {
        let key = test_key();
        let codec = FieldCodec::new(&key);

        for minor in [1, 5, 1050, 100_000, 123_456_789_012, -250] {
            let value = Money::from_minor(minor);
            let envelope = codec.encode_amount(value).unwrap();
            assert_eq!(codec.decode_amount(&envelope, "amount").unwrap(), value);
        }
    }

    #[test]
    fn test_text_round_trip() {
        let key = test_key();
        let codec = FieldCodec::new(&key);

        for text in ["", "Salary", "Café ☕ rent — March", "line\nbreak"] {
            let envelope = codec.encode_text(text).unwrap();
            assert_eq!(codec.decode_text(&envelope, "description").unwrap(), text);
        }
    }

    #[test]
    fn test_salary_encrypts_differently_each_time() {
        let key = test_key();
        let codec = FieldCodec::new(&key);

        let first = codec.encode_text("Salary").unwrap();
        let second = codec.encode_text("Salary").unwrap();

        assert_ne!(first, second);
        assert_eq!(codec.decode_text(&first, "description").unwrap(), "Salary");
        assert_eq!(codec.decode_text(&second, "description").unwrap(), "Salary");
    }

    #[test]
    fn test_non_numeric_amount_is_corrupt() {
        let key = test_key();
        let codec = FieldCodec::new(&key);

        let envelope = codec.encode_text("twelve dollars").unwrap();
        assert_eq!(
            codec.decode_amount(&envelope, "amount"),
            Err(LedgerError::CorruptField { field: "amount" })
        );
    }

    #[test]
    fn test_non_utf8_text_is_corrupt() {
        let key = test_key();
        let codec = FieldCodec::new(&key);

        let envelope = Envelope::seal(&[0xff, 0xfe, 0x00], &key).unwrap();
        assert_eq!(
            codec.decode_text(&envelope, "note"),
            Err(LedgerError::CorruptField { field: "note" })
        );
    }

    #[test]
    fn test_tampered_amount_propagates_authentication_failure() {
        let key = test_key();
        let codec = FieldCodec::new(&key);

        let envelope = codec.encode_amount(Money::from_major(1000)).unwrap();
        let mut bytes = envelope.to_bytes().unwrap();
        let last = bytes.len() - 1;
        bytes[last] ^= 0x80;

        let tampered = Envelope::from_bytes(&bytes);
        assert_eq!(
            codec.decode_amount(&tampered, "amount"),
            Err(LedgerError::AuthenticationFailure)
        );
    }

    #[test]
    fn test_wrong_key_fails() {
        let key = test_key();
        let other = KeyMaterial::from_secret("another key");

        let envelope = FieldCodec::new(&key).encode_text("Salary").unwrap();
        assert_eq!(
            FieldCodec::new(&other).decode_text(&envelope, "description"),
            Err(LedgerError::AuthenticationFailure)
        );
    }

    #[test]
    fn test_optional_text() {
        let key = test_key();
        let codec = FieldCodec::new(&key);

        assert_eq!(codec.encode_optional_text(None).unwrap(), None);
        let sealed = codec.encode_optional_text(Some("a@b.c")).unwrap();
        assert_eq!(
            codec.decode_optional_text(sealed.as_ref(), "email").unwrap(),
            Some("a@b.c".to_string())
        );
    }
}
