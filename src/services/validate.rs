//! Field-level validation shared by the record services

use serde::{Deserialize, Deserializer};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Category, Currency, EntryKind, Money, UserId};

/// Amounts on ledger records must be strictly positive and within `Money::MAX`
pub fn positive_amount(field: &'static str, amount: Money) -> LedgerResult<Money> {
    if !amount.is_positive() {
        return Err(LedgerError::validation(field, "must be greater than zero"));
    }
    if !amount.is_within_limit() {
        return Err(LedgerError::validation(
            field,
            format!("must not exceed {}", Money::MAX),
        ));
    }
    Ok(amount)
}

pub fn currency(field: &'static str, code: &str) -> LedgerResult<Currency> {
    code.parse()
        .map_err(|e: crate::models::currency::UnsupportedCurrency| {
            LedgerError::validation(field, e.to_string())
        })
}

/// Parse a category and check it belongs to the entry kind
pub fn category(kind: EntryKind, name: &str) -> LedgerResult<Category> {
    let category: Category = name
        .parse()
        .map_err(|e: crate::models::category::UnknownCategory| {
            LedgerError::validation("category", e.to_string())
        })?;

    if !category.is_valid_for(kind) {
        return Err(LedgerError::validation(
            "category",
            format!("'{}' is not a valid {} category", category, kind),
        ));
    }

    Ok(category)
}

pub fn user(field: &'static str, user_id: &UserId) -> LedgerResult<()> {
    if user_id.is_blank() {
        return Err(LedgerError::validation(field, "must not be empty"));
    }
    Ok(())
}

pub fn non_blank(field: &'static str, text: &str) -> LedgerResult<()> {
    if text.trim().is_empty() {
        return Err(LedgerError::validation(field, "must not be empty"));
    }
    Ok(())
}

/// Distinguish an absent field from an explicit `null` in partial updates
///
/// Absent deserializes to `None` (via `#[serde(default)]`), `null` to
/// `Some(None)` and a value to `Some(Some(v))`.
pub fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_amount() {
        assert!(positive_amount("amount", Money::from_minor(1)).is_ok());
        assert_eq!(
            positive_amount("amount", Money::zero()),
            Err(LedgerError::validation("amount", "must be greater than zero"))
        );
        assert!(positive_amount("amount", Money::from_minor(-5)).is_err());
    }

    #[test]
    fn test_positive_amount_upper_bound() {
        assert_eq!(positive_amount("amount", Money::MAX), Ok(Money::MAX));

        let over = Money::MAX + Money::from_minor(1);
        let err = positive_amount("amount", over).unwrap_err();
        assert!(matches!(err, LedgerError::Validation { field: "amount", .. }));
        assert!(positive_amount("amount", Money::from_minor(i64::MAX)).is_err());
    }

    #[test]
    fn test_category_checks_kind() {
        assert_eq!(category(EntryKind::Expense, "food").unwrap(), Category::Food);
        let err = category(EntryKind::Income, "food").unwrap_err();
        assert!(matches!(err, LedgerError::Validation { field: "category", .. }));
        assert!(category(EntryKind::Income, "lottery").is_err());
    }

    #[test]
    fn test_currency_names_field() {
        let err = currency("currency", "ABC").unwrap_err();
        assert!(matches!(err, LedgerError::Validation { field: "currency", .. }));
    }
}
