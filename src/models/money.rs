//! Money type for representing currency amounts
//!
//! Internally stores amounts in minor units (i64, e.g. cents) so that totals
//! and encrypted round trips never drift. The canonical text form used inside
//! encrypted fields is `[-]<major>.<2-digit minor>`.
//!
//! A single amount is bounded by [`Money::MAX`]. Arithmetic saturates at the
//! i64 range, so totals over many bounded amounts never panic or wrap.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Number of minor units in one major unit
const MINOR_PER_MAJOR: i64 = 100;

/// A monetary amount stored as minor units (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Largest magnitude accepted for a single amount: 10 trillion major units
    pub const MAX: Money = Money(1_000_000_000_000_000);

    /// Create a Money amount from minor units
    ///
    /// # Examples
    /// ```
    /// use sealed_ledger::models::Money;
    /// let amount = Money::from_minor(1050); // 10.50
    /// assert_eq!(amount.to_canonical_string(), "10.50");
    /// ```
    pub const fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    /// Create a Money amount from whole major units
    pub const fn from_major(major: i64) -> Self {
        Self(major * MINOR_PER_MAJOR)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in minor units
    pub const fn minor_units(&self) -> i64 {
        self.0
    }

    /// Get the whole major units (truncated toward zero)
    pub const fn major(&self) -> i64 {
        self.0 / MINOR_PER_MAJOR
    }

    /// Get the minor portion (0-99)
    pub const fn minor_part(&self) -> i64 {
        (self.0 % MINOR_PER_MAJOR).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Clamp negative amounts to zero
    pub fn floor_zero(self) -> Self {
        Self(self.0.max(0))
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Check whether the magnitude is within [`Money::MAX`]
    pub fn is_within_limit(&self) -> bool {
        self.0.unsigned_abs() <= Self::MAX.0.unsigned_abs()
    }

    /// Canonical text form, exact for every representable amount
    pub fn to_canonical_string(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!(
            "{}{}.{:02}",
            sign,
            (self.0 / MINOR_PER_MAJOR).unsigned_abs(),
            self.minor_part()
        )
    }

    /// Parse an amount from text
    ///
    /// Accepts `[-]digits[.d{0,2}]`, e.g. "1000", "10.5", "-0.05". Anything
    /// with more than two fraction digits is rejected rather than rounded.
    /// Magnitudes above [`Money::MAX`] are `Overflow`.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let invalid = || MoneyParseError::InvalidFormat(s.to_string());
        let trimmed = s.trim();

        let (negative, body) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let (major_str, minor_str) = match body.split_once('.') {
            Some((major, minor)) => (major, minor),
            None => (body, ""),
        };

        if major_str.is_empty()
            || !major_str.bytes().all(|b| b.is_ascii_digit())
            || !minor_str.bytes().all(|b| b.is_ascii_digit())
            || minor_str.len() > 2
        {
            return Err(invalid());
        }

        let major: i64 = major_str.parse().map_err(|_| invalid())?;
        let minor: i64 = match minor_str.len() {
            0 => 0,
            1 => minor_str.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => minor_str.parse().map_err(|_| invalid())?,
        };

        let total = major
            .checked_mul(MINOR_PER_MAJOR)
            .and_then(|m| m.checked_add(minor))
            .filter(|total| *total <= Self::MAX.0)
            .ok_or(MoneyParseError::Overflow)?;

        Ok(Self(if negative { -total } else { total }))
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_canonical_string())
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    Overflow,
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::Overflow => write!(f, "Money amount out of range"),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_minor() {
        let m = Money::from_minor(1050);
        assert_eq!(m.minor_units(), 1050);
        assert_eq!(m.major(), 10);
        assert_eq!(m.minor_part(), 50);
    }

    #[test]
    fn test_canonical_string() {
        assert_eq!(Money::from_minor(1050).to_canonical_string(), "10.50");
        assert_eq!(Money::from_minor(0).to_canonical_string(), "0.00");
        assert_eq!(Money::from_minor(5).to_canonical_string(), "0.05");
        assert_eq!(Money::from_minor(-5).to_canonical_string(), "-0.05");
        assert_eq!(Money::from_major(1000).to_canonical_string(), "1000.00");
        assert_eq!(
            Money::from_minor(i64::MIN).to_canonical_string(),
            "-92233720368547758.08"
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().minor_units(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().minor_units(), -1050);
        assert_eq!(Money::parse("10").unwrap().minor_units(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().minor_units(), 1050);
        assert_eq!(Money::parse("10.").unwrap().minor_units(), 1000);
        assert_eq!(Money::parse("0.05").unwrap().minor_units(), 5);
    }

    #[test]
    fn test_parse_rejects_lossy_or_garbage() {
        assert!(Money::parse("10.505").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("").is_err());
        assert!(Money::parse(".50").is_err());
        assert!(Money::parse("$10").is_err());
        assert!(Money::parse("1e3").is_err());
        assert!(Money::parse("+10").is_err());
        assert_eq!(
            Money::parse("99999999999999999999"),
            Err(MoneyParseError::Overflow)
        );
    }

    #[test]
    fn test_canonical_round_trip() {
        let max = Money::MAX.minor_units();
        for minor in [0, 1, 99, 100, 1050, -1050, 123_456_789, max, -max] {
            let m = Money::from_minor(minor);
            assert_eq!(Money::parse(&m.to_canonical_string()).unwrap(), m);
        }
    }

    #[test]
    fn test_parse_rejects_amounts_above_limit() {
        for minor in [Money::MAX.minor_units() + 1, i64::MAX, i64::MIN + 1, i64::MIN] {
            let text = Money::from_minor(minor).to_canonical_string();
            assert_eq!(Money::parse(&text), Err(MoneyParseError::Overflow));
        }
        assert!(Money::MAX.is_within_limit());
        assert!(!Money::from_minor(i64::MIN).is_within_limit());
    }

    #[test]
    fn test_arithmetic_saturates() {
        let top = Money::from_minor(i64::MAX);
        let bottom = Money::from_minor(i64::MIN);

        assert_eq!(top + Money::from_minor(1), top);
        assert_eq!(bottom - Money::from_minor(1), bottom);
        assert_eq!(-bottom, top);

        let mut total = top;
        total += top;
        assert_eq!(total, top);

        let sum: Money = [top, top, top].iter().sum();
        assert_eq!(sum, top);
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_minor(1000);
        let b = Money::from_minor(500);

        assert_eq!((a + b).minor_units(), 1500);
        assert_eq!((a - b).minor_units(), 500);
        assert_eq!((-a).minor_units(), -1000);
        assert_eq!((b - a).floor_zero(), Money::zero());
        assert!(Money::from_minor(i64::MAX).checked_add(a).is_none());
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_minor(100),
            Money::from_minor(200),
            Money::from_minor(300),
        ];
        let total: Money = amounts.iter().sum();
        assert_eq!(total.minor_units(), 600);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_minor(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
