//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A cart total summed over floats drifts by fractions of a cent.         │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    3 × 980,00€ = 3 × 98000 cents = 294000 cents, exactly               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tisso_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(1099); // 10.99
//!
//! // Arithmetic operations
//! let doubled = price.multiply_quantity(2);   // 21.98
//! let total = price + Money::from_cents(500); // 15.99
//!
//! // Catalog price text is parsed, never converted from floats
//! let listed: Money = "980,00€".parse().unwrap();
//! assert_eq!(listed.cents(), 98000);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Subtraction stays closed over the type
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                                                                         │
/// │  CatalogEntry.base_price ──┬──► Variant.price ──► LineItem.price        │
/// │  VariantSpec.price ────────┘                           │                │
/// │                                                        ▼                │
/// │                                      Cart.total = Σ qty × price         │
/// │                                                                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use tisso_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole major units.
    #[inline]
    pub const fn from_major(major: i64) -> Self {
        Money(major.saturating_mul(100))
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity, saturating at the `i64` bounds.
    ///
    /// ## Example
    /// ```rust
    /// use tisso_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(98000);
    /// assert_eq!(unit_price.multiply_quantity(2).cents(), 196000);
    /// assert_eq!(Money::from_cents(i64::MAX).multiply_quantity(2).cents(), i64::MAX);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }

    /// Adds two amounts, saturating at the `i64` bounds.
    #[inline]
    pub const fn saturating_add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }

    /// Parses catalog price text into money.
    ///
    /// ## Accepted Shapes
    /// ```text
    /// "980,00€"    → 98000   (comma decimal, trailing symbol)
    /// "$10.99"     → 1099    (dot decimal, leading symbol)
    /// "1.299,50 €" → 129950  (dot grouping, comma decimal)
    /// "100"        → 10000   (whole units)
    /// "19.5"       → 1950
    /// ```
    ///
    /// The last `,` or `.` is the decimal separator when it is followed by
    /// one or two digits; every other separator is treated as grouping.
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        let invalid = |reason: &str| ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: format!("{reason}: {text:?}"),
        };

        let trimmed = text.trim();
        let first_digit = trimmed
            .find(|c: char| c.is_ascii_digit())
            .ok_or_else(|| invalid("no digits"))?;

        // A sign may sit anywhere before the digits ("-5,00€", "€-5,00").
        let (prefix, amount) = trimmed.split_at(first_digit);
        let negative = match prefix.matches('-').count() {
            0 => false,
            1 => true,
            _ => return Err(invalid("repeated minus sign")),
        };
        if amount.contains('-') {
            return Err(invalid("misplaced minus sign"));
        }

        let cleaned: String = amount
            .chars()
            .filter(|c| c.is_ascii_digit() || matches!(c, ',' | '.'))
            .collect();

        let (whole, fraction) = match cleaned.rfind([',', '.']) {
            Some(idx) if (1..=2).contains(&(cleaned.len() - idx - 1)) => {
                (&cleaned[..idx], &cleaned[idx + 1..])
            }
            _ => (cleaned.as_str(), ""),
        };

        let mut cents: i64 = 0;
        for digit in whole.chars().filter(char::is_ascii_digit) {
            cents = cents
                .checked_mul(10)
                .and_then(|c| c.checked_add(i64::from(digit as u8 - b'0')))
                .ok_or_else(|| invalid("amount too large"))?;
        }

        let minor = match fraction.len() {
            0 => 0,
            1 => i64::from(fraction.as_bytes()[0] - b'0') * 10,
            _ => fraction
                .parse::<i64>()
                .map_err(|_| invalid("bad fractional part"))?,
        };

        let total = cents
            .checked_mul(100)
            .and_then(|c| c.checked_add(minor))
            .ok_or_else(|| invalid("amount too large"))?;

        Ok(Money(if negative { -total } else { total }))
    }

    /// Converts a JSON number in major units into money.
    ///
    /// Unlike [`Money::parse`], there is no locale guessing: `.` is always
    /// the decimal point, and amounts that cannot be represented exactly in
    /// cents are rejected.
    ///
    /// ## Accepted Shapes
    /// ```text
    /// 55                  → 5500
    /// 19.9                → 1990
    /// 19.999              → InvalidFormat (sub-cent)
    /// 0.30000000000000004 → InvalidFormat (sub-cent)
    /// 1e20                → InvalidFormat (exponent)
    /// ```
    pub fn from_json_number(number: &serde_json::Number) -> Result<Self, ValidationError> {
        let text = number.to_string();
        let invalid = |reason: &str| ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: format!("{reason}: {text}"),
        };

        if text.contains(['e', 'E']) {
            return Err(invalid("exponent notation"));
        }

        let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));
        if fraction.len() > 2 {
            return Err(invalid("more than two decimal places"));
        }

        let (negative, whole) = match whole.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, whole),
        };

        let major: i64 = whole.parse().map_err(|_| invalid("amount too large"))?;
        let minor: i64 = match fraction.len() {
            0 => 0,
            len => {
                let digits: i64 = fraction
                    .parse()
                    .map_err(|_| invalid("bad fractional part"))?;
                if len == 1 {
                    digits * 10
                } else {
                    digits
                }
            }
        };

        let total = major
            .checked_mul(100)
            .and_then(|c| c.checked_add(minor))
            .ok_or_else(|| invalid("amount too large"))?;

        Ok(Money(if negative { -total } else { total }))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows the amount without a currency symbol.
///
/// ## Note
/// This is for debugging and logs. The storefront's `ConfigState` owns the
/// currency symbol and formats amounts for the UI.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major().abs(), self.minor_part())
    }
}

impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::parse(s)
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition saturates at the `i64` bounds, like every cart-side operation.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        self.saturating_add(other)
    }
}

/// Summing line totals. Saturates instead of overflowing.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.major(), 10);
        assert_eq!(money.minor_part(), 99);
    }

    #[test]
    fn test_from_major() {
        assert_eq!(Money::from_major(100).cents(), 10000);
        assert_eq!(Money::from_major(-5).cents(), -500);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1099).to_string(), "10.99");
        assert_eq!(Money::from_cents(500).to_string(), "5.00");
        assert_eq!(Money::from_cents(-550).to_string(), "-5.50");
        assert_eq!(Money::zero().to_string(), "0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!(a.multiply_quantity(3).cents(), 3000);
    }

    #[test]
    fn test_cart_math_saturates() {
        let huge = Money::from_cents(9_000_000_000_000_000_000);
        assert_eq!(huge.multiply_quantity(2).cents(), i64::MAX);
        assert_eq!(huge.saturating_add(huge).cents(), i64::MAX);

        let total: Money = [huge, huge, Money::from_cents(1)].into_iter().sum();
        assert_eq!(total.cents(), i64::MAX);
    }

    #[test]
    fn test_sum() {
        let total: Money = [100, 250, 5].into_iter().map(Money::from_cents).sum();
        assert_eq!(total.cents(), 355);

        let empty: Money = std::iter::empty::<Money>().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_parse_catalog_text() {
        assert_eq!(Money::parse("980,00€").unwrap().cents(), 98000);
        assert_eq!(Money::parse("$10.99").unwrap().cents(), 1099);
        assert_eq!(Money::parse("1.299,50 €").unwrap().cents(), 129950);
        assert_eq!(Money::parse("1,299").unwrap().cents(), 129900);
        assert_eq!(Money::parse("100").unwrap().cents(), 10000);
        assert_eq!(Money::parse("19.5").unwrap().cents(), 1950);
        assert_eq!(Money::parse("-5.50").unwrap().cents(), -550);
    }

    #[test]
    fn test_parse_rejects_text_without_digits() {
        let err = Money::parse("€").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { .. }));
        assert!("".parse::<Money>().is_err());
    }

    #[test]
    fn test_parse_sign_after_symbol() {
        assert_eq!(Money::parse("€-5,00").unwrap().cents(), -500);
        assert_eq!(Money::parse("- 5,00 €").unwrap().cents(), -500);
        assert!(Money::parse("5-00").is_err());
        assert!(Money::parse("--5").is_err());
    }

    #[test]
    fn test_json_numbers() {
        let number = |json: &str| serde_json::from_str::<serde_json::Number>(json).unwrap();

        assert_eq!(Money::from_json_number(&number("55")).unwrap().cents(), 5500);
        assert_eq!(Money::from_json_number(&number("19.9")).unwrap().cents(), 1990);
        assert_eq!(Money::from_json_number(&number("19.99")).unwrap().cents(), 1999);
        assert_eq!(Money::from_json_number(&number("-0.5")).unwrap().cents(), -50);
    }

    #[test]
    fn test_json_numbers_reject_inexact_amounts() {
        let number = |json: &str| serde_json::from_str::<serde_json::Number>(json).unwrap();

        for json in ["19.999", "0.30000000000000004", "1e20", "18446744073709551615"] {
            let err = Money::from_json_number(&number(json)).unwrap_err();
            assert!(
                matches!(err, ValidationError::InvalidFormat { .. }),
                "{json} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_rejects_overflow() {
        assert!(Money::parse("99999999999999999999").is_err());
    }
}
