//! Prices

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    ops::Deref,
};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Rendered when a price is absent or could not be parsed.
pub const ZERO_PRICE: &str = "$0.00";

/// Represents an amount in cents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cents {
    value: u64,
}

impl Cents {
    /// No money at all.
    pub const ZERO: Cents = Cents { value: 0 };

    /// Creates a new amount in cents
    pub const fn new(value: u64) -> Self {
        Cents { value }
    }

    /// Whether the amount is zero.
    pub const fn is_zero(self) -> bool {
        self.value == 0
    }

    /// Adds two amounts, returning `None` on overflow.
    #[must_use]
    pub fn checked_add(self, other: Cents) -> Option<Cents> {
        self.value.checked_add(other.value).map(Cents::new)
    }

    /// Multiplies by a quantity, returning `None` on overflow.
    #[must_use]
    pub fn checked_mul(self, quantity: u64) -> Option<Cents> {
        self.value.checked_mul(quantity).map(Cents::new)
    }

    /// The amount as a decimal number of dollars, exact to the cent.
    pub fn to_decimal(self) -> Decimal {
        // A u64 always fits the 96-bit decimal mantissa.
        Decimal::from_i128_with_scale(i128::from(self.value), 2)
    }
}

impl Deref for Cents {
    type Target = u64;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl From<u64> for Cents {
    fn from(value: u64) -> Self {
        Cents::new(value)
    }
}

impl Display for Cents {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "${:.2}", self.to_decimal())
    }
}

/// Formats an optional amount of cents as `$D.CC`.
///
/// Missing and zero amounts both render as [`ZERO_PRICE`]. There is no thousands separator
/// and the cents are always two digits.
pub fn format_price(cents: Option<Cents>) -> String {
    match cents {
        Some(cents) if !cents.is_zero() => cents.to_string(),
        _ => ZERO_PRICE.to_string(),
    }
}

/// Parses the leading integer of `input`, ignoring anything after the first non-digit.
///
/// Leading whitespace and a single `+` are skipped. Returns `None` when there are no
/// leading digits, when the number is negative, or when it does not fit in a `u64`.
pub fn parse_cents_lenient(input: &str) -> Option<Cents> {
    let trimmed = input.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);

    let digits: String = unsigned
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();

    if digits.is_empty() {
        return None;
    }

    digits.parse::<u64>().ok().map(Cents::new)
}

/// Parses `input` as cents only when it consists entirely of ASCII digits.
pub fn parse_cents_strict(input: &str) -> Option<Cents> {
    if input.is_empty() || !input.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    input.parse::<u64>().ok().map(Cents::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cents() {
        let cents = Cents::new(1000);

        assert_eq!(cents.value, 1000);
    }

    #[test]
    fn cents_derefs_to_u64() {
        let cents = Cents { value: 100 };

        assert_eq!(*cents, 100);
    }

    #[test]
    fn formats_known_values() {
        assert_eq!(format_price(Some(Cents::new(0))), "$0.00");
        assert_eq!(format_price(None), "$0.00");
        assert_eq!(format_price(Some(Cents::new(150))), "$1.50");
        assert_eq!(format_price(Some(Cents::new(5))), "$0.05");
        assert_eq!(format_price(Some(Cents::new(100_000))), "$1000.00");
    }

    #[test]
    fn formats_values_beyond_32_bits() {
        assert_eq!(
            format_price(Some(Cents::new(9_876_543_210_123))),
            "$98765432101.23"
        );
        assert_eq!(
            format_price(Some(Cents::new(u64::MAX))),
            "$184467440737095516.15"
        );
    }

    #[test]
    fn formatted_prices_always_have_two_fraction_digits() {
        for value in [1, 9, 10, 99, 101, 1_000, 123_456, 4_294_967_296] {
            let formatted = format_price(Some(Cents::new(value)));
            let (whole, fraction) = formatted
                .split_once('.')
                .unwrap_or((formatted.as_str(), ""));

            assert!(whole.starts_with('$'), "{formatted} should start with $");
            assert_eq!(fraction.len(), 2, "{formatted} should have two cent digits");
            assert!(
                fraction.chars().all(|c| c.is_ascii_digit()),
                "{formatted} should end in digits"
            );
            assert_eq!(formatted.matches('.').count(), 1, "{formatted} has one dot");
        }
    }

    #[test]
    fn lenient_parse_accepts_numeric_prefix() {
        assert_eq!(parse_cents_lenient("1500"), Some(Cents::new(1500)));
        assert_eq!(parse_cents_lenient("1500abc"), Some(Cents::new(1500)));
        assert_eq!(parse_cents_lenient("  42 "), Some(Cents::new(42)));
        assert_eq!(parse_cents_lenient("+7"), Some(Cents::new(7)));
        assert_eq!(parse_cents_lenient("12.99"), Some(Cents::new(12)));
    }

    #[test]
    fn lenient_parse_rejects_values_without_leading_digits() {
        assert_eq!(parse_cents_lenient("abc"), None);
        assert_eq!(parse_cents_lenient(""), None);
        assert_eq!(parse_cents_lenient("-5"), None);
        assert_eq!(parse_cents_lenient("99999999999999999999999"), None);
    }

    #[test]
    fn strict_parse_requires_only_digits() {
        assert_eq!(parse_cents_strict("500"), Some(Cents::new(500)));
        assert_eq!(parse_cents_strict("500x"), None);
        assert_eq!(parse_cents_strict(" 500"), None);
        assert_eq!(parse_cents_strict(""), None);
    }
}
