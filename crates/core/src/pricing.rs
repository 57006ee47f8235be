//! Pricing

use rusty_money::{Money, MoneyError, iso};
use thiserror::Error;

use crate::prices::{Cents, ZERO_PRICE};

/// Errors that can occur while calculating a total price.
#[derive(Debug, Error, PartialEq)]
pub enum TotalPriceError {
    /// An amount was too large to be represented.
    #[error("amount of {0} cents is too large to total")]
    Overflow(u64),

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Price of `quantity` units at `unit` each.
///
/// Returns `None` when either side is zero (nothing to display) or the product overflows.
pub fn line_total(unit: Cents, quantity: u64) -> Option<Cents> {
    if unit.is_zero() || quantity == 0 {
        return None;
    }

    unit.checked_mul(quantity)
}

/// Converts cents into US dollars.
///
/// # Errors
///
/// - [`TotalPriceError::Overflow`]: the amount does not fit in signed minor units.
pub fn to_money(cents: Cents) -> Result<Money<'static, iso::Currency>, TotalPriceError> {
    let minor = i64::try_from(*cents).map_err(|_err| TotalPriceError::Overflow(*cents))?;

    Ok(Money::from_minor(minor, iso::USD))
}

/// Calculates the total price of a list of amounts
///
/// # Errors
///
/// - [`TotalPriceError::Overflow`]: an amount does not fit in signed minor units.
/// - [`TotalPriceError::Money`]: Wrapped money arithmetic or currency mismatch error.
pub fn total_price(
    amounts: impl IntoIterator<Item = Cents>,
) -> Result<Money<'static, iso::Currency>, TotalPriceError> {
    amounts
        .into_iter()
        .try_fold(Money::from_minor(0, iso::USD), |acc, cents| {
            Ok(acc.add(to_money(cents)?)?)
        })
}

/// Formats money as `$D.CC`, the same shape as [`crate::prices::format_price`].
pub fn format_money(money: &Money<'_, iso::Currency>) -> String {
    if money.is_zero() {
        return ZERO_PRICE.to_string();
    }

    format!("${:.2}", money.amount())
}
