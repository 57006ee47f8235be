//! Cart

use rusty_money::{Money, iso};
use serde::{Deserialize, Serialize};

use crate::{
    prices::Cents,
    pricing::{TotalPriceError, line_total, total_price},
};

/// A product line in a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Product identifier
    pub product_id: String,

    /// Units of the product
    pub quantity: u64,

    /// Product name at the time it was added
    #[serde(default)]
    pub name: String,

    /// Unit price at the time it was added
    pub price: Cents,

    /// Picture URL
    #[serde(default)]
    pub picture: String,
}

impl CartItem {
    /// Name to show for the line, falling back to the product id.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.product_id
        } else {
            &self.name
        }
    }

    /// Price of the whole line, `None` when price or quantity is zero.
    pub fn line_total(&self) -> Option<Cents> {
        line_total(self.price, self.quantity)
    }

    /// Whether the quantity can be lowered without removing the line.
    pub fn can_decrement(&self) -> bool {
        self.quantity > 1
    }
}

/// Sum of every line total in `items`.
///
/// # Errors
///
/// Returns a [`TotalPriceError`] if a line total overflows or cannot be added.
pub fn cart_total(items: &[CartItem]) -> Result<Money<'static, iso::Currency>, TotalPriceError> {
    let lines = items
        .iter()
        .filter(|item| !item.price.is_zero() && item.quantity > 0)
        .map(|item| item.line_total().ok_or(TotalPriceError::Overflow(*item.price)))
        .collect::<Result<Vec<_>, _>>()?;

    total_price(lines)
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn item(product_id: &str, name: &str, price: u64, quantity: u64) -> CartItem {
        CartItem {
            product_id: product_id.to_string(),
            quantity,
            name: name.to_string(),
            price: Cents::new(price),
            picture: String::new(),
        }
    }

    #[test]
    fn display_name_falls_back_to_product_id() {
        assert_eq!(item("shirt-001", "Shirt", 100, 1).display_name(), "Shirt");
        assert_eq!(item("shirt-001", "", 100, 1).display_name(), "shirt-001");
    }

    #[test]
    fn decrement_disabled_at_one() {
        assert!(!item("a", "A", 100, 1).can_decrement());
        assert!(item("a", "A", 100, 2).can_decrement());
    }

    #[test]
    fn total_sums_line_totals() -> TestResult {
        let items = [item("a", "A", 2999, 2), item("b", "B", 4999, 1)];

        assert_eq!(cart_total(&items)?, Money::from_minor(10_997, iso::USD));

        Ok(())
    }

    #[test]
    fn total_skips_free_and_empty_lines() -> TestResult {
        let items = [item("a", "A", 0, 2), item("b", "B", 500, 0), item("c", "C", 250, 2)];

        assert_eq!(cart_total(&items)?, Money::from_minor(500, iso::USD));

        Ok(())
    }

    #[test]
    fn total_of_empty_cart_is_zero() -> TestResult {
        assert_eq!(cart_total(&[])?, Money::from_minor(0, iso::USD));

        Ok(())
    }

    #[test]
    fn total_reports_overflow() {
        let items = [item("a", "A", u64::MAX, 2)];

        assert_eq!(cart_total(&items), Err(TotalPriceError::Overflow(u64::MAX)));
    }
}
