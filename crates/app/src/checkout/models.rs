//! Checkout models

use std::fmt;

use storefront::{
    orders::{Order, OrderSummary},
    prices::Cents,
};

use crate::links::UiResource;

/// Card details supplied at checkout.
#[derive(Clone, PartialEq, Eq)]
pub struct PaymentCard {
    pub number: String,
    pub cvv: String,
    pub expiration_month: u8,
    pub expiration_year: u16,
}

impl PaymentCard {
    /// Last four characters of the card number, or the whole number when shorter.
    pub fn last_four(&self) -> &str {
        let start = self
            .number
            .char_indices()
            .rev()
            .nth(3)
            .map_or(0, |(index, _)| index);

        &self.number[start..]
    }
}

impl fmt::Debug for PaymentCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaymentCard")
            .field("last_four", &self.last_four())
            .field("expiration_month", &self.expiration_month)
            .field("expiration_year", &self.expiration_year)
            .finish_non_exhaustive()
    }
}

/// Shipping price offered for a set of lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShippingQuote {
    pub cost: Cents,
    pub carrier: String,
    pub estimated_days: u8,
}

/// A successful card charge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charge {
    pub transaction_id: String,
    pub last_four: String,
    pub amount: Cents,
}

/// A shipment booked with a carrier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shipment {
    pub tracking_number: String,
    pub carrier: String,
}

/// Everything produced by a successful checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutReceipt {
    /// The stored order
    pub order: Order,

    /// Fields carried to the confirmation page
    pub summary: OrderSummary,

    /// Encoded summary
    pub token: String,

    /// Link to the confirmation page
    pub confirmation: UiResource,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(number: &str) -> PaymentCard {
        PaymentCard {
            number: number.to_string(),
            cvv: "123".to_string(),
            expiration_month: 12,
            expiration_year: 2030,
        }
    }

    #[test]
    fn last_four_takes_trailing_characters() {
        assert_eq!(card("4242424242424242").last_four(), "4242");
        assert_eq!(card("12").last_four(), "12");
        assert_eq!(card("").last_four(), "");
    }

    #[test]
    fn debug_hides_number_and_cvv() {
        let debug = format!("{:?}", card("4111111111111111"));

        assert!(!debug.contains("4111111111111111"), "got {debug}");
        assert!(!debug.contains("123"), "got {debug}");
        assert!(debug.contains("1111"), "got {debug}");
    }
}
