//! Orders

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{cart::CartItem, prices::Cents};

pub mod token;

/// Shipping address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Street and number
    pub street_address: String,

    /// City
    pub city: String,

    /// State or region
    pub state: String,

    /// Country
    pub country: String,

    /// Postal code
    pub zip_code: String,
}

impl Address {
    /// Single-line form: `street, city, state zip, country`.
    pub fn one_line(&self) -> String {
        format!(
            "{}, {}, {} {}, {}",
            self.street_address, self.city, self.state, self.zip_code, self.country
        )
    }
}

/// A placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Order identifier
    pub order_id: String,

    /// Lines purchased
    pub items: Vec<CartItem>,

    /// Payment transaction identifier
    pub transaction_id: String,

    /// Sum of the line totals
    pub subtotal: Cents,

    /// Shipping charge
    pub shipping_cost: Cents,

    /// Amount charged
    pub total: Cents,

    /// Carrier tracking number
    pub tracking_number: String,

    /// Carrier name
    pub carrier: String,

    /// When the order was placed
    pub created_at: Timestamp,

    /// Where the order ships to
    pub shipping_address: Address,
}

/// The fields carried from checkout to the order confirmation page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    /// Order identifier
    pub order_id: String,

    /// Last four characters of the payment card
    pub last_four: String,

    /// Order subtotal
    pub subtotal: Cents,

    /// Shipping charge
    pub shipping: Cents,

    /// Order total
    pub total: Cents,

    /// Carrier tracking number
    pub tracking_number: String,
}

impl OrderSummary {
    /// Summarise an order paid with a card ending in `last_four`.
    pub fn from_order(order: &Order, last_four: impl Into<String>) -> Self {
        Self {
            order_id: order.order_id.clone(),
            last_four: last_four.into(),
            subtotal: order.subtotal,
            shipping: order.shipping_cost,
            total: order.total,
            tracking_number: order.tracking_number.clone(),
        }
    }
}
