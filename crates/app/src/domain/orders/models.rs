//! Order models

use jiff::Timestamp;
use storefront::{
    cart::CartItem,
    orders::{Address, Order},
    prices::Cents,
};

/// An order ready to be stored, with an optional placement time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub order_id: String,
    pub items: Vec<CartItem>,
    pub transaction_id: String,
    pub subtotal: Cents,
    pub shipping_cost: Cents,
    pub total: Cents,
    pub tracking_number: String,
    pub carrier: String,
    pub created_at: Option<Timestamp>,
    pub shipping_address: Address,
}

impl NewOrder {
    /// Complete the order, stamping it with `now` if it has no placement time.
    #[must_use]
    pub fn into_order(self, now: Timestamp) -> Order {
        Order {
            order_id: self.order_id,
            items: self.items,
            transaction_id: self.transaction_id,
            subtotal: self.subtotal,
            shipping_cost: self.shipping_cost,
            total: self.total,
            tracking_number: self.tracking_number,
            carrier: self.carrier,
            created_at: self.created_at.unwrap_or(now),
            shipping_address: self.shipping_address,
        }
    }
}
