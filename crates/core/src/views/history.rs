//! Order history page

use std::io;

use jiff::tz::TimeZone;
use tabled::{builder::Builder, settings::object::Columns};

use crate::{
    dates::format_order_date,
    orders::Order,
    prices::format_price,
    views::{ViewError, build_table, write_line, write_message, write_summary},
};

/// Shown when the page is opened without an orders id.
pub const MISSING_ORDERS_ID: &str = "Error: orders_id required in query params.";

/// Shown when there are no orders.
pub const NO_ORDERS: &str = "No orders yet";

/// Hint shown under [`NO_ORDERS`].
pub const NO_ORDERS_HINT: &str = "Your order history will appear here";

/// A purchased line as displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    /// Name, `Unknown` when the line has none
    pub name: String,

    /// Picture URL
    pub picture: String,

    /// `Quantity: n`
    pub quantity: String,

    /// Formatted line total
    pub line_total: String,
}

/// One order in the history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderCard {
    /// `Order #id`
    pub title: String,

    /// Formatted order date
    pub placed_at: String,

    /// Purchased lines
    pub lines: Vec<OrderLine>,

    /// Formatted subtotal
    pub subtotal: String,

    /// Formatted shipping charge
    pub shipping: String,

    /// Formatted total
    pub total: String,

    /// Tracking number
    pub tracking_number: String,

    /// Carrier
    pub carrier: String,

    /// One-line shipping address
    pub shipping_address: String,
}

impl OrderCard {
    fn from_order(order: &Order, tz: &TimeZone) -> Self {
        let lines = order
            .items
            .iter()
            .map(|item| OrderLine {
                name: if item.name.is_empty() {
                    "Unknown".to_string()
                } else {
                    item.name.clone()
                },
                picture: item.picture.clone(),
                quantity: format!("Quantity: {}", item.quantity),
                line_total: format_price(item.line_total()),
            })
            .collect();

        Self {
            title: format!("Order #{}", order.order_id),
            placed_at: format_order_date(Some(order.created_at), tz),
            lines,
            subtotal: format_price(Some(order.subtotal)),
            shipping: format_price(Some(order.shipping_cost)),
            total: format_price(Some(order.total)),
            tracking_number: order.tracking_number.clone(),
            carrier: order.carrier.clone(),
            shipping_address: order.shipping_address.one_line(),
        }
    }
}

/// Order history page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderHistoryView {
    /// No `orders_id` was given.
    MissingOrdersId,

    /// No orders have been placed.
    Empty,

    /// Orders in the order they were placed.
    Orders(Vec<OrderCard>),
}

impl OrderHistoryView {
    /// Build the page for `orders_id`, showing dates in `tz`.
    pub fn build(orders_id: Option<&str>, orders: &[Order], tz: &TimeZone) -> Self {
        if orders_id.is_none() {
            return OrderHistoryView::MissingOrdersId;
        }

        if orders.is_empty() {
            return OrderHistoryView::Empty;
        }

        OrderHistoryView::Orders(
            orders
                .iter()
                .map(|order| OrderCard::from_order(order, tz))
                .collect(),
        )
    }

    /// Write the page as text.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::IO`] if writing fails.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ViewError> {
        let cards = match self {
            OrderHistoryView::MissingOrdersId => return write_line(&mut out, MISSING_ORDERS_ID),
            OrderHistoryView::Empty => {
                return write_message(&mut out, NO_ORDERS, NO_ORDERS_HINT);
            }
            OrderHistoryView::Orders(cards) => cards,
        };

        write_line(&mut out, "Order History")?;

        for card in cards {
            write_line(&mut out, "")?;
            write_line(&mut out, format!("{}  {}  {}", card.title, card.placed_at, card.total))?;

            let mut builder = Builder::default();

            builder.push_record(["Item", "Quantity", "Total"]);

            for line in &card.lines {
                builder.push_record([
                    line.name.as_str(),
                    line.quantity.as_str(),
                    line.line_total.as_str(),
                ]);
            }

            write_line(&mut out, build_table(builder, Columns::new(2..3)).to_string())?;

            write_summary(
                &mut out,
                &[
                    ("Subtotal:", card.subtotal.as_str()),
                    ("Shipping:", card.shipping.as_str()),
                    ("Total:", card.total.as_str()),
                ],
            )?;

            write_line(&mut out, format!("Tracking Number: {}", card.tracking_number))?;
            write_line(&mut out, format!("Carrier: {}", card.carrier))?;
            write_line(&mut out, format!("Shipping Address: {}", card.shipping_address))?;
        }

        Ok(())
    }
}
