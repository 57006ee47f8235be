//! Order confirmation page

use std::io;

use crate::{
    orders::token::{DecodedOrderSummary, decode_order_summary},
    views::{ViewError, write_line, write_summary},
};

/// Shown when the page is opened without order data.
pub const NO_ORDER: &str = "No order found";

/// Page title for a confirmed order.
pub const ORDER_CONFIRMED: &str = "Order Confirmed!";

/// Closing note on a confirmed order.
pub const SHIPPING_NOTE: &str = "Your order has been confirmed and will be shipped soon. \
You'll receive a shipping notification once your package is on its way.";

const CARD_MASK: &str = "•••• •••• ••••";

/// A decoded order, ready to display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmedOrder {
    /// Order identifier
    pub order_id: String,

    /// Formatted subtotal
    pub subtotal: String,

    /// Formatted shipping charge
    pub shipping: String,

    /// Formatted total
    pub total: String,

    /// Masked card number ending in the last four characters
    pub payment_method: String,

    /// Tracking number
    pub tracking_number: String,
}

impl From<DecodedOrderSummary> for ConfirmedOrder {
    fn from(decoded: DecodedOrderSummary) -> Self {
        Self {
            subtotal: decoded.subtotal_display(),
            shipping: decoded.shipping_display(),
            total: decoded.total_display(),
            payment_method: format!("{CARD_MASK} {}", decoded.last_four),
            order_id: decoded.order_id,
            tracking_number: decoded.tracking_number,
        }
    }
}

/// Order confirmation page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderConfirmationView {
    /// No token was supplied.
    NotFound,

    /// A decoded order.
    Confirmed(ConfirmedOrder),
}

impl OrderConfirmationView {
    /// Build the page from the raw `data` query parameter.
    ///
    /// A missing or empty token is [`OrderConfirmationView::NotFound`]; anything else is
    /// decoded best-effort and never fails.
    pub fn from_query(data: Option<&str>) -> Self {
        match data {
            Some(token) if !token.is_empty() => {
                OrderConfirmationView::Confirmed(decode_order_summary(token).into())
            }
            _ => OrderConfirmationView::NotFound,
        }
    }

    /// Write the page as text.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::IO`] if writing fails.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ViewError> {
        let order = match self {
            OrderConfirmationView::NotFound => return write_line(&mut out, NO_ORDER),
            OrderConfirmationView::Confirmed(order) => order,
        };

        write_line(&mut out, "✓")?;
        write_line(&mut out, ORDER_CONFIRMED)?;
        write_line(&mut out, format!("Order #{}", order.order_id))?;
        write_line(&mut out, "")?;

        write_summary(
            &mut out,
            &[
                ("Subtotal:", order.subtotal.as_str()),
                ("Shipping:", order.shipping.as_str()),
                ("Total:", order.total.as_str()),
            ],
        )?;

        write_line(&mut out, "")?;
        write_line(&mut out, format!("Payment Method: {}", order.payment_method))?;
        write_line(&mut out, format!("Tracking Number: {}", order.tracking_number))?;
        write_line(&mut out, "")?;
        write_line(&mut out, SHIPPING_NOTE)
    }
}
