//! Cart page

use std::io;

use tabled::{builder::Builder, settings::object::Columns};

use crate::{
    cart::{CartItem, cart_total},
    intents::Intent,
    prices::format_price,
    pricing::format_money,
    views::{ViewError, build_table, write_line, write_message, write_summary},
};

/// Shown when the page is opened without a cart id.
pub const MISSING_CART_ID: &str = "Error: cart_id required in query params.";

/// Shown for a cart with no lines.
pub const EMPTY_CART: &str = "Your cart is empty";

/// Hint shown under [`EMPTY_CART`].
pub const EMPTY_CART_HINT: &str = "Add some products to get started";

/// A cart line as displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    /// Product identifier
    pub product_id: String,

    /// Name, or the product id when the line has none
    pub name: String,

    /// Picture URL
    pub picture: String,

    /// Formatted unit price
    pub unit_price: String,

    /// Units in the cart
    pub quantity: u64,

    /// Whether the minus button is enabled
    pub can_decrement: bool,

    /// Formatted line total
    pub line_total: String,
}

impl CartLine {
    fn from_item(item: &CartItem) -> Self {
        Self {
            product_id: item.product_id.clone(),
            name: item.display_name().to_string(),
            picture: item.picture.clone(),
            unit_price: format_price(Some(item.price)),
            quantity: item.quantity,
            can_decrement: item.can_decrement(),
            line_total: format_price(item.line_total()),
        }
    }

    /// Intent raised by the plus button.
    pub fn increment(&self) -> Intent {
        Intent::QuantityUpdated {
            product_id: self.product_id.clone(),
            quantity: self.quantity.saturating_add(1),
        }
    }

    /// Intent raised by the minus button, if it is enabled.
    pub fn decrement(&self) -> Option<Intent> {
        self.can_decrement.then(|| Intent::QuantityUpdated {
            product_id: self.product_id.clone(),
            quantity: self.quantity.saturating_sub(1),
        })
    }

    /// Intent raised by the remove link.
    pub fn remove(&self) -> Intent {
        Intent::ItemRemoved {
            product_id: self.product_id.clone(),
        }
    }
}

/// Cart page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartView {
    /// No `cart_id` was given.
    MissingCartId,

    /// The cart has no lines.
    Empty,

    /// Lines and their total.
    Items {
        /// Lines in cart order
        lines: Vec<CartLine>,
        /// Formatted cart total
        total: String,
    },
}

impl CartView {
    /// Build the page for `cart_id` holding `items`.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::TotalPrice`] if the cart total cannot be computed.
    pub fn build(cart_id: Option<&str>, items: &[CartItem]) -> Result<Self, ViewError> {
        if cart_id.is_none() {
            return Ok(CartView::MissingCartId);
        }

        if items.is_empty() {
            return Ok(CartView::Empty);
        }

        let total = format_money(&cart_total(items)?);
        let lines = items.iter().map(CartLine::from_item).collect();

        Ok(CartView::Items { lines, total })
    }

    /// Intent raised by the checkout button, if the cart has lines.
    pub fn checkout(&self) -> Option<Intent> {
        matches!(self, CartView::Items { .. }).then_some(Intent::Checkout)
    }

    /// Write the page as text.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::IO`] if writing fails.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ViewError> {
        let (lines, total) = match self {
            CartView::MissingCartId => return write_line(&mut out, MISSING_CART_ID),
            CartView::Empty => return write_message(&mut out, EMPTY_CART, EMPTY_CART_HINT),
            CartView::Items { lines, total } => (lines, total),
        };

        write_line(&mut out, "Shopping Cart")?;

        let mut builder = Builder::default();

        builder.push_record(["Item", "Price", "Qty", "Total"]);

        for line in lines {
            builder.push_record([
                line.name.clone(),
                line.unit_price.clone(),
                line.quantity.to_string(),
                line.line_total.clone(),
            ]);
        }

        write_line(&mut out, build_table(builder, Columns::new(1..4)).to_string())?;

        write_summary(&mut out, &[("Total:", total.as_str())])
    }
}
