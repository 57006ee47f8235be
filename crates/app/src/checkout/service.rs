//! Checkout service.

use std::sync::Arc;

use storefront::{
    cart::CartItem,
    orders::{Address, OrderSummary, token::encode_order_summary},
    prices::Cents,
};
use tracing::{info, instrument};

use crate::{
    checkout::{
        errors::CheckoutError,
        models::{CheckoutReceipt, PaymentCard},
        providers::{FulfillmentProvider, OrderIdGenerator, PaymentProcessor, ShippingProvider},
    },
    domain::{
        carts::CartsService,
        orders::{NewOrder, OrdersService},
    },
    links::UiLinks,
};

/// Details gathered on the checkout form.
#[derive(Debug, Clone)]
pub struct CheckoutRequest {
    pub cart_id: String,
    pub orders_id: String,
    pub card: PaymentCard,
    pub address: Address,
}

/// Sum of `price * quantity` over every line.
///
/// # Errors
///
/// Returns [`CheckoutError::Overflow`] if the sum does not fit.
pub fn subtotal(items: &[CartItem]) -> Result<Cents, CheckoutError> {
    items.iter().try_fold(Cents::ZERO, |sum, item| {
        item.price
            .checked_mul(item.quantity)
            .and_then(|line| sum.checked_add(line))
            .ok_or(CheckoutError::Overflow)
    })
}

/// Turns a cart into a paid, shipped and recorded order.
pub struct CheckoutService {
    carts: Arc<dyn CartsService>,
    orders: Arc<dyn OrdersService>,
    shipping: Arc<dyn ShippingProvider>,
    payments: Arc<dyn PaymentProcessor>,
    fulfillment: Arc<dyn FulfillmentProvider>,
    order_ids: Arc<dyn OrderIdGenerator>,
    links: UiLinks,
}

impl CheckoutService {
    #[must_use]
    pub fn new(
        carts: Arc<dyn CartsService>,
        orders: Arc<dyn OrdersService>,
        shipping: Arc<dyn ShippingProvider>,
        payments: Arc<dyn PaymentProcessor>,
        fulfillment: Arc<dyn FulfillmentProvider>,
        order_ids: Arc<dyn OrderIdGenerator>,
        links: UiLinks,
    ) -> Self {
        Self {
            carts,
            orders,
            shipping,
            payments,
            fulfillment,
            order_ids,
            links,
        }
    }

    /// Check out the cart in `request`.
    ///
    /// Once the order has been stored, only the lines it contains are taken out of the
    /// cart. Lines added while checkout was running stay in the cart.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] for a cart with no lines, or the first
    /// provider or storage failure.
    #[instrument(skip_all, fields(cart_id = %request.cart_id))]
    pub async fn checkout(&self, request: CheckoutRequest) -> Result<CheckoutReceipt, CheckoutError> {
        let CheckoutRequest {
            cart_id,
            orders_id,
            card,
            address,
        } = request;

        let items = self.carts.get_items(&cart_id).await?;

        if items.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let subtotal = subtotal(&items)?;

        info!(lines = items.len(), %subtotal, "checkout started");

        let quote = self
            .shipping
            .quote(&items, &address)
            .await
            .map_err(CheckoutError::Shipping)?;

        info!(cost = %quote.cost, carrier = %quote.carrier, days = quote.estimated_days, "shipping quoted");

        let total = subtotal
            .checked_add(quote.cost)
            .ok_or(CheckoutError::Overflow)?;

        let charge = self
            .payments
            .charge(&card, total)
            .await
            .map_err(CheckoutError::Payment)?;

        info!(transaction_id = %charge.transaction_id, amount = %charge.amount, "payment captured");

        let shipment = self
            .fulfillment
            .ship(&items, &address)
            .await
            .map_err(CheckoutError::Fulfilment)?;

        info!(tracking_number = %shipment.tracking_number, "shipment booked");

        let order = self
            .orders
            .add_order(
                &orders_id,
                NewOrder {
                    order_id: self.order_ids.next_order_id(),
                    items,
                    transaction_id: charge.transaction_id,
                    subtotal,
                    shipping_cost: quote.cost,
                    total,
                    tracking_number: shipment.tracking_number,
                    carrier: shipment.carrier,
                    created_at: None,
                    shipping_address: address,
                },
            )
            .await?;

        self.carts.remove_items(&cart_id, &order.items).await?;

        let summary = OrderSummary::from_order(&order, charge.last_four);
        let token = encode_order_summary(&summary);
        let confirmation = self.links.order_confirmation(&order.order_id, &token);

        info!(order_id = %order.order_id, total = %order.total, "checkout complete");

        Ok(CheckoutReceipt {
            order,
            summary,
            token,
            confirmation,
        })
    }
}
