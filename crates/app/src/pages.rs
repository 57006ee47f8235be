//! Page handlers over the storefront services.

use storefront::{
    intents::{Intent, IntentSink},
    orders::Address,
    views::{
        ViewError, cart::CartView, confirmation::OrderConfirmationView,
        history::OrderHistoryView, listing::ProductListingView,
    },
};
use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::{
    checkout::{CheckoutError, CheckoutReceipt, CheckoutRequest, PaymentCard},
    context::AppContext,
    domain::{
        carts::CartsServiceError,
        catalog::CatalogServiceError,
        orders::OrdersServiceError,
    },
    intents::dispatch,
    links::{ALL_PRODUCTS, UiResource, data_param},
};

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Catalog(#[from] CatalogServiceError),

    #[error(transparent)]
    Carts(#[from] CartsServiceError),

    #[error(transparent)]
    Orders(#[from] OrdersServiceError),

    #[error(transparent)]
    Checkout(#[from] CheckoutError),

    #[error(transparent)]
    View(#[from] ViewError),
}

impl AppContext {
    /// Product listing filtered by `query`. `"all"` lists everything.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be read.
    pub async fn products_page(&self, query: Option<&str>) -> Result<ProductListingView, AppError> {
        let products = self.catalog.list_products().await?;
        let query = query.filter(|query| *query != ALL_PRODUCTS);

        Ok(ProductListingView::build(&products, query))
    }

    /// Cart page for `cart_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart does not exist or its total overflows.
    pub async fn cart_page(&self, cart_id: Option<&str>) -> Result<CartView, AppError> {
        let Some(cart_id) = cart_id else {
            return Ok(CartView::build(None, &[])?);
        };

        let items = self.carts.get_items(cart_id).await?;

        Ok(CartView::build(Some(cart_id), &items)?)
    }

    /// Order history for `orders_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the order history does not exist.
    pub async fn orders_page(&self, orders_id: Option<&str>) -> Result<OrderHistoryView, AppError> {
        let Some(orders_id) = orders_id else {
            return Ok(OrderHistoryView::build(None, &[], &self.time_zone));
        };

        let orders = self.orders.get_orders(orders_id).await?;

        Ok(OrderHistoryView::build(
            Some(orders_id),
            &orders,
            &self.time_zone,
        ))
    }

    /// Confirmation page for a link produced by checkout.
    pub fn order_page(&self, url: &Url) -> OrderConfirmationView {
        OrderConfirmationView::from_query(data_param(url).as_deref())
    }

    /// Add a product to the shopper's cart and link to the cart page.
    ///
    /// # Errors
    ///
    /// Returns an error if the product is not in the catalog.
    pub async fn add_to_cart(&self, product_id: &str, quantity: u64) -> Result<UiResource, AppError> {
        let item = self
            .carts
            .add_item(&self.user_id, product_id, quantity)
            .await?;

        debug!(product_id, quantity = item.quantity, "cart updated");

        Ok(self.links.cart(&self.user_id))
    }

    /// Change a line quantity and tell the host.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart does not exist or the quantity is zero.
    pub async fn update_quantity(
        &self,
        product_id: &str,
        quantity: u64,
        sink: &dyn IntentSink,
    ) -> Result<UiResource, AppError> {
        self.carts
            .update_item_quantity(&self.user_id, product_id, quantity)
            .await?;

        dispatch(
            sink,
            &Intent::QuantityUpdated {
                product_id: product_id.to_string(),
                quantity,
            },
        );

        Ok(self.links.cart(&self.user_id))
    }

    /// Remove a line and tell the host.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart does not exist.
    pub async fn remove_from_cart(
        &self,
        product_id: &str,
        sink: &dyn IntentSink,
    ) -> Result<UiResource, AppError> {
        self.carts.remove_item(&self.user_id, product_id).await?;

        dispatch(
            sink,
            &Intent::ItemRemoved {
                product_id: product_id.to_string(),
            },
        );

        Ok(self.links.cart(&self.user_id))
    }

    /// Check out the shopper's cart into their order history.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart is empty or any checkout step fails.
    pub async fn checkout(
        &self,
        card: PaymentCard,
        address: Address,
    ) -> Result<CheckoutReceipt, AppError> {
        let receipt = self
            .checkout
            .checkout(CheckoutRequest {
                cart_id: self.user_id.clone(),
                orders_id: self.user_id.clone(),
                card,
                address,
            })
            .await?;

        Ok(receipt)
    }
}
