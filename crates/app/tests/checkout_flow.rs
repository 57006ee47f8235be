//! End-to-end checkout against the bundled catalog.

use std::sync::Arc;

use async_trait::async_trait;
use storefront::{
    cart::CartItem,
    fixtures::Catalog,
    orders::{Address, token::decode_order_summary_strict},
    prices::Cents,
    views::{
        cart::CartView,
        confirmation::{ConfirmedOrder, OrderConfirmationView},
        history::OrderHistoryView,
    },
};
use storefront_app::{
    checkout::{
        CheckoutError, CheckoutRequest, CheckoutService, FlatRateShipping, MOCK_CARRIER,
        PaymentCard, ProviderError, RandomOrderIds, ShippingProvider, ShippingQuote,
        SimulatedFulfillment, SimulatedPayments,
    },
    config::StoreConfig,
    context::AppContext,
    domain::{
        carts::{CartsService, InMemoryCartsService},
        catalog::{CatalogService, InMemoryCatalogService},
        orders::{InMemoryOrdersService, OrdersService},
    },
    links::{UiLinks, data_param},
    pages::AppError,
};
use testresult::TestResult;
use url::Url;

const USER: &str = "user@email.com";

async fn app() -> TestResult<AppContext> {
    let config = StoreConfig {
        base_url: Url::parse("http://localhost:3000")?,
        user_id: USER.to_string(),
        catalog: None,
        timezone: "UTC".to_string(),
    };

    Ok(AppContext::in_memory(&config).await?)
}

fn card() -> PaymentCard {
    PaymentCard {
        number: "4111111111114242".to_string(),
        cvv: "123".to_string(),
        expiration_month: 12,
        expiration_year: 2030,
    }
}

fn address() -> Address {
    Address {
        street_address: "1 Main St".to_string(),
        city: "Springfield".to_string(),
        state: "IL".to_string(),
        country: "USA".to_string(),
        zip_code: "62701".to_string(),
    }
}

#[tokio::test]
async fn checkout_records_order_and_links_to_confirmation() -> TestResult {
    let app = app().await?;

    let shirt = app.catalog.get_product("shirt-001").await?;

    app.add_to_cart("shirt-001", 2).await?;

    let receipt = app.checkout(card(), address()).await?;

    let subtotal = shirt.price.checked_mul(2).ok_or("subtotal overflow")?;

    assert_eq!(receipt.order.subtotal, subtotal);
    assert_eq!(receipt.order.shipping_cost, Cents::new(600));
    assert_eq!(
        Some(receipt.order.total),
        subtotal.checked_add(Cents::new(600))
    );
    assert_eq!(receipt.order.carrier, MOCK_CARRIER);
    assert_eq!(receipt.summary.last_four, "4242");

    let token = data_param(receipt.confirmation.iframe_url()).ok_or("missing data param")?;

    assert_eq!(token, receipt.token);
    assert_eq!(decode_order_summary_strict(&token)?, receipt.summary);

    let OrderConfirmationView::Confirmed(ConfirmedOrder {
        order_id,
        payment_method,
        ..
    }) = app.order_page(receipt.confirmation.iframe_url())
    else {
        return Err("confirmation link should show the order".into());
    };

    assert_eq!(order_id, receipt.order.order_id);
    assert_eq!(payment_method, "•••• •••• •••• 4242");

    assert_eq!(app.cart_page(Some(USER)).await?, CartView::Empty);

    let OrderHistoryView::Orders(cards) = app.orders_page(Some(USER)).await? else {
        return Err("order history should list the order".into());
    };

    assert_eq!(cards.len(), 1);

    Ok(())
}

#[tokio::test]
async fn checkout_of_empty_cart_fails() -> TestResult {
    let app = app().await?;

    let result = app.checkout(card(), address()).await;

    assert!(
        matches!(result, Err(AppError::Checkout(CheckoutError::EmptyCart))),
        "got {result:?}"
    );
    assert_eq!(app.orders_page(Some(USER)).await?, OrderHistoryView::Empty);

    Ok(())
}

#[tokio::test]
async fn repeated_adds_merge_into_one_line() -> TestResult {
    let app = app().await?;

    app.add_to_cart("shirt-001", 1).await?;
    app.add_to_cart("shirt-001", 1).await?;

    let CartView::Items { lines, .. } = app.cart_page(Some(USER)).await? else {
        return Err("expected cart lines".into());
    };

    assert_eq!(lines.len(), 1);
    assert_eq!(lines.first().map(|line| line.quantity), Some(2));

    Ok(())
}

/// Quotes like the flat-rate carrier, adding a line to the cart while it does.
struct AddsToCartWhileQuoting {
    carts: Arc<dyn CartsService>,
}

#[async_trait]
impl ShippingProvider for AddsToCartWhileQuoting {
    async fn quote(
        &self,
        items: &[CartItem],
        address: &Address,
    ) -> Result<ShippingQuote, ProviderError> {
        self.carts
            .add_item(USER, "pants-001", 1)
            .await
            .map_err(|error| ProviderError::Unavailable(error.to_string()))?;

        FlatRateShipping.quote(items, address).await
    }
}

#[tokio::test]
async fn lines_added_during_checkout_stay_in_the_cart() -> TestResult {
    let catalog = Arc::new(InMemoryCatalogService::new());

    for product in Catalog::seed()?.products {
        catalog.add_product(product).await?;
    }

    let carts: Arc<dyn CartsService> = Arc::new(InMemoryCartsService::new(catalog));
    let orders = Arc::new(InMemoryOrdersService::new());

    carts.create_cart(USER).await?;
    orders.create_orders(USER).await?;
    carts.add_item(USER, "shirt-001", 1).await?;

    let checkout = CheckoutService::new(
        carts.clone(),
        orders,
        Arc::new(AddsToCartWhileQuoting {
            carts: carts.clone(),
        }),
        Arc::new(SimulatedPayments),
        Arc::new(SimulatedFulfillment),
        Arc::new(RandomOrderIds),
        UiLinks::new(Url::parse("http://localhost:3000")?),
    );

    let receipt = checkout
        .checkout(CheckoutRequest {
            cart_id: USER.to_string(),
            orders_id: USER.to_string(),
            card: card(),
            address: address(),
        })
        .await?;

    let ordered: Vec<String> = receipt
        .order
        .items
        .into_iter()
        .map(|item| item.product_id)
        .collect();
    let remaining: Vec<(String, u64)> = carts
        .get_items(USER)
        .await?
        .into_iter()
        .map(|item| (item.product_id, item.quantity))
        .collect();

    assert_eq!(ordered, ["shirt-001"]);
    assert_eq!(remaining, [("pants-001".to_string(), 1)]);

    Ok(())
}
