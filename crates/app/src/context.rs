//! App Context

use std::sync::Arc;

use jiff::tz::TimeZone;
use storefront::fixtures::{Catalog, FixtureError};
use thiserror::Error;
use tracing::info;

use crate::{
    checkout::{
        CheckoutService, FlatRateShipping, RandomOrderIds, SimulatedFulfillment,
        SimulatedPayments,
    },
    config::StoreConfig,
    domain::{
        carts::{CartsService, CartsServiceError, InMemoryCartsService},
        catalog::{CatalogService, CatalogServiceError, InMemoryCatalogService},
        orders::{InMemoryOrdersService, OrdersService, OrdersServiceError},
    },
    links::UiLinks,
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to load catalog")]
    Fixture(#[from] FixtureError),

    #[error("failed to seed catalog")]
    Catalog(#[from] CatalogServiceError),

    #[error("failed to create cart")]
    Carts(#[from] CartsServiceError),

    #[error("failed to create order history")]
    Orders(#[from] OrdersServiceError),

    #[error("unknown time zone")]
    TimeZone(#[source] jiff::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub catalog: Arc<dyn CatalogService>,
    pub carts: Arc<dyn CartsService>,
    pub orders: Arc<dyn OrdersService>,
    pub checkout: Arc<CheckoutService>,
    pub links: UiLinks,
    pub user_id: String,
    pub time_zone: TimeZone,
}

impl AppContext {
    /// Build an in-memory storefront seeded from the configured catalog, with an empty
    /// cart and order history for the configured user.
    ///
    /// # Errors
    ///
    /// Returns an error when the catalog cannot be loaded or the time zone is unknown.
    pub async fn in_memory(config: &StoreConfig) -> Result<Self, AppInitError> {
        let seed = match &config.catalog {
            Some(path) => Catalog::from_path(path)?,
            None => Catalog::seed()?,
        };

        let time_zone = config.time_zone().map_err(AppInitError::TimeZone)?;

        let catalog = Arc::new(InMemoryCatalogService::new());

        catalog.create_catalog().await?;

        for product in seed.products {
            catalog.add_product(product).await?;
        }

        let carts = Arc::new(InMemoryCartsService::new(catalog.clone()));
        let orders = Arc::new(InMemoryOrdersService::new());

        carts.create_cart(&config.user_id).await?;
        orders.create_orders(&config.user_id).await?;

        let links = UiLinks::new(config.base_url.clone());

        let checkout = Arc::new(CheckoutService::new(
            carts.clone(),
            orders.clone(),
            Arc::new(FlatRateShipping),
            Arc::new(SimulatedPayments),
            Arc::new(SimulatedFulfillment),
            Arc::new(RandomOrderIds),
            links.clone(),
        ));

        info!(user_id = %config.user_id, "storefront ready");

        Ok(Self {
            catalog,
            carts,
            orders,
            checkout,
            links,
            user_id: config.user_id.clone(),
            time_zone,
        })
    }
}
