//! Catalog service.

use std::collections::BTreeMap;

use async_trait::async_trait;
use mockall::automock;
use storefront::products::Product;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::catalog::errors::CatalogServiceError;

/// Most products returned by a single listing.
pub const LIST_LIMIT: usize = 300;

/// In-memory catalog, ordered by product id.
#[derive(Debug, Default)]
pub struct InMemoryCatalogService {
    products: RwLock<BTreeMap<String, Product>>,
}

impl InMemoryCatalogService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CatalogService for InMemoryCatalogService {
    async fn create_catalog(&self) -> Result<(), CatalogServiceError> {
        self.products.write().await.clear();

        Ok(())
    }

    async fn add_product(&self, product: Product) -> Result<(), CatalogServiceError> {
        if product.id.is_empty() {
            return Err(CatalogServiceError::MissingId);
        }

        debug!(product_id = %product.id, "adding product to catalog");

        self.products
            .write()
            .await
            .insert(product.id.clone(), product);

        Ok(())
    }

    async fn list_products(&self) -> Result<Vec<Product>, CatalogServiceError> {
        Ok(self
            .products
            .read()
            .await
            .values()
            .take(LIST_LIMIT)
            .cloned()
            .collect())
    }

    async fn get_product(&self, product_id: &str) -> Result<Product, CatalogServiceError> {
        self.products
            .read()
            .await
            .get(product_id)
            .cloned()
            .ok_or_else(|| CatalogServiceError::NotFound(product_id.to_string()))
    }
}

#[automock]
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Initialise an empty catalog.
    async fn create_catalog(&self) -> Result<(), CatalogServiceError>;

    /// Insert a product, replacing any product with the same id.
    async fn add_product(&self, product: Product) -> Result<(), CatalogServiceError>;

    /// Retrieves up to [`LIST_LIMIT`] products ordered by id.
    async fn list_products(&self) -> Result<Vec<Product>, CatalogServiceError>;

    /// Retrieve a single product.
    async fn get_product(&self, product_id: &str) -> Result<Product, CatalogServiceError>;
}
