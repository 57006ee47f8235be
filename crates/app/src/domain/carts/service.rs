//! Carts service.

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use mockall::automock;
use storefront::cart::CartItem;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::{carts::errors::CartsServiceError, catalog::CatalogService};

/// In-memory carts keyed by cart id, priced from a catalog.
pub struct InMemoryCartsService {
    catalog: Arc<dyn CatalogService>,
    carts: RwLock<HashMap<String, Vec<CartItem>>>,
}

impl InMemoryCartsService {
    #[must_use]
    pub fn new(catalog: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog,
            carts: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl CartsService for InMemoryCartsService {
    async fn create_cart(&self, cart_id: &str) -> Result<(), CartsServiceError> {
        let mut carts = self.carts.write().await;

        if carts.contains_key(cart_id) {
            return Err(CartsServiceError::AlreadyExists);
        }

        carts.insert(cart_id.to_string(), Vec::new());

        Ok(())
    }

    async fn add_item(
        &self,
        cart_id: &str,
        product_id: &str,
        quantity: u64,
    ) -> Result<CartItem, CartsServiceError> {
        if quantity == 0 {
            return Err(CartsServiceError::InvalidQuantity);
        }

        let product = self.catalog.get_product(product_id).await?;

        let mut carts = self.carts.write().await;
        let items = carts.get_mut(cart_id).ok_or(CartsServiceError::NotFound)?;

        if let Some(existing) = items.iter_mut().find(|item| item.product_id == product_id) {
            existing.quantity = existing
                .quantity
                .checked_add(quantity)
                .ok_or_else(|| CartsServiceError::QuantityOverflow(product_id.to_string()))?;

            debug!(cart_id, product_id, quantity = existing.quantity, "merged cart line");

            return Ok(existing.clone());
        }

        let item = CartItem {
            product_id: product.id,
            quantity,
            name: product.name,
            price: product.price,
            picture: product.picture,
        };

        debug!(cart_id, product_id, quantity, "added cart line");

        items.push(item.clone());

        Ok(item)
    }

    async fn get_items(&self, cart_id: &str) -> Result<Vec<CartItem>, CartsServiceError> {
        self.carts
            .read()
            .await
            .get(cart_id)
            .cloned()
            .ok_or(CartsServiceError::NotFound)
    }

    async fn update_item_quantity(
        &self,
        cart_id: &str,
        product_id: &str,
        quantity: u64,
    ) -> Result<(), CartsServiceError> {
        if quantity == 0 {
            return Err(CartsServiceError::InvalidQuantity);
        }

        let mut carts = self.carts.write().await;
        let items = carts.get_mut(cart_id).ok_or(CartsServiceError::NotFound)?;

        if let Some(item) = items.iter_mut().find(|item| item.product_id == product_id) {
            item.quantity = quantity;
        }

        Ok(())
    }

    async fn remove_item(&self, cart_id: &str, product_id: &str) -> Result<(), CartsServiceError> {
        let mut carts = self.carts.write().await;
        let items = carts.get_mut(cart_id).ok_or(CartsServiceError::NotFound)?;

        items.retain(|item| item.product_id != product_id);

        Ok(())
    }

    async fn remove_items(
        &self,
        cart_id: &str,
        items: &[CartItem],
    ) -> Result<(), CartsServiceError> {
        let mut carts = self.carts.write().await;
        let lines = carts.get_mut(cart_id).ok_or(CartsServiceError::NotFound)?;

        for removed in items {
            if let Some(line) = lines
                .iter_mut()
                .find(|line| line.product_id == removed.product_id)
            {
                line.quantity = line.quantity.saturating_sub(removed.quantity);
            }
        }

        lines.retain(|line| line.quantity > 0);

        debug!(cart_id, remaining = lines.len(), "removed checked out lines");

        Ok(())
    }

    async fn empty_cart(&self, cart_id: &str) -> Result<(), CartsServiceError> {
        let mut carts = self.carts.write().await;

        carts
            .get_mut(cart_id)
            .ok_or(CartsServiceError::NotFound)?
            .clear();

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Creates a new, empty cart.
    async fn create_cart(&self, cart_id: &str) -> Result<(), CartsServiceError>;

    /// Add `quantity` units of a catalog product to the cart.
    ///
    /// Adding a product already in the cart raises the quantity of its line.
    async fn add_item(
        &self,
        cart_id: &str,
        product_id: &str,
        quantity: u64,
    ) -> Result<CartItem, CartsServiceError>;

    /// Lines in the order they were first added.
    async fn get_items(&self, cart_id: &str) -> Result<Vec<CartItem>, CartsServiceError>;

    /// Set the quantity of a line. Unknown products are ignored.
    async fn update_item_quantity(
        &self,
        cart_id: &str,
        product_id: &str,
        quantity: u64,
    ) -> Result<(), CartsServiceError>;

    /// Remove a line.
    async fn remove_item(&self, cart_id: &str, product_id: &str) -> Result<(), CartsServiceError>;

    /// Take `items` out of the cart, lowering each matching line by the given quantity.
    ///
    /// Lines that reach zero are dropped. Lines not in `items` are kept.
    async fn remove_items(
        &self,
        cart_id: &str,
        items: &[CartItem],
    ) -> Result<(), CartsServiceError>;

    /// Remove every line.
    async fn empty_cart(&self, cart_id: &str) -> Result<(), CartsServiceError>;
}
