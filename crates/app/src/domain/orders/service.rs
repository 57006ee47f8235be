//! Orders service.

use std::collections::HashMap;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use storefront::orders::Order;
use tokio::sync::RwLock;
use tracing::info;

use crate::domain::orders::{errors::OrdersServiceError, models::NewOrder};

/// In-memory order history keyed by orders id.
#[derive(Debug, Default)]
pub struct InMemoryOrdersService {
    orders: RwLock<HashMap<String, Vec<Order>>>,
}

impl InMemoryOrdersService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrdersService for InMemoryOrdersService {
    async fn create_orders(&self, orders_id: &str) -> Result<(), OrdersServiceError> {
        let mut orders = self.orders.write().await;

        if orders.contains_key(orders_id) {
            return Err(OrdersServiceError::AlreadyExists);
        }

        orders.insert(orders_id.to_string(), Vec::new());

        Ok(())
    }

    async fn add_order(
        &self,
        orders_id: &str,
        order: NewOrder,
    ) -> Result<Order, OrdersServiceError> {
        let mut orders = self.orders.write().await;
        let history = orders
            .get_mut(orders_id)
            .ok_or(OrdersServiceError::NotFound)?;

        let order = order.into_order(Timestamp::now());

        info!(orders_id, order_id = %order.order_id, total = %order.total, "order stored");

        history.push(order.clone());

        Ok(order)
    }

    async fn get_orders(&self, orders_id: &str) -> Result<Vec<Order>, OrdersServiceError> {
        self.orders
            .read()
            .await
            .get(orders_id)
            .cloned()
            .ok_or(OrdersServiceError::NotFound)
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Creates a new, empty order history.
    async fn create_orders(&self, orders_id: &str) -> Result<(), OrdersServiceError>;

    /// Append an order, stamping it with the current time if it has none.
    async fn add_order(&self, orders_id: &str, order: NewOrder)
    -> Result<Order, OrdersServiceError>;

    /// Orders in the order they were placed.
    async fn get_orders(&self, orders_id: &str) -> Result<Vec<Order>, OrdersServiceError>;
}

#[cfg(test)]
mod tests {
    use storefront::{orders::Address, prices::Cents};
    use testresult::TestResult;

    use super::*;

    fn new_order(order_id: &str, created_at: Option<Timestamp>) -> NewOrder {
        NewOrder {
            order_id: order_id.to_string(),
            items: Vec::new(),
            transaction_id: "txn_123456".to_string(),
            subtotal: Cents::new(1000),
            shipping_cost: Cents::new(500),
            total: Cents::new(1500),
            tracking_number: "TRACK1234567890".to_string(),
            carrier: "Mock Shipping Co.".to_string(),
            created_at,
            shipping_address: Address::default(),
        }
    }

    #[tokio::test]
    async fn orders_are_returned_in_insertion_order() -> TestResult {
        let orders = InMemoryOrdersService::new();

        orders.create_orders("user").await?;
        orders.add_order("user", new_order("order_2", None)).await?;
        orders.add_order("user", new_order("order_1", None)).await?;

        let ids: Vec<String> = orders
            .get_orders("user")
            .await?
            .into_iter()
            .map(|order| order.order_id)
            .collect();

        assert_eq!(ids, ["order_2", "order_1"]);

        Ok(())
    }

    #[tokio::test]
    async fn missing_created_at_is_filled_with_now() -> TestResult {
        let orders = InMemoryOrdersService::new();
        let before = Timestamp::now();

        orders.create_orders("user").await?;

        let stored = orders.add_order("user", new_order("order_1", None)).await?;

        assert!(stored.created_at >= before);

        Ok(())
    }

    #[tokio::test]
    async fn given_created_at_is_kept() -> TestResult {
        let orders = InMemoryOrdersService::new();
        let placed = Timestamp::from_second(1_700_000_000)?;

        orders.create_orders("user").await?;

        let stored = orders
            .add_order("user", new_order("order_1", Some(placed)))
            .await?;

        assert_eq!(stored.created_at, placed);

        Ok(())
    }

    #[tokio::test]
    async fn unknown_history_is_not_found() {
        let orders = InMemoryOrdersService::new();

        assert_eq!(orders.get_orders("nobody").await, Err(OrdersServiceError::NotFound));
        assert_eq!(
            orders.add_order("nobody", new_order("order_1", None)).await,
            Err(OrdersServiceError::NotFound)
        );
    }

    #[tokio::test]
    async fn create_orders_twice_fails() -> TestResult {
        let orders = InMemoryOrdersService::new();

        orders.create_orders("user").await?;

        assert_eq!(orders.create_orders("user").await, Err(OrdersServiceError::AlreadyExists));

        Ok(())
    }
}
