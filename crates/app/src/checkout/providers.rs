//! Shipping, payment and fulfilment providers.

use async_trait::async_trait;
use mockall::automock;
use rand::Rng;
use storefront::{cart::CartItem, orders::Address, prices::Cents};
use tracing::debug;

use crate::checkout::{
    errors::ProviderError,
    models::{Charge, PaymentCard, Shipment, ShippingQuote},
};

/// Carrier used by the simulated providers.
pub const MOCK_CARRIER: &str = "Mock Shipping Co.";

/// Base shipping charge in cents.
pub const BASE_SHIPPING: u64 = 500;

/// Shipping charge per weight unit in cents. Every line weighs two units.
pub const SHIPPING_PER_UNIT: u64 = 50;

const LINE_WEIGHT: u64 = 2;

#[automock]
#[async_trait]
pub trait ShippingProvider: Send + Sync {
    /// Price shipping `items` to `address`.
    async fn quote(
        &self,
        items: &[CartItem],
        address: &Address,
    ) -> Result<ShippingQuote, ProviderError>;
}

#[automock]
#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    /// Charge `amount` to `card`.
    async fn charge(&self, card: &PaymentCard, amount: Cents) -> Result<Charge, ProviderError>;
}

#[automock]
#[async_trait]
pub trait FulfillmentProvider: Send + Sync {
    /// Book shipment of `items` to `address`.
    async fn ship(&self, items: &[CartItem], address: &Address)
    -> Result<Shipment, ProviderError>;
}

#[automock]
pub trait OrderIdGenerator: Send + Sync {
    /// A new order identifier.
    fn next_order_id(&self) -> String;
}

/// Flat rate plus a charge per line.
#[derive(Debug, Default, Clone, Copy)]
pub struct FlatRateShipping;

#[async_trait]
impl ShippingProvider for FlatRateShipping {
    async fn quote(
        &self,
        items: &[CartItem],
        _address: &Address,
    ) -> Result<ShippingQuote, ProviderError> {
        let weight = u64::try_from(items.len())
            .ok()
            .and_then(|lines| lines.checked_mul(LINE_WEIGHT))
            .ok_or_else(|| ProviderError::Unavailable("too many lines".to_string()))?;

        let cost = weight
            .checked_mul(SHIPPING_PER_UNIT)
            .and_then(|per_unit| per_unit.checked_add(BASE_SHIPPING))
            .ok_or_else(|| ProviderError::Unavailable("too many lines".to_string()))?;

        let estimated_days = rand::thread_rng().gen_range(3..=7);

        debug!(weight, cost, estimated_days, "shipping quoted");

        Ok(ShippingQuote {
            cost: Cents::new(cost),
            carrier: MOCK_CARRIER.to_string(),
            estimated_days,
        })
    }
}

/// Accepts every card.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimulatedPayments;

#[async_trait]
impl PaymentProcessor for SimulatedPayments {
    async fn charge(&self, card: &PaymentCard, amount: Cents) -> Result<Charge, ProviderError> {
        let transaction_id = format!("txn_{}", rand::thread_rng().gen_range(100_000..=999_999));

        Ok(Charge {
            transaction_id,
            last_four: card.last_four().to_string(),
            amount,
        })
    }
}

/// Books every shipment with [`MOCK_CARRIER`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SimulatedFulfillment;

#[async_trait]
impl FulfillmentProvider for SimulatedFulfillment {
    async fn ship(
        &self,
        _items: &[CartItem],
        _address: &Address,
    ) -> Result<Shipment, ProviderError> {
        let tracking_number = format!(
            "TRACK{}",
            rand::thread_rng().gen_range(1_000_000_000_u64..=9_999_999_999)
        );

        Ok(Shipment {
            tracking_number,
            carrier: MOCK_CARRIER.to_string(),
        })
    }
}

/// `order_` followed by six random digits.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomOrderIds;

impl OrderIdGenerator for RandomOrderIds {
    fn next_order_id(&self) -> String {
        format!("order_{}", rand::thread_rng().gen_range(100_000..=999_999))
    }
}
