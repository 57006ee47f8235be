//! Checkout errors.

use thiserror::Error;

use crate::domain::{carts::CartsServiceError, orders::OrdersServiceError};

/// Failure reported by a shipping, payment or fulfilment provider.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProviderError {
    #[error("payment declined: {0}")]
    Declined(String),

    #[error("provider unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("cart is empty")]
    EmptyCart,

    #[error("order amount overflows")]
    Overflow,

    #[error("shipping quote failed")]
    Shipping(#[source] ProviderError),

    #[error("payment failed")]
    Payment(#[source] ProviderError),

    #[error("fulfilment failed")]
    Fulfilment(#[source] ProviderError),

    #[error(transparent)]
    Carts(#[from] CartsServiceError),

    #[error(transparent)]
    Orders(#[from] OrdersServiceError),
}
