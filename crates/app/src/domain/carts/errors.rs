//! Carts service errors.

use thiserror::Error;

use crate::domain::catalog::CatalogServiceError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartsServiceError {
    #[error("cart already exists")]
    AlreadyExists,

    #[error("cart not found")]
    NotFound,

    #[error("product not found: {0}")]
    ProductNotFound(String),

    #[error("quantity must be at least one")]
    InvalidQuantity,

    #[error("quantity overflows for product {0}")]
    QuantityOverflow(String),

    #[error("catalog error")]
    Catalog(#[source] CatalogServiceError),
}

impl From<CatalogServiceError> for CartsServiceError {
    fn from(error: CatalogServiceError) -> Self {
        match error {
            CatalogServiceError::NotFound(product_id) => Self::ProductNotFound(product_id),
            other @ CatalogServiceError::MissingId => Self::Catalog(other),
        }
    }
}
