//! Catalog service errors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogServiceError {
    #[error("product not found: {0}")]
    NotFound(String),

    #[error("product id cannot be empty")]
    MissingId,
}
