//! Orders service errors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrdersServiceError {
    #[error("order list already exists")]
    AlreadyExists,

    #[error("order list not found")]
    NotFound,
}
