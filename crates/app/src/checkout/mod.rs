//! Checkout

pub mod errors;
pub mod models;
pub mod providers;
pub mod service;

pub use errors::{CheckoutError, ProviderError};
pub use models::*;
pub use providers::*;
pub use service::*;
