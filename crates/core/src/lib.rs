//! Storefront
//!
//! Display logic for a small storefront: price formatting, product search, cart and order
//! models, the order confirmation token, and the page view-models rendered from them.

pub mod cart;
pub mod dates;
pub mod fixtures;
pub mod intents;
pub mod orders;
pub mod prelude;
pub mod prices;
pub mod pricing;
pub mod products;
pub mod views;
