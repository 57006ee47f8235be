//! Storefront application: data services, checkout, UI links and the CLI plumbing.

pub mod checkout;
pub mod config;
pub mod context;
pub mod domain;
pub mod intents;
pub mod links;
pub mod observability;
pub mod pages;
