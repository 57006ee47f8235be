//! Storefront prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{CartItem, cart_total},
    dates::format_order_date,
    fixtures::{Catalog, FixtureError},
    intents::{Intent, IntentError, IntentMessage, IntentSink},
    orders::{
        Address, Order, OrderSummary,
        token::{
            DecodedOrderSummary, OrderTokenError, decode_order_summary,
            decode_order_summary_strict, encode_order_summary,
        },
    },
    prices::{Cents, format_price, parse_cents_lenient, parse_cents_strict},
    pricing::{TotalPriceError, format_money, line_total, total_price},
    products::{Product, ProductQuery, filter_products},
    views::{
        cart::CartView, confirmation::OrderConfirmationView, history::OrderHistoryView,
        listing::ProductListingView,
    },
};
