//! Dates

use jiff::{Timestamp, tz::TimeZone};

/// Rendered when an order has no timestamp.
pub const MISSING_DATE: &str = "N/A";

/// Formats an order timestamp in US long form, e.g. `October 19, 2026 at 03:04 PM`.
pub fn format_order_date(timestamp: Option<Timestamp>, tz: &TimeZone) -> String {
    let Some(timestamp) = timestamp else {
        return MISSING_DATE.to_string();
    };

    timestamp
        .to_zoned(tz.clone())
        .strftime("%B %-d, %Y at %I:%M %p")
        .to_string()
}
