//! Order confirmation token.
//!
//! An [`OrderSummary`] travels from checkout to the confirmation page as a single string of
//! six `|`-separated fields:
//!
//! ```text
//! order_id|last_four|subtotal|shipping|total|tracking_number
//! ```
//!
//! Amounts are written as decimal cents. Fields are not escaped, so a field containing `|`
//! cannot be recovered; such a token decodes with its fields shifted.

use thiserror::Error;

use crate::{
    orders::OrderSummary,
    prices::{Cents, format_price, parse_cents_lenient, parse_cents_strict},
};

/// Field separator.
pub const DELIMITER: char = '|';

/// Number of fields in a well-formed token.
pub const FIELD_COUNT: usize = 6;

/// Errors raised by [`decode_order_summary_strict`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderTokenError {
    /// The token does not have exactly [`FIELD_COUNT`] fields.
    #[error("expected {FIELD_COUNT} fields in order token, found {found}")]
    FieldCount {
        /// Number of fields present
        found: usize,
    },

    /// An amount field is not a plain decimal number.
    #[error("invalid {field} amount in order token: {value:?}")]
    InvalidAmount {
        /// Which amount was invalid
        field: &'static str,
        /// The raw field value
        value: String,
    },
}

/// A best-effort decoding of an order token.
///
/// Amounts that were missing or unparseable are `None`; they display as `$0.00`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedOrderSummary {
    /// Order identifier, empty when missing
    pub order_id: String,

    /// Last four card characters, empty when missing
    pub last_four: String,

    /// Order subtotal
    pub subtotal: Option<Cents>,

    /// Shipping charge
    pub shipping: Option<Cents>,

    /// Order total
    pub total: Option<Cents>,

    /// Tracking number, empty when missing
    pub tracking_number: String,
}

impl DecodedOrderSummary {
    /// Formatted subtotal.
    pub fn subtotal_display(&self) -> String {
        format_price(self.subtotal)
    }

    /// Formatted shipping charge.
    pub fn shipping_display(&self) -> String {
        format_price(self.shipping)
    }

    /// Formatted total.
    pub fn total_display(&self) -> String {
        format_price(self.total)
    }

    /// The summary, if every amount was present.
    pub fn complete(self) -> Option<OrderSummary> {
        Some(OrderSummary {
            subtotal: self.subtotal?,
            shipping: self.shipping?,
            total: self.total?,
            order_id: self.order_id,
            last_four: self.last_four,
            tracking_number: self.tracking_number,
        })
    }
}

impl From<OrderSummary> for DecodedOrderSummary {
    fn from(summary: OrderSummary) -> Self {
        Self {
            order_id: summary.order_id,
            last_four: summary.last_four,
            subtotal: Some(summary.subtotal),
            shipping: Some(summary.shipping),
            total: Some(summary.total),
            tracking_number: summary.tracking_number,
        }
    }
}

/// Encodes `summary` as a token.
pub fn encode_order_summary(summary: &OrderSummary) -> String {
    format!(
        "{}{DELIMITER}{}{DELIMITER}{}{DELIMITER}{}{DELIMITER}{}{DELIMITER}{}",
        summary.order_id,
        summary.last_four,
        *summary.subtotal,
        *summary.shipping,
        *summary.total,
        summary.tracking_number,
    )
}

/// Decodes a token without ever failing.
///
/// Missing trailing fields are empty, fields past the sixth are ignored, and amounts keep
/// only their leading digits.
pub fn decode_order_summary(token: &str) -> DecodedOrderSummary {
    let mut fields = token.split(DELIMITER);
    let mut next = || fields.next().unwrap_or_default();

    let order_id = next().to_string();
    let last_four = next().to_string();
    let subtotal = parse_cents_lenient(next());
    let shipping = parse_cents_lenient(next());
    let total = parse_cents_lenient(next());
    let tracking_number = next().to_string();

    DecodedOrderSummary {
        order_id,
        last_four,
        subtotal,
        shipping,
        total,
        tracking_number,
    }
}

/// Decodes a token, rejecting anything that is not exactly six fields with numeric amounts.
///
/// # Errors
///
/// - [`OrderTokenError::FieldCount`]: the token has too few or too many fields.
/// - [`OrderTokenError::InvalidAmount`]: an amount is empty or contains a non-digit.
pub fn decode_order_summary_strict(token: &str) -> Result<OrderSummary, OrderTokenError> {
    let fields: Vec<&str> = token.split(DELIMITER).collect();

    let [order_id, last_four, subtotal, shipping, total, tracking_number] = fields.as_slice()
    else {
        return Err(OrderTokenError::FieldCount {
            found: fields.len(),
        });
    };

    Ok(OrderSummary {
        order_id: (*order_id).to_string(),
        last_four: (*last_four).to_string(),
        subtotal: strict_amount("subtotal", subtotal)?,
        shipping: strict_amount("shipping", shipping)?,
        total: strict_amount("total", total)?,
        tracking_number: (*tracking_number).to_string(),
    })
}

fn strict_amount(field: &'static str, value: &str) -> Result<Cents, OrderTokenError> {
    parse_cents_strict(value).ok_or_else(|| OrderTokenError::InvalidAmount {
        field,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn summary() -> OrderSummary {
        OrderSummary {
            order_id: "A1".to_string(),
            last_four: "4242".to_string(),
            subtotal: Cents::new(1000),
            shipping: Cents::new(500),
            total: Cents::new(1500),
            tracking_number: "TRK123".to_string(),
        }
    }

    #[test]
    fn encodes_fields_in_order() {
        assert_eq!(encode_order_summary(&summary()), "A1|4242|1000|500|1500|TRK123");
    }

    #[test]
    fn decodes_well_formed_token() {
        let decoded = decode_order_summary("A1|4242|1000|500|1500|TRK123");

        assert_eq!(decoded, DecodedOrderSummary::from(summary()));
        assert_eq!(decoded.subtotal_display(), "$10.00");
        assert_eq!(decoded.shipping_display(), "$5.00");
        assert_eq!(decoded.total_display(), "$15.00");
    }

    #[test]
    fn non_numeric_amount_degrades_to_zero_display() {
        let decoded = decode_order_summary("ORDER1|1234|abc|500|1500|TRACK1");

        assert_eq!(decoded.subtotal, None);
        assert_eq!(decoded.subtotal_display(), "$0.00");
        assert_eq!(decoded.shipping_display(), "$5.00");
        assert_eq!(decoded.tracking_number, "TRACK1");
    }

    #[test]
    fn amount_with_trailing_garbage_keeps_prefix() {
        let decoded = decode_order_summary("O|1234|12ab|0|12|T");

        assert_eq!(decoded.subtotal, Some(Cents::new(12)));
        assert_eq!(decoded.shipping, Some(Cents::ZERO));
    }

    #[test]
    fn short_token_leaves_trailing_fields_empty() {
        let decoded = decode_order_summary("ORDER1|1234");

        assert_eq!(decoded.order_id, "ORDER1");
        assert_eq!(decoded.last_four, "1234");
        assert_eq!(decoded.subtotal, None);
        assert_eq!(decoded.total_display(), "$0.00");
        assert_eq!(decoded.tracking_number, "");
    }

    #[test]
    fn extra_fields_are_ignored() {
        let decoded = decode_order_summary("A1|4242|1000|500|1500|TRK123|extra|more");

        assert_eq!(decoded, DecodedOrderSummary::from(summary()));
    }

    #[test]
    fn embedded_delimiter_shifts_fields() {
        let mut shifted = summary();
        shifted.order_id = "A|1".to_string();

        let decoded = decode_order_summary(&encode_order_summary(&shifted));

        assert_eq!(decoded.order_id, "A");
        assert_eq!(decoded.last_four, "1");
        assert_eq!(decoded.subtotal, Some(Cents::new(4242)));
        assert_eq!(decoded.tracking_number, "1500");
    }

    #[test]
    fn incomplete_decoding_has_no_summary() {
        assert_eq!(decode_order_summary("A1|4242").complete(), None);
        assert_eq!(
            decode_order_summary("A1|4242|1000|500|1500|TRK123").complete(),
            Some(summary())
        );
    }

    #[test]
    fn strict_round_trip() -> TestResult {
        let decoded = decode_order_summary_strict(&encode_order_summary(&summary()))?;

        assert_eq!(decoded, summary());

        Ok(())
    }

    #[test]
    fn strict_rejects_wrong_field_count() {
        assert_eq!(
            decode_order_summary_strict("ORDER1|1234"),
            Err(OrderTokenError::FieldCount { found: 2 })
        );
        assert_eq!(
            decode_order_summary_strict("a|b|1|2|3|t|x"),
            Err(OrderTokenError::FieldCount { found: 7 })
        );
    }

    #[test]
    fn strict_rejects_non_numeric_amounts() {
        assert_eq!(
            decode_order_summary_strict("ORDER1|1234|abc|500|1500|TRACK1"),
            Err(OrderTokenError::InvalidAmount {
                field: "subtotal",
                value: "abc".to_string(),
            })
        );
        assert_eq!(
            decode_order_summary_strict("ORDER1|1234|100|500|15x|TRACK1"),
            Err(OrderTokenError::InvalidAmount {
                field: "total",
                value: "15x".to_string(),
            })
        );
    }
}
