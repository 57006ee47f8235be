//! Integration tests for the order confirmation token as seen from the confirmation page.

use testresult::TestResult;

use storefront::prelude::*;
use storefront::views::confirmation::ConfirmedOrder;

fn summaries() -> Vec<OrderSummary> {
    let ids = ["A1", "order_123456", "", "ünïcödé-#42"];
    let last_fours = ["4242", "0000", "12", ""];
    let amounts = [0, 1, 99, 150, 100_000, 4_294_967_297, u64::MAX];
    let tracking = ["TRK123", "TRACK9999999999", "", "with spaces & symbols?="];

    ids.iter()
        .zip(last_fours)
        .zip(tracking)
        .flat_map(|((id, last_four), tracking_number)| {
            amounts.iter().map(move |&amount| OrderSummary {
                order_id: (*id).to_string(),
                last_four: last_four.to_string(),
                subtotal: Cents::new(amount),
                shipping: Cents::new(amount / 3),
                total: Cents::new(amount / 7),
                tracking_number: tracking_number.to_string(),
            })
        })
        .collect()
}

#[test]
fn pipe_free_summaries_round_trip() -> TestResult {
    for summary in summaries() {
        let token = encode_order_summary(&summary);

        assert_eq!(
            decode_order_summary(&token),
            DecodedOrderSummary::from(summary.clone()),
            "best-effort decode of {token:?}"
        );
        assert_eq!(decode_order_summary_strict(&token)?, summary, "strict decode of {token:?}");
    }

    Ok(())
}

#[test]
fn example_order_renders_expected_prices() -> TestResult {
    let summary = OrderSummary {
        order_id: "A1".to_string(),
        last_four: "4242".to_string(),
        subtotal: Cents::new(1000),
        shipping: Cents::new(500),
        total: Cents::new(1500),
        tracking_number: "TRK123".to_string(),
    };

    let token = encode_order_summary(&summary);

    assert_eq!(token, "A1|4242|1000|500|1500|TRK123");

    let OrderConfirmationView::Confirmed(ConfirmedOrder {
        subtotal,
        shipping,
        total,
        ..
    }) = OrderConfirmationView::from_query(Some(&token))
    else {
        return Err("a non-empty token should confirm".into());
    };

    assert_eq!(subtotal, "$10.00");
    assert_eq!(shipping, "$5.00");
    assert_eq!(total, "$15.00");

    Ok(())
}

#[test]
fn untrusted_tokens_never_fail_to_render() -> TestResult {
    let tokens = [
        "ORDER1|1234|abc|500|1500|TRACK1",
        "ORDER1|1234",
        "|||||",
        "||||||||||",
        "a|b|-5|+5| 7|t",
        "a|b|999999999999999999999999|1|2|t",
        "no delimiters at all",
    ];

    for token in tokens {
        let mut out = Vec::new();

        OrderConfirmationView::from_query(Some(token)).write_to(&mut out)?;

        let text = String::from_utf8(out)?;

        assert!(text.contains("Order Confirmed!"), "{token:?} rendered {text}");
    }

    Ok(())
}

#[test]
fn decoding_is_deterministic() {
    let token = "ORDER1|1234|12x|500|1500|TRACK1";

    assert_eq!(decode_order_summary(token), decode_order_summary(token));
}
