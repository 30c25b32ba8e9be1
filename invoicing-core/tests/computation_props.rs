//! Property tests for the invoice computation engine.

use invoicing_core::models::{AdditionalCharges, LineItemRequest, TaxConfiguration};
use invoicing_core::services::compute_invoice;
use proptest::prelude::*;
use rust_decimal::Decimal;

fn arb_line_item() -> impl Strategy<Value = LineItemRequest> {
    (
        1i64..1_000,
        0i64..1_000_000,
        proptest::option::of(1u32..500),
        any::<bool>(),
    )
        .prop_map(
            |(quantity, price_cents, serial_number, is_custom)| LineItemRequest {
                serial_number,
                product_id: None,
                name: "Widget".to_string(),
                description: None,
                quantity,
                unit_price: Decimal::new(price_cents, 2),
                is_custom,
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    /// Property: the published breakdown is internally consistent for
    /// any valid input — the subtotal is the sum of the line totals and
    /// the grand total re-derives from its parts.
    #[test]
    fn breakdown_is_internally_consistent(
        items in prop::collection::vec(arb_line_item(), 1..12),
        gst_applicable in any::<bool>(),
        cgst_bps in proptest::option::of(0i64..3_000),
        sgst_bps in proptest::option::of(0i64..3_000),
        transport_cents in proptest::option::of(0i64..100_000),
        misc_cents in proptest::option::of(0i64..100_000),
    ) {
        let tax = TaxConfiguration {
            gst_applicable,
            cgst_rate: cgst_bps.map(|bps| Decimal::new(bps, 2)),
            sgst_rate: sgst_bps.map(|bps| Decimal::new(bps, 2)),
        };
        let charges = AdditionalCharges {
            transport_charges: transport_cents.map(|cents| Decimal::new(cents, 2)),
            misc_charges: misc_cents.map(|cents| Decimal::new(cents, 2)),
            ..AdditionalCharges::default()
        };

        let result = compute_invoice(&items, &tax, &charges).unwrap();

        let line_sum: Decimal = result.line_items.iter().map(|li| li.line_total).sum();
        prop_assert_eq!(result.subtotal, line_sum);
        prop_assert_eq!(result.total_gst_amount, result.cgst_amount + result.sgst_amount);
        prop_assert_eq!(
            result.total_amount,
            result.subtotal + result.total_gst_amount
                + result.transport_charges + result.misc_charges
        );

        if !gst_applicable {
            prop_assert_eq!(result.total_gst_amount, Decimal::ZERO);
        }
    }

    /// Property: every input item comes back priced, in input order,
    /// with absent serial numbers resolved to their 1-based position.
    #[test]
    fn serial_numbers_resolve_positionally(
        items in prop::collection::vec(arb_line_item(), 1..12),
    ) {
        let result = compute_invoice(&items, &TaxConfiguration::default(), &AdditionalCharges::default()).unwrap();

        prop_assert_eq!(result.line_items.len(), items.len());
        for (position, (input, priced)) in items.iter().zip(result.line_items.iter()).enumerate() {
            let expected = input.serial_number.unwrap_or(position as u32 + 1);
            prop_assert_eq!(priced.serial_number, expected);
            prop_assert_eq!(priced.quantity, input.quantity);
            prop_assert_eq!(priced.line_total, Decimal::from(input.quantity) * input.unit_price);
        }
    }
}
