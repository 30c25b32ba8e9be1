//! Result of pricing an invoice.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::PricedLineItem;

/// Fully priced, internally consistent invoice breakdown.
///
/// Produced fresh on every computation call and owned by the caller.
/// Invariants: `subtotal` is the sum of the line totals,
/// `total_gst_amount = cgst_amount + sgst_amount`, and
/// `total_amount = subtotal + total_gst_amount + transport_charges +
/// misc_charges`. All amounts carry two fractional digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceComputation {
    pub line_items: Vec<PricedLineItem>,
    pub subtotal: Decimal,
    pub cgst_amount: Decimal,
    pub sgst_amount: Decimal,
    pub total_gst_amount: Decimal,
    pub transport_charges_label: Option<String>,
    pub transport_charges: Decimal,
    pub misc_charges_label: Option<String>,
    pub misc_charges: Decimal,
    pub total_amount: Decimal,
}
