//! Per-invoice GST configuration and additional charges.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// GST settings applied at the invoice level, never per line.
///
/// Rates are percentages (9 means 9%). When `gst_applicable` is false
/// the rates are configuration-only and never applied. A missing rate
/// on an applicable invoice is treated as zero — observed behavior,
/// pending product-owner confirmation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaxConfiguration {
    pub gst_applicable: bool,
    pub cgst_rate: Option<Decimal>,
    pub sgst_rate: Option<Decimal>,
}

/// Flat charges added after tax, each with an optional free-text label
/// carried through unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdditionalCharges {
    pub transport_charges_label: Option<String>,
    pub transport_charges: Option<Decimal>,
    pub misc_charges_label: Option<String>,
    pub misc_charges: Option<Decimal>,
}
