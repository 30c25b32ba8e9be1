//! Line item models for invoicing-core.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Raw line item supplied by the invoice-creation workflow.
///
/// Exists only for the duration of a computation call. `product_id` is
/// opaque here; whether it points at a real catalog entry is the
/// caller's concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItemRequest {
    /// Explicit ordering hint (S.No.). Resolved to the 1-based input
    /// position when absent.
    pub serial_number: Option<u32>,
    /// Catalog reference; absent for custom items.
    pub product_id: Option<Uuid>,
    pub name: String,
    /// Particulars shown on the printed invoice.
    pub description: Option<String>,
    pub quantity: i64,
    pub unit_price: Decimal,
    /// True when no catalog product backs this line.
    pub is_custom: bool,
}

/// Line item with its serial number resolved and amount computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricedLineItem {
    pub serial_number: u32,
    pub product_id: Option<Uuid>,
    pub name: String,
    pub description: Option<String>,
    pub quantity: i64,
    pub unit_price: Decimal,
    /// `quantity * unit_price` at two decimal places.
    pub line_total: Decimal,
    pub is_custom: bool,
}
