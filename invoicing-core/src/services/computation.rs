//! Invoice financial computation.
//!
//! Pure and stateless: the same inputs always produce the same
//! breakdown, with no I/O and no hidden clock or randomness. GST is
//! applied per invoice on the subtotal, never per line, and every
//! named monetary derivation is rounded half-up to two decimal places.

use billing_core::error::AppError;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{
    AdditionalCharges, InvoiceComputation, LineItemRequest, PricedLineItem, TaxConfiguration,
};

/// Monetary values carry two fractional digits.
const MONEY_SCALE: u32 = 2;

fn to_money(value: Decimal) -> Decimal {
    let mut money = value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    // Rounding never raises the scale, so a whole-number input would
    // otherwise serialize without its fractional digits.
    money.rescale(MONEY_SCALE);
    money
}

/// Price an invoice: resolve serial numbers, compute line totals, the
/// subtotal, the CGST/SGST breakdown and the grand total.
///
/// `product_id` on each item is treated as opaque; checking it against
/// a catalog is the calling workflow's responsibility. A missing
/// CGST/SGST rate on a GST-applicable invoice is applied as zero.
pub fn compute_invoice(
    items: &[LineItemRequest],
    tax: &TaxConfiguration,
    charges: &AdditionalCharges,
) -> Result<InvoiceComputation, AppError> {
    if items.is_empty() {
        return Err(AppError::ValidationError(anyhow::anyhow!(
            "Invoice items are required"
        )));
    }
    validate_tax(tax)?;
    let transport_charges = validate_charge(charges.transport_charges, "Transport charges")?;
    let misc_charges = validate_charge(charges.misc_charges, "Miscellaneous charges")?;

    let mut line_items = Vec::with_capacity(items.len());
    let mut subtotal = Decimal::ZERO;

    for (position, item) in items.iter().enumerate() {
        let serial_number = resolve_serial_number(item, position)?;
        validate_item(item, serial_number)?;

        // Quantity is integral and the unit price carries two decimals,
        // so the product is exact; rounding only pins the scale.
        let line_total = Decimal::from(item.quantity)
            .checked_mul(item.unit_price)
            .map(to_money)
            .ok_or_else(|| {
                AppError::ValidationError(anyhow::anyhow!(
                    "Line total overflow for item {}",
                    serial_number
                ))
            })?;

        subtotal = subtotal.checked_add(line_total).ok_or_else(|| {
            AppError::ValidationError(anyhow::anyhow!("Invoice subtotal overflow"))
        })?;

        line_items.push(PricedLineItem {
            serial_number,
            product_id: item.product_id,
            name: item.name.clone(),
            description: item.description.clone(),
            quantity: item.quantity,
            unit_price: item.unit_price,
            line_total,
            is_custom: item.is_custom,
        });
    }

    let (cgst_amount, sgst_amount) = if tax.gst_applicable {
        (
            gst_portion(subtotal, tax.cgst_rate, "CGST")?,
            gst_portion(subtotal, tax.sgst_rate, "SGST")?,
        )
    } else {
        // Rates are configuration-only when GST is inapplicable.
        (to_money(Decimal::ZERO), to_money(Decimal::ZERO))
    };
    let total_gst_amount = cgst_amount.checked_add(sgst_amount).ok_or_else(|| {
        AppError::ValidationError(anyhow::anyhow!("Total GST amount overflow"))
    })?;

    let total_amount = subtotal
        .checked_add(total_gst_amount)
        .and_then(|t| t.checked_add(transport_charges))
        .and_then(|t| t.checked_add(misc_charges))
        .ok_or_else(|| AppError::ValidationError(anyhow::anyhow!("Invoice total overflow")))?;

    Ok(InvoiceComputation {
        line_items,
        subtotal,
        cgst_amount,
        sgst_amount,
        total_gst_amount,
        transport_charges_label: charges.transport_charges_label.clone(),
        transport_charges,
        misc_charges_label: charges.misc_charges_label.clone(),
        misc_charges,
        total_amount,
    })
}

fn resolve_serial_number(item: &LineItemRequest, position: usize) -> Result<u32, AppError> {
    match item.serial_number {
        Some(0) => Err(AppError::ValidationError(anyhow::anyhow!(
            "Serial number must be positive"
        ))),
        Some(serial) => Ok(serial),
        None => Ok(position as u32 + 1),
    }
}

fn validate_item(item: &LineItemRequest, serial_number: u32) -> Result<(), AppError> {
    if item.name.trim().is_empty() {
        return Err(AppError::ValidationError(anyhow::anyhow!(
            "Product name is required for item {}",
            serial_number
        )));
    }
    if item.quantity < 1 {
        return Err(AppError::ValidationError(anyhow::anyhow!(
            "Quantity must be at least 1 for item {}",
            serial_number
        )));
    }
    if item.unit_price < Decimal::ZERO {
        return Err(AppError::ValidationError(anyhow::anyhow!(
            "Unit price must be greater than or equal to 0 for item {}",
            serial_number
        )));
    }
    Ok(())
}

fn validate_tax(tax: &TaxConfiguration) -> Result<(), AppError> {
    for (rate, name) in [(tax.cgst_rate, "CGST"), (tax.sgst_rate, "SGST")] {
        if let Some(rate) = rate {
            if rate < Decimal::ZERO {
                return Err(AppError::ValidationError(anyhow::anyhow!(
                    "{} rate must be greater than or equal to 0",
                    name
                )));
            }
        }
    }
    Ok(())
}

fn validate_charge(charge: Option<Decimal>, name: &str) -> Result<Decimal, AppError> {
    let charge = charge.unwrap_or(Decimal::ZERO);
    if charge < Decimal::ZERO {
        return Err(AppError::ValidationError(anyhow::anyhow!(
            "{} must be greater than or equal to 0",
            name
        )));
    }
    Ok(to_money(charge))
}

/// `round(subtotal * rate / 100, 2, HALF_UP)`; a missing rate is zero.
fn gst_portion(
    subtotal: Decimal,
    rate: Option<Decimal>,
    name: &str,
) -> Result<Decimal, AppError> {
    let rate = rate.unwrap_or(Decimal::ZERO);
    subtotal
        .checked_mul(rate)
        .and_then(|raw| raw.checked_div(Decimal::ONE_HUNDRED))
        .map(to_money)
        .ok_or_else(|| AppError::ValidationError(anyhow::anyhow!("{} amount overflow", name)))
}
