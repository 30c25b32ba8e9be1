//! Domain models for invoicing-core.

mod computation;
mod counter;
mod line_item;
mod tax;

pub use computation::InvoiceComputation;
pub use counter::InvoiceCounter;
pub use line_item::{LineItemRequest, PricedLineItem};
pub use tax::{AdditionalCharges, TaxConfiguration};
