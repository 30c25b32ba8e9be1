//! Services module for invoicing-core.

pub mod computation;
pub mod database;
pub mod sequence;

pub use computation::compute_invoice;
pub use database::Database;
pub use sequence::{format_invoice_number, SequenceAllocator};
