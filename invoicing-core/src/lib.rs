//! invoicing-core: the billing backend's invoice core.
//!
//! Two independent pieces, composed by the (external) invoice-creation
//! workflow:
//!
//! - [`services::SequenceAllocator`] hands out unique, strictly
//!   increasing invoice sequence values from a shared persisted
//!   counter.
//! - [`services::compute_invoice`] deterministically prices a list of
//!   line items under a per-invoice GST configuration and additional
//!   charges.
//!
//! Persistence of the resulting invoice, catalog lookups and any
//! transport surface belong to the caller.

pub mod models;
pub mod services;
