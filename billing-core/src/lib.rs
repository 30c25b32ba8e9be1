//! billing-core: Shared infrastructure for the billing backend crates.
pub mod config;
pub mod error;
pub mod observability;

pub use anyhow;
pub use serde;
pub use tracing;
