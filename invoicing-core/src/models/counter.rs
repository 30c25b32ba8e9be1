//! Persisted invoice sequence counter.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Single shared counter row backing invoice number allocation.
///
/// `current_value` is non-decreasing except via an explicit
/// administrative reset and is mutated only by the allocator.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct InvoiceCounter {
    pub counter_key: i64,
    pub current_value: i64,
    pub last_updated: DateTime<Utc>,
}
