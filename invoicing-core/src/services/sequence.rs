//! Invoice sequence allocation.
//!
//! A single persisted counter hands out the visible invoice numbers.
//! Every increment runs as one upsert statement, so the database's
//! write lock on the row is the critical section: no two callers ever
//! receive the same value, and a failed or timed-out call leaves the
//! stored value untouched. Values reflect commit order, not call-issue
//! order, and a value handed out is consumed for good — uniqueness is
//! guaranteed, gap-freedom only outside explicit resets.

use billing_core::error::AppError;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::{info, instrument};

use crate::models::InvoiceCounter;

/// Singleton key for the global invoice counter row.
const COUNTER_KEY: i64 = 0;

/// Largest value renderable as a 12-digit invoice number.
const MAX_FORMATTABLE: u64 = 999_999_999_999;

/// Renders a sequence value as a fixed-width, zero-padded 12-digit
/// invoice number, e.g. `42` becomes `"000000000042"`.
pub fn format_invoice_number(value: u64) -> Result<String, AppError> {
    if value > MAX_FORMATTABLE {
        return Err(AppError::OverflowError(value));
    }
    Ok(format!("{:012}", value))
}

/// Hands out strictly increasing sequence values from the shared
/// persisted counter.
#[derive(Clone)]
pub struct SequenceAllocator {
    pool: SqlitePool,
}

impl SequenceAllocator {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Allocate the next sequence value.
    ///
    /// The counter row is created lazily at zero, so the first call on
    /// a fresh database returns 1. All-or-nothing: on any failure the
    /// stored value is unchanged.
    #[instrument(skip(self))]
    pub async fn allocate_next(&self) -> Result<u64, AppError> {
        let value: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO invoice_counter (counter_key, current_value, last_updated)
            VALUES ($1, 1, $2)
            ON CONFLICT(counter_key) DO UPDATE
            SET current_value = current_value + 1,
                last_updated = excluded.last_updated
            RETURNING current_value
            "#,
        )
        .bind(COUNTER_KEY)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::AllocationError(anyhow::anyhow!("Failed to allocate sequence value: {}", e))
        })?;

        info!(sequence = value, "Sequence value allocated");

        Ok(value as u64)
    }

    /// Last committed counter value, without mutating it.
    ///
    /// Returns 0 before the first allocation. This is a plain snapshot
    /// read; it may trail an allocation that is committing concurrently.
    #[instrument(skip(self))]
    pub async fn current_value(&self) -> Result<u64, AppError> {
        let counter = self.counter().await?;
        Ok(counter.map(|c| c.current_value as u64).unwrap_or(0))
    }

    /// Administrative read of the raw counter row.
    pub async fn counter(&self) -> Result<Option<InvoiceCounter>, AppError> {
        sqlx::query_as::<_, InvoiceCounter>(
            r#"
            SELECT counter_key, current_value, last_updated
            FROM invoice_counter
            WHERE counter_key = $1
            "#,
        )
        .bind(COUNTER_KEY)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::DatabaseError(anyhow::anyhow!("Failed to read sequence counter: {}", e))
        })
    }

    /// Unconditionally overwrite the stored value. Administrative
    /// correction only; the next allocation returns `new_value + 1`.
    #[instrument(skip(self))]
    pub async fn reset(&self, new_value: u64) -> Result<(), AppError> {
        let stored = i64::try_from(new_value).map_err(|_| {
            AppError::ValidationError(anyhow::anyhow!(
                "Reset value {} exceeds the storable counter range",
                new_value
            ))
        })?;

        sqlx::query(
            r#"
            INSERT INTO invoice_counter (counter_key, current_value, last_updated)
            VALUES ($1, $2, $3)
            ON CONFLICT(counter_key) DO UPDATE
            SET current_value = excluded.current_value,
                last_updated = excluded.last_updated
            "#,
        )
        .bind(COUNTER_KEY)
        .bind(stored)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::AllocationError(anyhow::anyhow!("Failed to reset sequence counter: {}", e))
        })?;

        info!(sequence = new_value, "Sequence counter reset");

        Ok(())
    }

    /// Allocate and format the next invoice number in one step.
    #[instrument(skip(self))]
    pub async fn next_invoice_number(&self) -> Result<String, AppError> {
        let value = self.allocate_next().await?;
        format_invoice_number(value)
    }

    /// Format the number the next allocation would produce, without
    /// allocating it. Advisory only: a concurrent allocation can claim
    /// the previewed number first.
    pub async fn peek_next(&self) -> Result<String, AppError> {
        let current = self.current_value().await?;
        format_invoice_number(current + 1)
    }
}
