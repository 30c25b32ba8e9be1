use thiserror::Error;

/// Error taxonomy shared by the billing core crates.
///
/// `ValidationError`, `AllocationError` and `OverflowError` are the
/// domain kinds surfaced to the invoice-creation workflow; the rest
/// cover infrastructure failures. Errors propagate synchronously and
/// are never retried internally.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(anyhow::Error),

    #[error("Allocation error: {0}")]
    AllocationError(anyhow::Error),

    #[error("Invoice number overflow: {0} does not fit in 12 digits")]
    OverflowError(u64),

    #[error("Not found: {0}")]
    NotFound(anyhow::Error),

    #[error("Database error: {0}")]
    DatabaseError(anyhow::Error),

    #[error("Configuration error: {0}")]
    ConfigError(anyhow::Error),

    #[error("Internal error: {0}")]
    InternalError(#[from] anyhow::Error),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(anyhow::Error::new(err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(anyhow::Error::new(err))
    }
}
