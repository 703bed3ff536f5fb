//! Error types for the exchange service.

/// Store-level errors (data access failures).
///
/// `NotFound` is an expected signal: rate resolution falls through to the
/// next lookup strategy on it and aborts on everything else.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Conflict: {0}")]
    Conflict(String),
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => AppError::NotFound("Resource not found".into()),
            StoreError::Conflict(e) => AppError::Conflict(e),
            StoreError::Database(e) => AppError::Internal(e),
        }
    }
}
