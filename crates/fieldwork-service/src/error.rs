//! Error types for scheduler operations
//!
//! The service layer adds exactly one failure mode of its own, the
//! authorization gate turning a caller away, and passes every store
//! error through unchanged.

use thiserror::Error;

use fieldwork_access::DenyReason;
use fieldwork_store::StoreError;

/// Scheduler error types.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The authorization gate denied the operation.
    #[error("Forbidden: {0}")]
    Forbidden(DenyReason),

    /// A store-level failure (not found, validation, capacity, fault).
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result type for scheduler operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    /// Check if this error should be logged at error level.
    pub fn is_server_error(&self) -> bool {
        match self {
            ServiceError::Forbidden(_) => false,
            ServiceError::Store(e) => e.is_server_error(),
        }
    }

    /// Get HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            ServiceError::Forbidden(_) => 403,
            ServiceError::Store(e) => e.status_code(),
        }
    }

    /// Get error code for API responses.
    pub fn error_code(&self) -> &'static str {
        match self {
            ServiceError::Forbidden(_) => "FORBIDDEN",
            ServiceError::Store(e) => e.error_code(),
        }
    }
}
