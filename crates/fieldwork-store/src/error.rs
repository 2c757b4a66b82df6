//! Error types for store operations
//!
//! This module defines all error types that can occur while resolving,
//! mutating, or admitting into the study hierarchy, along with their
//! HTTP mappings for the routing layer that sits outside this core.

use thiserror::Error;

use fieldwork_domain::{EntityKind, ValidationError};

/// Store error types.
///
/// These cover the full taxonomy of the core: missing or suppressed
/// entities, rejected drafts, exhausted capacity, and storage faults.
/// Conflicts detected inside the atomic admission boundary surface as
/// [`StoreError::SlotFull`] and are never downgraded to a success.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Entity absent, soft-deleted, or suppressed by a deleted ancestor.
    #[error("{0} not found")]
    NotFound(EntityKind),

    /// A draft or patch failed validation; nothing was persisted.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The slot's capacity is exhausted.
    #[error("Slot is full")]
    SlotFull,

    /// A live user already holds this email.
    #[error("User already exists")]
    EmailInUse,

    /// Storage/infrastructure fault. Logged, never retried by the core
    /// itself; retry policy belongs to the caller.
    #[error("Storage error: {0}")]
    Internal(String),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

impl StoreError {
    /// Check if this error should be logged at error level.
    ///
    /// Capacity conflicts and missing entities are expected outcomes and
    /// should not be logged as errors.
    pub fn is_server_error(&self) -> bool {
        matches!(self, StoreError::Internal(_))
    }

    /// Get HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            StoreError::NotFound(_) => 404,
            StoreError::Validation(_) => 400,
            StoreError::SlotFull => 409,
            StoreError::EmailInUse => 409,
            StoreError::Internal(_) => 500,
        }
    }

    /// Get error code for API responses.
    pub fn error_code(&self) -> &'static str {
        match self {
            StoreError::NotFound(_) => "NOT_FOUND",
            StoreError::Validation(_) => "VALIDATION_FAILED",
            StoreError::SlotFull => "SLOT_FULL",
            StoreError::EmailInUse => "EMAIL_IN_USE",
            StoreError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_the_kind() {
        assert_eq!(
            StoreError::NotFound(EntityKind::TimeSlot).to_string(),
            "TimeSlot not found"
        );
        assert_eq!(
            StoreError::NotFound(EntityKind::Study).to_string(),
            "Study not found"
        );
    }

    #[test]
    fn test_http_mapping() {
        assert_eq!(StoreError::NotFound(EntityKind::Booking).status_code(), 404);
        assert_eq!(
            StoreError::Validation(ValidationError::InvalidCapacity).status_code(),
            400
        );
        assert_eq!(StoreError::SlotFull.status_code(), 409);
        assert_eq!(StoreError::EmailInUse.status_code(), 409);
        assert_eq!(StoreError::Internal("down".into()).status_code(), 500);
    }

    #[test]
    fn test_slot_full_body_text() {
        // The routing layer serializes this display string verbatim.
        assert_eq!(StoreError::SlotFull.to_string(), "Slot is full");
    }

    #[test]
    fn test_only_internal_is_server_error() {
        assert!(StoreError::Internal("io".into()).is_server_error());
        assert!(!StoreError::SlotFull.is_server_error());
        assert!(!StoreError::NotFound(EntityKind::User).is_server_error());
    }
}
