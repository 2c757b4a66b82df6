//! Validation errors for entity drafts and patches.
//!
//! Every draft is validated before the store mutates anything, so a failed
//! validation never leaves a partial row behind.

use thiserror::Error;

/// A rejected draft or patch field.
///
/// Variants carry just enough context for an API layer to render a 400
/// response body; they never reference storage state except where the
/// invariant itself is stateful (capacity versus booked count).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Study title is empty or whitespace.
    #[error("title must not be empty")]
    EmptyTitle,

    /// User display name is empty or whitespace.
    #[error("display name must not be empty")]
    EmptyDisplayName,

    /// User email is empty or whitespace.
    #[error("email must not be empty")]
    EmptyEmail,

    /// Session location is empty or whitespace.
    #[error("location must not be empty")]
    EmptyLocation,

    /// Booking participant name is empty or whitespace.
    #[error("participant name must not be empty")]
    EmptyParticipantName,

    /// Slot window is inverted or empty (`end_time <= start_time`).
    #[error("end time must be strictly after start time")]
    InvalidTimeWindow,

    /// Slot capacity is zero.
    #[error("capacity must be at least 1")]
    InvalidCapacity,

    /// A capacity update would drop below the live booked count.
    #[error("capacity {requested} is below the current booked count {booked}")]
    CapacityBelowBooked {
        /// The capacity the caller asked for.
        requested: u32,
        /// How many live bookings the slot already holds.
        booked: u32,
    },
}
