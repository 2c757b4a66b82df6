//! Booking domain model.
//!
//! A booking is a participant's claim on one unit of a slot's capacity.
//! Participants are anonymous callers; a booking carries their contact
//! details and consent timestamp instead of an account reference. Once
//! created, a booking row is immutable except for its soft-delete marker.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::{BookingId, SlotId};

/// A participant's claim on one unit of a slot's capacity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// Store-assigned identifier.
    pub id: BookingId,

    /// The slot this booking occupies.
    pub slot_id: SlotId,

    /// Participant's name.
    pub participant_name: String,

    /// Participant's contact email, if given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participant_email: Option<String>,

    /// When the participant consented to the study terms. Set at creation
    /// and never cleared.
    pub consent_at: DateTime<Utc>,

    /// When the booking was admitted.
    pub created_at: DateTime<Utc>,

    /// Soft-delete marker; `None` means live.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Booking {
    /// Materialize a booking from a validated draft and a store-assigned
    /// id.
    pub fn new(id: BookingId, draft: NewBooking) -> Self {
        Self {
            id,
            slot_id: draft.slot_id,
            participant_name: draft.participant_name,
            participant_email: draft.participant_email,
            consent_at: draft.consent_at,
            created_at: Utc::now(),
            deleted_at: None,
        }
    }

    /// Whether the row itself carries a soft-delete marker.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Draft for claiming a slot.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use fieldwork_domain::{NewBooking, SlotId};
///
/// let draft = NewBooking::new(SlotId::new(1), "Alex", Utc::now())
///     .with_email("alex@example.com");
/// assert!(draft.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    /// The slot to claim.
    pub slot_id: SlotId,

    /// Participant's name.
    pub participant_name: String,

    /// Participant's contact email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participant_email: Option<String>,

    /// Consent timestamp; required at admission.
    pub consent_at: DateTime<Utc>,
}

impl NewBooking {
    /// Create a booking draft without a contact email.
    pub fn new(
        slot_id: SlotId,
        participant_name: impl Into<String>,
        consent_at: DateTime<Utc>,
    ) -> Self {
        Self {
            slot_id,
            participant_name: participant_name.into(),
            participant_email: None,
            consent_at,
        }
    }

    /// Attach a contact email.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.participant_email = Some(email.into());
        self
    }

    /// Reject an empty participant name.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.participant_name.trim().is_empty() {
            return Err(ValidationError::EmptyParticipantName);
        }
        Ok(())
    }
}
