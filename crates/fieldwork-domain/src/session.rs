//! Session domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::{SessionId, StudyId};

/// A dated occurrence of a study at a location.
///
/// Sessions exist to group time slots; they carry no capacity of their
/// own. The parent study must be live when the session is created.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Store-assigned identifier.
    pub id: SessionId,

    /// Parent study.
    pub study_id: StudyId,

    /// Where the session takes place.
    pub location: String,

    /// The day the session occurs.
    pub date: DateTime<Utc>,

    /// When the session was created.
    pub created_at: DateTime<Utc>,

    /// Soft-delete marker; `None` means live.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Materialize a session from a validated draft and a store-assigned
    /// id.
    pub fn new(id: SessionId, draft: NewSession) -> Self {
        Self {
            id,
            study_id: draft.study_id,
            location: draft.location,
            date: draft.date,
            created_at: Utc::now(),
            deleted_at: None,
        }
    }

    /// Whether the row itself carries a soft-delete marker.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Draft for creating a session under a study.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use fieldwork_domain::{NewSession, StudyId};
///
/// let date = Utc.with_ymd_and_hms(2025, 1, 15, 0, 0, 0).unwrap();
/// let draft = NewSession::new(StudyId::new(1), "Room A123", date);
/// assert!(draft.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSession {
    /// Parent study.
    pub study_id: StudyId,

    /// Location of the session.
    pub location: String,

    /// The day the session occurs.
    pub date: DateTime<Utc>,
}

impl NewSession {
    /// Create a session draft.
    pub fn new(study_id: StudyId, location: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self {
            study_id,
            location: location.into(),
            date,
        }
    }

    /// Reject an empty location.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.location.trim().is_empty() {
            return Err(ValidationError::EmptyLocation);
        }
        Ok(())
    }
}
