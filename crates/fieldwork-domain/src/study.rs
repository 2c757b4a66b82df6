//! Study domain model.
//!
//! A study is the top-level entity of the hierarchy: it is owned by a
//! single researcher and fans out into sessions, slots, and bookings.
//! Mutation of a study and everything beneath it is restricted to the
//! owner by the authorization gate; reads are public.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::{StudyId, UserId};

/// A published research project.
///
/// # Examples
///
/// ```
/// use fieldwork_domain::{NewStudy, Study, StudyId, UserId};
///
/// let draft = NewStudy::new(UserId::new(1), "Usability study")
///     .with_description("Testing the new onboarding flow");
/// let study = Study::new(StudyId::new(1), draft);
/// assert_eq!(study.owner_id, UserId::new(1));
/// assert!(study.deleted_at.is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Study {
    /// Store-assigned identifier.
    pub id: StudyId,

    /// Human-readable title.
    pub title: String,

    /// Optional free-text description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The researcher who created the study and may mutate it.
    pub owner_id: UserId,

    /// When the study was created.
    pub created_at: DateTime<Utc>,

    /// Soft-delete marker; `None` means live.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Study {
    /// Materialize a study from a validated draft and a store-assigned id.
    pub fn new(id: StudyId, draft: NewStudy) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            owner_id: draft.owner_id,
            created_at: Utc::now(),
            deleted_at: None,
        }
    }

    /// Whether the row itself carries a soft-delete marker.
    ///
    /// This is the row-local flag only; effective visibility of
    /// descendants is computed by the store's ancestor walk.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Draft for creating a study.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStudy {
    /// The creating researcher, who becomes the owner.
    pub owner_id: UserId,

    /// Study title.
    pub title: String,

    /// Optional description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl NewStudy {
    /// Create a draft without a description.
    pub fn new(owner_id: UserId, title: impl Into<String>) -> Self {
        Self {
            owner_id,
            title: title.into(),
            description: None,
        }
    }

    /// Attach a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Reject an empty title.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        Ok(())
    }
}

/// Partial update of a study's caller-editable fields.
///
/// `None` leaves the field unchanged. Ownership and timestamps are never
/// patchable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyPatch {
    /// Replacement title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Replacement description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl StudyPatch {
    /// A patch that changes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replace the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Reject an empty replacement title.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(title) = &self.title {
            if title.trim().is_empty() {
                return Err(ValidationError::EmptyTitle);
            }
        }
        Ok(())
    }

    /// Apply the patch to a study row.
    pub fn apply(self, study: &mut Study) {
        if let Some(title) = self.title {
            study.title = title;
        }
        if let Some(description) = self.description {
            study.description = Some(description);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_study_creation() {
        let draft = NewStudy::new(UserId::new(4), "Interview round")
            .with_description("Moderated interviews");
        let study = Study::new(StudyId::new(2), draft);

        assert_eq!(study.title, "Interview round");
        assert_eq!(study.description.as_deref(), Some("Moderated interviews"));
        assert_eq!(study.owner_id, UserId::new(4));
        assert!(!study.is_deleted());
    }

    #[test]
    fn test_empty_title_rejected() {
        assert_eq!(
            NewStudy::new(UserId::new(1), "   ").validate(),
            Err(ValidationError::EmptyTitle)
        );
        assert_eq!(
            StudyPatch::new().title("").validate(),
            Err(ValidationError::EmptyTitle)
        );
    }

    #[test]
    fn test_patch_apply_leaves_unset_fields() {
        let mut study = Study::new(
            StudyId::new(1),
            NewStudy::new(UserId::new(1), "Original").with_description("Keep me"),
        );

        StudyPatch::new().title("Renamed").apply(&mut study);

        assert_eq!(study.title, "Renamed");
        assert_eq!(study.description.as_deref(), Some("Keep me"));
    }

    #[test]
    fn test_serialized_shape_is_camel_case() {
        let study = Study::new(StudyId::new(1), NewStudy::new(UserId::new(2), "Shape"));
        let json = serde_json::to_value(&study).unwrap();

        assert_eq!(json["ownerId"], 2);
        assert!(json.get("createdAt").is_some());
        assert!(json.get("deletedAt").is_none());
    }
}
