//! # Actions
//!
//! Defines the owner-gated operations on a study. Reads never appear
//! here: listing and viewing bypass the gate entirely.

use serde::{Deserialize, Serialize};

/// An operation on a study (or its descendants) that passes through the
/// authorization gate.
///
/// - **Update**: Edit the study's own fields
/// - **Delete**: Soft-delete the study or one of its descendants
/// - **ManageSchedule**: Create or modify sessions and time slots
/// - **Audit**: Read booking rows that default reads suppress
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum StudyAction {
    /// Edit the study's title or description.
    Update,

    /// Soft-delete the study or a descendant.
    Delete,

    /// Create, update, or delete sessions and time slots.
    ManageSchedule,

    /// Read suppressed booking history for the study's slots.
    Audit,
}

impl StudyAction {
    /// Whether the action mutates the hierarchy.
    ///
    /// `Audit` is the one gated read: it exposes rows the soft-delete
    /// cascade hides from default reads.
    pub fn is_mutation(&self) -> bool {
        !matches!(self, Self::Audit)
    }

    /// Lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Update => "update",
            Self::Delete => "delete",
            Self::ManageSchedule => "manage_schedule",
            Self::Audit => "audit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mutation_classification() {
        assert!(StudyAction::Update.is_mutation());
        assert!(StudyAction::Delete.is_mutation());
        assert!(StudyAction::ManageSchedule.is_mutation());
        assert!(!StudyAction::Audit.is_mutation());
    }

    #[test]
    fn test_as_str() {
        assert_eq!(StudyAction::ManageSchedule.as_str(), "manage_schedule");
        assert_eq!(StudyAction::Audit.as_str(), "audit");
    }
}
