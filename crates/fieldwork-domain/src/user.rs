//! User accounts and roles.
//!
//! Credential verification lives in the external authentication service;
//! this module only models the account row the hierarchy references via
//! `owner_id`, plus the role the verifier asserts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::UserId;

/// Account role asserted by the external authentication service.
///
/// Roles do not widen the ownership rule: study mutation stays restricted
/// to the owning researcher. `Admin` only unlocks the audit read path.
///
/// # Examples
///
/// ```
/// use fieldwork_domain::Role;
///
/// assert!(Role::Admin.is_admin());
/// assert!(!Role::Researcher.is_admin());
/// assert_eq!(Role::parse("ADMIN"), Some(Role::Admin));
/// ```
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Publishes studies and manages their schedules.
    #[default]
    Researcher,

    /// Platform operator; may read audit paths for any study.
    Admin,
}

impl Role {
    /// Check for the administrator role.
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }

    /// Parse a role from its string representation (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "researcher" => Some(Self::Researcher),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }

    /// Lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Researcher => "researcher",
            Self::Admin => "admin",
        }
    }
}

/// A registered account that can own studies.
///
/// The `credential_hash` is an opaque digest produced and checked by the
/// external authentication service; the core stores it but never inspects
/// it. Email uniqueness among non-deleted users is enforced by the store
/// at creation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Store-assigned identifier.
    pub id: UserId,

    /// Login email, unique among non-deleted users.
    pub email: String,

    /// Opaque credential digest owned by the external authentication
    /// service. Never serialized into read responses.
    #[serde(skip_serializing, default)]
    pub credential_hash: String,

    /// Name shown to participants and collaborators.
    pub display_name: String,

    /// Account role.
    pub role: Role,

    /// When the account was created.
    pub created_at: DateTime<Utc>,

    /// Soft-delete marker; `None` means live.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl User {
    /// Materialize an account from a validated draft and a store-assigned
    /// id.
    pub fn new(id: UserId, draft: NewUser) -> Self {
        Self {
            id,
            email: draft.email,
            credential_hash: draft.credential_hash,
            display_name: draft.display_name,
            role: draft.role,
            created_at: Utc::now(),
            deleted_at: None,
        }
    }

    /// Whether the row itself carries a soft-delete marker.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Draft for registering an account.
///
/// # Examples
///
/// ```
/// use fieldwork_domain::{NewUser, Role};
///
/// let draft = NewUser::new("ada@example.com", "$argon2id$...", "Ada")
///     .with_role(Role::Admin);
/// assert!(draft.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    /// Login email.
    pub email: String,

    /// Credential digest handed over by the external authentication
    /// service.
    pub credential_hash: String,

    /// Display name.
    pub display_name: String,

    /// Account role; defaults to [`Role::Researcher`].
    #[serde(default)]
    pub role: Role,
}

impl NewUser {
    /// Create a researcher draft.
    pub fn new(
        email: impl Into<String>,
        credential_hash: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            credential_hash: credential_hash.into(),
            display_name: display_name.into(),
            role: Role::Researcher,
        }
    }

    /// Override the role.
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    /// Reject empty required fields.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.email.trim().is_empty() {
            return Err(ValidationError::EmptyEmail);
        }
        if self.display_name.trim().is_empty() {
            return Err(ValidationError::EmptyDisplayName);
        }
        Ok(())
    }
}
