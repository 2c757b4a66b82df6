//! Verified caller identity.
//!
//! Credential verification, token parsing, and session management live in
//! the external authentication service. By the time a request reaches
//! this crate, that service has already established who the caller is;
//! what arrives here is the minimal verified principal.

use serde::{Deserialize, Serialize};

use fieldwork_domain::{Role, UserId};

/// The verified principal attached to an authenticated request.
///
/// # Examples
///
/// ```
/// use fieldwork_domain::{Role, UserId};
/// use fieldwork_service::Identity;
///
/// let caller = Identity::new(UserId::new(1), "ada@example.com", Role::Researcher);
/// assert!(!caller.is_admin());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    /// The verified account id.
    pub user_id: UserId,

    /// Email as asserted by the verifier.
    pub email: String,

    /// Role as asserted by the verifier.
    pub role: Role,
}

impl Identity {
    /// Build a principal from verifier output.
    pub fn new(user_id: UserId, email: impl Into<String>, role: Role) -> Self {
        Self {
            user_id,
            email: email.into(),
            role,
        }
    }

    /// Whether the principal carries the administrator role.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
