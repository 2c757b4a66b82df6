//! # Fieldwork Access (Ownership Authorization)
//!
//! This crate provides the authorization gate for the Fieldwork
//! scheduling core: a pure capability check over (caller, action, study).
//!
//! ## Overview
//!
//! The system enforces exactly one ownership rule: a study's mutating
//! operations, and those of every session, slot, and booking beneath
//! it, are restricted to the study's creator. Reads are public and
//! never consult this crate.
//!
//! ```text
//! Decision = authorize(caller_id, caller_role, action, &study)
//!
//! Allow  iff study.owner_id == caller_id
//!        or  (role == Admin and action == Audit)
//! ```
//!
//! ## Design
//!
//! The gate is a function, not a policy store: it produces no side
//! effects, caches no prior decision, and is re-evaluated on every
//! mutating call with the study row the caller just resolved. Modeling
//! authorization as a capability check over (caller, resource) pairs
//! keeps "public" and "owned" resources out of the type hierarchy.
//!
//! ## Usage
//!
//! ```
//! use fieldwork_access::{authorize, StudyAction};
//! use fieldwork_domain::{NewStudy, Role, Study, StudyId, UserId};
//!
//! let owner = UserId::new(1);
//! let study = Study::new(StudyId::new(1), NewStudy::new(owner, "Pilot"));
//!
//! assert!(authorize(owner, Role::Researcher, StudyAction::Delete, &study).is_allowed());
//! ```

pub mod actions;
pub mod gate;

// Re-export main types for convenience
pub use actions::StudyAction;
pub use gate::{authorize, Decision, DenyReason};
