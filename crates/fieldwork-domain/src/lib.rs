//! # Fieldwork Domain Model
//!
//! This crate provides the study hierarchy domain model for the Fieldwork
//! participant-scheduling core, shared by the store, access, and service
//! crates.
//!
//! ## Overview
//!
//! The fieldwork-domain crate handles:
//! - **Users**: Researcher and administrator accounts that own studies
//! - **Studies**: Top-level research projects
//! - **Sessions**: Dated occurrences of a study at a location
//! - **TimeSlots**: Capacity-bounded time windows within a session
//! - **Bookings**: Participant claims on one unit of a slot's capacity
//! - **Ids**: Opaque, store-assigned typed sequence numbers
//! - **Validation**: Draft/patch checks rejected before any storage write
//!
//! ## Architecture
//!
//! ```text
//! User
//!   └─ Study (owner_id)
//!        └─ Session
//!             └─ TimeSlot (capacity)
//!                  └─ Booking (consent_at)
//! ```
//!
//! Every entity below `User` carries a `deleted_at` soft-delete marker;
//! effective visibility of a row also depends on its ancestors, which the
//! store computes at read time.
//!
//! ## Usage
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use fieldwork_domain::{NewStudy, NewTimeSlot, SessionId, Study, StudyId, UserId};
//!
//! // Draft a study for a researcher
//! let draft = NewStudy::new(UserId::new(1), "Usability study");
//! assert!(draft.validate().is_ok());
//!
//! // Materialize it the way a store would, with an assigned id
//! let study = Study::new(StudyId::new(1), draft);
//! assert_eq!(study.owner_id, UserId::new(1));
//!
//! // Slot drafts enforce the window and capacity invariants
//! let start = Utc.with_ymd_and_hms(2025, 1, 15, 9, 0, 0).unwrap();
//! let end = Utc.with_ymd_and_hms(2025, 1, 15, 9, 30, 0).unwrap();
//! assert!(NewTimeSlot::new(SessionId::new(1), start, end, 1).validate().is_ok());
//! ```
//!
//! ## Crate Integration
//!
//! This crate is designed to work with:
//! - `fieldwork-access`: Ownership authorization over studies
//! - `fieldwork-store`: Hierarchy storage, admission, soft-delete cascade
//! - `fieldwork-service`: The composing scheduler

pub mod booking;
pub mod error;
pub mod id;
pub mod session;
pub mod slot;
pub mod study;
pub mod user;

// Re-export main types for convenience
pub use booking::{Booking, NewBooking};
pub use error::ValidationError;
pub use id::{BookingId, EntityKind, EntityRef, SessionId, SlotId, StudyId, UserId};
pub use session::{NewSession, Session};
pub use slot::{NewTimeSlot, SlotAvailability, SlotPatch, TimeSlot};
pub use study::{NewStudy, Study, StudyPatch};
pub use user::{NewUser, Role, User};
