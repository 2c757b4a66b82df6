//! # Fieldwork Service
//!
//! This crate composes the Fieldwork scheduling core: verified caller
//! identity, the ownership gate, the hierarchy store, capacity
//! admission, and the soft-delete cascade, behind one [`Scheduler`]
//! facade that a routing layer can call directly.
//!
//! ## Control flow
//!
//! ```text
//! request
//!   ├─ owner-scoped mutation ─→ Authorization Gate ─→ Hierarchy Store
//!   ├─ booking creation ──────→ Capacity Admission (atomic unit)
//!   ├─ deletion ──────────────→ Soft-Delete Cascade (one row marked)
//!   └─ read ──────────────────→ Hierarchy Store (cascade-filtered)
//! ```
//!
//! The gate is re-evaluated on every mutating call; reads bypass it,
//! since studies and their schedules are publicly viewable. Participants
//! are anonymous: booking creation and cancellation carry no identity.
//!
//! ## Usage
//!
//! ```no_run
//! use chrono::{Duration, TimeZone, Utc};
//! use fieldwork_domain::{NewSession, NewTimeSlot, NewUser};
//! use fieldwork_service::{Identity, Scheduler};
//! use fieldwork_store::MemoryStore;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), fieldwork_service::ServiceError> {
//! let scheduler = Scheduler::new(MemoryStore::new());
//!
//! // The external authentication service verified this caller.
//! let account = scheduler
//!     .register_user(NewUser::new("ada@example.com", "hash", "Ada"))
//!     .await?;
//! let caller = Identity::new(account.id, account.email.clone(), account.role);
//!
//! let study = scheduler.create_study(&caller, "Usability study", None).await?;
//! let date = Utc.with_ymd_and_hms(2025, 1, 15, 0, 0, 0).unwrap();
//! let session = scheduler
//!     .create_session(&caller, NewSession::new(study.id, "Room A123", date))
//!     .await?;
//! let slot = scheduler
//!     .create_slot(
//!         &caller,
//!         NewTimeSlot::new(
//!             session.id,
//!             date + Duration::hours(9),
//!             date + Duration::hours(9) + Duration::minutes(30),
//!             1,
//!         ),
//!     )
//!     .await?;
//! # let _ = slot;
//! # Ok(())
//! # }
//! ```
//!
//! ## Crate Integration
//!
//! - `fieldwork-domain`: entity types and validation
//! - `fieldwork-access`: the pure authorization gate
//! - `fieldwork-store`: storage, admission, cascade

pub mod error;
pub mod identity;
pub mod service;

// Re-export main types for convenience
pub use error::{ServiceError, ServiceResult};
pub use identity::Identity;
pub use service::Scheduler;
