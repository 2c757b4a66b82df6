//! # Fieldwork Store
//!
//! This crate provides storage for the Fieldwork scheduling core: the
//! Study→Session→TimeSlot→Booking hierarchy, the capacity-admission
//! decision, and the soft-delete cascade.
//!
//! ## Overview
//!
//! The fieldwork-store crate handles:
//! - **Hierarchy storage**: the [`ScheduleStore`] trait and its in-memory
//!   implementation, [`MemoryStore`]
//! - **Capacity admission**: the atomic check-and-insert that keeps a
//!   slot's live bookings at or below its capacity under concurrency
//! - **Soft-delete cascade**: one `deleted_at` write per deletion, with
//!   descendant invisibility computed by an ancestor walk at read time
//! - **Errors**: the [`StoreError`] taxonomy with HTTP mappings for the
//!   routing layer outside this core
//!
//! ## Admission model
//!
//! ```text
//! admit(draft):
//!   take write guard            ─┐
//!   resolve live slot            │ one atomic unit per store,
//!   count live bookings          │ therefore per slot
//!   count < capacity? insert    ─┘
//! ```
//!
//! The guard spans the check and the act, so two concurrent attempts on a
//! slot's last seat can never both succeed, and a request aborted before
//! the guard leaves nothing behind. Admissions on different slots carry
//! no ordering relation beyond sharing the store lock.
//!
//! ## Deletion model
//!
//! `soft_delete` marks only the target row. Reads treat a row as deleted
//! when any ancestor is deleted, which keeps deletion O(1) writes and
//! pushes the cost to an ancestor-chain check on reads. Suppressed
//! booking rows stay unmarked and reachable through the explicit audit
//! path.
//!
//! ## Usage
//!
//! ```no_run
//! use chrono::{Duration, TimeZone, Utc};
//! use fieldwork_domain::{NewBooking, NewSession, NewStudy, NewTimeSlot, NewUser};
//! use fieldwork_store::{MemoryStore, ScheduleStore};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), fieldwork_store::StoreError> {
//! let store = MemoryStore::new();
//!
//! let owner = store.create_user(NewUser::new("ada@example.com", "hash", "Ada")).await?;
//! let study = store.create_study(NewStudy::new(owner.id, "Usability study")).await?;
//!
//! let date = Utc.with_ymd_and_hms(2025, 1, 15, 0, 0, 0).unwrap();
//! let session = store.create_session(NewSession::new(study.id, "Room A123", date)).await?;
//! let slot = store
//!     .create_slot(NewTimeSlot::new(
//!         session.id,
//!         date + Duration::hours(9),
//!         date + Duration::hours(9) + Duration::minutes(30),
//!         1,
//!     ))
//!     .await?;
//!
//! let booking = store.admit_booking(NewBooking::new(slot.id, "Alex", Utc::now())).await?;
//! assert!(store.availability(slot.id).await?.is_full);
//! # let _ = booking;
//! # Ok(())
//! # }
//! ```

mod admission;
mod tables;

pub mod error;
pub mod memory;
pub mod store;

// Re-export main types for convenience
pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use store::ScheduleStore;
