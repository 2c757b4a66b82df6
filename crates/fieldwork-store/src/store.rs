//! The hierarchy store abstraction.
//!
//! [`ScheduleStore`] is the seam between the scheduling core and whatever
//! holds the entity tables. Implementations own two disciplines the rest
//! of the system relies on:
//!
//! - **Read-time cascade**: every read treats an entity as deleted if any
//!   ancestor is deleted; descendants are never physically flagged.
//! - **Atomic admission**: the capacity check and the booking insert form
//!   one admission unit per slot, so concurrent attempts can never push a
//!   slot past its capacity.
//!
//! Authorization is deliberately absent here: the store answers existence
//! and ownership questions but never gates callers. That is the service
//! layer's job.

use async_trait::async_trait;

use fieldwork_domain::{
    Booking, BookingId, EntityRef, NewBooking, NewSession, NewStudy, NewTimeSlot, NewUser,
    Session, SessionId, SlotAvailability, SlotId, SlotPatch, Study, StudyId, StudyPatch,
    TimeSlot, User, UserId,
};

use crate::error::StoreResult;

/// Storage for the Study→Session→TimeSlot→Booking hierarchy.
///
/// All getters resolve an entity only if it and its entire ancestor chain
/// are live; list operations filter the same way and return children in
/// creation order, except slots, which are ordered by `start_time` for
/// display. Create operations validate their draft before touching any
/// table and fail with `NotFound` when the parent is unresolvable.
#[async_trait]
pub trait ScheduleStore: Send + Sync {
    // ── Users ────────────────────────────────────────────────────────

    /// Register an account. Fails with `EmailInUse` if a live user
    /// already holds the email.
    async fn create_user(&self, draft: NewUser) -> StoreResult<User>;

    /// Resolve a live user.
    async fn user(&self, id: UserId) -> StoreResult<User>;

    // ── Studies ──────────────────────────────────────────────────────

    /// Create a study. The owner must resolve to a live user.
    async fn create_study(&self, draft: NewStudy) -> StoreResult<Study>;

    /// Resolve a live study.
    async fn study(&self, id: StudyId) -> StoreResult<Study>;

    /// All live studies, in creation order.
    async fn studies(&self) -> StoreResult<Vec<Study>>;

    /// Live studies owned by one researcher, in creation order.
    async fn studies_by_owner(&self, owner: UserId) -> StoreResult<Vec<Study>>;

    /// Patch a study's editable fields.
    async fn update_study(&self, id: StudyId, patch: StudyPatch) -> StoreResult<Study>;

    // ── Sessions ─────────────────────────────────────────────────────

    /// Create a session. The parent study must be resolvable and live.
    async fn create_session(&self, draft: NewSession) -> StoreResult<Session>;

    /// Resolve a live session (its study must be live too).
    async fn session(&self, id: SessionId) -> StoreResult<Session>;

    /// Live sessions of a study, in creation order. Fails with
    /// `NotFound` when the study itself is unresolvable.
    async fn sessions_for_study(&self, study: StudyId) -> StoreResult<Vec<Session>>;

    // ── Time slots ───────────────────────────────────────────────────

    /// Create a slot. The draft's window and capacity are validated
    /// first; the parent session must be resolvable and live.
    async fn create_slot(&self, draft: NewTimeSlot) -> StoreResult<TimeSlot>;

    /// Resolve a live slot (its whole ancestor chain must be live).
    async fn slot(&self, id: SlotId) -> StoreResult<TimeSlot>;

    /// Live slots of a session, ordered by `start_time`.
    async fn slots_for_session(&self, session: SessionId) -> StoreResult<Vec<TimeSlot>>;

    /// Patch a slot's window or capacity. The merged window must stay
    /// valid and the capacity may never drop below the live booked
    /// count.
    async fn update_slot(&self, id: SlotId, patch: SlotPatch) -> StoreResult<TimeSlot>;

    /// The slot together with its derived occupancy numbers.
    async fn availability(&self, id: SlotId) -> StoreResult<SlotAvailability>;

    // ── Bookings ─────────────────────────────────────────────────────

    /// Admit a booking into its slot.
    ///
    /// The capacity check and the insert execute as one atomic admission
    /// unit: of N concurrent attempts against a slot with C seats free,
    /// exactly `min(N, C)` succeed and the rest fail with `SlotFull`. A
    /// slot suppressed by a deleted ancestor fails with `NotFound`,
    /// never `SlotFull`.
    async fn admit_booking(&self, draft: NewBooking) -> StoreResult<Booking>;

    /// Resolve a live booking.
    async fn booking(&self, id: BookingId) -> StoreResult<Booking>;

    /// Live bookings of a slot, in admission order.
    async fn bookings_for_slot(&self, slot: SlotId) -> StoreResult<Vec<Booking>>;

    /// Every booking row of a slot, including soft-deleted rows and rows
    /// suppressed by a deleted ancestor. This is the explicit audit
    /// path; default reads never expose these rows.
    async fn audit_bookings_for_slot(&self, slot: SlotId) -> StoreResult<Vec<Booking>>;

    // ── Hierarchy ────────────────────────────────────────────────────

    /// Resolve the study that governs mutation of `target`, walking the
    /// ancestor chain. For a study this is the study itself; for a user
    /// (which sits above the chain) this is always `NotFound`.
    async fn owning_study(&self, target: EntityRef) -> StoreResult<Study>;

    /// Like [`owning_study`](Self::owning_study), but ignoring
    /// soft-delete suppression: rows only need to exist. This serves the
    /// audit path, where the owner of an already-deleted study must
    /// still be identifiable; it must never gate a mutation.
    async fn owning_study_of_record(&self, target: EntityRef) -> StoreResult<Study>;

    /// Soft-delete one row: set `deleted_at` on the target only.
    ///
    /// Descendants are left untouched; their invisibility is computed at
    /// read time from the ancestor chain. Fails with `NotFound` if the
    /// target is already absent or suppressed.
    async fn soft_delete(&self, target: EntityRef) -> StoreResult<()>;
}
