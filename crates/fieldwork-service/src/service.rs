//! The composing scheduler.
//!
//! `Scheduler` wires the control flow the crates beneath it deliberately
//! keep apart: a mutation first passes the authorization gate, then the
//! store resolves and validates parent references, then (for booking
//! creation) the admission controller decides, and soft deletion runs
//! the cascade. Reads go straight to the store; the gate never sees
//! them.

use tracing::{info, warn};

use fieldwork_access::{authorize, Decision, StudyAction};
use fieldwork_domain::{
    Booking, BookingId, EntityRef, NewBooking, NewSession, NewStudy, NewTimeSlot, NewUser,
    Session, SessionId, SlotAvailability, SlotId, SlotPatch, Study, StudyId, StudyPatch,
    TimeSlot, User,
};
use fieldwork_store::ScheduleStore;

use crate::error::{ServiceError, ServiceResult};
use crate::identity::Identity;

/// The scheduling core behind the REST surface.
///
/// Generic over the store so tests and single-process deployments can
/// run on [`MemoryStore`](fieldwork_store::MemoryStore) while other
/// backends implement [`ScheduleStore`] elsewhere.
#[derive(Debug)]
pub struct Scheduler<S> {
    store: S,
}

impl<S: ScheduleStore> Scheduler<S> {
    /// Wrap a store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Re-evaluate the gate for `action` against the study owning
    /// `target`. Resolution failures surface before authorization ones,
    /// so a suppressed target reads as absent rather than protected.
    async fn authorize_on(
        &self,
        caller: &Identity,
        action: StudyAction,
        target: EntityRef,
    ) -> ServiceResult<Study> {
        let study = self.store.owning_study(target).await?;
        self.check(caller, action, &study)
    }

    fn check(
        &self,
        caller: &Identity,
        action: StudyAction,
        study: &Study,
    ) -> ServiceResult<Study> {
        match authorize(caller.user_id, caller.role, action, study) {
            Decision::Allow => Ok(study.clone()),
            Decision::Deny(reason) => {
                warn!(
                    caller = %caller.user_id,
                    study = %study.id,
                    action = action.as_str(),
                    %reason,
                    "authorization denied"
                );
                Err(ServiceError::Forbidden(reason))
            }
        }
    }

    // ── Accounts ─────────────────────────────────────────────────────

    /// Register an account.
    ///
    /// The credential hash inside the draft comes from the external
    /// authentication service; this core only enforces email uniqueness
    /// among live users.
    pub async fn register_user(&self, draft: NewUser) -> ServiceResult<User> {
        let user = self.store.create_user(draft).await?;
        info!(user = %user.id, "user registered");
        Ok(user)
    }

    /// Resolve the caller's own account row.
    pub async fn current_user(&self, caller: &Identity) -> ServiceResult<User> {
        Ok(self.store.user(caller.user_id).await?)
    }

    // ── Public reads (no gate) ───────────────────────────────────────

    /// All live studies.
    pub async fn studies(&self) -> ServiceResult<Vec<Study>> {
        Ok(self.store.studies().await?)
    }

    /// One live study.
    pub async fn study(&self, id: StudyId) -> ServiceResult<Study> {
        Ok(self.store.study(id).await?)
    }

    /// One live session.
    pub async fn session(&self, id: SessionId) -> ServiceResult<Session> {
        Ok(self.store.session(id).await?)
    }

    /// Live sessions of a study.
    pub async fn sessions_for_study(&self, study: StudyId) -> ServiceResult<Vec<Session>> {
        Ok(self.store.sessions_for_study(study).await?)
    }

    /// Live slots of a session, in display order.
    pub async fn slots_for_session(&self, session: SessionId) -> ServiceResult<Vec<TimeSlot>> {
        Ok(self.store.slots_for_session(session).await?)
    }

    /// A slot with its derived occupancy numbers.
    pub async fn slot_availability(&self, slot: SlotId) -> ServiceResult<SlotAvailability> {
        Ok(self.store.availability(slot).await?)
    }

    /// Live bookings of a slot.
    pub async fn bookings_for_slot(&self, slot: SlotId) -> ServiceResult<Vec<Booking>> {
        Ok(self.store.bookings_for_slot(slot).await?)
    }

    // ── Caller-scoped reads ──────────────────────────────────────────

    /// Live studies owned by the caller.
    pub async fn my_studies(&self, caller: &Identity) -> ServiceResult<Vec<Study>> {
        Ok(self.store.studies_by_owner(caller.user_id).await?)
    }

    // ── Study mutation (owner-gated) ─────────────────────────────────

    /// Publish a study; the caller becomes its owner.
    pub async fn create_study(
        &self,
        caller: &Identity,
        title: impl Into<String> + Send,
        description: Option<String>,
    ) -> ServiceResult<Study> {
        let mut draft = NewStudy::new(caller.user_id, title);
        draft.description = description;
        let study = self.store.create_study(draft).await?;
        info!(study = %study.id, owner = %study.owner_id, "study created");
        Ok(study)
    }

    /// Edit a study's title or description.
    pub async fn update_study(
        &self,
        caller: &Identity,
        id: StudyId,
        patch: StudyPatch,
    ) -> ServiceResult<Study> {
        self.authorize_on(caller, StudyAction::Update, EntityRef::Study(id))
            .await?;
        let study = self.store.update_study(id, patch).await?;
        info!(study = %study.id, "study updated");
        Ok(study)
    }

    /// Soft-delete a study and, by cascade, everything beneath it.
    pub async fn delete_study(&self, caller: &Identity, id: StudyId) -> ServiceResult<()> {
        self.authorize_on(caller, StudyAction::Delete, EntityRef::Study(id))
            .await?;
        self.store.soft_delete(EntityRef::Study(id)).await?;
        info!(study = %id, "study deleted");
        Ok(())
    }

    // ── Schedule mutation (owner-gated) ──────────────────────────────

    /// Attach a session to a study.
    pub async fn create_session(
        &self,
        caller: &Identity,
        draft: NewSession,
    ) -> ServiceResult<Session> {
        self.authorize_on(
            caller,
            StudyAction::ManageSchedule,
            EntityRef::Study(draft.study_id),
        )
        .await?;
        let session = self.store.create_session(draft).await?;
        info!(session = %session.id, study = %session.study_id, "session created");
        Ok(session)
    }

    /// Soft-delete a session and, by cascade, its slots and bookings.
    pub async fn delete_session(&self, caller: &Identity, id: SessionId) -> ServiceResult<()> {
        self.authorize_on(caller, StudyAction::Delete, EntityRef::Session(id))
            .await?;
        self.store.soft_delete(EntityRef::Session(id)).await?;
        info!(session = %id, "session deleted");
        Ok(())
    }

    /// Carve a time slot out of a session.
    pub async fn create_slot(
        &self,
        caller: &Identity,
        draft: NewTimeSlot,
    ) -> ServiceResult<TimeSlot> {
        self.authorize_on(
            caller,
            StudyAction::ManageSchedule,
            EntityRef::Session(draft.session_id),
        )
        .await?;
        let slot = self.store.create_slot(draft).await?;
        info!(slot = %slot.id, session = %slot.session_id, "slot created");
        Ok(slot)
    }

    /// Adjust a slot's window or capacity.
    pub async fn update_slot(
        &self,
        caller: &Identity,
        id: SlotId,
        patch: SlotPatch,
    ) -> ServiceResult<TimeSlot> {
        self.authorize_on(caller, StudyAction::ManageSchedule, EntityRef::TimeSlot(id))
            .await?;
        let slot = self.store.update_slot(id, patch).await?;
        info!(slot = %slot.id, "slot updated");
        Ok(slot)
    }

    /// Soft-delete a slot and, by cascade, its bookings.
    pub async fn delete_slot(&self, caller: &Identity, id: SlotId) -> ServiceResult<()> {
        self.authorize_on(caller, StudyAction::Delete, EntityRef::TimeSlot(id))
            .await?;
        self.store.soft_delete(EntityRef::TimeSlot(id)).await?;
        info!(slot = %id, "slot deleted");
        Ok(())
    }

    // ── Participant operations (no account, no gate) ─────────────────

    /// Claim one unit of a slot's capacity.
    ///
    /// Routes into the admission controller; a full slot surfaces as
    /// `SlotFull` (409), an unresolvable one as `NotFound` (404).
    pub async fn book_slot(&self, draft: NewBooking) -> ServiceResult<Booking> {
        let booking = self.store.admit_booking(draft).await?;
        info!(booking = %booking.id, slot = %booking.slot_id, "booking admitted");
        Ok(booking)
    }

    /// Release a claim. Ungated: participants hold no accounts, and the
    /// booking id itself is the capability.
    pub async fn cancel_booking(&self, id: BookingId) -> ServiceResult<()> {
        self.store.soft_delete(EntityRef::Booking(id)).await?;
        info!(booking = %id, "booking cancelled");
        Ok(())
    }

    // ── Audit (gated read) ───────────────────────────────────────────

    /// Every booking row of a slot, including rows default reads
    /// suppress. Owner-gated, with the Admin role passing for any
    /// study; ownership is resolved through deleted ancestors so the
    /// history of a deleted study stays auditable.
    pub async fn audit_bookings(
        &self,
        caller: &Identity,
        slot: SlotId,
    ) -> ServiceResult<Vec<Booking>> {
        let study = self
            .store
            .owning_study_of_record(EntityRef::TimeSlot(slot))
            .await?;
        self.check(caller, StudyAction::Audit, &study)?;
        Ok(self.store.audit_bookings_for_slot(slot).await?)
    }
}
