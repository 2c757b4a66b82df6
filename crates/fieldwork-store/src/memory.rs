//! In-memory store implementation.
//!
//! Suitable for single-process deployments and testing. All five tables
//! live behind one `tokio::sync::RwLock`; reads share the lock, every
//! mutation takes it exclusively. That makes each mutating operation
//! (admission above all) a single atomic unit: between acquiring the
//! write guard and returning, no other request can observe or change the
//! tables. A request aborted before it reaches the guard has touched
//! nothing, so cancellation leaves no partial row behind.

use tokio::sync::RwLock;
use tracing::debug;

use fieldwork_domain::{
    Booking, BookingId, EntityKind, EntityRef, NewBooking, NewSession, NewStudy, NewTimeSlot,
    NewUser, Session, SessionId, SlotAvailability, SlotId, SlotPatch, Study, StudyId,
    StudyPatch, TimeSlot, User, UserId, ValidationError,
};

use crate::admission;
use crate::error::{StoreError, StoreResult};
use crate::store::ScheduleStore;
use crate::tables::Tables;
use async_trait::async_trait;
use chrono::Utc;

/// In-memory [`ScheduleStore`] over a single read-write lock.
///
/// # Example
///
/// ```no_run
/// use fieldwork_domain::{NewStudy, NewUser};
/// use fieldwork_store::{MemoryStore, ScheduleStore};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), fieldwork_store::StoreError> {
/// let store = MemoryStore::new();
/// let owner = store
///     .create_user(NewUser::new("ada@example.com", "hash", "Ada"))
///     .await?;
/// let study = store
///     .create_study(NewStudy::new(owner.id, "Usability study"))
///     .await?;
/// assert_eq!(study.owner_id, owner.id);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Tables>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Tables::new()),
        }
    }
}

#[async_trait]
impl ScheduleStore for MemoryStore {
    // ── Users ────────────────────────────────────────────────────────

    async fn create_user(&self, draft: NewUser) -> StoreResult<User> {
        draft.validate()?;
        let mut tables = self.inner.write().await;

        let taken = tables
            .users
            .values()
            .any(|u| !u.is_deleted() && u.email == draft.email);
        if taken {
            return Err(StoreError::EmailInUse);
        }

        let id = tables.alloc_user_id();
        let user = User::new(id, draft);
        tables.users.insert(id, user.clone());
        Ok(user)
    }

    async fn user(&self, id: UserId) -> StoreResult<User> {
        let tables = self.inner.read().await;
        tables
            .live_user(id)
            .cloned()
            .ok_or(StoreError::NotFound(EntityKind::User))
    }

    // ── Studies ──────────────────────────────────────────────────────

    async fn create_study(&self, draft: NewStudy) -> StoreResult<Study> {
        draft.validate()?;
        let mut tables = self.inner.write().await;

        if tables.live_user(draft.owner_id).is_none() {
            return Err(StoreError::NotFound(EntityKind::User));
        }

        let id = tables.alloc_study_id();
        let study = Study::new(id, draft);
        tables.studies.insert(id, study.clone());
        Ok(study)
    }

    async fn study(&self, id: StudyId) -> StoreResult<Study> {
        let tables = self.inner.read().await;
        tables
            .live_study(id)
            .cloned()
            .ok_or(StoreError::NotFound(EntityKind::Study))
    }

    async fn studies(&self) -> StoreResult<Vec<Study>> {
        let tables = self.inner.read().await;
        Ok(tables
            .studies
            .values()
            .filter(|s| !s.is_deleted())
            .cloned()
            .collect())
    }

    async fn studies_by_owner(&self, owner: UserId) -> StoreResult<Vec<Study>> {
        let tables = self.inner.read().await;
        Ok(tables
            .studies
            .values()
            .filter(|s| !s.is_deleted() && s.owner_id == owner)
            .cloned()
            .collect())
    }

    async fn update_study(&self, id: StudyId, patch: StudyPatch) -> StoreResult<Study> {
        patch.validate()?;
        let mut tables = self.inner.write().await;

        if tables.live_study(id).is_none() {
            return Err(StoreError::NotFound(EntityKind::Study));
        }
        match tables.studies.get_mut(&id) {
            Some(study) => {
                patch.apply(study);
                Ok(study.clone())
            }
            None => Err(StoreError::NotFound(EntityKind::Study)),
        }
    }

    // ── Sessions ─────────────────────────────────────────────────────

    async fn create_session(&self, draft: NewSession) -> StoreResult<Session> {
        draft.validate()?;
        let mut tables = self.inner.write().await;

        if tables.live_study(draft.study_id).is_none() {
            return Err(StoreError::NotFound(EntityKind::Study));
        }

        let id = tables.alloc_session_id();
        let session = Session::new(id, draft);
        tables.sessions.insert(id, session.clone());
        Ok(session)
    }

    async fn session(&self, id: SessionId) -> StoreResult<Session> {
        let tables = self.inner.read().await;
        tables
            .live_session(id)
            .cloned()
            .ok_or(StoreError::NotFound(EntityKind::Session))
    }

    async fn sessions_for_study(&self, study: StudyId) -> StoreResult<Vec<Session>> {
        let tables = self.inner.read().await;
        if tables.live_study(study).is_none() {
            return Err(StoreError::NotFound(EntityKind::Study));
        }
        Ok(tables
            .sessions
            .values()
            .filter(|s| s.study_id == study && !s.is_deleted())
            .cloned()
            .collect())
    }

    // ── Time slots ───────────────────────────────────────────────────

    async fn create_slot(&self, draft: NewTimeSlot) -> StoreResult<TimeSlot> {
        draft.validate()?;
        let mut tables = self.inner.write().await;

        if tables.live_session(draft.session_id).is_none() {
            return Err(StoreError::NotFound(EntityKind::Session));
        }

        let id = tables.alloc_slot_id();
        let slot = TimeSlot::new(id, draft);
        tables.slots.insert(id, slot.clone());
        Ok(slot)
    }

    async fn slot(&self, id: SlotId) -> StoreResult<TimeSlot> {
        let tables = self.inner.read().await;
        tables
            .live_slot(id)
            .cloned()
            .ok_or(StoreError::NotFound(EntityKind::TimeSlot))
    }

    async fn slots_for_session(&self, session: SessionId) -> StoreResult<Vec<TimeSlot>> {
        let tables = self.inner.read().await;
        if tables.live_session(session).is_none() {
            return Err(StoreError::NotFound(EntityKind::Session));
        }
        let mut slots: Vec<TimeSlot> = tables
            .slots
            .values()
            .filter(|s| s.session_id == session && !s.is_deleted())
            .cloned()
            .collect();
        // Slots are listed in display order, not creation order.
        slots.sort_by_key(|s| s.start_time);
        Ok(slots)
    }

    async fn update_slot(&self, id: SlotId, patch: SlotPatch) -> StoreResult<TimeSlot> {
        patch.validate()?;
        let mut tables = self.inner.write().await;

        let mut candidate = tables
            .live_slot(id)
            .cloned()
            .ok_or(StoreError::NotFound(EntityKind::TimeSlot))?;

        if let Some(requested) = patch.capacity {
            let booked = tables.booked_count(id);
            if requested < booked {
                return Err(StoreError::Validation(
                    ValidationError::CapacityBelowBooked { requested, booked },
                ));
            }
        }

        patch.apply(&mut candidate);
        if candidate.end_time <= candidate.start_time {
            return Err(StoreError::Validation(ValidationError::InvalidTimeWindow));
        }

        tables.slots.insert(id, candidate.clone());
        Ok(candidate)
    }

    async fn availability(&self, id: SlotId) -> StoreResult<SlotAvailability> {
        let tables = self.inner.read().await;
        let slot = tables
            .live_slot(id)
            .cloned()
            .ok_or(StoreError::NotFound(EntityKind::TimeSlot))?;
        let booked = tables.booked_count(id);
        Ok(SlotAvailability::compute(slot, booked))
    }

    // ── Bookings ─────────────────────────────────────────────────────

    async fn admit_booking(&self, draft: NewBooking) -> StoreResult<Booking> {
        draft.validate()?;
        // One guard covers the capacity check and the insert; see the
        // module docs for why this closes the check-then-act race.
        let mut tables = self.inner.write().await;
        admission::admit(&mut tables, draft)
    }

    async fn booking(&self, id: BookingId) -> StoreResult<Booking> {
        let tables = self.inner.read().await;
        tables
            .live_booking(id)
            .cloned()
            .ok_or(StoreError::NotFound(EntityKind::Booking))
    }

    async fn bookings_for_slot(&self, slot: SlotId) -> StoreResult<Vec<Booking>> {
        let tables = self.inner.read().await;
        if tables.live_slot(slot).is_none() {
            return Err(StoreError::NotFound(EntityKind::TimeSlot));
        }
        Ok(tables
            .bookings
            .values()
            .filter(|b| b.slot_id == slot && !b.is_deleted())
            .cloned()
            .collect())
    }

    async fn audit_bookings_for_slot(&self, slot: SlotId) -> StoreResult<Vec<Booking>> {
        let tables = self.inner.read().await;
        // The audit path only needs the row to exist; suppression and
        // soft-delete markers are exactly what it is meant to surface.
        if !tables.slots.contains_key(&slot) {
            return Err(StoreError::NotFound(EntityKind::TimeSlot));
        }
        Ok(tables
            .bookings
            .values()
            .filter(|b| b.slot_id == slot)
            .cloned()
            .collect())
    }

    // ── Hierarchy ────────────────────────────────────────────────────

    async fn owning_study(&self, target: EntityRef) -> StoreResult<Study> {
        let tables = self.inner.read().await;
        let study = match target {
            EntityRef::Study(id) => tables.live_study(id),
            EntityRef::Session(id) => tables
                .live_session(id)
                .and_then(|s| tables.live_study(s.study_id)),
            EntityRef::TimeSlot(id) => tables
                .live_slot(id)
                .and_then(|s| tables.live_session(s.session_id))
                .and_then(|s| tables.live_study(s.study_id)),
            EntityRef::Booking(id) => tables
                .live_booking(id)
                .and_then(|b| tables.live_slot(b.slot_id))
                .and_then(|s| tables.live_session(s.session_id))
                .and_then(|s| tables.live_study(s.study_id)),
            // Users sit above the study chain; nothing owns them.
            EntityRef::User(_) => None,
        };
        study
            .cloned()
            .ok_or(StoreError::NotFound(target.kind()))
    }

    async fn owning_study_of_record(&self, target: EntityRef) -> StoreResult<Study> {
        let tables = self.inner.read().await;
        let study = match target {
            EntityRef::Study(id) => tables.studies.get(&id),
            EntityRef::Session(id) => tables
                .sessions
                .get(&id)
                .and_then(|s| tables.studies.get(&s.study_id)),
            EntityRef::TimeSlot(id) => tables
                .slots
                .get(&id)
                .and_then(|s| tables.sessions.get(&s.session_id))
                .and_then(|s| tables.studies.get(&s.study_id)),
            EntityRef::Booking(id) => tables
                .bookings
                .get(&id)
                .and_then(|b| tables.slots.get(&b.slot_id))
                .and_then(|s| tables.sessions.get(&s.session_id))
                .and_then(|s| tables.studies.get(&s.study_id)),
            EntityRef::User(_) => None,
        };
        study
            .cloned()
            .ok_or(StoreError::NotFound(target.kind()))
    }

    async fn soft_delete(&self, target: EntityRef) -> StoreResult<()> {
        let mut tables = self.inner.write().await;
        let now = Utc::now();

        match target {
            EntityRef::User(id) => {
                if tables.live_user(id).is_none() {
                    return Err(StoreError::NotFound(EntityKind::User));
                }
                if let Some(row) = tables.users.get_mut(&id) {
                    row.deleted_at = Some(now);
                }
            }
            EntityRef::Study(id) => {
                if tables.live_study(id).is_none() {
                    return Err(StoreError::NotFound(EntityKind::Study));
                }
                if let Some(row) = tables.studies.get_mut(&id) {
                    row.deleted_at = Some(now);
                }
            }
            EntityRef::Session(id) => {
                if tables.live_session(id).is_none() {
                    return Err(StoreError::NotFound(EntityKind::Session));
                }
                if let Some(row) = tables.sessions.get_mut(&id) {
                    row.deleted_at = Some(now);
                }
            }
            EntityRef::TimeSlot(id) => {
                if tables.live_slot(id).is_none() {
                    return Err(StoreError::NotFound(EntityKind::TimeSlot));
                }
                if let Some(row) = tables.slots.get_mut(&id) {
                    row.deleted_at = Some(now);
                }
            }
            EntityRef::Booking(id) => {
                if tables.live_booking(id).is_none() {
                    return Err(StoreError::NotFound(EntityKind::Booking));
                }
                if let Some(row) = tables.bookings.get_mut(&id) {
                    row.deleted_at = Some(now);
                }
            }
        }

        debug!(entity = ?target, "row soft-deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use std::sync::Arc;

    async fn seeded(store: &MemoryStore, capacity: u32) -> (UserId, StudyId, SessionId, SlotId) {
        let owner = store
            .create_user(NewUser::new("researcher@example.com", "hash", "R"))
            .await
            .unwrap();
        let study = store
            .create_study(NewStudy::new(owner.id, "Usability study"))
            .await
            .unwrap();
        let date = Utc.with_ymd_and_hms(2025, 1, 15, 0, 0, 0).unwrap();
        let session = store
            .create_session(NewSession::new(study.id, "Room A123", date))
            .await
            .unwrap();
        let slot = store
            .create_slot(NewTimeSlot::new(
                session.id,
                date + Duration::hours(9),
                date + Duration::hours(9) + Duration::minutes(30),
                capacity,
            ))
            .await
            .unwrap();
        (owner.id, study.id, session.id, slot.id)
    }

    fn window(session: SessionId, hour: u32, capacity: u32) -> NewTimeSlot {
        let start = Utc.with_ymd_and_hms(2025, 1, 15, hour, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2025, 1, 15, hour, 30, 0).unwrap();
        NewTimeSlot::new(session, start, end, capacity)
    }

    #[tokio::test]
    async fn test_parent_must_be_live_on_create() {
        let store = MemoryStore::new();
        let (_, study, session, _) = seeded(&store, 1).await;

        store
            .soft_delete(EntityRef::Study(study))
            .await
            .unwrap();

        let result = store
            .create_session(NewSession::new(
                study,
                "Room B",
                Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap(),
            ))
            .await;
        assert!(matches!(
            result,
            Err(StoreError::NotFound(EntityKind::Study))
        ));

        // The session row is untouched but suppressed, so slot creation
        // under it must fail the same way.
        let result = store.create_slot(window(session, 10, 1)).await;
        assert!(matches!(
            result,
            Err(StoreError::NotFound(EntityKind::Session))
        ));
    }

    #[tokio::test]
    async fn test_validation_persists_nothing() {
        let store = MemoryStore::new();
        let (_, _, session, _) = seeded(&store, 1).await;

        let start = Utc.with_ymd_and_hms(2025, 1, 15, 9, 0, 0).unwrap();
        let inverted = NewTimeSlot::new(session, start, start - Duration::minutes(30), 1);
        assert!(matches!(
            store.create_slot(inverted).await,
            Err(StoreError::Validation(ValidationError::InvalidTimeWindow))
        ));

        let zero = NewTimeSlot::new(session, start, start + Duration::minutes(30), 0);
        assert!(matches!(
            store.create_slot(zero).await,
            Err(StoreError::Validation(ValidationError::InvalidCapacity))
        ));

        // Only the seeded slot exists.
        assert_eq!(store.slots_for_session(session).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_availability_tracks_admissions_and_cancellations() {
        let store = MemoryStore::new();
        let (_, _, _, slot) = seeded(&store, 2).await;

        let view = store.availability(slot).await.unwrap();
        assert_eq!((view.booked_count, view.available_count), (0, 2));

        let booking = store
            .admit_booking(NewBooking::new(slot, "Alex", Utc::now()))
            .await
            .unwrap();
        let view = store.availability(slot).await.unwrap();
        assert_eq!((view.booked_count, view.available_count), (1, 1));
        assert!(!view.is_full);

        store
            .admit_booking(NewBooking::new(slot, "Sam", Utc::now()))
            .await
            .unwrap();
        let view = store.availability(slot).await.unwrap();
        assert_eq!((view.booked_count, view.available_count), (2, 0));
        assert!(view.is_full);

        store
            .soft_delete(EntityRef::Booking(booking.id))
            .await
            .unwrap();
        let view = store.availability(slot).await.unwrap();
        assert_eq!((view.booked_count, view.available_count), (1, 1));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_admissions_never_exceed_capacity() {
        let store = Arc::new(MemoryStore::new());
        let (_, _, _, slot) = seeded(&store, 3).await;

        let attempts = 8;
        let mut handles = Vec::new();
        for i in 0..attempts {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store
                    .admit_booking(NewBooking::new(slot, format!("P{i}"), Utc::now()))
                    .await
            }));
        }

        let mut admitted = 0;
        let mut rejected = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => admitted += 1,
                Err(StoreError::SlotFull) => rejected += 1,
                Err(other) => panic!("unexpected admission error: {other}"),
            }
        }

        assert_eq!(admitted, 3);
        assert_eq!(rejected, attempts - 3);
        assert_eq!(store.bookings_for_slot(slot).await.unwrap().len(), 3);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_last_seat_race_admits_exactly_one() {
        let store = Arc::new(MemoryStore::new());
        let (_, _, _, slot) = seeded(&store, 1).await;

        let a = tokio::spawn({
            let store = Arc::clone(&store);
            async move {
                store
                    .admit_booking(NewBooking::new(slot, "First", Utc::now()))
                    .await
            }
        });
        let b = tokio::spawn({
            let store = Arc::clone(&store);
            async move {
                store
                    .admit_booking(NewBooking::new(slot, "Second", Utc::now()))
                    .await
            }
        });

        let outcomes = [a.await.unwrap(), b.await.unwrap()];
        let winners = outcomes.iter().filter(|r| r.is_ok()).count();
        let losers = outcomes
            .iter()
            .filter(|r| matches!(r, Err(StoreError::SlotFull)))
            .count();

        assert_eq!(winners, 1);
        assert_eq!(losers, 1);
    }

    #[tokio::test]
    async fn test_study_deletion_cascades_to_all_reads() {
        let store = MemoryStore::new();
        let (_, study, session, slot) = seeded(&store, 2).await;
        let booking = store
            .admit_booking(NewBooking::new(slot, "Alex", Utc::now()))
            .await
            .unwrap();

        store.soft_delete(EntityRef::Study(study)).await.unwrap();

        assert!(store.study(study).await.is_err());
        assert!(store.session(session).await.is_err());
        assert!(store.slot(slot).await.is_err());
        assert!(store.booking(booking.id).await.is_err());
        assert!(store.studies().await.unwrap().is_empty());

        // History survives: the booking row is reachable via the audit
        // path, unmarked.
        let audit = store.audit_bookings_for_slot(slot).await.unwrap();
        assert_eq!(audit.len(), 1);
        assert!(audit[0].deleted_at.is_none());
    }

    #[tokio::test]
    async fn test_session_deletion_hides_slots_and_bookings() {
        let store = MemoryStore::new();
        let (_, _, session, first_slot) = seeded(&store, 5).await;

        let s2 = store.create_slot(window(session, 10, 5)).await.unwrap();
        let s3 = store.create_slot(window(session, 11, 5)).await.unwrap();
        let slots = [first_slot, s2.id, s3.id];

        for (i, slot) in slots.iter().cycle().take(5).enumerate() {
            store
                .admit_booking(NewBooking::new(*slot, format!("P{i}"), Utc::now()))
                .await
                .unwrap();
        }

        store
            .soft_delete(EntityRef::Session(session))
            .await
            .unwrap();

        assert!(matches!(
            store.session(session).await,
            Err(StoreError::NotFound(EntityKind::Session))
        ));
        assert!(store.slots_for_session(session).await.is_err());
        for slot in slots {
            assert!(store.slot(slot).await.is_err());
            assert!(store.bookings_for_slot(slot).await.is_err());
        }

        // Double delete reports the target as already gone.
        assert!(matches!(
            store.soft_delete(EntityRef::Session(session)).await,
            Err(StoreError::NotFound(EntityKind::Session))
        ));
    }

    #[tokio::test]
    async fn test_slot_listing_is_ordered_by_start_time() {
        let store = MemoryStore::new();
        let (_, _, session, first_slot) = seeded(&store, 1).await;

        // Created out of order on purpose.
        let late = store.create_slot(window(session, 14, 1)).await.unwrap();
        let early = store.create_slot(window(session, 8, 1)).await.unwrap();

        let listed: Vec<SlotId> = store
            .slots_for_session(session)
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(listed, vec![early.id, first_slot, late.id]);
    }

    #[tokio::test]
    async fn test_update_slot_respects_booked_count() {
        let store = MemoryStore::new();
        let (_, _, _, slot) = seeded(&store, 3).await;
        for name in ["A", "B"] {
            store
                .admit_booking(NewBooking::new(slot, name, Utc::now()))
                .await
                .unwrap();
        }

        let shrunk = store.update_slot(slot, SlotPatch::new().capacity(1)).await;
        assert!(matches!(
            shrunk,
            Err(StoreError::Validation(
                ValidationError::CapacityBelowBooked {
                    requested: 1,
                    booked: 2
                }
            ))
        ));

        let widened = store
            .update_slot(slot, SlotPatch::new().capacity(2))
            .await
            .unwrap();
        assert_eq!(widened.capacity, 2);
        assert!(store.availability(slot).await.unwrap().is_full);
    }

    #[tokio::test]
    async fn test_update_slot_rejects_inverted_merged_window() {
        let store = MemoryStore::new();
        let (_, _, _, slot) = seeded(&store, 1).await;
        let current = store.slot(slot).await.unwrap();

        // Moving the start past the existing end inverts the window even
        // though the patch alone looks harmless.
        let result = store
            .update_slot(
                slot,
                SlotPatch::new().start_time(current.end_time + Duration::minutes(5)),
            )
            .await;
        assert!(matches!(
            result,
            Err(StoreError::Validation(ValidationError::InvalidTimeWindow))
        ));
    }

    #[tokio::test]
    async fn test_email_unique_among_live_users_only() {
        let store = MemoryStore::new();
        let first = store
            .create_user(NewUser::new("ada@example.com", "h1", "Ada"))
            .await
            .unwrap();

        let dup = store
            .create_user(NewUser::new("ada@example.com", "h2", "Imposter"))
            .await;
        assert!(matches!(dup, Err(StoreError::EmailInUse)));

        store
            .soft_delete(EntityRef::User(first.id))
            .await
            .unwrap();
        assert!(store
            .create_user(NewUser::new("ada@example.com", "h3", "Ada again"))
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn test_owning_study_walks_the_chain() {
        let store = MemoryStore::new();
        let (owner, study, session, slot) = seeded(&store, 1).await;
        let booking = store
            .admit_booking(NewBooking::new(slot, "Alex", Utc::now()))
            .await
            .unwrap();

        for target in [
            EntityRef::Study(study),
            EntityRef::Session(session),
            EntityRef::TimeSlot(slot),
            EntityRef::Booking(booking.id),
        ] {
            let resolved = store.owning_study(target).await.unwrap();
            assert_eq!(resolved.id, study);
            assert_eq!(resolved.owner_id, owner);
        }

        assert!(store.owning_study(EntityRef::User(owner)).await.is_err());
    }

    #[tokio::test]
    async fn test_update_study_patches_fields() {
        let store = MemoryStore::new();
        let (_, study, _, _) = seeded(&store, 1).await;

        let updated = store
            .update_study(study, StudyPatch::new().title("Renamed").description("Now with notes"))
            .await
            .unwrap();
        assert_eq!(updated.title, "Renamed");
        assert_eq!(updated.description.as_deref(), Some("Now with notes"));

        assert!(matches!(
            store.update_study(study, StudyPatch::new().title(" ")).await,
            Err(StoreError::Validation(ValidationError::EmptyTitle))
        ));
    }

    #[tokio::test]
    async fn test_my_studies_filters_by_owner() {
        let store = MemoryStore::new();
        let (owner, study, _, _) = seeded(&store, 1).await;
        let other = store
            .create_user(NewUser::new("other@example.com", "hash", "O"))
            .await
            .unwrap();
        store
            .create_study(NewStudy::new(other.id, "Someone else's"))
            .await
            .unwrap();

        let mine = store.studies_by_owner(owner).await.unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].id, study);
        assert_eq!(store.studies().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_booking_is_immutable_after_admission() {
        let store = MemoryStore::new();
        let (_, _, _, slot) = seeded(&store, 1).await;

        let consent: DateTime<Utc> = Utc.with_ymd_and_hms(2025, 1, 10, 12, 0, 0).unwrap();
        let admitted = store
            .admit_booking(NewBooking::new(slot, "Alex", consent).with_email("alex@example.com"))
            .await
            .unwrap();

        let fetched = store.booking(admitted.id).await.unwrap();
        assert_eq!(fetched.consent_at, consent);
        assert_eq!(fetched.participant_name, "Alex");
    }
}
