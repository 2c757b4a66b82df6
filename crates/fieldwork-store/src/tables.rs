//! Entity tables and read-time deletion visibility.
//!
//! `Tables` is the materialized hierarchy: one ordered map per entity
//! kind, keyed by store-assigned sequence ids, so iteration order is
//! creation order. The `live_*` accessors implement the read side of the
//! soft-delete cascade: a row is effectively deleted if it or *any*
//! ancestor carries a `deleted_at` marker. Deletion therefore writes one
//! row and reads pay for the ancestor walk, trading read simplicity for
//! deletion latency and zero fan-out staleness.

use std::collections::BTreeMap;

use fieldwork_domain::{
    Booking, BookingId, Session, SessionId, SlotId, Study, StudyId, TimeSlot, User, UserId,
};

/// The five entity tables plus their id sequences.
#[derive(Debug, Default)]
pub(crate) struct Tables {
    pub(crate) users: BTreeMap<UserId, User>,
    pub(crate) studies: BTreeMap<StudyId, Study>,
    pub(crate) sessions: BTreeMap<SessionId, Session>,
    pub(crate) slots: BTreeMap<SlotId, TimeSlot>,
    pub(crate) bookings: BTreeMap<BookingId, Booking>,

    next_user: u64,
    next_study: u64,
    next_session: u64,
    next_slot: u64,
    next_booking: u64,
}

impl Tables {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    // ── Id sequences ─────────────────────────────────────────────────

    pub(crate) fn alloc_user_id(&mut self) -> UserId {
        self.next_user += 1;
        UserId::new(self.next_user)
    }

    pub(crate) fn alloc_study_id(&mut self) -> StudyId {
        self.next_study += 1;
        StudyId::new(self.next_study)
    }

    pub(crate) fn alloc_session_id(&mut self) -> SessionId {
        self.next_session += 1;
        SessionId::new(self.next_session)
    }

    pub(crate) fn alloc_slot_id(&mut self) -> SlotId {
        self.next_slot += 1;
        SlotId::new(self.next_slot)
    }

    pub(crate) fn alloc_booking_id(&mut self) -> BookingId {
        self.next_booking += 1;
        BookingId::new(self.next_booking)
    }

    // ── Effective-visibility accessors (the cascade's read side) ─────

    /// A user, if its own row is live. Users sit above the study chain
    /// and have no ancestors to consult.
    pub(crate) fn live_user(&self, id: UserId) -> Option<&User> {
        self.users.get(&id).filter(|u| !u.is_deleted())
    }

    /// A study, if its own row is live.
    ///
    /// Deleting a user does not suppress their studies; the owner
    /// reference is validated at creation time only.
    pub(crate) fn live_study(&self, id: StudyId) -> Option<&Study> {
        self.studies.get(&id).filter(|s| !s.is_deleted())
    }

    /// A session, if it and its study are live.
    pub(crate) fn live_session(&self, id: SessionId) -> Option<&Session> {
        self.sessions
            .get(&id)
            .filter(|s| !s.is_deleted())
            .filter(|s| self.live_study(s.study_id).is_some())
    }

    /// A slot, if it and its whole ancestor chain are live.
    pub(crate) fn live_slot(&self, id: SlotId) -> Option<&TimeSlot> {
        self.slots
            .get(&id)
            .filter(|s| !s.is_deleted())
            .filter(|s| self.live_session(s.session_id).is_some())
    }

    /// A booking, if it and its whole ancestor chain are live.
    pub(crate) fn live_booking(&self, id: BookingId) -> Option<&Booking> {
        self.bookings
            .get(&id)
            .filter(|b| !b.is_deleted())
            .filter(|b| self.live_slot(b.slot_id).is_some())
    }

    /// Number of live bookings claiming `slot`.
    ///
    /// Row-local liveness suffices here: all bookings of one slot share
    /// the same ancestor chain, and the count is only consulted for
    /// slots already resolved as live.
    pub(crate) fn booked_count(&self, slot: SlotId) -> u32 {
        self.bookings
            .values()
            .filter(|b| b.slot_id == slot && !b.is_deleted())
            .count() as u32
    }
}
