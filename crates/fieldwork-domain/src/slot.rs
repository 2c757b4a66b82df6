//! Time slot domain model.
//!
//! A slot is the unit of capacity in the system: a bounded time window
//! that admits at most `capacity` live bookings. The admission decision
//! itself lives in the store; this module owns the slot's shape, its
//! window/capacity validation, and the derived availability view.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::{SessionId, SlotId};

/// A capacity-bounded time window within a session.
///
/// Invariants: `end_time > start_time` and `capacity >= 1`, both enforced
/// at creation and on every patch. The derived booked count never exceeds
/// `capacity`; that bound is the store's admission invariant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    /// Store-assigned identifier.
    pub id: SlotId,

    /// Parent session.
    pub session_id: SessionId,

    /// Inclusive start of the window.
    pub start_time: DateTime<Utc>,

    /// Exclusive end of the window; strictly after `start_time`.
    pub end_time: DateTime<Utc>,

    /// Maximum number of live bookings; at least 1.
    pub capacity: u32,

    /// When the slot was created.
    pub created_at: DateTime<Utc>,

    /// Soft-delete marker; `None` means live.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl TimeSlot {
    /// Materialize a slot from a validated draft and a store-assigned id.
    pub fn new(id: SlotId, draft: NewTimeSlot) -> Self {
        Self {
            id,
            session_id: draft.session_id,
            start_time: draft.start_time,
            end_time: draft.end_time,
            capacity: draft.capacity,
            created_at: Utc::now(),
            deleted_at: None,
        }
    }

    /// Whether the row itself carries a soft-delete marker.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Draft for creating a time slot under a session.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use fieldwork_domain::{NewTimeSlot, SessionId, ValidationError};
///
/// let start = Utc.with_ymd_and_hms(2025, 1, 15, 9, 0, 0).unwrap();
/// let end = Utc.with_ymd_and_hms(2025, 1, 15, 9, 30, 0).unwrap();
///
/// assert!(NewTimeSlot::new(SessionId::new(1), start, end, 1).validate().is_ok());
/// assert_eq!(
///     NewTimeSlot::new(SessionId::new(1), end, start, 1).validate(),
///     Err(ValidationError::InvalidTimeWindow),
/// );
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTimeSlot {
    /// Parent session.
    pub session_id: SessionId,

    /// Inclusive start of the window.
    pub start_time: DateTime<Utc>,

    /// Exclusive end of the window.
    pub end_time: DateTime<Utc>,

    /// Maximum number of live bookings.
    pub capacity: u32,
}

impl NewTimeSlot {
    /// Create a slot draft.
    pub fn new(
        session_id: SessionId,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        capacity: u32,
    ) -> Self {
        Self {
            session_id,
            start_time,
            end_time,
            capacity,
        }
    }

    /// Reject an inverted/empty window or a zero capacity.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.end_time <= self.start_time {
            return Err(ValidationError::InvalidTimeWindow);
        }
        if self.capacity == 0 {
            return Err(ValidationError::InvalidCapacity);
        }
        Ok(())
    }
}

/// Partial update of a slot's window or capacity.
///
/// `None` leaves the field unchanged. The store re-validates the merged
/// window and refuses a capacity below the current live booked count.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotPatch {
    /// Replacement start of the window.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,

    /// Replacement end of the window.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,

    /// Replacement capacity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
}

impl SlotPatch {
    /// A patch that changes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the window start.
    pub fn start_time(mut self, start_time: DateTime<Utc>) -> Self {
        self.start_time = Some(start_time);
        self
    }

    /// Replace the window end.
    pub fn end_time(mut self, end_time: DateTime<Utc>) -> Self {
        self.end_time = Some(end_time);
        self
    }

    /// Replace the capacity.
    pub fn capacity(mut self, capacity: u32) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Reject a zero replacement capacity.
    ///
    /// Window ordering is checked against the merged slot by the store,
    /// since either bound may come from the existing row.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.capacity == Some(0) {
            return Err(ValidationError::InvalidCapacity);
        }
        Ok(())
    }

    /// Apply the patch to a slot row.
    pub fn apply(self, slot: &mut TimeSlot) {
        if let Some(start_time) = self.start_time {
            slot.start_time = start_time;
        }
        if let Some(end_time) = self.end_time {
            slot.end_time = end_time;
        }
        if let Some(capacity) = self.capacity {
            slot.capacity = capacity;
        }
    }
}

/// A slot together with its derived occupancy numbers.
///
/// Derived values are computed from live bookings at read time and never
/// stored. `available_count == capacity - booked_count` holds after every
/// admission and cancellation.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use fieldwork_domain::{NewTimeSlot, SessionId, SlotAvailability, SlotId, TimeSlot};
///
/// let start = Utc.with_ymd_and_hms(2025, 1, 15, 9, 0, 0).unwrap();
/// let end = Utc.with_ymd_and_hms(2025, 1, 15, 9, 30, 0).unwrap();
/// let slot = TimeSlot::new(
///     SlotId::new(1),
///     NewTimeSlot::new(SessionId::new(1), start, end, 3),
/// );
///
/// let view = SlotAvailability::compute(slot, 2);
/// assert_eq!(view.available_count, 1);
/// assert!(!view.is_full);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotAvailability {
    /// The slot row itself.
    #[serde(flatten)]
    pub slot: TimeSlot,

    /// Number of live bookings.
    pub booked_count: u32,

    /// Remaining capacity.
    pub available_count: u32,

    /// Whether the slot admits no further bookings.
    pub is_full: bool,
}

impl SlotAvailability {
    /// Derive the occupancy view from a slot and its live booked count.
    pub fn compute(slot: TimeSlot, booked_count: u32) -> Self {
        let available_count = slot.capacity.saturating_sub(booked_count);
        let is_full = booked_count >= slot.capacity;
        Self {
            slot,
            booked_count,
            available_count,
            is_full,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn window() -> (DateTime<Utc>, DateTime<Utc>) {
        (
            Utc.with_ymd_and_hms(2025, 1, 15, 9, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2025, 1, 15, 9, 30, 0).unwrap(),
        )
    }

    #[test]
    fn test_draft_validation() {
        let (start, end) = window();

        assert!(NewTimeSlot::new(SessionId::new(1), start, end, 1)
            .validate()
            .is_ok());
        assert_eq!(
            NewTimeSlot::new(SessionId::new(1), start, start, 1).validate(),
            Err(ValidationError::InvalidTimeWindow)
        );
        assert_eq!(
            NewTimeSlot::new(SessionId::new(1), start, end, 0).validate(),
            Err(ValidationError::InvalidCapacity)
        );
    }

    #[test]
    fn test_patch_validation_and_apply() {
        let (start, end) = window();
        let mut slot = TimeSlot::new(
            SlotId::new(1),
            NewTimeSlot::new(SessionId::new(1), start, end, 2),
        );

        assert_eq!(
            SlotPatch::new().capacity(0).validate(),
            Err(ValidationError::InvalidCapacity)
        );

        SlotPatch::new().capacity(5).apply(&mut slot);
        assert_eq!(slot.capacity, 5);
        assert_eq!(slot.start_time, start);
    }

    #[test]
    fn test_availability_derivation() {
        let (start, end) = window();
        let slot = TimeSlot::new(
            SlotId::new(1),
            NewTimeSlot::new(SessionId::new(1), start, end, 2),
        );

        let free = SlotAvailability::compute(slot.clone(), 0);
        assert_eq!(free.available_count, 2);
        assert!(!free.is_full);

        let full = SlotAvailability::compute(slot, 2);
        assert_eq!(full.available_count, 0);
        assert!(full.is_full);
    }

    #[test]
    fn test_availability_flattens_slot_fields() {
        let (start, end) = window();
        let slot = TimeSlot::new(
            SlotId::new(9),
            NewTimeSlot::new(SessionId::new(4), start, end, 1),
        );

        let json = serde_json::to_value(SlotAvailability::compute(slot, 1)).unwrap();
        assert_eq!(json["id"], 9);
        assert_eq!(json["sessionId"], 4);
        assert_eq!(json["bookedCount"], 1);
        assert_eq!(json["isFull"], true);
    }
}
