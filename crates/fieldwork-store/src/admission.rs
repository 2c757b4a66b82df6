//! Capacity admission.
//!
//! The one decision this system exists to get right: a booking may join a
//! slot only while the slot's live booked count is below its capacity.
//! The check and the insert here run over `&mut Tables`, i.e. under the
//! store's exclusive write access, so they form a single admission unit:
//! there is no point where another request can observe the count and
//! insert between them. The historically unsafe form ("read count, then
//! separately insert") is exactly what this module replaces.

use tracing::debug;

use fieldwork_domain::{Booking, EntityKind, NewBooking};

use crate::error::{StoreError, StoreResult};
use crate::tables::Tables;

/// Admit `draft` into its slot, or reject it.
///
/// Rejection order matters: a slot that is unresolvable (absent,
/// deleted, or suppressed by a deleted ancestor) is `NotFound`, never
/// `SlotFull`, even when its row would also be at capacity.
pub(crate) fn admit(tables: &mut Tables, draft: NewBooking) -> StoreResult<Booking> {
    let slot = tables
        .live_slot(draft.slot_id)
        .ok_or(StoreError::NotFound(EntityKind::TimeSlot))?;
    let capacity = slot.capacity;

    let booked = tables.booked_count(draft.slot_id);
    if booked >= capacity {
        debug!(slot = %draft.slot_id, booked, capacity, "admission rejected, slot full");
        return Err(StoreError::SlotFull);
    }

    let id = tables.alloc_booking_id();
    let booking = Booking::new(id, draft);
    tables.bookings.insert(id, booking.clone());

    debug!(
        slot = %booking.slot_id,
        booking = %id,
        booked = booked + 1,
        capacity,
        "admission accepted"
    );
    Ok(booking)
}
