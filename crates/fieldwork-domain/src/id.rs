//! Typed identifiers for the study hierarchy.
//!
//! Identifiers are opaque sequence numbers assigned by the store. Callers
//! never derive meaning from them beyond equality and ordering; because the
//! store hands them out monotonically, ascending id order is also creation
//! order.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! entity_id {
    ($(#[$attr:meta])* $name:ident) => {
        $(#[$attr])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Wrap a raw sequence number.
            pub const fn new(raw: u64) -> Self {
                Self(raw)
            }

            /// The raw sequence number.
            pub const fn as_u64(self) -> u64 {
                self.0
            }
        }

        impl From<u64> for $name {
            fn from(raw: u64) -> Self {
                Self(raw)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

entity_id! {
    /// Identifier of a registered [`User`](crate::User).
    UserId
}

entity_id! {
    /// Identifier of a [`Study`](crate::Study).
    StudyId
}

entity_id! {
    /// Identifier of a [`Session`](crate::Session).
    SessionId
}

entity_id! {
    /// Identifier of a [`TimeSlot`](crate::TimeSlot).
    SlotId
}

entity_id! {
    /// Identifier of a [`Booking`](crate::Booking).
    BookingId
}

/// The five entity kinds of the scheduling hierarchy.
///
/// # Examples
///
/// ```
/// use fieldwork_domain::EntityKind;
///
/// assert_eq!(EntityKind::TimeSlot.label(), "TimeSlot");
/// assert_eq!(EntityKind::Study.as_str(), "study");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// A registered researcher or administrator account.
    User,
    /// A top-level research project.
    Study,
    /// A dated occurrence of a study at a location.
    Session,
    /// A capacity-bounded time window within a session.
    TimeSlot,
    /// A participant's claim on one unit of a slot's capacity.
    Booking,
}

impl EntityKind {
    /// Lowercase identifier, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Study => "study",
            Self::Session => "session",
            Self::TimeSlot => "time_slot",
            Self::Booking => "booking",
        }
    }

    /// Human-readable label used in error messages ("Study not found").
    pub fn label(&self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Study => "Study",
            Self::Session => "Session",
            Self::TimeSlot => "TimeSlot",
            Self::Booking => "Booking",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A kind-tagged reference to one row of the hierarchy.
///
/// Used by kind-generic store operations such as soft deletion and
/// ancestor resolution, where the caller names "which row" without the
/// store needing five separate entry points.
///
/// # Examples
///
/// ```
/// use fieldwork_domain::{EntityKind, EntityRef, SlotId};
///
/// let target = EntityRef::TimeSlot(SlotId::new(7));
/// assert_eq!(target.kind(), EntityKind::TimeSlot);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "id")]
pub enum EntityRef {
    /// Reference to a user.
    User(UserId),
    /// Reference to a study.
    Study(StudyId),
    /// Reference to a session.
    Session(SessionId),
    /// Reference to a time slot.
    TimeSlot(SlotId),
    /// Reference to a booking.
    Booking(BookingId),
}

impl EntityRef {
    /// The kind of entity this reference points at.
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::User(_) => EntityKind::User,
            Self::Study(_) => EntityKind::Study,
            Self::Session(_) => EntityKind::Session,
            Self::TimeSlot(_) => EntityKind::TimeSlot,
            Self::Booking(_) => EntityKind::Booking,
        }
    }
}
