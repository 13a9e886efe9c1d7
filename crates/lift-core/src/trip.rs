//! A single requested journey.

use std::fmt;

use crate::Floor;

/// One passenger trip: board at `from`, exit at `to`.
///
/// `from == to` is legal — the elevator still answers the call, opens its
/// doors, and the passenger boards and exits without the cabin moving.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripPlan {
    pub from: Floor,
    pub to:   Floor,
}

impl TripPlan {
    pub fn new(from: Floor, to: Floor) -> Self {
        Self { from, to }
    }

    /// Floors crossed while carrying the passenger (excludes the approach to
    /// the pickup floor, which depends on where the elevator starts).
    #[inline]
    pub fn carry_distance(self) -> u32 {
        self.from.distance_to(self.to)
    }
}

impl fmt::Display for TripPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}→{}", self.from, self.to)
    }
}
