//! Handshake phases.

use std::fmt;

/// One of the four rendezvous phases of a trip.
///
/// Each phase owns one boolean flag and one condition variable per request
/// slot.  `Pickup` and `Arrived` are raised by the elevator and awaited by
/// the passenger; `Boarded` and `Exited` flow the other way.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Elevator is at the pickup floor with doors open.
    Pickup,
    /// Passenger has finished boarding.
    Boarded,
    /// Elevator is at the destination floor with doors open.
    Arrived,
    /// Passenger has finished exiting.
    Exited,
}

impl Phase {
    pub const COUNT: usize = 4;

    /// All phases in trip order.
    pub const ALL: [Phase; Phase::COUNT] =
        [Phase::Pickup, Phase::Boarded, Phase::Arrived, Phase::Exited];

    /// Index into the per-slot flag and condvar arrays.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Phase::Pickup  => 0,
            Phase::Boarded => 1,
            Phase::Arrived => 2,
            Phase::Exited  => 3,
        }
    }

    /// Human-readable label, useful for log and CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Pickup  => "pickup",
            Phase::Boarded => "boarded",
            Phase::Arrived => "arrived",
            Phase::Exited  => "exited",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
