//! Per-passenger request slot state.

use lift_core::{ElevatorId, Floor};

use crate::Phase;

/// Where a request slot is in its lifecycle.
///
/// `Pending` lasts from a passenger's publish until some elevator's claim;
/// `Claimed` from the claim until the passenger retires the slot.  The floors
/// and the elevator assignment are only meaningful outside `Idle`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RequestState {
    /// No outstanding request.
    #[default]
    Idle,
    /// Published, not yet claimed by an elevator.
    Pending,
    /// Claimed by exactly one elevator; the handshake is in flight.
    Claimed,
}

/// The request table's record for one passenger.
///
/// A slot cycles `Idle → Pending → Claimed → Idle` once per trip and is
/// reused for every trip the same passenger requests.  Each phase flag rises
/// exactly once per trip and is cleared by its single waiter before reuse.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotState {
    /// Floor the passenger is waiting on.
    pub pickup: Floor,

    /// Floor the passenger wants to reach.
    pub destination: Floor,

    /// Lifecycle state; see [`RequestState`].
    pub state: RequestState,

    /// The elevator serving the current trip, or [`ElevatorId::INVALID`]
    /// between trips.
    pub elevator: ElevatorId,

    /// One rendezvous flag per [`Phase`], indexed by `Phase::index()`.
    pub flags: [bool; Phase::COUNT],
}

impl SlotState {
    /// A freshly initialized slot: idle, unassigned, all flags down.
    pub fn idle() -> Self {
        Self {
            pickup:      Floor::GROUND,
            destination: Floor::GROUND,
            state:       RequestState::Idle,
            elevator:    ElevatorId::INVALID,
            flags:       [false; Phase::COUNT],
        }
    }

    /// Read one phase flag.
    #[inline]
    pub fn flag(&self, phase: Phase) -> bool {
        self.flags[phase.index()]
    }
}

impl Default for SlotState {
    fn default() -> Self {
        Self::idle()
    }
}
