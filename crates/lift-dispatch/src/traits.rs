//! External capability seams — the physical world as the core sees it.
//!
//! The coordination core never moves anything itself: it calls these traits,
//! always outside the table lock, and assumes they do not fail.  A callback
//! that never returns stalls its own trip but cannot corrupt shared state,
//! because every table mutation happens in a lock-protected phase transition.

use lift_core::{Direction, ElevatorId, PassengerId};

/// Physical elevator hardware: motor and doors.
///
/// # Thread safety
///
/// One implementation is shared by every elevator thread, so implementors
/// must be `Send + Sync` and distinguish cars by the `elevator` argument.
///
/// # Contract
///
/// - [`move_one`][Self::move_one] moves the car exactly one floor; the core
///   issues `|destination − source|` calls per leg, all in the same
///   direction.
/// - Doors are opened and closed exactly once per stop, and the car never
///   moves while its doors are open.
pub trait CabinControls: Send + Sync {
    /// Move `elevator` a single floor in `direction`.
    fn move_one(&self, elevator: ElevatorId, direction: Direction);

    /// Open the doors of `elevator` at its current floor.
    fn open_doors(&self, elevator: ElevatorId);

    /// Close the doors of `elevator`.
    fn close_doors(&self, elevator: ElevatorId);
}

/// Physical passenger movement through open elevator doors.
///
/// Invoked by the passenger's own thread while its elevator holds the doors
/// open; the elevator will not proceed until the corresponding handshake
/// flag is raised afterwards, so the implementation may be arbitrarily slow.
pub trait PassengerActions: Send + Sync {
    /// `passenger` walks into `elevator` at the pickup floor.
    fn board(&self, passenger: PassengerId, elevator: ElevatorId);

    /// `passenger` walks out of `elevator` at the destination floor.
    fn exit(&self, passenger: PassengerId, elevator: ElevatorId);
}
