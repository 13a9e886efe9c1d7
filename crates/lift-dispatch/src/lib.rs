//! `lift-dispatch` — the coordination core of the rust_lift framework.
//!
//! # Four-phase handshake
//!
//! One passenger thread and one elevator thread rendezvous through a shared
//! [`RequestTable`]: a single mutex over all per-passenger slots plus one
//! condition variable per slot per phase.
//!
//! ```text
//! Passenger                    RequestTable                    Elevator
//! ─────────                    ────────────                    ────────
//! publish(from, to) ──────────► Pending ─────────────────────► claim_next
//!                                                              drive to pickup, open
//! await_pickup ◄──────────────── pickup ◄───────────────────── raise(Pickup)
//! board (callback)
//! raise(Boarded) ─────────────► boarded ─────────────────────► await(Boarded)
//!                                                              close, drive, open
//! await(Arrived) ◄────────────── arrived ◄──────────────────── raise(Arrived)
//! exit (callback)
//! retire ─────────────────────► exited ──────────────────────► finish_trip
//! ```
//!
//! Every wait is a predicate-checked wait: the flag is re-tested after each
//! wakeup, so spurious wakeups and signal-before-wait races are harmless.
//! Each flag has exactly one raiser and one waiter per trip; the waiter
//! clears the flag before the slot is reused.
//!
//! Elevator threads terminate when the global trip counter reaches
//! `passenger_count × trips_per_passenger` — no shutdown signal is needed
//! because the predicate is globally visible under the table lock.
//!
//! # External seams
//!
//! Physical movement and door hardware are consumed through
//! [`CabinControls`]; boarding/exiting bodies through [`PassengerActions`];
//! progress is reported through [`TripObserver`].  All three are invoked
//! outside the table lock, so a slow callback stalls only its own trip.

pub mod elevator;
pub mod error;
pub mod observer;
pub mod passenger;
pub mod phase;
pub mod slot;
pub mod table;
pub mod traits;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use elevator::ElevatorAgent;
pub use error::{DispatchError, DispatchResult};
pub use observer::{NoopObserver, TripObserver};
pub use passenger::PassengerAgent;
pub use phase::Phase;
pub use slot::{RequestState, SlotState};
pub use table::{Claim, RequestTable};
pub use traits::{CabinControls, PassengerActions};
