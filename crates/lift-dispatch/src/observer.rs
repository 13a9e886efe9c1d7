//! Trip observer trait for progress reporting and data collection.

use lift_core::{ElevatorId, Floor, PassengerId};

/// Callbacks invoked by the agent protocols at every step of a trip.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Hooks fire concurrently from passenger
/// and elevator threads, hence the `&self` receivers and the `Send + Sync`
/// bound — implementations that accumulate state need interior mutability.
///
/// Hooks for the same trip arrive in protocol order (request → claim →
/// pickup → board → arrival → exit → complete); hooks for different trips
/// interleave arbitrarily.
///
/// # Example — claim counter
///
/// ```rust,ignore
/// use std::sync::atomic::{AtomicU64, Ordering};
///
/// #[derive(Default)]
/// struct ClaimCounter(AtomicU64);
///
/// impl TripObserver for ClaimCounter {
///     fn on_claim(&self, _p: PassengerId, _e: ElevatorId) {
///         self.0.fetch_add(1, Ordering::Relaxed);
///     }
/// }
/// ```
pub trait TripObserver: Send + Sync {
    /// A passenger is about to publish a request for `from → to`.
    fn on_request(&self, _passenger: PassengerId, _from: Floor, _to: Floor) {}

    /// An elevator took ownership of a pending request.
    fn on_claim(&self, _passenger: PassengerId, _elevator: ElevatorId) {}

    /// The elevator is at the pickup floor with doors open.
    fn on_pickup(&self, _passenger: PassengerId, _elevator: ElevatorId, _floor: Floor) {}

    /// The passenger finished boarding.
    fn on_board(&self, _passenger: PassengerId, _elevator: ElevatorId) {}

    /// The elevator is at the destination floor with doors open.
    fn on_arrival(&self, _passenger: PassengerId, _elevator: ElevatorId, _floor: Floor) {}

    /// The passenger finished exiting.
    fn on_exit(&self, _passenger: PassengerId, _elevator: ElevatorId) {}

    /// The elevator counted the trip; `completed` is the new global total.
    fn on_trip_complete(&self, _passenger: PassengerId, _elevator: ElevatorId, _completed: u64) {}

    /// An elevator observed the quota and returned, after serving
    /// `trips_served` trips.
    fn on_elevator_done(&self, _elevator: ElevatorId, _trips_served: u64) {}
}

/// A [`TripObserver`] that does nothing.  Use when you need to run agents
/// but don't want progress callbacks.
pub struct NoopObserver;

impl TripObserver for NoopObserver {}
