//! The passenger side of the handshake.

use std::sync::Arc;

use lift_core::{PassengerId, TripPlan};

use crate::{DispatchResult, PassengerActions, Phase, RequestTable, TripObserver};

/// One passenger's view of the request table.
///
/// The owning thread calls [`request_trip`][Self::request_trip] once per
/// desired trip; the agent blocks inside it until an elevator has carried
/// the passenger to the destination.  Trip repetition is the caller's
/// responsibility (see `lift-sim`), which is what makes the global quota
/// accounting exact.
pub struct PassengerAgent {
    id:    PassengerId,
    table: Arc<RequestTable>,
}

impl PassengerAgent {
    pub fn new(id: PassengerId, table: Arc<RequestTable>) -> Self {
        Self { id, table }
    }

    pub fn id(&self) -> PassengerId {
        self.id
    }

    /// Execute one trip's protocol end to end.
    ///
    /// 1. Publish the request (slot goes `Pending`).
    /// 2. Block until some elevator raises `Pickup`; learn which one.
    /// 3. Board through the open doors — outside the lock, may be slow.
    /// 4. Raise `Boarded`.
    /// 5. Block until the elevator raises `Arrived`.
    /// 6. Exit through the open doors — outside the lock.
    /// 7. Retire the slot (raises `Exited`, slot back to `Idle`).
    ///
    /// Only id misuse can fail; the handshake itself has no error path.
    pub fn request_trip<A, O>(
        &self,
        trip:     TripPlan,
        actions:  &A,
        observer: &O,
    ) -> DispatchResult<()>
    where
        A: PassengerActions + ?Sized,
        O: TripObserver + ?Sized,
    {
        observer.on_request(self.id, trip.from, trip.to);
        self.table.publish(self.id, trip.from, trip.to)?;

        let elevator = self.table.await_pickup(self.id)?;

        actions.board(self.id, elevator);
        observer.on_board(self.id, elevator);
        self.table.raise(self.id, Phase::Boarded)?;

        self.table.await_phase(self.id, Phase::Arrived)?;

        actions.exit(self.id, elevator);
        observer.on_exit(self.id, elevator);
        self.table.retire(self.id)?;
        Ok(())
    }
}
