//! The elevator side of the handshake.

use std::sync::Arc;

use lift_core::{ElevatorId, Floor};

use crate::{CabinControls, Claim, DispatchResult, Phase, RequestTable, TripObserver};

/// One elevator car's control loop.
///
/// An elevator serves whole trips: once it claims a request it is
/// contractually obligated to carry that passenger through all four phases
/// before claiming another, which is why every wait in the protocol is
/// eventually satisfied.
pub struct ElevatorAgent {
    id:    ElevatorId,
    floor: Floor,
    table: Arc<RequestTable>,
}

impl ElevatorAgent {
    pub fn new(id: ElevatorId, initial_floor: Floor, table: Arc<RequestTable>) -> Self {
        Self { id, floor: initial_floor, table }
    }

    pub fn id(&self) -> ElevatorId {
        self.id
    }

    /// Where the car currently is (meaningful between trips, too).
    pub fn current_floor(&self) -> Floor {
        self.floor
    }

    /// Serve trips until the global quota is reached, then return the number
    /// of trips this car served.
    ///
    /// Claim selection is strictly first-found-in-slot-order — not nearest
    /// car, not load-balanced.  Correctness (each request served exactly
    /// once, eventually) is the contract; routing quality is not.
    pub fn run<C, O>(&mut self, cabin: &C, observer: &O) -> DispatchResult<u64>
    where
        C: CabinControls + ?Sized,
        O: TripObserver + ?Sized,
    {
        let mut served = 0;
        while let Some(claim) = self.table.claim_next(self.id) {
            observer.on_claim(claim.passenger, self.id);
            self.serve(&claim, cabin, observer)?;
            served += 1;
        }
        observer.on_elevator_done(self.id, served);
        Ok(served)
    }

    /// Carry one claimed passenger through the four handshake phases.
    fn serve<C, O>(&mut self, claim: &Claim, cabin: &C, observer: &O) -> DispatchResult<()>
    where
        C: CabinControls + ?Sized,
        O: TripObserver + ?Sized,
    {
        // Pickup leg.  Observer hooks fire before the flag is raised so the
        // passenger's follow-up events cannot overtake them in the log.
        self.drive_to(claim.pickup, cabin);
        cabin.open_doors(self.id);
        observer.on_pickup(claim.passenger, self.id, claim.pickup);
        self.table.raise(claim.passenger, Phase::Pickup)?;

        self.table.await_phase(claim.passenger, Phase::Boarded)?;

        // Carry leg.
        cabin.close_doors(self.id);
        self.drive_to(claim.destination, cabin);
        cabin.open_doors(self.id);
        observer.on_arrival(claim.passenger, self.id, claim.destination);
        self.table.raise(claim.passenger, Phase::Arrived)?;

        let completed = self.table.finish_trip(claim.passenger)?;
        cabin.close_doors(self.id);
        observer.on_trip_complete(claim.passenger, self.id, completed);
        Ok(())
    }

    /// Decompose a multi-floor displacement into unit `move_one` calls and
    /// track the car's position.
    fn drive_to<C>(&mut self, destination: Floor, cabin: &C)
    where
        C: CabinControls + ?Sized,
    {
        while let Some(direction) = self.floor.direction_to(destination) {
            cabin.move_one(self.id, direction);
            self.floor = self.floor.step(direction);
        }
    }
}
