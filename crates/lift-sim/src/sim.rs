//! The `Sim` struct: agent thread spawning, joining, and verification.

use std::sync::Arc;
use std::thread;

use lift_core::{BuildingConfig, ElevatorId, Floor, PassengerId, TripPlan};
use lift_dispatch::{
    CabinControls, DispatchResult, ElevatorAgent, PassengerActions, PassengerAgent, RequestTable,
    TripObserver,
};

use crate::{SimError, SimResult};

/// What a finished run looked like.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimSummary {
    /// Global trip count at the end — always equals the quota on success.
    pub completed_trips: u64,

    /// Trips served by each car, indexed by `ElevatorId`.  The distribution
    /// is scheduler-dependent; only the sum is deterministic.
    pub trips_per_elevator: Vec<u64>,

    /// Where each car came to rest.
    pub final_floors: Vec<Floor>,
}

/// A fully validated run, ready to execute.
///
/// Created via [`SimBuilder`][crate::SimBuilder].  `run` may be called more
/// than once; each call builds a fresh [`RequestTable`] so runs are
/// independent.
pub struct Sim {
    config:         BuildingConfig,
    itineraries:    Vec<Vec<TripPlan>>,
    initial_floors: Vec<Floor>,
}

impl Sim {
    pub(crate) fn assemble(
        config:         BuildingConfig,
        itineraries:    Vec<Vec<TripPlan>>,
        initial_floors: Vec<Floor>,
    ) -> Self {
        Self { config, itineraries, initial_floors }
    }

    pub fn config(&self) -> &BuildingConfig {
        &self.config
    }

    /// The trip list each passenger thread will work through.
    pub fn itineraries(&self) -> &[Vec<TripPlan>] {
        &self.itineraries
    }

    /// Starting floor of each car.
    pub fn initial_floors(&self) -> &[Floor] {
        &self.initial_floors
    }

    /// Spawn every agent thread, wait for the run to finish, and verify the
    /// quota accounting.
    ///
    /// One thread per passenger works through its itinerary sequentially; one
    /// thread per elevator serves claims until the quota is reached.  The
    /// `world` value plays both external roles (cabin hardware and passenger
    /// bodies), shared by reference across all agent threads.
    pub fn run<W, O>(&self, world: &W, observer: &O) -> SimResult<SimSummary>
    where
        W: CabinControls + PassengerActions,
        O: TripObserver,
    {
        let table = Arc::new(RequestTable::for_config(&self.config));

        let served = thread::scope(|s| -> SimResult<Vec<(u64, Floor)>> {
            let passengers: Vec<_> = self
                .itineraries
                .iter()
                .enumerate()
                .map(|(i, trips)| {
                    let table = Arc::clone(&table);
                    s.spawn(move || -> DispatchResult<()> {
                        let agent = PassengerAgent::new(PassengerId(i as u32), table);
                        for trip in trips {
                            agent.request_trip(*trip, world, observer)?;
                        }
                        Ok(())
                    })
                })
                .collect();

            let elevators: Vec<_> = self
                .initial_floors
                .iter()
                .enumerate()
                .map(|(i, &floor)| {
                    let table = Arc::clone(&table);
                    s.spawn(move || -> DispatchResult<(u64, Floor)> {
                        let mut agent = ElevatorAgent::new(ElevatorId(i as u32), floor, table);
                        let served = agent.run(world, observer)?;
                        Ok((served, agent.current_floor()))
                    })
                })
                .collect();

            for (i, handle) in passengers.into_iter().enumerate() {
                handle
                    .join()
                    .map_err(|_| SimError::AgentPanicked { role: "passenger", index: i })??;
            }
            elevators
                .into_iter()
                .enumerate()
                .map(|(i, handle)| {
                    handle
                        .join()
                        .map_err(|_| SimError::AgentPanicked { role: "elevator", index: i })?
                        .map_err(SimError::from)
                })
                .collect()
        })?;

        // ── Verify the accounting ─────────────────────────────────────────
        let expected = self.config.trip_quota();
        let completed = table.completed();
        if completed != expected {
            return Err(SimError::QuotaMismatch { expected, completed });
        }

        Ok(SimSummary {
            completed_trips:    completed,
            trips_per_elevator: served.iter().map(|&(n, _)| n).collect(),
            final_floors:       served.iter().map(|&(_, f)| f).collect(),
        })
    }
}
