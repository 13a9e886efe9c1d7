//! Integration tests for lift-sim: builder validation and whole-run scenarios.

use std::sync::Mutex;
use std::time::Duration;

use lift_core::{BuildingConfig, ElevatorId, Floor, PassengerId, TripPlan};
use lift_dispatch::{NoopObserver, TripObserver};

use crate::{SimBuilder, SimCabin, SimError};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn config(passengers: u32, elevators: u32, trips: u32) -> BuildingConfig {
    BuildingConfig {
        floor_count:         10,
        passenger_count:     passengers,
        elevator_count:      elevators,
        trips_per_passenger: trips,
        seed:                42,
    }
}

/// Records which elevator claimed each trip, keyed by passenger.
#[derive(Default)]
struct ClaimLog(Mutex<Vec<(PassengerId, ElevatorId)>>);

impl TripObserver for ClaimLog {
    fn on_claim(&self, passenger: PassengerId, elevator: ElevatorId) {
        self.0.lock().unwrap().push((passenger, elevator));
    }
}

// ── Builder validation ────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use super::*;

    #[test]
    fn builds_with_defaults() {
        let sim = SimBuilder::new(config(3, 2, 4)).build().unwrap();
        assert_eq!(sim.itineraries().len(), 3);
        assert!(sim.itineraries().iter().all(|t| t.len() == 4));
        assert_eq!(sim.initial_floors(), &[Floor::GROUND; 2]);
    }

    #[test]
    fn generated_itineraries_are_deterministic_and_in_range() {
        let a = SimBuilder::new(config(4, 1, 8)).build().unwrap();
        let b = SimBuilder::new(config(4, 1, 8)).build().unwrap();
        assert_eq!(a.itineraries(), b.itineraries());

        for trips in a.itineraries() {
            for trip in trips {
                assert!((0..10).contains(&trip.from.0));
                assert!((0..10).contains(&trip.to.0));
                assert_ne!(trip.from, trip.to);
            }
        }
    }

    #[test]
    fn different_seeds_differ() {
        let a = SimBuilder::new(config(4, 1, 8)).build().unwrap();
        let mut other = config(4, 1, 8);
        other.seed = 43;
        let b = SimBuilder::new(other).build().unwrap();
        assert_ne!(a.itineraries(), b.itineraries());
    }

    #[test]
    fn itinerary_count_mismatch_errors() {
        let result = SimBuilder::new(config(3, 1, 1))
            .itineraries(vec![vec![TripPlan::new(Floor(0), Floor(1))]; 2])
            .build();
        assert!(matches!(result, Err(SimError::CountMismatch { .. })));
    }

    #[test]
    fn trip_count_mismatch_errors() {
        // Two trips supplied, but the quota says one per passenger.
        let result = SimBuilder::new(config(1, 1, 1))
            .itineraries(vec![vec![
                TripPlan::new(Floor(0), Floor(1)),
                TripPlan::new(Floor(1), Floor(0)),
            ]])
            .build();
        assert!(matches!(result, Err(SimError::CountMismatch { .. })));
    }

    #[test]
    fn out_of_building_trip_errors() {
        let result = SimBuilder::new(config(1, 1, 1))
            .itineraries(vec![vec![TripPlan::new(Floor(0), Floor(10))]])
            .build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn initial_floor_validation() {
        let result = SimBuilder::new(config(1, 2, 1))
            .initial_floors(vec![Floor(0)])
            .build();
        assert!(matches!(result, Err(SimError::CountMismatch { .. })));

        let result = SimBuilder::new(config(1, 2, 1))
            .initial_floors(vec![Floor(0), Floor(-1)])
            .build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn invalid_config_rejected() {
        assert!(matches!(
            SimBuilder::new(config(0, 1, 1)).build(),
            Err(SimError::Config(_))
        ));
    }
}

// ── Whole-run scenarios ───────────────────────────────────────────────────────

#[cfg(test)]
mod scenarios {
    use super::*;

    #[test]
    fn single_passenger_single_elevator() {
        // One car starting at F0; the passenger rides F5 → F9.  Five unit
        // moves to reach the pickup, doors, four carry moves, doors.
        let sim = SimBuilder::new(config(1, 1, 1))
            .itineraries(vec![vec![TripPlan::new(Floor(5), Floor(9))]])
            .build()
            .unwrap();
        let cabin = SimCabin::new(sim.initial_floors());

        let summary = sim.run(&cabin, &NoopObserver).unwrap();

        assert_eq!(summary.completed_trips, 1);
        assert_eq!(summary.trips_per_elevator, vec![1]);
        assert_eq!(summary.final_floors, vec![Floor(9)]);
        assert_eq!(cabin.move_count(), 9);
        assert_eq!(cabin.open_count(), 2);
        assert_eq!(cabin.close_count(), 2);
        assert_eq!(cabin.board_count(), 1);
        assert_eq!(cabin.exit_count(), 1);
        assert_eq!(cabin.violations(), 0);
        assert_eq!(cabin.car(ElevatorId(0)).floor, Floor(9));
        assert!(!cabin.car(ElevatorId(0)).doors_open);
    }

    #[test]
    fn three_passengers_two_elevators() {
        let sim = SimBuilder::new(config(3, 2, 1))
            .itineraries(vec![
                vec![TripPlan::new(Floor(0), Floor(5))],
                vec![TripPlan::new(Floor(2), Floor(7))],
                vec![TripPlan::new(Floor(9), Floor(1))],
            ])
            .build()
            .unwrap();
        let cabin = SimCabin::new(sim.initial_floors());
        let claims = ClaimLog::default();

        let summary = sim.run(&cabin, &claims).unwrap();

        assert_eq!(summary.completed_trips, 3);
        assert_eq!(summary.trips_per_elevator.iter().sum::<u64>(), 3);
        assert_eq!(cabin.board_count(), 3);
        assert_eq!(cabin.exit_count(), 3);
        assert_eq!(cabin.violations(), 0);

        // Exactly-once service: every passenger claimed exactly once, each
        // by one of the two cars.
        let claims = claims.0.lock().unwrap();
        assert_eq!(claims.len(), 3);
        for p in 0..3u32 {
            let claimed: Vec<_> = claims.iter().filter(|(pp, _)| *pp == PassengerId(p)).collect();
            assert_eq!(claimed.len(), 1, "passenger {p} must be claimed exactly once");
            assert!(claimed[0].1.index() < 2);
        }
    }

    #[test]
    fn zero_trip_quota_terminates_immediately() {
        let sim = SimBuilder::new(config(2, 2, 0)).build().unwrap();
        let cabin = SimCabin::new(sim.initial_floors());

        let summary = sim.run(&cabin, &NoopObserver).unwrap();
        assert_eq!(summary.completed_trips, 0);
        assert_eq!(summary.trips_per_elevator, vec![0, 0]);
        assert_eq!(cabin.move_count(), 0);
    }

    #[test]
    fn contended_stress_run() {
        // More passengers than cars, several trips each, and a step delay so
        // claims genuinely contend.  Violations and the quota check are the
        // assertions; the interleaving itself is up to the scheduler.
        let sim = SimBuilder::new(config(8, 3, 4)).build().unwrap();
        let cabin =
            SimCabin::new(sim.initial_floors()).with_step_delay(Duration::from_micros(200));

        let summary = sim.run(&cabin, &NoopObserver).unwrap();

        assert_eq!(summary.completed_trips, 32);
        assert_eq!(summary.trips_per_elevator.iter().sum::<u64>(), 32);
        assert_eq!(cabin.board_count(), 32);
        assert_eq!(cabin.exit_count(), 32);
        // One door cycle per stop, two stops per trip.
        assert_eq!(cabin.open_count(), 64);
        assert_eq!(cabin.close_count(), 64);
        assert_eq!(cabin.violations(), 0);
    }

    #[test]
    fn requests_published_before_elevators_poll_are_served() {
        // A large step delay keeps every car busy crawling to its first
        // pickup while the remaining passengers publish; none of those early
        // requests may be lost.
        let sim = SimBuilder::new(config(6, 1, 1)).build().unwrap();
        let cabin =
            SimCabin::new(sim.initial_floors()).with_step_delay(Duration::from_millis(2));

        let summary = sim.run(&cabin, &NoopObserver).unwrap();
        assert_eq!(summary.completed_trips, 6);
        assert_eq!(summary.trips_per_elevator, vec![6]);
    }

    #[test]
    fn runs_are_repeatable() {
        let sim = SimBuilder::new(config(2, 1, 2)).build().unwrap();
        let first = {
            let cabin = SimCabin::new(sim.initial_floors());
            sim.run(&cabin, &NoopObserver).unwrap()
        };
        let second = {
            let cabin = SimCabin::new(sim.initial_floors());
            sim.run(&cabin, &NoopObserver).unwrap()
        };
        assert_eq!(first.completed_trips, second.completed_trips);
    }
}
