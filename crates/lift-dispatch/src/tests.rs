//! Unit and thread-interleaving tests for the coordination core.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Barrier, Mutex};
use std::thread;
use std::time::Duration;

use lift_core::{Direction, ElevatorId, Floor, PassengerId, TripPlan};

use crate::{
    CabinControls, ElevatorAgent, NoopObserver, PassengerActions, PassengerAgent, Phase,
    RequestState, RequestTable, TripObserver,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn table(passengers: u32, quota: u64) -> Arc<RequestTable> {
    Arc::new(RequestTable::new(passengers, quota))
}

/// Cabin double that only counts calls.
#[derive(Default)]
struct CountingCabin {
    moves:  AtomicU64,
    opens:  AtomicU64,
    closes: AtomicU64,
}

impl CabinControls for CountingCabin {
    fn move_one(&self, _elevator: ElevatorId, _direction: Direction) {
        self.moves.fetch_add(1, Ordering::SeqCst);
    }
    fn open_doors(&self, _elevator: ElevatorId) {
        self.opens.fetch_add(1, Ordering::SeqCst);
    }
    fn close_doors(&self, _elevator: ElevatorId) {
        self.closes.fetch_add(1, Ordering::SeqCst);
    }
}

struct NoopActions;

impl PassengerActions for NoopActions {
    fn board(&self, _passenger: PassengerId, _elevator: ElevatorId) {}
    fn exit(&self, _passenger: PassengerId, _elevator: ElevatorId) {}
}

/// Observer that appends `(event, passenger)` labels in arrival order.
#[derive(Default)]
struct Recorder(Mutex<Vec<(&'static str, PassengerId)>>);

impl Recorder {
    fn events_for(&self, passenger: PassengerId) -> Vec<&'static str> {
        self.0
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, p)| *p == passenger)
            .map(|(e, _)| *e)
            .collect()
    }
}

impl TripObserver for Recorder {
    fn on_request(&self, p: PassengerId, _from: Floor, _to: Floor) {
        self.0.lock().unwrap().push(("request", p));
    }
    fn on_claim(&self, p: PassengerId, _e: ElevatorId) {
        self.0.lock().unwrap().push(("claim", p));
    }
    fn on_pickup(&self, p: PassengerId, _e: ElevatorId, _f: Floor) {
        self.0.lock().unwrap().push(("pickup", p));
    }
    fn on_board(&self, p: PassengerId, _e: ElevatorId) {
        self.0.lock().unwrap().push(("board", p));
    }
    fn on_arrival(&self, p: PassengerId, _e: ElevatorId, _f: Floor) {
        self.0.lock().unwrap().push(("arrival", p));
    }
    fn on_exit(&self, p: PassengerId, _e: ElevatorId) {
        self.0.lock().unwrap().push(("exit", p));
    }
    fn on_trip_complete(&self, p: PassengerId, _e: ElevatorId, _completed: u64) {
        self.0.lock().unwrap().push(("complete", p));
    }
}

// ── Table state transitions ───────────────────────────────────────────────────

#[cfg(test)]
mod table_state {
    use super::*;

    #[test]
    fn publish_marks_pending() {
        let t = table(2, 2);
        t.publish(PassengerId(1), Floor(3), Floor(7)).unwrap();

        let slot = t.slot(PassengerId(1)).unwrap();
        assert_eq!(slot.state, RequestState::Pending);
        assert_eq!(slot.pickup, Floor(3));
        assert_eq!(slot.destination, Floor(7));
        assert_eq!(t.slot(PassengerId(0)).unwrap().state, RequestState::Idle);
    }

    #[test]
    fn claim_takes_lowest_slot_first() {
        let t = table(3, 3);
        // Publish out of index order; claims must follow slot order anyway.
        t.publish(PassengerId(2), Floor(0), Floor(1)).unwrap();
        t.publish(PassengerId(1), Floor(0), Floor(2)).unwrap();

        let first = t.try_claim(ElevatorId(0)).unwrap();
        assert_eq!(first.passenger, PassengerId(1));
        let second = t.try_claim(ElevatorId(0)).unwrap();
        assert_eq!(second.passenger, PassengerId(2));
        assert!(t.try_claim(ElevatorId(0)).is_none());
    }

    #[test]
    fn claim_records_assignment_atomically() {
        let t = table(1, 1);
        t.publish(PassengerId(0), Floor(0), Floor(5)).unwrap();

        let claim = t.try_claim(ElevatorId(7)).unwrap();
        assert_eq!(claim.pickup, Floor(0));
        assert_eq!(claim.destination, Floor(5));

        let slot = t.slot(PassengerId(0)).unwrap();
        assert_eq!(slot.state, RequestState::Claimed);
        assert_eq!(slot.elevator, ElevatorId(7));
    }

    #[test]
    fn claim_next_returns_none_once_quota_reached() {
        let t = table(1, 0);
        // Quota zero: terminal before any request, even a pending one.
        t.publish(PassengerId(0), Floor(0), Floor(1)).unwrap();
        assert!(t.claim_next(ElevatorId(0)).is_none());
        assert!(t.is_done());
    }

    #[test]
    fn retire_resets_slot() {
        let t = table(1, 1);
        t.publish(PassengerId(0), Floor(0), Floor(5)).unwrap();
        t.try_claim(ElevatorId(3)).unwrap();

        t.retire(PassengerId(0)).unwrap();
        let slot = t.slot(PassengerId(0)).unwrap();
        assert_eq!(slot.state, RequestState::Idle);
        assert_eq!(slot.elevator, ElevatorId::INVALID);
        assert!(slot.flag(Phase::Exited), "exited flag awaits the elevator");
    }

    #[test]
    fn finish_trip_counts_and_clears() {
        let t = table(1, 1);
        t.publish(PassengerId(0), Floor(0), Floor(5)).unwrap();
        t.try_claim(ElevatorId(0)).unwrap();
        t.retire(PassengerId(0)).unwrap();

        assert_eq!(t.finish_trip(PassengerId(0)).unwrap(), 1);
        assert!(t.is_done());
        assert!(!t.slot(PassengerId(0)).unwrap().flag(Phase::Exited));
    }

    #[test]
    fn out_of_range_passenger_errors() {
        let t = table(2, 2);
        assert!(t.publish(PassengerId(2), Floor(0), Floor(1)).is_err());
        assert!(t.raise(PassengerId(9), Phase::Pickup).is_err());
        assert!(t.slot(PassengerId(2)).is_err());
    }
}

// ── Flag/condvar discipline ───────────────────────────────────────────────────

#[cfg(test)]
mod phase_flags {
    use super::*;

    #[test]
    fn raise_before_await_is_not_lost() {
        // The flag, not the notification, carries the meaning: a signal that
        // arrives before the wait begins must still be observed.
        let t = table(1, 1);
        t.publish(PassengerId(0), Floor(0), Floor(5)).unwrap();
        t.try_claim(ElevatorId(4)).unwrap();

        t.raise(PassengerId(0), Phase::Pickup).unwrap();
        let assigned = t.await_pickup(PassengerId(0)).unwrap();
        assert_eq!(assigned, ElevatorId(4));
        assert!(!t.slot(PassengerId(0)).unwrap().flag(Phase::Pickup));
    }

    #[test]
    fn await_phase_clears_flag() {
        let t = table(1, 1);
        t.raise(PassengerId(0), Phase::Boarded).unwrap();
        assert!(t.slot(PassengerId(0)).unwrap().flag(Phase::Boarded));

        t.await_phase(PassengerId(0), Phase::Boarded).unwrap();
        assert!(!t.slot(PassengerId(0)).unwrap().flag(Phase::Boarded));
    }

    #[test]
    fn await_blocks_until_raised() {
        let t = table(1, 1);
        let waiter = {
            let t = Arc::clone(&t);
            thread::spawn(move || t.await_phase(PassengerId(0), Phase::Arrived))
        };
        // Give the waiter time to park on the condvar.
        thread::sleep(Duration::from_millis(50));
        assert!(!waiter.is_finished());

        t.raise(PassengerId(0), Phase::Arrived).unwrap();
        waiter.join().unwrap().unwrap();
    }
}

// ── Elevator parking and wakeup ───────────────────────────────────────────────

#[cfg(test)]
mod claim_blocking {
    use super::*;

    #[test]
    fn claim_next_parks_until_publish() {
        let t = table(1, 1);
        let claimed = Arc::new(AtomicBool::new(false));

        let claimer = {
            let t = Arc::clone(&t);
            let claimed = Arc::clone(&claimed);
            thread::spawn(move || {
                let claim = t.claim_next(ElevatorId(0));
                claimed.store(true, Ordering::SeqCst);
                claim
            })
        };

        thread::sleep(Duration::from_millis(50));
        assert!(!claimed.load(Ordering::SeqCst), "claimed before any publish");

        t.publish(PassengerId(0), Floor(2), Floor(6)).unwrap();
        let claim = claimer.join().unwrap().expect("publish must wake the claimer");
        assert_eq!(claim.passenger, PassengerId(0));
        assert_eq!(claim.pickup, Floor(2));
    }

    #[test]
    fn quota_completion_wakes_every_parked_elevator() {
        let t = table(1, 1);

        // Two elevators compete for one lifetime trip; whichever claims it
        // completes the accounting, and both must then observe termination.
        let elevators: Vec<_> = (0..2)
            .map(|id| {
                let t = Arc::clone(&t);
                thread::spawn(move || {
                    let mut served = 0;
                    while let Some(claim) = t.claim_next(ElevatorId(id)) {
                        t.finish_trip(claim.passenger).unwrap();
                        served += 1;
                    }
                    served
                })
            })
            .collect();

        // Exited is raised before the winner waits on it; the flag must hold.
        t.publish(PassengerId(0), Floor(0), Floor(3)).unwrap();
        t.retire(PassengerId(0)).unwrap();

        let total: u64 = elevators.into_iter().map(|h| h.join().unwrap()).sum();
        assert_eq!(total, 1);
        assert_eq!(t.completed(), 1);
    }
}

// ── Mutual exclusion on claims ────────────────────────────────────────────────

#[cfg(test)]
mod claim_races {
    use super::*;

    #[test]
    fn one_pending_slot_one_winner() {
        const CONTENDERS: usize = 4;

        for _ in 0..50 {
            let t = table(1, 10);
            t.publish(PassengerId(0), Floor(0), Floor(1)).unwrap();

            let barrier = Arc::new(Barrier::new(CONTENDERS));
            let handles: Vec<_> = (0..CONTENDERS)
                .map(|id| {
                    let t = Arc::clone(&t);
                    let barrier = Arc::clone(&barrier);
                    thread::spawn(move || {
                        barrier.wait();
                        t.try_claim(ElevatorId(id as u32))
                    })
                })
                .collect();

            let wins = handles
                .into_iter()
                .filter_map(|h| h.join().unwrap())
                .count();
            assert_eq!(wins, 1, "exactly one contender may claim a pending slot");
        }
    }
}

// ── Full agent protocol ───────────────────────────────────────────────────────

#[cfg(test)]
mod protocol {
    use super::*;

    #[test]
    fn single_trip_runs_all_phases_in_order() {
        let t = table(1, 1);
        let cabin = CountingCabin::default();
        let recorder = Recorder::default();
        let passenger = PassengerAgent::new(PassengerId(0), Arc::clone(&t));

        thread::scope(|s| {
            s.spawn(|| {
                passenger
                    .request_trip(TripPlan::new(Floor(0), Floor(5)), &NoopActions, &recorder)
                    .unwrap();
            });

            let mut elevator = ElevatorAgent::new(ElevatorId(0), Floor(0), Arc::clone(&t));
            let served = elevator.run(&cabin, &recorder).unwrap();
            assert_eq!(served, 1);
            assert_eq!(elevator.current_floor(), Floor(5));
        });

        assert_eq!(
            recorder.events_for(PassengerId(0)),
            vec!["request", "claim", "pickup", "board", "arrival", "exit", "complete"],
        );
        // Start at F0, pickup F0, destination F5: five unit moves, one door
        // cycle per stop.
        assert_eq!(cabin.moves.load(Ordering::SeqCst), 5);
        assert_eq!(cabin.opens.load(Ordering::SeqCst), 2);
        assert_eq!(cabin.closes.load(Ordering::SeqCst), 2);
        assert_eq!(t.completed(), 1);
    }

    #[test]
    fn three_passengers_two_elevators_each_served_once() {
        let t = table(3, 3);
        let cabin = CountingCabin::default();
        let recorder = Recorder::default();

        let served_total: u64 = thread::scope(|s| {
            for p in 0..3u32 {
                let t = Arc::clone(&t);
                let recorder = &recorder;
                s.spawn(move || {
                    let agent = PassengerAgent::new(PassengerId(p), t);
                    let trip = TripPlan::new(Floor(p as i32), Floor(6 - p as i32));
                    agent.request_trip(trip, &NoopActions, recorder).unwrap();
                });
            }

            let elevators: Vec<_> = (0..2u32)
                .map(|e| {
                    let t = Arc::clone(&t);
                    let cabin = &cabin;
                    let recorder = &recorder;
                    s.spawn(move || {
                        ElevatorAgent::new(ElevatorId(e), Floor(0), t)
                            .run(cabin, recorder)
                            .unwrap()
                    })
                })
                .collect();
            elevators.into_iter().map(|h| h.join().unwrap()).sum()
        });

        assert_eq!(served_total, 3);
        assert_eq!(t.completed(), 3);
        for p in 0..3u32 {
            let events = recorder.events_for(PassengerId(p));
            assert_eq!(
                events,
                vec!["request", "claim", "pickup", "board", "arrival", "exit", "complete"],
                "passenger {p} saw a malformed trip"
            );
        }
    }

    #[test]
    fn passenger_repeats_trips_on_the_same_slot() {
        let t = table(1, 3);
        let cabin = CountingCabin::default();

        thread::scope(|s| {
            let t2 = Arc::clone(&t);
            s.spawn(move || {
                let agent = PassengerAgent::new(PassengerId(0), t2);
                for trip in [
                    TripPlan::new(Floor(0), Floor(4)),
                    TripPlan::new(Floor(4), Floor(1)),
                    TripPlan::new(Floor(1), Floor(2)),
                ] {
                    agent.request_trip(trip, &NoopActions, &NoopObserver).unwrap();
                }
            });

            let served = ElevatorAgent::new(ElevatorId(0), Floor(0), Arc::clone(&t))
                .run(&cabin, &NoopObserver)
                .unwrap();
            assert_eq!(served, 3);
        });

        assert_eq!(t.completed(), 3);
        let slot = t.slot(PassengerId(0)).unwrap();
        assert_eq!(slot.state, RequestState::Idle);
        assert_eq!(slot.flags, [false; Phase::COUNT]);
    }
}
