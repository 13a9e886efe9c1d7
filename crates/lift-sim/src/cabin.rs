//! In-memory cabin and passenger-action double.

use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use lift_core::{Direction, ElevatorId, Floor, PassengerId};
use lift_dispatch::{CabinControls, PassengerActions};

/// Position and door state of one simulated car.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct CarState {
    pub floor:      Floor,
    pub doors_open: bool,
}

/// An instrumented, purely in-memory implementation of [`CabinControls`] and
/// [`PassengerActions`].
///
/// Tracks each car's floor and door state, counts every callback, and tallies
/// contract violations (a car moving with open doors, a passenger walking
/// through closed ones).  A correct run always ends with
/// [`violations`][Self::violations]` == 0` — the assertion most tests lean on.
///
/// An optional per-step delay widens race windows: with it, a slow elevator
/// guarantees that publishes land before the first claim scan, and claim
/// contention between cars actually overlaps.
pub struct SimCabin {
    cars:       Mutex<Vec<CarState>>,
    moves:      AtomicU64,
    opens:      AtomicU64,
    closes:     AtomicU64,
    boards:     AtomicU64,
    exits:      AtomicU64,
    violations: AtomicU64,
    step_delay: Option<Duration>,
}

impl SimCabin {
    /// A cabin bank with one car per entry of `initial_floors`.
    pub fn new(initial_floors: &[Floor]) -> Self {
        Self {
            cars: Mutex::new(
                initial_floors
                    .iter()
                    .map(|&floor| CarState { floor, doors_open: false })
                    .collect(),
            ),
            moves:      AtomicU64::new(0),
            opens:      AtomicU64::new(0),
            closes:     AtomicU64::new(0),
            boards:     AtomicU64::new(0),
            exits:      AtomicU64::new(0),
            violations: AtomicU64::new(0),
            step_delay: None,
        }
    }

    /// Sleep this long inside every `move_one` call.
    pub fn with_step_delay(mut self, delay: Duration) -> Self {
        self.step_delay = Some(delay);
        self
    }

    // ── Inspection ────────────────────────────────────────────────────────

    pub fn car(&self, elevator: ElevatorId) -> CarState {
        self.cars.lock().expect("cabin state lock poisoned")[elevator.index()]
    }

    pub fn move_count(&self) -> u64 {
        self.moves.load(Ordering::SeqCst)
    }

    pub fn open_count(&self) -> u64 {
        self.opens.load(Ordering::SeqCst)
    }

    pub fn close_count(&self) -> u64 {
        self.closes.load(Ordering::SeqCst)
    }

    pub fn board_count(&self) -> u64 {
        self.boards.load(Ordering::SeqCst)
    }

    pub fn exit_count(&self) -> u64 {
        self.exits.load(Ordering::SeqCst)
    }

    /// Contract breaches observed so far; zero on every correct run.
    pub fn violations(&self) -> u64 {
        self.violations.load(Ordering::SeqCst)
    }

    fn flag_violation(&self) {
        self.violations.fetch_add(1, Ordering::SeqCst);
    }
}

impl CabinControls for SimCabin {
    fn move_one(&self, elevator: ElevatorId, direction: Direction) {
        if let Some(delay) = self.step_delay {
            std::thread::sleep(delay);
        }
        let mut cars = self.cars.lock().expect("cabin state lock poisoned");
        let car = &mut cars[elevator.index()];
        if car.doors_open {
            self.flag_violation();
        }
        car.floor = car.floor.step(direction);
        self.moves.fetch_add(1, Ordering::SeqCst);
    }

    fn open_doors(&self, elevator: ElevatorId) {
        let mut cars = self.cars.lock().expect("cabin state lock poisoned");
        let car = &mut cars[elevator.index()];
        if car.doors_open {
            self.flag_violation();
        }
        car.doors_open = true;
        self.opens.fetch_add(1, Ordering::SeqCst);
    }

    fn close_doors(&self, elevator: ElevatorId) {
        let mut cars = self.cars.lock().expect("cabin state lock poisoned");
        let car = &mut cars[elevator.index()];
        if !car.doors_open {
            self.flag_violation();
        }
        car.doors_open = false;
        self.closes.fetch_add(1, Ordering::SeqCst);
    }
}

impl PassengerActions for SimCabin {
    fn board(&self, _passenger: PassengerId, elevator: ElevatorId) {
        let cars = self.cars.lock().expect("cabin state lock poisoned");
        if !cars[elevator.index()].doors_open {
            self.flag_violation();
        }
        drop(cars);
        self.boards.fetch_add(1, Ordering::SeqCst);
    }

    fn exit(&self, _passenger: PassengerId, elevator: ElevatorId) {
        let cars = self.cars.lock().expect("cabin state lock poisoned");
        if !cars[elevator.index()].doors_open {
            self.flag_violation();
        }
        drop(cars);
        self.exits.fetch_add(1, Ordering::SeqCst);
    }
}
