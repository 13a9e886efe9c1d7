//! basic — smallest demo for the rust_lift coordination framework.
//!
//! Six passenger threads ride two elevator cars through a ten-floor building,
//! three trips each.  Every handshake step is echoed to the console and logged
//! to `output/basic/trip_events.csv`.  Scale comment: bump the constants to
//! hundreds of passengers to stress the claim path; the protocol does not
//! change.

use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::Result;

use lift_core::{BuildingConfig, ElevatorId, Floor, PassengerId};
use lift_dispatch::TripObserver;
use lift_output::{CsvEventWriter, EventLogObserver, EventWriter};
use lift_sim::{SimBuilder, SimCabin};

// ── Constants ─────────────────────────────────────────────────────────────────

const FLOOR_COUNT:         u32 = 10;
const PASSENGER_COUNT:     u32 = 6;
const ELEVATOR_COUNT:      u32 = 2;
const TRIPS_PER_PASSENGER: u32 = 3;
const SEED:                u64 = 42;

// Slows cars down enough that the console trace shows real interleaving.
const STEP_DELAY: Duration = Duration::from_millis(2);

// ── Observer wrapper: echo to console, forward to the CSV log ─────────────────

struct ConsoleObserver<W: EventWriter> {
    log: EventLogObserver<W>,
}

impl<W: EventWriter> ConsoleObserver<W> {
    fn new(log: EventLogObserver<W>) -> Self {
        Self { log }
    }
}

impl<W: EventWriter> TripObserver for ConsoleObserver<W> {
    fn on_request(&self, passenger: PassengerId, from: Floor, to: Floor) {
        println!("  P{} requests {from} → {to}", passenger.0);
        self.log.on_request(passenger, from, to);
    }

    fn on_claim(&self, passenger: PassengerId, elevator: ElevatorId) {
        println!("  E{} claims P{}", elevator.0, passenger.0);
        self.log.on_claim(passenger, elevator);
    }

    fn on_pickup(&self, passenger: PassengerId, elevator: ElevatorId, floor: Floor) {
        println!("  E{} ready for P{} at {floor}", elevator.0, passenger.0);
        self.log.on_pickup(passenger, elevator, floor);
    }

    fn on_board(&self, passenger: PassengerId, elevator: ElevatorId) {
        println!("  P{} boards E{}", passenger.0, elevator.0);
        self.log.on_board(passenger, elevator);
    }

    fn on_arrival(&self, passenger: PassengerId, elevator: ElevatorId, floor: Floor) {
        println!("  E{} arrives with P{} at {floor}", elevator.0, passenger.0);
        self.log.on_arrival(passenger, elevator, floor);
    }

    fn on_exit(&self, passenger: PassengerId, elevator: ElevatorId) {
        println!("  P{} exits E{}", passenger.0, elevator.0);
        self.log.on_exit(passenger, elevator);
    }

    fn on_trip_complete(&self, passenger: PassengerId, elevator: ElevatorId, completed: u64) {
        println!("  trip #{completed} done (P{} via E{})", passenger.0, elevator.0);
        self.log.on_trip_complete(passenger, elevator, completed);
    }

    fn on_elevator_done(&self, elevator: ElevatorId, trips_served: u64) {
        println!("  E{} retires after {trips_served} trips", elevator.0);
        self.log.on_elevator_done(elevator, trips_served);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== basic — rust_lift coordination demo ===");
    println!(
        "Passengers: {PASSENGER_COUNT}  |  Elevators: {ELEVATOR_COUNT}  |  \
         Trips each: {TRIPS_PER_PASSENGER}  |  Seed: {SEED}"
    );
    println!();

    // 1. Configure the building and generate seeded itineraries.
    let config = BuildingConfig {
        floor_count:         FLOOR_COUNT,
        passenger_count:     PASSENGER_COUNT,
        elevator_count:      ELEVATOR_COUNT,
        trips_per_passenger: TRIPS_PER_PASSENGER,
        seed:                SEED,
    };
    let sim = SimBuilder::new(config.clone()).build()?;

    println!("Itineraries:");
    for (i, trips) in sim.itineraries().iter().enumerate() {
        let plan: Vec<String> = trips.iter().map(|t| t.to_string()).collect();
        println!("  P{i}: {}", plan.join(", "));
    }
    println!();

    // 2. Set up the cabin bank and the event log.
    let cabin = SimCabin::new(sim.initial_floors()).with_step_delay(STEP_DELAY);

    std::fs::create_dir_all("output/basic")?;
    let writer = CsvEventWriter::new(Path::new("output/basic"))?;
    let observer = ConsoleObserver::new(EventLogObserver::new(writer));

    // 3. Run.
    let t0 = Instant::now();
    let summary = sim.run(&cabin, &observer)?;
    let elapsed = t0.elapsed();

    observer.log.finish()?;
    if let Some(e) = observer.log.take_error() {
        eprintln!("event log incomplete: {e}");
    }

    // 4. Summary.
    println!();
    println!("Run complete in {:.3} s", elapsed.as_secs_f64());
    println!(
        "  trips completed : {} / {}",
        summary.completed_trips,
        config.trip_quota()
    );
    println!("  car moves       : {}", cabin.move_count());
    println!("  door cycles     : {}", cabin.open_count());
    println!("  violations      : {}", cabin.violations());
    println!("  event log       : output/basic/trip_events.csv");
    println!();

    println!("{:<10} {:<8} {:<12}", "Elevator", "Trips", "Final floor");
    println!("{}", "-".repeat(32));
    for (i, served) in summary.trips_per_elevator.iter().enumerate() {
        println!("{:<10} {:<8} {:<12}", i, served, summary.final_floors[i].to_string());
    }

    Ok(())
}
