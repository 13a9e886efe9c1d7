//! Fluent builder for constructing a [`Sim`].

use lift_core::{BuildingConfig, Floor, PassengerId, PassengerRng, TripPlan};

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`BuildingConfig`] — populations, floor count, trips per passenger, seed.
///
/// # Optional inputs (have defaults)
///
/// | Method              | Default                                          |
/// |---------------------|--------------------------------------------------|
/// | `.itineraries(v)`   | Seeded random trips from [`PassengerRng`]        |
/// | `.initial_floors(v)`| Every car at [`Floor::GROUND`]                   |
///
/// # Example
///
/// ```rust,ignore
/// let sim = SimBuilder::new(config)
///     .initial_floors(vec![Floor(0), Floor(9)])
///     .build()?;
/// ```
pub struct SimBuilder {
    config:         BuildingConfig,
    itineraries:    Option<Vec<Vec<TripPlan>>>,
    initial_floors: Option<Vec<Floor>>,
}

impl SimBuilder {
    pub fn new(config: BuildingConfig) -> Self {
        Self {
            config,
            itineraries:    None,
            initial_floors: None,
        }
    }

    /// Supply one trip list per passenger (outer length `passenger_count`,
    /// inner lengths `trips_per_passenger`).
    ///
    /// The lengths are load-bearing, not cosmetic: elevators terminate on the
    /// quota `passenger_count × trips_per_passenger`, so a passenger
    /// requesting any other number of trips would stall or strand the run.
    pub fn itineraries(mut self, itineraries: Vec<Vec<TripPlan>>) -> Self {
        self.itineraries = Some(itineraries);
        self
    }

    /// Supply the starting floor of each car (length `elevator_count`).
    pub fn initial_floors(mut self, floors: Vec<Floor>) -> Self {
        self.initial_floors = Some(floors);
        self
    }

    /// Validate inputs, generate any missing itineraries, and return a
    /// ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        let config = self.config;
        config.validate().map_err(|e| SimError::Config(e.to_string()))?;

        // ── Validate and resolve optional inputs ──────────────────────────
        let itineraries = match self.itineraries {
            Some(lists) => {
                if lists.len() != config.passenger_count as usize {
                    return Err(SimError::CountMismatch {
                        expected: config.passenger_count as usize,
                        got:      lists.len(),
                        what:     "itineraries",
                    });
                }
                for (i, trips) in lists.iter().enumerate() {
                    if trips.len() != config.trips_per_passenger as usize {
                        return Err(SimError::CountMismatch {
                            expected: config.trips_per_passenger as usize,
                            got:      trips.len(),
                            what:     "trips in an itinerary",
                        });
                    }
                    for trip in trips {
                        if !config.contains_floor(trip.from) || !config.contains_floor(trip.to) {
                            return Err(SimError::Config(format!(
                                "trip {trip} of passenger {i} leaves the building \
                                 (floors 0..{})",
                                config.floor_count
                            )));
                        }
                    }
                }
                lists
            }
            None => generate_itineraries(&config),
        };

        let initial_floors = match self.initial_floors {
            Some(floors) => {
                if floors.len() != config.elevator_count as usize {
                    return Err(SimError::CountMismatch {
                        expected: config.elevator_count as usize,
                        got:      floors.len(),
                        what:     "initial floors",
                    });
                }
                if let Some(&floor) = floors.iter().find(|f| !config.contains_floor(**f)) {
                    return Err(SimError::Config(format!(
                        "initial floor {floor} is outside the building"
                    )));
                }
                floors
            }
            None => vec![Floor::GROUND; config.elevator_count as usize],
        };

        Ok(Sim::assemble(config, itineraries, initial_floors))
    }
}

/// Deterministic random itineraries: every passenger draws
/// `trips_per_passenger` trips with distinct pickup and destination floors
/// from its own seeded RNG.
fn generate_itineraries(config: &BuildingConfig) -> Vec<Vec<TripPlan>> {
    (0..config.passenger_count)
        .map(|p| {
            let mut rng = PassengerRng::new(config.seed, PassengerId(p));
            (0..config.trips_per_passenger)
                .map(|_| {
                    let from = Floor(rng.gen_range(0..config.floor_count as i32));
                    let to = loop {
                        let candidate = Floor(rng.gen_range(0..config.floor_count as i32));
                        if candidate != from {
                            break candidate;
                        }
                    };
                    TripPlan::new(from, to)
                })
                .collect()
        })
        .collect()
}
