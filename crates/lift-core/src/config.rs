//! Top-level run configuration.

use crate::{Floor, LiftError, LiftResult};

/// Describes one coordination run: the building, the agent populations, and
/// how many trips each passenger will request.
///
/// Typically constructed in code or loaded from a TOML/JSON file by the
/// application crate (enable the `serde` feature) and passed to the
/// simulation builder.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuildingConfig {
    /// Number of serviced floors.  Valid floors are `0..floor_count`.
    pub floor_count: u32,

    /// Number of passenger agents (one thread each).
    pub passenger_count: u32,

    /// Number of elevator cars (one thread each).
    pub elevator_count: u32,

    /// Trips every passenger requests before its thread retires.
    pub trips_per_passenger: u32,

    /// Master RNG seed for generated itineraries.  The same seed always
    /// produces identical trip plans.
    pub seed: u64,
}

impl BuildingConfig {
    /// Total trips after which every elevator thread terminates:
    /// `passenger_count × trips_per_passenger`.
    #[inline]
    pub fn trip_quota(&self) -> u64 {
        self.passenger_count as u64 * self.trips_per_passenger as u64
    }

    /// Highest valid floor.
    #[inline]
    pub fn top_floor(&self) -> Floor {
        Floor(self.floor_count as i32 - 1)
    }

    /// `true` when `floor` lies within `0..floor_count`.
    #[inline]
    pub fn contains_floor(&self, floor: Floor) -> bool {
        floor.0 >= 0 && floor.0 < self.floor_count as i32
    }

    /// Reject configurations that cannot run: empty populations or a
    /// building too small to travel in.
    pub fn validate(&self) -> LiftResult<()> {
        if self.floor_count < 2 {
            return Err(LiftError::Config(format!(
                "floor_count must be at least 2, got {}",
                self.floor_count
            )));
        }
        if self.passenger_count == 0 {
            return Err(LiftError::Config("passenger_count must be non-zero".into()));
        }
        if self.elevator_count == 0 {
            return Err(LiftError::Config("elevator_count must be non-zero".into()));
        }
        Ok(())
    }
}
