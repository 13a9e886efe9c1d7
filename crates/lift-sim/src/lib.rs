//! `lift-sim` — thread driver for the rust_lift framework.
//!
//! # What the driver does
//!
//! `lift-dispatch` deliberately owns no threads: its agents are plain values
//! whose protocol methods block.  This crate supplies the environment the
//! coordination core assumes:
//!
//! - one OS thread per passenger, each requesting exactly
//!   `trips_per_passenger` trips (which is what makes the quota accounting
//!   exact),
//! - one OS thread per elevator, running until the quota is reached,
//! - an instrumented in-memory [`SimCabin`] standing in for the physical
//!   building,
//! - join/verify logic that surfaces panicked agents and quota mismatches
//!   as [`SimError`]s.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_core::BuildingConfig;
//! use lift_dispatch::NoopObserver;
//! use lift_sim::{SimBuilder, SimCabin};
//!
//! let config = BuildingConfig {
//!     floor_count: 10, passenger_count: 6, elevator_count: 2,
//!     trips_per_passenger: 3, seed: 42,
//! };
//! let sim = SimBuilder::new(config).build()?;
//! let cabin = SimCabin::new(sim.initial_floors());
//! let summary = sim.run(&cabin, &NoopObserver)?;
//! println!("completed {} trips", summary.completed_trips);
//! ```

pub mod builder;
pub mod cabin;
pub mod error;
pub mod sim;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use builder::SimBuilder;
pub use cabin::SimCabin;
pub use error::{SimError, SimResult};
pub use sim::{Sim, SimSummary};
