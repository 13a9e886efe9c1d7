//! `lift-core` — foundational types for the `rust_lift` elevator framework.
//!
//! This crate is a dependency of every other `lift-*` crate.  It intentionally
//! has no `lift-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                          |
//! |--------------|---------------------------------------------------|
//! | [`ids`]      | `PassengerId`, `ElevatorId`                       |
//! | [`floor`]    | `Floor`, `Direction`                              |
//! | [`trip`]     | `TripPlan`                                        |
//! | [`config`]   | `BuildingConfig`                                  |
//! | [`rng`]      | `PassengerRng` (per-passenger deterministic RNG)  |
//! | [`error`]    | `LiftError`, `LiftResult`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod config;
pub mod error;
pub mod floor;
pub mod ids;
pub mod rng;
pub mod trip;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::BuildingConfig;
pub use error::{LiftError, LiftResult};
pub use floor::{Direction, Floor};
pub use ids::{ElevatorId, PassengerId};
pub use rng::PassengerRng;
pub use trip::TripPlan;
