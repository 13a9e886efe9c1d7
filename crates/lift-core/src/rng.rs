//! Deterministic per-passenger RNG.
//!
//! # Determinism strategy
//!
//! Each passenger gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (passenger_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive passenger IDs uniformly across the seed space.
//! This means:
//!
//! - Passengers never share RNG state, so itineraries are reproducible no
//!   matter how the scheduler interleaves the agent threads.
//! - Adding passengers at the end of the population does not disturb the
//!   itineraries of existing ones.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::PassengerId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Per-passenger deterministic RNG.
///
/// Create one per passenger when generating itineraries.  The type is `!Sync`
/// to prevent accidental sharing across threads.
pub struct PassengerRng(SmallRng);

impl PassengerRng {
    /// Seed deterministically from the run's global seed and a passenger ID.
    pub fn new(global_seed: u64, passenger: PassengerId) -> Self {
        let seed = global_seed ^ (passenger.0 as u64).wrapping_mul(MIXING_CONSTANT);
        PassengerRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }
}
