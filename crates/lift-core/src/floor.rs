//! Floor positions and travel directions.
//!
//! # Design
//!
//! A floor is a signed integer so buildings with basements (floor −1, −2, …)
//! need no offset bookkeeping.  Elevators move in unit steps: a multi-floor
//! displacement is decomposed into `distance_to` single-floor moves in the
//! `direction_to` sign, which keeps the cabin callback interface trivial
//! (one call per floor crossed).

use std::fmt;

// ── Floor ─────────────────────────────────────────────────────────────────────

/// An absolute floor number.  Ground floor is `Floor(0)`; basements are
/// negative.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Floor(pub i32);

impl Floor {
    pub const GROUND: Floor = Floor(0);

    /// Number of single-floor steps between `self` and `other`.
    #[inline]
    pub fn distance_to(self, other: Floor) -> u32 {
        self.0.abs_diff(other.0)
    }

    /// Direction of travel from `self` towards `other`, or `None` when the
    /// floors are equal (no movement required).
    #[inline]
    pub fn direction_to(self, other: Floor) -> Option<Direction> {
        match other.0.cmp(&self.0) {
            std::cmp::Ordering::Greater => Some(Direction::Up),
            std::cmp::Ordering::Less    => Some(Direction::Down),
            std::cmp::Ordering::Equal   => None,
        }
    }

    /// The floor one step away in `direction`.
    #[inline]
    pub fn step(self, direction: Direction) -> Floor {
        Floor(self.0 + direction.as_step())
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}", self.0)
    }
}

// ── Direction ─────────────────────────────────────────────────────────────────

/// The direction of a single-floor elevator movement.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Signed unit displacement: `+1` for up, `−1` for down.
    #[inline]
    pub fn as_step(self) -> i32 {
        match self {
            Direction::Up   => 1,
            Direction::Down => -1,
        }
    }

    /// Human-readable label, useful for log and CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up   => "up",
            Direction::Down => "down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
