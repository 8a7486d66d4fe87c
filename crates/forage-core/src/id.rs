//! Strongly-typed identifiers and the [`Coord`] grid coordinate.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A cell on the square foraging grid.
///
/// Components are signed so that move offsets can be applied before the
/// result is bounds-checked by the grid. Every coordinate *stored* by a
/// field or an agent satisfies `0 <= x, y < size`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    /// Column component.
    pub x: i32,
    /// Row component.
    pub y: i32,
}

impl Coord {
    /// Construct a coordinate from its components.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Apply a `(dx, dy)` offset without any bounds checking.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Monotonically increasing tick counter within a single run.
///
/// Tick 0 is the freshly constructed state; each completed tick (all agents
/// moved, then one evaporation) increments it by one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TickId(pub u64);

impl fmt::Display for TickId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TickId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Zero-based index of a replicate run within a batch.
///
/// Also selects the RNG stream of the replicate, so a run's trajectory
/// depends only on `(seed, run_index)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RunIndex(pub u32);

impl fmt::Display for RunIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for RunIndex {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
