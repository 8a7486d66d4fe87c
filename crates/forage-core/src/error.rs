//! Error types for the forage simulation.
//!
//! Two failure classes exist. [`FieldError`] is a runtime precondition
//! violation: a coordinate handed to a field accessor lies off the grid,
//! which means movement logic upstream computed an illegal cell. It is never
//! clamped away. [`ConfigError`] is a construction-time invariant violation
//! and fails before any tick runs.

use std::error::Error;
use std::fmt;

use crate::id::Coord;

/// Errors from field accessors during a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldError {
    /// A coordinate lies outside `[0, size) x [0, size)`.
    OutOfBounds {
        /// The offending coordinate.
        coord: Coord,
        /// Side length of the grid.
        size: u32,
    },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { coord, size } => {
                write!(f, "coordinate {coord} out of bounds: [0, {size}) x [0, {size})")
            }
        }
    }
}

impl Error for FieldError {}

/// Errors detected while validating configuration or constructing a field.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Grid side length is zero.
    EmptyGrid,
    /// Grid side length does not fit the coordinate type.
    GridTooLarge {
        /// The configured size.
        size: u32,
        /// Largest supported size.
        max: u32,
    },
    /// Home block side is zero or larger than the grid.
    InvalidHomeSize {
        /// The configured home block side.
        home_size: u32,
        /// Side length of the grid.
        size: u32,
    },
    /// No agents were requested.
    NoAgents,
    /// More food sources requested than free, placeable cells exist.
    TooManyFoodSources {
        /// Number of sources requested.
        requested: u32,
        /// Number of free cells inside the placement window.
        available: u32,
    },
    /// An explicit food placement is invalid (off-grid, on home, duplicate).
    InvalidFoodPlacement {
        /// Description of the rejected placement.
        reason: String,
    },
    /// Border margin leaves no placement window.
    BorderMarginTooLarge {
        /// The configured margin.
        margin: u32,
        /// Side length of the grid.
        size: u32,
    },
    /// A numeric parameter is non-finite or outside its valid range.
    InvalidParameter {
        /// Parameter name as it appears in configuration.
        name: &'static str,
        /// What is wrong with it.
        reason: String,
    },
    /// Time-series sample interval is zero.
    InvalidSampleInterval,
    /// Replicate count is zero.
    NoReplicates,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid size must be at least 1"),
            Self::GridTooLarge { size, max } => {
                write!(f, "grid size {size} exceeds supported maximum {max}")
            }
            Self::InvalidHomeSize { home_size, size } => {
                write!(f, "home size {home_size} must be in [1, {size}]")
            }
            Self::NoAgents => write!(f, "at least one agent is required"),
            Self::TooManyFoodSources {
                requested,
                available,
            } => write!(
                f,
                "{requested} food sources requested but only {available} free cells are placeable"
            ),
            Self::InvalidFoodPlacement { reason } => {
                write!(f, "invalid food placement: {reason}")
            }
            Self::BorderMarginTooLarge { margin, size } => {
                write!(f, "border margin {margin} leaves no placeable cells on a {size}x{size} grid")
            }
            Self::InvalidParameter { name, reason } => write!(f, "invalid {name}: {reason}"),
            Self::InvalidSampleInterval => write!(f, "sample_every must be positive"),
            Self::NoReplicates => write!(f, "at least one replicate run is required"),
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_message_names_coord_and_range() {
        let e = FieldError::OutOfBounds {
            coord: Coord::new(-1, 3),
            size: 6,
        };
        assert_eq!(
            e.to_string(),
            "coordinate (-1, 3) out of bounds: [0, 6) x [0, 6)"
        );
    }

    #[test]
    fn too_many_food_sources_message() {
        let e = ConfigError::TooManyFoodSources {
            requested: 40,
            available: 12,
        };
        assert!(e.to_string().contains("40 food sources"));
        assert!(e.to_string().contains("12 free cells"));
    }

    #[test]
    fn invalid_parameter_message() {
        let e = ConfigError::InvalidParameter {
            name: "evaporation_rate",
            reason: "must be in [0, 1), got 1.5".into(),
        };
        assert_eq!(
            e.to_string(),
            "invalid evaporation_rate: must be in [0, 1), got 1.5"
        );
    }
}
