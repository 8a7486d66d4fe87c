//! Error types for grid construction and spatial queries.

use forage_core::{ConfigError, Coord, FieldError};
use std::fmt;

/// Errors arising from grid construction or spatial queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpaceError {
    /// A coordinate is outside the bounds of the grid.
    CoordOutOfBounds {
        /// The offending coordinate.
        coord: Coord,
        /// Side length of the grid.
        size: u32,
    },
    /// A region (block) specification does not fit the grid.
    InvalidRegion {
        /// What went wrong.
        reason: String,
    },
    /// Attempted to construct a grid with zero cells.
    EmptySpace,
    /// The side length exceeds the supported maximum.
    DimensionTooLarge {
        /// The value that was provided.
        value: u32,
        /// The maximum allowed value.
        max: u32,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CoordOutOfBounds { coord, size } => {
                write!(f, "coordinate {coord} out of bounds: [0, {size}) x [0, {size})")
            }
            Self::InvalidRegion { reason } => write!(f, "invalid region: {reason}"),
            Self::EmptySpace => write!(f, "grid must have at least one cell"),
            Self::DimensionTooLarge { value, max } => {
                write!(f, "grid size {value} exceeds maximum {max}")
            }
        }
    }
}

impl std::error::Error for SpaceError {}

impl From<SpaceError> for ConfigError {
    fn from(e: SpaceError) -> Self {
        match e {
            SpaceError::EmptySpace => ConfigError::EmptyGrid,
            SpaceError::DimensionTooLarge { value, max } => {
                ConfigError::GridTooLarge { size: value, max }
            }
            SpaceError::CoordOutOfBounds { coord, size } => ConfigError::InvalidFoodPlacement {
                reason: format!("{coord} lies outside the {size}x{size} grid"),
            },
            SpaceError::InvalidRegion { reason } => ConfigError::InvalidParameter {
                name: "home_size",
                reason,
            },
        }
    }
}

impl From<SpaceError> for FieldError {
    /// Only bounds violations occur at run time; any other variant is a
    /// construction error and is reported against the origin cell.
    fn from(e: SpaceError) -> Self {
        match e {
            SpaceError::CoordOutOfBounds { coord, size } => FieldError::OutOfBounds { coord, size },
            SpaceError::DimensionTooLarge { value, .. } => FieldError::OutOfBounds {
                coord: Coord::new(0, 0),
                size: value,
            },
            SpaceError::InvalidRegion { .. } | SpaceError::EmptySpace => FieldError::OutOfBounds {
                coord: Coord::new(0, 0),
                size: 0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_converts_to_field_error() {
        let e = SpaceError::CoordOutOfBounds {
            coord: Coord::new(6, 0),
            size: 6,
        };
        assert_eq!(
            FieldError::from(e),
            FieldError::OutOfBounds {
                coord: Coord::new(6, 0),
                size: 6
            }
        );
    }

    #[test]
    fn empty_space_converts_to_empty_grid() {
        assert_eq!(ConfigError::from(SpaceError::EmptySpace), ConfigError::EmptyGrid);
    }
}
