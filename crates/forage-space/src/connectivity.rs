//! Move-set connectivity for square lattices.

use serde::{Deserialize, Serialize};

/// Cardinal offsets: N, S, W, E.
const OFFSETS_4: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// All 8 offsets: N, S, W, E, NW, NE, SW, SE.
const OFFSETS_8: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Which neighbouring cells count as a single move.
///
/// The offset tables have a fixed order; neighbour enumeration and random
/// move sampling both follow it, which keeps seeded runs reproducible.
///
/// # Examples
///
/// ```
/// use forage_space::Connectivity;
///
/// assert_eq!(Connectivity::Four.degree(), 4);
/// assert_eq!(Connectivity::Eight.offsets()[4], (-1, -1));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Connectivity {
    /// Von Neumann neighbourhood: the four cardinal directions.
    Four,
    /// Moore neighbourhood: cardinal directions plus diagonals.
    #[default]
    Eight,
}

impl Connectivity {
    /// Offsets `(dx, dy)` of one move, in canonical order.
    pub fn offsets(self) -> &'static [(i32, i32)] {
        match self {
            Self::Four => &OFFSETS_4,
            Self::Eight => &OFFSETS_8,
        }
    }

    /// Number of neighbours of an interior cell.
    pub fn degree(self) -> usize {
        self.offsets().len()
    }

    /// Whether a diagonal move belongs to this move set.
    pub fn allows_diagonal(self) -> bool {
        matches!(self, Self::Eight)
    }
}
