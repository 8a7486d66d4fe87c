//! The square foraging lattice.

use crate::connectivity::Connectivity;
use crate::error::SpaceError;
use forage_core::Coord;
use smallvec::SmallVec;

/// In-bounds neighbours of a cell, in offset-table order.
pub type Neighbours = SmallVec<[Coord; 8]>;

/// A square `size × size` lattice with absorbing edges.
///
/// Cells are addressed by [`Coord`] with `0 <= x, y < size`. Moves that would
/// leave the lattice are absorbed: [`Grid::offset`] returns `None` and
/// [`Grid::neighbours`] omits them, so edge cells have fewer neighbours
/// (an 8-connected corner has 3, an edge cell 5).
///
/// The dense rank of a cell is x-major: `index = x * size + y`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: u32,
    connectivity: Connectivity,
}

impl Grid {
    /// Largest supported side length. Keeps `size * size` well inside `usize`
    /// on 32-bit targets and every coordinate inside `i32`.
    pub const MAX_SIZE: u32 = 1 << 15;

    /// Create a grid of `size × size` cells.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` for `size == 0` and
    /// `Err(SpaceError::DimensionTooLarge)` above [`Grid::MAX_SIZE`].
    pub fn new(size: u32, connectivity: Connectivity) -> Result<Self, SpaceError> {
        if size == 0 {
            return Err(SpaceError::EmptySpace);
        }
        if size > Self::MAX_SIZE {
            return Err(SpaceError::DimensionTooLarge {
                value: size,
                max: Self::MAX_SIZE,
            });
        }
        Ok(Self { size, connectivity })
    }

    /// Side length.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// The move set used by [`Grid::neighbours`].
    pub fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        (self.size as usize) * (self.size as usize)
    }

    /// Whether `(x, y)` lies on the lattice.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        let n = self.size as i32;
        x >= 0 && x < n && y >= 0 && y < n
    }

    /// Bounds check returning the typed error on failure.
    pub fn check(&self, coord: Coord) -> Result<(), SpaceError> {
        if self.contains(coord.x, coord.y) {
            Ok(())
        } else {
            Err(SpaceError::CoordOutOfBounds {
                coord,
                size: self.size,
            })
        }
    }

    /// Dense rank of `coord`, or an error if it is off the lattice.
    pub fn index(&self, coord: Coord) -> Result<usize, SpaceError> {
        self.check(coord)?;
        Ok((coord.x as usize) * (self.size as usize) + coord.y as usize)
    }

    /// Inverse of [`Grid::index`]. `None` when `index >= cell_count()`.
    pub fn coord_at(&self, index: usize) -> Option<Coord> {
        if index >= self.cell_count() {
            return None;
        }
        let n = self.size as usize;
        Some(Coord::new((index / n) as i32, (index % n) as i32))
    }

    /// Apply one move offset; `None` if the destination is off the lattice.
    pub fn offset(&self, coord: Coord, (dx, dy): (i32, i32)) -> Option<Coord> {
        let next = coord.offset(dx, dy);
        self.contains(next.x, next.y).then_some(next)
    }

    /// In-bounds neighbours under the grid's own move set.
    pub fn neighbours(&self, coord: Coord) -> Neighbours {
        self.neighbours_with(coord, self.connectivity)
    }

    /// In-bounds neighbours under an explicit move set.
    pub fn neighbours_with(&self, coord: Coord, connectivity: Connectivity) -> Neighbours {
        connectivity
            .offsets()
            .iter()
            .filter_map(|&d| self.offset(coord, d))
            .collect()
    }

    /// Centred square block of side `side`, enumerated x-major then y.
    ///
    /// `start = size / 2 - side / 2` on both axes. Fails with
    /// [`SpaceError::InvalidRegion`] when `side` is zero or the block does
    /// not fit.
    pub fn centered_block(&self, side: u32) -> Result<Vec<Coord>, SpaceError> {
        if side == 0 || side > self.size {
            return Err(SpaceError::InvalidRegion {
                reason: format!("block side {side} must be in [1, {}]", self.size),
            });
        }
        let start = (self.size / 2 - side / 2) as i32;
        let end = start + side as i32;
        if end > self.size as i32 {
            return Err(SpaceError::InvalidRegion {
                reason: format!(
                    "centred block [{start}, {end}) does not fit a grid of size {}",
                    self.size
                ),
            });
        }
        let mut out = Vec::with_capacity((side as usize) * (side as usize));
        for x in start..end {
            for y in start..end {
                out.push(Coord::new(x, y));
            }
        }
        Ok(out)
    }

    /// Every cell in rank order.
    pub fn canonical_ordering(&self) -> Vec<Coord> {
        let n = self.size as i32;
        let mut out = Vec::with_capacity(self.cell_count());
        for x in 0..n {
            for y in 0..n {
                out.push(Coord::new(x, y));
            }
        }
        out
    }
}

/// L1 distance.
pub fn manhattan(a: Coord, b: Coord) -> u32 {
    (a.x - b.x).unsigned_abs() + (a.y - b.y).unsigned_abs()
}

/// L-inf distance; the ring index of `b` around `a` on an 8-connected lattice.
pub fn chebyshev(a: Coord, b: Coord) -> u32 {
    (a.x - b.x).unsigned_abs().max((a.y - b.y).unsigned_abs())
}
