//! Grid invariant test helpers, shared by the grid test module.

use crate::grid::{chebyshev, Grid};
use indexmap::IndexSet;

/// Assert that `b in neighbours(a)` implies `a in neighbours(b)`.
pub fn assert_neighbours_symmetric(grid: &Grid) {
    for coord in grid.canonical_ordering() {
        for nb in grid.neighbours(coord) {
            assert!(
                grid.neighbours(nb).contains(&coord),
                "neighbour symmetry violated: {nb} in N({coord}) but {coord} not in N({nb})"
            );
        }
    }
}

/// Assert that every neighbour is on the lattice and one move away.
pub fn assert_neighbours_in_bounds(grid: &Grid) {
    for coord in grid.canonical_ordering() {
        for nb in grid.neighbours(coord) {
            assert!(grid.contains(nb.x, nb.y), "{nb} (neighbour of {coord}) is off-grid");
            assert_eq!(chebyshev(coord, nb), 1, "{nb} is not adjacent to {coord}");
        }
    }
}

/// Assert that `index` and `coord_at` are inverse over the whole lattice.
pub fn assert_index_round_trip(grid: &Grid) {
    for (i, coord) in grid.canonical_ordering().into_iter().enumerate() {
        assert_eq!(grid.index(coord), Ok(i), "index({coord}) != {i}");
        assert_eq!(grid.coord_at(i), Some(coord));
    }
}

/// Assert that `canonical_ordering` returns exactly `cell_count` unique coords.
pub fn assert_canonical_ordering_complete(grid: &Grid) {
    let ordering = grid.canonical_ordering();
    let unique: IndexSet<_> = ordering.iter().collect();
    assert_eq!(
        unique.len(),
        grid.cell_count(),
        "canonical_ordering has {} unique cells, expected {}",
        unique.len(),
        grid.cell_count()
    );
}

/// Run every check on a grid.
pub fn run_full_compliance(grid: &Grid) {
    assert_neighbours_symmetric(grid);
    assert_neighbours_in_bounds(grid);
    assert_index_round_trip(grid);
    assert_canonical_ordering_complete(grid);
}
