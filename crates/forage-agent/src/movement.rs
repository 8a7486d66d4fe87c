//! Single-step movement decisions.
//!
//! All functions here are pure with respect to the field: they read it and
//! return the next cell. Every returned cell is on the lattice.

use crate::rules::MovementRules;
use forage_core::{Coord, FieldError};
use forage_field::Field;
use forage_space::{manhattan, Connectivity, Grid};
use rand::{Rng, RngCore};
use smallvec::SmallVec;

/// Uniform move from `connectivity`, resampled until the destination is on
/// the lattice. A cell with no neighbours (a 1x1 lattice) stays put.
pub fn random_step<R: Rng + ?Sized>(
    grid: &Grid,
    pos: Coord,
    connectivity: Connectivity,
    rng: &mut R,
) -> Coord {
    if grid.neighbours_with(pos, connectivity).is_empty() {
        return pos;
    }
    let offsets = connectivity.offsets();
    loop {
        let d = offsets[rng.random_range(0..offsets.len())];
        if let Some(next) = grid.offset(pos, d) {
            return next;
        }
    }
}

/// One search step.
///
/// With trails enabled and a detectable concentration under the agent, the
/// configured [`TrailFollowing`](crate::TrailFollowing) strategy picks among
/// the neighbours; when it declines, or otherwise, this is a
/// [`random_step`].
pub fn search_step(
    field: &Field,
    pos: Coord,
    rules: &MovementRules,
    rng: &mut dyn RngCore,
) -> Result<Coord, FieldError> {
    if rules.trail_enabled && field.get_pheromone(pos)? >= field.params().min_detectable {
        let candidates: SmallVec<[(Coord, f64); 8]> = field
            .grid()
            .neighbours_with(pos, rules.connectivity)
            .into_iter()
            .map(|nb| field.get_pheromone(nb).map(|v| (nb, v)))
            .collect::<Result<_, _>>()?;
        if let Some(next) = rules.trail_policy.strategy().choose(&candidates, rng) {
            return Ok(next);
        }
    }
    Ok(random_step(field.grid(), pos, rules.connectivity, rng))
}

/// Manhattan-nearest home cell; the first in `home` order wins ties.
pub fn nearest_home(home: &[Coord], pos: Coord) -> Option<Coord> {
    let mut best: Option<(u32, Coord)> = None;
    for &cell in home {
        let d = manhattan(pos, cell);
        if best.is_none_or(|(bd, _)| d < bd) {
            best = Some((d, cell));
        }
    }
    best.map(|(_, cell)| cell)
}

/// Unit step toward the nearest home cell.
///
/// Without `diagonal`, a step that would change both axes keeps only the
/// axis with the larger remaining distance (y on a tie). A step that would
/// leave the lattice is dropped and the agent stays.
pub fn return_step(field: &Field, pos: Coord, diagonal: bool) -> Coord {
    let Some(target) = nearest_home(field.home_area(), pos) else {
        return pos;
    };
    let (ex, ey) = (target.x - pos.x, target.y - pos.y);
    let (mut dx, mut dy) = (ex.signum(), ey.signum());
    if !diagonal && dx != 0 && dy != 0 {
        if ex.abs() > ey.abs() {
            dy = 0;
        } else {
            dx = 0;
        }
    }
    field.grid().offset(pos, (dx, dy)).unwrap_or(pos)
}
