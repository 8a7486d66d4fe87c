//! Trail deposition and the halving diffusion halo.
//!
//! A delivered path is laid once, at delivery time. Cell `i` of the path
//! (`0` = pickup cell) receives `start * exp(-i / len)`; values below the
//! detectability floor are skipped. Each surviving value is then spread by
//! [`Field::diffuse`]:
//!
//! - the origin receives the value through the field's [`DepositPolicy`];
//! - a cell at Chebyshev depth `d` receives `value / 2^d` by max-combine;
//! - a cell's 8 neighbours are expanded only while the halved value stays
//!   at or above the floor and, with a radius cap `D`, while `d + 1 <= D`.
//!
//! The walk is an explicit breadth-first queue. Each cell is visited at most
//! once per origin; on an 8-connected lattice the first visit happens at the
//! cell's Chebyshev depth, which carries the largest value it could receive.
//!
//! [`DepositPolicy`]: crate::DepositPolicy

use crate::field::Field;
use crate::params::DepositPolicy;
use forage_core::{Coord, FieldError};
use forage_space::Connectivity;
use indexmap::IndexSet;
use std::collections::VecDeque;
use tracing::trace;

/// Outcome of spreading one deposit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DiffusionReport {
    /// Cells written, origin included.
    pub cells_touched: usize,
    /// Largest Chebyshev depth reached.
    pub max_depth: u32,
}

/// Outcome of laying a whole path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PathDeposit {
    /// Path cells whose value reached the floor and were diffused.
    pub origins: usize,
    /// Path cells skipped because their value was below the floor.
    pub skipped: usize,
    /// Total cell writes across every origin.
    pub cells_touched: usize,
}

impl Field {
    /// Deposit `value` at `origin` and spread the halving halo around it.
    pub fn diffuse(&mut self, origin: Coord, value: f64) -> Result<DiffusionReport, FieldError> {
        self.deposit_pheromone(origin, value)?;

        let floor = self.params().min_detectable;
        let radius = self.params().diffusion_distance;
        let ceiling = self.params().max;

        let mut report = DiffusionReport {
            cells_touched: 1,
            max_depth: 0,
        };
        let mut visited: IndexSet<Coord> = IndexSet::new();
        visited.insert(origin);
        let mut queue = VecDeque::new();
        queue.push_back((origin, 0u32, value));

        while let Some((cell, depth, v)) = queue.pop_front() {
            let half = v / 2.0;
            if half < floor {
                continue;
            }
            if radius.is_some_and(|d| depth + 1 > d) {
                continue;
            }
            for nb in self.grid().neighbours_with(cell, Connectivity::Eight) {
                if !visited.insert(nb) {
                    continue;
                }
                let i = self.grid().index(nb)?;
                let slot = self.cell_mut(i);
                *slot = DepositPolicy::MaxCombine.combine(*slot, half, ceiling);
                report.cells_touched += 1;
                report.max_depth = report.max_depth.max(depth + 1);
                queue.push_back((nb, depth + 1, half));
            }
        }

        Ok(report)
    }

    /// Lay a delivered path: exponentially decaying values from the pickup
    /// end, each diffused around its cell.
    pub fn deposit_path(&mut self, path: &[Coord]) -> Result<PathDeposit, FieldError> {
        let mut out = PathDeposit::default();
        if path.is_empty() {
            return Ok(out);
        }
        let start = self.params().start;
        let floor = self.params().min_detectable;
        let len = path.len() as f64;
        for (i, &pos) in path.iter().enumerate() {
            let value = start * (-(i as f64) / len).exp();
            if value < floor {
                out.skipped += 1;
                continue;
            }
            let report = self.diffuse(pos, value)?;
            out.origins += 1;
            out.cells_touched += report.cells_touched;
        }
        trace!(
            len = path.len(),
            origins = out.origins,
            skipped = out.skipped,
            "trail deposited"
        );
        Ok(out)
    }
}
