//! The [`Field`]: lattice, home block, food sources and pheromone array.

use crate::params::{DepositPolicy, PheromoneParams};
use forage_core::{ConfigError, Coord, FieldError};
use forage_space::{Connectivity, Grid};
use indexmap::IndexMap;
use rand::Rng;

/// Shared environment of one replicate run.
///
/// Invariants held between calls:
/// - every pheromone cell is `>= 0` and, with a ceiling, `<= max`;
/// - after [`Field::evaporate`] every cell is `0` or `>= min_detectable`;
/// - food values only decrease; a source at `0` is equivalent to absent;
/// - the home block and the food coordinates never overlap.
#[derive(Debug, Clone)]
pub struct Field {
    grid: Grid,
    home: Vec<Coord>,
    home_mask: Vec<bool>,
    food: IndexMap<Coord, u32>,
    pheromone: Vec<f64>,
    params: PheromoneParams,
    policy: DepositPolicy,
}

/// Builder for [`Field`].
///
/// Defaults: `size = 20`, `home_size = 4`, `connectivity = Eight`,
/// `border_margin = 1`, default [`PheromoneParams`], `MaxCombine`.
#[derive(Debug, Clone)]
pub struct FieldBuilder {
    size: u32,
    home_size: u32,
    connectivity: Connectivity,
    border_margin: u32,
    params: PheromoneParams,
    policy: DepositPolicy,
}

impl Field {
    /// Create a new builder for configuring a `Field`.
    pub fn builder() -> FieldBuilder {
        FieldBuilder {
            size: 20,
            home_size: 4,
            connectivity: Connectivity::Eight,
            border_margin: 1,
            params: PheromoneParams::default(),
            policy: DepositPolicy::MaxCombine,
        }
    }

    // ── Read access ─────────────────────────────────────────────

    /// Side length of the lattice.
    pub fn size(&self) -> u32 {
        self.grid.size()
    }

    /// The lattice.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Pheromone parameters in effect.
    pub fn params(&self) -> &PheromoneParams {
        &self.params
    }

    /// Active combination rule for direct deposits.
    pub fn deposit_policy(&self) -> DepositPolicy {
        self.policy
    }

    /// Home cells, x-major then y. This is the tie-break order of the
    /// return step.
    pub fn home_area(&self) -> &[Coord] {
        &self.home
    }

    /// Whether `pos` is a home cell. Off-grid coordinates are not home.
    pub fn is_home(&self, pos: Coord) -> bool {
        self.grid
            .index(pos)
            .map(|i| self.home_mask[i])
            .unwrap_or(false)
    }

    /// A uniformly random home cell.
    pub fn random_home_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Coord {
        // The home block is non-empty by construction.
        self.home[rng.random_range(0..self.home.len())]
    }

    /// Food sources in placement order, including exhausted ones.
    pub fn food_sources(&self) -> &IndexMap<Coord, u32> {
        &self.food
    }

    /// Remaining food at `pos`; `0` when there is no source.
    pub fn food_at(&self, pos: Coord) -> Result<u32, FieldError> {
        self.grid.check(pos)?;
        Ok(self.food.get(&pos).copied().unwrap_or(0))
    }

    /// Sum of remaining food over all sources.
    pub fn total_food(&self) -> u64 {
        self.food.values().map(|&v| u64::from(v)).sum()
    }

    /// Dense pheromone array in grid rank order (`x * size + y`).
    pub fn pheromone(&self) -> &[f64] {
        &self.pheromone
    }

    /// Current concentration at `pos`.
    pub fn get_pheromone(&self, pos: Coord) -> Result<f64, FieldError> {
        let i = self.grid.index(pos)?;
        Ok(self.pheromone[i])
    }

    // ── Mutation ────────────────────────────────────────────────

    /// Deposit `amount` at `pos` using the field's own policy.
    pub fn deposit_pheromone(&mut self, pos: Coord, amount: f64) -> Result<(), FieldError> {
        self.deposit_with(pos, amount, self.policy)
    }

    /// Deposit `amount` at `pos` using an explicit policy.
    pub fn deposit_with(
        &mut self,
        pos: Coord,
        amount: f64,
        policy: DepositPolicy,
    ) -> Result<(), FieldError> {
        let i = self.grid.index(pos)?;
        self.pheromone[i] = policy.combine(self.pheromone[i], amount, self.params.max);
        Ok(())
    }

    /// Decay every cell by `evaporation_rate`, then zero cells that fell
    /// below the detectability floor.
    ///
    /// Returns the number of non-zero cells zeroed by the floor.
    pub fn evaporate(&mut self) -> usize {
        let keep = 1.0 - self.params.evaporation_rate;
        let floor = self.params.min_detectable;
        let mut zeroed = 0;
        for cell in &mut self.pheromone {
            if *cell == 0.0 {
                continue;
            }
            *cell *= keep;
            if *cell < floor {
                *cell = 0.0;
                zeroed += 1;
            }
        }
        zeroed
    }

    /// Take one unit of food at `pos`.
    ///
    /// Returns `true` and decrements the source when it holds food; returns
    /// `false` and changes nothing otherwise.
    pub fn take_food(&mut self, pos: Coord) -> Result<bool, FieldError> {
        self.grid.check(pos)?;
        match self.food.get_mut(&pos) {
            Some(v) if *v > 0 => {
                *v -= 1;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Reset every pheromone cell to zero.
    pub fn clear_pheromone(&mut self) {
        self.pheromone.fill(0.0);
    }

    pub(crate) fn cell_mut(&mut self, index: usize) -> &mut f64 {
        &mut self.pheromone[index]
    }
}

impl FieldBuilder {
    /// Side length of the lattice. Default: `20`.
    pub fn size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    /// Side of the centred home block. Default: `4`.
    pub fn home_size(mut self, home_size: u32) -> Self {
        self.home_size = home_size;
        self
    }

    /// Move set of the lattice. Default: [`Connectivity::Eight`].
    pub fn connectivity(mut self, connectivity: Connectivity) -> Self {
        self.connectivity = connectivity;
        self
    }

    /// Rows and columns at the high edge excluded from random food
    /// placement. Default: `1`.
    pub fn border_margin(mut self, margin: u32) -> Self {
        self.border_margin = margin;
        self
    }

    /// Pheromone parameters. Default: [`PheromoneParams::default`].
    pub fn pheromone(mut self, params: PheromoneParams) -> Self {
        self.params = params;
        self
    }

    /// Combination rule for direct deposits. Default: `MaxCombine`.
    pub fn deposit_policy(mut self, policy: DepositPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Build with `sources` food sources of `value` units each, placed
    /// uniformly at random in `[0, size - border_margin)²` on cells that are
    /// neither home nor already food.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - the lattice or home block is invalid
    /// - the border margin leaves no placement window
    /// - `sources` exceeds the free cells in the window
    pub fn build_random<R: Rng + ?Sized>(
        self,
        sources: u32,
        value: u32,
        rng: &mut R,
    ) -> Result<Field, ConfigError> {
        let mut field = self.base()?;
        let size = field.size();
        if self.border_margin >= size {
            return Err(ConfigError::BorderMarginTooLarge {
                margin: self.border_margin,
                size,
            });
        }
        let window = (size - self.border_margin) as i32;
        let home_in_window = field
            .home
            .iter()
            .filter(|c| c.x < window && c.y < window)
            .count() as u32;
        let available = (window as u32) * (window as u32) - home_in_window;
        if sources > available {
            return Err(ConfigError::TooManyFoodSources {
                requested: sources,
                available,
            });
        }

        while (field.food.len() as u32) < sources {
            let pos = Coord::new(rng.random_range(0..window), rng.random_range(0..window));
            if field.is_home(pos) || field.food.contains_key(&pos) {
                continue;
            }
            field.food.insert(pos, value);
        }
        Ok(field)
    }

    /// Build with explicitly placed food.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the lattice or home block is invalid, or a source is
    /// off-grid, on a home cell, or listed twice.
    pub fn build_with_food(self, food: &[(Coord, u32)]) -> Result<Field, ConfigError> {
        let mut field = self.base()?;
        for &(pos, value) in food {
            field.grid.check(pos)?;
            if field.is_home(pos) {
                return Err(ConfigError::InvalidFoodPlacement {
                    reason: format!("{pos} is a home cell"),
                });
            }
            if field.food.insert(pos, value).is_some() {
                return Err(ConfigError::InvalidFoodPlacement {
                    reason: format!("{pos} listed more than once"),
                });
            }
        }
        Ok(field)
    }

    fn base(&self) -> Result<Field, ConfigError> {
        self.params.validate()?;
        let grid = Grid::new(self.size, self.connectivity)?;
        if self.home_size == 0 || self.home_size > self.size {
            return Err(ConfigError::InvalidHomeSize {
                home_size: self.home_size,
                size: self.size,
            });
        }
        let home = grid.centered_block(self.home_size)?;
        let mut home_mask = vec![false; grid.cell_count()];
        for &cell in &home {
            home_mask[grid.index(cell)?] = true;
        }
        let pheromone = vec![0.0; grid.cell_count()];
        Ok(Field {
            grid,
            home,
            home_mask,
            food: IndexMap::new(),
            pheromone,
            params: self.params.clone(),
            policy: self.policy,
        })
    }
}
