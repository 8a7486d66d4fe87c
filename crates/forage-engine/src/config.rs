//! Simulation configuration, presets and validation.
//!
//! [`SimConfig`] is deserialisable (every field has a default, so a partial
//! TOML table is enough) and is checked once by
//! [`validate()`](SimConfig::validate) before any replicate is built.

use forage_agent::{MovementRules, TrailPolicy};
use forage_core::ConfigError;
use forage_field::{DepositPolicy, Field, FieldBuilder, PheromoneParams};
use forage_space::{Connectivity, Grid};
use serde::{Deserialize, Serialize};

// ── Termination ─────────────────────────────────────────────────

/// When a replicate stops.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Termination {
    /// Run exactly `steps` ticks and record the food left.
    StepBudget {
        /// Number of ticks to run.
        steps: u64,
    },
    /// Run until every source is empty, or `step_cap` ticks have passed.
    UntilExhausted {
        /// Safety cap. A capped run is reported with `exhausted == false`.
        step_cap: u64,
    },
}

impl Default for Termination {
    fn default() -> Self {
        Self::UntilExhausted {
            step_cap: 1_000_000,
        }
    }
}

// ── SimConfig ───────────────────────────────────────────────────

/// Every run-level constant of a batch.
///
/// `Default` is the reference pheromone experiment; see
/// [`with_pheromone`](SimConfig::with_pheromone).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Side length of the lattice. Default: 20.
    pub size: u32,
    /// Side of the centred home block. Default: 4.
    pub home_size: u32,
    /// High-edge rows/columns excluded from random food placement. Default: 1.
    pub border_margin: u32,
    /// Agents per replicate. Default: 10.
    pub agents: u32,
    /// Food sources per replicate. Default: 4.
    pub food_sources: u32,
    /// Initial units per source. Default: 25.
    pub food_value: u32,
    /// Pheromone levels, evaporation and halo radius.
    pub pheromone: PheromoneParams,
    /// Combination rule for direct deposits. Default: max-combine.
    pub deposit_policy: DepositPolicy,
    /// Move set, trail switch and trail strategy.
    pub movement: MovementRules,
    /// Stop condition. Default: until exhausted, capped at 1 000 000 ticks.
    pub termination: Termination,
    /// Food is sampled every this many ticks. Default: 100.
    pub sample_every: u64,
    /// Number of replicates. Default: 100.
    pub runs: u32,
    /// Worker threads for the batch. `0` uses the available parallelism,
    /// `1` runs sequentially. Default: 1.
    pub workers: usize,
    /// Base seed; replicate `i` uses stream `i` of this seed. Default: 0.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::with_pheromone()
    }
}

impl SimConfig {
    /// Random-walk foragers without trails, run until the food is gone.
    pub fn no_pheromone() -> Self {
        Self {
            movement: MovementRules::random_walk(Connectivity::Eight),
            ..Self::with_pheromone()
        }
    }

    /// Trail-laying foragers with proportional trail following.
    pub fn with_pheromone() -> Self {
        Self {
            size: 20,
            home_size: 4,
            border_margin: 1,
            agents: 10,
            food_sources: 4,
            food_value: 25,
            pheromone: PheromoneParams::default(),
            deposit_policy: DepositPolicy::MaxCombine,
            movement: MovementRules::with_trails(Connectivity::Eight, TrailPolicy::Proportional),
            termination: Termination::default(),
            sample_every: 100,
            runs: 100,
            workers: 1,
            seed: 0,
        }
    }

    /// Check every structural invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Lattice fits.
        if self.size == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        if self.size > Grid::MAX_SIZE {
            return Err(ConfigError::GridTooLarge {
                size: self.size,
                max: Grid::MAX_SIZE,
            });
        }
        // 2. Home block fits.
        if self.home_size == 0 || self.home_size > self.size {
            return Err(ConfigError::InvalidHomeSize {
                home_size: self.home_size,
                size: self.size,
            });
        }
        // 3. At least one forager.
        if self.agents == 0 {
            return Err(ConfigError::NoAgents);
        }
        // 4. Food fits in the placement window without touching home.
        if self.border_margin >= self.size {
            return Err(ConfigError::BorderMarginTooLarge {
                margin: self.border_margin,
                size: self.size,
            });
        }
        let available = self.placeable_cells()?;
        if self.food_sources > available {
            return Err(ConfigError::TooManyFoodSources {
                requested: self.food_sources,
                available,
            });
        }
        if self.food_sources > 0 && self.food_value == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "food_value",
                reason: "must be >= 1 when food sources are requested".into(),
            });
        }
        // 5. Pheromone levels.
        self.pheromone.validate()?;
        // 6. Termination and reporting.
        match self.termination {
            Termination::UntilExhausted { step_cap: 0 } => {
                return Err(ConfigError::InvalidParameter {
                    name: "step_cap",
                    reason: "must be >= 1".into(),
                });
            }
            Termination::StepBudget { .. } | Termination::UntilExhausted { .. } => {}
        }
        if self.sample_every == 0 {
            return Err(ConfigError::InvalidSampleInterval);
        }
        if self.runs == 0 {
            return Err(ConfigError::NoReplicates);
        }
        Ok(())
    }

    /// Number of free cells in the placement window.
    fn placeable_cells(&self) -> Result<u32, ConfigError> {
        let grid = Grid::new(self.size, self.movement.connectivity)?;
        let window = (self.size - self.border_margin) as i32;
        let home_in_window = grid
            .centered_block(self.home_size)?
            .into_iter()
            .filter(|c| c.x < window && c.y < window)
            .count() as u32;
        Ok((window as u32) * (window as u32) - home_in_window)
    }

    /// Field builder carrying this configuration's lattice and pheromone
    /// settings. Food still has to be placed.
    pub fn field_builder(&self) -> FieldBuilder {
        Field::builder()
            .size(self.size)
            .home_size(self.home_size)
            .connectivity(self.movement.connectivity)
            .border_margin(self.border_margin)
            .pheromone(self.pheromone.clone())
            .deposit_policy(self.deposit_policy)
    }

    /// Effective worker count for a batch: never more than the replicates.
    pub fn effective_workers(&self) -> usize {
        let wanted = match self.workers {
            0 => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
            n => n,
        };
        wanted.clamp(1, self.runs.max(1) as usize)
    }
}
