//! A single replicate: one field, its agents and a seeded random stream.
//!
//! # Tick order
//!
//! Agents move in index order, each seeing every change made earlier in the
//! same tick (food taken, trails laid). Only after all of them have moved
//! does the field evaporate, and only when trails are enabled.

use std::error::Error;
use std::fmt;

use forage_agent::{Agent, MovementRules, StepEvent};
use forage_core::{ConfigError, FieldError, RunIndex, TickId};
use forage_field::Field;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::config::{SimConfig, Termination};
use crate::metrics::TickMetrics;
use crate::report::{FoodSample, RunRecord};
use crate::snapshot::RunSnapshot;

// Runs move to worker threads whole.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<Run>();
    }
};

// ── Error type ──────────────────────────────────────────────────

/// Error from building or advancing a replicate.
#[derive(Debug, Clone, PartialEq)]
pub enum RunError {
    /// The configuration was rejected before the first tick.
    Config(ConfigError),
    /// A field accessor rejected a coordinate mid-run.
    Field {
        /// The failing replicate.
        run_index: RunIndex,
        /// The tick being executed.
        tick: TickId,
        /// The underlying field error.
        error: FieldError,
    },
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config error: {e}"),
            Self::Field {
                run_index,
                tick,
                error,
            } => write!(f, "run {run_index}, tick {tick}: {error}"),
        }
    }
}

impl Error for RunError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Field { error, .. } => Some(error),
        }
    }
}

impl From<ConfigError> for RunError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ── RunOutcome ──────────────────────────────────────────────────

/// Everything a finished replicate reports.
#[derive(Clone, Debug, PartialEq)]
pub struct RunOutcome {
    /// Summary row.
    pub record: RunRecord,
    /// Remaining food over time.
    pub samples: Vec<FoodSample>,
}

// ── Run ─────────────────────────────────────────────────────────

/// One replicate of the simulation.
#[derive(Debug, Clone)]
pub struct Run {
    run_index: RunIndex,
    field: Field,
    agents: Vec<Agent>,
    rules: MovementRules,
    rng: ChaCha8Rng,
    tick: TickId,
    termination: Termination,
    sample_every: u64,
    deliveries: u64,
    pickups: u64,
}

impl Run {
    /// Build replicate `run_index` of `config`.
    ///
    /// The random stream is `ChaCha8Rng::seed_from_u64(config.seed)` on
    /// stream `run_index`; it places the food, spawns the agents and drives
    /// every move.
    pub fn new(config: &SimConfig, run_index: RunIndex) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        rng.set_stream(u64::from(run_index.0));
        let field = config.field_builder().build_random(
            config.food_sources,
            config.food_value,
            &mut rng,
        )?;
        let agents = (0..config.agents)
            .map(|_| Agent::spawn(&field, &mut rng))
            .collect();
        Ok(Self {
            run_index,
            field,
            agents,
            rules: config.movement.clone(),
            rng,
            tick: TickId(0),
            termination: config.termination,
            sample_every: config.sample_every,
            deliveries: 0,
            pickups: 0,
        })
    }

    /// Assemble a replicate from prepared parts, for scenarios and tests.
    ///
    /// Defaults: run index 0, [`Termination::default`], sampling every 100
    /// ticks.
    pub fn from_parts(
        field: Field,
        agents: Vec<Agent>,
        rules: MovementRules,
        rng: ChaCha8Rng,
    ) -> Self {
        Self {
            run_index: RunIndex(0),
            field,
            agents,
            rules,
            rng,
            tick: TickId(0),
            termination: Termination::default(),
            sample_every: 100,
            deliveries: 0,
            pickups: 0,
        }
    }

    /// Set the stop condition.
    pub fn with_termination(mut self, termination: Termination) -> Self {
        self.termination = termination;
        self
    }

    /// Set the food sampling interval. Zero disables periodic samples.
    pub fn with_sample_every(mut self, every: u64) -> Self {
        self.sample_every = every;
        self
    }

    /// Set the replicate index used in records and errors.
    pub fn with_run_index(mut self, run_index: RunIndex) -> Self {
        self.run_index = run_index;
        self
    }

    /// Replicate index.
    pub fn run_index(&self) -> RunIndex {
        self.run_index
    }

    /// Completed ticks.
    pub fn tick_id(&self) -> TickId {
        self.tick
    }

    /// Food remaining on the field.
    pub fn total_food(&self) -> u64 {
        self.field.total_food()
    }

    /// Deliveries completed so far.
    pub fn deliveries(&self) -> u64 {
        self.deliveries
    }

    /// The field.
    pub fn field(&self) -> &Field {
        &self.field
    }

    /// The agents, in move order.
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// Read-only view for rendering and hashing.
    pub fn snapshot(&self) -> RunSnapshot<'_> {
        RunSnapshot::new(self.tick, &self.field, &self.agents)
    }

    /// Advance one tick.
    pub fn tick(&mut self) -> Result<TickMetrics, RunError> {
        let mut metrics = TickMetrics::default();
        for agent in &mut self.agents {
            let event = agent
                .step(&mut self.field, &self.rules, &mut self.rng)
                .map_err(|error| RunError::Field {
                    run_index: self.run_index,
                    tick: self.tick,
                    error,
                })?;
            match event {
                StepEvent::Moved => {}
                StepEvent::PickedUp => metrics.pickups += 1,
                StepEvent::Delivered { .. } => metrics.deliveries += 1,
            }
        }
        if self.rules.trail_enabled {
            metrics.cells_zeroed = self.field.evaporate();
        }
        self.tick = TickId(self.tick.0 + 1);
        self.pickups += u64::from(metrics.pickups);
        self.deliveries += u64::from(metrics.deliveries);
        metrics.tick = self.tick;
        metrics.remaining_food = self.field.total_food();
        Ok(metrics)
    }

    fn finished(&self) -> bool {
        match self.termination {
            Termination::StepBudget { steps } => self.tick.0 >= steps,
            Termination::UntilExhausted { step_cap } => {
                self.field.total_food() == 0 || self.tick.0 >= step_cap
            }
        }
    }

    /// Tick until the stop condition holds.
    ///
    /// Food is sampled after every `sample_every`-th tick. A run that ends
    /// with no food left gets one more sample at its final tick unless that
    /// tick was already sampled.
    pub fn run_to_end(&mut self) -> Result<RunOutcome, RunError> {
        debug!(
            run_index = %self.run_index,
            agents = self.agents.len(),
            food = self.field.total_food(),
            "run started"
        );
        let mut samples = Vec::new();
        while !self.finished() {
            let m = self.tick()?;
            if self.sample_every > 0 && m.tick.0 % self.sample_every == 0 {
                samples.push(self.sample());
            }
        }
        let remaining_food = self.field.total_food();
        let exhausted = remaining_food == 0;
        if exhausted && samples.last().is_none_or(|s: &FoodSample| s.step != self.tick.0) {
            samples.push(self.sample());
        }
        let record = RunRecord {
            run_index: self.run_index.0,
            total_steps: self.tick.0,
            remaining_food,
            exhausted,
            deliveries: self.deliveries,
        };
        debug!(
            run_index = %self.run_index,
            steps = record.total_steps,
            remaining_food,
            deliveries = self.deliveries,
            pickups = self.pickups,
            "run finished"
        );
        Ok(RunOutcome { record, samples })
    }

    fn sample(&self) -> FoodSample {
        FoodSample {
            run_index: self.run_index.0,
            step: self.tick.0,
            remaining_food: self.field.total_food(),
        }
    }
}
