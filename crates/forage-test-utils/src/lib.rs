//! Test fixtures and seeded scenarios for forage development.
//!
//! Everything here is deterministic: the same seed gives the same field,
//! the same agents and the same random stream. See [`fixtures`] for the
//! hand-built scenarios used across the integration tests and benches.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use forage_engine::{SimConfig, Termination};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub use fixtures::{six_by_six_field, six_by_six_scenario, small_field, trail_scenario};

/// Seeded stream for tests.
pub fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// A batch small enough to run in a unit test: 10x10 lattice, 4 agents,
/// 2 sources of 3 units, 4 replicates, sequential.
pub fn tiny_config() -> SimConfig {
    SimConfig {
        size: 10,
        home_size: 2,
        agents: 4,
        food_sources: 2,
        food_value: 3,
        runs: 4,
        workers: 1,
        seed: 7,
        sample_every: 20,
        termination: Termination::UntilExhausted { step_cap: 100_000 },
        ..SimConfig::default()
    }
}

/// [`tiny_config`] without trails.
pub fn tiny_config_no_trails() -> SimConfig {
    SimConfig {
        movement: SimConfig::no_pheromone().movement,
        ..tiny_config()
    }
}
