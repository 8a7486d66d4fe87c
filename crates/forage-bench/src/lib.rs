//! Benchmark profiles for the forage simulation.
//!
//! - [`reference_profile`]: the 20x20 pheromone experiment with a fixed
//!   step budget, so every iteration does the same amount of work.
//! - [`stress_profile`]: 200x200 lattice, 200 agents, 40 sources.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use forage_engine::{SimConfig, Termination};
use forage_field::{Field, PheromoneParams};
use forage_space::Connectivity;

/// Reference pheromone experiment, one replicate, 1000 ticks.
pub fn reference_profile(seed: u64) -> SimConfig {
    SimConfig {
        runs: 1,
        seed,
        termination: Termination::StepBudget { steps: 1000 },
        ..SimConfig::with_pheromone()
    }
}

/// Large field with many agents, one replicate, 1000 ticks.
pub fn stress_profile(seed: u64) -> SimConfig {
    SimConfig {
        size: 200,
        home_size: 10,
        agents: 200,
        food_sources: 40,
        food_value: 100,
        ..reference_profile(seed)
    }
}

/// Empty `size`x`size` eight-connected field with an uncapped halo, for
/// diffusion and evaporation benches.
pub fn open_field(size: u32, radius: Option<u32>) -> Field {
    let params = PheromoneParams {
        diffusion_distance: radius,
        ..PheromoneParams::default()
    };
    Field::builder()
        .size(size)
        .home_size(2)
        .connectivity(Connectivity::Eight)
        .pheromone(params)
        .build_with_food(&[])
        .expect("benchmark field is valid")
}
