//! Hand-built fields and runs.
//!
//! - [`small_field`]: empty 8x8 field for pheromone arithmetic.
//! - [`six_by_six_field`]: 6x6 field, 2x2 home, one source in the far corner.
//! - [`six_by_six_scenario`]: a single four-connected random walker on it.
//! - [`trail_scenario`]: several trail followers and two sources on 12x12.

use forage_agent::{Agent, MovementRules, TrailPolicy};
use forage_core::Coord;
use forage_engine::{Run, Termination};
use forage_field::Field;
use forage_space::Connectivity;

use crate::rng;

/// Empty 8x8 field with a 2x2 home and default pheromone settings.
pub fn small_field() -> Field {
    Field::builder()
        .size(8)
        .home_size(2)
        .build_with_food(&[])
        .expect("fixture field is valid")
}

/// 6x6, four-connected, home `{(2,2),(2,3),(3,2),(3,3)}`, `food` units at
/// `(5,5)`.
pub fn six_by_six_field(food: u32) -> Field {
    Field::builder()
        .size(6)
        .home_size(2)
        .connectivity(Connectivity::Four)
        .build_with_food(&[(Coord::new(5, 5), food)])
        .expect("fixture field is valid")
}

/// One random walker starting at `(2,2)` on [`six_by_six_field`] with a
/// single unit of food, run until the food is gone.
pub fn six_by_six_scenario(seed: u64) -> Run {
    Run::from_parts(
        six_by_six_field(1),
        vec![Agent::at(Coord::new(2, 2))],
        MovementRules::random_walk(Connectivity::Four),
        rng(seed),
    )
    .with_termination(Termination::UntilExhausted { step_cap: 100_000 })
    .with_sample_every(10)
}

/// `agents` trail followers on a 12x12 eight-connected field with two
/// sources of 5 units at opposite corners.
pub fn trail_scenario(seed: u64, agents: usize, policy: TrailPolicy) -> Run {
    let field = Field::builder()
        .size(12)
        .home_size(2)
        .build_with_food(&[(Coord::new(1, 1), 5), (Coord::new(10, 10), 5)])
        .expect("fixture field is valid");
    let home = field.home_area()[0];
    Run::from_parts(
        field,
        vec![Agent::at(home); agents],
        MovementRules::with_trails(Connectivity::Eight, policy),
        rng(seed),
    )
    .with_termination(Termination::UntilExhausted { step_cap: 200_000 })
    .with_sample_every(50)
}
