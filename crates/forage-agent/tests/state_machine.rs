//! Multi-tick behaviour of agents against a real field.

use forage_agent::{Agent, ForagingState, MovementRules, StepEvent, TrailPolicy};
use forage_core::Coord;
use forage_field::{Field, PheromoneParams};
use forage_space::Connectivity;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn c(x: i32, y: i32) -> Coord {
    Coord::new(x, y)
}

#[test]
fn lone_random_walker_collects_the_only_food() {
    let mut field = Field::builder()
        .size(6)
        .home_size(2)
        .connectivity(Connectivity::Four)
        .build_with_food(&[(c(5, 5), 1)])
        .unwrap();
    assert_eq!(field.home_area(), &[c(2, 2), c(2, 3), c(3, 2), c(3, 3)]);

    let rules = MovementRules::random_walk(Connectivity::Four);
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut agent = Agent::at(c(2, 2));

    let mut picked_at = None;
    for tick in 0..100_000u32 {
        let ev = agent.step(&mut field, &rules, &mut rng).unwrap();
        let p = agent.position();
        assert!(field.grid().contains(p.x, p.y), "tick {tick}: {p} off-grid");
        if ev == StepEvent::PickedUp {
            picked_at = Some(tick);
        }
        if field.total_food() == 0 {
            break;
        }
    }
    assert!(picked_at.is_some());
    assert_eq!(field.total_food(), 0);
    assert_eq!(agent.state(), ForagingState::Returning);
}

#[test]
fn delivered_agent_returns_home_within_manhattan_bound() {
    // Return from (5,5) to home in exactly 4 four-connected steps.
    let mut field = Field::builder()
        .size(6)
        .home_size(2)
        .connectivity(Connectivity::Four)
        .build_with_food(&[(c(5, 5), 1)])
        .unwrap();
    let rules = MovementRules::random_walk(Connectivity::Four);
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut agent = Agent::at(c(2, 2));

    while agent.state() == ForagingState::Searching {
        agent.step(&mut field, &rules, &mut rng).unwrap();
    }
    assert_eq!(agent.position(), c(5, 5));

    let mut steps = 0;
    loop {
        steps += 1;
        if let StepEvent::Delivered { path_len } = agent.step(&mut field, &rules, &mut rng).unwrap() {
            assert_eq!(path_len, steps + 1);
            break;
        }
        assert!(steps < 10);
    }
    assert_eq!(steps, 4);
    assert_eq!(agent.deliveries(), 1);
}

#[test]
fn trail_followers_reuse_a_laid_trail() {
    let params = PheromoneParams {
        evaporation_rate: 0.0,
        ..PheromoneParams::default()
    };
    let mut field = Field::builder()
        .size(10)
        .home_size(2)
        .pheromone(params)
        .build_with_food(&[(c(9, 9), 50)])
        .unwrap();
    let rules = MovementRules::with_trails(Connectivity::Eight, TrailPolicy::Greedy);
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut agents: Vec<Agent> = (0..5).map(|_| Agent::spawn(&field, &mut rng)).collect();

    let mut deliveries = 0;
    for _ in 0..20_000 {
        for a in &mut agents {
            if let StepEvent::Delivered { .. } = a.step(&mut field, &rules, &mut rng).unwrap() {
                deliveries += 1;
            }
        }
        field.evaporate();
        if field.total_food() == 0 {
            break;
        }
    }
    assert!(deliveries > 0);
    assert!(field.pheromone().iter().any(|&v| v > 0.0));
}

proptest! {
    #[test]
    fn positions_stay_on_grid(
        seed in any::<u64>(),
        size in 3u32..12,
        eight in any::<bool>(),
        greedy in any::<bool>(),
        trails in any::<bool>(),
    ) {
        let conn = if eight { Connectivity::Eight } else { Connectivity::Four };
        let policy = if greedy { TrailPolicy::Greedy } else { TrailPolicy::Proportional };
        let mut rules = MovementRules::with_trails(conn, policy);
        rules.trail_enabled = trails;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut field = Field::builder()
            .size(size)
            .home_size(1)
            .connectivity(conn)
            .border_margin(0)
            .build_random(2, 3, &mut rng)
            .unwrap();
        let mut agents: Vec<Agent> = (0..4).map(|_| Agent::spawn(&field, &mut rng)).collect();
        for _ in 0..300 {
            for a in &mut agents {
                a.step(&mut field, &rules, &mut rng).unwrap();
                let p = a.position();
                prop_assert!(field.grid().contains(p.x, p.y));
            }
            field.evaporate();
        }
    }
}
