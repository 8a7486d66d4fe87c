//! Whole runs and batches, from configuration to report.

use forage_agent::{ForagingState, TrailPolicy};
use forage_core::ConfigError;
use forage_engine::{run_batch, SimConfig, Termination};
use forage_space::Connectivity;
use forage_test_utils::{six_by_six_scenario, tiny_config, tiny_config_no_trails, trail_scenario};

// ── Scenarios ───────────────────────────────────────────────────

#[test]
fn six_by_six_walker_empties_the_source() {
    let mut run = six_by_six_scenario(3);
    let out = run.run_to_end().unwrap();
    assert!(out.record.exhausted);
    assert_eq!(out.record.remaining_food, 0);
    assert!(out.record.total_steps >= 6, "needs at least 6 moves to reach (5,5)");
    let agent = &run.agents()[0];
    assert_eq!(agent.pickups(), 1);
    assert_eq!(agent.state(), ForagingState::Returning);
    // Random walk leaves no trail.
    assert!(run.field().pheromone().iter().all(|&v| v == 0.0));
}

#[test]
fn six_by_six_samples_end_at_zero() {
    let out = six_by_six_scenario(5).run_to_end().unwrap();
    let last = out.samples.last().unwrap();
    assert_eq!(last.step, out.record.total_steps);
    assert_eq!(last.remaining_food, 0);
    let steps: Vec<u64> = out.samples.iter().map(|s| s.step).collect();
    let mut dedup = steps.clone();
    dedup.dedup();
    assert_eq!(steps, dedup, "no duplicate sample at the last tick");
}

#[test]
fn trail_followers_keep_trails_above_floor() {
    for policy in [TrailPolicy::Greedy, TrailPolicy::Proportional] {
        let mut run = trail_scenario(9, 5, policy);
        let mut saw_trail = false;
        while run.total_food() > 0 && run.tick_id().0 < 200_000 {
            run.tick().unwrap();
            saw_trail |= run.field().pheromone().iter().any(|&v| v > 0.0);
        }
        assert_eq!(run.total_food(), 0, "{policy:?} did not finish");
        assert!(saw_trail, "{policy:?} never laid a trail");
        let floor = run.field().params().min_detectable;
        assert!(run
            .field()
            .pheromone()
            .iter()
            .all(|&v| v == 0.0 || v >= floor));
    }
}

#[test]
fn step_budget_stops_early() {
    let mut run = trail_scenario(2, 3, TrailPolicy::Proportional)
        .with_termination(Termination::StepBudget { steps: 40 });
    let out = run.run_to_end().unwrap();
    assert_eq!(out.record.total_steps, 40);
    assert_eq!(out.record.remaining_food, run.total_food());
}

// ── Batches ─────────────────────────────────────────────────────

#[test]
fn both_presets_produce_full_reports() {
    for cfg in [tiny_config(), tiny_config_no_trails()] {
        let report = run_batch(&cfg).unwrap();
        assert_eq!(report.records.len(), cfg.runs as usize);
        assert!(report.failures.is_empty());
        let summary = report.summary().unwrap();
        assert_eq!(summary.runs, cfg.runs as usize);
        assert_eq!(summary.exhausted_runs, cfg.runs as usize);
        assert_eq!(summary.max_remaining_food, 0);
        assert!(summary.min_steps <= summary.max_steps);
        assert_eq!(
            report.runs_csv().lines().count(),
            cfg.runs as usize + 1
        );
    }
}

#[test]
fn step_budget_batch_reports_leftover_food() {
    let cfg = SimConfig {
        termination: Termination::StepBudget { steps: 1 },
        food_value: 50,
        ..tiny_config()
    };
    let report = run_batch(&cfg).unwrap();
    for r in &report.records {
        assert_eq!(r.total_steps, 1);
        assert!(!r.exhausted);
        // Four agents take at most four units in one tick.
        assert!(r.remaining_food >= 96);
    }
}

#[test]
fn invalid_batch_is_rejected_before_running() {
    let cfg = SimConfig {
        home_size: 0,
        ..tiny_config()
    };
    assert!(matches!(
        run_batch(&cfg),
        Err(ConfigError::InvalidHomeSize { .. })
    ));
}

// ── Configuration files ─────────────────────────────────────────

#[test]
fn partial_toml_fills_defaults() {
    let cfg: SimConfig = toml::from_str(
        r#"
        size = 30
        agents = 5
        runs = 8

        [termination]
        mode = "step_budget"
        steps = 500

        [movement]
        connectivity = "four"
        trail_enabled = false
        "#,
    )
    .unwrap();
    assert_eq!(cfg.size, 30);
    assert_eq!(cfg.agents, 5);
    assert_eq!(cfg.home_size, 4);
    assert_eq!(cfg.food_sources, 4);
    assert_eq!(cfg.termination, Termination::StepBudget { steps: 500 });
    assert_eq!(cfg.movement.connectivity, Connectivity::Four);
    assert!(!cfg.movement.trail_enabled);
    assert!(!cfg.movement.diagonal_return());
    cfg.validate().unwrap();
}

#[test]
fn config_round_trips_through_json() {
    let cfg = SimConfig::no_pheromone();
    let json = serde_json::to_string(&cfg).unwrap();
    let back: SimConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(cfg, back);
}
