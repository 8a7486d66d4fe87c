//! Loading and overriding batch configuration.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use forage::engine::SimConfig;

use crate::Preset;

/// The configuration a preset names.
pub fn preset(preset: Preset) -> SimConfig {
    match preset {
        Preset::NoPheromone => SimConfig::no_pheromone(),
        Preset::WithPheromone => SimConfig::with_pheromone(),
    }
}

/// Read `path` as TOML, or fall back to `fallback` when no path is given.
pub fn load(path: Option<&Path>, fallback: Preset) -> Result<SimConfig> {
    let Some(path) = path else {
        return Ok(preset(fallback));
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))
}

/// Command-line values win over the file.
pub fn apply_overrides(
    cfg: &mut SimConfig,
    seed: Option<u64>,
    runs: Option<u32>,
    workers: Option<usize>,
) {
    if let Some(seed) = seed {
        cfg.seed = seed;
    }
    if let Some(runs) = runs {
        cfg.runs = runs;
    }
    if let Some(workers) = workers {
        cfg.workers = workers;
    }
}
