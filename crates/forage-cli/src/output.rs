//! Report files.
//!
//! - `runs.csv`: one row per replicate.
//! - `samples.csv`: remaining food over time, all replicates.
//! - `summary.json`: the configuration, batch statistics and failures.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use forage::engine::{BatchReport, BatchSummary, SimConfig};
use serde::Serialize;

#[derive(Serialize)]
struct Summary<'a> {
    config: &'a SimConfig,
    summary: Option<BatchSummary>,
    failures: Vec<String>,
}

fn write(dir: &Path, name: &str, contents: &str) -> Result<()> {
    let path = dir.join(name);
    fs::write(&path, contents).with_context(|| format!("failed to write {}", path.display()))
}

/// Write the three report files under `dir`, creating it if needed.
pub fn write_report(dir: &Path, config: &SimConfig, report: &BatchReport) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create {}", dir.display()))?;
    write(dir, "runs.csv", &report.runs_csv())?;
    write(dir, "samples.csv", &report.samples_csv())?;

    let summary = Summary {
        config,
        summary: report.summary(),
        failures: report.failures.iter().map(|e| e.to_string()).collect(),
    };
    let json = serde_json::to_string_pretty(&summary).context("failed to serialise summary")?;
    write(dir, "summary.json", &json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_all_three_files() {
        let dir = std::env::temp_dir().join(format!("forage-cli-test-{}", std::process::id()));
        let cfg = SimConfig {
            size: 8,
            home_size: 2,
            agents: 2,
            food_sources: 1,
            food_value: 1,
            runs: 2,
            ..SimConfig::no_pheromone()
        };
        let report = forage::engine::run_batch(&cfg).unwrap();
        write_report(&dir, &cfg, &report).unwrap();

        let runs = fs::read_to_string(dir.join("runs.csv")).unwrap();
        assert_eq!(runs.lines().count(), 3);
        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(dir.join("summary.json")).unwrap()).unwrap();
        assert_eq!(json["summary"]["runs"], 2);
        assert!(dir.join("samples.csv").exists());

        fs::remove_dir_all(&dir).unwrap();
    }
}
