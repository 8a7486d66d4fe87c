//! Per-run records, food time series and batch summaries.

use serde::{Deserialize, Serialize};

use crate::run::{RunError, RunOutcome};

/// Summary row of one replicate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunRecord {
    /// Zero-based replicate index.
    pub run_index: u32,
    /// Ticks executed.
    pub total_steps: u64,
    /// Food left when the run stopped.
    pub remaining_food: u64,
    /// Whether every source was emptied.
    pub exhausted: bool,
    /// Completed deliveries.
    pub deliveries: u64,
}

/// Remaining food at one point of a replicate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodSample {
    /// Zero-based replicate index.
    pub run_index: u32,
    /// Tick after which the sample was taken.
    pub step: u64,
    /// Food left at that tick.
    pub remaining_food: u64,
}

/// Aggregate statistics over the successful replicates of a batch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Successful replicates.
    pub runs: usize,
    /// Replicates that emptied every source.
    pub exhausted_runs: usize,
    /// Mean ticks per replicate.
    pub mean_steps: f64,
    /// Fewest ticks.
    pub min_steps: u64,
    /// Most ticks.
    pub max_steps: u64,
    /// Mean food left.
    pub mean_remaining_food: f64,
    /// Least food left.
    pub min_remaining_food: u64,
    /// Most food left.
    pub max_remaining_food: u64,
}

/// Results of a batch, ordered by replicate index.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// One row per successful replicate.
    pub records: Vec<RunRecord>,
    /// Food time series of every successful replicate, concatenated.
    pub samples: Vec<FoodSample>,
    /// Replicates that failed mid-run.
    pub failures: Vec<RunError>,
}

impl BatchReport {
    /// Fold per-replicate results, already in index order.
    pub fn from_results(results: Vec<Result<RunOutcome, RunError>>) -> Self {
        let mut report = Self::default();
        for result in results {
            match result {
                Ok(outcome) => {
                    report.records.push(outcome.record);
                    report.samples.extend(outcome.samples);
                }
                Err(e) => report.failures.push(e),
            }
        }
        report
    }

    /// Statistics over `records`; `None` when no replicate succeeded.
    pub fn summary(&self) -> Option<BatchSummary> {
        let n = self.records.len();
        if n == 0 {
            return None;
        }
        let steps = self.records.iter().map(|r| r.total_steps);
        let food = self.records.iter().map(|r| r.remaining_food);
        Some(BatchSummary {
            runs: n,
            exhausted_runs: self.records.iter().filter(|r| r.exhausted).count(),
            mean_steps: steps.clone().sum::<u64>() as f64 / n as f64,
            min_steps: steps.clone().min().unwrap_or(0),
            max_steps: steps.max().unwrap_or(0),
            mean_remaining_food: food.clone().sum::<u64>() as f64 / n as f64,
            min_remaining_food: food.clone().min().unwrap_or(0),
            max_remaining_food: food.max().unwrap_or(0),
        })
    }

    /// One line per replicate.
    pub fn runs_csv(&self) -> String {
        let mut csv = String::new();
        csv.push_str("run_index,total_steps,remaining_food,exhausted,deliveries\n");
        for r in &self.records {
            csv.push_str(&format!(
                "{},{},{},{},{}\n",
                r.run_index, r.total_steps, r.remaining_food, r.exhausted, r.deliveries
            ));
        }
        csv
    }

    /// One line per food sample.
    pub fn samples_csv(&self) -> String {
        let mut csv = String::new();
        csv.push_str("run_index,step,remaining_food\n");
        for s in &self.samples {
            csv.push_str(&format!(
                "{},{},{}\n",
                s.run_index, s.step, s.remaining_food
            ));
        }
        csv
    }
}
