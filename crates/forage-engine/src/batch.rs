//! Replicate batches, sequential or on a worker pool.
//!
//! With more than one worker, replicate indices are fed to a fixed pool of
//! scoped threads over a bounded crossbeam channel; each worker builds and
//! runs its replicates independently and sends `(index, result)` back on a
//! reply channel sized to hold every result. Results are re-sorted by index,
//! so the report is identical to a sequential batch.

use std::thread;

use forage_core::{ConfigError, RunIndex};
use tracing::{info, warn};

use crate::config::SimConfig;
use crate::report::BatchReport;
use crate::run::{Run, RunError, RunOutcome};

/// Build and run one replicate to completion.
fn run_one(config: &SimConfig, run_index: RunIndex) -> Result<RunOutcome, RunError> {
    let mut run = Run::new(config, run_index)?;
    run.run_to_end()
}

/// Run every replicate of `config`; one result per replicate, in index
/// order.
///
/// A failing replicate does not stop the others.
pub fn run_replicates(
    config: &SimConfig,
) -> Result<Vec<Result<RunOutcome, RunError>>, ConfigError> {
    config.validate()?;
    let workers = config.effective_workers();
    if workers <= 1 {
        return Ok((0..config.runs)
            .map(|i| run_one(config, RunIndex(i)))
            .collect());
    }

    let (job_tx, job_rx) = crossbeam_channel::bounded::<RunIndex>(workers * 2);
    let (reply_tx, reply_rx) =
        crossbeam_channel::bounded::<(RunIndex, Result<RunOutcome, RunError>)>(
            config.runs as usize,
        );

    let mut results = thread::scope(|s| {
        for _ in 0..workers {
            let job_rx = job_rx.clone();
            let reply_tx = reply_tx.clone();
            s.spawn(move || {
                while let Ok(run_index) = job_rx.recv() {
                    let result = run_one(config, run_index);
                    if reply_tx.send((run_index, result)).is_err() {
                        break;
                    }
                }
            });
        }
        drop(reply_tx);
        for i in 0..config.runs {
            if job_tx.send(RunIndex(i)).is_err() {
                break;
            }
        }
        drop(job_tx);
        reply_rx.iter().collect::<Vec<_>>()
    });

    results.sort_by_key(|(idx, _)| *idx);
    Ok(results.into_iter().map(|(_, r)| r).collect())
}

/// Run every replicate and fold the results into a [`BatchReport`].
///
/// Failed replicates are logged and kept in
/// [`BatchReport::failures`].
pub fn run_batch(config: &SimConfig) -> Result<BatchReport, ConfigError> {
    let results = run_replicates(config)?;
    for e in results.iter().filter_map(|r| r.as_ref().err()) {
        warn!(error = %e, "replicate failed");
    }
    let report = BatchReport::from_results(results);
    info!(
        runs = config.runs,
        workers = config.effective_workers(),
        succeeded = report.records.len(),
        failed = report.failures.len(),
        "batch complete"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Termination;

    fn tiny(workers: usize) -> SimConfig {
        SimConfig {
            size: 8,
            home_size: 2,
            agents: 3,
            food_sources: 2,
            food_value: 2,
            runs: 5,
            workers,
            seed: 99,
            termination: Termination::UntilExhausted { step_cap: 20_000 },
            sample_every: 25,
            ..SimConfig::default()
        }
    }

    #[test]
    fn invalid_config_fails_fast() {
        let cfg = SimConfig {
            runs: 0,
            ..tiny(1)
        };
        assert_eq!(run_batch(&cfg).unwrap_err(), ConfigError::NoReplicates);
    }

    #[test]
    fn sequential_batch_is_index_ordered() {
        let report = run_batch(&tiny(1)).unwrap();
        let idx: Vec<u32> = report.records.iter().map(|r| r.run_index).collect();
        assert_eq!(idx, vec![0, 1, 2, 3, 4]);
        assert!(report.failures.is_empty());
    }

    #[test]
    fn pool_matches_sequential() {
        let seq = run_replicates(&tiny(1)).unwrap();
        let par = run_replicates(&tiny(3)).unwrap();
        assert_eq!(seq, par);
    }

    #[test]
    fn replicates_use_distinct_streams() {
        let report = run_batch(&tiny(1)).unwrap();
        let first = &report.records[0];
        assert!(report
            .records
            .iter()
            .skip(1)
            .any(|r| r.total_steps != first.total_steps));
    }
}
