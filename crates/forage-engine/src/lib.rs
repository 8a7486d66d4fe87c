//! Run driver, batch runner and reporting for forage simulations.
//!
//! A [`Run`] owns one field and its agents and advances them tick by tick:
//! every agent moves in index order, then the field evaporates once.
//! [`run_batch`] executes independent replicates, optionally on a worker
//! pool, and collects a [`BatchReport`]. Each replicate's random stream is
//! derived from `(seed, run_index)` alone, so reports do not depend on the
//! worker count.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod batch;
pub mod config;
pub mod hash;
pub mod metrics;
pub mod report;
pub mod run;
pub mod snapshot;

pub use batch::{run_batch, run_replicates};
pub use config::{SimConfig, Termination};
pub use metrics::TickMetrics;
pub use report::{BatchReport, BatchSummary, FoodSample, RunRecord};
pub use run::{Run, RunError, RunOutcome};
pub use snapshot::RunSnapshot;
