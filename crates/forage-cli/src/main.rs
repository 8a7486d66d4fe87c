//! Forage CLI: run foraging batches and write their reports.

mod config;
mod output;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use forage::engine::run_batch;
use tracing::info;

#[derive(Parser)]
#[command(name = "forage")]
#[command(author, version, about = "Forage - colony foraging with pheromone trails", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a batch of replicates and write CSV and JSON reports
    Run {
        /// TOML configuration file; omitted keys take the preset's values
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Preset used when no configuration file is given
        #[arg(short, long, value_enum, default_value_t = Preset::WithPheromone)]
        preset: Preset,

        /// Base seed
        #[arg(long)]
        seed: Option<u64>,

        /// Number of replicates
        #[arg(short, long)]
        runs: Option<u32>,

        /// Worker threads (0 = available parallelism)
        #[arg(short, long)]
        workers: Option<usize>,

        /// Output directory
        #[arg(short, long, default_value = "forage-out")]
        out: PathBuf,
    },

    /// Print a preset as TOML
    Config {
        /// Preset to print
        #[arg(value_enum, default_value_t = Preset::WithPheromone)]
        preset: Preset,
    },
}

/// Built-in experiments.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Preset {
    /// Random-walk foragers, no trails
    NoPheromone,
    /// Trail-laying foragers with proportional trail following
    WithPheromone,
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            preset,
            seed,
            runs,
            workers,
            out,
        } => {
            let mut cfg = config::load(config.as_deref(), preset)?;
            config::apply_overrides(&mut cfg, seed, runs, workers);
            cfg.validate().context("invalid configuration")?;

            info!(
                runs = cfg.runs,
                workers = cfg.effective_workers(),
                seed = cfg.seed,
                "starting batch"
            );
            let report = run_batch(&cfg).context("batch rejected")?;
            output::write_report(&out, &cfg, &report)?;

            match report.summary() {
                Some(s) => println!(
                    "{} runs ({} exhausted), steps mean {:.1} [{}, {}], food left mean {:.2}",
                    s.runs, s.exhausted_runs, s.mean_steps, s.min_steps, s.max_steps,
                    s.mean_remaining_food
                ),
                None => println!("no replicate succeeded"),
            }
            if !report.failures.is_empty() {
                println!("{} replicates failed", report.failures.len());
            }
            println!("reports written to {}", out.display());
        }
        Commands::Config { preset } => {
            let text = toml::to_string_pretty(&config::preset(preset))
                .context("failed to serialise preset")?;
            print!("{text}");
        }
    }

    Ok(())
}
