//! hubpulls - record Docker Hub pull-count snapshots
//!
//! Each run fetches the full `library` listing, ranks it by pull count and
//! writes a timestamped snapshot. With `--compare-last` it also diffs the
//! new snapshot against the previous one and writes an interval file.
//!
//! Settings are read from `./hubpulls.toml` when present:
//!
//! ```toml
//! [registry]
//! base_url = "https://hub.docker.com/v2/repositories/library/"
//! page_size = 100
//!
//! [storage]
//! cumulative_dir = "cumulative_pulls"
//! interval_dir = "interval_pulls"
//!
//! [logging]
//! level = "info"
//! ```
//!
//! `RUST_LOG`, when set, overrides `logging.level` (e.g. `RUST_LOG=debug`
//! logs every fetched page). No other environment variable is read.

use anyhow::{Context, Result};
use clap::Parser;
use hubpulls_core::{Config, Pipeline, RunReport};

#[derive(Parser)]
#[command(name = "hubpulls")]
#[command(about = "Snapshot Docker Hub pull counts and diff against the last run")]
#[command(version)]
struct Args {
    /// Also diff against the most recent previous snapshot
    #[arg(long)]
    compare_last: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::load().context("failed to load configuration")?;

    let _log_guard =
        hubpulls_core::logging::init(&config.logging).context("failed to initialize logging")?;

    tracing::info!(compare_last = args.compare_last, "hubpulls starting");

    let pipeline = Pipeline::from_config(&config).context("failed to set up pipeline")?;
    pipeline
        .init()
        .context("failed to create output directories")?;

    let report = pipeline
        .run(args.compare_last)
        .context("snapshot run failed")?;

    print_report(&report);

    tracing::info!(
        records = report.records,
        interval_written = report.interval_path.is_some(),
        "hubpulls complete"
    );

    Ok(())
}

/// Print where this run's output went
fn print_report(report: &RunReport) {
    let Some(snapshot) = &report.snapshot_path else {
        println!("No repositories fetched.");
        return;
    };

    println!("Data saved to {}", snapshot.display());

    if let Some(interval) = &report.interval_path {
        if let Some(previous) = &report.previous_snapshot {
            println!("Compared against {}", previous.display());
        }
        println!("Data saved to {}", interval.display());
    }
}
