//! One snapshot run, start to finish
//!
//! ```text
//! [compare] read last snapshot ─┐
//!                               ▼
//!   fetch ──► rank ──► write snapshot ──► [compare] diff ──► write interval
//! ```
//!
//! The previous snapshot is loaded before the new one is written, so the
//! diff always spans two distinct runs. An empty fetch ends the run
//! before anything is written.

use std::path::PathBuf;

use chrono::{NaiveDateTime, TimeDelta};

use crate::config::Config;
use crate::diff::diff;
use crate::error::Result;
use crate::fetch::{PageSource, RegistryClient, SyncFetcher};
use crate::format::now_seconds;
use crate::rank::rank;
use crate::store::{IntervalStore, SnapshotStore};

/// What a run produced.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Records fetched (and ranked)
    pub records: usize,
    /// Snapshot written by this run
    pub snapshot_path: Option<PathBuf>,
    /// Snapshot the diff was computed against
    pub previous_snapshot: Option<PathBuf>,
    /// Interval diff written by this run
    pub interval_path: Option<PathBuf>,
    /// Time between the previous snapshot and this one
    pub elapsed: Option<TimeDelta>,
}

/// Fetcher and stores wired together.
pub struct Pipeline<S = RegistryClient> {
    fetcher: SyncFetcher<S>,
    snapshots: SnapshotStore,
    intervals: IntervalStore,
}

impl Pipeline<RegistryClient> {
    /// Build a pipeline against the configured registry and directories
    pub fn from_config(config: &Config) -> Result<Self> {
        let fetcher = SyncFetcher::new(&config.registry)?;
        Ok(Self::new(
            fetcher,
            SnapshotStore::new(&config.storage.cumulative_dir),
            IntervalStore::new(&config.storage.interval_dir),
        ))
    }
}

impl<S: PageSource> Pipeline<S> {
    pub fn new(fetcher: SyncFetcher<S>, snapshots: SnapshotStore, intervals: IntervalStore) -> Self {
        Self {
            fetcher,
            snapshots,
            intervals,
        }
    }

    /// Create both store directories
    pub fn init(&self) -> Result<()> {
        self.snapshots.init()?;
        self.intervals.init()
    }

    /// Run once, stamped with the current time
    pub fn run(&self, compare_last: bool) -> Result<RunReport> {
        self.run_at(compare_last, now_seconds())
    }

    /// Run once, stamped with `now`
    pub fn run_at(&self, compare_last: bool, now: NaiveDateTime) -> Result<RunReport> {
        let mut report = RunReport::default();

        let previous = if compare_last {
            self.snapshots.read_latest()?
        } else {
            None
        };

        let fetched = self.fetcher.fetch_all()?;
        if fetched.is_empty() {
            tracing::warn!("No repositories fetched.");
            return Ok(report);
        }

        let ranked = rank(fetched);
        report.records = ranked.len();
        report.snapshot_path = Some(self.snapshots.write(&ranked, now)?);

        if !compare_last {
            return Ok(report);
        }

        let previous = match previous {
            Some(snapshot) if !snapshot.records.is_empty() => snapshot,
            _ => {
                tracing::info!("No previous snapshot to compare against, skipping diff");
                return Ok(report);
            }
        };

        let elapsed = now - previous.taken_at;
        let diffs = diff(&ranked, &previous.records);

        tracing::info!(
            previous = %previous.path.display(),
            repositories = diffs.len(),
            elapsed_secs = elapsed.num_seconds(),
            "Computed interval diff"
        );

        report.interval_path = Some(self.intervals.write(&diffs, now, elapsed)?);
        report.previous_snapshot = Some(previous.path);
        report.elapsed = Some(elapsed);

        Ok(report)
    }
}
