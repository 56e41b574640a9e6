//! Interval diff store (write-only)

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{NaiveDateTime, TimeDelta};

use crate::error::Result;
use crate::format::{format_interval_for_filename, format_timestamp};
use crate::types::DiffRecord;

/// Diff files named by capture time and the span they cover.
#[derive(Debug, Clone)]
pub struct IntervalStore {
    dir: PathBuf,
}

impl IntervalStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Create the store directory if absent
    pub fn init(&self) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        Ok(())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File name for a diff taken at `ts` covering `elapsed`
    pub fn file_name(ts: NaiveDateTime, elapsed: TimeDelta) -> String {
        format!(
            "docker_images_diff_{}_interval_{}.json",
            format_timestamp(ts),
            format_interval_for_filename(elapsed)
        )
    }

    /// Persist diff records, returning the file path.
    pub fn write(
        &self,
        diffs: &[DiffRecord],
        ts: NaiveDateTime,
        elapsed: TimeDelta,
    ) -> Result<PathBuf> {
        self.init()?;

        let path = self.dir.join(Self::file_name(ts, elapsed));
        super::write_pretty_json(&path, diffs)?;

        tracing::info!(
            path = %path.display(),
            records = diffs.len(),
            "Interval diff written"
        );

        Ok(path)
    }
}
