//! Cumulative snapshot store

use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::error::{Error, Result};
use crate::format::{format_timestamp, parse_timestamp};
use crate::types::{RepositoryRecord, Snapshot};

const FILE_PREFIX: &str = "docker_images_";
const FILE_SUFFIX: &str = ".json";

/// Timestamped full snapshots in one directory.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    dir: PathBuf,
}

impl SnapshotStore {
    /// Store rooted at `dir`. Nothing is touched on disk until [`init`](Self::init)
    /// or [`write`](Self::write).
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

    /// File name for a snapshot taken at `ts`
    pub fn file_name(ts: NaiveDateTime) -> String {
        format!("{FILE_PREFIX}{}{FILE_SUFFIX}", format_timestamp(ts))
    }

    /// Persist ranked records under the file name for `ts`, returning its path.
    ///
    /// A snapshot written in the same second as an existing one replaces it.
    pub fn write(&self, records: &[RepositoryRecord], ts: NaiveDateTime) -> Result<PathBuf> {
        self.init()?;

        let path = self.dir.join(Self::file_name(ts));
        super::write_pretty_json(&path, records)?;

        tracing::info!(
            path = %path.display(),
            records = records.len(),
            "Snapshot written"
        );

        Ok(path)
    }

    /// Load the most recent snapshot.
    ///
    /// The lexicographically greatest file name is the latest. Returns
    /// `Ok(None)` when the directory is missing or empty.
    ///
    /// # Errors
    ///
    /// [`Error::UnexpectedFileName`] if that file name does not carry a
    /// snapshot timestamp, [`Error::Json`] if its content does not parse.
    pub fn read_latest(&self) -> Result<Option<Snapshot>> {
        let Some(name) = self.latest_file_name()? else {
            tracing::info!(dir = %self.dir.display(), "No previous cumulative files found");
            return Ok(None);
        };

        let taken_at = Self::parse_file_name(&name).ok_or_else(|| Error::UnexpectedFileName {
            dir: self.dir.clone(),
            name: name.clone(),
        })?;

        let path = self.dir.join(&name);
        let reader = BufReader::new(File::open(&path)?);
        let records: Vec<RepositoryRecord> = serde_json::from_reader(reader)?;

        tracing::debug!(
            path = %path.display(),
            records = records.len(),
            "Loaded latest snapshot"
        );

        Ok(Some(Snapshot {
            records,
            taken_at,
            path,
        }))
    }

    /// Timestamp encoded in a snapshot file name, if it is one
    pub fn parse_file_name(name: &str) -> Option<NaiveDateTime> {
        name.strip_prefix(FILE_PREFIX)
            .and_then(|rest| rest.strip_suffix(FILE_SUFFIX))
            .and_then(parse_timestamp)
    }

    fn latest_file_name(&self) -> Result<Option<String>> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let mut latest: Option<String> = None;
        for entry in entries {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }

            let name = entry.file_name().into_string().map_err(|raw| {
                Error::UnexpectedFileName {
                    dir: self.dir.clone(),
                    name: raw.to_string_lossy().into_owned(),
                }
            })?;

            if latest.as_deref().map_or(true, |current| name.as_str() > current) {
                latest = Some(name);
            }
        }

        Ok(latest)
    }
}
