//! Flat-file stores for snapshots and interval diffs
//!
//! Each store owns one directory. The directory listing is the index:
//! file names carry the capture timestamp (and, for intervals, the elapsed
//! span), so no separate manifest is kept.
//!
//! ```text
//! cumulative_pulls/docker_images_2024-11-10_12-32-42.json
//! interval_pulls/docker_images_diff_2024-11-10_12-32-42_interval_1-00-00.json
//! ```

mod interval;
mod snapshot;

pub use interval::IntervalStore;
pub use snapshot::SnapshotStore;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::Result;

/// Write `value` as JSON indented by four spaces.
fn write_pretty_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
    value.serialize(&mut serializer)?;

    writer.flush()?;
    Ok(())
}
