//! Interval diff between two snapshots
//!
//! The diff covers every repository in the newer snapshot. Repositories that
//! only appear in the older one are not reported.

use std::collections::HashMap;

use crate::types::{DiffRecord, RepositoryRecord};

/// Per-repository pull-count change from `old` to `new`, in `new`'s order.
///
/// A repository missing from `old` counts from zero. If `old` names a
/// repository twice, the later entry wins.
pub fn diff(new: &[RepositoryRecord], old: &[RepositoryRecord]) -> Vec<DiffRecord> {
    let previous: HashMap<&str, u64> = old
        .iter()
        .map(|repo| (repo.name.as_str(), repo.pull_count))
        .collect();

    new.iter()
        .map(|repo| {
            let old_count = previous.get(repo.name.as_str()).copied().unwrap_or(0);
            DiffRecord {
                name: repo.name.clone(),
                namespace: repo.namespace.clone(),
                pull_count_diff: signed_delta(repo.pull_count, old_count),
                official: repo.official,
            }
        })
        .collect()
}

fn signed_delta(new: u64, old: u64) -> i64 {
    (i128::from(new) - i128::from(old)).clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
}
