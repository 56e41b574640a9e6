//! Ranking of fetched repositories

use crate::types::RepositoryRecord;

/// Sort by pull count, highest first, and mark every record official.
///
/// The sort is stable, so equal counts keep their fetch order.
pub fn rank(mut records: Vec<RepositoryRecord>) -> Vec<RepositoryRecord> {
    records.sort_by(|a, b| b.pull_count.cmp(&a.pull_count));
    for record in &mut records {
        record.official = true;
    }
    records
}
