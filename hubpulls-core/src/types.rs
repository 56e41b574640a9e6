//! Core domain types for hubpulls
//!
//! | Term | Definition |
//! |------|------------|
//! | **Snapshot** | One full timestamped capture of all fetched repositories, ranked |
//! | **Interval** | Elapsed time between two consecutive snapshots, and the diff computed from them |
//! | **Pull count** | Cumulative pull counter the registry reports for a repository |

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================
// Repositories
// ============================================

/// One repository entry from the registry listing.
///
/// Only the fields hubpulls reads are typed. Everything else the registry
/// returns is kept in `extra` and written back out unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositoryRecord {
    /// Repository name, unique within a snapshot
    pub name: String,
    /// Owning namespace (`library` for official images)
    pub namespace: String,
    /// Cumulative pull count
    pub pull_count: u64,
    /// Upstream fields passed through as-is
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
    /// Set by the ranker; listings from the curated namespace are all official
    #[serde(default)]
    pub official: bool,
}

impl RepositoryRecord {
    /// Record with no passthrough fields
    pub fn new(name: impl Into<String>, namespace: impl Into<String>, pull_count: u64) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            pull_count,
            extra: serde_json::Map::new(),
            official: false,
        }
    }
}

// ============================================
// Snapshots
// ============================================

/// A ranked capture as stored on disk.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Records in rank order
    pub records: Vec<RepositoryRecord>,
    /// Capture time, second precision
    pub taken_at: NaiveDateTime,
    /// File the snapshot was read from or written to
    pub path: PathBuf,
}

// ============================================
// Diffs
// ============================================

/// Pull-count change for one repository between two snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffRecord {
    pub name: String,
    pub namespace: String,
    /// New count minus old count; the full new count if the repository is new
    pub pull_count_diff: i64,
    pub official: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_keeps_unknown_fields() {
        let raw = json!({
            "name": "redis",
            "namespace": "library",
            "repository_type": "image",
            "star_count": 13000,
            "pull_count": 4_000_000_000u64,
            "last_updated": "2024-11-08T21:15:10.000Z"
        });

        let record: RepositoryRecord = serde_json::from_value(raw).unwrap();
        assert_eq!(record.name, "redis");
        assert_eq!(record.pull_count, 4_000_000_000);
        assert!(!record.official);
        assert_eq!(record.extra.get("star_count"), Some(&json!(13000)));

        let back = serde_json::to_value(&record).unwrap();
        assert_eq!(back["repository_type"], json!("image"));
        assert_eq!(back["last_updated"], json!("2024-11-08T21:15:10.000Z"));
        assert_eq!(back["official"], json!(false));
    }

    #[test]
    fn test_record_missing_pull_count_is_rejected() {
        let raw = json!({"name": "redis", "namespace": "library"});
        assert!(serde_json::from_value::<RepositoryRecord>(raw).is_err());
    }

    #[test]
    fn test_record_negative_pull_count_is_rejected() {
        let raw = json!({"name": "redis", "namespace": "library", "pull_count": -3});
        assert!(serde_json::from_value::<RepositoryRecord>(raw).is_err());
    }

    #[test]
    fn test_diff_record_field_order() {
        let diff = DiffRecord {
            name: "redis".to_string(),
            namespace: "library".to_string(),
            pull_count_diff: 40,
            official: true,
        };
        assert_eq!(
            serde_json::to_string(&diff).unwrap(),
            r#"{"name":"redis","namespace":"library","pull_count_diff":40,"official":true}"#
        );
    }
}
