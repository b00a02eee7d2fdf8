//! Record types produced by a tree walk
//!
//! A walk yields an ordered list of entries, an ordered list of errors, and
//! one statistics record. All three live only for the duration of a single
//! invocation and are returned as an immutable snapshot.

use serde::Serialize;

/// Classification of a filesystem node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Dir,
}

impl EntryKind {
    pub fn label(self) -> &'static str {
        match self {
            EntryKind::File => "file",
            EntryKind::Dir => "dir",
        }
    }
}

/// One surviving, non-errored filesystem node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryRecord {
    /// Byte count as reported by the filesystem. Directories report
    /// whatever the platform gives back (often the inode size).
    pub size: u64,
    /// Modification time formatted to second precision, local time.
    pub modified: String,
    pub kind: EntryKind,
    /// Path relative to the walk root, with a trailing separator appended
    /// for directories. Exclusion matching always runs on the raw path
    /// before this decoration.
    pub path: String,
}

/// One failed node visit. The walk records the failure and moves on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorRecord {
    pub message: String,
}

/// Accumulated counters for one full walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WalkStats {
    pub file_count: usize,
    pub dir_count: usize,
    pub error_count: usize,
    /// Sum of `size` over file entries only.
    pub total_file_size: u64,
}

/// Everything one walk produced, in visitation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WalkReport {
    pub entries: Vec<EntryRecord>,
    pub errors: Vec<ErrorRecord>,
    pub stats: WalkStats,
}

impl WalkReport {
    /// Append an entry and fold it into the stats.
    pub fn record_entry(&mut self, entry: EntryRecord) {
        match entry.kind {
            EntryKind::File => {
                self.stats.file_count += 1;
                self.stats.total_file_size += entry.size;
            }
            EntryKind::Dir => self.stats.dir_count += 1,
        }
        self.entries.push(entry);
    }

    /// Append an error record for a failed node visit.
    pub fn record_error(&mut self, message: impl Into<String>) {
        self.stats.error_count += 1;
        self.errors.push(ErrorRecord {
            message: message.into(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(kind: EntryKind, size: u64, path: &str) -> EntryRecord {
        EntryRecord {
            size,
            modified: "2020-04-16 09:00:00".to_string(),
            kind,
            path: path.to_string(),
        }
    }

    #[test]
    fn test_stats_fold_over_entries() {
        let mut report = WalkReport::default();
        report.record_entry(entry(EntryKind::File, 10, "file.txt"));
        report.record_entry(entry(EntryKind::Dir, 4096, "sub/"));
        report.record_entry(entry(EntryKind::File, 5, "sub/inner.txt"));

        assert_eq!(report.stats.file_count, 2);
        assert_eq!(report.stats.dir_count, 1);
        assert_eq!(report.stats.error_count, 0);
        // Directory sizes never count toward the total.
        assert_eq!(report.stats.total_file_size, 15);
    }

    #[test]
    fn test_errors_do_not_affect_entry_counts() {
        let mut report = WalkReport::default();
        report.record_entry(entry(EntryKind::File, 1, "a"));
        report.record_error("b: permission denied");

        assert_eq!(report.stats.file_count, 1);
        assert_eq!(report.stats.error_count, 1);
        assert_eq!(report.entries.len(), 1);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].message, "b: permission denied");
    }

    #[test]
    fn test_order_is_preserved() {
        let mut report = WalkReport::default();
        report.record_entry(entry(EntryKind::File, 1, "first"));
        report.record_entry(entry(EntryKind::File, 1, "second"));
        report.record_entry(entry(EntryKind::File, 1, "third"));

        let paths: Vec<&str> = report.entries.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(EntryKind::File.label(), "file");
        assert_eq!(EntryKind::Dir.label(), "dir");
    }
}
