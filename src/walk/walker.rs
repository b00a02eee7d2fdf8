//! Depth-first directory walker
//!
//! The walker visits every node under a root in pre-order (a directory is
//! recorded before its children, children in lexical name order), consults
//! the exclusion list per node, and accumulates entries, errors, and stats
//! into a [`WalkReport`]. A failed node visit becomes an error record and
//! the walk continues; the only fatal condition is being unable to read
//! the root at all.

use std::fs;
use std::io;
use std::ops::ControlFlow;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};
use std::time::SystemTime;

use chrono::{DateTime, Local};
use thiserror::Error;

use crate::exclude::ExcludeList;

use super::report::{EntryKind, EntryRecord, WalkReport};

/// Path recorded for the walk root itself (shown only with `include_all`).
const ROOT_MARKER: &str = ".";

/// Configuration for one walk invocation.
#[derive(Debug, Clone, Default)]
pub struct WalkConfig {
    /// Bypass the exclusion list and also record the root marker itself.
    pub include_all: bool,
    pub excludes: ExcludeList,
}

/// What to do with a node, decided before the node is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitDecision {
    /// Record the node and descend into it if it is a directory.
    Continue,
    /// Drop the node and everything beneath it, silently.
    SkipSubtree,
    /// Stop the whole walk.
    Abort,
}

/// Fatal failure to begin a walk.
///
/// Per-node failures never surface here; they are captured as error
/// records in the report instead.
#[derive(Debug, Error)]
pub enum WalkError {
    #[error("cannot read '{}': {source}", path.display())]
    Start {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Decide what to do with the node at `path` (relative to the walk root).
///
/// Pure function of its inputs so the filtering policy can be tested
/// without a filesystem.
pub fn decide(path: &str, include_all: bool, excludes: &ExcludeList) -> VisitDecision {
    if !include_all && excludes.is_excluded(path) {
        return VisitDecision::SkipSubtree;
    }
    VisitDecision::Continue
}

/// Walks a directory tree and aggregates what it finds.
pub struct TreeWalker {
    config: WalkConfig,
}

impl TreeWalker {
    pub fn new(config: WalkConfig) -> Self {
        Self { config }
    }

    /// Walk `root` depth-first and return the aggregated report.
    ///
    /// The caller is expected to have checked that `root` exists and is a
    /// directory; the only error returned here is failing to read it at
    /// the start of the walk.
    pub fn walk(&self, root: &Path) -> Result<WalkReport, WalkError> {
        let mut report = WalkReport::default();

        // The root marker is only recorded when nothing is filtered out.
        // Either way the walk descends into it.
        if self.config.include_all {
            match fs::symlink_metadata(root) {
                Ok(meta) => report.record_entry(make_entry(ROOT_MARKER, &meta)),
                Err(err) => report.record_error(format!("{}: {}", ROOT_MARKER, err)),
            }
        }

        let dir = fs::read_dir(root).map_err(|source| WalkError::Start {
            path: root.to_path_buf(),
            source,
        })?;
        let _ = self.visit_children(dir, "", &mut report);
        Ok(report)
    }

    fn visit_children(
        &self,
        dir: fs::ReadDir,
        parent: &str,
        report: &mut WalkReport,
    ) -> ControlFlow<()> {
        let mut children = Vec::new();
        for entry in dir {
            match entry {
                Ok(child) => children.push(child),
                // A directory entry we could not even read. Keep going.
                Err(err) => report.record_error(err.to_string()),
            }
        }
        children.sort_by_key(|c| c.file_name());

        for child in children {
            let name = child.file_name().to_string_lossy().into_owned();
            let rel = if parent.is_empty() {
                name
            } else {
                format!("{}{}{}", parent, MAIN_SEPARATOR, name)
            };
            if self.visit(&child.path(), &rel, report).is_break() {
                return ControlFlow::Break(());
            }
        }
        ControlFlow::Continue(())
    }

    fn visit(&self, path: &Path, rel: &str, report: &mut WalkReport) -> ControlFlow<()> {
        match decide(rel, self.config.include_all, &self.config.excludes) {
            VisitDecision::Continue => {}
            VisitDecision::SkipSubtree => return ControlFlow::Continue(()),
            VisitDecision::Abort => return ControlFlow::Break(()),
        }

        // symlink_metadata so symlinks are recorded as-is, never followed.
        let meta = match fs::symlink_metadata(path) {
            Ok(meta) => meta,
            Err(err) => {
                report.record_error(format!("{}: {}", rel, err));
                return ControlFlow::Continue(());
            }
        };

        let entry = make_entry(rel, &meta);
        let is_dir = entry.kind == EntryKind::Dir;
        report.record_entry(entry);

        if is_dir {
            match fs::read_dir(path) {
                Ok(dir) => return self.visit_children(dir, rel, report),
                // The directory itself was recorded above; only listing
                // its children failed.
                Err(err) => report.record_error(format!("{}: {}", rel, err)),
            }
        }
        ControlFlow::Continue(())
    }
}

fn make_entry(rel: &str, meta: &fs::Metadata) -> EntryRecord {
    let kind = if meta.is_dir() {
        EntryKind::Dir
    } else {
        EntryKind::File
    };
    let path = match kind {
        EntryKind::Dir => format!("{}{}", rel, MAIN_SEPARATOR),
        EntryKind::File => rel.to_string(),
    };
    EntryRecord {
        size: meta.len(),
        modified: meta.modified().map(format_mod_time).unwrap_or_default(),
        kind,
        path,
    }
}

/// Second-precision local time, fixed display width.
fn format_mod_time(t: SystemTime) -> String {
    DateTime::<Local>::from(t).format("%Y-%m-%d %H:%M:%S").to_string()
}
