//! Dls - list a directory tree where no real `ls` is available

pub mod exclude;
pub mod output;
pub mod walk;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use exclude::ExcludeList;
pub use output::{OutputOptions, print_json, print_report};
pub use walk::{
    EntryKind, EntryRecord, ErrorRecord, TreeWalker, VisitDecision, WalkConfig, WalkError,
    WalkReport, WalkStats,
};
