//! Tree walking and aggregation
//!
//! - `report` - record types produced by a walk
//! - `walker` - the depth-first walker itself

mod report;
mod walker;

pub use report::{EntryKind, EntryRecord, ErrorRecord, WalkReport, WalkStats};
pub use walker::{TreeWalker, VisitDecision, WalkConfig, WalkError, decide};
