//! Exclusion matching for noise directories
//!
//! Decides whether a path yielded by the walk should be dropped from the
//! results. The list is fixed at construction time; matching is a pure
//! function of the path and the list.

/// Names excluded by default: kernel pseudo-filesystems and git metadata.
pub const DEFAULT_EXCLUDED: [&str; 4] = ["dev", "proc", "sys", ".git"];

/// An immutable set of excluded names, matched against the leading
/// characters of a path.
///
/// Matching is a raw prefix comparison, not a path-segment comparison:
/// with `dev` in the list, `dev`, `dev/null`, and also `developer` are all
/// excluded, while `a/dev` is not. This reproduces the behavior of the
/// original tool; see DESIGN.md for the tradeoff.
#[derive(Debug, Clone)]
pub struct ExcludeList {
    names: Vec<String>,
}

impl ExcludeList {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    /// Append extra names to the list, keeping the same matching rule.
    pub fn with_names(mut self, extra: impl IntoIterator<Item = String>) -> Self {
        self.names.extend(extra);
        self
    }

    /// Check whether `path` matches any excluded name.
    pub fn is_excluded(&self, path: &str) -> bool {
        // Equivalent to truncating the path to the name's length and
        // comparing for equality.
        self.names.iter().any(|name| path.starts_with(name.as_str()))
    }
}

impl Default for ExcludeList {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUDED.iter().map(|s| s.to_string()).collect())
    }
}
