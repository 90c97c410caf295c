//! Exclusion rules applied to entries met during a recursive walk.
//!
//! An entry is excluded when its name is hidden (leading `.`), private
//! (leading `_`), or listed in the skip list. Skip entries are compared by
//! exact string equality against both the entry's basename and its full
//! path as the walk spells it (the spec's root followed by the position
//! below it, `.` contributing nothing), so `other/exclude` only matches that
//! one location while `exclude` matches any directory of that name.

use std::collections::HashSet;

use crate::path::types::RelativePath;

/// An immutable exclusion predicate built from a skip list.
///
/// # Examples
///
/// ```
/// use pkgpaths::path::PathFilter;
///
/// let filter = PathFilter::new(["exclude", "skip.go"]);
/// assert!(filter.is_excluded("exclude"));
/// assert!(filter.is_excluded("something/skip.go"));
/// assert!(filter.is_excluded(".git"));
/// assert!(filter.is_excluded("_ignore"));
/// assert!(!filter.is_excluded("include.go"));
/// assert!(!filter.is_excluded(".."));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathFilter {
    skip: HashSet<String>,
}

impl PathFilter {
    /// Build a filter from skip entries.
    ///
    /// Entries are stored in their `/`-joined relative form, so `./vendor/`
    /// and `vendor` are the same entry. Entries that reduce to nothing are
    /// dropped.
    pub fn new<I, S>(skip: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let skip = skip
            .into_iter()
            .map(|entry| RelativePath::parse(entry.as_ref()))
            .filter(|entry| !entry.is_root())
            .map(|entry| entry.to_string())
            .collect();
        Self { skip }
    }

    /// Check a name or `/`-separated relative path.
    #[must_use]
    pub fn is_excluded(&self, name: &str) -> bool {
        self.is_excluded_path(&RelativePath::parse(name))
    }

    /// Check a structured path as spelled by the walk.
    ///
    /// The empty path is never excluded.
    #[must_use]
    pub fn is_excluded_path(&self, path: &RelativePath) -> bool {
        let Some(base) = path.file_name() else {
            return false;
        };

        if self.skip.contains(base) || self.skip.contains(&path.to_string()) {
            return true;
        }

        is_hidden_or_private(base)
    }

    /// The normalized skip entries.
    pub fn skip_entries(&self) -> impl Iterator<Item = &str> {
        self.skip.iter().map(String::as_str)
    }
}

/// True for names starting with `.` or `_`, except `.` and `..` themselves.
fn is_hidden_or_private(base: &str) -> bool {
    if base == "." || base == ".." {
        return false;
    }
    base.starts_with('.') || base.starts_with('_')
}
