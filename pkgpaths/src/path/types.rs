//! Core types for path specifications.
//!
//! This module defines how raw user input is classified (`PathSpec`) and how
//! positions inside a recursive walk are represented (`RelativePath`).

use std::fmt;
use std::path::{Component, Path, MAIN_SEPARATOR};

/// The trailing token that requests recursive expansion.
pub const RECURSIVE_MARKER: &str = "...";

/// A single user-supplied path specification.
///
/// # Examples
///
/// ```
/// use pkgpaths::path::PathSpec;
///
/// assert_eq!(PathSpec::parse("..."), PathSpec::Recursive { root: ".".into() });
/// assert_eq!(PathSpec::parse("foo/..."), PathSpec::Recursive { root: "foo".into() });
/// assert_eq!(PathSpec::parse("foo"), PathSpec::Literal("foo".into()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSpec {
    /// A path that is normalized and passed through untouched.
    Literal(String),

    /// A directory that is walked recursively.
    Recursive {
        /// The directory named before the marker (`.` for a bare marker).
        root: String,
    },
}

impl PathSpec {
    /// Classify a raw spec string.
    ///
    /// A spec is recursive when it is exactly `...` or ends with a separator
    /// followed by `...`. Something like `foo...` stays literal.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let Some(prefix) = raw.strip_suffix(RECURSIVE_MARKER) else {
            return Self::Literal(raw.to_string());
        };

        if prefix.is_empty() {
            return Self::Recursive {
                root: ".".to_string(),
            };
        }

        if !prefix.ends_with(is_separator) {
            return Self::Literal(raw.to_string());
        }

        let trimmed = prefix.trim_end_matches(is_separator);
        let root = if trimmed.is_empty() {
            // `/...` walks the filesystem root
            prefix[..1].to_string()
        } else {
            trimmed.to_string()
        };

        Self::Recursive { root }
    }

    /// Returns true if this spec requests recursive expansion.
    #[must_use]
    pub fn is_recursive(&self) -> bool {
        matches!(self, Self::Recursive { .. })
    }
}

fn is_separator(c: char) -> bool {
    c == '/' || c == MAIN_SEPARATOR
}

/// A position below a walk root, stored as an ordered list of segments.
///
/// Segments are always rendered joined with `/`, independent of platform, so
/// skip entries written with forward slashes match on every OS. The empty
/// path (the walk root itself) renders as `.`.
///
/// # Examples
///
/// ```
/// use pkgpaths::path::RelativePath;
///
/// let path = RelativePath::parse("./include/foo/");
/// assert_eq!(path.segments(), ["include", "foo"]);
/// assert_eq!(path.file_name(), Some("foo"));
/// assert_eq!(path.to_string(), "include/foo");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RelativePath {
    segments: Vec<String>,
}

impl RelativePath {
    /// The empty path, i.e. the walk root.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Split a string on `/` (and the platform separator).
    ///
    /// Empty and `.` segments are dropped; `..` is kept verbatim.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        let segments = s
            .split(is_separator)
            .filter(|seg| !seg.is_empty() && *seg != ".")
            .map(str::to_string)
            .collect();
        Self { segments }
    }

    /// Build from a filesystem path relative to a walk root.
    ///
    /// Root, prefix and `.` components are ignored. Returns `None` if any
    /// component is not valid UTF-8, since such a name cannot be spelled in
    /// the output without changing it.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let segments = path
            .components()
            .filter_map(|component| match component {
                Component::Normal(name) => Some(name.to_str().map(str::to_string)),
                Component::ParentDir => Some(Some("..".to_string())),
                _ => None,
            })
            .collect::<Option<Vec<_>>>()?;
        Some(Self { segments })
    }

    /// Returns `self` followed by every segment of `other`.
    #[must_use]
    pub fn concat(&self, other: &Self) -> Self {
        let mut segments = self.segments.clone();
        segments.extend(other.segments.iter().cloned());
        Self { segments }
    }

    /// Returns a new path with `segment` appended.
    #[must_use]
    pub fn join(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.into());
        Self { segments }
    }

    /// The path with its last segment removed; `None` for the root.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        let (_, rest) = self.segments.split_last()?;
        Some(Self {
            segments: rest.to_vec(),
        })
    }

    /// The final segment, if any.
    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// All segments in order.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of segments below the root.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// True for the walk root.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            write!(f, ".")
        } else {
            write!(f, "{}", self.segments.join("/"))
        }
    }
}
