//! Resolution of path specs into the final directory list.
//!
//! Literal specs are normalized and passed through. Recursive specs walk the
//! named directory depth-first in lexical order, pruning every subtree the
//! [`PathFilter`] excludes. All results are merged with deduplication on
//! their canonical form.

use std::collections::HashSet;
use std::ffi::OsStr;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::path::filter::PathFilter;
use crate::path::normalize::normalize;
use crate::path::types::{PathSpec, RelativePath};

/// Source file extensions used when none are configured.
pub const DEFAULT_SOURCE_EXTENSIONS: &[&str] = &["go"];

/// Ordering of the resolved list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputOrder {
    /// Byte-wise order of the canonical paths, so `.` always leads.
    #[default]
    Sorted,
    /// Order in which each path was first produced.
    Discovery,
}

impl OutputOrder {
    /// Parses an order name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error for anything other than `sorted` or `discovery`.
    pub fn parse(s: &str) -> std::result::Result<Self, String> {
        match s.to_lowercase().as_str() {
            "sorted" => Ok(Self::Sorted),
            "discovery" => Ok(Self::Discovery),
            _ => Err(format!("invalid output order: {s}")),
        }
    }
}

/// Turns path specs into canonical, deduplicated directory lists.
///
/// Relative specs and walk roots are resolved against an explicit base
/// directory; the process working directory is never consulted.
///
/// # Examples
///
/// ```no_run
/// use pkgpaths::path::{PathFilter, PathResolver};
///
/// let resolver = PathResolver::new("/path/to/workspace");
/// let filter = PathFilter::new(["testdata"]);
/// let paths = resolver.resolve(&["./...", "cmd/tool"], &filter).unwrap();
/// assert_eq!(paths[0], ".");
/// ```
#[derive(Debug, Clone)]
pub struct PathResolver {
    base_dir: PathBuf,
    order: OutputOrder,
    require_source_files: bool,
    source_extensions: Vec<String>,
}

impl PathResolver {
    /// Create a resolver rooted at `base_dir` with default settings.
    ///
    /// Defaults: sorted output, descendants must contain a `.go` file.
    #[must_use]
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            order: OutputOrder::default(),
            require_source_files: true,
            source_extensions: DEFAULT_SOURCE_EXTENSIONS
                .iter()
                .map(|ext| (*ext).to_string())
                .collect(),
        }
    }

    /// Create a resolver whose options come from a merged configuration.
    #[must_use]
    pub fn from_config(base_dir: impl Into<PathBuf>, config: &Config) -> Self {
        let mut resolver = Self::new(base_dir);
        if let Some(order) = config.order {
            resolver.order = order;
        }
        if let Some(require) = config.require_source_files {
            resolver.require_source_files = require;
        }
        if let Some(ref extensions) = config.source_extensions {
            resolver.source_extensions.clone_from(extensions);
        }
        resolver
    }

    /// Set the output ordering.
    #[must_use]
    pub fn with_order(mut self, order: OutputOrder) -> Self {
        self.order = order;
        self
    }

    /// Require expanded subdirectories to directly hold a source file.
    ///
    /// When disabled every visited, non-pruned directory is emitted.
    #[must_use]
    pub fn with_source_files_required(mut self, require: bool) -> Self {
        self.require_source_files = require;
        self
    }

    /// Replace the source file extensions (without leading dot).
    #[must_use]
    pub fn with_source_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.source_extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// The directory relative specs are resolved against.
    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// The configured output ordering.
    #[must_use]
    pub fn order(&self) -> OutputOrder {
        self.order
    }

    /// Resolve specs into the final directory list.
    ///
    /// An empty spec list resolves to `["."]`.
    ///
    /// # Errors
    ///
    /// Fails on the first recursive spec whose root is missing, is not a
    /// directory, or contains a directory that cannot be read. No partial
    /// result is returned.
    pub fn resolve<S: AsRef<str>>(&self, specs: &[S], filter: &PathFilter) -> Result<Vec<String>> {
        if specs.is_empty() {
            return Ok(vec![".".to_string()]);
        }

        let mut seen = HashSet::new();
        let mut resolved = Vec::new();

        for raw in specs {
            let raw = raw.as_ref();
            match PathSpec::parse(raw) {
                PathSpec::Literal(path) => {
                    push_unique(&mut resolved, &mut seen, normalize(&path));
                }
                PathSpec::Recursive { root } => {
                    for path in self.expand(raw, &root, filter)? {
                        push_unique(&mut resolved, &mut seen, normalize(&path));
                    }
                }
            }
        }

        if self.order == OutputOrder::Sorted {
            resolved.sort();
        }

        Ok(resolved)
    }

    /// Walk `root` and return the directories to emit, in discovery order.
    ///
    /// Returned paths are spelled relative to how `root` was written, not
    /// yet normalized.
    ///
    /// # Errors
    ///
    /// See [`PathResolver::resolve`].
    pub fn expand(&self, spec: &str, root: &str, filter: &PathFilter) -> Result<Vec<String>> {
        let root_path = self.base_dir.join(root);
        log::debug!("expanding '{spec}' from {}", root_path.display());

        match fs::metadata(&root_path) {
            Ok(metadata) if metadata.is_dir() => {}
            Ok(_) => {
                return Err(Error::NotADirectory {
                    spec: spec.to_string(),
                    path: root_path,
                })
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(Error::PathNotFound {
                    spec: spec.to_string(),
                    path: root_path,
                })
            }
            // Anything else is reported by the walk with full context
            Err(_) => {}
        }

        // Skip entries see the walk position spelled from the root as written
        let root_segments = RelativePath::parse(root);
        let walker = WalkDir::new(&root_path)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                if entry.depth() == 0 {
                    return true;
                }
                let Some(relative) = relative_to(&root_path, entry.path()) else {
                    // Non-UTF-8 names can only match the hidden/private rule
                    return !starts_hidden_or_private(entry.file_name());
                };
                let position = root_segments.concat(&relative);
                let excluded = filter.is_excluded_path(&position);
                if excluded {
                    log::trace!("pruned {position}");
                }
                !excluded
            });

        let mut directories = Vec::new();
        let mut with_sources = HashSet::new();

        for entry in walker {
            let entry = entry.map_err(|source| Error::Walk {
                spec: spec.to_string(),
                path: source
                    .path()
                    .map_or_else(|| root_path.clone(), Path::to_path_buf),
                source,
            })?;

            let file_type = entry.file_type();
            if file_type.is_dir() {
                let relative = relative_to(&root_path, entry.path()).ok_or_else(|| {
                    Error::InvalidPath {
                        path: entry.path().to_path_buf(),
                        reason: format!("cannot expand '{spec}': name is not valid UTF-8"),
                    }
                })?;
                directories.push(relative);
            } else if file_type.is_file() && self.is_source_file(entry.file_name()) {
                // The parent was visited first, so its name is known to be valid
                let parent = entry
                    .path()
                    .parent()
                    .and_then(|dir| relative_to(&root_path, dir));
                if let Some(parent) = parent {
                    with_sources.insert(parent);
                }
            }
        }

        let emitted: Vec<String> = directories
            .into_iter()
            .filter(|dir| {
                dir.is_root() || !self.require_source_files || with_sources.contains(dir)
            })
            .map(|dir| join_root(root, &dir))
            .collect();

        log::debug!("'{spec}' expanded to {} directories", emitted.len());
        Ok(emitted)
    }

    fn is_source_file(&self, name: &OsStr) -> bool {
        Path::new(name)
            .extension()
            .and_then(OsStr::to_str)
            .is_some_and(|ext| self.source_extensions.iter().any(|e| e == ext))
    }
}

/// Resolve specs against `base_dir` with default options.
///
/// # Errors
///
/// See [`PathResolver::resolve`].
///
/// # Examples
///
/// ```
/// use pkgpaths::resolve_paths;
/// use std::path::Path;
///
/// let paths = resolve_paths(Path::new("."), &[".", "foo", "foo/bar"], &["foo/bar"]).unwrap();
/// assert_eq!(paths, [".", "./foo", "./foo/bar"]);
///
/// let paths = resolve_paths(Path::new("."), &[] as &[&str], &[] as &[&str]).unwrap();
/// assert_eq!(paths, ["."]);
/// ```
pub fn resolve_paths<S, K>(base_dir: &Path, specs: &[S], skip: &[K]) -> Result<Vec<String>>
where
    S: AsRef<str>,
    K: AsRef<str>,
{
    PathResolver::new(base_dir).resolve(specs, &PathFilter::new(skip))
}

fn push_unique(resolved: &mut Vec<String>, seen: &mut HashSet<String>, path: String) {
    if seen.insert(path.clone()) {
        resolved.push(path);
    }
}

/// Position of `path` below `root`; `None` when a name is not valid UTF-8.
fn relative_to(root: &Path, path: &Path) -> Option<RelativePath> {
    match path.strip_prefix(root) {
        Ok(rest) => RelativePath::from_path(rest),
        Err(_) => Some(RelativePath::new()),
    }
}

fn starts_hidden_or_private(name: &OsStr) -> bool {
    matches!(name.as_encoded_bytes().first(), Some(b'.' | b'_'))
}

/// Spell a walk position the way the root was written.
fn join_root(root: &str, dir: &RelativePath) -> String {
    if dir.is_root() {
        return root.to_string();
    }
    if root == "." {
        return dir.to_string();
    }
    let trimmed = root.trim_end_matches(['/', std::path::MAIN_SEPARATOR]);
    format!("{trimmed}/{dir}")
}
