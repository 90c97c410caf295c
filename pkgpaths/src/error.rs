//! Error types for the pkgpaths library.
//!
//! This module provides the error hierarchy for path resolution and
//! configuration loading, using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a pkgpaths error.
///
/// # Examples
///
/// ```
/// use pkgpaths::{Error, Result};
///
/// fn example_operation() -> Result<Vec<String>> {
///     Ok(vec![".".to_string()])
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the pkgpaths library.
#[derive(Debug, Error)]
pub enum Error {
    /// A directory could not be read while expanding a recursive spec.
    #[error("cannot expand '{spec}': failed to read {}: {source}", path.display())]
    Walk {
        /// The spec whose expansion failed.
        spec: String,
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying walk error.
        #[source]
        source: walkdir::Error,
    },

    /// The root of a recursive spec does not exist.
    #[error("cannot expand '{spec}': path not found: {}", path.display())]
    PathNotFound {
        /// The spec whose root is missing.
        spec: String,
        /// The missing path.
        path: PathBuf,
    },

    /// The root of a recursive spec exists but is not a directory.
    #[error("cannot expand '{spec}': not a directory: {}", path.display())]
    NotADirectory {
        /// The spec whose root is not a directory.
        spec: String,
        /// The offending path.
        path: PathBuf,
    },

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Check if error indicates a path does not exist.
    ///
    /// Walk failures count when the underlying I/O error is `NotFound`, which
    /// happens when a directory vanishes mid-walk.
    ///
    /// # Examples
    ///
    /// ```
    /// use pkgpaths::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::PathNotFound {
    ///     spec: "missing/...".to_string(),
    ///     path: PathBuf::from("missing"),
    /// };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::PathNotFound { .. } => true,
            Self::Walk { source, .. } => source
                .io_error()
                .is_some_and(|e| e.kind() == std::io::ErrorKind::NotFound),
            _ => false,
        }
    }

    /// Check if error is permission-related.
    ///
    /// Only walk failures carry an I/O cause, so only they can qualify.
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        match self {
            Self::Walk { source, .. } => source
                .io_error()
                .is_some_and(|e| e.kind() == std::io::ErrorKind::PermissionDenied),
            _ => false,
        }
    }
}
