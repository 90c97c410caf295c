#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pkgpaths
//!
//! A library for resolving package path specifications into the directory
//! lists that build and lint tools operate on.
//!
//! ## Core Types
//!
//! - [`PathResolver`]: expands `dir/...` specs and normalizes everything else
//! - [`PathFilter`]: prunes hidden, private and skip-listed entries
//! - [`Config`] and [`ConfigBuilder`]: layered YAML/environment settings
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use pkgpaths::{PathFilter, PathResolver};
//!
//! // Literal specs never touch the filesystem
//! let resolver = PathResolver::new("/any/base");
//! let filter = PathFilter::new(["vendor"]);
//! let paths = resolver.resolve(&[".", "cmd/tool", "/abs/pkg"], &filter).unwrap();
//! assert_eq!(paths, [".", "./cmd/tool", "/abs/pkg"]);
//!
//! assert!(filter.is_excluded("third_party/vendor"));
//! assert!(filter.is_excluded(".git"));
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod path;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder, OutputFormat};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{
    normalize, resolve_paths, OutputOrder, PathFilter, PathResolver, PathSpec, RelativePath,
};
