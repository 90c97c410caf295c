//! Path spec resolution.
//!
//! This module turns the path arguments of build and lint tools into the
//! list of directories those tools should operate on.
//!
//! # Key Concepts
//!
//! ## Specs
//!
//! A spec is either literal (`foo`, `./foo`, `/abs`, `.`) or recursive
//! (`foo/...`, `...`). Literal specs are normalized and kept even if they do
//! not exist or would be excluded. Recursive specs walk the named directory.
//!
//! ## Filtering
//!
//! During a walk, hidden (`.git`), private (`_build`) and skip-listed
//! entries are pruned together with everything below them.
//!
//! ## Canonical form
//!
//! Output paths are `.`, `..`, absolute, or start with `./`.
//!
//! # Examples
//!
//! ```no_run
//! use pkgpaths::path::{PathFilter, PathResolver};
//!
//! let resolver = PathResolver::new("/path/to/workspace");
//! let filter = PathFilter::new(["vendor", "testdata"]);
//!
//! for dir in resolver.resolve(&["./...", "tools"], &filter).unwrap() {
//!     println!("{dir}");
//! }
//! ```

pub mod filter;
pub mod normalize;
pub mod resolver;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use filter::PathFilter;
pub use normalize::normalize;
pub use resolver::{resolve_paths, OutputOrder, PathResolver, DEFAULT_SOURCE_EXTENSIONS};
pub use types::{PathSpec, RelativePath, RECURSIVE_MARKER};
