//! Configuration system for pkgpaths.
//!
//! Settings come from YAML files and `PKGPATHS_*` environment variables,
//! merged with the following precedence (highest first):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables
//! 3. Private project config (`pkgpaths.local.yaml`)
//! 4. Project config (`pkgpaths.yaml`, nearest ancestor of the base directory)
//! 5. User config (`~/.pkgpaths/config.yaml`)
//! 6. Built-in defaults
//!
//! Skip lists accumulate across all layers; other fields are replaced.
//!
//! # Examples
//!
//! ```no_run
//! use pkgpaths::config::ConfigBuilder;
//! use pkgpaths::path::{PathFilter, PathResolver};
//! use std::path::Path;
//!
//! let base = Path::new("/path/to/workspace");
//! let config = ConfigBuilder::new().with_base_dir(base).build().unwrap();
//!
//! let resolver = PathResolver::from_config(base, &config);
//! let filter = PathFilter::new(config.skip_list());
//! let dirs = resolver.resolve(&["./..."], &filter).unwrap();
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{default_config_dir, ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, OutputFormat};
pub use validator::ConfigValidator;
