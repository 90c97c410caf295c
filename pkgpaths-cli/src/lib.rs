//! Library exports for pkgpaths-cli.
//!
//! Exposes the CLI structure so the build script and integration tests can
//! reach it.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
