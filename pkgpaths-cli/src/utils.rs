//! Utility functions shared by CLI commands.

use crate::error::CliError;
use pkgpaths::{Config, ConfigBuilder, Logger};
use std::env;
use std::path::{Path, PathBuf};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // verbose/quiet are carried for commands that print progress
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Directory relative specs are resolved against.
    pub base_dir: Option<PathBuf>,

    /// User configuration directory override.
    pub config_dir: Option<PathBuf>,

    /// Stderr logger configured from the verbosity flags.
    pub logger: Logger,
}

/// Resolve the base directory, using CWD if not specified.
///
/// Relative `--base-dir` values are taken relative to the current directory.
/// The result is not canonicalized, so symlinked workspaces keep their
/// spelling.
pub fn resolve_base_dir(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    let cwd = env::current_dir()?;
    let base = match global.base_dir {
        Some(ref dir) if dir.is_absolute() => dir.clone(),
        Some(ref dir) => cwd.join(dir),
        None => cwd,
    };

    if !base.is_dir() {
        return Err(CliError::InvalidArguments(format!(
            "base directory is not a directory: {}",
            base.display()
        )));
    }
    Ok(base)
}

/// Load hierarchical configuration for `base_dir`.
///
/// Precedence, highest first:
/// 1. Command-line overrides
/// 2. Environment variables
/// 3. Project configuration files
/// 4. User configuration file
/// 5. Built-in defaults
pub fn load_configuration(
    global: &GlobalOptions,
    base_dir: &Path,
    overrides: Config,
) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new()
        .with_base_dir(base_dir)
        .with_config(overrides);
    if let Some(ref dir) = global.config_dir {
        builder = builder.with_user_config_dir(dir);
    }

    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

/// Turn repeatable CLI values into an optional config list.
pub fn non_empty(values: Vec<String>) -> Option<Vec<String>> {
    if values.is_empty() {
        None
    } else {
        Some(values)
    }
}
