//! CLI structure and command definitions.

use crate::commands::{CompletionsCommand, FilterCommand, ResolveCommand, ValidateCommand};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Resolve package path specifications into directory lists.
#[derive(Parser)]
#[command(name = "pkgpaths")]
#[command(
    version,
    about = "Resolve package path specifications into filtered directory lists",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Directory relative specs are resolved against (defaults to the current directory)
    #[arg(long, value_name = "PATH", global = true, env = "PKGPATHS_BASE_DIR")]
    pub base_dir: Option<PathBuf>,

    /// Read the user configuration from this directory instead of ~/.pkgpaths
    #[arg(long, value_name = "PATH", global = true, env = "PKGPATHS_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Expand path specs into the list of package directories
    Resolve(ResolveCommand),

    /// Show which names the skip rules exclude
    Filter(FilterCommand),

    /// Validate a configuration file
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
