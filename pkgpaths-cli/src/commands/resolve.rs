//! Resolve command implementation.
//!
//! Expands path specs (with `dir/...` recursion) against the base directory
//! and prints the canonical, deduplicated list.

use crate::error::CliError;
use crate::utils::{load_configuration, non_empty, resolve_base_dir, GlobalOptions};
use clap::{Args, ValueEnum};
use pkgpaths::{Config, OutputFormat, OutputOrder, PathFilter, PathResolver};
use std::io::Write;

/// Expand path specs into the list of package directories.
#[derive(Args)]
pub struct ResolveCommand {
    /// Path specs; `dir/...` expands to dir and its package subdirectories
    #[arg(value_name = "SPEC")]
    pub specs: Vec<String>,

    /// Skip a directory or file name, or a path as spelled from the base directory
    #[arg(long = "skip", value_name = "NAME")]
    pub skip: Vec<String>,

    /// Ordering of the output
    #[arg(long, value_enum, ignore_case = true)]
    pub order: Option<OrderArg>,

    /// Emit every non-skipped directory, not only those holding source files
    #[arg(long)]
    pub all_dirs: bool,

    /// Source file extension marking a package directory (repeatable)
    #[arg(long = "ext", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Output format
    #[arg(long, value_enum, ignore_case = true, env = "PKGPATHS_OUTPUT_FORMAT")]
    pub format: Option<FormatArg>,
}

/// Output ordering accepted on the command line.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OrderArg {
    /// Lexical order
    Sorted,
    /// Order of first appearance
    Discovery,
}

impl From<OrderArg> for OutputOrder {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Sorted => OutputOrder::Sorted,
            OrderArg::Discovery => OutputOrder::Discovery,
        }
    }
}

/// Output format accepted on the command line.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum FormatArg {
    /// One path per line
    Text,
    /// JSON array
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

impl ResolveCommand {
    /// Execute the resolve command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let base_dir = resolve_base_dir(global)?;
        global
            .logger
            .debug(&format!("base directory: {}", base_dir.display()));

        let overrides = Config {
            skip: non_empty(self.skip),
            source_extensions: non_empty(self.extensions),
            order: self.order.map(Into::into),
            require_source_files: self.all_dirs.then_some(false),
            output_format: self.format.map(Into::into),
        };
        let config = load_configuration(global, &base_dir, overrides)?;

        let resolver = PathResolver::from_config(&base_dir, &config);
        let filter = PathFilter::new(config.skip_list());
        let paths = resolver.resolve(&self.specs, &filter)?;

        global.logger.info(&format!(
            "resolved {} path(s) from {} spec(s)",
            paths.len(),
            self.specs.len()
        ));

        let mut stdout = std::io::stdout().lock();
        match config.output_format.unwrap_or_default() {
            OutputFormat::Text => {
                for path in &paths {
                    writeln!(stdout, "{path}")?;
                }
            }
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut stdout, &paths)?;
                writeln!(stdout)?;
            }
        }

        Ok(())
    }
}
