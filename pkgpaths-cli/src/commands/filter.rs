//! Filter command implementation.
//!
//! Reports, for each name or relative path, whether the skip rules would
//! prune it from a recursive walk.

use crate::commands::resolve::FormatArg;
use crate::error::CliError;
use crate::utils::{load_configuration, non_empty, resolve_base_dir, GlobalOptions};
use clap::Args;
use pkgpaths::{Config, OutputFormat, PathFilter};
use serde::Serialize;
use std::io::Write;

/// Show which names the skip rules exclude.
#[derive(Args)]
pub struct FilterCommand {
    /// Names or paths as a walk would spell them
    #[arg(value_name = "NAME", required = true)]
    pub names: Vec<String>,

    /// Additional skip entry (repeatable)
    #[arg(long = "skip", value_name = "NAME")]
    pub skip: Vec<String>,

    /// Exit with status 1 if any name is excluded
    #[arg(long)]
    pub fail_on_excluded: bool,

    /// Output format
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<FormatArg>,
}

/// Verdict for a single name.
#[derive(Debug, Serialize)]
struct Verdict<'a> {
    name: &'a str,
    excluded: bool,
}

impl FilterCommand {
    /// Execute the filter command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let base_dir = resolve_base_dir(global)?;
        let overrides = Config {
            skip: non_empty(self.skip),
            output_format: self.format.map(Into::into),
            ..Default::default()
        };
        let config = load_configuration(global, &base_dir, overrides)?;

        let filter = PathFilter::new(config.skip_list());
        let verdicts: Vec<Verdict<'_>> = self
            .names
            .iter()
            .map(|name| Verdict {
                name,
                excluded: filter.is_excluded(name),
            })
            .collect();

        let mut stdout = std::io::stdout().lock();
        match config.output_format.unwrap_or_default() {
            OutputFormat::Text => {
                for verdict in &verdicts {
                    let label = if verdict.excluded {
                        "excluded"
                    } else {
                        "included"
                    };
                    writeln!(stdout, "{}\t{label}", verdict.name)?;
                }
            }
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut stdout, &verdicts)?;
                writeln!(stdout)?;
            }
        }

        let excluded = verdicts.iter().filter(|v| v.excluded).count();
        if self.fail_on_excluded && excluded > 0 {
            return Err(CliError::SemanticFailure(format!(
                "{excluded} of {} name(s) excluded",
                verdicts.len()
            )));
        }

        Ok(())
    }
}
