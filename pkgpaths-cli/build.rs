//! Build script for pkgpaths-cli.
//!
//! Generates the `pkgpaths.1` man page into OUT_DIR with clap_mangen.
//!
//! Build scripts cannot depend on the crate being built, so the command
//! structure is declared here a second time.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep in sync with src/cli.rs and src/commands/.
fn build_cli() -> Command {
    Command::new("pkgpaths")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolve package path specifications into filtered directory lists")
        .long_about(
            "Expand package path specs such as ./... into canonical, deduplicated \
             directory lists, pruning hidden, underscore-prefixed and skipped entries",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("base-dir")
                .long("base-dir")
                .help("Directory relative specs are resolved against")
                .value_name("PATH")
                .global(true)
                .env("PKGPATHS_BASE_DIR"),
        )
        .arg(
            Arg::new("config-dir")
                .long("config-dir")
                .help("Read the user configuration from this directory")
                .value_name("PATH")
                .global(true)
                .env("PKGPATHS_CONFIG_DIR"),
        )
        .subcommands(vec![
            Command::new("resolve")
                .about("Expand path specs into the list of package directories")
                .long_about(
                    "Resolve literal and recursive (dir/...) specs into a sorted, \
                     deduplicated list of directories",
                ),
            Command::new("filter")
                .about("Show which names the skip rules exclude")
                .long_about("Report whether each name or relative path would be pruned from a walk"),
            Command::new("validate")
                .about("Validate a configuration file")
                .long_about("Check a pkgpaths configuration file for errors"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> std::io::Result<()> {
    let out_dir = PathBuf::from(std::env::var_os("OUT_DIR").ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "OUT_DIR is not set")
    })?);
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let mut buffer = Vec::new();
    Man::new(build_cli()).render(&mut buffer)?;
    fs::write(man_dir.join("pkgpaths.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
