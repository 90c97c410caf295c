//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

use crate::path::OutputOrder;

/// Complete configuration structure.
///
/// Every field is optional so that partial files can be layered on top of
/// each other.
///
/// # Examples
///
/// ```
/// use pkgpaths::config::Config;
/// use pkgpaths::path::OutputOrder;
///
/// let config: Config = serde_yaml::from_str(
///     "skip: [vendor, testdata]\norder: discovery\n",
/// ).unwrap();
/// assert_eq!(config.skip_list(), ["vendor", "testdata"]);
/// assert_eq!(config.order, Some(OutputOrder::Discovery));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory names, file names, or relative paths pruned from walks.
    pub skip: Option<Vec<String>>,

    /// Extensions (without leading dot) that mark a directory as a package.
    pub source_extensions: Option<Vec<String>>,

    /// Ordering of the resolved list.
    pub order: Option<OutputOrder>,

    /// Only emit expanded subdirectories that directly hold a source file.
    pub require_source_files: Option<bool>,

    /// Output format for the CLI.
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// The skip list, empty when unset.
    #[must_use]
    pub fn skip_list(&self) -> &[String] {
        self.skip.as_deref().unwrap_or_default()
    }
}

/// Output format for resolved paths.
///
/// # Examples
///
/// ```
/// use pkgpaths::config::OutputFormat;
///
/// assert_eq!(OutputFormat::Json.to_string(), "json");
/// assert_eq!(OutputFormat::default(), OutputFormat::Text);
/// ```
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One path per line.
    #[default]
    Text,
    /// A JSON array.
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}
