//! Environment variable overrides.
//!
//! Recognized variables:
//! - `PKGPATHS_SKIP`: comma-separated entries, appended to the skip list
//! - `PKGPATHS_SOURCE_EXTENSIONS`: comma-separated, replaces the list
//! - `PKGPATHS_ORDER`: `sorted` or `discovery`
//! - `PKGPATHS_REQUIRE_SOURCE_FILES`: boolean

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::path::OutputOrder;
use std::env;

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use pkgpaths::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply `PKGPATHS_*` overrides to `config`.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the variable when a value cannot be
    /// parsed.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(skip) = env::var("PKGPATHS_SKIP") {
            let entries = Self::parse_list(&skip);
            match &mut config.skip {
                Some(existing) => existing.extend(entries),
                None => config.skip = Some(entries),
            }
        }

        if let Ok(extensions) = env::var("PKGPATHS_SOURCE_EXTENSIONS") {
            config.source_extensions = Some(Self::parse_list(&extensions));
        }

        if let Ok(order) = env::var("PKGPATHS_ORDER") {
            config.order = Some(OutputOrder::parse(&order).map_err(|message| {
                Error::Validation {
                    field: "PKGPATHS_ORDER".into(),
                    message,
                }
            })?);
        }

        if let Ok(val) = env::var("PKGPATHS_REQUIRE_SOURCE_FILES") {
            config.require_source_files =
                Some(Self::parse_bool("PKGPATHS_REQUIRE_SOURCE_FILES", &val)?);
        }

        Ok(())
    }

    /// Split a comma-separated list, trimming and dropping empty items.
    fn parse_list(value: &str) -> Vec<String> {
        value
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Parse a boolean value from an environment variable.
    ///
    /// Accepts: true/false, 1/0, yes/no, on/off (case-insensitive).
    fn parse_bool(field: &str, value: &str) -> Result<bool> {
        match value.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!("Invalid boolean value: {value}"),
            }),
        }
    }
}
