//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use pkgpaths::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
///
/// let bad = Config { source_extensions: Some(vec![".go".into()]), ..Default::default() };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error for the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref skip) = config.skip {
            for entry in skip {
                Self::validate_skip_entry(entry)?;
            }
        }

        if let Some(ref extensions) = config.source_extensions {
            if extensions.is_empty() && config.require_source_files != Some(false) {
                return Err(Error::Validation {
                    field: "source_extensions".into(),
                    message: "at least one extension is required while require_source_files is enabled"
                        .into(),
                });
            }
            for ext in extensions {
                Self::validate_extension(ext)?;
            }
        }

        Ok(())
    }

    fn validate_skip_entry(entry: &str) -> Result<()> {
        if entry.trim().is_empty() {
            return Err(Error::Validation {
                field: "skip".into(),
                message: "entries must be non-empty".into(),
            });
        }
        if entry.contains('\0') {
            return Err(Error::Validation {
                field: "skip".into(),
                message: format!("entry {entry:?} contains a null byte"),
            });
        }
        Ok(())
    }

    fn validate_extension(ext: &str) -> Result<()> {
        let problem = if ext.is_empty() {
            Some("extensions must be non-empty")
        } else if ext.starts_with('.') {
            Some("extensions are written without the leading dot")
        } else if ext.contains(['/', '\\', '\0']) {
            Some("extensions cannot contain separators or null bytes")
        } else {
            None
        };

        match problem {
            Some(message) => Err(Error::Validation {
                field: "source_extensions".into(),
                message: format!("{message}: {ext:?}"),
            }),
            None => Ok(()),
        }
    }
}
