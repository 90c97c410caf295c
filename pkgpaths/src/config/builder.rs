//! Builder that assembles the effective configuration.

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::{ConfigLoader, ConfigSource};
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;

/// Builds a [`Config`] from files, environment and programmatic overrides.
///
/// # Examples
///
/// ```
/// use pkgpaths::config::{Config, ConfigBuilder};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config { skip: Some(vec!["vendor".into()]), ..Default::default() })
///     .build()
///     .unwrap();
/// assert_eq!(config.skip_list(), ["vendor"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    base_dir: Option<PathBuf>,
    user_config_dir: Option<PathBuf>,
    load_files: bool,
    load_env: bool,
    overrides: Vec<Config>,
}

impl ConfigBuilder {
    /// Create a builder that reads files and environment.
    #[must_use]
    pub fn new() -> Self {
        Self {
            load_files: true,
            load_env: true,
            ..Default::default()
        }
    }

    /// Directory from which project configuration is discovered.
    ///
    /// Without it no project files are read.
    #[must_use]
    pub fn with_base_dir(mut self, dir: &Path) -> Self {
        self.base_dir = Some(dir.to_path_buf());
        self
    }

    /// Read the user config from `dir/config.yaml` instead of `~/.pkgpaths`.
    #[must_use]
    pub fn with_user_config_dir(mut self, dir: &Path) -> Self {
        self.user_config_dir = Some(dir.to_path_buf());
        self
    }

    /// Do not read any configuration files.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.load_files = false;
        self
    }

    /// Do not apply `PKGPATHS_*` environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.load_env = false;
        self
    }

    /// Layer a programmatic config above every other source.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides.push(config);
        self
    }

    /// Load, merge and validate.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be parsed, an environment variable
    /// is malformed, or the merged result fails validation.
    pub fn build(self) -> Result<Config> {
        let sources = if self.load_files {
            self.load_sources()?
        } else {
            Vec::new()
        };

        for source in &sources {
            log::debug!("loaded configuration from {}", source.path.display());
        }

        let mut config = ConfigMerger::merge(sources);

        if self.load_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        for layer in &self.overrides {
            ConfigMerger::merge_into(&mut config, layer);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }

    fn load_sources(&self) -> Result<Vec<ConfigSource>> {
        let user_dir = self.user_config_dir.as_deref();
        match self.base_dir {
            Some(ref base) => ConfigLoader::load_all(base, user_dir),
            None => Ok(ConfigLoader::load_user_config(user_dir)?.into_iter().collect()),
        }
    }
}
