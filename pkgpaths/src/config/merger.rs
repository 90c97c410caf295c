//! Configuration merging and precedence handling.
//!
//! Scalar fields are overwritten by higher-precedence sources. The skip list
//! accumulates across sources, keeping the first occurrence of each entry.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use pkgpaths::config::{Config, ConfigMerger};
///
/// let mut result = Config { skip: Some(vec!["vendor".into()]), ..Default::default() };
/// let high = Config { skip: Some(vec!["gen".into()]), ..Default::default() };
///
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.skip_list(), ["vendor", "gen"]);
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge sources ordered from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge `source` into `target`; `source` wins on scalar fields.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if let Some(ref skip) = source.skip {
            let merged = target.skip.get_or_insert_with(Vec::new);
            for entry in skip {
                if !merged.contains(entry) {
                    merged.push(entry.clone());
                }
            }
        }

        if source.source_extensions.is_some() {
            target.source_extensions.clone_from(&source.source_extensions);
        }

        if source.order.is_some() {
            target.order = source.order;
        }

        if source.require_source_files.is_some() {
            target.require_source_files = source.require_source_files;
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }
    }
}
