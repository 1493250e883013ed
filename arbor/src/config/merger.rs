//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::{Config, CreateConfig, FlattenConfig, JsonConfig};

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use arbor::config::{Config, ConfigMerger};
///
/// let low = Config { log_mode: Some("quiet".to_string()), ..Default::default() };
/// let high = Config { log_mode: Some("verbose".to_string()), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.log_mode, Some("verbose".to_string()));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge sources, given from lowest to highest precedence, into one
    /// configuration.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge `source` into `target`; every field set in `source` wins.
    ///
    /// Nested sections merge field by field.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.log_mode.is_some() {
            target.log_mode.clone_from(&source.log_mode);
        }

        if let Some(source_flatten) = source.flatten {
            target.flatten = Some(match target.flatten {
                Some(target_flatten) => FlattenConfig {
                    on_collision: source_flatten.on_collision.or(target_flatten.on_collision),
                },
                None => source_flatten,
            });
        }

        if let Some(source_json) = source.json {
            target.json = Some(match target.json {
                Some(target_json) => Self::merge_json(target_json, source_json),
                None => source_json,
            });
        }

        if let Some(ref source_create) = source.create {
            target.create = Some(match target.create.take() {
                Some(target_create) => CreateConfig {
                    default_value: source_create
                        .default_value
                        .clone()
                        .or(target_create.default_value),
                },
                None => source_create.clone(),
            });
        }
    }

    fn merge_json(target: JsonConfig, source: JsonConfig) -> JsonConfig {
        JsonConfig {
            pretty: source.pretty.or(target.pretty),
            indent: source.indent.or(target.indent),
        }
    }
}
