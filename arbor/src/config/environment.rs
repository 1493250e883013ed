//! Environment variable handling for configuration overrides.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::tree::CollisionPolicy;
use std::env;

/// Collision policy for `flatten`.
pub const ENV_FLATTEN_ON_COLLISION: &str = "ARBOR_FLATTEN_ON_COLLISION";
/// Pretty-printing switch for JSON output.
pub const ENV_JSON_PRETTY: &str = "ARBOR_JSON_PRETTY";
/// Indentation width for JSON output.
pub const ENV_JSON_INDENT: &str = "ARBOR_JSON_INDENT";
/// Log level name.
pub const ENV_LOG_MODE: &str = "ARBOR_LOG_MODE";

/// Handles `ARBOR_*` environment variable overrides.
///
/// # Examples
///
/// ```no_run
/// use arbor::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to `config`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the variable if a value cannot
    /// be parsed.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(val) = env::var(ENV_FLATTEN_ON_COLLISION) {
            let policy = CollisionPolicy::parse(&val).map_err(|message| Error::Validation {
                field: ENV_FLATTEN_ON_COLLISION.into(),
                message,
            })?;
            config.flatten.get_or_insert_with(Default::default).on_collision = Some(policy);
        }

        if let Ok(val) = env::var(ENV_JSON_PRETTY) {
            config.json.get_or_insert_with(Default::default).pretty =
                Some(Self::parse_bool(ENV_JSON_PRETTY, &val)?);
        }

        if let Ok(val) = env::var(ENV_JSON_INDENT) {
            let indent = val.trim().parse().map_err(|_| Error::Validation {
                field: ENV_JSON_INDENT.into(),
                message: format!("Must be a non-negative integer, got '{val}'"),
            })?;
            config.json.get_or_insert_with(Default::default).indent = Some(indent);
        }

        if let Ok(val) = env::var(ENV_LOG_MODE) {
            config.log_mode = Some(val);
        }

        Ok(())
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
