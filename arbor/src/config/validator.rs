//! Configuration validation.

use crate::config::schema::{Config, JsonConfig, MAX_JSON_INDENT};
use crate::error::{Error, Result};
use crate::logging::LogLevel;

/// Validates merged configuration.
///
/// # Examples
///
/// ```
/// use arbor::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref json) = config.json {
            Self::validate_json(json)?;
        }

        if let Some(ref mode) = config.log_mode {
            LogLevel::parse(mode).map_err(|message| Error::Validation {
                field: "log_mode".into(),
                message,
            })?;
        }

        Ok(())
    }

    fn validate_json(json: &JsonConfig) -> Result<()> {
        if let Some(indent) = json.indent {
            if indent > MAX_JSON_INDENT {
                return Err(Error::Validation {
                    field: "json.indent".into(),
                    message: format!("must be at most {MAX_JSON_INDENT}, got {indent}"),
                });
            }
        }

        Ok(())
    }
}
