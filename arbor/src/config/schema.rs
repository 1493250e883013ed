//! Configuration schema definitions.
//!
//! Every field is optional so that partial files can be layered on top of
//! each other; the resolved accessors on [`Config`] supply the defaults.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::logging::LogLevel;
use crate::tree::CollisionPolicy;

/// Default number of spaces per indentation level in pretty JSON output.
pub const DEFAULT_JSON_INDENT: usize = 2;

/// Largest accepted JSON indentation.
pub const MAX_JSON_INDENT: usize = 16;

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use arbor::config::{Config, JsonConfig};
///
/// let config = Config {
///     json: Some(JsonConfig {
///         pretty: Some(false),
///         indent: None,
///     }),
///     ..Default::default()
/// };
/// assert!(!config.pretty());
/// assert_eq!(config.indent(), 2);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Flatten behaviour.
    pub flatten: Option<FlattenConfig>,

    /// JSON output settings.
    pub json: Option<JsonConfig>,

    /// Node creation settings.
    pub create: Option<CreateConfig>,

    /// Log level name (`quiet`, `normal` or `verbose`).
    pub log_mode: Option<String>,
}

/// Flatten settings.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FlattenConfig {
    /// What to do when two nodes flatten to the same key.
    pub on_collision: Option<CollisionPolicy>,
}

/// JSON output settings.
///
/// # Examples
///
/// ```
/// use arbor::config::JsonConfig;
///
/// let json = JsonConfig::default();
/// assert!(json.pretty());
/// assert_eq!(json.indent(), 2);
/// ```
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct JsonConfig {
    /// Pretty-print output.
    pub pretty: Option<bool>,

    /// Spaces per indentation level when pretty-printing.
    pub indent: Option<usize>,
}

impl JsonConfig {
    /// Whether output is pretty-printed (default `true`).
    #[must_use]
    pub fn pretty(&self) -> bool {
        self.pretty.unwrap_or(true)
    }

    /// Indentation width (default [`DEFAULT_JSON_INDENT`]).
    #[must_use]
    pub fn indent(&self) -> usize {
        self.indent.unwrap_or(DEFAULT_JSON_INDENT)
    }
}

/// Settings for nodes created implicitly along a path.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CreateConfig {
    /// Value given to synthesized intermediate nodes.
    pub default_value: Option<Value>,
}

impl Config {
    /// The resolved flatten collision policy.
    #[must_use]
    pub fn collision_policy(&self) -> CollisionPolicy {
        self.flatten
            .and_then(|flatten| flatten.on_collision)
            .unwrap_or_default()
    }

    /// The resolved JSON settings.
    #[must_use]
    pub fn json(&self) -> JsonConfig {
        self.json.unwrap_or_default()
    }

    /// Whether JSON output is pretty-printed.
    #[must_use]
    pub fn pretty(&self) -> bool {
        self.json().pretty()
    }

    /// JSON indentation width.
    #[must_use]
    pub fn indent(&self) -> usize {
        self.json().indent()
    }

    /// Value for synthesized intermediate nodes (default `null`).
    #[must_use]
    pub fn default_value(&self) -> Value {
        self.create
            .as_ref()
            .and_then(|create| create.default_value.clone())
            .unwrap_or(Value::Null)
    }

    /// The configured log level, if any and if it parses.
    #[must_use]
    pub fn log_level(&self) -> Option<LogLevel> {
        self.log_mode
            .as_deref()
            .and_then(|mode| LogLevel::parse(mode).ok())
    }
}
