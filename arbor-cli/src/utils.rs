//! Utility functions for CLI operations.
//!
//! Configuration loading, logger setup, and reading and writing tree
//! documents.

use crate::error::CliError;
use arbor::config::environment::ENV_LOG_MODE;
use arbor::{init_logger, Config, ConfigBuilder, Logger, TreePath, ValueNode};
use indexmap::IndexMap;
use serde_json::Value;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Explicit configuration file.
    pub config: Option<PathBuf>,
}

/// Load hierarchical configuration.
///
/// Files discovered from the working directory and the user's home are
/// layered under the `--config` file, then `ARBOR_*` variables.
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(ref path) = global.config {
        if !path.exists() {
            return Err(CliError::Config(format!(
                "configuration file not found: {}",
                path.display()
            )));
        }
        builder = builder.with_file(path);
    }

    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

/// Install the stderr logger.
///
/// CLI flags and `ARBOR_LOG_MODE` take precedence over the configured
/// `log_mode`.
pub fn init_logging(global: &GlobalOptions, config: &Config) {
    let logger = if global.verbose || global.quiet || env::var_os(ENV_LOG_MODE).is_some() {
        init_logger(global.verbose, global.quiet)
    } else {
        config.log_level().map_or_else(Logger::default, Logger::new)
    };

    if logger.install().is_err() {
        eprintln!("warning: a logger is already installed");
    }
}

/// Read and decode a tree document.
pub fn read_tree(file: &Path) -> Result<ValueNode, CliError> {
    let contents = fs::read_to_string(file)?;
    let root = ValueNode::from_json_str(&contents)?;
    log::debug!("read {} nodes from {}", root.descendants().len() + 1, file.display());
    Ok(root)
}

/// Parse a path argument.
///
/// A JSON array of strings is taken as pre-split keys, so keys containing `/`
/// can be addressed; anything else is a `/`-delimited path string.
pub fn parse_path_arg(raw: &str) -> Result<TreePath, CliError> {
    match serde_json::from_str::<Value>(raw) {
        Ok(keys @ Value::Array(_)) => Ok(TreePath::try_from(&keys)?),
        _ => Ok(TreePath::from(raw)),
    }
}

/// Resolve `path` under `root`, failing if nothing is there.
pub fn pick_existing(root: &ValueNode, path: &str) -> Result<ValueNode, CliError> {
    let path = parse_path_arg(path)?;
    root.pick(&path)
        .ok_or_else(|| CliError::SemanticFailure(format!("no node at path '{path}'")))
}

/// Print the tree to stdout, or rewrite `file` with it when `write` is set.
pub fn emit_tree(
    root: &ValueNode,
    config: &Config,
    file: &Path,
    write: bool,
) -> Result<(), CliError> {
    let rendered = root.to_json_string_with(&config.json())?;
    if write {
        fs::write(file, format!("{rendered}\n"))?;
        log::info!("wrote {}", file.display());
    } else {
        println!("{rendered}");
    }
    Ok(())
}

/// Interpret a command-line value as JSON, falling back to a plain string.
pub fn parse_value_arg(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// Parse a `--data` argument, which must be a JSON object.
pub fn parse_data_arg(raw: &str) -> Result<IndexMap<String, Value>, CliError> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => Ok(map.into_iter().collect()),
        Ok(_) => Err(CliError::InvalidArguments(
            "--data must be a JSON object".to_string(),
        )),
        Err(e) => Err(CliError::InvalidArguments(format!("--data is not valid JSON: {e}"))),
    }
}
