//! Command to set the value at a path.

use crate::error::CliError;
use crate::utils::{
    emit_tree, parse_data_arg, parse_path_arg, parse_value_arg, read_tree, GlobalOptions,
};
use arbor::Config;
use clap::Args;
use std::path::PathBuf;

/// Set the value (and attributes) at a path, creating nodes as needed.
#[derive(Args)]
pub struct PutCommand {
    /// Tree document
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Path of the node to write, or a JSON array of keys
    #[arg(value_name = "PATH")]
    pub path: String,

    /// New value; parsed as JSON, otherwise taken as a string
    #[arg(value_name = "VALUE")]
    pub value: String,

    /// Attributes to merge, as a JSON object
    #[arg(long, value_name = "JSON")]
    pub data: Option<String>,

    /// Rewrite FILE instead of printing the result
    #[arg(long)]
    pub write: bool,
}

impl PutCommand {
    pub fn execute(self, _global: &GlobalOptions, config: &Config) -> Result<(), CliError> {
        let data = self.data.as_deref().map(parse_data_arg).transpose()?;
        let value = parse_value_arg(&self.value);
        let path = parse_path_arg(&self.path)?;

        let root = read_tree(&self.file)?;
        let node = root.put_value_with(
            path,
            value,
            data,
            &config.default_value(),
        )?;
        log::debug!("put value at '{}'", node.path());

        emit_tree(&root, config, &self.file, self.write)
    }
}
