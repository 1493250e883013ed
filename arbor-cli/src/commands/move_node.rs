//! Command to move a node to another path.

use crate::error::CliError;
use crate::utils::{emit_tree, parse_path_arg, pick_existing, read_tree, GlobalOptions};
use arbor::Config;
use clap::Args;
use std::path::PathBuf;

/// Move the node at one path to another.
#[derive(Args)]
pub struct MoveCommand {
    /// Tree document
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Path of the node to move, or a JSON array of keys
    #[arg(value_name = "FROM")]
    pub from: String,

    /// Destination path or JSON array of keys; whatever is there is replaced
    #[arg(value_name = "TO")]
    pub to: String,

    /// Rewrite FILE instead of printing the result
    #[arg(long)]
    pub write: bool,
}

impl MoveCommand {
    pub fn execute(self, _global: &GlobalOptions, config: &Config) -> Result<(), CliError> {
        let root = read_tree(&self.file)?;
        let node = pick_existing(&root, &self.from)?;
        let to = parse_path_arg(&self.to)?;

        root.put_node_with(to, &node, &config.default_value())?;
        log::debug!("moved '{}' to '{}'", self.from, node.path());

        emit_tree(&root, config, &self.file, self.write)
    }
}
