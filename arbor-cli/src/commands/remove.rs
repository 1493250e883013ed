//! Command to detach a node from a tree document.

use crate::error::CliError;
use crate::utils::{emit_tree, pick_existing, read_tree, GlobalOptions};
use arbor::Config;
use clap::Args;
use std::path::PathBuf;

/// Detach the node at a path.
#[derive(Args)]
pub struct RemoveCommand {
    /// Tree document
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Path of the node to remove, or a JSON array of keys
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Rewrite FILE instead of printing the result
    #[arg(long)]
    pub write: bool,
}

impl RemoveCommand {
    pub fn execute(self, _global: &GlobalOptions, config: &Config) -> Result<(), CliError> {
        let root = read_tree(&self.file)?;
        let node = pick_existing(&root, &self.path)?;
        if node == root {
            return Err(CliError::InvalidArguments(
                "cannot remove the document root".to_string(),
            ));
        }

        let removed = node.detach();
        log::debug!("removed {} node(s)", removed.descendants().len() + 1);

        emit_tree(&root, config, &self.file, self.write)
    }
}
