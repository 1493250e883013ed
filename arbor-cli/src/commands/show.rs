//! Command to print a tree document or one of its subtrees.

use crate::error::CliError;
use crate::utils::{pick_existing, read_tree, GlobalOptions};
use arbor::Config;
use clap::Args;
use std::path::PathBuf;

/// Print a tree or subtree as JSON.
#[derive(Args)]
pub struct ShowCommand {
    /// Tree document
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Only print the subtree at this path
    #[arg(long, value_name = "PATH")]
    pub path: Option<String>,
}

impl ShowCommand {
    pub fn execute(self, _global: &GlobalOptions, config: &Config) -> Result<(), CliError> {
        let root = read_tree(&self.file)?;
        let node = match self.path {
            Some(ref path) => pick_existing(&root, path)?,
            None => root,
        };

        println!("{}", node.to_json_string_with(&config.json())?);
        Ok(())
    }
}
