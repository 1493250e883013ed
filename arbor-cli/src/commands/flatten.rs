//! Command to list every node of a tree by its path.

use crate::error::CliError;
use crate::utils::{pick_existing, read_tree, GlobalOptions};
use arbor::value::codec::render;
use arbor::Config;
use clap::{Args, ValueEnum};
use serde_json::{Map, Value};
use std::path::PathBuf;

/// Output layout for `flatten`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum FlattenFormat {
    /// One `/path<TAB>value` line per node
    #[default]
    Text,
    /// A JSON object from path to value
    Json,
}

/// List every node by its path.
#[derive(Args)]
pub struct FlattenCommand {
    /// Tree document
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Start from the subtree at this path
    #[arg(long, value_name = "PATH")]
    pub path: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = FlattenFormat::Text)]
    pub format: FlattenFormat,
}

impl FlattenCommand {
    pub fn execute(self, _global: &GlobalOptions, config: &Config) -> Result<(), CliError> {
        let root = read_tree(&self.file)?;
        let start = match self.path {
            Some(ref path) => pick_existing(&root, path)?,
            None => root,
        };

        let flat = start.flatten_with(config.collision_policy())?;

        match self.format {
            FlattenFormat::Text => {
                for (path, node) in &flat {
                    println!("/{path}\t{}", node.value());
                }
            }
            FlattenFormat::Json => {
                let object: Map<String, Value> = flat
                    .iter()
                    .map(|(path, node)| (path.clone(), node.value()))
                    .collect();
                println!("{}", render(&Value::Object(object), &config.json())?);
            }
        }
        Ok(())
    }
}
