//! CLI structure and command definitions.

use crate::commands::{
    CompletionsCommand, FlattenCommand, MoveCommand, PutCommand, RemoveCommand, ShowCommand,
    ValidateCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Inspect and edit JSON tree documents.
#[derive(Parser)]
#[command(name = "arbor")]
#[command(version, about = "Inspect and edit JSON tree documents", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Read configuration from this file in addition to the discovered ones
    #[arg(long, value_name = "PATH", global = true, env = "ARBOR_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Print a tree or subtree as JSON
    Show(ShowCommand),

    /// List every node by its path
    Flatten(FlattenCommand),

    /// Set the value (and attributes) at a path, creating nodes as needed
    Put(PutCommand),

    /// Move the node at one path to another
    Move(MoveCommand),

    /// Detach the node at a path
    Remove(RemoveCommand),

    /// Check that a file is a well-formed tree document
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
