//! Main entry point for the arbor CLI.
//!
//! Reads a JSON tree document, applies one command, and prints or rewrites
//! the result.

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::{Cli, Command};
use error::CliError;
use utils::{init_logging, load_configuration, GlobalOptions};

fn run(command: Command, global: &GlobalOptions) -> Result<(), CliError> {
    if let Command::Completions(ref cmd) = command {
        return cmd.execute();
    }

    let config = load_configuration(global)?;
    init_logging(global, &config);

    match command {
        Command::Show(cmd) => cmd.execute(global, &config),
        Command::Flatten(cmd) => cmd.execute(global, &config),
        Command::Put(cmd) => cmd.execute(global, &config),
        Command::Move(cmd) => cmd.execute(global, &config),
        Command::Remove(cmd) => cmd.execute(global, &config),
        Command::Validate(cmd) => cmd.execute(global),
        Command::Completions(cmd) => cmd.execute(),
    }
}

fn main() {
    let cli = Cli::parse();

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config: cli.config,
    };

    match run(cli.command, &global) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
