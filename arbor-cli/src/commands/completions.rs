//! Shell completion generation command.

use crate::cli::Cli;
use crate::error::CliError;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io;

const BIN_NAME: &str = "arbor";

/// Generate shell completion scripts
#[derive(Parser)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(&self) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        eprintln!("# Generating {} completion script", self.shell);
        match self.shell {
            Shell::Bash => {
                eprintln!("#   eval \"$(arbor completions bash)\"");
            }
            Shell::Zsh => {
                eprintln!("#   arbor completions zsh > ~/.zsh/completions/_arbor");
            }
            Shell::Fish => {
                eprintln!("#   arbor completions fish | source");
            }
            _ => {}
        }

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());
        Ok(())
    }
}
