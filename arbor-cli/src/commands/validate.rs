//! Command to validate a tree document.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use arbor::ValueNode;
use clap::Args;
use std::path::PathBuf;

/// Check that a file is a well-formed tree document.
#[derive(Args)]
pub struct ValidateCommand {
    /// Tree document
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

impl ValidateCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        if !self.file.exists() {
            return Err(CliError::InvalidArguments(format!(
                "File not found: {}",
                self.file.display()
            )));
        }

        let contents = std::fs::read_to_string(&self.file)?;
        match ValueNode::from_json_str(&contents) {
            Ok(root) => {
                println!("Document is valid ({} nodes)", root.descendants().len() + 1);
                Ok(())
            }
            Err(e) => {
                eprintln!("Validation error: {e}");
                Err(CliError::SemanticFailure(
                    "Document validation failed".to_string(),
                ))
            }
        }
    }
}
