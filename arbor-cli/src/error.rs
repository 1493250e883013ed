//! CLI-specific error types with exit codes.
//!
//! Wraps library errors and maps every failure to a process exit code.

use arbor::Error as LibError;
use std::fmt;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),

    /// Invalid command-line arguments.
    InvalidArguments(String),

    /// I/O error.
    Io(std::io::Error),

    /// Configuration error.
    Config(String),

    /// Semantic failure (e.g., no node at the given path) - exit code 1.
    SemanticFailure(String),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: Semantic failure (missing path, cycle, empty path)
    /// - 4: Invalid arguments
    /// - 5: I/O error
    /// - 6: Other library error
    /// - 7: Configuration error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::SemanticFailure(_) => 1,
            CliError::Library(lib_err) => match lib_err {
                LibError::CircularReference { .. }
                | LibError::EmptyPathNotAllowed
                | LibError::NotAttached => 1,
                LibError::InvalidAttribute { .. } | LibError::InvalidPathArgument { .. } => 4,
                _ => 6,
            },
            CliError::InvalidArguments(_) => 4,
            CliError::Io(_) => 5,
            CliError::Config(_) => 7,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::InvalidArguments(msg) => write!(f, "Invalid arguments: {msg}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
            CliError::Config(msg) => write!(f, "Configuration error: {msg}"),
            CliError::SemanticFailure(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        match e {
            LibError::Io(io) => CliError::Io(io),
            LibError::Configuration(_) | LibError::Validation { .. } => {
                CliError::Config(e.to_string())
            }
            other => CliError::Library(other),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let cycle = CliError::from(LibError::CircularReference {
            key: "a".to_string(),
        });
        assert_eq!(cycle.exit_code(), 1);
        assert_eq!(CliError::from(LibError::EmptyPathNotAllowed).exit_code(), 1);
        assert_eq!(
            CliError::from(LibError::InvalidAttribute {
                name: "key".to_string()
            })
            .exit_code(),
            4
        );
        assert_eq!(
            CliError::from(LibError::InvalidFormat {
                reason: "x".to_string()
            })
            .exit_code(),
            6
        );
        assert_eq!(CliError::InvalidArguments(String::new()).exit_code(), 4);
    }

    #[test]
    fn test_library_io_and_config_are_unwrapped() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert_eq!(CliError::from(LibError::Io(io)).exit_code(), 5);

        let validation = LibError::Validation {
            field: "json.indent".to_string(),
            message: "too wide".to_string(),
        };
        let err = CliError::from(validation);
        assert_eq!(err.exit_code(), 7);
        assert!(err.to_string().contains("json.indent"));
    }
}
