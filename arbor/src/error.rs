//! Error types for the arbor library.
//!
//! This module provides the error hierarchy for every fallible operation in
//! the library, using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Result type alias for operations that may fail with an arbor error.
///
/// # Examples
///
/// ```
/// use arbor::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(3)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the arbor library.
#[derive(Debug, Error)]
pub enum Error {
    /// Attaching the node would make it its own ancestor.
    ///
    /// Raised before any relinking happens, so the tree is unchanged.
    #[error("circular reference: cannot attach an ancestor as child '{key}'")]
    CircularReference {
        /// The key the node was about to be attached under.
        key: String,
    },

    /// A reserved structural name was written or deleted through the
    /// attribute bag.
    #[error("invalid attribute '{name}': structural fields are read-only")]
    InvalidAttribute {
        /// The rejected attribute name.
        name: String,
    },

    /// A path argument was neither a string nor a sequence of strings.
    #[error("invalid path argument: {reason}")]
    InvalidPathArgument {
        /// Why the argument was rejected.
        reason: String,
    },

    /// Input could not be decoded as a tree document.
    #[error("invalid format: {reason}")]
    InvalidFormat {
        /// Details about the malformed input.
        reason: String,
    },

    /// A node was put at the empty path, i.e. in place of the receiver.
    #[error("empty path not allowed: the receiver cannot replace itself")]
    EmptyPathNotAllowed,

    /// A root node was asked to replace itself.
    #[error("node is not attached to a parent")]
    NotAttached,

    /// Two nodes flattened to the same path string.
    #[error("flatten collision at path '{path}'")]
    FlattenCollision {
        /// The colliding flattened path.
        path: String,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidFormat {
            reason: err.to_string(),
        }
    }
}

impl Error {
    /// Check if error was caused by a rejected cyclic attach.
    ///
    /// # Examples
    ///
    /// ```
    /// use arbor::Error;
    ///
    /// let err = Error::CircularReference { key: "a".to_string() };
    /// assert!(err.is_circular_reference());
    /// ```
    #[must_use]
    pub fn is_circular_reference(&self) -> bool {
        matches!(self, Self::CircularReference { .. })
    }

    /// Check if error was caused by a reserved attribute name.
    ///
    /// # Examples
    ///
    /// ```
    /// use arbor::Error;
    ///
    /// let err = Error::InvalidAttribute { name: "parent".to_string() };
    /// assert!(err.is_invalid_attribute());
    /// ```
    #[must_use]
    pub fn is_invalid_attribute(&self) -> bool {
        matches!(self, Self::InvalidAttribute { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circular_reference_error() {
        let err = Error::CircularReference {
            key: "child".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("circular reference"));
        assert!(display.contains("child"));
        assert!(err.is_circular_reference());
        assert!(!err.is_invalid_attribute());
    }

    #[test]
    fn test_invalid_attribute_error() {
        let err = Error::InvalidAttribute {
            name: "children".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("invalid attribute"));
        assert!(display.contains("children"));
        assert!(err.is_invalid_attribute());
    }

    #[test]
    fn test_invalid_path_argument_error() {
        let err = Error::InvalidPathArgument {
            reason: "expected a string".to_string(),
        };
        assert!(format!("{err}").contains("expected a string"));
    }

    #[test]
    fn test_empty_path_error() {
        let display = format!("{}", Error::EmptyPathNotAllowed);
        assert!(display.contains("empty path"));
    }

    #[test]
    fn test_flatten_collision_error() {
        let err = Error::FlattenCollision {
            path: "a/b".to_string(),
        };
        assert!(format!("{err}").contains("a/b"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::InvalidFormat { .. }));
        assert!(format!("{err}").contains("invalid format"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        let display = format!("{err}");
        assert!(display.contains("I/O error"));
    }

    #[test]
    fn test_validation_error() {
        let err = Error::Validation {
            field: "json.indent".to_string(),
            message: "must be at most 16".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("validation error"));
        assert!(display.contains("json.indent"));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<()> {
            Err(Error::NotAttached)
        }

        assert!(returns_result().is_err());
    }
}
