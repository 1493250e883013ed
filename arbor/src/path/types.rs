//! The [`TreePath`] type.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::parse::{join_keys, split_keys};
use crate::error::{Error, Result};

/// An ordered sequence of keys addressing a node relative to another.
///
/// Built either from a path string (parsed with [`split_keys`]) or from a
/// pre-split sequence of keys, which is taken verbatim.
///
/// # Examples
///
/// ```
/// use arbor::TreePath;
///
/// let parsed = TreePath::from("/a/b/");
/// let presplit = TreePath::from(vec!["a", "b"]);
/// assert_eq!(parsed, presplit);
/// assert_eq!(parsed.to_string(), "a/b");
///
/// // Keys taken verbatim may contain the separator.
/// let odd = TreePath::from(vec!["a/b"]);
/// assert_eq!(odd.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TreePath {
    keys: Vec<String>,
}

impl TreePath {
    /// The empty path, which addresses the node it is resolved against.
    #[must_use]
    pub const fn root() -> Self {
        Self { keys: Vec::new() }
    }

    /// Parse a path string.
    #[must_use]
    pub fn parse(path: &str) -> Self {
        Self {
            keys: split_keys(path),
        }
    }

    /// The keys of this path, outermost first.
    #[must_use]
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether this is the empty path.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Iterate over the keys.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.keys.iter()
    }

    /// Append a key.
    pub fn push(&mut self, key: impl Into<String>) {
        self.keys.push(key.into());
    }

    /// A new path with `key` appended.
    #[must_use]
    pub fn child(&self, key: impl Into<String>) -> Self {
        let mut keys = Vec::with_capacity(self.keys.len() + 1);
        keys.extend(self.keys.iter().cloned());
        keys.push(key.into());
        Self { keys }
    }

    /// Split off the last key, returning the parent path and that key.
    ///
    /// Returns `None` for the empty path.
    #[must_use]
    pub fn split_last(&self) -> Option<(Self, &str)> {
        let (last, rest) = self.keys.split_last()?;
        Some((
            Self {
                keys: rest.to_vec(),
            },
            last.as_str(),
        ))
    }

    /// The keys joined with `/`.
    #[must_use]
    pub fn joined(&self) -> String {
        join_keys(&self.keys)
    }

    /// Consume the path, returning its keys.
    #[must_use]
    pub fn into_keys(self) -> Vec<String> {
        self.keys
    }
}

impl fmt::Display for TreePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.joined())
    }
}

impl From<&str> for TreePath {
    fn from(path: &str) -> Self {
        Self::parse(path)
    }
}

impl From<String> for TreePath {
    fn from(path: String) -> Self {
        Self::parse(&path)
    }
}

impl From<&String> for TreePath {
    fn from(path: &String) -> Self {
        Self::parse(path)
    }
}

impl From<&TreePath> for TreePath {
    fn from(path: &TreePath) -> Self {
        path.clone()
    }
}

impl From<Vec<String>> for TreePath {
    fn from(keys: Vec<String>) -> Self {
        Self { keys }
    }
}

impl From<Vec<&str>> for TreePath {
    fn from(keys: Vec<&str>) -> Self {
        keys.into_iter().collect()
    }
}

impl From<&[&str]> for TreePath {
    fn from(keys: &[&str]) -> Self {
        keys.iter().copied().collect()
    }
}

impl From<&[String]> for TreePath {
    fn from(keys: &[String]) -> Self {
        Self {
            keys: keys.to_vec(),
        }
    }
}

impl<const N: usize> From<[&str; N]> for TreePath {
    fn from(keys: [&str; N]) -> Self {
        keys.into_iter().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for TreePath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TreePath {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}

impl TryFrom<&Value> for TreePath {
    type Error = Error;

    /// Accept a JSON string (parsed) or an array of strings (verbatim).
    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::String(path) => Ok(Self::parse(path)),
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    item.as_str()
                        .map(str::to_owned)
                        .ok_or_else(|| Error::InvalidPathArgument {
                            reason: format!("path component {i} is not a string: {item}"),
                        })
                })
                .collect::<Result<Vec<_>>>()
                .map(Self::from),
            other => Err(Error::InvalidPathArgument {
                reason: format!("expected a string or an array of strings, got {other}"),
            }),
        }
    }
}
