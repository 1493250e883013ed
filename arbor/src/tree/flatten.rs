//! Collision handling for flattened paths.

use indexmap::map::Entry;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// What to do when two nodes flatten to the same path string.
///
/// Collisions arise from keys that contain `/` or from empty keys: the child
/// `"x/y"` and the grandchild `x` → `y` both flatten to `"x/y"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionPolicy {
    /// Keep the node visited first in pre-order.
    #[default]
    KeepFirst,
    /// Keep the node visited last, at the first node's position.
    KeepLast,
    /// Fail with [`Error::FlattenCollision`].
    Error,
}

impl CollisionPolicy {
    /// Parses a policy from a string.
    ///
    /// Recognizes: "keep_first", "keep_last", "error" (case-insensitive,
    /// `-` accepted for `_`).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use arbor::CollisionPolicy;
    ///
    /// assert_eq!(CollisionPolicy::parse("keep-last").unwrap(), CollisionPolicy::KeepLast);
    /// assert!(CollisionPolicy::parse("merge").is_err());
    /// ```
    pub fn parse(s: &str) -> std::result::Result<Self, String> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "keep_first" => Ok(Self::KeepFirst),
            "keep_last" => Ok(Self::KeepLast),
            "error" => Ok(Self::Error),
            _ => Err(format!("invalid collision policy: {s}")),
        }
    }

    pub(super) fn insert<N>(self, flat: &mut IndexMap<String, N>, path: String, node: N) -> Result<()> {
        match self {
            Self::KeepFirst => insert_keep_first(flat, path, node),
            Self::KeepLast => {
                if flat.insert(path.clone(), node).is_some() {
                    log::debug!("flatten collision at '{path}': keeping last");
                }
            }
            Self::Error => match flat.entry(path) {
                Entry::Occupied(entry) => {
                    return Err(Error::FlattenCollision {
                        path: entry.key().clone(),
                    })
                }
                Entry::Vacant(entry) => {
                    entry.insert(node);
                }
            },
        }
        Ok(())
    }
}

pub(super) fn insert_keep_first<N>(flat: &mut IndexMap<String, N>, path: String, node: N) {
    match flat.entry(path) {
        Entry::Occupied(entry) => {
            log::debug!("flatten collision at '{}': keeping first", entry.key());
        }
        Entry::Vacant(entry) => {
            entry.insert(node);
        }
    }
}
