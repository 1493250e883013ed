//! Relationship storage in a side-table keyed by node identity.
//!
//! A [`Registry`] lets values that carry no link fields of their own take
//! part in a tree. Any `Clone + Eq + Hash` value can serve as the identity:
//! plain ids, or a [`Handle`] when identity should follow a shared allocation
//! rather than the value's contents.
//!
//! The registry is an ordinary value owned by the caller. A node's record is
//! evicted as soon as it has neither a parent nor children, so the table only
//! holds nodes that are currently part of some non-trivial tree.

use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::rc::Rc;

use indexmap::IndexMap;

use super::RelationshipStore;

#[derive(Debug)]
struct Record<K> {
    parent: Option<(K, String)>,
    children: IndexMap<String, K>,
}

impl<K> Record<K> {
    fn is_vacant(&self) -> bool {
        self.parent.is_none() && self.children.is_empty()
    }
}

impl<K> Default for Record<K> {
    fn default() -> Self {
        Self {
            parent: None,
            children: IndexMap::new(),
        }
    }
}

/// Relationship records for nodes identified by `K`.
///
/// # Examples
///
/// ```
/// use arbor::{Registry, RelationshipStore, TreeOps};
///
/// let mut tree = Registry::new();
/// tree.add_child(&"root", "a", &"alpha").unwrap();
/// tree.add_child(&"alpha", "b", &"beta").unwrap();
///
/// assert_eq!(tree.pick(&"root", "a/b"), Some("beta"));
/// assert_eq!(tree.parent(&"beta"), Some("alpha"));
/// assert_eq!(tree.len(), 3);
///
/// tree.detach(&"alpha");
/// // "root" no longer takes part in any relationship.
/// assert!(!tree.is_tracked(&"root"));
/// assert_eq!(tree.len(), 2);
/// ```
pub struct Registry<K> {
    records: HashMap<K, Record<K>>,
}

impl<K: Clone + Eq + Hash> Registry<K> {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
        }
    }

    /// Number of nodes that currently have a parent or children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no node has any relationship.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether `node` currently has a parent or children.
    #[must_use]
    pub fn is_tracked(&self, node: &K) -> bool {
        self.records.contains_key(node)
    }

    fn evict_if_vacant(&mut self, node: &K) {
        if self.records.get(node).is_some_and(Record::is_vacant) {
            self.records.remove(node);
        }
    }
}

impl<K: Clone + Eq + Hash> Default for Registry<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug> fmt::Debug for Registry<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("tracked", &self.records.len())
            .finish()
    }
}

impl<K: Clone + Eq + Hash> RelationshipStore for Registry<K> {
    type Node = K;

    fn parent_link(&self, node: &K) -> Option<(K, String)> {
        self.records.get(node)?.parent.clone()
    }

    fn children(&self, node: &K) -> IndexMap<String, K> {
        self.records
            .get(node)
            .map(|record| record.children.clone())
            .unwrap_or_default()
    }

    fn child(&self, node: &K, key: &str) -> Option<K> {
        self.records.get(node)?.children.get(key).cloned()
    }

    fn link(&mut self, parent: &K, key: &str, child: &K) {
        self.records
            .entry(parent.clone())
            .or_default()
            .children
            .insert(key.to_owned(), child.clone());
        self.records.entry(child.clone()).or_default().parent =
            Some((parent.clone(), key.to_owned()));
    }

    fn unlink(&mut self, parent: &K, key: &str) -> Option<K> {
        let removed = self.records.get_mut(parent)?.children.shift_remove(key)?;
        if let Some(record) = self.records.get_mut(&removed) {
            record.parent = None;
        }
        self.evict_if_vacant(parent);
        self.evict_if_vacant(&removed);
        Some(removed)
    }
}

/// Pointer identity for a shared value.
///
/// Two handles are equal only if they point at the same allocation, whatever
/// the contents, which makes `Handle<T>` usable as a [`Registry`] key for
/// types without identity of their own.
///
/// # Examples
///
/// ```
/// use arbor::Handle;
///
/// let a = Handle::new(String::from("same"));
/// let b = Handle::new(String::from("same"));
/// assert_ne!(a, b);
/// assert_eq!(a, a.clone());
/// assert_eq!(a.as_str(), "same");
/// ```
pub struct Handle<T: ?Sized>(Rc<T>);

impl<T> Handle<T> {
    /// Wrap `value` in a new allocation.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self(Rc::new(value))
    }
}

impl<T: ?Sized> Handle<T> {
    /// The shared pointer behind this handle.
    #[must_use]
    pub fn as_rc(&self) -> &Rc<T> {
        &self.0
    }
}

impl<T: ?Sized> From<Rc<T>> for Handle<T> {
    fn from(rc: Rc<T>) -> Self {
        Self(rc)
    }
}

impl<T: ?Sized> Clone for Handle<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T: ?Sized> PartialEq for Handle<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T: ?Sized> Eq for Handle<T> {}

impl<T: ?Sized> Hash for Handle<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Rc::as_ptr(&self.0).cast::<()>().hash(state);
    }
}

impl<T: ?Sized> Deref for Handle<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Handle").field(&&*self.0).finish()
    }
}
