//! Tree algorithms over any relationship store.
//!
//! [`TreeOps`] implements attach/detach/move with cycle prevention, path
//! resolution, structural queries, traversal and flattening purely in terms
//! of the [`RelationshipStore`] primitives. It is implemented for every store,
//! so the intrinsic and registry backings share one implementation.
//!
//! # Examples
//!
//! ```
//! use arbor::{Registry, TreeOps};
//!
//! let mut tree = Registry::new();
//! tree.add_child(&0, "a", &1).unwrap();
//! tree.add_child(&1, "c", &3).unwrap();
//! tree.add_child(&0, "b", &2).unwrap();
//!
//! assert_eq!(tree.descendants(&0), vec![1, 3, 2]);
//! assert_eq!(tree.path(&3).to_string(), "a/c");
//! assert!(tree.add_child(&3, "loop", &0).is_err());
//! ```

mod flatten;
mod walk;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

use indexmap::IndexMap;

pub use flatten::CollisionPolicy;
pub use walk::Walk;

use crate::error::{Error, Result};
use crate::path::TreePath;
use crate::store::RelationshipStore;

/// Structural operations on a tree, derived from the store primitives.
///
/// Every mutation leaves the parent/child links symmetric, keys unique per
/// parent, and the parent relation acyclic. Checks that can fail run before
/// any link is touched.
pub trait TreeOps: RelationshipStore {
    /// Attach `child` under `parent` at `key`.
    ///
    /// A node already stored at `key` is detached first and becomes a root.
    /// If `child` already has a parent it is moved, together with its whole
    /// subtree. Any key is accepted, including the empty string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CircularReference`] if `child` is `parent` or one of
    /// its ancestors. Nothing is modified in that case.
    fn add_child(&mut self, parent: &Self::Node, key: &str, child: &Self::Node) -> Result<()> {
        if child == parent || self.is_ancestor_of(child, parent) {
            log::debug!("rejected attach at '{key}': child is an ancestor of the parent");
            return Err(Error::CircularReference {
                key: key.to_owned(),
            });
        }

        if self.unlink(parent, key).is_some() {
            log::trace!("displaced previous child at '{key}'");
        }
        self.detach(child);
        self.link(parent, key, child);
        log::debug!("attached child at '{key}'");
        Ok(())
    }

    /// Detach and return the child of `parent` at `key`.
    fn detach_child(&mut self, parent: &Self::Node, key: &str) -> Option<Self::Node> {
        let removed = self.unlink(parent, key);
        if removed.is_some() {
            log::debug!("detached child at '{key}'");
        }
        removed
    }

    /// Detach `node` from its parent, if any, and return it.
    fn detach(&mut self, node: &Self::Node) -> Self::Node {
        if let Some((parent, key)) = self.parent_link(node) {
            self.detach_child(&parent, &key);
        }
        node.clone()
    }

    /// Install `replacement` at the position `node` occupies.
    ///
    /// `node` is detached and becomes a root.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotAttached`] if `node` is a root, and
    /// [`Error::CircularReference`] if `replacement` is an ancestor of `node`.
    fn replace_with(&mut self, node: &Self::Node, replacement: &Self::Node) -> Result<()> {
        let (parent, key) = self.parent_link(node).ok_or(Error::NotAttached)?;
        if replacement == node {
            return Ok(());
        }
        log::debug!("replacing child at '{key}'");
        self.add_child(&parent, &key, replacement)
    }

    /// Whether `ancestor` is a strict ancestor of `node`.
    fn is_ancestor_of(&self, ancestor: &Self::Node, node: &Self::Node) -> bool {
        let mut current = self.parent(node);
        while let Some(parent) = current {
            if &parent == ancestor {
                return true;
            }
            current = self.parent(&parent);
        }
        false
    }

    /// Whether `node` is a strict descendant of `ancestor`.
    fn is_descendant_of(&self, node: &Self::Node, ancestor: &Self::Node) -> bool {
        self.is_ancestor_of(ancestor, node)
    }

    /// Whether `node` has no parent.
    fn is_root(&self, node: &Self::Node) -> bool {
        self.parent_link(node).is_none()
    }

    /// Number of ancestors of `node`.
    fn depth(&self, node: &Self::Node) -> usize {
        let mut depth = 0;
        let mut current = self.parent(node);
        while let Some(parent) = current {
            depth += 1;
            current = self.parent(&parent);
        }
        depth
    }

    /// `[parent, grandparent, ..., root]`, empty for a root.
    fn ancestors(&self, node: &Self::Node) -> Vec<Self::Node> {
        let mut ancestors = Vec::new();
        let mut current = self.parent(node);
        while let Some(parent) = current {
            current = self.parent(&parent);
            ancestors.push(parent);
        }
        ancestors
    }

    /// The root of the tree containing `node`.
    fn top_ancestor(&self, node: &Self::Node) -> Self::Node {
        self.ancestors(node).pop().unwrap_or_else(|| node.clone())
    }

    /// All strict descendants of `node` in pre-order.
    fn descendants(&self, node: &Self::Node) -> Vec<Self::Node> {
        self.walk(node).skip(1).map(|(descendant, _)| descendant).collect()
    }

    /// The children of `node`'s parent other than `node`, in insertion order.
    fn siblings(&self, node: &Self::Node) -> Vec<Self::Node> {
        match self.parent(node) {
            Some(parent) => self
                .children(&parent)
                .into_values()
                .filter(|sibling| sibling != node)
                .collect(),
            None => Vec::new(),
        }
    }

    /// `[root, ..., parent, node]`.
    fn breadcrumbs(&self, node: &Self::Node) -> Vec<Self::Node> {
        let mut crumbs = self.ancestors(node);
        crumbs.reverse();
        crumbs.push(node.clone());
        crumbs
    }

    /// The keys leading from the root of `node`'s tree down to `node`.
    fn path(&self, node: &Self::Node) -> TreePath {
        let mut keys = Vec::new();
        let mut current = self.parent_link(node);
        while let Some((parent, key)) = current {
            keys.push(key);
            current = self.parent_link(&parent);
        }
        keys.reverse();
        TreePath::from(keys)
    }

    /// Resolve `path` relative to `node`.
    ///
    /// The empty path resolves to `node` itself; a missing key anywhere along
    /// the way resolves to `None`.
    fn pick(&self, node: &Self::Node, path: impl Into<TreePath>) -> Option<Self::Node> {
        let path = path.into();
        let mut current = node.clone();
        for key in &path {
            current = match self.child(&current, key) {
                Some(child) => child,
                None => {
                    log::trace!("path '{path}' stops at missing key '{key}'");
                    return None;
                }
            };
        }
        Some(current)
    }

    /// Walk `node` and its descendants in pre-order.
    fn walk(&self, node: &Self::Node) -> Walk<Self, &Self> {
        Walk::new(self, node)
    }

    /// Call `visit` on `node` and every descendant in pre-order, with the path
    /// relative to `node`.
    fn for_each_deep(&self, node: &Self::Node, mut visit: impl FnMut(&Self::Node, &TreePath)) {
        for (current, path) in self.walk(node) {
            visit(&current, &path);
        }
    }

    /// Flatten the subtree under `node` into a map from `/`-joined relative
    /// path to node, in pre-order. `node` itself is keyed by `""`.
    ///
    /// When two nodes flatten to the same string (keys containing `/`, or
    /// empty keys), the first in pre-order is kept.
    fn flatten(&self, node: &Self::Node) -> IndexMap<String, Self::Node> {
        let mut flat = IndexMap::new();
        for (current, path) in self.walk(node) {
            flatten::insert_keep_first(&mut flat, path.joined(), current);
        }
        flat
    }

    /// Flatten with an explicit [`CollisionPolicy`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::FlattenCollision`] under [`CollisionPolicy::Error`].
    fn flatten_with(
        &self,
        node: &Self::Node,
        policy: CollisionPolicy,
    ) -> Result<IndexMap<String, Self::Node>> {
        let mut flat = IndexMap::new();
        for (current, path) in self.walk(node) {
            policy.insert(&mut flat, path.joined(), current)?;
        }
        Ok(flat)
    }
}

impl<S: RelationshipStore + ?Sized> TreeOps for S {}
