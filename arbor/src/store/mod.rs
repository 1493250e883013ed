//! Relationship storage.
//!
//! A [`RelationshipStore`] records, for every node, its parent, the key it is
//! registered under, and its insertion-ordered children. Stores know nothing
//! about payloads and check no invariants; the tree algorithms in
//! [`crate::tree`] do that before calling [`RelationshipStore::link`] and
//! [`RelationshipStore::unlink`].
//!
//! Two backings are provided:
//!
//! - [`Intrinsic`]: links live inside the node handle itself ([`Node`]).
//! - [`Registry`]: links live in a side-table keyed by node identity, so any
//!   `Clone + Eq + Hash` value can take part in a tree. [`Handle`] supplies
//!   pointer identity for values that have none of their own.
//!
//! Both give identical answers for every query.

pub mod intrinsic;
pub mod registry;

use indexmap::IndexMap;

pub use intrinsic::{Intrinsic, Node};
pub use registry::{Handle, Registry};

/// Storage of parent/key/children relationships.
///
/// `Node` equality must be identity: two values compare equal only if they
/// denote the same node.
pub trait RelationshipStore {
    /// The node identity this store records relationships for.
    type Node: Clone + PartialEq;

    /// The parent of `node` together with the key `node` is stored under.
    ///
    /// Parent and key are recorded as one pair, so one is present exactly
    /// when the other is.
    fn parent_link(&self, node: &Self::Node) -> Option<(Self::Node, String)>;

    /// A snapshot of the children of `node`, in insertion order.
    fn children(&self, node: &Self::Node) -> IndexMap<String, Self::Node>;

    /// Record `child` under `parent` at `key`, overwriting whatever the slot or
    /// the child's own parent link held before.
    fn link(&mut self, parent: &Self::Node, key: &str, child: &Self::Node);

    /// Remove the child of `parent` at `key`, clearing its parent link.
    ///
    /// Returns `None`, and changes nothing, if there is no such child.
    fn unlink(&mut self, parent: &Self::Node, key: &str) -> Option<Self::Node>;

    /// The parent of `node`.
    fn parent(&self, node: &Self::Node) -> Option<Self::Node> {
        self.parent_link(node).map(|(parent, _)| parent)
    }

    /// The key `node` is stored under in its parent.
    fn key(&self, node: &Self::Node) -> Option<String> {
        self.parent_link(node).map(|(_, key)| key)
    }

    /// The child of `node` at `key`.
    fn child(&self, node: &Self::Node, key: &str) -> Option<Self::Node> {
        self.children(node).get(key).cloned()
    }
}
