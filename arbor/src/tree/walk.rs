//! Iterative depth-first traversal.

use std::borrow::Borrow;
use std::marker::PhantomData;

use crate::path::TreePath;
use crate::store::RelationshipStore;

/// Pre-order depth-first iterator over a subtree.
///
/// Yields each node with its path relative to the starting node (empty for
/// the start itself). Children are visited in insertion order. The walk keeps
/// an explicit stack, so tree depth is bounded by memory rather than the call
/// stack, and dropping the iterator ends the walk early.
///
/// Children are snapshotted as each node is expanded. Mutating the subtree
/// while walking it is memory-safe but the nodes visited afterwards are
/// unspecified.
pub struct Walk<S, B>
where
    S: RelationshipStore + ?Sized,
    B: Borrow<S>,
{
    store: B,
    stack: Vec<(S::Node, TreePath)>,
    marker: PhantomData<fn(&S)>,
}

impl<S, B> Walk<S, B>
where
    S: RelationshipStore + ?Sized,
    B: Borrow<S>,
{
    /// Start a walk at `start`.
    pub fn new(store: B, start: &S::Node) -> Self {
        Self {
            store,
            stack: vec![(start.clone(), TreePath::root())],
            marker: PhantomData,
        }
    }
}

impl<S, B> Iterator for Walk<S, B>
where
    S: RelationshipStore + ?Sized,
    B: Borrow<S>,
{
    type Item = (S::Node, TreePath);

    fn next(&mut self) -> Option<Self::Item> {
        let (node, path) = self.stack.pop()?;

        // Push in reverse so the first child is popped first.
        let children = self.store.borrow().children(&node);
        for (key, child) in children.into_iter().rev() {
            let child_path = path.child(key);
            self.stack.push((child, child_path));
        }

        Some((node, path))
    }
}
