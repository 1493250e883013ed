//! Relationship storage held by the node itself.
//!
//! [`Node<T>`] is a reference-counted handle to a payload `T` plus its links.
//! A parent holds its children strongly and each child holds its parent
//! weakly, so dropping every handle to a tree frees it. A child that outlives
//! all handles to its parent reports itself as a root, so keep the root alive
//! while working with nodes picked out of it (see [`Node::pick`]).
//!
//! Cloning a `Node` clones the handle, not the node: both handles denote the
//! same identity. There is no shallow structural copy of a node, since a copy
//! sharing children with the original would give those children two parents.
//! Deep copies are built by [`crate::value`] with fresh identities.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::rc::{Rc, Weak};

use indexmap::IndexMap;

use super::RelationshipStore;
use crate::error::Result;
use crate::path::TreePath;
use crate::tree::{CollisionPolicy, TreeOps, Walk};

struct Links<T> {
    parent: Option<(Weak<Inner<T>>, String)>,
    children: IndexMap<String, Node<T>>,
}

impl<T> Default for Links<T> {
    fn default() -> Self {
        Self {
            parent: None,
            children: IndexMap::new(),
        }
    }
}

impl<T> Drop for Links<T> {
    // Unwind uniquely-owned subtrees with an explicit stack so that dropping a
    // very deep chain does not recurse once per level.
    fn drop(&mut self) {
        let mut stack: Vec<Node<T>> = self.children.drain(..).map(|(_, child)| child).collect();
        while let Some(node) = stack.pop() {
            if Rc::strong_count(&node.inner) == 1 {
                if let Ok(mut links) = node.inner.links.try_borrow_mut() {
                    stack.extend(links.children.drain(..).map(|(_, child)| child));
                }
            }
        }
    }
}

struct Inner<T> {
    links: RefCell<Links<T>>,
    payload: RefCell<T>,
}

/// A tree node carrying a payload and its own relationship links.
///
/// # Examples
///
/// ```
/// use arbor::Node;
///
/// let root = Node::new("root");
/// let child = Node::new("child");
/// root.add_child("a", &child).unwrap();
///
/// assert_eq!(child.parent(), Some(root.clone()));
/// assert_eq!(child.key().as_deref(), Some("a"));
/// assert_eq!(root.pick("a"), Some(child));
/// ```
pub struct Node<T> {
    inner: Rc<Inner<T>>,
}

impl<T> Node<T> {
    /// Create a new root node holding `payload`.
    #[must_use]
    pub fn new(payload: T) -> Self {
        Self {
            inner: Rc::new(Inner {
                links: RefCell::new(Links::default()),
                payload: RefCell::new(payload),
            }),
        }
    }

    /// Borrow the payload.
    ///
    /// # Panics
    ///
    /// Panics if the payload is currently mutably borrowed.
    #[must_use]
    pub fn payload(&self) -> Ref<'_, T> {
        self.inner.payload.borrow()
    }

    /// Mutably borrow the payload.
    ///
    /// # Panics
    ///
    /// Panics if the payload is currently borrowed.
    #[must_use]
    pub fn payload_mut(&self) -> RefMut<'_, T> {
        self.inner.payload.borrow_mut()
    }

    /// Replace the payload, returning the old one.
    pub fn replace_payload(&self, payload: T) -> T {
        self.inner.payload.replace(payload)
    }

    /// Whether two handles denote the same node.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    fn store() -> Intrinsic<T> {
        Intrinsic::new()
    }

    /// The parent node, if any.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        Self::store().parent(self)
    }

    /// The key this node is stored under in its parent.
    #[must_use]
    pub fn key(&self) -> Option<String> {
        Self::store().key(self)
    }

    /// A snapshot of the children, in insertion order.
    #[must_use]
    pub fn children(&self) -> IndexMap<String, Self> {
        Self::store().children(self)
    }

    /// The child at `key`.
    #[must_use]
    pub fn child(&self, key: &str) -> Option<Self> {
        Self::store().child(self, key)
    }

    /// Attach `child` under `key`, moving it from any previous parent and
    /// displacing any node already stored at `key`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::CircularReference`] if `child` is this node or
    /// one of its ancestors.
    pub fn add_child(&self, key: &str, child: &Self) -> Result<()> {
        Self::store().add_child(self, key, child)
    }

    /// Detach and return the child at `key`.
    pub fn detach_child(&self, key: &str) -> Option<Self> {
        Self::store().detach_child(self, key)
    }

    /// Detach this node from its parent, returning it.
    pub fn detach(&self) -> Self {
        Self::store().detach(self)
    }

    /// Install `replacement` in place of this node.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NotAttached`] if this node is a root, or
    /// [`crate::Error::CircularReference`] if `replacement` is an ancestor of
    /// this node.
    pub fn replace_with(&self, replacement: &Self) -> Result<()> {
        Self::store().replace_with(self, replacement)
    }

    /// Whether this node is a strict ancestor of `other`.
    #[must_use]
    pub fn is_ancestor_of(&self, other: &Self) -> bool {
        Self::store().is_ancestor_of(self, other)
    }

    /// Whether this node is a strict descendant of `other`.
    #[must_use]
    pub fn is_descendant_of(&self, other: &Self) -> bool {
        Self::store().is_descendant_of(self, other)
    }

    /// Whether this node has no parent.
    #[must_use]
    pub fn is_root(&self) -> bool {
        Self::store().is_root(self)
    }

    /// Number of ancestors.
    #[must_use]
    pub fn depth(&self) -> usize {
        Self::store().depth(self)
    }

    /// `[parent, grandparent, ..., root]`.
    #[must_use]
    pub fn ancestors(&self) -> Vec<Self> {
        Self::store().ancestors(self)
    }

    /// The root of this node's tree.
    #[must_use]
    pub fn top_ancestor(&self) -> Self {
        Self::store().top_ancestor(self)
    }

    /// All strict descendants in pre-order.
    #[must_use]
    pub fn descendants(&self) -> Vec<Self> {
        Self::store().descendants(self)
    }

    /// The other children of this node's parent.
    #[must_use]
    pub fn siblings(&self) -> Vec<Self> {
        Self::store().siblings(self)
    }

    /// `[root, ..., parent, self]`.
    #[must_use]
    pub fn breadcrumbs(&self) -> Vec<Self> {
        Self::store().breadcrumbs(self)
    }

    /// Keys from the root down to this node.
    #[must_use]
    pub fn path(&self) -> TreePath {
        Self::store().path(self)
    }

    /// Resolve `path` relative to this node.
    ///
    /// The returned handle keeps only its own subtree alive. Hold on to the
    /// root for as long as the node's ancestry matters: once every handle to
    /// the root is gone, the picked node reports itself as a root with an
    /// empty path.
    ///
    /// ```
    /// use arbor::ValueNode;
    ///
    /// let doc = r#"{"children": {"a": {"children": {"b": {}}}}}"#;
    ///
    /// let root = ValueNode::from_json_str(doc).unwrap();
    /// let b = root.pick("a/b").unwrap();
    /// assert_eq!(b.path().to_string(), "a/b");
    ///
    /// // The root is a temporary here and is freed at the end of the statement.
    /// let orphan = ValueNode::from_json_str(doc).unwrap().pick("a/b").unwrap();
    /// assert!(orphan.is_root());
    /// ```
    #[must_use]
    pub fn pick(&self, path: impl Into<TreePath>) -> Option<Self> {
        Self::store().pick(self, path)
    }

    /// Visit this node and every descendant in pre-order with its relative
    /// path.
    pub fn for_each_deep(&self, visit: impl FnMut(&Self, &TreePath)) {
        Self::store().for_each_deep(self, visit);
    }

    /// Flatten this subtree into a map keyed by `/`-joined relative path.
    #[must_use]
    pub fn flatten(&self) -> IndexMap<String, Self> {
        Self::store().flatten(self)
    }

    /// Flatten with an explicit collision policy.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::FlattenCollision`] under
    /// [`CollisionPolicy::Error`] when two nodes flatten to the same path.
    pub fn flatten_with(&self, policy: CollisionPolicy) -> Result<IndexMap<String, Self>> {
        Self::store().flatten_with(self, policy)
    }

    /// Iterate over this subtree in pre-order.
    pub fn walk(&self) -> impl Iterator<Item = (Self, TreePath)> {
        Walk::<Intrinsic<T>, _>::new(Intrinsic::new(), self)
    }
}

impl<T> Clone for Node<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl<T> Eq for Node<T> {}

impl<T> Hash for Node<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Rc::as_ptr(&self.inner).hash(state);
    }
}

impl<T: Default> Default for Node<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("Node");
        debug.field("key", &self.key());
        match self.inner.payload.try_borrow() {
            Ok(payload) => debug.field("payload", &*payload),
            Err(_) => debug.field("payload", &"<borrowed>"),
        };
        match self.inner.links.try_borrow() {
            Ok(links) => debug.field("children", &links.children.keys().collect::<Vec<_>>()),
            Err(_) => debug.field("children", &"<borrowed>"),
        };
        debug.finish()
    }
}

/// The store for [`Node<T>`]: a zero-sized view onto the links each node
/// carries.
pub struct Intrinsic<T> {
    marker: PhantomData<fn() -> T>,
}

impl<T> Intrinsic<T> {
    /// Create the store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<T> Default for Intrinsic<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Intrinsic<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> Copy for Intrinsic<T> {}

impl<T> fmt::Debug for Intrinsic<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Intrinsic")
    }
}

impl<T> RelationshipStore for Intrinsic<T> {
    type Node = Node<T>;

    fn parent_link(&self, node: &Node<T>) -> Option<(Node<T>, String)> {
        let links = node.inner.links.borrow();
        let (parent, key) = links.parent.as_ref()?;
        let inner = parent.upgrade()?;
        Some((Node { inner }, key.clone()))
    }

    fn children(&self, node: &Node<T>) -> IndexMap<String, Node<T>> {
        node.inner.links.borrow().children.clone()
    }

    fn child(&self, node: &Node<T>, key: &str) -> Option<Node<T>> {
        node.inner.links.borrow().children.get(key).cloned()
    }

    fn link(&mut self, parent: &Node<T>, key: &str, child: &Node<T>) {
        parent
            .inner
            .links
            .borrow_mut()
            .children
            .insert(key.to_owned(), child.clone());
        child.inner.links.borrow_mut().parent = Some((Rc::downgrade(&parent.inner), key.to_owned()));
    }

    fn unlink(&mut self, parent: &Node<T>, key: &str) -> Option<Node<T>> {
        let removed = parent.inner.links.borrow_mut().children.shift_remove(key)?;
        removed.inner.links.borrow_mut().parent = None;
        Some(removed)
    }
}
