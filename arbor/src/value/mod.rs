//! Values and metadata on tree nodes.
//!
//! A [`ValueNode`] is an intrinsic [`Node`] whose payload is a JSON `value`
//! plus a bag of named attributes (`data`). The layer only uses the public
//! tree operations; it adds path-creating writes, an isomorphic `map`, and a
//! JSON encoding (see [`codec`]).
//!
//! # Examples
//!
//! ```
//! use arbor::ValueNode;
//! use serde_json::json;
//!
//! let root = ValueNode::with_value(json!("root"));
//! let leaf = root.put_value("a/0/0/c", json!(null), None).unwrap();
//!
//! assert_eq!(root.pick("a/0/0/c"), Some(leaf));
//! assert_eq!(root.flatten().len(), 5);
//! ```

mod attribute;
pub mod codec;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use attribute::{Attribute, AttributeView, StructuralField};

use crate::error::{Error, Result};
use crate::path::TreePath;
use crate::store::{Intrinsic, Node, RelationshipStore};

/// The payload of a [`ValueNode`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Payload {
    /// The node's value.
    #[serde(default)]
    pub value: Value,
    /// Named attributes, in insertion order.
    #[serde(default)]
    pub data: IndexMap<String, Value>,
}

impl Payload {
    /// A payload with `value` and no attributes.
    #[must_use]
    pub fn new(value: Value) -> Self {
        Self {
            value,
            data: IndexMap::new(),
        }
    }
}

/// A tree node carrying a JSON value and named attributes.
pub type ValueNode = Node<Payload>;

fn check_writable(name: &str) -> Result<()> {
    match Attribute::parse(name) {
        Attribute::Structural(field) => Err(Error::InvalidAttribute {
            name: field.name().to_owned(),
        }),
        Attribute::User(_) => Ok(()),
    }
}

impl Node<Payload> {
    /// A new root node holding `value`.
    #[must_use]
    pub fn with_value(value: Value) -> Self {
        Self::new(Payload::new(value))
    }

    /// A copy of the node's value.
    #[must_use]
    pub fn value(&self) -> Value {
        self.payload().value.clone()
    }

    /// Overwrite the node's value.
    pub fn set_value(&self, value: Value) {
        self.payload_mut().value = value;
    }

    /// A copy of the node's attribute bag.
    #[must_use]
    pub fn data(&self) -> IndexMap<String, Value> {
        self.payload().data.clone()
    }

    /// Read an attribute by name.
    ///
    /// Reserved names read the node's structural state.
    #[must_use]
    pub fn attribute(&self, name: &str) -> AttributeView {
        match Attribute::parse(name) {
            Attribute::Structural(StructuralField::Parent) => AttributeView::Parent(self.parent()),
            Attribute::Structural(StructuralField::Key) => AttributeView::Key(self.key()),
            Attribute::Structural(StructuralField::Children) => {
                AttributeView::Children(self.children())
            }
            Attribute::User(name) => AttributeView::User(self.payload().data.get(&name).cloned()),
        }
    }

    /// Set a user attribute.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAttribute`] for `parent`, `key` or `children`.
    pub fn set_attribute(&self, name: &str, value: Value) -> Result<()> {
        check_writable(name)?;
        self.payload_mut().data.insert(name.to_owned(), value);
        Ok(())
    }

    /// Remove a user attribute, returning its previous value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAttribute`] for `parent`, `key` or `children`.
    pub fn remove_attribute(&self, name: &str) -> Result<Option<Value>> {
        check_writable(name)?;
        Ok(self.payload_mut().data.shift_remove(name))
    }

    /// Merge `data` into the attribute bag.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAttribute`] if any name is reserved; the bag is
    /// left untouched.
    pub fn set_data(&self, data: IndexMap<String, Value>) -> Result<()> {
        for name in data.keys() {
            check_writable(name)?;
        }
        self.payload_mut().data.extend(data);
        Ok(())
    }

    /// Resolve `path`, creating any missing node along the way with
    /// `default_value` as its value.
    #[must_use]
    pub fn pick_or_create(&self, path: impl Into<TreePath>, default_value: &Value) -> Self {
        let path = path.into();
        let mut store = Intrinsic::new();
        let mut current = self.clone();
        for key in &path {
            current = match store.child(&current, key) {
                Some(child) => child,
                None => {
                    // A fresh node has no relatives, so linking it cannot
                    // break any invariant.
                    let created = Self::with_value(default_value.clone());
                    store.link(&current, key, &created);
                    created
                }
            };
        }
        current
    }

    /// Create or overwrite the node at `path` with `value`, merging `data`
    /// into its attributes. Missing intermediate nodes get a `null` value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAttribute`] if `data` names a reserved
    /// attribute. Nothing is created in that case.
    pub fn put_value(
        &self,
        path: impl Into<TreePath>,
        value: Value,
        data: Option<IndexMap<String, Value>>,
    ) -> Result<Self> {
        self.put_value_with(path, value, data, &Value::Null)
    }

    /// [`put_value`](Self::put_value) with `default_value` for missing
    /// intermediate nodes.
    ///
    /// # Errors
    ///
    /// Same as [`put_value`](Self::put_value).
    pub fn put_value_with(
        &self,
        path: impl Into<TreePath>,
        value: Value,
        data: Option<IndexMap<String, Value>>,
        default_value: &Value,
    ) -> Result<Self> {
        if let Some(data) = &data {
            for name in data.keys() {
                check_writable(name)?;
            }
        }

        let target = self.pick_or_create(path, default_value);
        target.set_value(value);
        if let Some(data) = data {
            target.set_data(data)?;
        }
        Ok(target)
    }

    /// Install `node` at `path`, creating missing intermediate nodes and
    /// replacing whatever was there.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyPathNotAllowed`] for the empty path, and
    /// [`Error::CircularReference`] if `node` would become its own ancestor.
    /// Both are detected before anything is created.
    pub fn put_node(&self, path: impl Into<TreePath>, node: &Self) -> Result<()> {
        self.put_node_with(path, node, &Value::Null)
    }

    /// [`put_node`](Self::put_node) with `default_value` for missing
    /// intermediate nodes.
    ///
    /// # Errors
    ///
    /// Same as [`put_node`](Self::put_node).
    pub fn put_node_with(
        &self,
        path: impl Into<TreePath>,
        node: &Self,
        default_value: &Value,
    ) -> Result<()> {
        let path = path.into();
        let (parent_path, key) = path.split_last().ok_or(Error::EmptyPathNotAllowed)?;

        // The deepest existing node on the way to the attach point; anything
        // created below it is fresh and cannot be an ancestor of `node`.
        let mut anchor = self.clone();
        for step in &parent_path {
            match anchor.child(step) {
                Some(child) => anchor = child,
                None => break,
            }
        }
        if node == &anchor || node.is_ancestor_of(&anchor) {
            return Err(Error::CircularReference {
                key: key.to_owned(),
            });
        }

        let target = self.pick_or_create(&path, default_value);
        target.replace_with(node)
    }

    /// Build a tree with the same shape whose payloads are `f` applied to
    /// this tree's payloads.
    ///
    /// The result shares no nodes with `self`. `f` is called exactly once per
    /// node.
    #[must_use]
    pub fn map(&self, mut f: impl FnMut(&Payload) -> Payload) -> Self {
        let mut store = Intrinsic::new();
        let root = Self::new(f(&self.payload()));
        let mut stack = vec![(self.clone(), root.clone())];
        while let Some((source, target)) = stack.pop() {
            for (key, child) in source.children() {
                let copy = Self::new(f(&child.payload()));
                store.link(&target, &key, &copy);
                stack.push((child, copy));
            }
        }
        root
    }
}
