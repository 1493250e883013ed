//! Attribute names.
//!
//! The names `parent`, `key` and `children` are reserved: they are read-only
//! views of a node's structural state. Every other name addresses the user
//! attribute bag. A name is classified once, on the way in, into an
//! [`Attribute`].

use std::fmt;

use indexmap::IndexMap;
use serde_json::Value;

use super::ValueNode;

/// A structural field exposed through the attribute interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StructuralField {
    /// The node's parent.
    Parent,
    /// The key the node is stored under.
    Key,
    /// The node's children.
    Children,
}

impl StructuralField {
    /// The reserved attribute name for this field.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Parent => "parent",
            Self::Key => "key",
            Self::Children => "children",
        }
    }
}

impl fmt::Display for StructuralField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An attribute name, resolved.
///
/// # Examples
///
/// ```
/// use arbor::value::{Attribute, StructuralField};
///
/// assert_eq!(Attribute::parse("key"), Attribute::Structural(StructuralField::Key));
/// assert_eq!(Attribute::parse("color"), Attribute::User("color".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Attribute {
    /// One of the reserved structural names.
    Structural(StructuralField),
    /// A name in the user attribute bag.
    User(String),
}

impl Attribute {
    /// Classify an attribute name.
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name {
            "parent" => Self::Structural(StructuralField::Parent),
            "key" => Self::Structural(StructuralField::Key),
            "children" => Self::Structural(StructuralField::Children),
            other => Self::User(other.to_owned()),
        }
    }
}

impl From<&str> for Attribute {
    fn from(name: &str) -> Self {
        Self::parse(name)
    }
}

/// The value read through an attribute name.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeView {
    /// The node's parent.
    Parent(Option<ValueNode>),
    /// The node's key.
    Key(Option<String>),
    /// The node's children.
    Children(IndexMap<String, ValueNode>),
    /// A user attribute, `None` if unset.
    User(Option<Value>),
}
