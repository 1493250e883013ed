#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # arbor
//!
//! Mutable trees whose nodes are addressed by slash-separated key paths.
//!
//! Structure (parent, key, ordered children) is kept by a pluggable
//! [`RelationshipStore`]. The tree algorithms in [`TreeOps`] work over any
//! store and keep the structure consistent: links are symmetric, keys are
//! unique per parent, and no node can become its own ancestor.
//!
//! ## Core Types
//!
//! - [`Node`] and [`Intrinsic`]: nodes that carry their own links
//! - [`Registry`] and [`Handle`]: links kept in a side table
//! - [`TreePath`]: parsed key paths. Paths that arrive as JSON (a string or an
//!   array of strings) go through `TreePath::try_from(&Value)`, which rejects
//!   anything else with [`Error::InvalidPathArgument`]
//! - [`ValueNode`] and [`Payload`]: value/metadata trees with a JSON codec
//! - [`Config`] and [`ConfigBuilder`]: layered YAML configuration
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: stderr logging backend
//!
//! ## Examples
//!
//! ```
//! use arbor::ValueNode;
//! use serde_json::json;
//!
//! let root = ValueNode::default();
//! let c = root.put_value("a/0/0/c", json!(null), None).unwrap();
//!
//! assert_eq!(root.pick("a/0/0/c"), Some(c.clone()));
//! assert_eq!(c.path().to_string(), "a/0/0/c");
//! assert!(c.add_child("x", &root).is_err());
//! ```
//!
//! Paths read from JSON input:
//!
//! ```
//! use arbor::{Error, TreePath};
//! use serde_json::json;
//!
//! let keys = TreePath::try_from(&json!(["x/y", ""])).unwrap();
//! assert_eq!(keys.keys(), ["x/y", ""]);
//!
//! let err = TreePath::try_from(&json!(3)).unwrap_err();
//! assert!(matches!(err, Error::InvalidPathArgument { .. }));
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod path;
pub mod store;
pub mod tree;
pub mod value;

pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::TreePath;
pub use store::{Handle, Intrinsic, Node, Registry, RelationshipStore};
pub use tree::{CollisionPolicy, TreeOps, Walk};
pub use value::{Payload, ValueNode};
