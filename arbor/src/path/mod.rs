//! Tree paths.
//!
//! A path is an ordered sequence of keys addressing a node relative to some
//! ancestor. Paths come either from a `/`-delimited string or from a
//! pre-split sequence of keys.
//!
//! # Parsing
//!
//! Parsing a path string:
//! - trims leading and trailing ASCII whitespace (see [`parse::WHITESPACE`])
//! - then trims leading and trailing `/` characters
//! - then splits on `/`
//!
//! Double slashes are **not** collapsed: `"foo//bar"` addresses the child
//! `""` of `foo`, and then its child `bar`.
//!
//! ```
//! use arbor::TreePath;
//!
//! assert_eq!(TreePath::from(" /foo//bar/ ").keys(), ["foo", "", "bar"]);
//! assert!(TreePath::from("///").is_empty());
//! ```

pub mod parse;
mod types;

pub use types::TreePath;
