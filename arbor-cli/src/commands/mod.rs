//! CLI command implementations.
//!
//! - `show`: print a (sub)tree as JSON
//! - `flatten`: list nodes by path
//! - `put`: set a value at a path
//! - `move`: move a node to another path
//! - `remove`: detach a node
//! - `validate`: check a document and count its nodes
//! - `completions`: generate shell completion scripts

pub mod completions;
pub mod flatten;
pub mod move_node;
pub mod put;
pub mod remove;
pub mod show;
pub mod validate;

pub use completions::CompletionsCommand;
pub use flatten::FlattenCommand;
pub use move_node::MoveCommand;
pub use put::PutCommand;
pub use remove::RemoveCommand;
pub use show::ShowCommand;
pub use validate::ValidateCommand;
