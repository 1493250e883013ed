//! Configuration system.
//!
//! Layered YAML configuration with environment variable and programmatic
//! overrides.
//!
//! # Configuration Precedence
//!
//! Highest to lowest:
//!
//! 1. Programmatic overrides (`ConfigBuilder::with_config`)
//! 2. Environment variables (`ARBOR_*`)
//! 3. An explicitly named file (`ConfigBuilder::with_file`)
//! 4. Project config (`arbor.yaml`, nearest ancestor directory)
//! 5. User config (`~/.arbor/config.yaml`)
//! 6. Built-in defaults
//!
//! # Examples
//!
//! ```
//! use arbor::config::{Config, ConfigBuilder, FlattenConfig};
//! use arbor::CollisionPolicy;
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(Config {
//!         flatten: Some(FlattenConfig {
//!             on_collision: Some(CollisionPolicy::Error),
//!         }),
//!         ..Default::default()
//!     })
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.collision_policy(), CollisionPolicy::Error);
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, CreateConfig, FlattenConfig, JsonConfig};
pub use validator::ConfigValidator;
