//! Layered configuration assembly.

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::{ConfigLoader, ConfigSource};
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;

/// Builds a [`Config`] from every configured source.
///
/// Sources are applied from lowest to highest precedence: built-in
/// defaults, the user file, the project `arbor.yaml`, an explicit file,
/// `ARBOR_*` variables, then programmatic overrides. The result is
/// validated before it is returned.
///
/// # Examples
///
/// ```
/// use arbor::config::{Config, ConfigBuilder};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config {
///         log_mode: Some("quiet".to_string()),
///         ..Default::default()
///     })
///     .build()
///     .unwrap();
/// assert_eq!(config.log_mode.as_deref(), Some("quiet"));
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    user_dir: Option<PathBuf>,
    explicit_file: Option<PathBuf>,
    overrides: Vec<Config>,
    skip_files: bool,
    skip_env: bool,
}

impl ConfigBuilder {
    /// Create a builder using the current directory and all sources.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start project config discovery from `dir`.
    #[must_use]
    pub fn with_working_dir(mut self, dir: &Path) -> Self {
        self.working_dir = Some(dir.to_path_buf());
        self
    }

    /// Read the user config from `dir` instead of `~/.arbor`.
    #[must_use]
    pub fn with_user_dir(mut self, dir: &Path) -> Self {
        self.user_dir = Some(dir.to_path_buf());
        self
    }

    /// Layer an explicitly named file above the discovered ones.
    ///
    /// The file is read even when discovery is skipped, and must exist.
    #[must_use]
    pub fn with_file(mut self, path: &Path) -> Self {
        self.explicit_file = Some(path.to_path_buf());
        self
    }

    /// Apply `config` above every other source. Later calls win.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides.push(config);
        self
    }

    /// Do not discover user or project files.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Ignore `ARBOR_*` environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Load, merge and validate.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or parsed, an environment
    /// variable is malformed, or the merged result fails validation.
    pub fn build(self) -> Result<Config> {
        let mut sources: Vec<ConfigSource> = Vec::new();

        if !self.skip_files {
            let working_dir = match self.working_dir {
                Some(dir) => dir,
                None => std::env::current_dir()?,
            };
            sources.extend(ConfigLoader::load_all(
                &working_dir,
                self.user_dir.as_deref(),
            )?);
        }

        if let Some(path) = self.explicit_file {
            let config = ConfigLoader::load_file(&path)?;
            sources.push(ConfigSource {
                path,
                precedence: 3,
                config,
            });
        }

        for source in &sources {
            log::debug!("loaded configuration from {}", source.path.display());
        }

        let mut config = ConfigMerger::merge(sources);

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        for overlay in &self.overrides {
            ConfigMerger::merge_into(&mut config, overlay);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::JsonConfig;
    use crate::error::Error;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_only() {
        let config = ConfigBuilder::new().skip_files().skip_env().build().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_explicit_file_over_project() {
        let project = TempDir::new().unwrap();
        let user = TempDir::new().unwrap();
        fs::write(project.path().join("arbor.yaml"), "json:\n  indent: 4\n  pretty: false\n")
            .unwrap();
        let explicit = project.path().join("explicit.yaml");
        fs::write(&explicit, "json:\n  indent: 6\n").unwrap();

        let config = ConfigBuilder::new()
            .with_working_dir(project.path())
            .with_user_dir(user.path())
            .with_file(&explicit)
            .skip_env()
            .build()
            .unwrap();
        assert_eq!(config.indent(), 6);
        assert!(!config.pretty());
    }

    #[test]
    fn test_overrides_win() {
        let config = ConfigBuilder::new()
            .skip_files()
            .skip_env()
            .with_config(Config {
                json: Some(JsonConfig {
                    pretty: None,
                    indent: Some(1),
                }),
                ..Default::default()
            })
            .with_config(Config {
                json: Some(JsonConfig {
                    pretty: None,
                    indent: Some(3),
                }),
                ..Default::default()
            })
            .build()
            .unwrap();
        assert_eq!(config.indent(), 3);
    }

    #[test]
    fn test_validation_runs_after_merge() {
        let err = ConfigBuilder::new()
            .skip_files()
            .skip_env()
            .with_config(Config {
                json: Some(JsonConfig {
                    pretty: None,
                    indent: Some(99),
                }),
                ..Default::default()
            })
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
    }

    #[test]
    fn test_missing_explicit_file() {
        let dir = TempDir::new().unwrap();
        let err = ConfigBuilder::new()
            .skip_files()
            .skip_env()
            .with_file(&dir.path().join("absent.yaml"))
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
