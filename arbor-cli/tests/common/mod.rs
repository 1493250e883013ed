//! Common test utilities for CLI integration tests.

use assert_cmd::Command;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A sample document: `root -> a -> {c, d}, root -> b`.
#[allow(dead_code)]
pub const SAMPLE: &str = r#"{
  "value": "root",
  "data": {"owner": "ops"},
  "children": {
    "a": {
      "value": 1,
      "children": {
        "c": {"value": "c"},
        "d": {"value": "d", "data": {"tag": true}}
      }
    },
    "b": {"value": 2}
  }
}"#;

/// Test environment with an isolated working and home directory.
pub struct TestEnv {
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        Self {
            temp_dir,
            temp_path,
        }
    }

    /// The arbor binary, run inside the temp directory with `HOME` pointed
    /// at it and no `ARBOR_*` variables inherited.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("arbor").expect("Failed to find arbor binary");
        cmd.current_dir(&self.temp_path)
            .env("HOME", &self.temp_path)
            .env_remove("ARBOR_CONFIG")
            .env_remove("ARBOR_LOG_MODE")
            .env_remove("ARBOR_FLATTEN_ON_COLLISION")
            .env_remove("ARBOR_JSON_PRETTY")
            .env_remove("ARBOR_JSON_INDENT");
        cmd
    }

    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write `contents` to `name` under the temp directory.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Write the sample document and return its path.
    pub fn sample_doc(&self) -> PathBuf {
        self.write_file("tree.json", SAMPLE)
    }

    /// Parse a file under the temp directory as JSON.
    pub fn read_json(&self, path: &Path) -> Value {
        let contents = std::fs::read_to_string(path).expect("Failed to read file");
        serde_json::from_str(&contents).expect("File is not JSON")
    }
}

/// Parse captured stdout as JSON.
#[allow(dead_code)]
pub fn stdout_json(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}
