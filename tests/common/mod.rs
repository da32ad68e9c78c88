#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the pipeline-helper binary.
#[macro_export]
macro_rules! pipeline_helper {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("pipeline-helper"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Creates a directory in the temp directory.
    pub fn create_dir(&self, relative_path: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
        path
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Default output directory of a run started inside the fixture.
    pub fn output_dir(&self) -> PathBuf {
        self.dir.path().join("out")
    }

    /// Creates a `.pipeline-helper.toml` in the temp directory.
    pub fn create_config(&self, content: &str) {
        self.create_file(".pipeline-helper.toml", content);
    }

    /// Parses `TEST-<name>.json` from `output_dir`.
    pub fn read_result(output_dir: &Path, name: &str) -> Value {
        let path = output_dir.join(format!("TEST-{name}.json"));
        let content = fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("missing result {}: {e}", path.display()));
        serde_json::from_str(&content).expect("result is valid JSON")
    }
}
