//! Common test utilities for remok integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// A scratch directory for integration tests
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in workspace
    #[allow(dead_code)]
    pub fn write_file(&self, path: &str, content: &str) -> PathBuf {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    /// Read a file from workspace
    #[allow(dead_code)]
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    #[allow(dead_code)]
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Empty configuration file, so tests never pick up the user's own
    pub fn empty_config(&self) -> PathBuf {
        self.write_file("config.yaml", "{}\n")
    }

    /// remok command isolated from the caller's environment
    pub fn remok(&self) -> assert_cmd::Command {
        let mut cmd = remok_cmd();
        cmd.env_remove("REMOK_OUTPUT")
            .env_remove("REMOK_LISTING")
            .env("REMOK_CONFIG", self.empty_config())
            .current_dir(&self.path);
        cmd
    }
}

/// Path to a listing fixture
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("common")
        .join("fixtures")
        .join("listings")
        .join(name)
}

/// Contents of a listing fixture
#[allow(dead_code)]
pub fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(fixture(name)).expect("Failed to read fixture")
}

// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn remok_cmd() -> assert_cmd::Command {
    assert_cmd::Command::cargo_bin("remok").expect("remok binary")
}
