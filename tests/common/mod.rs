//! Common test utilities for addjars integration tests

use std::path::PathBuf;
use std::time::SystemTime;

use assert_cmd::Command;
use tempfile::TempDir;

/// A test project for integration tests
#[allow(dead_code)]
pub struct TestProject {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to project root
    pub path: PathBuf,
    /// Path to the per-test local repository
    pub repository: PathBuf,
}

#[allow(dead_code)]
impl TestProject {
    /// Create a new test project
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        let repository = path.join("repository");
        Self {
            temp,
            path,
            repository,
        }
    }

    /// Write the project manifest
    pub fn write_manifest(&self, yaml: &str) {
        std::fs::write(self.path.join("project.yaml"), yaml)
            .expect("Failed to write project.yaml");
    }

    /// Write a file in the project
    pub fn write_file(&self, path: &str, content: &[u8]) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the project
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in the project
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Get a file's modification time
    pub fn mtime(&self, path: &str) -> SystemTime {
        std::fs::metadata(self.path.join(path))
            .expect("Failed to stat file")
            .modified()
            .expect("Failed to read mtime")
    }

    /// Set a file's modification time
    pub fn set_mtime(&self, path: &str, mtime: SystemTime) {
        let file = std::fs::OpenOptions::new()
            .write(true)
            .open(self.path.join(path))
            .expect("Failed to open file");
        file.set_modified(mtime).expect("Failed to set mtime");
    }

    /// Command for the addjars binary, rooted in this project and pointed
    /// at the per-test repository
    pub fn addjars_cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("addjars").expect("Failed to find addjars binary");
        cmd.current_dir(&self.path);
        cmd.env("ADDJARS_REPOSITORY_DIR", &self.repository);
        cmd
    }
}
