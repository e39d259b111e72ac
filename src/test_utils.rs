//! Test utilities for building directory trees with known sizes and times.
//!
//! This module is only compiled with the `test-utils` feature.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use filetime::FileTime;
use tempfile::TempDir;

pub const KIB: u64 = 1024;
pub const MIB: u64 = 1024 * KIB;

/// A temporary directory tree for testing.
///
/// The tree is automatically cleaned up when dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file of exactly `size` bytes, creating parent directories.
    ///
    /// Files are sparse where the platform allows it, so large sizes are
    /// cheap.
    pub fn add_file(&self, path: &str, size: u64) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        let file = fs::File::create(&full_path).expect("Failed to create file");
        file.set_len(size).expect("Failed to size file");
        full_path
    }

    /// Add a file and backdate its modification time by `age`.
    pub fn add_aged_file(&self, path: &str, size: u64, age: Duration) -> PathBuf {
        let full_path = self.add_file(path, size);
        self.set_age(path, age);
        full_path
    }

    /// Set the modification time of an existing entry to `now - age`.
    pub fn set_age(&self, path: &str, age: Duration) {
        let mtime = SystemTime::now() - age;
        filetime::set_file_mtime(self.dir.path().join(path), FileTime::from_system_time(mtime))
            .expect("Failed to set mtime");
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}
