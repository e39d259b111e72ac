//! Test harness for hogs integration tests

#![allow(dead_code)]

use std::path::Path;
use std::process::Command;

pub use hogs::test_utils::{KIB, MIB, TestTree};

/// Run the hogs binary with `args`, returning (stdout, stderr, exit code).
pub fn run_hogs(dir: &Path, args: &[&str]) -> (String, String, i32) {
    let binary = env!("CARGO_BIN_EXE_hogs");
    let output = Command::new(binary)
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to run hogs");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

/// Data lines of a table report (header dropped).
pub fn table_rows(stdout: &str) -> Vec<&str> {
    stdout.lines().skip(1).filter(|l| !l.trim().is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_temp_dir() {
        let tree = TestTree::new();
        assert!(tree.path().exists());
    }

    #[test]
    fn test_harness_add_file_has_size() {
        let tree = TestTree::new();
        let path = tree.add_file("a/b/c.bin", 3 * MIB);
        assert_eq!(std::fs::metadata(path).unwrap().len(), 3 * MIB);
    }
}
