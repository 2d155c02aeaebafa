//! Shared test helpers for integration tests
//!
//! This module provides common utilities used across all test files.

#![allow(dead_code)]

use assert_cmd::cargo;
use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Helper to get a yamlequal command
pub fn yamlequal() -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("yamlequal"));
    // Keep runs independent of the caller's environment
    cmd.env_remove("YAMLEQUAL_FORMAT")
        .env_remove("YAMLEQUAL_EXPLAIN")
        .env_remove("YAMLEQUAL_LOG");
    cmd
}

/// Write `content` to `name` inside the temp dir and return its path
pub fn write_yaml(tmp: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = tmp.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

/// Create a temp dir holding `first.yaml` and `second.yaml`
pub fn setup_pair(first: &str, second: &str) -> (TempDir, PathBuf, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let a = write_yaml(&tmp, "first.yaml", first);
    let b = write_yaml(&tmp, "second.yaml", second);
    (tmp, a, b)
}

/// Directory holding the fixture cases
pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}
