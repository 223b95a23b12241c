//! Test support utilities for secretenv integration tests.
//!
//! Provides an isolated project directory and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::fs;
use std::path::PathBuf;

use secretenv::core::config::Config;
use tempfile::TempDir;

/// Test environment with an isolated temp directory.
///
/// Child processes use `.current_dir()` and a scrubbed environment, so tests
/// can run in parallel.
pub struct Test {
    /// Temporary project directory
    pub dir: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Create a test environment whose `.env` holds `contents`.
    pub fn with_env(contents: &str) -> Self {
        let t = Self::new();
        t.write_env(contents);
        t
    }

    /// Path of the project's `.env`.
    pub fn env_path(&self) -> PathBuf {
        self.dir.path().join(".env")
    }

    /// Overwrite the project's `.env`.
    pub fn write_env(&self, contents: &str) {
        fs::write(self.env_path(), contents).expect("failed to write .env");
    }

    /// Read the project's `.env`.
    pub fn read_env(&self) -> String {
        fs::read_to_string(self.env_path()).expect("failed to read .env")
    }

    /// Write a file relative to the project directory.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).expect("failed to write file");
        path
    }

    /// A run configuration targeting the project's `.env`.
    pub fn config(&self, bundles: &[&str]) -> Config {
        Config {
            target: self.env_path(),
            bundles: bundles.iter().map(|b| b.to_string()).collect(),
            profile: None,
            region: None,
        }
    }
}
