//! Test support utilities for credcheck integration tests.
//!
//! Provides an isolated scratch directory per test plus helpers to write
//! config and credentials files and run the binary against them.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod database;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::PathBuf;
use tempfile::TempDir;

/// Test environment with an isolated temp directory.
///
/// Child processes run with `.current_dir()` set to the temp dir, so the
/// default `./config.yml` resolves inside it and tests can run in parallel.
pub struct Test {
    /// Temporary working directory for the test
    pub dir: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Create a test environment with `config.yml` pointing at `UNREACHABLE_CONFIG`.
    pub fn with_unreachable_db() -> Self {
        let t = Self::new();
        t.write("config.yml", UNREACHABLE_CONFIG);
        t
    }

    /// Write `contents` to `name` inside the test dir and return its path.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).expect("failed to write test file");
        path
    }

    /// Path of `name` inside the test dir (may not exist).
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}
