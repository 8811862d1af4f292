//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Builder for fake home directories holding pattern files.
///
/// Integration tests point the binary's `HOME` at the built directory, so
/// pattern resolution stays inside the tempdir.
pub struct HomeDirBuilder {
    temp_dir: TempDir,
    config_style: bool,
}

impl HomeDirBuilder {
    /// Create a builder whose pattern directory is the `~/.gf` fallback.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir, config_style: false }
    }

    /// Use a pre-existing `~/.config/gf` directory instead of `~/.gf`.
    pub fn config_style(mut self) -> Self {
        self.config_style = true;
        fs::create_dir_all(self.pattern_dir()).expect("Failed to create .config/gf");
        self
    }

    /// The directory pattern files resolve to for this home.
    pub fn pattern_dir(&self) -> PathBuf {
        if self.config_style {
            self.temp_dir.path().join(".config").join("gf")
        } else {
            self.temp_dir.path().join(".gf")
        }
    }

    /// Write a raw pattern file `<name>.json` with the given contents.
    pub fn with_pattern(self, name: &str, json: &str) -> Self {
        let dir = self.pattern_dir();
        fs::create_dir_all(&dir).expect("Failed to create pattern dir");
        fs::write(dir.join(format!("{name}.json")), json).expect("Failed to write pattern file");
        self
    }

    /// Build and return the temp home directory (consumes self).
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for HomeDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}
