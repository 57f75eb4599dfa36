//! Test fixtures
//!
//! `theme/` holds a base JSON config, a YAML override, a public mask and a
//! task file tying them together.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

/// Directory of the theme fixture
pub fn theme_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/theme")
}

/// Path to a file in the theme fixture
pub fn theme_file(name: &str) -> PathBuf {
    theme_dir().join(name)
}
