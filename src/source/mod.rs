//! Reading source trees and writing rendered output
//!
//! The core never touches the filesystem itself. It reads through a
//! [`SourceReader`], so the same pipeline runs over files ([`FsReader`]) or
//! trees already in memory ([`MemoryReader`]).

mod format;
mod pattern;

pub use format::SourceFormat;
pub use pattern::expand_sources;

use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{ReadError, TaskError};

/// Reads a structured source into a config tree
pub trait SourceReader {
    fn read(&self, path: &Path) -> Result<Value, ReadError>;
}

/// Reads sources from disk, dispatching on file extension
#[derive(Debug, Clone, Copy, Default)]
pub struct FsReader;

impl SourceReader for FsReader {
    fn read(&self, path: &Path) -> Result<Value, ReadError> {
        let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ReadError::NotFound(path.to_path_buf()),
            _ => ReadError::Io {
                path: path.to_path_buf(),
                message: e.to_string(),
            },
        })?;

        SourceFormat::from_path(path).parse(&contents, path)
    }
}

/// Serves trees registered in memory, keyed by path
#[derive(Debug, Clone, Default)]
pub struct MemoryReader {
    trees: HashMap<PathBuf, Value>,
}

impl MemoryReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tree under a path
    pub fn with(mut self, path: impl Into<PathBuf>, tree: Value) -> Self {
        self.insert(path, tree);
        self
    }

    pub fn insert(&mut self, path: impl Into<PathBuf>, tree: Value) {
        self.trees.insert(path.into(), tree);
    }
}

impl SourceReader for MemoryReader {
    fn read(&self, path: &Path) -> Result<Value, ReadError> {
        self.trees
            .get(path)
            .cloned()
            .ok_or_else(|| ReadError::NotFound(path.to_path_buf()))
    }
}

/// Write rendered text to a destination, creating parent directories
pub fn write_output(path: &Path, text: &str) -> Result<(), TaskError> {
    let write_error = |source| TaskError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_error)?;
    }
    fs::write(path, text).map_err(write_error)
}
