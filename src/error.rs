//! Error types
//!
//! Hard failures only. Conditions that skip a single source, mask key or
//! destination are diagnostics, see [`crate::diagnostics`].

use std::path::PathBuf;

/// Errors reading a structured source (config tree or mask)
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReadError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("IO error reading {}: {message}", path.display())]
    Io { path: PathBuf, message: String },

    #[error("{format} parse error in {}: {message}", path.display())]
    Parse {
        path: PathBuf,
        format: &'static str,
        message: String,
    },
}

/// Errors loading a task file or writing its outputs
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    #[error("Failed to parse task file: {0}")]
    Read(#[from] ReadError),

    #[error("Invalid task file {}: {message}", path.display())]
    Invalid { path: PathBuf, message: String },

    #[error("Unknown target '{0}'")]
    UnknownTarget(String),

    #[error("Invalid source pattern '{pattern}': {message}")]
    Pattern { pattern: String, message: String },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
