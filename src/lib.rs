//! Shared Config - one config tree, many front-end artifacts
//!
//! This crate merges structured config sources (JSON, YAML, TOML) into one
//! tree, optionally filters it through a mask, and renders it as style sheet
//! variables (SCSS, Sass, Less, Stylus), a nested sass map, script modules
//! (plain, AMD, Angular constant) or JSON.

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod logging;
pub mod mask;
pub mod normalize;
pub mod pipeline;
pub mod render;
pub mod source;

pub use config::{deep_merge, merge_all, Options, Task, TaskTarget};
pub use diagnostics::{Diagnostic, DiagnosticKind, Diagnostics, Severity};
pub use error::{ReadError, TaskError};
pub use mask::{apply_mask, resolve_mask, MaskSource, MaskSpec};
pub use normalize::normalize;
pub use pipeline::{generate, process, DestinationSpec, Output};
pub use render::{render, OutputFormat, StyleDialect, UnsupportedDestination};
pub use shared_config_values::{classify, format_key, KeyFormat, ValueKind};
pub use source::{write_output, FsReader, MemoryReader, SourceReader};
