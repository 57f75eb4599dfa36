//! Task files
//!
//! A task file names one or more targets. Each target lists groups of
//! sources merged into one tree, and the destinations rendered from it:
//!
//! ```toml
//! [options]
//! indention = "  "
//!
//! [targets.theme]
//! options = { name = "theme", useSassMaps = true }
//! files = [{ src = ["config/*.yml", "!config/local.yml"], dest = ["out/theme.scss", "out/theme.js"] }]
//! ```
//!
//! Paths are relative to the directory holding the task file.

use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

use super::options::Options;
use crate::error::TaskError;
use crate::mask::MaskSource;
use crate::pipeline::DestinationSpec;
use crate::source::{expand_sources, FsReader, SourceReader};

/// Task file looked up when none is given
pub const DEFAULT_TASK_FILE: &str = "shared-config.toml";

/// A single path or a list of paths
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    fn into_vec(self) -> Vec<String> {
        match self {
            OneOrMany::One(s) => vec![s],
            OneOrMany::Many(v) => v,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct FileGroup {
    src: OneOrMany,
    dest: OneOrMany,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct TargetDef {
    options: Option<Value>,
    src: Option<OneOrMany>,
    dest: Option<OneOrMany>,
    files: Vec<FileGroup>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct TaskFile {
    options: Option<Value>,
    targets: Map<String, Value>,
}

/// A loaded task file
#[derive(Debug, Clone)]
pub struct Task {
    path: PathBuf,
    base_dir: PathBuf,
    options: Option<Value>,
    targets: Map<String, Value>,
}

/// One target, resolved and ready to process
#[derive(Debug, Clone, PartialEq)]
pub struct TaskTarget {
    pub name: String,
    pub options: Options,
    pub destinations: Vec<DestinationSpec>,
}

impl Task {
    /// Load a task file (TOML, JSON or YAML by extension)
    pub fn load(path: &Path) -> Result<Self, TaskError> {
        let value = FsReader.read(path)?;
        let base_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        Self::from_value(path, base_dir, value)
    }

    /// Build a task from an already-parsed document
    pub fn from_value(
        path: impl Into<PathBuf>,
        base_dir: impl Into<PathBuf>,
        value: Value,
    ) -> Result<Self, TaskError> {
        let path = path.into();
        let file: TaskFile = serde_json::from_value(value).map_err(|e| TaskError::Invalid {
            path: path.clone(),
            message: e.to_string(),
        })?;

        Ok(Self {
            path,
            base_dir: base_dir.into(),
            options: file.options,
            targets: file.targets,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Target names in file order
    pub fn target_names(&self) -> Vec<&str> {
        self.targets.keys().map(String::as_str).collect()
    }

    /// Resolve targets by name, or every target when `names` is empty.
    ///
    /// `cli_options` is the last option layer, over the task's global and
    /// per-target options.
    pub fn targets(
        &self,
        names: &[String],
        cli_options: Option<&Value>,
    ) -> Result<Vec<TaskTarget>, TaskError> {
        let names: Vec<String> = if names.is_empty() {
            self.targets.keys().cloned().collect()
        } else {
            names.to_vec()
        };

        names
            .iter()
            .map(|name| self.target(name, cli_options))
            .collect()
    }

    fn target(&self, name: &str, cli_options: Option<&Value>) -> Result<TaskTarget, TaskError> {
        let raw = self
            .targets
            .get(name)
            .ok_or_else(|| TaskError::UnknownTarget(name.to_string()))?;
        let def: TargetDef = serde_json::from_value(raw.clone())
            .map_err(|e| self.invalid(format!("target '{}': {}", name, e)))?;

        let layers: Vec<Value> = [self.options.as_ref(), def.options.as_ref(), cli_options]
            .into_iter()
            .flatten()
            .cloned()
            .collect();
        let mut options = Options::from_layers(layers)
            .map_err(|e| self.invalid(format!("target '{}' options: {}", name, e)))?;
        options.mask = options
            .mask
            .into_iter()
            .map(|source| match source {
                MaskSource::Path(path) => MaskSource::Path(self.base_dir.join(path)),
                tree => tree,
            })
            .collect();

        let mut groups = Vec::new();
        match (def.src, def.dest) {
            (Some(src), Some(dest)) => groups.push(FileGroup { src, dest }),
            (None, None) => {}
            _ => {
                return Err(self.invalid(format!(
                    "target '{}' must set both src and dest",
                    name
                )))
            }
        }
        groups.extend(def.files);

        if groups.is_empty() {
            return Err(self.invalid(format!("target '{}' has no files", name)));
        }

        let destinations = groups
            .into_iter()
            .map(|group| self.destination_spec(group))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(TaskTarget {
            name: name.to_string(),
            options,
            destinations,
        })
    }

    fn destination_spec(&self, group: FileGroup) -> Result<DestinationSpec, TaskError> {
        let sources = expand_sources(&self.base_dir, &group.src.into_vec())?;
        let destinations = group
            .dest
            .into_vec()
            .into_iter()
            .map(|dest| self.base_dir.join(dest))
            .collect();
        Ok(DestinationSpec {
            sources,
            destinations,
        })
    }

    fn invalid(&self, message: String) -> TaskError {
        TaskError::Invalid {
            path: self.path.clone(),
            message,
        }
    }
}
