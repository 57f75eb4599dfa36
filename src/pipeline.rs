//! Pipeline orchestration
//!
//! For each destination group:
//! - Read every source in order (missing ones are skipped and reported)
//! - Deep-merge them left to right
//! - Apply the effective mask, if any
//! - Render each destination from the same tree
//!
//! Nothing is written here; the caller decides what to do with the output.

use serde_json::Value;
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::config::{merge_all, Options};
use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::error::ReadError;
use crate::mask::{apply_mask, resolve_mask};
use crate::render::render;
use crate::source::SourceReader;

/// Sources merged into one tree, and the destinations rendered from it
#[derive(Debug, Clone, PartialEq)]
pub struct DestinationSpec {
    pub sources: Vec<PathBuf>,
    pub destinations: Vec<PathBuf>,
}

impl DestinationSpec {
    pub fn new<S, D>(sources: S, destinations: D) -> Self
    where
        S: IntoIterator,
        S::Item: Into<PathBuf>,
        D: IntoIterator,
        D::Item: Into<PathBuf>,
    {
        Self {
            sources: sources.into_iter().map(Into::into).collect(),
            destinations: destinations.into_iter().map(Into::into).collect(),
        }
    }
}

/// Rendered files and everything that was skipped on the way
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Output {
    pub files: BTreeMap<PathBuf, String>,
    pub diagnostics: Diagnostics,
}

/// Process every destination group with one set of options
pub fn process(specs: &[DestinationSpec], options: &Options, reader: &dyn SourceReader) -> Output {
    let mut output = Output::default();
    let mask = resolve_mask(&options.mask, reader, &mut output.diagnostics);

    for spec in specs {
        let trees = read_sources(&spec.sources, reader, &mut output.diagnostics);
        let files = generate(
            trees,
            &spec.destinations,
            options,
            mask.as_ref(),
            &mut output.diagnostics,
        );
        output.files.extend(files);
    }

    output
}

/// Merge already-read trees, mask them and render every destination.
///
/// An empty result renders nothing and is reported once for the group.
pub fn generate(
    trees: Vec<Value>,
    destinations: &[PathBuf],
    options: &Options,
    mask: Option<&Value>,
    diagnostics: &mut Diagnostics,
) -> BTreeMap<PathBuf, String> {
    let merged = merge_all(trees);
    let tree = match mask {
        Some(mask) => apply_mask(&merged, mask, options.mask_allow_unknown_levels, diagnostics),
        None => merged,
    };

    let mut files = BTreeMap::new();
    if tree.as_object().map_or(true, |map| map.is_empty()) {
        diagnostics.push(DiagnosticKind::EmptyResult {
            destinations: destinations.to_vec(),
        });
        return files;
    }

    for destination in destinations {
        match render(&tree, destination, options) {
            Ok(text) => {
                tracing::debug!(
                    destination = %destination.display(),
                    bytes = text.len(),
                    "rendered"
                );
                files.insert(destination.clone(), text);
            }
            Err(e) => diagnostics.push(DiagnosticKind::UnsupportedDestinationType {
                path: e.path,
                extension: e.extension,
            }),
        }
    }

    files
}

fn read_sources(
    sources: &[PathBuf],
    reader: &dyn SourceReader,
    diagnostics: &mut Diagnostics,
) -> Vec<Value> {
    sources
        .iter()
        .filter_map(|path| match reader.read(path) {
            Ok(tree) => {
                tracing::debug!(source = %path.display(), "read source");
                Some(tree)
            }
            Err(ReadError::NotFound(path)) => {
                diagnostics.push(DiagnosticKind::SourceNotFound(path));
                None
            }
            Err(e) => {
                diagnostics.push(DiagnosticKind::SourceUnreadable {
                    path: path.clone(),
                    message: e.to_string(),
                });
                None
            }
        })
        .collect()
}
