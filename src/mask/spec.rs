//! Mask option resolution
//!
//! The `mask` option is a literal mask, a path to a mask file, or an ordered
//! list of either. All of them are deep-merged left to right into the single
//! effective mask.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::PathBuf;

use crate::config::deep_merge;
use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::error::ReadError;
use crate::source::SourceReader;

/// The `mask` option as written
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MaskSpec {
    Path(PathBuf),
    Tree(Map<String, Value>),
    List(Vec<MaskSource>),
}

/// One mask source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MaskSource {
    Path(PathBuf),
    Tree(Map<String, Value>),
}

impl MaskSpec {
    pub fn into_sources(self) -> Vec<MaskSource> {
        match self {
            MaskSpec::Path(path) => vec![MaskSource::Path(path)],
            MaskSpec::Tree(tree) => vec![MaskSource::Tree(tree)],
            MaskSpec::List(sources) => sources,
        }
    }
}

/// Resolve mask sources into one effective mask.
///
/// Missing or unreadable mask files are skipped with a warning. Returns
/// `None` when no source contributed, meaning no masking at all.
pub fn resolve_mask(
    sources: &[MaskSource],
    reader: &dyn SourceReader,
    diagnostics: &mut Diagnostics,
) -> Option<Value> {
    let mut effective: Option<Value> = None;

    for source in sources {
        let tree = match source {
            MaskSource::Tree(tree) => tree.clone(),
            MaskSource::Path(path) => match reader.read(path) {
                Ok(Value::Object(tree)) => tree,
                Ok(_) => {
                    diagnostics.push(DiagnosticKind::SourceUnreadable {
                        path: path.clone(),
                        message: "a mask file must contain an object".to_string(),
                    });
                    continue;
                }
                Err(ReadError::NotFound(path)) => {
                    diagnostics.push(DiagnosticKind::MaskSourceNotFound(path));
                    continue;
                }
                Err(e) => {
                    diagnostics.push(DiagnosticKind::SourceUnreadable {
                        path: path.clone(),
                        message: e.to_string(),
                    });
                    continue;
                }
            },
        };

        effective = Some(match effective {
            Some(mask) => deep_merge(mask, Value::Object(tree)),
            None => Value::Object(tree),
        });
    }

    effective
}
