//! Diagnostics for conditions that skip one unit of work
//!
//! Nothing here aborts a run. A missing source skips that source, a bad mask
//! directive drops that key, an unsupported destination skips that file. Each
//! condition is recorded with a severity and mirrored to the log as it
//! happens.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// How serious a diagnostic is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Skippable, processing continued
    Warning,
    /// Likely misconfiguration
    Error,
}

/// Machine-readable diagnostic kinds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "details")]
pub enum DiagnosticKind {
    /// A declared source path does not exist
    SourceNotFound(PathBuf),

    /// A source exists but could not be read or parsed
    SourceUnreadable { path: PathBuf, message: String },

    /// A mask file does not exist or could not be read
    MaskSourceNotFound(PathBuf),

    /// The merged and masked tree has no top-level keys
    EmptyResult { destinations: Vec<PathBuf> },

    /// Unparseable `allowLevel-N` or unrecognized mask leaf
    InvalidMaskDirective { key_path: String, directive: String },

    /// An object mask was applied to a value that is not an object
    MaskShapeMismatch { key_path: String },

    /// No renderer for this destination's extension
    UnsupportedDestinationType { path: PathBuf, extension: String },
}

impl DiagnosticKind {
    pub fn severity(&self) -> Severity {
        match self {
            DiagnosticKind::InvalidMaskDirective { .. } | DiagnosticKind::MaskShapeMismatch { .. } => {
                Severity::Error
            }
            _ => Severity::Warning,
        }
    }

    /// Convert to machine-readable string format
    /// Example: "SOURCE_NOT_FOUND:config/a.json", "INVALID_MASK_DIRECTIVE:colors.primary"
    pub fn to_machine_string(&self) -> String {
        match self {
            DiagnosticKind::SourceNotFound(p) => format!("SOURCE_NOT_FOUND:{}", p.display()),
            DiagnosticKind::SourceUnreadable { path, .. } => {
                format!("SOURCE_UNREADABLE:{}", path.display())
            }
            DiagnosticKind::MaskSourceNotFound(p) => {
                format!("MASK_SOURCE_NOT_FOUND:{}", p.display())
            }
            DiagnosticKind::EmptyResult { destinations } => {
                let names: Vec<String> =
                    destinations.iter().map(|d| d.display().to_string()).collect();
                format!("EMPTY_RESULT:{}", names.join(","))
            }
            DiagnosticKind::InvalidMaskDirective { key_path, .. } => {
                format!("INVALID_MASK_DIRECTIVE:{}", key_path)
            }
            DiagnosticKind::MaskShapeMismatch { key_path } => {
                format!("MASK_SHAPE_MISMATCH:{}", key_path)
            }
            DiagnosticKind::UnsupportedDestinationType { extension, .. } => {
                format!("UNSUPPORTED_DESTINATION_TYPE:{}", extension)
            }
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::SourceNotFound(p) => {
                write!(f, "Source file ({}) not found.", p.display())
            }
            DiagnosticKind::SourceUnreadable { path, message } => {
                write!(f, "Source file ({}) could not be read: {}", path.display(), message)
            }
            DiagnosticKind::MaskSourceNotFound(p) => {
                write!(f, "Mask file ({}) not found, skipping it.", p.display())
            }
            DiagnosticKind::EmptyResult { destinations } => {
                let names: Vec<String> =
                    destinations.iter().map(|d| d.display().to_string()).collect();
                write!(f, "Config is empty after merging and masking; not writing {}", names.join(", "))
            }
            DiagnosticKind::InvalidMaskDirective { key_path, directive } => {
                write!(f, "Invalid mask value {} at '{}'; key dropped", directive, key_path)
            }
            DiagnosticKind::MaskShapeMismatch { key_path } => {
                write!(f, "Mask expects an object at '{}'; key dropped", key_path)
            }
            DiagnosticKind::UnsupportedDestinationType { path, extension } => {
                write!(f, "Unknown filetype ({}) for {}.", extension, path.display())
            }
        }
    }
}

/// A recorded diagnostic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub kind: DiagnosticKind,
}

impl From<DiagnosticKind> for Diagnostic {
    fn from(kind: DiagnosticKind) -> Self {
        Self {
            severity: kind.severity(),
            kind,
        }
    }
}

/// Ordered collection of diagnostics from one run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic and log it at its severity
    pub fn push(&mut self, kind: DiagnosticKind) {
        let diagnostic = Diagnostic::from(kind);
        match diagnostic.severity {
            Severity::Warning => tracing::warn!(code = %diagnostic.kind.to_machine_string(), "{}", diagnostic.kind),
            Severity::Error => tracing::error!(code = %diagnostic.kind.to_machine_string(), "{}", diagnostic.kind),
        }
        self.entries.push(diagnostic);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    pub fn kinds(&self) -> impl Iterator<Item = &DiagnosticKind> {
        self.entries.iter().map(|d| &d.kind)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.entries.iter().any(|d| d.severity == Severity::Error)
    }

    /// Machine-readable strings for every diagnostic, in order
    pub fn machine_strings(&self) -> Vec<String> {
        self.kinds().map(|k| k.to_machine_string()).collect()
    }
}
