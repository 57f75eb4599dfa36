//! Renderers for each destination type
//!
//! The destination's file extension picks an [`OutputFormat`]; each format is
//! a pure function of the (possibly masked) tree and the options.
//!
//! | extension                   | format                            |
//! |-----------------------------|-----------------------------------|
//! | `.json`                     | normalized JSON                   |
//! | `.scss` + `useSassMaps`     | single nested sass map            |
//! | `.scss .sass .less .styl`   | one flat variable per leaf        |
//! | `.js`                       | plain / AMD / Angular constant    |

mod json_text;
mod safe_value;
mod sass_map;
mod script;
mod style;

pub use json_text::to_json_text;
pub use safe_value::style_value;
pub use sass_map::render_sass_map;
pub use script::{render_json, render_script, ScriptWrapper};
pub use style::render_flat;

use serde_json::{Number, Value};
use std::path::{Path, PathBuf};

use crate::config::Options;

/// Flat style sheet dialects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleDialect {
    Scss,
    Sass,
    Less,
    Styl,
}

impl StyleDialect {
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            "scss" => Some(StyleDialect::Scss),
            "sass" => Some(StyleDialect::Sass),
            "less" => Some(StyleDialect::Less),
            "styl" => Some(StyleDialect::Styl),
            _ => None,
        }
    }

    /// One variable declaration line
    pub fn declaration(&self, name: &str, value: &str) -> String {
        match self {
            StyleDialect::Scss => format!("${}: {};\n", name, value),
            StyleDialect::Sass => format!("${}: {}\n", name, value),
            StyleDialect::Less => format!("@{}: {};\n", name, value),
            StyleDialect::Styl => format!("{} = {}\n", name, value),
        }
    }

    /// Whether the dialect has a map literal for nested objects
    pub fn has_maps(&self) -> bool {
        matches!(self, StyleDialect::Scss | StyleDialect::Sass)
    }
}

/// How a destination is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    SassMap,
    Style(StyleDialect),
    Script(ScriptWrapper),
}

/// No renderer for a destination's extension
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown filetype ({extension}) for {}", path.display())]
pub struct UnsupportedDestination {
    pub path: PathBuf,
    pub extension: String,
}

impl OutputFormat {
    /// Select the format for a destination path
    pub fn for_path(path: &Path, options: &Options) -> Result<Self, UnsupportedDestination> {
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "json" => Ok(OutputFormat::Json),
            "scss" if options.use_sass_maps => Ok(OutputFormat::SassMap),
            "js" => Ok(OutputFormat::Script(ScriptWrapper::for_options(options))),
            other => StyleDialect::from_extension(other)
                .map(OutputFormat::Style)
                .ok_or_else(|| UnsupportedDestination {
                    path: path.to_path_buf(),
                    extension: extension.clone(),
                }),
        }
    }

    pub fn render(&self, tree: &Value, options: &Options) -> String {
        match self {
            OutputFormat::Json => render_json(tree, options),
            OutputFormat::SassMap => render_sass_map(tree, options),
            OutputFormat::Style(dialect) => render_flat(tree, *dialect, options),
            OutputFormat::Script(wrapper) => render_script(tree, *wrapper, options),
        }
    }
}

/// Render a tree for one destination path
pub fn render(tree: &Value, path: &Path, options: &Options) -> Result<String, UnsupportedDestination> {
    let format = OutputFormat::for_path(path, options)?;
    Ok(format.render(tree, options))
}

/// Number text as a script host prints it (`1` rather than `1.0`)
pub(crate) fn number_text(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        _ => n.to_string(),
    }
}

/// Prefix every line after the first with `indent`
pub(crate) fn indent_continuation(text: &str, indent: &str) -> String {
    text.replace('\n', &format!("\n{}", indent))
}
