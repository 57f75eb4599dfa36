//! Generation options
//!
//! Options arrive as loosely typed layers (built-in defaults, task file,
//! target, CLI flags). The layers are deep-merged, deserialized once and
//! resolved into an immutable [`Options`] value that every renderer borrows.

use serde::Deserialize;
use serde_json::{json, Value};
use shared_config_values::KeyFormat;
use std::path::PathBuf;

use super::merge::merge_all;
use crate::mask::{MaskSource, MaskSpec};

/// Resolved options for one invocation
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    /// Wrap `.js` output in an AMD `define` factory
    pub amd: bool,

    /// Wrap `.js` output in an Angular `constant` registration
    pub ngconstant: bool,

    /// Key convention for script and JSON output
    pub js_format: KeyFormat,

    /// Key convention for style variable names
    pub css_format: KeyFormat,

    /// Use single quotes in script output. `.json` output ignores this and
    /// always uses double quotes so it stays valid JSON.
    pub singlequote: bool,

    /// Variable / constant / sass map name
    pub name: String,

    /// Angular module name
    pub module: String,

    /// Declare the Angular module instead of referencing it
    pub new_module: bool,

    /// Render `.scss` as a single nested map
    pub use_sass_maps: bool,

    /// Indentation unit
    pub indention: String,

    /// Mask sources in merge order (empty = no masking)
    pub mask: Vec<MaskSource>,

    /// Unknown keys are kept down to this many levels from the root
    pub mask_allow_unknown_levels: u32,

    /// Prefix prepended to every flat style variable name
    pub namespace: String,
}

/// Options as written by the user, before resolution
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawOptions {
    amd: bool,
    ngconstant: bool,
    js_format: String,
    css_format: String,
    singlequote: bool,
    name: String,
    module: String,
    new_module: bool,
    use_sass_maps: bool,
    indention: String,
    mask: Option<MaskSpec>,
    mask_file: Option<PathBuf>,
    mask_allow_unknown_levels: u32,
    namespace: String,
}

impl Default for RawOptions {
    fn default() -> Self {
        Self {
            amd: false,
            ngconstant: false,
            js_format: KeyFormat::Uppercase.to_string(),
            css_format: KeyFormat::Dash.to_string(),
            singlequote: false,
            name: "config".to_string(),
            module: "config".to_string(),
            new_module: false,
            use_sass_maps: false,
            indention: "\t".to_string(),
            mask: None,
            mask_file: None,
            mask_allow_unknown_levels: 0,
            namespace: String::new(),
        }
    }
}

impl RawOptions {
    fn resolve(self) -> Options {
        // `maskFile` is read first, the `mask` option is merged over it
        let mut mask: Vec<MaskSource> = self.mask_file.map(MaskSource::Path).into_iter().collect();
        if let Some(spec) = self.mask {
            mask.extend(spec.into_sources());
        }

        Options {
            amd: self.amd,
            ngconstant: self.ngconstant,
            js_format: resolve_format(&self.js_format),
            css_format: resolve_format(&self.css_format),
            singlequote: self.singlequote,
            name: self.name,
            module: self.module,
            new_module: self.new_module,
            use_sass_maps: self.use_sass_maps,
            indention: self.indention,
            mask,
            mask_allow_unknown_levels: self.mask_allow_unknown_levels,
            namespace: self.namespace,
        }
    }
}

/// Unrecognized conventions fall back to the first declared one (underscore).
fn resolve_format(name: &str) -> KeyFormat {
    name.parse().unwrap_or_else(|_| {
        tracing::debug!("unknown key format '{}', using {}", name, KeyFormat::ALL[0]);
        KeyFormat::ALL[0]
    })
}

impl Default for Options {
    fn default() -> Self {
        RawOptions::default().resolve()
    }
}

impl Options {
    /// Built-in defaults as a value, the first merge layer
    pub fn defaults_value() -> Value {
        let raw = RawOptions::default();
        json!({
            "amd": raw.amd,
            "ngconstant": raw.ngconstant,
            "jsFormat": raw.js_format,
            "cssFormat": raw.css_format,
            "singlequote": raw.singlequote,
            "name": raw.name,
            "module": raw.module,
            "newModule": raw.new_module,
            "useSassMaps": raw.use_sass_maps,
            "indention": raw.indention,
            "maskAllowUnknownLevels": raw.mask_allow_unknown_levels,
            "namespace": raw.namespace,
        })
    }

    /// Resolve options from a single value; missing fields take defaults.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        Self::from_layers(vec![value])
    }

    /// Deep-merge option layers over the built-in defaults and resolve them.
    pub fn from_layers(layers: Vec<Value>) -> Result<Self, serde_json::Error> {
        let merged = merge_all(std::iter::once(Self::defaults_value()).chain(layers));
        let raw: RawOptions = serde_json::from_value(merged)?;
        Ok(raw.resolve())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = Options::default();
        assert!(!options.amd);
        assert!(!options.ngconstant);
        assert_eq!(options.js_format, KeyFormat::Uppercase);
        assert_eq!(options.css_format, KeyFormat::Dash);
        assert_eq!(options.name, "config");
        assert_eq!(options.indention, "\t");
        assert!(options.mask.is_empty());
        assert_eq!(options.mask_allow_unknown_levels, 0);
    }

    #[test]
    fn test_defaults_value_round_trips() {
        assert_eq!(Options::from_value(Options::defaults_value()).unwrap(), Options::default());
    }

    #[test]
    fn test_camel_case_keys() {
        let options = Options::from_value(json!({
            "jsFormat": "camelcase",
            "cssFormat": "underscore",
            "useSassMaps": true,
            "newModule": true,
            "maskAllowUnknownLevels": 2,
            "indention": "  "
        }))
        .unwrap();

        assert_eq!(options.js_format, KeyFormat::CamelCase);
        assert_eq!(options.css_format, KeyFormat::Underscore);
        assert!(options.use_sass_maps);
        assert!(options.new_module);
        assert_eq!(options.mask_allow_unknown_levels, 2);
        assert_eq!(options.indention, "  ");
    }

    #[test]
    fn test_unknown_format_falls_back_to_underscore() {
        let options = Options::from_value(json!({"jsFormat": "PascalCase"})).unwrap();
        assert_eq!(options.js_format, KeyFormat::Underscore);
    }

    #[test]
    fn test_layers_later_wins() {
        let options = Options::from_layers(vec![
            json!({"name": "theme", "amd": true}),
            json!({"name": "settings"}),
        ])
        .unwrap();

        assert_eq!(options.name, "settings");
        assert!(options.amd);
    }

    #[test]
    fn test_mask_file_precedes_mask() {
        let options = Options::from_value(json!({
            "maskFile": "mask.json",
            "mask": ["extra.yml", {"colors": true}]
        }))
        .unwrap();

        assert_eq!(
            options.mask,
            vec![
                MaskSource::Path(PathBuf::from("mask.json")),
                MaskSource::Path(PathBuf::from("extra.yml")),
                MaskSource::Tree(json!({"colors": true}).as_object().unwrap().clone()),
            ]
        );
    }

    #[test]
    fn test_invalid_type_is_an_error() {
        assert!(Options::from_value(json!({"amd": "yes"})).is_err());
    }
}
