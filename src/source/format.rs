//! Structured source formats
//!
//! JSON and YAML are the primary formats; TOML is accepted as well and
//! converted into the same JSON value model.

use serde_json::Value;
use std::path::Path;

use crate::error::ReadError;

/// File format of a structured source, selected by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Json,
    Yaml,
    Toml,
}

impl SourceFormat {
    /// Pick the format for a path. Unknown extensions are read as JSON.
    pub fn from_path(path: &Path) -> Self {
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "yml" | "yaml" => SourceFormat::Yaml,
            "toml" => SourceFormat::Toml,
            _ => SourceFormat::Json,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SourceFormat::Json => "JSON",
            SourceFormat::Yaml => "YAML",
            SourceFormat::Toml => "TOML",
        }
    }

    /// Parse source text into a config tree
    pub fn parse(&self, contents: &str, path: &Path) -> Result<Value, ReadError> {
        let parse_error = |message: String| ReadError::Parse {
            path: path.to_path_buf(),
            format: self.name(),
            message,
        };

        match self {
            SourceFormat::Json => {
                serde_json::from_str(contents).map_err(|e| parse_error(e.to_string()))
            }
            SourceFormat::Yaml => {
                serde_yaml::from_str(contents).map_err(|e| parse_error(e.to_string()))
            }
            SourceFormat::Toml => {
                let table: toml::Value =
                    toml::from_str(contents).map_err(|e| parse_error(e.to_string()))?;
                Ok(toml_to_json(table))
            }
        }
    }
}

/// Convert TOML Value to JSON Value
fn toml_to_json(toml: toml::Value) -> Value {
    match toml {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::Number(i.into()),
        toml::Value::Float(f) => serde_json::Number::from_f64(f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(arr) => Value::Array(arr.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => Value::Object(
            table
                .into_iter()
                .map(|(k, v)| (k, toml_to_json(v)))
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_path() {
        assert_eq!(SourceFormat::from_path(Path::new("a.json")), SourceFormat::Json);
        assert_eq!(SourceFormat::from_path(Path::new("a.YML")), SourceFormat::Yaml);
        assert_eq!(SourceFormat::from_path(Path::new("a.yaml")), SourceFormat::Yaml);
        assert_eq!(SourceFormat::from_path(Path::new("a.toml")), SourceFormat::Toml);
        assert_eq!(SourceFormat::from_path(Path::new("config")), SourceFormat::Json);
    }

    #[test]
    fn test_parse_yaml_keeps_key_order() {
        let value = SourceFormat::Yaml
            .parse("zeta: 1\nalpha:\n  beta: 10px\n", Path::new("a.yml"))
            .unwrap();
        assert_eq!(value, json!({"zeta": 1, "alpha": {"beta": "10px"}}));
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_parse_toml() {
        let value = SourceFormat::Toml
            .parse("width = 10\n[colors]\nprimary = \"#fff\"\nratio = 0.5\n", Path::new("a.toml"))
            .unwrap();
        assert_eq!(
            value,
            json!({"width": 10, "colors": {"primary": "#fff", "ratio": 0.5}})
        );
    }

    #[test]
    fn test_parse_error_names_format() {
        let err = SourceFormat::Json
            .parse("{ not json", Path::new("broken.json"))
            .unwrap_err();
        assert!(err.to_string().starts_with("JSON parse error in broken.json"));
    }
}
