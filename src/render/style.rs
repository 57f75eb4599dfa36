//! Flat style sheet variables
//!
//! One declaration per leaf, named by joining the formatted ancestor keys
//! with `-` before applying the style key convention again, in depth-first
//! pre-order.

use serde_json::{Map, Value};
use shared_config_values::format_key;

use super::{style_value, StyleDialect};
use crate::config::Options;

/// Render a tree as flat variable declarations
pub fn render_flat(tree: &Value, dialect: StyleDialect, options: &Options) -> String {
    let mut out = String::new();
    if let Value::Object(map) = tree {
        flatten(map, None, dialect, options, &mut out);
    }
    out
}

fn flatten(
    map: &Map<String, Value>,
    parent: Option<&str>,
    dialect: StyleDialect,
    options: &Options,
    out: &mut String,
) {
    for (key, value) in map {
        let name = match parent {
            Some(parent) => format_key(&format!("{}-{}", parent, key), options.css_format),
            None => format_key(key, options.css_format),
        };

        match value {
            Value::Object(child) => flatten(child, Some(&name), dialect, options, out),
            leaf => {
                let name = format!("{}{}", options.namespace, name);
                out.push_str(&dialect.declaration(&name, &style_value(leaf, dialect)));
            }
        }
    }
}
