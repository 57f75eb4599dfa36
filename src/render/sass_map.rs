//! Nested sass map
//!
//! Renders the whole tree as one `$name: (...);` assignment. Keys are used
//! as written; each nested object becomes an indented sub-map and lists stay
//! on one line.

use serde_json::{Map, Value};

use super::{style_value, StyleDialect};
use crate::config::Options;

/// Render a tree as a single sass map assignment
pub fn render_sass_map(tree: &Value, options: &Options) -> String {
    let body = match tree {
        Value::Object(map) => map_literal(map, &options.indention),
        _ => "()".to_string(),
    };
    format!("${}: {};\n", options.name, body)
}

fn map_literal(map: &Map<String, Value>, indention: &str) -> String {
    if map.is_empty() {
        return "()".to_string();
    }

    let entries: Vec<String> = map
        .iter()
        .map(|(key, value)| {
            let rendered = match value {
                Value::Object(child) => map_literal(child, indention),
                leaf => style_value(leaf, StyleDialect::Scss),
            };
            format!("{}: {}", key, rendered)
        })
        .collect();

    format!("(\n{}\n)", indent_lines(&entries.join(",\n"), indention))
}

/// Indent every non-empty line by one level
fn indent_lines(text: &str, indention: &str) -> String {
    text.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{}{}", indention, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
