//! Leaf values as style sheet source text
//!
//! Quoted literals are re-quoted around their inner text, urls/paths and
//! `true`-like strings are quoted so the dialect reads them as strings,
//! everything else is emitted as-is.

use serde_json::{Map, Value};
use shared_config_values::{classify, strip_quotes, ValueKind};

use super::{number_text, StyleDialect};

/// Render a value in leaf position for a style dialect
pub fn style_value(value: &Value, dialect: StyleDialect) -> String {
    match value {
        Value::String(raw) => string_value(raw),
        Value::Number(n) => number_text(n),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(items) => list_value(items, dialect),
        Value::Object(map) if dialect.has_maps() => inline_map(map, dialect),
        // No map literal in this dialect
        Value::Object(_) => "null".to_string(),
    }
}

fn string_value(raw: &str) -> String {
    match classify(raw) {
        ValueKind::QuotedString => quote(strip_quotes(raw).unwrap_or(raw)),
        ValueKind::PathOrUrl | ValueKind::BooleanLiteral => quote(raw),
        _ => raw.to_string(),
    }
}

fn quote(inner: &str) -> String {
    format!("\"{}\"", inner.replace('"', "\\\""))
}

fn list_value(items: &[Value], dialect: StyleDialect) -> String {
    let rendered: Vec<String> = items
        .iter()
        .map(|item| match (item, dialect) {
            // Nested space separated lists need grouping
            (Value::Array(_), StyleDialect::Styl) => format!("({})", style_value(item, dialect)),
            _ => style_value(item, dialect),
        })
        .collect();

    match dialect {
        StyleDialect::Scss | StyleDialect::Sass => match rendered.len() {
            0 => "()".to_string(),
            // `(a)` is just `a`; the trailing comma keeps it a list
            1 => format!("({},)", rendered[0]),
            _ => format!("({})", rendered.join(", ")),
        },
        StyleDialect::Less if rendered.is_empty() => "~\"\"".to_string(),
        StyleDialect::Less => rendered.join(", "),
        StyleDialect::Styl if rendered.is_empty() => "()".to_string(),
        StyleDialect::Styl => rendered.join(" "),
    }
}

/// Single-line map literal for objects nested inside lists
pub(crate) fn inline_map(map: &Map<String, Value>, dialect: StyleDialect) -> String {
    let entries: Vec<String> = map
        .iter()
        .map(|(key, value)| format!("{}: {}", key, style_value(value, dialect)))
        .collect();
    format!("({})", entries.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn scss(value: Value) -> String {
        style_value(&value, StyleDialect::Scss)
    }

    #[test]
    fn test_strings() {
        assert_eq!(scss(json!("10px")), "10px");
        assert_eq!(scss(json!("#fff")), "#fff");
        assert_eq!(scss(json!("Helvetica")), "Helvetica");
        assert_eq!(scss(json!("'Open Sans'")), "\"Open Sans\"");
        assert_eq!(scss(json!("\"Open Sans\"")), "\"Open Sans\"");
        assert_eq!(scss(json!("images/bg.png")), "\"images/bg.png\"");
        assert_eq!(scss(json!("https://cdn.example.com/a.woff")), "\"https://cdn.example.com/a.woff\"");
        assert_eq!(scss(json!("true")), "\"true\"");
    }

    #[test]
    fn test_natives() {
        assert_eq!(scss(json!(12)), "12");
        assert_eq!(scss(json!(0.5)), "0.5");
        assert_eq!(scss(json!(true)), "true");
        assert_eq!(scss(json!(null)), "null");
    }

    #[test]
    fn test_lists_per_dialect() {
        let list = json!(["1px", "2px", "3px"]);
        assert_eq!(style_value(&list, StyleDialect::Scss), "(1px, 2px, 3px)");
        assert_eq!(style_value(&list, StyleDialect::Sass), "(1px, 2px, 3px)");
        assert_eq!(style_value(&list, StyleDialect::Less), "1px, 2px, 3px");
        assert_eq!(style_value(&list, StyleDialect::Styl), "1px 2px 3px");
    }

    #[test]
    fn test_short_lists() {
        assert_eq!(scss(json!([])), "()");
        assert_eq!(scss(json!(["a"])), "(a,)");
        assert_eq!(style_value(&json!([]), StyleDialect::Less), "~\"\"");
        assert_eq!(
            style_value(&json!([[1, 2], 3]), StyleDialect::Styl),
            "(1 2) 3"
        );
    }

    #[test]
    fn test_objects_in_leaf_position() {
        let value = json!([{"w": "10px", "h": "20px"}]);
        assert_eq!(scss(value.clone()), "((w: 10px, h: 20px),)");
        assert_eq!(style_value(&value, StyleDialect::Less), "null");
        assert_eq!(style_value(&json!({"a": 1}), StyleDialect::Styl), "null");
    }
}
