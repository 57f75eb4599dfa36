//! Value normalization for script and JSON output
//!
//! Rewrites string leaves into their typed form and renames every key into
//! the script key convention. This is the only place where a leaf's type
//! changes: `"50%"` becomes `0.5`, `"10px"` becomes `10`, `'"hi"'` becomes
//! `"hi"`. Native numbers, booleans and null keep their type.

use serde_json::{Number, Value};
use shared_config_values::{classify, format_key, numeric_part, strip_quotes, KeyFormat, ValueKind};

/// Normalize a tree, producing a new one.
pub fn normalize(tree: &Value, format: KeyFormat) -> Value {
    match tree {
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, value)| (format_key(key, format), normalize(value, format)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.iter().map(|v| normalize(v, format)).collect()),
        Value::String(raw) => normalize_leaf(raw),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() => js_number(f),
            _ => tree.clone(),
        },
        Value::Bool(_) | Value::Null => tree.clone(),
    }
}

/// Normalize one raw string leaf.
pub fn normalize_leaf(raw: &str) -> Value {
    let normalized = match classify(raw) {
        ValueKind::Percentage => numeric_part(raw).map(|n| js_number(n / 100.0)),
        ValueKind::Numeric | ValueKind::UnitNumeric => {
            numeric_part(raw).map(|n| js_number(n.trunc()))
        }
        ValueKind::QuotedString => strip_quotes(raw).map(|inner| Value::String(inner.to_string())),
        _ => None,
    };
    normalized.unwrap_or_else(|| Value::String(raw.to_string()))
}

/// A number as a script host would hold it: integral values are integers.
pub fn js_number(n: f64) -> Value {
    const MAX_SAFE: f64 = 9_007_199_254_740_991.0;

    if n.fract() == 0.0 && n.abs() <= MAX_SAFE {
        Value::Number(Number::from(n as i64))
    } else {
        Number::from_f64(n).map(Value::Number).unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_leaf_rules() {
        assert_eq!(normalize_leaf("50%"), json!(0.5));
        assert_eq!(normalize_leaf("100%"), json!(1));
        assert_eq!(normalize_leaf("12.5%"), json!(0.125));
        assert_eq!(normalize_leaf("10px"), json!(10));
        assert_eq!(normalize_leaf("-1.5em"), json!(-1));
        assert_eq!(normalize_leaf("3.75"), json!(3));
        assert_eq!(normalize_leaf("\"hello\""), json!("hello"));
        assert_eq!(normalize_leaf("'hello'"), json!("hello"));
        assert_eq!(normalize_leaf("true"), json!("true"));
        assert_eq!(normalize_leaf("#fff"), json!("#fff"));
        assert_eq!(normalize_leaf(""), json!(""));
    }

    #[test]
    fn test_keys_renamed_and_order_kept() {
        let tree = json!({"base-size": "16px", "font-family": "Arial", "alpha": 1});
        let result = normalize(&tree, KeyFormat::Uppercase);

        assert_eq!(result, json!({"BASE_SIZE": 16, "FONT_FAMILY": "Arial", "ALPHA": 1}));
        let keys: Vec<&String> = result.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["BASE_SIZE", "FONT_FAMILY", "ALPHA"]);
    }

    #[test]
    fn test_arrays_and_nesting() {
        let tree = json!({"grid": {"gutter-width": "20px", "breakpoints": ["480px", "50%", {"max-width": "1200px"}]}});
        assert_eq!(
            normalize(&tree, KeyFormat::CamelCase),
            json!({"grid": {"gutterWidth": 20, "breakpoints": [480, 0.5, {"maxWidth": 1200}]}})
        );
    }

    #[test]
    fn test_native_types_kept() {
        let tree = json!({"flag": true, "ratio": 0.25, "count": 3, "none": null, "whole": 2.0});
        assert_eq!(
            normalize(&tree, KeyFormat::CamelCase),
            json!({"flag": true, "ratio": 0.25, "count": 3, "none": null, "whole": 2})
        );
    }

    #[test]
    fn test_idempotent() {
        let tree = json!({"MY_KEY": {"NESTED_KEY": [1, 0.5, "plain", true]}, "OTHER": "#fff"});
        let once = normalize(&tree, KeyFormat::Uppercase);
        assert_eq!(once, tree);
        assert_eq!(normalize(&once, KeyFormat::Uppercase), once);
    }
}
