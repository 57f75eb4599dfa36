//! Deep merge of config trees
//!
//! - Objects: deep-merge by key (recursive), existing keys keep their position
//! - Arrays: REPLACE (last wins)
//! - Scalars: override (last wins)

use serde_json::{Map, Value};

/// Deep merge `overlay` into `base`; overlay keys win at every depth.
pub fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut base_map), Value::Object(overlay_map)) => {
            for (key, overlay_value) in overlay_map {
                // get_mut rather than remove: removal reorders an ordered map
                match base_map.get_mut(&key) {
                    Some(slot) => {
                        let base_value = slot.take();
                        *slot = deep_merge(base_value, overlay_value);
                    }
                    None => {
                        base_map.insert(key, overlay_value);
                    }
                }
            }
            Value::Object(base_map)
        }

        // Arrays, scalars, null and mismatched kinds: overlay wins
        (_, overlay) => overlay,
    }
}

/// Merge trees in order, later trees taking precedence.
///
/// Merging nothing yields an empty object.
pub fn merge_all<I>(trees: I) -> Value
where
    I: IntoIterator<Item = Value>,
{
    trees
        .into_iter()
        .fold(Value::Object(Map::new()), deep_merge)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_later_source_wins() {
        let result = merge_all(vec![json!({"x": 1}), json!({"x": 2, "y": 3})]);
        assert_eq!(result, json!({"x": 2, "y": 3}));
    }

    #[test]
    fn test_nested_deep_merge() {
        let base = json!({
            "theme": {
                "colors": {
                    "primary": "#000",
                    "secondary": "#333"
                }
            }
        });
        let overlay = json!({
            "theme": {
                "colors": {
                    "secondary": "#fff",
                    "accent": "red"
                }
            }
        });
        let result = deep_merge(base, overlay);

        assert_eq!(result["theme"]["colors"]["primary"], "#000");
        assert_eq!(result["theme"]["colors"]["secondary"], "#fff");
        assert_eq!(result["theme"]["colors"]["accent"], "red");
    }

    #[test]
    fn test_key_order_is_stable() {
        let base = json!({"a": 1, "b": 2, "c": 3});
        let overlay = json!({"a": 10, "d": 4});
        let result = deep_merge(base, overlay);

        let keys: Vec<&String> = result.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["a", "b", "c", "d"]);
        assert_eq!(result["a"], 10);
    }

    #[test]
    fn test_array_replace() {
        let result = deep_merge(json!({"sizes": [1, 2, 3]}), json!({"sizes": [4]}));
        assert_eq!(result, json!({"sizes": [4]}));
    }

    #[test]
    fn test_object_replaces_scalar() {
        let result = deep_merge(json!({"font": "Arial"}), json!({"font": {"family": "Arial"}}));
        assert_eq!(result, json!({"font": {"family": "Arial"}}));
    }

    #[test]
    fn test_merge_nothing() {
        assert_eq!(merge_all(Vec::new()), json!({}));
    }
}
