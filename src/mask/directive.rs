//! Mask leaf directives

use serde_json::{Map, Value};

/// Prefix of the level-limiting directive, `allowLevel-N`
pub const ALLOW_LEVEL_PREFIX: &str = "allowLevel-";

/// What a mask entry asks for
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MaskDirective<'a> {
    /// `true`: keep the whole subtree as-is
    Include,
    /// An object: recurse with this sub-mask
    Nested(&'a Map<String, Value>),
    /// `"allowLevel-N"`: keep only the first N levels
    AllowLevel(usize),
}

impl<'a> MaskDirective<'a> {
    /// Interpret a mask entry. `None` means the entry is invalid; `false` is
    /// invalid too, absence is how a key is excluded.
    pub fn parse(entry: &'a Value) -> Option<Self> {
        match entry {
            Value::Bool(true) => Some(MaskDirective::Include),
            Value::Object(sub_mask) => Some(MaskDirective::Nested(sub_mask)),
            Value::String(s) => s
                .strip_prefix(ALLOW_LEVEL_PREFIX)
                .filter(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()))
                .and_then(|n| n.parse().ok())
                .map(MaskDirective::AllowLevel),
            _ => None,
        }
    }
}

/// Keep the first `levels` levels of a subtree.
///
/// Direct children of an object sit at level 1. Leaves deeper than `levels`
/// are removed, and objects emptied by that removal are dropped. Objects that
/// were empty to begin with are kept. Zero levels always yields an empty
/// object; otherwise non-object values are returned as-is.
pub fn truncate(value: &Value, levels: usize) -> Value {
    match value {
        _ if levels == 0 => Value::Object(Map::new()),
        Value::Object(map) => Value::Object(truncate_object(map, levels)),
        other => other.clone(),
    }
}

fn truncate_object(map: &Map<String, Value>, levels: usize) -> Map<String, Value> {
    let mut out = Map::new();
    if levels == 0 {
        return out;
    }

    for (key, value) in map {
        match value {
            Value::Object(child) if !child.is_empty() => {
                let truncated = truncate_object(child, levels - 1);
                if !truncated.is_empty() {
                    out.insert(key.clone(), Value::Object(truncated));
                }
            }
            _ => {
                out.insert(key.clone(), value.clone());
            }
        }
    }
    out
}
