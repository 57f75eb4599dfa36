//! Mask filter
//!
//! Projects a config tree through a mask tree, producing a subset: every
//! key kept exists at the same path in the source, values are never altered
//! and sibling order is preserved.
//!
//! Per source key `k` at depth `d` (the root object is depth 0):
//! - no mask entry: kept verbatim only if `allow_unknown_levels > d`
//! - `true`: kept verbatim
//! - object: the source value must be an object; recurse at `d + 1`
//! - `"allowLevel-N"`: kept truncated to N levels
//! - anything else (including `false`): dropped and reported

mod directive;
mod spec;

pub use directive::{truncate, MaskDirective, ALLOW_LEVEL_PREFIX};
pub use spec::{resolve_mask, MaskSource, MaskSpec};

use serde_json::{Map, Value};

use crate::diagnostics::{DiagnosticKind, Diagnostics};

/// Apply a mask to a source tree.
///
/// A source that is not an object has no keys to project and yields an
/// empty object. A mask that is not an object is reported and masks
/// everything out.
pub fn apply_mask(
    src: &Value,
    mask: &Value,
    allow_unknown_levels: u32,
    diagnostics: &mut Diagnostics,
) -> Value {
    let Value::Object(src) = src else {
        return Value::Object(Map::new());
    };
    let Value::Object(mask) = mask else {
        diagnostics.push(DiagnosticKind::InvalidMaskDirective {
            key_path: String::new(),
            directive: mask.to_string(),
        });
        return Value::Object(Map::new());
    };

    let mut filter = MaskFilter {
        allow_unknown_levels,
        diagnostics,
    };
    Value::Object(filter.mask_object(src, mask, 0, ""))
}

struct MaskFilter<'d> {
    allow_unknown_levels: u32,
    diagnostics: &'d mut Diagnostics,
}

impl MaskFilter<'_> {
    fn mask_object(
        &mut self,
        src: &Map<String, Value>,
        mask: &Map<String, Value>,
        depth: u32,
        parent_path: &str,
    ) -> Map<String, Value> {
        let mut out = Map::new();

        for (key, value) in src {
            let key_path = if parent_path.is_empty() {
                key.clone()
            } else {
                format!("{}.{}", parent_path, key)
            };

            let Some(entry) = mask.get(key) else {
                if self.allow_unknown_levels > depth {
                    out.insert(key.clone(), value.clone());
                }
                continue;
            };

            match MaskDirective::parse(entry) {
                Some(MaskDirective::Include) => {
                    out.insert(key.clone(), value.clone());
                }
                Some(MaskDirective::Nested(sub_mask)) => {
                    let Value::Object(child) = value else {
                        self.diagnostics
                            .push(DiagnosticKind::MaskShapeMismatch { key_path });
                        continue;
                    };
                    let masked = self.mask_object(child, sub_mask, depth + 1, &key_path);
                    // An object emptied by masking is dropped, an empty source object is not
                    if !masked.is_empty() || child.is_empty() {
                        out.insert(key.clone(), Value::Object(masked));
                    }
                }
                Some(MaskDirective::AllowLevel(levels)) => {
                    out.insert(key.clone(), truncate(value, levels));
                }
                None => {
                    self.diagnostics.push(DiagnosticKind::InvalidMaskDirective {
                        key_path,
                        directive: entry.to_string(),
                    });
                }
            }
        }

        out
    }
}
