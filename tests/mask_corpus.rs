//! Mask filter corpus
//!
//! Each case is (description, source, mask, allowUnknownLevels, expected,
//! expected diagnostics).

use serde_json::{json, Value};
use shared_config::{apply_mask, Diagnostics};

struct Case {
    description: &'static str,
    src: Value,
    mask: Value,
    allow_unknown_levels: u32,
    expected: Value,
    diagnostics: &'static [&'static str],
}

fn corpus() -> Vec<Case> {
    let src = json!({
        "colors": {"primary": "#fff", "secondary": "#000", "shades": {"light": "#eee", "dark": "#111"}},
        "sizes": {"small": "4px", "large": "16px"},
        "secret": "hunter2"
    });

    vec![
        Case {
            description: "true keeps whole subtree",
            src: src.clone(),
            mask: json!({"colors": true}),
            allow_unknown_levels: 0,
            expected: json!({"colors": {"primary": "#fff", "secondary": "#000", "shades": {"light": "#eee", "dark": "#111"}}}),
            diagnostics: &[],
        },
        Case {
            description: "nested mask selects leaves",
            src: src.clone(),
            mask: json!({"colors": {"primary": true, "shades": {"dark": true}}, "sizes": {"large": true}}),
            allow_unknown_levels: 0,
            expected: json!({"colors": {"primary": "#fff", "shades": {"dark": "#111"}}, "sizes": {"large": "16px"}}),
            diagnostics: &[],
        },
        Case {
            description: "allowLevel truncates",
            src: src.clone(),
            mask: json!({"colors": "allowLevel-1"}),
            allow_unknown_levels: 0,
            expected: json!({"colors": {"primary": "#fff", "secondary": "#000"}}),
            diagnostics: &[],
        },
        Case {
            description: "allowLevel deeper than tree keeps everything",
            src: src.clone(),
            mask: json!({"sizes": "allowLevel-5"}),
            allow_unknown_levels: 0,
            expected: json!({"sizes": {"small": "4px", "large": "16px"}}),
            diagnostics: &[],
        },
        Case {
            description: "allowLevel-0 yields an empty object for any value",
            src: src.clone(),
            mask: json!({"colors": "allowLevel-0", "secret": "allowLevel-0"}),
            allow_unknown_levels: 0,
            expected: json!({"colors": {}, "secret": {}}),
            diagnostics: &[],
        },
        Case {
            description: "unknown root keys kept with one allowed level",
            src: src.clone(),
            mask: json!({"colors": {"primary": true}}),
            allow_unknown_levels: 1,
            expected: json!({"colors": {"primary": "#fff"}, "sizes": {"small": "4px", "large": "16px"}, "secret": "hunter2"}),
            diagnostics: &[],
        },
        Case {
            description: "unknown nested keys kept with two allowed levels",
            src: src.clone(),
            mask: json!({"colors": {"primary": true}}),
            allow_unknown_levels: 2,
            expected: json!({
                "colors": {"primary": "#fff", "secondary": "#000", "shades": {"light": "#eee", "dark": "#111"}},
                "sizes": {"small": "4px", "large": "16px"},
                "secret": "hunter2"
            }),
            diagnostics: &[],
        },
        Case {
            description: "invalid directives are dropped and reported",
            src: src.clone(),
            mask: json!({"colors": {"primary": "yes", "secondary": false}, "sizes": "allowLevel-", "secret": 1}),
            allow_unknown_levels: 0,
            expected: json!({}),
            diagnostics: &[
                "INVALID_MASK_DIRECTIVE:colors.primary",
                "INVALID_MASK_DIRECTIVE:colors.secondary",
                "INVALID_MASK_DIRECTIVE:sizes",
                "INVALID_MASK_DIRECTIVE:secret",
            ],
        },
        Case {
            description: "object mask over a leaf",
            src: src.clone(),
            mask: json!({"secret": {"x": true}, "sizes": {"small": true}}),
            allow_unknown_levels: 0,
            expected: json!({"sizes": {"small": "4px"}}),
            diagnostics: &["MASK_SHAPE_MISMATCH:secret"],
        },
        Case {
            description: "mask keys absent from source add nothing",
            src: src.clone(),
            mask: json!({"missing": true, "sizes": {"huge": true}}),
            allow_unknown_levels: 0,
            expected: json!({}),
            diagnostics: &[],
        },
        Case {
            description: "empty mask removes everything",
            src,
            mask: json!({}),
            allow_unknown_levels: 0,
            expected: json!({}),
            diagnostics: &[],
        },
    ]
}

#[test]
fn test_mask_corpus() {
    for case in corpus() {
        let mut diagnostics = Diagnostics::new();
        let result = apply_mask(&case.src, &case.mask, case.allow_unknown_levels, &mut diagnostics);

        assert_eq!(result, case.expected, "{}", case.description);
        assert_eq!(diagnostics.machine_strings(), case.diagnostics, "{}", case.description);
    }
}

#[test]
fn test_mask_result_is_subset_with_source_order() {
    for case in corpus() {
        let mut diagnostics = Diagnostics::new();
        let result = apply_mask(&case.src, &case.mask, case.allow_unknown_levels, &mut diagnostics);
        assert_subset(&result, &case.src, case.description);
    }
}

fn assert_subset(result: &Value, src: &Value, description: &str) {
    // allowLevel-0 replaces any value with an empty object
    if result.as_object().is_some_and(|m| m.is_empty()) {
        return;
    }
    let (Value::Object(result), Value::Object(src)) = (result, src) else {
        assert_eq!(result, src, "{}", description);
        return;
    };

    let src_keys: Vec<&String> = src.keys().filter(|k| result.contains_key(*k)).collect();
    let result_keys: Vec<&String> = result.keys().collect();
    assert_eq!(result_keys, src_keys, "{}: key order", description);

    for (key, value) in result {
        assert_subset(value, &src[key], description);
    }
}
