//! Script and data wrappers around the normalized tree

use serde_json::Value;

use super::{indent_continuation, to_json_text};
use crate::config::Options;
use crate::normalize::normalize;

/// Template used for `.js` destinations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptWrapper {
    /// `var name = {...};`
    Plain,
    /// `define( function() { return {...}; } );`
    Amd,
    /// `angular.module( "module" ).constant( "name", {...} );`
    AngularConstant,
}

impl ScriptWrapper {
    pub fn for_options(options: &Options) -> Self {
        if options.ngconstant {
            ScriptWrapper::AngularConstant
        } else if options.amd {
            ScriptWrapper::Amd
        } else {
            ScriptWrapper::Plain
        }
    }
}

/// Render a tree as a script module
pub fn render_script(tree: &Value, wrapper: ScriptWrapper, options: &Options) -> String {
    let normalized = normalize(tree, options.js_format);
    let literal = to_json_text(&normalized, &options.indention, options.singlequote);
    let indent = &options.indention;

    match wrapper {
        ScriptWrapper::Plain => format!("var {} = {};\n", options.name, literal),
        ScriptWrapper::Amd => format!(
            "define( function() {{\n\n{}return {};\n\n}} );\n",
            indent,
            indent_continuation(&literal, indent)
        ),
        ScriptWrapper::AngularConstant => {
            let quote = if options.singlequote { '\'' } else { '"' };
            let dependencies = if options.new_module { ", []" } else { "" };
            format!(
                "angular.module( {q}{module}{q}{deps} )\n{indent}.constant( {q}{name}{q}, {literal} );\n",
                q = quote,
                module = options.module,
                deps = dependencies,
                indent = indent,
                name = options.name,
                literal = indent_continuation(&literal, indent),
            )
        }
    }
}

/// Render a tree as a plain JSON document.
///
/// Always double quoted so the file stays valid JSON.
pub fn render_json(tree: &Value, options: &Options) -> String {
    let normalized = normalize(tree, options.js_format);
    format!("{}\n", to_json_text(&normalized, &options.indention, false))
}
