//! Key naming conventions.
//!
//! Every `-` in a key is treated as a word break before the convention is
//! applied, so `my-key` becomes `my_key`, `MY_KEY`, `my-key` or `myKey`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier convention used for variable and property names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyFormat {
    /// `snake_case`
    Underscore,
    /// `SCREAMING_SNAKE`
    Uppercase,
    /// `kebab-case`
    Dash,
    /// `camelCase`
    CamelCase,
}

/// Unknown convention name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown key format '{0}' (expected one of: underscore, uppercase, dash, camelcase)")]
pub struct KeyFormatError(pub String);

impl KeyFormat {
    /// All conventions in declaration order.
    pub const ALL: [KeyFormat; 4] = [
        KeyFormat::Underscore,
        KeyFormat::Uppercase,
        KeyFormat::Dash,
        KeyFormat::CamelCase,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            KeyFormat::Underscore => "underscore",
            KeyFormat::Uppercase => "uppercase",
            KeyFormat::Dash => "dash",
            KeyFormat::CamelCase => "camelcase",
        }
    }
}

impl FromStr for KeyFormat {
    type Err = KeyFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KeyFormat::ALL
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| KeyFormatError(s.to_string()))
    }
}

impl fmt::Display for KeyFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rename a key into the given convention.
pub fn format_key(key: &str, format: KeyFormat) -> String {
    let spaced = key.replace('-', " ");

    match format {
        KeyFormat::Uppercase => spaced.to_uppercase().replace(' ', "_"),
        KeyFormat::Underscore => words(&split_camel(&spaced)).join("_").to_lowercase(),
        KeyFormat::Dash => words(&split_camel(&spaced)).join("-").to_lowercase(),
        KeyFormat::CamelCase => camel_case(&spaced),
    }
}

fn camel_case(spaced: &str) -> String {
    let mut out = String::with_capacity(spaced.len());
    for (i, word) in words(spaced).iter().enumerate() {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            if i == 0 {
                out.extend(first.to_lowercase());
            } else {
                out.extend(first.to_uppercase());
            }
            out.push_str(chars.as_str());
        }
    }
    out
}

/// Insert a space at each lower-to-upper case transition (`fooBar` -> `foo Bar`).
fn split_camel(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    let mut prev_lower = false;
    for c in s.chars() {
        if prev_lower && c.is_uppercase() {
            out.push(' ');
        }
        prev_lower = c.is_lowercase();
        out.push(c);
    }
    out
}

/// Split on whitespace and underscores, dropping any other punctuation.
fn words(s: &str) -> Vec<String> {
    s.split(|c: char| c.is_whitespace() || c == '_')
        .map(|w| w.chars().filter(|c| c.is_alphanumeric()).collect::<String>())
        .filter(|w| !w.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uppercase() {
        assert_eq!(format_key("my-key", KeyFormat::Uppercase), "MY_KEY");
        assert_eq!(format_key("fooBar", KeyFormat::Uppercase), "FOOBAR");
    }

    #[test]
    fn test_camelcase() {
        assert_eq!(format_key("my-key", KeyFormat::CamelCase), "myKey");
        assert_eq!(format_key("primary color", KeyFormat::CamelCase), "primaryColor");
        assert_eq!(format_key("FooBar", KeyFormat::CamelCase), "fooBar");
        assert_eq!(format_key("my_key", KeyFormat::CamelCase), "myKey");
    }

    #[test]
    fn test_underscore() {
        assert_eq!(format_key("my-key", KeyFormat::Underscore), "my_key");
        assert_eq!(format_key("fooBar", KeyFormat::Underscore), "foo_bar");
        assert_eq!(format_key("Base Font", KeyFormat::Underscore), "base_font");
    }

    #[test]
    fn test_dash() {
        assert_eq!(format_key("fooBar", KeyFormat::Dash), "foo-bar");
        assert_eq!(format_key("colors-primary", KeyFormat::Dash), "colors-primary");
        assert_eq!(format_key("font.size", KeyFormat::Dash), "fontsize");
    }

    #[test]
    fn test_already_formatted_keys_are_stable() {
        for format in KeyFormat::ALL {
            let once = format_key("base-font-size", format);
            assert_eq!(format_key(&once, format), once, "{}", format);
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("dash".parse::<KeyFormat>(), Ok(KeyFormat::Dash));
        assert!("kebab".parse::<KeyFormat>().is_err());
        assert_eq!("uppercase".parse::<KeyFormat>(), Ok(KeyFormat::Uppercase));
    }
}
