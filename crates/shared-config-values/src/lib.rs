//! Leaf value classification and key naming conventions.
//!
//! Both halves are pure functions of their input: the classifier decides what
//! a raw leaf string means (number, unit-bearing number, quoted literal,
//! url/path...), and the key formatter renames a key into a target-language
//! identifier convention.

mod classify;
mod key_format;

pub use classify::{
    classify, is_path_or_url, numeric_part, strip_quotes, ValueKind, UNITS,
};
pub use key_format::{format_key, KeyFormat, KeyFormatError};
