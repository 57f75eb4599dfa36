//! JSON literal text with configurable indentation and quote character

use serde::Serialize;
use serde_json::ser::{CharEscape, CompactFormatter, Formatter, PrettyFormatter};
use serde_json::{Serializer, Value};
use std::io;

/// Serialize a value as a JSON literal.
///
/// An empty `indent` produces compact output. With `single_quote`, strings
/// and keys are delimited by `'`, embedded `'` are escaped and `"` is left
/// bare.
pub fn to_json_text(value: &Value, indent: &str, single_quote: bool) -> String {
    let quote = if single_quote { b'\'' } else { b'"' };
    if indent.is_empty() {
        write_with(value, QuoteFormatter::new(CompactFormatter, quote))
    } else {
        write_with(
            value,
            QuoteFormatter::new(PrettyFormatter::with_indent(indent.as_bytes()), quote),
        )
    }
}

fn write_with<F: Formatter>(value: &Value, formatter: F) -> String {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut serializer)
        .expect("a Value always serializes into memory");
    String::from_utf8_lossy(&buf).into_owned()
}

/// Wraps another formatter, replacing the string delimiter
struct QuoteFormatter<F> {
    inner: F,
    quote: u8,
}

impl<F: Formatter> QuoteFormatter<F> {
    fn new(inner: F, quote: u8) -> Self {
        QuoteFormatter { inner, quote }
    }

    fn single(&self) -> bool {
        self.quote == b'\''
    }
}

impl<F: Formatter> Formatter for QuoteFormatter<F> {
    fn begin_string<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        writer.write_all(&[self.quote])
    }

    fn end_string<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        writer.write_all(&[self.quote])
    }

    fn write_string_fragment<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        if !self.single() {
            return self.inner.write_string_fragment(writer, fragment);
        }
        for (i, part) in fragment.split('\'').enumerate() {
            if i > 0 {
                writer.write_all(b"\\'")?;
            }
            writer.write_all(part.as_bytes())?;
        }
        Ok(())
    }

    fn write_char_escape<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        char_escape: CharEscape,
    ) -> io::Result<()> {
        match char_escape {
            CharEscape::Quote if self.single() => writer.write_all(b"\""),
            other => self.inner.write_char_escape(writer, other),
        }
    }

    fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_array(writer)
    }

    fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.inner.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object(writer)
    }

    fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.inner.begin_object_key(writer, first)
    }

    fn end_object_key<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object_key(writer)
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object_value(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pretty_with_tabs() {
        let value = json!({"a": 1, "b": [true, null], "c": {}});
        assert_eq!(
            to_json_text(&value, "\t", false),
            "{\n\t\"a\": 1,\n\t\"b\": [\n\t\ttrue,\n\t\tnull\n\t],\n\t\"c\": {}\n}"
        );
    }

    #[test]
    fn test_compact_when_indent_empty() {
        let value = json!({"a": [1, 0.5], "b": "x"});
        assert_eq!(to_json_text(&value, "", false), "{\"a\":[1,0.5],\"b\":\"x\"}");
    }

    #[test]
    fn test_single_quotes() {
        let value = json!({"it's": "say \"hi\""});
        assert_eq!(to_json_text(&value, "", true), "{'it\\'s':'say \"hi\"'}");
        assert_eq!(
            to_json_text(&value, "  ", true),
            "{\n  'it\\'s': 'say \"hi\"'\n}"
        );
    }

    #[test]
    fn test_double_quotes_escape_as_usual() {
        let value = json!(["it's", "a \"b\"", "line\nbreak"]);
        assert_eq!(
            to_json_text(&value, "", false),
            "[\"it's\",\"a \\\"b\\\"\",\"line\\nbreak\"]"
        );
    }

    #[test]
    fn test_single_quotes_keep_other_escapes() {
        assert_eq!(to_json_text(&json!("a\\b\tc"), "", true), "'a\\\\b\\tc'");
    }
}
