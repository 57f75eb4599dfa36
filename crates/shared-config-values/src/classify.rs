//! Leaf value classifier.
//!
//! Rules are evaluated in a fixed priority order and the first match wins.
//! Percentage is checked before the general unit rule because it is a
//! specialization of it; the remaining rules cannot overlap.

use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Unit suffixes accepted directly after a leading number.
pub const UNITS: &[&str] = &["em", "px", "s", "in", "mm", "cm", "pt", "pc", "%"];

/// What a raw leaf value semantically is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValueKind {
    /// Bare integer or decimal, optionally negative (`10`, `-2.5`)
    Numeric,
    /// Number immediately followed by a unit (`10px`, `1.5em`)
    UnitNumeric,
    /// Number followed by `%`
    Percentage,
    /// The text `true`, in any case
    BooleanLiteral,
    /// Enclosed in matching single or double quotes
    QuotedString,
    /// A url (`https://example.com/a`) or a slash separated path (`img/a.png`)
    PathOrUrl,
    /// Anything else
    Plain,
}

type Rule = (ValueKind, fn(&str) -> bool);

/// Classification rules in priority order.
const RULES: &[Rule] = &[
    (ValueKind::Percentage, is_percentage),
    (ValueKind::UnitNumeric, is_unit_numeric),
    (ValueKind::Numeric, is_numeric),
    (ValueKind::BooleanLiteral, is_boolean_literal),
    (ValueKind::QuotedString, is_quoted_string),
    (ValueKind::PathOrUrl, is_path_or_url),
];

/// Classify a raw leaf string.
pub fn classify(raw: &str) -> ValueKind {
    RULES
        .iter()
        .find(|(_, matches)| matches(raw))
        .map(|(kind, _)| *kind)
        .unwrap_or(ValueKind::Plain)
}

/// The leading numeric token of a numeric or unit-bearing value.
///
/// Returns `None` unless the whole string is a number with an optional unit.
pub fn numeric_part(raw: &str) -> Option<f64> {
    let number = unit_pattern()
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .or_else(|| is_numeric(raw).then_some(raw))?;
    number.parse().ok()
}

/// The inner text of a quoted literal, without its single pair of quotes.
pub fn strip_quotes(raw: &str) -> Option<&str> {
    let first = raw.chars().next()?;
    if raw.len() < 2 || !(first == '"' || first == '\'') || !raw.ends_with(first) {
        return None;
    }
    Some(&raw[1..raw.len() - 1])
}

fn number_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^-?(?:\d+(?:\.\d+)?|\.\d+)$").expect("number pattern compiles")
    })
}

fn unit_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let pattern = format!(r"^(-?(?:\d+(?:\.\d+)?|\.\d+))({})$", UNITS.join("|"));
        Regex::new(&pattern).expect("unit pattern compiles")
    })
}

fn url_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(concat!(
            r"^(?i)(?:https?|ftp)://",
            r"(?:[^\s:@/]+(?::[^\s@/]*)?@)?",
            r"(?P<host>",
            r"\d{1,3}(?:\.\d{1,3}){3}",
            r"|(?:[a-z0-9\x{a1}-\x{ffff}](?:[a-z0-9\x{a1}-\x{ffff}-]{0,61}[a-z0-9\x{a1}-\x{ffff}])?\.)+[a-z\x{a1}-\x{ffff}]{2,}\.?",
            r")",
            r"(?::\d{2,5})?",
            r"(?:[/?#]\S*)?$",
        ))
        .expect("url pattern compiles")
    })
}

fn path_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?:\.{1,2})?/?(?:[\w.~@%+-]+/)*[\w.~@%+-]+/?$")
            .expect("path pattern compiles")
    })
}

fn is_numeric(raw: &str) -> bool {
    number_pattern().is_match(raw)
}

fn is_unit_numeric(raw: &str) -> bool {
    unit_pattern().is_match(raw)
}

fn is_percentage(raw: &str) -> bool {
    raw.ends_with('%') && is_unit_numeric(raw)
}

fn is_boolean_literal(raw: &str) -> bool {
    raw.eq_ignore_ascii_case("true")
}

fn is_quoted_string(raw: &str) -> bool {
    strip_quotes(raw).is_some()
}

/// Url with a public host, or a bare slash separated filesystem path.
pub fn is_path_or_url(raw: &str) -> bool {
    is_url(raw) || (raw.contains('/') && path_pattern().is_match(raw))
}

fn is_url(raw: &str) -> bool {
    let Some(caps) = url_pattern().captures(raw) else {
        return false;
    };
    match caps.name("host").map(|m| parse_ipv4(m.as_str())) {
        Some(Some(octets)) => is_public_ipv4(octets),
        // Dotted digits that are not a valid address are not a hostname either
        Some(None) => !caps["host"].chars().all(|c| c.is_ascii_digit() || c == '.'),
        None => false,
    }
}

fn parse_ipv4(host: &str) -> Option<[u8; 4]> {
    let mut octets = [0u8; 4];
    let mut parts = host.split('.');
    for octet in octets.iter_mut() {
        *octet = parts.next()?.parse().ok()?;
    }
    parts.next().is_none().then_some(octets)
}

/// Excludes loopback, private, link-local, multicast and network/broadcast
/// addresses.
fn is_public_ipv4([a, b, _, d]: [u8; 4]) -> bool {
    if !(1..=223).contains(&a) || !(1..=254).contains(&d) {
        return false;
    }
    !matches!(
        (a, b),
        (10, _) | (127, _) | (169, 254) | (192, 168) | (172, 16..=31)
    )
}
