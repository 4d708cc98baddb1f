//! Rendering a remap result as text.

use std::fmt::{Display, Write as _};

use clap::ValueEnum;
use serde::Serialize;

use crate::error::{RemapError, Result};
use crate::mapping::Remapped;

/// How a result is written out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputStyle {
    /// Human-readable record, e.g. `{ a: 'ABC1', b: undefined }`.
    #[default]
    Record,
    /// Pretty-printed JSON object; absent values become `null`.
    Json,
    /// YAML mapping; absent values become `null`.
    Yaml,
}

/// Marker printed in record style for a value whose lookup failed.
pub const ABSENT_MARKER: &str = "undefined";

/// Render `result` in the given style, keeping entry order.
///
/// # Errors
///
/// Returns [`RemapError::Render`] if JSON or YAML serialization fails.
pub fn render<K, W>(result: &Remapped<K, W>, style: OutputStyle) -> Result<String>
where
    K: Display + Serialize,
    W: Display + Serialize,
{
    match style {
        OutputStyle::Record => Ok(render_record(result)),
        OutputStyle::Json => serde_json::to_string_pretty(result)
            .map_err(|e| RemapError::Render(e.to_string())),
        OutputStyle::Yaml => serde_yaml::to_string(result)
            .map(|yaml| yaml.trim_end().to_string())
            .map_err(|e| RemapError::Render(e.to_string())),
    }
}

fn render_record<K: Display, W: Display>(result: &Remapped<K, W>) -> String {
    if result.is_empty() {
        return "{}".to_string();
    }

    let mut out = String::from("{ ");
    for (i, (key, value)) in result.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let key = key.to_string();
        if is_identifier(&key) {
            out.push_str(&key);
        } else {
            out.push_str(&quote(&key));
        }
        out.push_str(": ");
        match value {
            Some(v) => out.push_str(&quote(&v.to_string())),
            None => out.push_str(ABSENT_MARKER),
        }
    }
    out.push_str(" }");
    out
}

/// Keys of the form `[A-Za-z_][A-Za-z0-9_]*` are written bare.
fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Quote `text`, preferring `'`, then `"`, then a backtick when the
/// preferred characters appear in the text.
fn quote(text: &str) -> String {
    let delimiter = if !text.contains('\'') {
        '\''
    } else if !text.contains('"') {
        '"'
    } else if !text.contains('`') && !text.contains("${") {
        '`'
    } else {
        '\''
    };

    let mut out = String::with_capacity(text.len() + 2);
    out.push(delimiter);
    for c in text.chars() {
        match c {
            c if c == delimiter => {
                out.push('\\');
                out.push(c);
            }
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(out, "\\x{:02X}", u32::from(c));
            }
            c => out.push(c),
        }
    }
    out.push(delimiter);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::Mapping;

    fn result(pairs: &[(&str, Option<&str>)]) -> Remapped<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), v.map(str::to_string)))
            .collect()
    }

    #[test]
    fn record_matches_reference_output() {
        let r = result(&[("a", Some("ABC1")), ("b", Some("BCD1")), ("c", Some("DEF1"))]);
        assert_eq!(
            render(&r, OutputStyle::Record).unwrap(),
            "{ a: 'ABC1', b: 'BCD1', c: 'DEF1' }"
        );
    }

    #[test]
    fn record_shows_absent_values() {
        let r = result(&[("a", Some("ABC1")), ("b", None)]);
        assert_eq!(render(&r, OutputStyle::Record).unwrap(), "{ a: 'ABC1', b: undefined }");
    }

    #[test]
    fn record_of_empty_result() {
        let r: Remapped<String, String> = Mapping::new();
        assert_eq!(render(&r, OutputStyle::Record).unwrap(), "{}");
    }

    #[test]
    fn record_quotes_awkward_keys_and_values() {
        let r =
            result(&[("first name", Some("plain")), ("2nd", Some("a\\b")), ("$a", Some("x"))]);
        assert_eq!(
            render(&r, OutputStyle::Record).unwrap(),
            r"{ 'first name': 'plain', '2nd': 'a\\b', '$a': 'x' }"
        );
    }

    #[test]
    fn record_switches_quote_character_around_quotes() {
        let r = result(&[
            ("a", Some("O'Neil")),
            ("b", Some(r#"say "it's""#)),
            ("c", Some("'\"`")),
        ]);
        assert_eq!(
            render(&r, OutputStyle::Record).unwrap(),
            r#"{ a: "O'Neil", b: `say "it's"`, c: '\'"`' }"#
        );
    }

    #[test]
    fn record_quotes_dollar_key_and_double_quotes_apostrophe() {
        let r = result(&[("$a", Some("O'Neil"))]);
        assert_eq!(render(&r, OutputStyle::Record).unwrap(), r#"{ '$a': "O'Neil" }"#);
    }

    #[test]
    fn json_uses_null_for_absent_and_keeps_order() {
        let r = result(&[("b", None), ("a", Some("ABC1"))]);
        assert_eq!(
            render(&r, OutputStyle::Json).unwrap(),
            "{\n  \"b\": null,\n  \"a\": \"ABC1\"\n}"
        );
    }

    #[test]
    fn yaml_uses_null_for_absent() {
        let r = result(&[("a", Some("ABC1")), ("b", None)]);
        assert_eq!(render(&r, OutputStyle::Yaml).unwrap(), "a: ABC1\nb: null");
    }

    #[test]
    fn identifiers() {
        assert!(is_identifier("a"));
        assert!(is_identifier("_private1"));
        assert!(!is_identifier("$a"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("1a"));
        assert!(!is_identifier("a-b"));
    }
}
