//! Reading mappings from argument text.
//!
//! This is the call boundary: anything that is not a flat mapping of string
//! keys to string values is rejected as [`RemapError::InvalidArgument`].
//! Values are never coerced, so `1` or `true` are errors rather than `"1"`.

use clap::ValueEnum;

use crate::error::{RemapError, Result};
use crate::mapping::Mapping;

/// Text format of a mapping argument.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// A JSON object, e.g. `{"a": "x"}`.
    #[default]
    Json,
    /// A YAML mapping, e.g. `{a: x}` or block style.
    Yaml,
}

/// Parse `text` as a flat string-to-string mapping, keeping key order.
///
/// `name` identifies the argument in error messages.
///
/// # Errors
///
/// Returns [`RemapError::InvalidArgument`] if the text is not valid in the
/// given format, is not a mapping, or contains non-string keys or values.
pub fn parse_mapping(
    name: &str,
    text: &str,
    format: InputFormat,
) -> Result<Mapping<String, String>> {
    match format {
        InputFormat::Json => parse_json(name, text),
        InputFormat::Yaml => parse_yaml(name, text),
    }
}

fn parse_json(name: &str, text: &str) -> Result<Mapping<String, String>> {
    let value: serde_json::Value = serde_json::from_str(text)
        .map_err(|e| RemapError::invalid(name, format!("not valid JSON: {e}")))?;
    let object = match value {
        serde_json::Value::Object(object) => object,
        other => {
            let reason = format!("expected a mapping, got {}", json_kind(&other));
            return Err(RemapError::invalid(name, reason));
        }
    };

    object
        .into_iter()
        .map(|(key, value)| match value {
            serde_json::Value::String(s) => Ok((key, s)),
            other => Err(RemapError::invalid(
                name,
                format!("value for key '{key}' must be a string, got {}", json_kind(&other)),
            )),
        })
        .collect()
}

fn parse_yaml(name: &str, text: &str) -> Result<Mapping<String, String>> {
    let value: serde_yaml::Value = serde_yaml::from_str(text)
        .map_err(|e| RemapError::invalid(name, format!("not valid YAML: {e}")))?;
    let mapping = match value {
        serde_yaml::Value::Mapping(mapping) => mapping,
        other => {
            let reason = format!("expected a mapping, got {}", yaml_kind(&other));
            return Err(RemapError::invalid(name, reason));
        }
    };

    mapping
        .into_iter()
        .map(|(key, value)| {
            let key = match key {
                serde_yaml::Value::String(key) => key,
                other => {
                    return Err(RemapError::invalid(
                        name,
                        format!("keys must be strings, got {}", yaml_kind(&other)),
                    ));
                }
            };
            match value {
                serde_yaml::Value::String(s) => Ok((key, s)),
                other => Err(RemapError::invalid(
                    name,
                    format!("value for key '{key}' must be a string, got {}", yaml_kind(&other)),
                )),
            }
        })
        .collect()
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "a nested mapping",
    }
}

fn yaml_kind(value: &serde_yaml::Value) -> &'static str {
    match value {
        serde_yaml::Value::Null => "null",
        serde_yaml::Value::Bool(_) => "a boolean",
        serde_yaml::Value::Number(_) => "a number",
        serde_yaml::Value::String(_) => "a string",
        serde_yaml::Value::Sequence(_) => "a sequence",
        serde_yaml::Value::Mapping(_) => "a nested mapping",
        serde_yaml::Value::Tagged(_) => "a tagged value",
    }
}
