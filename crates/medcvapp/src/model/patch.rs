//! Shared plumbing for partial updates.
//!
//! Every record type has a matching `*Patch` struct whose fields are all `Option`s: `None` leaves
//! the record field alone, `Some(v)` overwrites it. Optional record fields treat a blank
//! overwrite as "clear". Presentation layers address single fields by their camelCase wire name,
//! so [`from_field`] builds a one-field patch through serde and lets the patch type's
//! `deny_unknown_fields` reject typos.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::error::{ResumeError, Result};

/// `Some` only when the value has visible content.
pub fn non_empty(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

pub(crate) fn set(target: &mut String, value: &Option<String>) {
    if let Some(v) = value {
        *target = v.clone();
    }
}

pub(crate) fn set_optional(target: &mut Option<String>, value: &Option<String>) {
    if let Some(v) = value {
        *target = non_empty(v);
    }
}

/// Names of the fields in `fields` whose value is blank.
pub(crate) fn blank_fields(fields: &[(&'static str, &str)]) -> Vec<&'static str> {
    fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect()
}

/// Builds a patch that touches exactly one field, addressed by wire name.
pub fn from_field<P: DeserializeOwned>(target: &str, field: &str, value: &str) -> Result<P> {
    let mut object = Map::new();
    object.insert(field.to_string(), Value::String(value.to_string()));
    serde_json::from_value(Value::Object(object)).map_err(|e| {
        let message = e.to_string();
        if message.starts_with("unknown field") {
            ResumeError::UnknownField {
                target: target.to_string(),
                field: field.to_string(),
            }
        } else {
            ResumeError::InvalidValue {
                field: field.to_string(),
                reason: message,
            }
        }
    })
}

/// Accepts a JSON bool or the strings yes/no/true/false/on/off/1/0.
pub(crate) fn flexible_bool<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Option<bool>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Bool(bool),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Bool(b) => Ok(Some(b)),
        Raw::Text(text) => match text.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => Ok(Some(true)),
            "false" | "no" | "off" | "0" | "" => Ok(Some(false)),
            other => Err(serde::de::Error::custom(format!(
                "expected yes or no, got '{}'",
                other
            ))),
        },
    }
}
