//! Argument extraction helpers shared by capability implementations.
//!
//! Typed extraction from the argument map with user-friendly error messages
//! returned as [`CapabilityError::Validation`] (not panics or unwraps).
//! Presence of required arguments is checked upstream against the schema;
//! these helpers guard against null, empty, and mistyped values.

use serde_json::{Map, Value};

use crate::errors::CapabilityError;

/// Extract a required string argument.
///
/// Errors if the argument is missing, null, empty, or the wrong type.
pub fn required_string(args: &Map<String, Value>, name: &str) -> Result<String, CapabilityError> {
    match args.get(name) {
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        Some(Value::String(_) | Value::Null) | None => Err(CapabilityError::Validation {
            message: format!("missing required argument '{name}'"),
        }),
        Some(_) => Err(CapabilityError::Validation {
            message: format!("argument '{name}' must be a string"),
        }),
    }
}

/// Extract an optional string argument.
///
/// Null, missing, and mistyped values all read as absent.
pub fn optional_string(args: &Map<String, Value>, name: &str) -> Option<String> {
    args.get(name).and_then(Value::as_str).map(String::from)
}

/// Extract a required integer argument.
pub fn required_integer(args: &Map<String, Value>, name: &str) -> Result<i64, CapabilityError> {
    match args.get(name) {
        Some(value) => value.as_i64().ok_or_else(|| CapabilityError::Validation {
            message: format!("argument '{name}' must be an integer"),
        }),
        None => Err(CapabilityError::Validation {
            message: format!("missing required argument '{name}'"),
        }),
    }
}
