//! Coercion of loosely-typed document values.

use crate::error::{ConfigError, Result};
use serde_json::Value;

/// Interpret a boolean-like document value.
///
/// Native JSON booleans pass through. Strings are matched
/// case-insensitively against the fixed spellings `yes`/`true`/`t`/`1`
/// and `no`/`false`/`f`/`0`. Anything else is a schema error naming the
/// offending field - never a silent default.
pub fn coerce_bool(value: &Value, field: &str) -> Result<bool> {
    match value {
        Value::Bool(b) => Ok(*b),
        Value::String(s) => match s.to_ascii_lowercase().as_str() {
            "yes" | "true" | "t" | "1" => Ok(true),
            "no" | "false" | "f" | "0" => Ok(false),
            _ => Err(ConfigError::Schema(format!(
                "Cannot interpret '{s}' as a boolean value of {field}"
            ))),
        },
        other => Err(ConfigError::Schema(format!(
            "Cannot interpret {other} as a boolean value of {field}"
        ))),
    }
}
