//! Coercion of loosely typed input (JSON values, command-line strings) into
//! the typed arguments stock operations take.

use serde_json::Value as JsonValue;

use crate::error::{DomainError, DomainResult};
use crate::value_object::ItemName;

/// Accept only a JSON string holding a non-empty item name.
pub fn item_from_value(value: &JsonValue) -> DomainResult<ItemName> {
    match value {
        JsonValue::String(s) => ItemName::new(s.as_str()),
        other => Err(DomainError::invalid_argument(format!(
            "item must be a string, got {}",
            kind(other)
        ))),
    }
}

/// Accept only a JSON integer that fits in `i64`.
///
/// Floats are rejected even when they have no fractional part.
pub fn quantity_from_value(value: &JsonValue) -> DomainResult<i64> {
    match value {
        JsonValue::Number(n) => n.as_i64().ok_or_else(|| {
            DomainError::invalid_argument(format!("qty must be an integer, got {n}"))
        }),
        other => Err(DomainError::invalid_argument(format!(
            "qty must be an integer, got {}",
            kind(other)
        ))),
    }
}

/// Parse a quantity typed on the command line.
pub fn quantity_from_str(raw: &str) -> DomainResult<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| DomainError::invalid_argument(format!("qty must be an integer, got '{raw}'")))
}

fn kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}
