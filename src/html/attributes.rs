//! HTML attribute serialization.

use crate::html::escape::escape_once;
use crate::value::{merge, Value, ValueMap};

/// Render a single attribute as ` key="value"`.
///
/// Null and empty-string values produce nothing at all.
pub fn attribute_to_html(key: &str, value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) if s.is_empty() => String::new(),
        _ => format!(" {}=\"{}\"", key, escape_once(value)),
    }
}

/// Serialize every attribute of `attributes` in iteration order.
pub fn to_html(attributes: &ValueMap) -> String {
    attributes
        .iter()
        .map(|(key, value)| attribute_to_html(key, value))
        .collect()
}

/// Merge `overrides` over `defaults` and serialize the result.
pub fn merged_to_html(defaults: &ValueMap, overrides: &ValueMap) -> String {
    to_html(&merge(defaults, overrides))
}
