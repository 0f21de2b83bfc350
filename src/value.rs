//! Dynamic values carried by widget options and HTML attributes.
//!
//! Both options and attributes are insertion-ordered JSON maps. Re-inserting
//! an existing key keeps the key where it was and replaces its value, which is
//! the merge rule attribute serialization relies on.

pub use serde_json::{json, Value};

/// Insertion-ordered map of option or attribute values.
pub type ValueMap = serde_json::Map<String, Value>;

/// Coerce a value to the string form used in rendered HTML.
pub fn value_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(true) => "1".to_string(),
        Value::Bool(false) => String::new(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Merge `overrides` into a copy of `base`. Keys already present in `base`
/// keep their position; new keys are appended in the order they appear.
pub fn merge(base: &ValueMap, overrides: &ValueMap) -> ValueMap {
    let mut merged = base.clone();
    for (key, value) in overrides {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

/// Build a [`ValueMap`] from key/value pairs.
pub fn value_map<K, V, I>(pairs: I) -> ValueMap
where
    K: Into<String>,
    V: Into<Value>,
    I: IntoIterator<Item = (K, V)>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
