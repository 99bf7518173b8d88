//! Helpers for JSON objects and arrays.

use serde_json::{Map, Value};

/// New object with the fields of both; `right` wins on conflicts.
pub fn merge(left: &Map<String, Value>, right: &Map<String, Value>) -> Map<String, Value> {
    let mut out = left.clone();
    for (key, value) in right {
        out.insert(key.clone(), value.clone());
    }
    out
}

/// Like [`merge`], but nested objects present on both sides are merged
/// recursively. Any other value from `right` replaces the one from `left`.
pub fn deep_merge(left: &Value, right: &Value) -> Value {
    match (left, right) {
        (Value::Object(l), Value::Object(r)) => {
            let mut out = l.clone();
            for (key, value) in r {
                let merged = match out.get(key) {
                    Some(existing) => deep_merge(existing, value),
                    None => value.clone(),
                };
                out.insert(key.clone(), merged);
            }
            Value::Object(out)
        }
        _ => right.clone(),
    }
}

/// Entries matching `predicate`.
pub fn select_entries(
    map: &Map<String, Value>,
    mut predicate: impl FnMut(&str, &Value) -> bool,
) -> Map<String, Value> {
    map.iter()
        .filter(|(key, value)| predicate(key, value))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Copy of `items` without `null`s.
pub fn compact(items: &[Value]) -> Vec<Value> {
    items.iter().filter(|v| !v.is_null()).cloned().collect()
}

/// Flatten arbitrarily nested arrays into one level.
///
/// A non-array value flattens to itself.
pub fn flatten(value: &Value) -> Vec<Value> {
    let mut out = Vec::new();
    flatten_into(value, &mut out);
    out
}

fn flatten_into(value: &Value, out: &mut Vec<Value>) {
    match value {
        Value::Array(items) => {
            for item in items {
                flatten_into(item, out);
            }
        }
        other => out.push(other.clone()),
    }
}
