//! Bounded-depth search for "the" entity collection in an unknown payload.

use serde_json::Value;

/// Container keys conventionally holding a collection of entities, probed
/// in this priority order before any other key is considered.
const CONTAINER_KEYS: [&str; 17] = [
    "items",
    "comments",
    "data",
    "results",
    "records",
    "collection",
    "list",
    "edges",
    "nodes",
    "docs",
    "entries",
    "values",
    "payload",
    "response",
    "children",
    "elements",
    "rows",
];

/// Recursion bound. The depth cap is the termination guarantee against
/// adversarially deep nesting; past it the search reports nothing.
const MAX_DEPTH: usize = 4;

/// Locate the array of raw entity items inside a payload of unknown shape.
///
/// A payload that is itself an array is returned as-is. Otherwise the
/// search recurses through well-known container keys first, then through
/// the remaining keys in enumeration order, returning the first non-empty
/// array found within the depth bound. An empty `Vec` (not an error) means
/// nothing was found.
pub fn discover_collection(payload: &Value) -> Vec<Value> {
    if let Value::Array(arr) = payload {
        return arr.clone();
    }

    find_collection(payload, 0).unwrap_or_default()
}

fn find_collection(value: &Value, depth: usize) -> Option<Vec<Value>> {
    if depth > MAX_DEPTH {
        return None;
    }

    match value {
        Value::Array(arr) if !arr.is_empty() => Some(arr.clone()),
        Value::Object(map) => {
            for key in CONTAINER_KEYS {
                if let Some(candidate) = map.get(key) {
                    if let Some(found) = find_collection(candidate, depth + 1) {
                        return Some(found);
                    }
                }
            }

            // Nothing under the well-known keys; scan the rest.
            for (key, candidate) in map {
                if CONTAINER_KEYS.contains(&key.as_str()) {
                    continue;
                }
                if let Some(found) = find_collection(candidate, depth + 1) {
                    return Some(found);
                }
            }

            None
        }
        _ => None,
    }
}
