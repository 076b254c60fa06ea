use serde_json::Value;

/// Walk a dotted path through a nested JSON value.
///
/// Object segments are key lookups; array segments must parse as a
/// non-negative integer within bounds. Absence at any step short-circuits
/// to `None` - this never panics, regardless of input shape.
pub fn resolve<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = value;

    for segment in path.split('.') {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(arr) => arr.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }

    Some(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_object_lookup() {
        let value = json!({"a": {"b": {"c": 42}}});
        assert_eq!(resolve(&value, "a.b.c"), Some(&json!(42)));
    }

    #[test]
    fn test_array_index() {
        let value = json!({"items": [{"id": "x"}, {"id": "y"}]});
        assert_eq!(resolve(&value, "items.1.id"), Some(&json!("y")));
    }

    #[test]
    fn test_missing_key() {
        let value = json!({"a": {"b": 1}});
        assert_eq!(resolve(&value, "a.c"), None);
    }

    #[test]
    fn test_index_out_of_bounds() {
        let value = json!({"items": [1, 2]});
        assert_eq!(resolve(&value, "items.2"), None);
    }

    #[test]
    fn test_non_numeric_index() {
        let value = json!([1, 2, 3]);
        assert_eq!(resolve(&value, "first"), None);
    }

    #[test]
    fn test_descend_into_scalar() {
        let value = json!({"a": "leaf"});
        assert_eq!(resolve(&value, "a.b"), None);
    }

    #[test]
    fn test_single_segment() {
        let value = json!({"cursor": "abc"});
        assert_eq!(resolve(&value, "cursor"), Some(&json!("abc")));
    }

    #[test]
    fn test_null_is_found_not_absent() {
        // Resolution and coercion are separate concerns: a null leaf is
        // "found", the coercers decide it is unusable.
        let value = json!({"cursor": null});
        assert_eq!(resolve(&value, "cursor"), Some(&Value::Null));
    }
}
