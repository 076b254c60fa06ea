//! Envelope flattening for wrapped entity records.
//!
//! Several upstream shapes nest the real entity under a conventional
//! wrapper key (`{"node": {...}}`, GraphQL edges, `{"data": {...}}`). This
//! module folds those wrappers into the top-level record so the normalizers
//! can probe one flat set of candidate paths.

use serde_json::{Map, Value};

/// Wrapper keys, checked in this order against the accumulating record. A
/// wrapper surfaced by an earlier wrapper (e.g. `node.comment`) is itself
/// expanded on a later iteration.
const WRAPPER_KEYS: [&str; 5] = ["node", "comment", "value", "payload", "data"];

/// Flatten known envelope keys into the top level of a raw record.
///
/// Returns `None` for non-record input; the caller falls back to the raw
/// value. The wrapper entries themselves are left in place - normalizers
/// only probe known candidate paths, so they are inert.
pub fn expand_entry(raw: &Value) -> Option<Map<String, Value>> {
    let record = raw.as_object()?;
    let mut out = record.clone();

    for key in WRAPPER_KEYS {
        let nested = match out.get(key) {
            Some(Value::Object(m)) => m.clone(),
            _ => continue,
        };

        for (field, value) in nested {
            if overrides(out.get(&field), &value) {
                out.insert(field, value);
            }
        }
    }

    Some(out)
}

/// The per-key override rule. Asymmetric on purpose, and load-bearing for
/// which of several duplicate fields across wrappers wins:
/// - absent or null current value: any nested value wins;
/// - empty/whitespace-only current string: only a non-empty nested string wins;
/// - anything else: the current value is kept.
fn overrides(current: Option<&Value>, nested: &Value) -> bool {
    match current {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) if s.trim().is_empty() => {
            matches!(nested, Value::String(n) if !n.trim().is_empty())
        }
        _ => false,
    }
}
