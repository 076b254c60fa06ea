//! Defensive scalar coercion over candidate paths.
//!
//! Upstream payloads routinely deliver numbers and booleans as strings, and
//! the same logical field under several different names. Each lookup here
//! takes an ordered candidate-path list and returns the first successful
//! coercion; failure to find anything is "absent", not an error.

use crate::refine::path;
use serde_json::Value;

const TRUE_WORDS: [&str; 4] = ["true", "yes", "1", "y"];
const FALSE_WORDS: [&str; 4] = ["false", "no", "0", "n"];

/// Try each candidate path in order and return the first value the coercion
/// accepts. An earlier path wins even if a later one would have produced a
/// "better" match - the tie-break is positional, not a specificity ranking.
pub fn first_match<'a, T>(
    value: &'a Value,
    paths: &[&str],
    coerce: impl Fn(&'a Value) -> Option<T>,
) -> Option<T> {
    paths
        .iter()
        .find_map(|p| path::resolve(value, p).and_then(&coerce))
}

/// First candidate path that coerces to a non-empty trimmed string.
pub fn string_at(value: &Value, paths: &[&str]) -> Option<String> {
    first_match(value, paths, as_clean_string)
}

/// First candidate path that coerces to a finite number.
pub fn number_at(value: &Value, paths: &[&str]) -> Option<f64> {
    first_match(value, paths, as_number)
}

/// First candidate path that coerces to a boolean.
pub fn bool_at(value: &Value, paths: &[&str]) -> Option<bool> {
    first_match(value, paths, as_bool)
}

/// First candidate path that coerces to a number, rounded and floored at
/// zero. Counters in the entity contract are non-negative integers.
pub fn count_at(value: &Value, paths: &[&str]) -> Option<u64> {
    number_at(value, paths).map(|n| {
        let rounded = n.round();
        if rounded.is_sign_negative() {
            0
        } else {
            rounded as u64
        }
    })
}

/// Strings are trimmed and accepted only if non-empty; numbers are
/// stringified. Nothing else is accepted.
pub fn as_clean_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Finite numbers pass through; strings have thousands-separator commas
/// stripped and are parsed as floating point, accepted only if finite.
pub fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|f| f.is_finite()),
        Value::String(s) => s
            .trim()
            .replace(',', "")
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite()),
        _ => None,
    }
}

/// Booleans pass through; 0/1 numerics map to false/true; strings are
/// trim/case-normalized and matched against small synonym sets.
pub fn as_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => match n.as_f64() {
            Some(f) if f == 0.0 => Some(false),
            Some(f) if f == 1.0 => Some(true),
            _ => None,
        },
        Value::String(s) => {
            let normalized = s.trim().to_ascii_lowercase();
            if TRUE_WORDS.contains(&normalized.as_str()) {
                Some(true)
            } else if FALSE_WORDS.contains(&normalized.as_str()) {
                Some(false)
            } else {
                None
            }
        }
        _ => None,
    }
}
