//! Pure value-defaulting helpers used by renderers.
//!
//! Every field value is defaulted independently: strings fall back to empty,
//! enumerated fields fall back to a named default when absent or outside the
//! allowed set, numeric fields fall back to a default when absent or outside
//! `[min, max]`. Invalid input never surfaces to the rendered page.

use crate::values::{FieldValues, ImageValue};
use serde_json::Value;

/// Resolve a plain text field. Missing, null, and boolean-false values
/// (the host's "no value" markers) become the empty string.
pub fn text(values: &FieldValues, name: &str) -> String {
    match values.get(name) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// Resolve a text-like field with a non-empty fallback (e.g. a color).
pub fn text_or(values: &FieldValues, name: &str, default: &str) -> String {
    let value = text(values, name);
    if value.is_empty() {
        default.to_string()
    } else {
        value
    }
}

/// Resolve an enumerated field. Values absent from `allowed` fall back to
/// `default` in full — there is no closest-match behavior.
pub fn choice(values: &FieldValues, name: &str, allowed: &[&str], default: &str) -> String {
    let candidate = match values.get(name) {
        Some(Value::String(s)) => Some(s.clone()),
        // Hosts sometimes store numeric choices ("2"/"3"/"4" columns) as numbers.
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    };
    match candidate {
        Some(c) if allowed.contains(&c.as_str()) => c,
        _ => default.to_string(),
    }
}

/// Resolve an integer field constrained to `[min, max]`. Absent, non-numeric,
/// or out-of-range values fall back to `default` — they are not clamped.
pub fn int_in_range(values: &FieldValues, name: &str, min: i64, max: i64, default: i64) -> i64 {
    let parsed = match values.get(name) {
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    match parsed {
        Some(v) if (min..=max).contains(&v) => v,
        _ => default,
    }
}

/// Resolve an image field into its identifier or pre-resolved shape.
/// Empty identifiers and malformed objects resolve to `None`.
pub fn image(values: &FieldValues, name: &str) -> Option<ImageValue> {
    match values.get(name)? {
        Value::String(s) if !s.is_empty() => Some(ImageValue::Id(s.clone())),
        Value::Number(n) => Some(ImageValue::Id(n.to_string())),
        Value::Object(map) => {
            let url = map.get("url").and_then(Value::as_str)?;
            let alt = map.get("alt").and_then(Value::as_str).unwrap_or_default();
            Some(ImageValue::Resolved {
                url: url.to_string(),
                alt: alt.to_string(),
            })
        }
        _ => None,
    }
}
