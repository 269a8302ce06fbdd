//! Repeater row normalization.
//!
//! Repeater values reach the renderer in two equivalent shapes: the host's
//! iterator-based row protocol (a sequence of already-separated records), or
//! a plain ordered list of maps whose keys may be sub-field *names* or raw
//! sub-field *keys*. Both shapes normalize here into one canonical
//! `Vec<FieldValues>` keyed by sub-field name, so renderers only ever see a
//! single representation.

use crate::types::FieldDef;
use crate::values::FieldValues;
use serde_json::{Map, Value};

/// Normalize the repeater value stored under `def.name` in `values`.
///
/// Non-array and absent values normalize to an empty row set.
pub fn normalize(values: &FieldValues, def: &FieldDef) -> Vec<FieldValues> {
    let Some(sub_fields) = def.sub_fields() else {
        return Vec::new();
    };
    match values.get(&def.name) {
        Some(Value::Array(rows)) => rows
            .iter()
            .filter_map(Value::as_object)
            .map(|row| canonicalize_row(row, sub_fields))
            .collect(),
        _ => Vec::new(),
    }
}

/// Normalize rows arriving through the iterator-based row protocol.
pub fn normalize_records<I>(records: I, sub_fields: &[FieldDef]) -> Vec<FieldValues>
where
    I: IntoIterator<Item = Map<String, Value>>,
{
    records
        .into_iter()
        .map(|row| canonicalize_row(&row, sub_fields))
        .collect()
}

/// Canonicalize one row: for each declared sub-field, try the field name
/// first, then the raw field key.
fn canonicalize_row(row: &Map<String, Value>, sub_fields: &[FieldDef]) -> FieldValues {
    let mut canonical = FieldValues::new();
    for sub in sub_fields {
        let value = row
            .get(&sub.name)
            .or_else(|| sub.key.as_ref().and_then(|k| row.get(k)));
        if let Some(value) = value {
            canonical.set(sub.name.clone(), value.clone());
        }
    }
    canonical
}
