//! Glossary flattening.
//!
//! Turns `{"entitlementOwner": {"givenName": "Amy"}, "classification": "high"}`
//! into `{"entitlementOwner_givenName": "Amy", "classification": "high"}`.

use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Column name to string value for a single record.
pub type FlattenedRow = BTreeMap<String, String>;

/// Flattens one level of nesting out of a glossary mapping.
///
/// Null and empty-string values both come out as `""`; the distinction between
/// absent, null and explicitly empty is not preserved.
pub fn flatten_glossary(glossary: &Map<String, Value>) -> FlattenedRow {
    let mut row = FlattenedRow::new();

    for (key, value) in glossary {
        match value {
            Value::Object(nested) => {
                for (inner, inner_value) in nested {
                    row.insert(format!("{key}_{inner}"), render_value(inner_value));
                }
            }
            scalar => {
                row.insert(key.clone(), render_value(scalar));
            }
        }
    }

    row
}

/// Renders a single glossary value as CSV cell text.
///
/// Arrays and objects nested below the first level are kept as compact JSON.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}
