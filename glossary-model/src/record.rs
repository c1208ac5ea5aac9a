use crate::flatten::render_value;
use serde_json::{Map, Value};

/// Identifier used when a search result carries no `id`.
pub const UNKNOWN_ID: &str = "Unknown";

/// One entitlement from a resource search, reduced to what the export needs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EntitlementRecord {
    pub id: String,
    /// Raw glossary attributes; values may be scalars or nested objects.
    pub glossary: Map<String, Value>,
}

impl EntitlementRecord {
    pub fn new(id: impl Into<String>, glossary: Map<String, Value>) -> Self {
        Self {
            id: id.into(),
            glossary,
        }
    }

    /// Extracts a record from a raw search result item.
    ///
    /// The entitlement glossary lives under `glossary.idx["/entitlement"]`.
    /// Items without that path yield an empty glossary rather than an error,
    /// so they still appear in the export with blank attribute columns. A
    /// non-string `id` is kept in its rendered form.
    pub fn from_search_item(item: &Value) -> Self {
        let id = match item.get("id") {
            None | Some(Value::Null) => UNKNOWN_ID.to_string(),
            Some(value) => render_value(value),
        };

        let glossary = item
            .get("glossary")
            .and_then(|g| g.get("idx"))
            .and_then(|idx| idx.get("/entitlement"))
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default();

        Self { id, glossary }
    }
}
