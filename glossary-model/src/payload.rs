use crate::header::ID_COLUMN;
use crate::projector::Row;
use serde::Serialize;
use std::collections::BTreeMap;

/// Columns copied into every glossary update.
pub const PAYLOAD_COLUMNS: [&str; 9] = [
    "isSensitive",
    "is_privileged",
    "lob_owner",
    "requestable",
    "approverRole",
    "certFreq",
    "classification",
    "description",
    "entitlementOwner",
];

/// Columns the API expects as lowercase `"true"` / `"false"` strings.
pub const BOOLEAN_COLUMNS: [&str; 3] = ["isSensitive", "is_privileged", "requestable"];

/// Body of `PUT /resource/{id}/glossary`: exactly the [`PAYLOAD_COLUMNS`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct UpdatePayload(BTreeMap<&'static str, String>);

impl UpdatePayload {
    /// Builds the payload from a CSV row.
    ///
    /// Columns absent from the file are sent as empty strings. Boolean columns
    /// are lower-cased so spreadsheet `TRUE` becomes `"true"`.
    pub fn from_row(row: &Row) -> Self {
        let fields = PAYLOAD_COLUMNS
            .iter()
            .map(|&column| {
                let value = row.get(column).cloned().unwrap_or_default();
                if BOOLEAN_COLUMNS.contains(&column) {
                    (column, value.to_lowercase())
                } else {
                    (column, value)
                }
            })
            .collect();

        Self(fields)
    }

    /// Value that will be sent for `column`.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.0.get(column).map(String::as_str)
    }
}

impl Default for UpdatePayload {
    /// Every payload column set to `""`.
    fn default() -> Self {
        Self::from_row(&Row::new())
    }
}

/// True when every field other than `id` is empty or whitespace.
pub fn is_blank_row(row: &Row) -> bool {
    row.iter()
        .filter(|(column, _)| column.as_str() != ID_COLUMN)
        .all(|(_, value)| value.trim().is_empty())
}
