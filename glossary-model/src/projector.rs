use crate::flatten::FlattenedRow;
use crate::header::{HeaderSet, ID_COLUMN};
use std::collections::BTreeMap;

/// A CSV row keyed by column name.
pub type Row = BTreeMap<String, String>;

/// Pads a flattened record out to the full header set.
///
/// The resulting key set is exactly `header ∪ {id}`: attributes the record
/// lacks become `""`, attributes outside the header are dropped.
pub fn project_row(header: &HeaderSet, id: &str, flattened: &FlattenedRow) -> Row {
    let mut row = Row::new();
    row.insert(ID_COLUMN.to_string(), id.to_string());

    for attr in header.attributes() {
        let value = flattened.get(attr).cloned().unwrap_or_default();
        row.insert(attr.clone(), value);
    }

    row
}
