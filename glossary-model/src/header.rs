use std::collections::HashSet;

/// Name of the identifier column. Always first in the file.
pub const ID_COLUMN: &str = "id";

/// The ordered attribute columns of one export run.
///
/// Built once from the requested attributes followed by the schema-discovered
/// ones; duplicates keep their first position and `id` is never an attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderSet {
    attributes: Vec<String>,
}

impl HeaderSet {
    pub fn new<R, D>(requested: R, discovered: D) -> Self
    where
        R: IntoIterator,
        R::Item: Into<String>,
        D: IntoIterator,
        D::Item: Into<String>,
    {
        let mut seen = HashSet::new();
        let attributes = requested
            .into_iter()
            .map(Into::<String>::into)
            .chain(discovered.into_iter().map(Into::<String>::into))
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty() && name != ID_COLUMN)
            .filter(|name| seen.insert(name.clone()))
            .collect();

        Self { attributes }
    }

    /// Parses a comma-separated attribute list, e.g. `"isSensitive,lob_owner"`.
    pub fn from_list(list: &str) -> Self {
        Self::new(list.split(','), std::iter::empty::<String>())
    }

    /// Attribute columns, without `id`.
    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    /// Full CSV header: `id` followed by the attributes.
    pub fn columns(&self) -> Vec<&str> {
        std::iter::once(ID_COLUMN)
            .chain(self.attributes.iter().map(String::as_str))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}
