//! Search filter expressions.
//!
//! The governance search endpoints take a tree of `{operator, operand}`
//! nodes. Boolean nodes carry a list of children, comparison nodes carry a
//! `{targetName, targetValue}` pair:
//!
//! ```json
//! {"targetFilter": {"operator": "OR", "operand": [
//!     {"operator": "CONTAINS", "operand": {"targetName": "application.name", "targetValue": "SNOW"}}
//! ]}}
//! ```

use serde::{Deserialize, Serialize};

/// Field/value pair compared by a leaf node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Target {
    pub target_name: String,
    pub target_value: String,
}

/// One node of a filter tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "operator", content = "operand", rename_all = "UPPERCASE")]
pub enum Filter {
    Or(Vec<Filter>),
    And(Vec<Filter>),
    Contains(Target),
    Equals(Target),
}

impl Filter {
    pub fn contains(name: impl Into<String>, value: impl Into<String>) -> Self {
        Filter::Contains(Target {
            target_name: name.into(),
            target_value: value.into(),
        })
    }

    pub fn equals(name: impl Into<String>, value: impl Into<String>) -> Self {
        Filter::Equals(Target {
            target_name: name.into(),
            target_value: value.into(),
        })
    }

    /// Entitlements whose application name, owner given name or display name
    /// contains `text`.
    pub fn entitlement_search(text: &str) -> Self {
        Filter::Or(vec![
            Filter::contains("application.name", text),
            Filter::contains("entitlementOwner.givenName", text),
            Filter::contains("descriptor.idx./entitlement.displayName", text),
        ])
    }

    /// Glossary schema entries declared for `object_type`.
    pub fn schema_object_type(object_type: &str) -> Self {
        Filter::And(vec![Filter::equals("objectType", object_type)])
    }
}

/// Request body wrapper: `{"targetFilter": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetFilter {
    pub target_filter: Filter,
}

impl From<Filter> for TargetFilter {
    fn from(target_filter: Filter) -> Self {
        Self { target_filter }
    }
}
