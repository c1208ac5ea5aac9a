//! Glossary schema lookup.

use crate::auth::BearerToken;
use crate::client::{ensure_success, GovernanceClient};
use crate::error::{ClientError, ClientResult};
use crate::filter::{Filter, TargetFilter};
use serde_json::Value;
use tracing::debug;

/// Attribute names from schema descriptors, in API order.
///
/// Descriptors without a string `name` are ignored.
pub fn schema_attribute_names(descriptors: &[Value]) -> Vec<String> {
    descriptors
        .iter()
        .filter_map(|d| d.get("name").and_then(Value::as_str))
        .map(str::to_string)
        .collect()
}

impl GovernanceClient {
    /// Fetches the raw glossary schema descriptors for the configured object
    /// type.
    pub async fn fetch_schema(&self, token: &BearerToken) -> ClientResult<Vec<Value>> {
        debug!(
            "Fetching glossary schema for {}",
            self.config.schema_object_type
        );

        let body = TargetFilter::from(Filter::schema_object_type(&self.config.schema_object_type));

        let response = self
            .http
            .post(self.config.schema_url())
            .bearer_auth(token.as_str())
            .json(&body)
            .send()
            .await
            .map_err(|e| ClientError::Transport(format!("schema request failed: {e}")))?;

        let response = ensure_success(response, "schema request").await?;

        let mut body: Value = response
            .json()
            .await
            .map_err(|e| ClientError::Schema(format!("failed to parse schema response: {e}")))?;

        match body.get_mut("result").map(Value::take) {
            Some(Value::Array(descriptors)) => Ok(descriptors),
            Some(_) => Err(ClientError::Schema("`result` is not a list".to_string())),
            None => Err(ClientError::Schema("response has no `result` field".to_string())),
        }
    }

    /// Authenticates and returns the schema's attribute names.
    pub async fn resolve_schema(&self) -> ClientResult<Vec<String>> {
        let token = self.authenticate().await?;
        let descriptors = self.fetch_schema(&token).await?;
        Ok(schema_attribute_names(&descriptors))
    }
}
