//! Glossary write-back.

use crate::auth::BearerToken;
use crate::client::GovernanceClient;
use crate::error::{ClientError, ClientResult};
use crate::events::{EventSink, GlossaryEvent};
use glossary_model::{is_blank_row, ModelResult, Row, UpdatePayload, ID_COLUMN};
use reqwest::StatusCode;
use tracing::debug;

/// A row whose update did not succeed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowFailure {
    pub id: String,
    pub reason: String,
}

/// Outcome of an update run, ids in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateReport {
    pub updated: Vec<String>,
    pub skipped: Vec<String>,
    pub failed: Vec<RowFailure>,
}

impl UpdateReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn total(&self) -> usize {
        self.updated.len() + self.skipped.len() + self.failed.len()
    }
}

impl GovernanceClient {
    /// Replaces one entitlement's glossary. Only HTTP 200 counts as success.
    pub async fn update_glossary(
        &self,
        token: &BearerToken,
        id: &str,
        payload: &UpdatePayload,
    ) -> ClientResult<()> {
        let url = self.config.glossary_url(id)?;
        debug!("Updating glossary for {} at {}", id, url);

        let response = self
            .http
            .put(url)
            .bearer_auth(token.as_str())
            .json(payload)
            .send()
            .await
            .map_err(|e| ClientError::Transport(format!("glossary update failed: {e}")))?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                context: "glossary update".to_string(),
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }

    /// Pushes each row back to the API.
    ///
    /// Rows with nothing but an id are skipped. A failed row is recorded and
    /// the loop continues; only an unreadable row aborts the run.
    pub async fn apply_rows<I>(
        &self,
        token: &BearerToken,
        rows: I,
        sink: &dyn EventSink,
    ) -> ClientResult<UpdateReport>
    where
        I: IntoIterator<Item = ModelResult<Row>>,
    {
        let mut report = UpdateReport::default();

        for row in rows {
            let row = row?;
            let id = row.get(ID_COLUMN).cloned().unwrap_or_default();

            if is_blank_row(&row) {
                sink.emit(&GlossaryEvent::RowSkipped { id: id.clone() });
                report.skipped.push(id);
                continue;
            }

            if id.trim().is_empty() {
                let reason = "row has no id".to_string();
                sink.emit(&GlossaryEvent::RowFailed {
                    id: id.clone(),
                    reason: reason.clone(),
                });
                report.failed.push(RowFailure { id, reason });
                continue;
            }

            let payload = UpdatePayload::from_row(&row);
            match self.update_glossary(token, &id, &payload).await {
                Ok(()) => {
                    sink.emit(&GlossaryEvent::RowUpdated { id: id.clone() });
                    report.updated.push(id);
                }
                Err(e) => {
                    let reason = e.to_string();
                    sink.emit(&GlossaryEvent::RowFailed {
                        id: id.clone(),
                        reason: reason.clone(),
                    });
                    report.failed.push(RowFailure { id, reason });
                }
            }
        }

        Ok(report)
    }
}
