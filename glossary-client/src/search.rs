//! Paginated entitlement search.

use crate::auth::BearerToken;
use crate::client::{ensure_success, GovernanceClient};
use crate::error::{ClientError, ClientResult};
use crate::events::{EventSink, GlossaryEvent};
use crate::filter::{Filter, TargetFilter};
use glossary_model::EntitlementRecord;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

/// One page of search results.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchPage {
    #[serde(default)]
    pub result: Vec<Value>,
    #[serde(rename = "totalCount")]
    pub total_count: u64,
}

/// Number of pages needed for `total` results.
pub fn page_count(total: u64, page_size: u64) -> u64 {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

impl GovernanceClient {
    /// Fetches one zero-based page of entitlements matching `search`.
    pub async fn fetch_page(
        &self,
        token: &BearerToken,
        search: &str,
        page: u64,
    ) -> ClientResult<SearchPage> {
        debug!("Fetching search page {}", page);

        let body = TargetFilter::from(Filter::entitlement_search(search));
        let page_size = self.config.page_size.to_string();
        let page_number = page.to_string();

        let response = self
            .http
            .post(self.config.search_url())
            .bearer_auth(token.as_str())
            .query(&[
                ("_fields", "id,glossary,objGlossary"),
                ("pageSize", page_size.as_str()),
                ("sortBy", "application.name"),
                ("sortDir", "desc"),
                ("pageNumber", page_number.as_str()),
            ])
            .json(&body)
            .send()
            .await
            .map_err(|e| ClientError::Transport(format!("search request failed: {e}")))?;

        let response = ensure_success(response, "search request").await?;

        response
            .json()
            .await
            .map_err(|e| ClientError::Transport(format!("malformed search response: {e}")))
    }

    /// Fetches every page for the configured search string.
    ///
    /// Page 0 supplies the total count; the remaining pages are fetched in
    /// order. Any failing page aborts the whole fetch.
    pub async fn fetch_entitlements(
        &self,
        token: &BearerToken,
        sink: &dyn EventSink,
    ) -> ClientResult<Vec<EntitlementRecord>> {
        let search = self.config.search_string.as_str();

        let first = self.fetch_page(token, search, 0).await?;
        let pages = page_count(first.total_count, self.config.page_size);
        sink.emit(&GlossaryEvent::PageFetched {
            page: 0,
            pages,
            items: first.result.len(),
        });

        let mut records: Vec<EntitlementRecord> = first
            .result
            .iter()
            .map(EntitlementRecord::from_search_item)
            .collect();

        for page in 1..pages {
            let next = self.fetch_page(token, search, page).await?;
            sink.emit(&GlossaryEvent::PageFetched {
                page,
                pages,
                items: next.result.len(),
            });
            records.extend(next.result.iter().map(EntitlementRecord::from_search_item));
        }

        debug!(
            "Collected {} records (reported total {})",
            records.len(),
            first.total_count
        );
        Ok(records)
    }
}
