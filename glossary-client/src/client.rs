use crate::config::GlossaryConfig;
use crate::error::{ClientError, ClientResult};
use reqwest::{Client, Response};
use std::time::Duration;

/// HTTP client bound to one tenant configuration.
///
/// The component operations (authentication, search, schema lookup,
/// glossary updates) are implemented on this type in their own modules.
pub struct GovernanceClient {
    pub(crate) http: Client,
    pub(crate) config: GlossaryConfig,
}

impl GovernanceClient {
    /// Validates `config` and builds the underlying HTTP client.
    pub fn new(config: GlossaryConfig) -> ClientResult<Self> {
        config.validate()?;

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ClientError::Transport(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &GlossaryConfig {
        &self.config
    }
}

/// Passes successful responses through; anything else becomes
/// [`ClientError::Status`] with the response body attached.
pub(crate) async fn ensure_success(response: Response, context: &str) -> ClientResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(ClientError::Status {
        context: context.to_string(),
        status: status.as_u16(),
        body,
    })
}
