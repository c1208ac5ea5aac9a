use crate::client::{ensure_success, GovernanceClient};
use crate::error::{ClientError, ClientResult};
use serde::Deserialize;
use std::fmt;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Bearer token for one run. Never refreshed.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(***)")
    }
}

impl GovernanceClient {
    /// Exchanges the configured client credentials for a bearer token.
    ///
    /// A configured `access_token` short-circuits the exchange.
    pub async fn authenticate(&self) -> ClientResult<BearerToken> {
        if let Some(token) = self.config.access_token.as_deref().filter(|t| !t.is_empty()) {
            debug!("Using pre-issued access token");
            return Ok(BearerToken::new(token));
        }

        let token_url = self.config.token_url();
        debug!("Requesting access token from {}", token_url);

        let response = self
            .http
            .post(&token_url)
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", self.config.client_id.as_str()),
                ("client_secret", self.config.client_secret.as_str()),
                ("scope", self.config.scope.as_str()),
            ])
            .send()
            .await
            .map_err(|e| ClientError::Auth(format!("token request failed: {e}")))?;

        let response = ensure_success(response, "token request")
            .await
            .map_err(|e| ClientError::Auth(e.to_string()))?;

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| ClientError::Auth(format!("failed to parse token response: {e}")))?;

        Ok(BearerToken::new(token.access_token))
    }
}
