//! Run configuration.
//!
//! Tenant URL, credentials, file name and attribute list all live here and
//! are checked once by [`GlossaryConfig::validate`] before any request is
//! made.

use crate::error::{ClientError, ClientResult};
use glossary_model::PAYLOAD_COLUMNS;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// OAuth scope requested for the client-credentials grant.
pub const DEFAULT_SCOPE: &str = "fr:idm:* fr:iga:*";

/// Configuration shared by every component of a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GlossaryConfig {
    /// Tenant base URL (e.g. `https://openam-example.forgeblocks.com`).
    pub base_url: String,
    /// Access-management realm hosting the OAuth2 client.
    pub realm: String,
    /// OAuth2 client ID.
    pub client_id: String,
    /// OAuth2 client secret.
    pub client_secret: String,
    /// Scope requested with the client-credentials grant.
    pub scope: String,
    /// Pre-issued bearer token. When set, no token request is made.
    pub access_token: Option<String>,
    /// Free text matched against application name, owner given name and
    /// entitlement display name.
    pub search_string: String,
    /// Results per search page.
    pub page_size: u64,
    /// Attributes always exported, before any schema-discovered ones.
    /// Defaults to the columns the update pass sends back.
    pub attributes: Vec<String>,
    /// Object type the glossary schema lookup is restricted to.
    pub schema_object_type: String,
    /// CSV file written by export and read by update.
    pub csv_path: PathBuf,
    /// Per-request timeout.
    pub timeout_secs: u64,
}

impl Default for GlossaryConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            realm: "alpha".to_string(),
            client_id: String::new(),
            client_secret: String::new(),
            scope: DEFAULT_SCOPE.to_string(),
            access_token: None,
            search_string: String::new(),
            page_size: 10,
            attributes: PAYLOAD_COLUMNS.iter().map(|a| a.to_string()).collect(),
            schema_object_type: "/openidm/managed/assignment".to_string(),
            csv_path: PathBuf::from("entitlement_export.csv"),
            timeout_secs: 60,
        }
    }
}

impl GlossaryConfig {
    /// Parses a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> ClientResult<Self> {
        toml::from_str(s).map_err(|e| ClientError::Config(format!("invalid config file: {e}")))
    }

    /// Loads a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> ClientResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            ClientError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&text)
    }

    /// Checks the settings every run depends on.
    pub fn validate(&self) -> ClientResult<()> {
        let base = self.base_url.trim();
        if base.is_empty() {
            return Err(ClientError::Config("base_url is required".to_string()));
        }
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ClientError::Config(format!(
                "base_url must start with http:// or https://, got {base}"
            )));
        }
        Url::parse(base)
            .map_err(|e| ClientError::Config(format!("base_url {base} is not a valid URL: {e}")))?;
        if self.page_size == 0 {
            return Err(ClientError::Config("page_size must be at least 1".to_string()));
        }
        if self.timeout_secs == 0 {
            return Err(ClientError::Config("timeout_secs must be at least 1".to_string()));
        }
        if self.csv_path.as_os_str().is_empty() {
            return Err(ClientError::Config("csv_path is required".to_string()));
        }

        let has_token = self.access_token.as_deref().is_some_and(|t| !t.is_empty());
        let has_credentials = !self.client_id.is_empty() && !self.client_secret.is_empty();
        if !has_token && !has_credentials {
            return Err(ClientError::Config(
                "either access_token or client_id and client_secret must be set".to_string(),
            ));
        }

        Ok(())
    }

    fn base(&self) -> &str {
        self.base_url.trim().trim_end_matches('/')
    }

    /// `{base}/am/oauth2/{realm}/access_token`
    pub fn token_url(&self) -> String {
        format!("{}/am/oauth2/{}/access_token", self.base(), self.realm)
    }

    /// `{base}/iga/governance/resource/search`
    pub fn search_url(&self) -> String {
        format!("{}/iga/governance/resource/search", self.base())
    }

    /// `{base}/iga/commons/glossary/schema/search`
    pub fn schema_url(&self) -> String {
        format!("{}/iga/commons/glossary/schema/search", self.base())
    }

    /// `{base}/iga/governance/resource/{id}/glossary`
    ///
    /// `id` is percent-encoded as a single path segment, so `/`, `?` and `#`
    /// cannot change which resource is addressed. `.` and `..` are rejected.
    pub fn glossary_url(&self, id: &str) -> ClientResult<Url> {
        if matches!(id, "." | "..") {
            return Err(ClientError::InvalidId(id.to_string()));
        }

        let mut url = Url::parse(self.base())
            .map_err(|e| ClientError::Config(format!("invalid base_url: {e}")))?;
        url.path_segments_mut()
            .map_err(|()| ClientError::Config(format!("base_url {} cannot be a base", self.base())))?
            .pop_if_empty()
            .extend(["iga", "governance", "resource"])
            .push(id)
            .push("glossary");

        Ok(url)
    }
}
