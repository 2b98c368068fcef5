//! Oxford Client - HTTP client for the Oxford Dictionaries entries API
//!
//! Used by the speechlet (the skill core) to:
//! - Look up a word's lexical category and first definition
//! - Collect usage examples for the follow-up dialog turn

use reqwest::Client;
use tracing::warn;

pub mod types;
pub use types::*;

/// Default entries endpoint. Overridable via `OXFORD_BASE_URL`.
pub const DEFAULT_BASE_URL: &str = "https://od-api.oxforddictionaries.com/api/v1/entries/en";

/// Error types for Oxford client operations
///
/// The variants exist for logging fidelity; callers treat every `Err` as one
/// service-failure category and fall back to the spoken apology.
#[derive(Debug, thiserror::Error)]
pub enum OxfordClientError {
    #[error("Oxford API credentials not configured")]
    NotConfigured,
    #[error("Oxford service not reachable: {0}")]
    NotReachable(String),
    #[error("Oxford API returned status {0}")]
    BadStatus(reqwest::StatusCode),
    #[error("Oxford API returned an empty body")]
    EmptyBody,
    #[error("Failed to parse Oxford response: {0}")]
    ParseError(String),
}

/// Configuration for the Oxford Dictionaries API
#[derive(Debug, Clone)]
pub struct OxfordConfig {
    /// Entries endpoint, without a trailing slash
    pub base_url: String,
    /// Application id credential header
    pub app_id: String,
    /// Application key credential header
    pub app_key: String,
}

impl OxfordConfig {
    /// Create config from environment variables
    ///
    /// `OXFORD_APP_ID` and `OXFORD_APP_KEY` are required; `OXFORD_BASE_URL`
    /// falls back to the public endpoint.
    pub fn from_env() -> Option<Self> {
        let app_id = std::env::var("OXFORD_APP_ID").ok().filter(|s| !s.trim().is_empty())?;
        let app_key = std::env::var("OXFORD_APP_KEY").ok().filter(|s| !s.trim().is_empty())?;

        let base_url = std::env::var("OXFORD_BASE_URL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Some(Self {
            base_url,
            app_id,
            app_key,
        })
    }
}

/// Client for the Oxford Dictionaries entries API
#[derive(Clone)]
pub struct OxfordClient {
    config: OxfordConfig,
    client: Client,
}

impl OxfordClient {
    /// Create a new Oxford client with the given config
    pub fn new(mut config: OxfordConfig) -> Self {
        config.base_url = config.base_url.trim_end_matches('/').to_string();
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Look up a word, returning its extracted details
    ///
    /// Issues exactly one GET with the two credential headers attached.
    /// Transport failures, non-success statuses and empty bodies all surface
    /// as errors; a well-formed body is parsed best-effort so that partial
    /// payloads degrade to absent fields rather than failing.
    pub async fn lookup(&self, word: &str) -> Result<WordDetails, OxfordClientError> {
        let url = format!("{}/{}", self.config.base_url, urlencoding::encode(word));

        let resp = self
            .client
            .get(&url)
            .header("app_id", &self.config.app_id)
            .header("app_key", &self.config.app_key)
            .send()
            .await
            .map_err(|e| OxfordClientError::NotReachable(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(OxfordClientError::BadStatus(resp.status()));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| OxfordClientError::NotReachable(e.to_string()))?;

        if body.trim().is_empty() {
            return Err(OxfordClientError::EmptyBody);
        }

        let payload: RetrieveEntry = serde_json::from_str(&body).map_err(|e| {
            warn!("Unparseable Oxford response for '{}': {}", word, e);
            OxfordClientError::ParseError(e.to_string())
        })?;

        Ok(WordDetails::from_payload(payload))
    }
}
