//! Profile search client for the member match gateway.
//!
//! DESIGN
//! ======
//! Thin HTTP wrapper for the community search service: one endpoint,
//! `POST {base}/search`, taking a free-text query and a result limit.
//! Records come back sparse, so every profile field is optional and the
//! mapping layer in `services::matching` supplies the display fallbacks.
//! The `ProfileSearch` trait is the seam handlers depend on, so tests can
//! swap in a mock.

use std::time::Duration;

use serde::Deserialize;

pub const DEFAULT_SEARCH_TIMEOUT_SECS: u64 = 10;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by profile search operations.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// Required configuration is absent.
    #[error("search config: {0}")]
    Config(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The HTTP request to the search service failed.
    #[error("search request failed: {0}")]
    Request(String),

    /// The search service returned a non-success HTTP status.
    #[error("search response error: status {status}")]
    Response { status: u16, body: String },

    /// The response body could not be parsed.
    #[error("search parse failed: {0}")]
    Parse(String),
}

// =============================================================================
// WIRE TYPES
// =============================================================================

/// One profile as returned by the search service. Every field is optional;
/// missing values are filled in by the match mapping.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileRecord {
    pub username: Option<String>,
    pub name: Option<String>,
    pub profile_image: Option<String>,
    pub description: Option<String>,
    pub similarity: Option<f64>,
    pub location: Option<String>,
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<ProfileRecord>,
}

// =============================================================================
// TRAIT + CLIENT
// =============================================================================

/// Seam for profile search. Enables mocking in handler tests.
#[async_trait::async_trait]
pub trait ProfileSearch: Send + Sync {
    /// Run a semantic profile search.
    ///
    /// # Errors
    ///
    /// Returns a [`SearchError`] on transport failure, a non-success status,
    /// or an unparseable body.
    async fn search(&self, query: &str, limit: u32) -> Result<Vec<ProfileRecord>, SearchError>;
}

pub struct SearchClient {
    http: reqwest::Client,
    base_url: String,
}

impl SearchClient {
    /// Build a search client from environment variables.
    ///
    /// Required:
    /// - `SEARCH_BASE_URL`
    ///
    /// Optional:
    /// - `SEARCH_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns an error if `SEARCH_BASE_URL` is unset or the HTTP client
    /// fails to build.
    pub fn from_env() -> Result<Self, SearchError> {
        let base_url = std::env::var("SEARCH_BASE_URL")
            .map_err(|_| SearchError::Config("SEARCH_BASE_URL not set".into()))?
            .trim_end_matches('/')
            .to_string();
        let timeout_secs = std::env::var("SEARCH_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_SEARCH_TIMEOUT_SECS);
        Self::new(base_url, timeout_secs)
    }

    pub fn new(base_url: String, timeout_secs: u64) -> Result<Self, SearchError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| SearchError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url })
    }
}

#[async_trait::async_trait]
impl ProfileSearch for SearchClient {
    async fn search(&self, query: &str, limit: u32) -> Result<Vec<ProfileRecord>, SearchError> {
        let url = format!("{}/search", self.base_url);
        let body = serde_json::json!({ "query": query, "limit": limit });

        let response = self
            .http
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(|e| SearchError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| SearchError::Request(e.to_string()))?;

        if status != 200 {
            return Err(SearchError::Response { status, body: text });
        }

        parse_results(&text)
    }
}

// =============================================================================
// PARSING
// =============================================================================

fn parse_results(json: &str) -> Result<Vec<ProfileRecord>, SearchError> {
    let parsed: SearchResponse = serde_json::from_str(json).map_err(|e| SearchError::Parse(e.to_string()))?;
    Ok(parsed.results)
}

#[cfg(test)]
#[path = "search_test.rs"]
mod tests;
