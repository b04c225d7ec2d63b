//! HTTP client for the movie site's suggestion endpoint.
//!
//! The TUI never talks to reqwest directly; it goes through the
//! [`SuggestSource`] trait so tests can substitute a scripted source
//! without a live server.

use std::fmt;

use async_trait::async_trait;
use log::debug;

use super::types::{SuggestResponse, SuggestionItem};

/// Errors that can occur while fetching suggestions.
/// All of them degrade silently in the UI; the variants exist for logging
/// and for tests to assert on.
#[derive(Debug)]
pub enum ApiError {
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The API answered with a non-success status.
    Api { status: u16 },
    /// The response body was not the expected JSON shape.
    Parse(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Api { status } => write!(f, "API error (HTTP {status})"),
            ApiError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Anything that can answer a suggestion query.
#[async_trait]
pub trait SuggestSource: Send + Sync {
    /// Fetch suggestions for `query`. The caller enforces the minimum
    /// query length before getting here.
    async fn suggest(&self, query: &str) -> Result<Vec<SuggestionItem>, ApiError>;
}

/// Production source: `GET <base_url>/api/search_suggest?q=<query>`.
pub struct HttpSuggestSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSuggestSource {
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl SuggestSource for HttpSuggestSource {
    async fn suggest(&self, query: &str) -> Result<Vec<SuggestionItem>, ApiError> {
        let url = format!("{}/api/search_suggest", self.base_url);
        debug!("GET {url}?q={query}");

        let response = self
            .client
            .get(&url)
            .query(&[("q", query)])
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Api {
                status: status.as_u16(),
            });
        }

        let body: SuggestResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;

        debug!("{} suggestion(s) for {query:?}", body.results.len());
        Ok(body.results)
    }
}
