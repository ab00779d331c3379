//! iTunes Search API HTTP client
//!
//! No API key required. We search for albums and take the first hit's
//! artwork, upscaled to the requested size.
//!
//! API: https://itunes.apple.com/search

use super::{adapter, dto};
use crate::cover::domain::{CoverCandidate, CoverError};

/// iTunes Search API client
pub struct ItunesClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl ItunesClient {
    /// Create a new client
    pub fn new() -> Self {
        let http_client = reqwest::Client::builder()
            .gzip(true)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .unwrap_or_default();

        Self {
            http_client,
            base_url: "https://itunes.apple.com/search".to_string(),
        }
    }

    /// Create a client for testing with custom base URL
    #[cfg(test)]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Search for an album cover by free-text term.
    ///
    /// Returns `Ok(None)` when the store has no matching album or the hit
    /// carries no artwork; reserves `Err` for transport and parse failures.
    pub async fn search_album_cover(
        &self,
        term: &str,
        country: &str,
        size: u32,
    ) -> Result<Option<CoverCandidate>, CoverError> {
        if term.trim().is_empty() {
            return Ok(None);
        }

        let url = format!(
            "{}?term={}&entity=album&country={}&limit=1",
            self.base_url,
            urlencoding::encode(term),
            urlencoding::encode(country)
        );

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| CoverError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CoverError::Network(format!(
                "HTTP {}: {}",
                status,
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        let body = response
            .json::<dto::SearchResponse>()
            .await
            .map_err(|e| CoverError::Parse(e.to_string()))?;

        Ok(adapter::to_candidate(body, size))
    }
}

impl Default for ItunesClient {
    fn default() -> Self {
        Self::new()
    }
}
