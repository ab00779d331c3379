//! Last.fm album.getinfo HTTP client
//!
//! Requires an API key. Last.fm signals "not found" with an error body
//! and HTTP 200, so error handling inspects the parsed response rather
//! than the status alone.
//!
//! API: https://ws.audioscrobbler.com/2.0/

use super::{adapter, dto};
use crate::cover::domain::{CoverCandidate, CoverError};

/// Last.fm error code for "album not found"
const ERROR_NOT_FOUND: i64 = 6;

/// Last.fm API client
pub struct LastfmClient {
    api_key: String,
    http_client: reqwest::Client,
    base_url: String,
}

impl LastfmClient {
    /// Create a new client with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
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
            api_key: api_key.into(),
            http_client,
            base_url: "https://ws.audioscrobbler.com/2.0/".to_string(),
        }
    }

    /// Create a client for testing with custom base URL
    #[cfg(test)]
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            http_client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Look up an album's cover art.
    ///
    /// Returns `Ok(None)` when Last.fm doesn't know the album or has no
    /// usable artwork for it.
    pub async fn album_cover(
        &self,
        artist: &str,
        album: &str,
    ) -> Result<Option<CoverCandidate>, CoverError> {
        let url = format!(
            "{}?method=album.getinfo&api_key={}&artist={}&album={}&format=json",
            self.base_url,
            urlencoding::encode(&self.api_key),
            urlencoding::encode(artist),
            urlencoding::encode(album)
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
            .json::<dto::AlbumInfoResponse>()
            .await
            .map_err(|e| CoverError::Parse(e.to_string()))?;

        // "Not found" is a miss, any other error code is a real failure
        if let Some(code) = body.error {
            if code == ERROR_NOT_FOUND {
                return Ok(None);
            }
            return Err(CoverError::ApiError(
                body.message
                    .unwrap_or_else(|| format!("Last.fm error {}", code)),
            ));
        }

        Ok(adapter::to_candidate(body))
    }
}
