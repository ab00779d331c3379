//! Image reachability probe.
//!
//! Search providers and the list view's cover guessing both produce URLs
//! that may point at nothing (expired CDN entries, guessed keys). Before a
//! URL is trusted it gets fetched with a short timeout; a candidate is
//! valid only if the response succeeds and claims an image content type.
//!
//! A `_t=<millis>` cache-buster is appended so an intermediary can't
//! answer for a URL that has since gone stale.

use std::time::Duration;

/// Default probe timeout
pub const PROBE_TIMEOUT: Duration = Duration::from_millis(2500);

/// Image reachability probe
pub struct ImageProbe {
    http_client: reqwest::Client,
    timeout: Duration,
}

impl ImageProbe {
    /// Create a probe with the default timeout
    pub fn new() -> Self {
        Self::with_timeout(PROBE_TIMEOUT)
    }

    /// Create a probe with a custom timeout
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            timeout,
        }
    }

    /// Check whether a URL serves a loadable image.
    ///
    /// Best-effort: any network error, timeout, non-2xx status, or
    /// non-image content type counts as unreachable.
    pub async fn is_reachable(&self, url: &str) -> bool {
        let busted = cache_busted(url);

        match self
            .http_client
            .get(&busted)
            .timeout(self.timeout)
            .send()
            .await
        {
            Ok(response) if response.status().is_success() => response
                .headers()
                .get(reqwest::header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(|ct| ct.starts_with("image/"))
                .unwrap_or(false),
            _ => false,
        }
    }
}

impl Default for ImageProbe {
    fn default() -> Self {
        Self::new()
    }
}

/// Append a cache-busting query parameter
fn cache_busted(url: &str) -> String {
    let sep = if url.contains('?') { '&' } else { '?' };
    format!("{}{}_t={}", url, sep, chrono::Utc::now().timestamp_millis())
}
