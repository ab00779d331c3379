//! Cover search service - orchestrates the provider cascade
//!
//! The resolution order is fixed:
//! 1. iTunes album search (no key needed), artwork upscaled
//! 2. Last.fm album.getinfo (skipped without an API key)
//!
//! Every candidate is validated with the image probe before being
//! returned. Provider failures are logged and degrade to the next
//! provider; only a fully dry cascade is an error.

use std::time::Duration;

use crate::cover::domain::{CoverCandidate, CoverError};
use crate::cover::itunes::ItunesClient;
use crate::cover::lastfm::LastfmClient;
use crate::cover::probe::{ImageProbe, PROBE_TIMEOUT};

/// Configuration for the cover search cascade
#[derive(Debug, Clone)]
pub struct CoverSearchConfig {
    /// iTunes store country code
    pub country: String,
    /// Requested artwork edge size in pixels
    pub size: u32,
    /// Last.fm API key; the Last.fm stage is skipped without one
    pub lastfm_api_key: Option<String>,
    /// Image probe timeout
    pub probe_timeout: Duration,
}

impl Default for CoverSearchConfig {
    fn default() -> Self {
        Self {
            country: "sg".to_string(),
            size: 1200,
            lastfm_api_key: None,
            probe_timeout: PROBE_TIMEOUT,
        }
    }
}

/// Service running the cover search cascade
pub struct CoverResolver {
    config: CoverSearchConfig,
    itunes: ItunesClient,
    lastfm: Option<LastfmClient>,
    probe: ImageProbe,
}

impl CoverResolver {
    /// Create a new resolver with the given config
    pub fn new(config: CoverSearchConfig) -> Self {
        Self {
            itunes: ItunesClient::new(),
            lastfm: config
                .lastfm_api_key
                .as_deref()
                .filter(|k| !k.is_empty())
                .map(LastfmClient::new),
            probe: ImageProbe::with_timeout(config.probe_timeout),
            config,
        }
    }

    /// Find a reachable album cover for a free-text search term.
    ///
    /// The term is usually "<artist> <album>". Returns the first candidate
    /// that survives the image probe, or `NoMatches` when the cascade runs
    /// dry.
    pub async fn find_album_cover(&self, term: &str) -> Result<CoverCandidate, CoverError> {
        // Stage 1: iTunes
        match self
            .itunes
            .search_album_cover(term, &self.config.country, self.config.size)
            .await
        {
            Ok(Some(candidate)) => {
                if self.probe.is_reachable(&candidate.url).await {
                    return Ok(candidate);
                }
                tracing::debug!("iTunes candidate failed the image probe: {}", candidate.url);
            }
            Ok(None) => {
                tracing::debug!("iTunes returned no album for term {:?}", term);
            }
            Err(e) => {
                tracing::warn!("iTunes cover search failed: {}", e);
            }
        }

        // Stage 2: Last.fm, if we have a key and the term splits
        if let Some(ref lastfm) = self.lastfm
            && let Some((artist, album)) = split_term(term)
        {
            match lastfm.album_cover(artist, &album).await {
                Ok(Some(candidate)) => {
                    if self.probe.is_reachable(&candidate.url).await {
                        return Ok(candidate);
                    }
                    tracing::debug!(
                        "Last.fm candidate failed the image probe: {}",
                        candidate.url
                    );
                }
                Ok(None) => {
                    tracing::debug!("Last.fm returned no album for term {:?}", term);
                }
                Err(e) => {
                    tracing::warn!("Last.fm cover search failed: {}", e);
                }
            }
        }

        Err(CoverError::NoMatches)
    }
}

/// Split a free-text term into (artist, album) for Last.fm.
///
/// First whitespace token is the artist, the rest the album. Terms with
/// fewer than two tokens can't be split and skip the Last.fm stage.
fn split_term(term: &str) -> Option<(&str, String)> {
    let mut parts = term.split_whitespace();
    let artist = parts.next()?;
    let album = parts.collect::<Vec<_>>().join(" ");
    if album.is_empty() {
        return None;
    }
    Some((artist, album))
}
