//! Internal domain models for cover art search.
//!
//! These types are OUR types - they don't change when external APIs change.
//! All external API responses get converted into these types via adapters.

use std::fmt;

/// A cover art candidate produced by a search provider.
///
/// Candidates are transient: the cascade probes them for reachability and
/// hands the first valid one to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverCandidate {
    /// Image URL
    pub url: String,
    /// Album title as the provider knows it
    pub title: Option<String>,
    /// Artist name as the provider knows it
    pub artist: Option<String>,
    /// Which provider produced this candidate
    pub source: CoverSource,
}

/// Where a cover candidate came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverSource {
    Itunes,
    Lastfm,
}

impl fmt::Display for CoverSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoverSource::Itunes => write!(f, "itunes"),
            CoverSource::Lastfm => write!(f, "lastfm"),
        }
    }
}

/// Errors that can occur during cover art search
#[derive(Debug, thiserror::Error)]
pub enum CoverError {
    #[error("network error: {0}")]
    Network(String),

    #[error("failed to parse response: {0}")]
    Parse(String),

    #[error("API request failed: {0}")]
    ApiError(String),

    #[error("no matching cover found")]
    NoMatches,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_display() {
        assert_eq!(CoverSource::Itunes.to_string(), "itunes");
        assert_eq!(CoverSource::Lastfm.to_string(), "lastfm");
    }
}
