//! Internal domain models for gateway assets.
//!
//! These types are OUR types - they don't change when the gateway's wire
//! format changes. All gateway responses get converted into these types
//! via the adapter.

use chrono::{DateTime, Utc};

/// What kind of asset the gateway stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetKind {
    /// An audio file (playable)
    Audio,
    /// Anything else the gateway reports (images, unknown)
    Other(String),
}

impl AssetKind {
    /// Whether this asset is playable audio
    pub fn is_audio(&self) -> bool {
        matches!(self, AssetKind::Audio)
    }
}

/// Metadata the gateway recorded alongside an asset
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetMetadata {
    /// Artist name
    pub artist: Option<String>,
    /// Album title
    pub album: Option<String>,
    /// Cover image URL recorded at upload time
    pub cover_url: Option<String>,
}

/// A stored file as described by the gateway's list response
#[derive(Debug, Clone)]
pub struct Asset {
    /// Storage key (also the delete handle)
    pub name: String,
    /// Asset kind
    pub kind: AssetKind,
    /// Public URL the gateway serves this asset under
    pub url: String,
    /// Optional metadata recorded at upload time
    pub metadata: Option<AssetMetadata>,
}

impl Asset {
    /// Artist for display, with the unknown fallback
    pub fn artist_display(&self) -> &str {
        self.metadata
            .as_ref()
            .and_then(|m| m.artist.as_deref())
            .filter(|s| !s.is_empty())
            .unwrap_or("Unknown Artist")
    }

    /// Album for display, with the unknown fallback
    pub fn album_display(&self) -> &str {
        self.metadata
            .as_ref()
            .and_then(|m| m.album.as_deref())
            .filter(|s| !s.is_empty())
            .unwrap_or("Unknown Album")
    }
}

/// A snapshot of the gateway's asset list
#[derive(Debug, Clone)]
pub struct AssetList {
    /// Stored assets, in gateway order
    pub assets: Vec<Asset>,
    /// Total count as reported by the gateway
    pub count: u64,
    /// When the gateway last updated the list, if it said
    pub updated_at: Option<DateTime<Utc>>,
}

/// Result of a successful upload
#[derive(Debug, Clone)]
pub struct UploadReceipt {
    /// The storage key the gateway actually used
    pub key_used: String,
    /// Metadata the gateway recorded
    pub metadata: Option<AssetMetadata>,
}

/// Result of a successful delete
#[derive(Debug, Clone)]
pub struct DeleteOutcome {
    /// How many assets remain, if the gateway said
    pub remaining: Option<u64>,
}

/// Raw bytes fetched from an asset's public URL
#[derive(Debug, Clone)]
pub struct AssetDownload {
    /// The asset bytes
    pub data: Vec<u8>,
    /// MIME type from the response headers
    pub mime_type: String,
}

/// Errors that can occur talking to the gateway
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("network error: {0}")]
    Network(String),

    #[error("failed to parse response: {0}")]
    Parse(String),

    #[error("gateway rejected the request: {0}")]
    Rejected(String),

    #[error("no such asset: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_kind_is_audio() {
        assert!(AssetKind::Audio.is_audio());
        assert!(!AssetKind::Other("image".to_string()).is_audio());
    }

    #[test]
    fn test_display_fallbacks() {
        let asset = Asset {
            name: "song.mp3".to_string(),
            kind: AssetKind::Audio,
            url: "https://media.example.dev/song.mp3".to_string(),
            metadata: None,
        };
        assert_eq!(asset.artist_display(), "Unknown Artist");
        assert_eq!(asset.album_display(), "Unknown Album");
    }

    #[test]
    fn test_display_empty_strings_fall_back() {
        let asset = Asset {
            name: "song.mp3".to_string(),
            kind: AssetKind::Audio,
            url: "https://media.example.dev/song.mp3".to_string(),
            metadata: Some(AssetMetadata {
                artist: Some(String::new()),
                album: Some("Night Songs".to_string()),
                cover_url: None,
            }),
        };
        assert_eq!(asset.artist_display(), "Unknown Artist");
        assert_eq!(asset.album_display(), "Night Songs");
    }
}
