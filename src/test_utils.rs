//! Shared test utilities and mock factories.
//!
//! Only compiled for tests; keeps fixture construction out of the
//! individual test modules.

use crate::gateway::{Asset, AssetKind, AssetMetadata};
use crate::metadata::TrackMetadata;

/// A fully-tagged track for upload tests
pub fn mock_track_metadata() -> TrackMetadata {
    TrackMetadata {
        title: "Innuendo".to_string(),
        artist: "Queen".to_string(),
        album: "Innuendo".to_string(),
        duration: 393,
        track_number: Some(1),
    }
}

/// A listed audio asset without any recorded metadata
pub fn mock_asset(name: &str) -> Asset {
    Asset {
        name: name.to_string(),
        kind: AssetKind::Audio,
        url: format!("https://media.example.dev/{}", name),
        metadata: None,
    }
}

/// A listed audio asset with the given recorded metadata fields
pub fn mock_asset_with_metadata(
    name: &str,
    artist: Option<&str>,
    album: Option<&str>,
    cover_url: Option<&str>,
) -> Asset {
    Asset {
        metadata: Some(AssetMetadata {
            artist: artist.map(String::from),
            album: album.map(String::from),
            cover_url: cover_url.map(String::from),
        }),
        ..mock_asset(name)
    }
}
