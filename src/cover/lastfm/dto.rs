//! Last.fm album.getinfo Data Transfer Objects
//!
//! These types match EXACTLY what the Last.fm API returns.
//! DO NOT add fields that aren't in the API response.
//! DO NOT use these types outside the lastfm module - convert to domain types.
//!
//! API Reference: https://www.last.fm/api/show/album.getInfo
//!
//! Last.fm returns errors as `{ "error": <code>, "message": "..." }` with
//! HTTP 200, so the error fields live on the top-level response type.

use serde::{Deserialize, Serialize};

/// album.getinfo response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AlbumInfoResponse {
    /// The album, when found
    pub album: Option<Album>,
    /// Last.fm error code (present on failure)
    pub error: Option<i64>,
    /// Human-readable error message
    pub message: Option<String>,
}

/// Album info
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Album {
    /// Album title
    pub name: Option<String>,
    /// Artist name
    pub artist: Option<String>,
    /// Artwork in ascending sizes (small .. mega)
    #[serde(default)]
    pub image: Vec<Image>,
}

/// One artwork entry
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Image {
    /// Size label ("small", "medium", "large", "extralarge", "mega")
    pub size: Option<String>,
    /// Image URL (may be empty when Last.fm has no art at this size)
    #[serde(rename = "#text")]
    pub url: Option<String>,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// If these fail, the API has changed and we need to update our DTOs.
// ============================================================================

#[cfg(test)]
mod contract_tests {
    use super::*;

    /// Test parsing a typical album response
    #[test]
    fn test_parse_album_info() {
        let json = r##"{
            "album": {
                "artist": "Queen",
                "name": "Innuendo",
                "image": [
                    { "size": "small", "#text": "https://lastfm.freetls.fastly.net/i/u/34s/a.png" },
                    { "size": "extralarge", "#text": "https://lastfm.freetls.fastly.net/i/u/300x300/a.png" }
                ]
            }
        }"##;

        let response: AlbumInfoResponse =
            serde_json::from_str(json).expect("Should parse album info");

        let album = response.album.unwrap();
        assert_eq!(album.name.as_deref(), Some("Innuendo"));
        assert_eq!(album.artist.as_deref(), Some("Queen"));
        assert_eq!(album.image.len(), 2);
        assert_eq!(album.image[1].size.as_deref(), Some("extralarge"));
    }

    /// Test parsing an image entry with the empty-URL placeholder
    #[test]
    fn test_parse_empty_image_text() {
        let json = r##"{ "size": "extralarge", "#text": "" }"##;

        let image: Image = serde_json::from_str(json).expect("Should parse empty image");
        assert_eq!(image.url.as_deref(), Some(""));
    }

    /// Test parsing the error shape (sent with HTTP 200)
    #[test]
    fn test_parse_error_response() {
        let json = r#"{ "error": 6, "message": "Album not found" }"#;

        let response: AlbumInfoResponse = serde_json::from_str(json).expect("Should parse error");
        assert!(response.album.is_none());
        assert_eq!(response.error, Some(6));
        assert_eq!(response.message.as_deref(), Some("Album not found"));
    }
}
