//! iTunes Search API Data Transfer Objects
//!
//! These types match EXACTLY what the iTunes Search API returns.
//! DO NOT add fields that aren't in the API response.
//! DO NOT use these types outside the itunes module - convert to domain types.
//!
//! API Reference: https://performance-partners.apple.com/search-api
//!
//! We query with `entity=album` and only read the artwork fields of the
//! first result.

use serde::{Deserialize, Serialize};

/// Search response wrapper
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    #[serde(default)]
    pub result_count: u32,
    #[serde(default)]
    pub results: Vec<AlbumHit>,
}

/// One album result
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumHit {
    /// 100x100 artwork thumbnail URL (upscaled by rewriting the size segment)
    pub artwork_url_100: Option<String>,
    /// Album title
    pub collection_name: Option<String>,
    /// Artist name
    pub artist_name: Option<String>,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// If these fail, the API has changed and we need to update our DTOs.
// ============================================================================

#[cfg(test)]
mod contract_tests {
    use super::*;

    /// Test parsing a typical album search hit
    #[test]
    fn test_parse_album_hit() {
        let json = r#"{
            "resultCount": 1,
            "results": [{
                "wrapperType": "collection",
                "collectionType": "Album",
                "artistName": "Queen",
                "collectionName": "A Night at the Opera",
                "artworkUrl100": "https://is1-ssl.mzstatic.com/image/thumb/Music/aa/bb/cc/source/100x100bb.jpg",
                "country": "SGP"
            }]
        }"#;

        let response: SearchResponse =
            serde_json::from_str(json).expect("Should parse album search");

        assert_eq!(response.result_count, 1);
        let hit = &response.results[0];
        assert_eq!(hit.artist_name.as_deref(), Some("Queen"));
        assert_eq!(hit.collection_name.as_deref(), Some("A Night at the Opera"));
        assert!(hit.artwork_url_100.as_deref().unwrap().contains("100x100bb."));
    }

    /// Test parsing an empty search result
    #[test]
    fn test_parse_empty_results() {
        let json = r#"{ "resultCount": 0, "results": [] }"#;

        let response: SearchResponse = serde_json::from_str(json).expect("Should parse empty");
        assert_eq!(response.result_count, 0);
        assert!(response.results.is_empty());
    }

    /// Test parsing a hit with no artwork
    #[test]
    fn test_parse_hit_without_artwork() {
        let json = r#"{
            "resultCount": 1,
            "results": [{ "collectionName": "Obscure Album", "artistName": "Nobody" }]
        }"#;

        let response: SearchResponse =
            serde_json::from_str(json).expect("Should parse artwork-less hit");
        assert!(response.results[0].artwork_url_100.is_none());
    }
}
