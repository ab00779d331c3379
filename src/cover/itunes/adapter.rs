//! Adapter layer: Convert iTunes DTOs to domain models
//!
//! This is the ONLY place where DTO types are converted to domain types.

use super::dto;
use crate::cover::domain::{CoverCandidate, CoverSource};

/// Convert a search response into a cover candidate, if the first hit
/// carries artwork.
pub fn to_candidate(response: dto::SearchResponse, size: u32) -> Option<CoverCandidate> {
    let hit = response.results.into_iter().next()?;
    let artwork = hit.artwork_url_100?;

    Some(CoverCandidate {
        url: upscale_artwork(&artwork, size),
        title: hit.collection_name,
        artist: hit.artist_name,
        source: CoverSource::Itunes,
    })
}

/// Rewrite the `NNNxNNNbb.` size segment of an iTunes artwork URL.
///
/// iTunes returns 100x100 thumbnails, but the CDN serves any edge size
/// when the path segment is rewritten. URLs without a size segment are
/// returned unchanged.
pub fn upscale_artwork(url: &str, size: u32) -> String {
    let replaced = size_segment(url).map(|(start, end)| {
        let mut out = String::with_capacity(url.len() + 8);
        out.push_str(&url[..start]);
        out.push_str(&format!("{}x{}bb.", size, size));
        out.push_str(&url[end..]);
        out
    });

    replaced.unwrap_or_else(|| url.to_string())
}

/// Find the byte range of a `NNNxNNNbb.` path segment, if any
fn size_segment(url: &str) -> Option<(usize, usize)> {
    let marker = "bb.";
    let mut search_from = 0;

    while let Some(pos) = url[search_from..].find(marker) {
        let marker_at = search_from + pos;
        let prefix = &url[..marker_at];

        // Walk back over "NNNxNNN" immediately before "bb."
        let bytes = prefix.as_bytes();
        let mut i = bytes.len();
        while i > 0 && bytes[i - 1].is_ascii_digit() {
            i -= 1;
        }
        let second = &prefix[i..];
        if !second.is_empty() && i > 0 && bytes[i - 1] == b'x' {
            let mut j = i - 1;
            while j > 0 && bytes[j - 1].is_ascii_digit() {
                j -= 1;
            }
            let first = &prefix[j..i - 1];
            // Segment must sit at a path boundary
            if !first.is_empty() && (j == 0 || bytes[j - 1] == b'/') {
                return Some((j, marker_at + marker.len()));
            }
        }

        search_from = marker_at + marker.len();
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upscale_standard_thumbnail() {
        let url = "https://is1-ssl.mzstatic.com/image/thumb/source/100x100bb.jpg";
        assert_eq!(
            upscale_artwork(url, 1200),
            "https://is1-ssl.mzstatic.com/image/thumb/source/1200x1200bb.jpg"
        );
    }

    #[test]
    fn test_upscale_other_sizes() {
        let url = "https://cdn/art/60x60bb.png";
        assert_eq!(upscale_artwork(url, 600), "https://cdn/art/600x600bb.png");
    }

    #[test]
    fn test_upscale_leaves_unsized_urls_alone() {
        let url = "https://cdn/art/cover.jpg";
        assert_eq!(upscale_artwork(url, 1200), url);
    }

    #[test]
    fn test_upscale_ignores_mid_segment_bb() {
        // "bb." not preceded by a size pattern stays untouched
        let url = "https://cdn/abba/bb.jpg";
        assert_eq!(upscale_artwork(url, 1200), url);
    }

    #[test]
    fn test_to_candidate_takes_first_hit() {
        let response = dto::SearchResponse {
            result_count: 2,
            results: vec![
                dto::AlbumHit {
                    artwork_url_100: Some("https://cdn/a/100x100bb.jpg".to_string()),
                    collection_name: Some("First".to_string()),
                    artist_name: Some("Artist".to_string()),
                },
                dto::AlbumHit {
                    artwork_url_100: Some("https://cdn/b/100x100bb.jpg".to_string()),
                    collection_name: Some("Second".to_string()),
                    artist_name: None,
                },
            ],
        };

        let candidate = to_candidate(response, 1200).unwrap();
        assert_eq!(candidate.url, "https://cdn/a/1200x1200bb.jpg");
        assert_eq!(candidate.title.as_deref(), Some("First"));
        assert_eq!(candidate.source, CoverSource::Itunes);
    }

    #[test]
    fn test_to_candidate_requires_artwork() {
        let response = dto::SearchResponse {
            result_count: 1,
            results: vec![dto::AlbumHit {
                artwork_url_100: None,
                collection_name: Some("No Art".to_string()),
                artist_name: None,
            }],
        };

        assert!(to_candidate(response, 1200).is_none());
    }

    #[test]
    fn test_to_candidate_empty_results() {
        let response = dto::SearchResponse {
            result_count: 0,
            results: vec![],
        };
        assert!(to_candidate(response, 1200).is_none());
    }
}
