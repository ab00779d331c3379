//! Guessed cover URLs for listed assets.
//!
//! The gateway stores covers under `covers/<sanitized album>.<JPG|PNG>`,
//! so a listed audio asset's cover can usually be guessed from its album
//! metadata without the gateway ever linking the two. The chain is:
//!
//! 1. `<public-base>/covers/<album>.JPG`
//! 2. `<public-base>/covers/<album>.PNG`
//! 3. the asset's recorded `coverUrl`, if any
//! 4. an inline SVG placeholder (terminal, never probed)

use crate::gateway::keys::sanitize_name;
use crate::gateway::Asset;

use super::probe::ImageProbe;

/// Inline placeholder shown when no cover candidate is reachable
pub const PLACEHOLDER_IMAGE: &str = "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 24 24' fill='none' stroke='%23ccc' stroke-width='2' stroke-linecap='round' stroke-linejoin='round'%3E%3Crect x='3' y='3' width='18' height='18' rx='2' ry='2'%3E%3C/rect%3E%3Ccircle cx='8.5' cy='8.5' r='1.5'%3E%3C/circle%3E%3Cpolyline points='21 15 16 10 5 21'%3E%3C/polyline%3E%3C/svg%3E";

/// Ordered cover URL candidates for a listed asset.
///
/// The placeholder is not included; it's the caller's terminal fallback.
pub fn cover_candidates(asset: &Asset, public_base_url: &str) -> Vec<String> {
    let mut candidates = Vec::new();
    let base = public_base_url.trim_end_matches('/');

    if let Some(meta) = &asset.metadata {
        let album = sanitize_name(meta.album.as_deref().unwrap_or(""));
        if !album.is_empty() {
            let encoded = urlencoding::encode(&album);
            candidates.push(format!("{}/covers/{}.JPG", base, encoded));
            candidates.push(format!("{}/covers/{}.PNG", base, encoded));
        }

        if let Some(cover_url) = meta.cover_url.as_deref()
            && !cover_url.is_empty()
        {
            candidates.push(cover_url.to_string());
        }
    }

    candidates
}

/// Resolve a listed asset's cover to the first reachable candidate.
///
/// Falls back to [`PLACEHOLDER_IMAGE`] when every candidate fails the
/// probe (or there are none).
pub async fn resolve_listed_cover(
    probe: &ImageProbe,
    asset: &Asset,
    public_base_url: &str,
) -> String {
    for candidate in cover_candidates(asset, public_base_url) {
        if probe.is_reachable(&candidate).await {
            return candidate;
        }
        tracing::debug!("Cover candidate unreachable for {}: {}", asset.name, candidate);
    }

    PLACEHOLDER_IMAGE.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{mock_asset, mock_asset_with_metadata};

    const BASE: &str = "https://media.example.dev";

    #[test]
    fn test_candidates_order() {
        let asset = mock_asset_with_metadata(
            "song.mp3",
            Some("Queen"),
            Some("Innuendo"),
            Some("https://cdn/custom.jpg"),
        );

        let candidates = cover_candidates(&asset, BASE);
        assert_eq!(
            candidates,
            vec![
                "https://media.example.dev/covers/Innuendo.JPG".to_string(),
                "https://media.example.dev/covers/Innuendo.PNG".to_string(),
                "https://cdn/custom.jpg".to_string(),
            ]
        );
    }

    #[test]
    fn test_candidates_album_is_sanitized_and_encoded() {
        let asset =
            mock_asset_with_metadata("song.mp3", None, Some("What's Going On?"), None);

        let candidates = cover_candidates(&asset, BASE);
        assert_eq!(
            candidates[0],
            "https://media.example.dev/covers/Whats%20Going%20On.JPG"
        );
    }

    #[test]
    fn test_candidates_without_album_skip_guesses() {
        let asset =
            mock_asset_with_metadata("song.mp3", Some("Queen"), None, Some("https://cdn/c.jpg"));

        let candidates = cover_candidates(&asset, BASE);
        assert_eq!(candidates, vec!["https://cdn/c.jpg".to_string()]);
    }

    #[test]
    fn test_candidates_without_metadata_are_empty() {
        let asset = mock_asset("song.mp3");
        assert!(cover_candidates(&asset, BASE).is_empty());
    }

    #[test]
    fn test_trailing_slash_base() {
        let asset = mock_asset_with_metadata("song.mp3", None, Some("Innuendo"), None);
        let candidates = cover_candidates(&asset, "https://media.example.dev/");
        assert_eq!(
            candidates[0],
            "https://media.example.dev/covers/Innuendo.JPG"
        );
    }

    #[tokio::test]
    async fn test_resolve_without_candidates_is_placeholder() {
        let probe = ImageProbe::with_timeout(std::time::Duration::from_millis(100));
        let asset = mock_asset("song.mp3");

        let resolved = resolve_listed_cover(&probe, &asset, BASE).await;
        assert_eq!(resolved, PLACEHOLDER_IMAGE);
    }
}
