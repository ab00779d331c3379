//! Storage key naming for cover uploads.
//!
//! The gateway accepts an optional `key` field on upload; for cover images
//! we derive one from the track's tags so covers land under `covers/` with
//! a name the list view can guess back from the album metadata.

/// Strip characters that don't survive as storage key components.
///
/// Keeps ASCII alphanumerics, whitespace, CJK ideographs, and `.`, `-`, `_`.
pub fn sanitize_name(name: &str) -> String {
    name.chars()
        .filter(|c| {
            c.is_ascii_alphanumeric()
                || c.is_whitespace()
                || ('\u{4e00}'..='\u{9fa5}').contains(c)
                || matches!(c, '.' | '-' | '_')
        })
        .collect::<String>()
        .trim()
        .to_string()
}

/// Pick the stored cover extension from the source URL.
///
/// PNG sources keep PNG; everything else (including extension-less URLs)
/// is stored as JPG. The query string is ignored.
pub fn cover_extension(url: &str) -> &'static str {
    let path = url.split('?').next().unwrap_or(url).to_ascii_lowercase();
    if path.ends_with(".png") { ".PNG" } else { ".JPG" }
}

/// Build the storage key for a cover image.
///
/// Prefers the sanitized album name, then "artist title", then a
/// timestamped fallback so the key is never empty.
pub fn cover_key(album: &str, artist: &str, title: &str, cover_url: &str) -> String {
    let album_name = sanitize_name(album);

    let base = if !album_name.is_empty() {
        album_name
    } else {
        let combined = sanitize_name(&format!("{} {}", artist, title));
        if !combined.is_empty() {
            combined
        } else {
            format!("cover_{}", chrono::Utc::now().timestamp_millis())
        }
    };

    format!("covers/{}{}", base, cover_extension(cover_url))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_keeps_safe_characters() {
        assert_eq!(sanitize_name("A Night at the Opera"), "A Night at the Opera");
        assert_eq!(sanitize_name("track_01.v2-final"), "track_01.v2-final");
    }

    #[test]
    fn test_sanitize_strips_punctuation() {
        assert_eq!(sanitize_name("What's Going On?"), "Whats Going On");
        assert_eq!(sanitize_name("AC/DC: Back in Black!"), "ACDC Back in Black");
    }

    #[test]
    fn test_sanitize_keeps_cjk() {
        assert_eq!(sanitize_name("周杰伦 摩羯座"), "周杰伦 摩羯座");
    }

    #[test]
    fn test_sanitize_trims() {
        assert_eq!(sanitize_name("  padded  "), "padded");
        assert_eq!(sanitize_name("???"), "");
    }

    #[test]
    fn test_cover_extension() {
        assert_eq!(cover_extension("https://x/art.png"), ".PNG");
        assert_eq!(cover_extension("https://x/art.PNG?size=big"), ".PNG");
        assert_eq!(cover_extension("https://x/art.jpeg"), ".JPG");
        assert_eq!(cover_extension("https://x/art"), ".JPG");
        // .png in the query string doesn't count
        assert_eq!(cover_extension("https://x/art.jpg?from=a.png"), ".JPG");
    }

    #[test]
    fn test_cover_key_prefers_album() {
        let key = cover_key("Innuendo", "Queen", "The Show Must Go On", "https://x/a.jpg");
        assert_eq!(key, "covers/Innuendo.JPG");
    }

    #[test]
    fn test_cover_key_falls_back_to_artist_title() {
        let key = cover_key("", "Queen", "Innuendo", "https://x/a.png");
        assert_eq!(key, "covers/Queen Innuendo.PNG");
    }

    #[test]
    fn test_cover_key_timestamp_fallback() {
        let key = cover_key("", "", "", "https://x/a.jpg");
        assert!(key.starts_with("covers/cover_"));
        assert!(key.ends_with(".JPG"));
    }
}
