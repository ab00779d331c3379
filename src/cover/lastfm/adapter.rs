//! Adapter layer: Convert Last.fm DTOs to domain models
//!
//! This is the ONLY place where DTO types are converted to domain types.

use super::dto;
use crate::cover::domain::{CoverCandidate, CoverSource};

/// Size label we consider good enough for cover storage
const WANTED_SIZE: &str = "extralarge";

/// Convert an album.getinfo response into a cover candidate.
///
/// Picks the `extralarge` artwork entry; Last.fm pads the image array with
/// empty URLs, so a present entry with an empty URL is still a miss.
pub fn to_candidate(response: dto::AlbumInfoResponse) -> Option<CoverCandidate> {
    let album = response.album?;

    let url = album
        .image
        .iter()
        .find(|img| img.size.as_deref() == Some(WANTED_SIZE))
        .and_then(|img| img.url.as_deref())
        .filter(|url| !url.is_empty())?
        .to_string();

    Some(CoverCandidate {
        url,
        title: album.name,
        artist: album.artist,
        source: CoverSource::Lastfm,
    })
}
