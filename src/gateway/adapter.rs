//! Adapter layer: Convert gateway DTOs to domain models
//!
//! This is the ONLY place where DTO types are converted to domain types.
//! This isolates API changes - if the gateway changes its response format,
//! only this file and dto.rs need to change.

use chrono::{DateTime, Utc};

use super::domain::{Asset, AssetKind, AssetList, AssetMetadata};
use super::dto;

/// Convert a list response into the domain snapshot
pub fn to_asset_list(response: dto::ListResponse) -> AssetList {
    let assets = response
        .assets
        .unwrap_or_default()
        .into_iter()
        .map(to_asset)
        .collect();

    AssetList {
        assets,
        count: response.count,
        updated_at: response.updated_at.as_ref().and_then(parse_updated_at),
    }
}

/// Convert one asset DTO
pub fn to_asset(dto: dto::AssetDto) -> Asset {
    let kind = match dto.asset_type.as_deref() {
        Some("audio") => AssetKind::Audio,
        Some(other) => AssetKind::Other(other.to_string()),
        None => AssetKind::Other(String::new()),
    };

    Asset {
        name: dto.name,
        kind,
        url: dto.url,
        metadata: dto.metadata.map(to_metadata),
    }
}

/// Convert upload-time metadata
pub fn to_metadata(dto: dto::AssetMetadataDto) -> AssetMetadata {
    AssetMetadata {
        artist: dto.artist,
        album: dto.album,
        cover_url: dto.cover_url,
    }
}

/// Parse the gateway's `updatedAt`, which is either an RFC 3339 string or
/// epoch milliseconds.
fn parse_updated_at(value: &serde_json::Value) -> Option<DateTime<Utc>> {
    match value {
        serde_json::Value::String(s) => DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
        serde_json::Value::Number(n) => n.as_i64().and_then(DateTime::from_timestamp_millis),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_asset_dto(name: &str, asset_type: Option<&str>) -> dto::AssetDto {
        dto::AssetDto {
            name: name.to_string(),
            asset_type: asset_type.map(String::from),
            url: format!("https://media.example.dev/{}", name),
            metadata: None,
        }
    }

    #[test]
    fn test_audio_kind() {
        let asset = to_asset(make_asset_dto("song.mp3", Some("audio")));
        assert_eq!(asset.kind, AssetKind::Audio);
    }

    #[test]
    fn test_other_kind_preserves_label() {
        let asset = to_asset(make_asset_dto("cover.jpg", Some("image")));
        assert_eq!(asset.kind, AssetKind::Other("image".to_string()));
    }

    #[test]
    fn test_missing_type_is_other() {
        let asset = to_asset(make_asset_dto("blob", None));
        assert!(!asset.kind.is_audio());
    }

    #[test]
    fn test_parse_updated_at_rfc3339() {
        let value = serde_json::json!("2024-06-01T12:00:00Z");
        let dt = parse_updated_at(&value).unwrap();
        assert_eq!(dt.timestamp(), 1717243200);
    }

    #[test]
    fn test_parse_updated_at_epoch_millis() {
        let value = serde_json::json!(1717243200000_i64);
        let dt = parse_updated_at(&value).unwrap();
        assert_eq!(dt.timestamp(), 1717243200);
    }

    #[test]
    fn test_parse_updated_at_garbage() {
        assert!(parse_updated_at(&serde_json::json!(["nope"])).is_none());
        assert!(parse_updated_at(&serde_json::json!("not a date")).is_none());
    }

    #[test]
    fn test_list_without_assets_is_empty() {
        let response = dto::ListResponse {
            assets: None,
            count: 0,
            updated_at: None,
            error: None,
        };
        let list = to_asset_list(response);
        assert!(list.assets.is_empty());
        assert!(list.updated_at.is_none());
    }
}
