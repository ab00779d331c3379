//! Gateway API Data Transfer Objects
//!
//! These types match EXACTLY what the storage gateway returns.
//! DO NOT add fields that aren't in the API response.
//! DO NOT use these types outside the gateway module - convert to domain types.
//!
//! The gateway speaks three shapes:
//! - POST (multipart upload): `{ keyUsed, metadata?, error? }`
//! - GET `?action=list`:      `{ assets: [...], count, updatedAt }`
//! - DELETE `?key=...`:       `{ ok, remaining?, error? }`

use serde::{Deserialize, Serialize};

/// Upload response
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    /// The storage key the gateway chose (absent on failure)
    pub key_used: Option<String>,
    /// Metadata the gateway recorded alongside the asset
    pub metadata: Option<AssetMetadataDto>,
    /// Error text on failure
    pub error: Option<String>,
}

/// List response
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse {
    /// Stored assets (absent on failure)
    pub assets: Option<Vec<AssetDto>>,
    /// Total asset count
    #[serde(default)]
    pub count: u64,
    /// Last update time. The gateway has been observed sending both an
    /// RFC 3339 string and an epoch-milliseconds number here.
    pub updated_at: Option<serde_json::Value>,
    /// Error text on failure
    pub error: Option<String>,
}

/// One stored asset in the list response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AssetDto {
    /// Storage key
    pub name: String,
    /// Asset type ("audio" or other)
    #[serde(rename = "type")]
    pub asset_type: Option<String>,
    /// Public URL
    pub url: String,
    /// Optional upload-time metadata
    pub metadata: Option<AssetMetadataDto>,
}

/// Upload-time metadata attached to an asset
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetMetadataDto {
    pub artist: Option<String>,
    pub album: Option<String>,
    pub cover_url: Option<String>,
}

/// Delete response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DeleteResponse {
    /// Whether the delete succeeded
    #[serde(default)]
    pub ok: bool,
    /// Remaining asset count after the delete
    pub remaining: Option<u64>,
    /// Error text on failure
    pub error: Option<String>,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the gateway returns.
// If these fail, the gateway has changed and we need to update our DTOs.
// ============================================================================
