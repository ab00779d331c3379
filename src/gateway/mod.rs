//! Storage gateway module - uploads, lists, and deletes remote assets.
//!
//! # Architecture
//!
//! This module follows a clean separation between:
//! - **Domain models** (`domain.rs`) - Internal types that represent our business logic
//! - **API DTOs** (`dto.rs`) - Exact gateway response shapes
//! - **Adapter** (`adapter.rs`) - Converts DTOs to domain models
//! - **Client** (`client.rs`) - HTTP client for the gateway
//! - **Keys** (`keys.rs`) - Storage key naming for cover uploads
//!
//! The gateway owns persistence, storage layout, and (for audio) key
//! naming; this module only consumes its API.

pub mod adapter;
pub mod client;
pub mod domain;
pub mod dto;
pub mod keys;

pub use client::GatewayClient;
pub use domain::{
    Asset, AssetDownload, AssetKind, AssetList, AssetMetadata, DeleteOutcome, GatewayError,
    UploadReceipt,
};
pub use keys::{cover_key, sanitize_name};
