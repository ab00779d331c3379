//! Cover art module - finds and validates album artwork from external services.
//!
//! # Architecture
//!
//! This module follows a clean separation between:
//! - **Domain models** (`domain.rs`) - Internal types that represent our business logic
//! - **API DTOs** (`itunes/dto.rs`, `lastfm/dto.rs`) - Exact API response shapes
//! - **Adapters** - Convert DTOs to domain models
//! - **Clients** - HTTP clients for external APIs
//! - **Probe** - Image reachability validation
//! - **Service** - The iTunes -> Last.fm cascade
//! - **Fallback** - Guessed cover URLs for listed assets
//!
//! This decoupling means:
//! 1. API changes don't ripple through our codebase
//! 2. We can test API contracts independently
//! 3. We can swap providers without changing business logic
//!
//! # Usage
//!
//! ```ignore
//! use cover::{CoverResolver, CoverSearchConfig};
//!
//! let resolver = CoverResolver::new(CoverSearchConfig::default());
//! let hit = resolver.find_album_cover("Queen Innuendo").await?;
//! println!("{} (source: {})", hit.url, hit.source);
//! ```

pub mod domain;
pub mod fallback;
pub mod itunes;
pub mod lastfm;
pub mod probe;
pub mod service;

pub use domain::{CoverCandidate, CoverError, CoverSource};
pub use fallback::{cover_candidates, resolve_listed_cover, PLACEHOLDER_IMAGE};
pub use probe::ImageProbe;
pub use service::{CoverResolver, CoverSearchConfig};
