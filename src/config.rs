//! Configuration system using TOML files.
//!
//! Config is stored in the OS-standard config directory:
//! - Windows: %APPDATA%\music-courier\config.toml
//! - macOS: ~/Library/Application Support/music-courier/config.toml
//! - Linux: ~/.config/music-courier/config.toml
//!
//! The config file is human-readable and editable. Settings are
//! loaded at startup; CLI flags and environment variables override
//! individual values per invocation.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Gateway endpoints
    pub gateway: GatewayConfig,

    /// API credentials (keep separate for potential future encryption)
    pub credentials: Credentials,

    /// Cover art search settings
    pub cover: CoverConfig,
}

/// Gateway endpoint settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Base URL of the storage gateway (the upload/list/delete endpoint)
    pub base_url: String,

    /// Public base URL under which stored assets are served.
    /// Falls back to `base_url` when empty.
    pub public_base_url: String,
}

impl GatewayConfig {
    /// The public base URL, falling back to the gateway URL when not set.
    pub fn public_base(&self) -> &str {
        if self.public_base_url.is_empty() {
            &self.base_url
        } else {
            &self.public_base_url
        }
    }
}

/// API credentials
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Credentials {
    /// Last.fm API key for the album.getinfo cover fallback
    pub lastfm_api_key: Option<String>,
}

/// Cover art search settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverConfig {
    /// iTunes store country code for searches
    pub country: String,

    /// Requested artwork edge size in pixels
    pub size: u32,

    /// Timeout for the image reachability probe, in milliseconds
    pub probe_timeout_ms: u64,
}

impl Default for CoverConfig {
    fn default() -> Self {
        Self {
            country: "sg".to_string(),
            size: 1200,
            probe_timeout_ms: 2500,
        }
    }
}

// ============================================================================
// Config File Operations
// ============================================================================

/// Get the config directory path
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("music-courier"))
}

/// Get the full path to the config file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load configuration from disk
///
/// Returns default config if file doesn't exist or can't be parsed.
/// Logs warnings but doesn't fail - we always return a usable config.
pub fn load() -> Config {
    let Some(path) = config_path() else {
        tracing::warn!("Could not determine config directory, using defaults");
        return Config::default();
    };

    if !path.exists() {
        tracing::debug!("No config file found at {:?}, using defaults", path);
        return Config::default();
    }

    match std::fs::read_to_string(&path) {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(config) => {
                tracing::debug!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                tracing::error!("Failed to parse config file {:?}: {}", path, e);
                tracing::warn!("Using default configuration");
                Config::default()
            }
        },
        Err(e) => {
            tracing::error!("Failed to read config file {:?}: {}", path, e);
            Config::default()
        }
    }
}

/// Save configuration to disk
///
/// Creates the config directory if it doesn't exist.
pub fn save(config: &Config) -> Result<(), ConfigError> {
    let dir = config_dir().ok_or(ConfigError::NoConfigDir)?;
    save_to(config, &dir)
}

/// Save configuration into a specific directory (split out for tests)
fn save_to(config: &Config, dir: &std::path::Path) -> Result<(), ConfigError> {
    let path = dir.join("config.toml");

    // Ensure directory exists
    std::fs::create_dir_all(dir).map_err(|e| ConfigError::CreateDir(dir.to_path_buf(), e))?;

    // Serialize to pretty TOML
    let contents = toml::to_string_pretty(config).map_err(ConfigError::Serialize)?;

    // Write atomically (write to temp, then rename)
    let temp_path = path.with_extension("toml.tmp");
    std::fs::write(&temp_path, &contents).map_err(|e| ConfigError::Write(temp_path.clone(), e))?;
    std::fs::rename(&temp_path, &path)
        .map_err(|e| ConfigError::Rename(temp_path, path.clone(), e))?;

    tracing::info!("Saved config to {:?}", path);
    Ok(())
}

// ============================================================================
// Error Types
// ============================================================================

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to create config directory {0}: {1}")]
    CreateDir(PathBuf, std::io::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(toml::ser::Error),

    #[error("Failed to write config to {0}: {1}")]
    Write(PathBuf, std::io::Error),

    #[error("Failed to rename temp file {0} to {1}: {2}")]
    Rename(PathBuf, PathBuf, std::io::Error),
}

// ============================================================================
// Tests
// ============================================================================
