//! CLI command definitions and handlers.
//!
//! Each subcommand is implemented as a function that takes the parsed arguments
//! and returns an `anyhow::Result<()>`.

use anyhow::bail;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};
use tokio::runtime::Runtime;

use crate::cover::{CoverError, CoverResolver, CoverSearchConfig, ImageProbe};
use crate::gateway::{self, GatewayClient};
use crate::{config, cover, metadata};

/// Music Courier CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Gateway base URL (overrides config)
    #[arg(long, env = "MUSIC_GATEWAY_URL", global = true)]
    pub gateway_url: Option<String>,

    /// Public base URL stored assets are served under (overrides config)
    #[arg(long, env = "MUSIC_PUBLIC_BASE_URL", global = true)]
    pub public_base_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Upload an audio file (and optionally its cover) to the gateway
    Upload {
        /// Path to the audio file
        file: PathBuf,
        /// Override the track title read from tags
        #[arg(long)]
        title: Option<String>,
        /// Override the artist read from tags
        #[arg(long)]
        artist: Option<String>,
        /// Override the album read from tags
        #[arg(long)]
        album: Option<String>,
        /// Cover image URL to upload alongside the track
        #[arg(long)]
        cover_url: Option<String>,
        /// Search iTunes/Last.fm for a cover when none is given
        #[arg(long)]
        search_cover: bool,
        /// Last.fm API key for the cover search fallback
        #[arg(long, env = "LASTFM_API_KEY")]
        lastfm_api_key: Option<String>,
    },
    /// Read and print the embedded tags of a local audio file
    Inspect {
        /// Path to the audio file
        file: PathBuf,
    },
    /// Search external APIs for album cover art
    FindCover {
        /// Free-text search term (defaults to "<artist> <album>")
        term: Option<String>,
        /// Artist name (used when no term is given)
        #[arg(long)]
        artist: Option<String>,
        /// Album title (used when no term is given)
        #[arg(long)]
        album: Option<String>,
        /// iTunes store country code
        #[arg(long)]
        country: Option<String>,
        /// Requested artwork edge size in pixels
        #[arg(long)]
        size: Option<u32>,
        /// Last.fm API key (or set LASTFM_API_KEY env var)
        #[arg(long, env = "LASTFM_API_KEY")]
        lastfm_api_key: Option<String>,
    },
    /// List assets stored on the gateway
    List {
        /// Resolve each asset's cover URL (probes the network)
        #[arg(long)]
        covers: bool,
    },
    /// Print the public URL of a stored asset
    Url {
        /// Storage key
        key: String,
    },
    /// Download a stored asset to a local file
    Download {
        /// Storage key
        key: String,
        /// Output path (defaults to the key's file name)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Delete a stored asset
    Delete {
        /// Storage key
        key: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Show settings, or persist them when any override flag is given
    Config {
        /// Last.fm API key to store in the config file
        #[arg(long)]
        lastfm_api_key: Option<String>,
    },
}

/// Run the specified CLI command.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    let rt = Runtime::new()?;

    let mut config = config::load();
    if let Some(ref url) = cli.gateway_url {
        config.gateway.base_url = url.trim_end_matches('/').to_string();
    }
    if let Some(ref url) = cli.public_base_url {
        config.gateway.public_base_url = url.trim_end_matches('/').to_string();
    }

    match &cli.command {
        Commands::Upload {
            file,
            title,
            artist,
            album,
            cover_url,
            search_cover,
            lastfm_api_key,
        } => cmd_upload(
            &rt,
            &config,
            file,
            title.as_deref(),
            artist.as_deref(),
            album.as_deref(),
            cover_url.as_deref(),
            *search_cover,
            lastfm_api_key.as_deref(),
        ),
        Commands::Inspect { file } => cmd_inspect(file),
        Commands::FindCover {
            term,
            artist,
            album,
            country,
            size,
            lastfm_api_key,
        } => cmd_find_cover(
            &rt,
            &config,
            term.as_deref(),
            artist.as_deref(),
            album.as_deref(),
            country.as_deref(),
            *size,
            lastfm_api_key.as_deref(),
        ),
        Commands::List { covers } => cmd_list(&rt, &config, *covers),
        Commands::Url { key } => cmd_url(&config, key),
        Commands::Download { key, output } => cmd_download(&rt, &config, key, output.as_deref()),
        Commands::Delete { key, yes } => cmd_delete(&rt, &config, key, *yes),
        Commands::Config { lastfm_api_key } => {
            // The global URL flags were already merged into `config` above
            let changed = cli.gateway_url.is_some()
                || cli.public_base_url.is_some()
                || lastfm_api_key.is_some();
            cmd_config(&mut config, lastfm_api_key.as_deref(), changed)
        }
    }
}

// ============================================================================
// Individual command implementations
// ============================================================================

#[allow(clippy::too_many_arguments)]
fn cmd_upload(
    rt: &Runtime,
    config: &config::Config,
    file: &Path,
    title: Option<&str>,
    artist: Option<&str>,
    album: Option<&str>,
    cover_url: Option<&str>,
    search_cover: bool,
    lastfm_api_key: Option<&str>,
) -> anyhow::Result<()> {
    let client = gateway_client(config)?;

    // Read tags first so overrides and the cover search can use them
    let mut tags = metadata::read_or_fallback(file);
    if let Some(title) = title {
        tags.title = title.to_string();
    }
    if let Some(artist) = artist {
        tags.artist = artist.to_string();
    }
    if let Some(album) = album {
        tags.album = album.to_string();
    }

    rt.block_on(async {
        println!("Uploading {}...", file.display());

        let receipt = client.upload_file(file, &tags).await?;
        let public_url = client.public_url(&receipt.key_used);
        println!("✓ Uploaded as {}", receipt.key_used);
        println!("  {}", public_url);

        // Figure out the cover URL: explicit flag wins, then the search cascade
        let mut cover = cover_url.map(String::from);
        if cover.is_none() && search_cover {
            let term = format!("{} {}", tags.artist, tags.album);
            let term = term.trim();
            if term.is_empty() {
                eprintln!("Skipping cover search: no artist/album tags to search with");
            } else {
                println!("Searching cover for: {}", term);
                let resolver =
                    CoverResolver::new(cover_search_config(config, lastfm_api_key, None, None));
                match resolver.find_album_cover(term).await {
                    Ok(hit) => {
                        println!("✓ Found cover (source: {})", hit.source);
                        println!("  {}", hit.url);
                        cover = Some(hit.url);
                    }
                    Err(CoverError::NoMatches) => println!("✗ No matching cover found"),
                    Err(e) => eprintln!("Cover search failed: {}", e),
                }
            }
        }

        // Cover upload is best-effort: a failure never undoes the audio upload
        if let Some(cover_url) = cover {
            let key = gateway::cover_key(&tags.album, &tags.artist, &tags.title, &cover_url);
            println!("Uploading cover as {}...", key);
            match client.upload_from_url(&cover_url, Some(&key)).await {
                Ok(cover_receipt) => println!("✓ Cover uploaded: {}", cover_receipt.key_used),
                Err(e) => eprintln!("✗ Cover upload failed: {}", e),
            }
        }

        Ok(())
    })
}

fn cmd_inspect(file: &Path) -> anyhow::Result<()> {
    let tags = metadata::read_or_fallback(file);

    println!("Tags for {}:", file.display());
    println!("  Title:    {}", tags.title);
    println!(
        "  Artist:   {}",
        if tags.artist.is_empty() { "(none)" } else { &tags.artist }
    );
    println!(
        "  Album:    {}",
        if tags.album.is_empty() { "(none)" } else { &tags.album }
    );
    println!("  Duration: {}", format_duration(tags.duration));
    if let Some(track) = tags.track_number {
        println!("  Track:    {}", track);
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn cmd_find_cover(
    rt: &Runtime,
    config: &config::Config,
    term: Option<&str>,
    artist: Option<&str>,
    album: Option<&str>,
    country: Option<&str>,
    size: Option<u32>,
    lastfm_api_key: Option<&str>,
) -> anyhow::Result<()> {
    // Term defaults to "<artist> <album>", matching what upload searches with
    let term = match term {
        Some(t) => t.to_string(),
        None => {
            let combined = format!(
                "{} {}",
                artist.unwrap_or_default(),
                album.unwrap_or_default()
            );
            combined.trim().to_string()
        }
    };

    if term.is_empty() {
        bail!("provide a search term, or --artist and --album");
    }

    let resolver = CoverResolver::new(cover_search_config(config, lastfm_api_key, country, size));

    rt.block_on(async {
        println!("Searching cover for: {}", term);

        match resolver.find_album_cover(&term).await {
            Ok(hit) => {
                println!("✓ Found cover (source: {})", hit.source);
                if let Some(title) = &hit.title {
                    println!("  Album:  {}", title);
                }
                if let Some(artist) = &hit.artist {
                    println!("  Artist: {}", artist);
                }
                println!("  {}", hit.url);
            }
            Err(CoverError::NoMatches) => {
                println!("✗ No matching cover found");
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    });

    Ok(())
}

fn cmd_list(rt: &Runtime, config: &config::Config, covers: bool) -> anyhow::Result<()> {
    let client = gateway_client(config)?;
    let public_base = config.gateway.public_base().to_string();
    let probe = ImageProbe::with_timeout(std::time::Duration::from_millis(
        config.cover.probe_timeout_ms,
    ));

    rt.block_on(async {
        let list = client.list().await?;

        let updated = list
            .updated_at
            .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
            .unwrap_or_else(|| "unknown".to_string());
        println!("Total: {} (updated: {})", list.count, updated);
        println!();

        for asset in &list.assets {
            let marker = if asset.kind.is_audio() { "♪" } else { " " };
            println!("{} {}", marker, asset.name);
            println!("    {} | {}", asset.artist_display(), asset.album_display());
            println!("    {}", asset.url);
            if covers {
                let cover = cover::resolve_listed_cover(&probe, asset, &public_base).await;
                println!("    cover: {}", cover);
            }
        }

        Ok(())
    })
}

fn cmd_url(config: &config::Config, key: &str) -> anyhow::Result<()> {
    let client = gateway_client(config)?;
    println!("{}", client.public_url(key));
    Ok(())
}

fn cmd_download(
    rt: &Runtime,
    config: &config::Config,
    key: &str,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let client = gateway_client(config)?;

    let output = output.map(PathBuf::from).unwrap_or_else(|| {
        // Default to the key's file name component
        let name = key.rsplit('/').next().unwrap_or(key);
        PathBuf::from(if name.is_empty() { "download" } else { name })
    });

    rt.block_on(async {
        println!("Downloading {}...", key);

        let download = client.download(key).await?;
        std::fs::write(&output, &download.data)?;

        println!(
            "✓ Saved {} bytes ({}) to {}",
            download.data.len(),
            download.mime_type,
            output.display()
        );
        Ok(())
    })
}

fn cmd_delete(rt: &Runtime, config: &config::Config, key: &str, yes: bool) -> anyhow::Result<()> {
    let client = gateway_client(config)?;

    if !yes && !confirm_delete(key)? {
        println!("Aborted.");
        return Ok(());
    }

    rt.block_on(async {
        println!("Deleting {}...", key);

        match client.delete(key).await {
            Ok(outcome) => {
                println!("✓ Deleted {}", key);
                if let Some(remaining) = outcome.remaining {
                    println!("  {} asset(s) remaining", remaining);
                }
            }
            Err(e) => {
                eprintln!("✗ Delete failed: {}", e);
                std::process::exit(1);
            }
        }
    });

    Ok(())
}

fn cmd_config(
    config: &mut config::Config,
    lastfm_api_key: Option<&str>,
    changed: bool,
) -> anyhow::Result<()> {
    if let Some(key) = lastfm_api_key {
        config.credentials.lastfm_api_key = Some(key.to_string());
    }

    if changed {
        config::save(config)?;
        println!("✓ Saved config");
    }

    if let Some(path) = config::config_path() {
        println!("Config file: {}", path.display());
    }
    println!("  gateway.base_url:           {}", value_or_unset(&config.gateway.base_url));
    println!(
        "  gateway.public_base_url:    {}",
        value_or_unset(&config.gateway.public_base_url)
    );
    println!(
        "  credentials.lastfm_api_key: {}",
        // Never echo the key itself
        if config
            .credentials
            .lastfm_api_key
            .as_deref()
            .unwrap_or("")
            .is_empty()
        {
            "(not set)"
        } else {
            "(set)"
        }
    );
    println!("  cover.country:              {}", config.cover.country);
    println!("  cover.size:                 {}", config.cover.size);

    Ok(())
}

// ============================================================================
// Helper functions
// ============================================================================

/// Render an optional setting for display
fn value_or_unset(value: &str) -> &str {
    if value.is_empty() { "(not set)" } else { value }
}

/// Build a gateway client, or fail with a hint when no URL is configured
fn gateway_client(config: &config::Config) -> anyhow::Result<GatewayClient> {
    if config.gateway.base_url.is_empty() {
        let hint = config::config_path()
            .map(|p| format!("set [gateway].base_url in {}", p.display()))
            .unwrap_or_else(|| "set [gateway].base_url in the config file".to_string());
        bail!("no gateway URL configured; {} or pass --gateway-url", hint);
    }

    Ok(GatewayClient::new(
        &config.gateway.base_url,
        config.gateway.public_base(),
    ))
}

/// Build the cover search config, applying per-invocation overrides
fn cover_search_config(
    config: &config::Config,
    lastfm_api_key: Option<&str>,
    country: Option<&str>,
    size: Option<u32>,
) -> CoverSearchConfig {
    CoverSearchConfig {
        country: country
            .map(String::from)
            .unwrap_or_else(|| config.cover.country.clone()),
        size: size.unwrap_or(config.cover.size),
        lastfm_api_key: lastfm_api_key
            .map(String::from)
            .or_else(|| config.credentials.lastfm_api_key.clone()),
        probe_timeout: std::time::Duration::from_millis(config.cover.probe_timeout_ms),
    }
}

/// Ask the user to confirm a delete on stdin
fn confirm_delete(key: &str) -> anyhow::Result<bool> {
    print!("Delete '{}'? This cannot be undone. [y/N] ", key);
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;

    Ok(matches!(line.trim().to_lowercase().as_str(), "y" | "yes"))
}

/// Format a duration in seconds as m:ss
fn format_duration(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}
