//! music-courier - a command-line courier for a remote music asset gateway.
//!
//! Uploads audio files with their embedded tags, finds album cover art
//! through iTunes and Last.fm, and manages the assets already stored on
//! the gateway (list, download, delete, public URLs).

pub mod cli;
pub mod config;
pub mod cover;
pub mod gateway;
pub mod metadata;

#[cfg(test)]
pub mod test_utils;

use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(
            EnvFilter::from_default_env().add_directive("music_courier=info".parse()?),
        )
        .init();

    cli::run_command(&args)
}
