//! Command-line interface for music-courier.
//!
//! This module provides CLI commands for uploading, inspecting, listing,
//! and deleting remote assets, plus the cover art search.

mod commands;

pub use commands::{Cli, Commands, run_command};
