//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;

use crate::commands::Commands;

/// Environment variable holding the Flickr API key.
pub const FLICKR_API_KEY_ENV: &str = "FLICKR_API_KEY";

/// Find photos taken near where you are.
#[derive(Parser)]
#[command(name = "nearshot")]
#[command(about = "Find photos taken near your current location")]
#[command(version)]
pub struct Cli {
    /// Flickr API key
    #[arg(long = "api-key", env = FLICKR_API_KEY_ENV, hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Serve the bundled photo set instead of calling Flickr
    #[arg(long, global = true)]
    pub offline: bool,

    /// Photos requested per page (1-500)
    #[arg(long = "per-page", global = true)]
    pub per_page: Option<u32>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
