//! Command-line front end for Newsdesk.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `feed` | Show the news feed |
//! | `photos` | List, show, dismiss or download captured photos |
//! | `capture` | Capture a geotagged photo from an image file |
//! | `live` | Go live on YouTube, open the camera, or cancel |
//! | `config` | Manage CLI configuration |
//!
//! # Configuration
//!
//! The CLI reads `~/.config/newsdesk/config.toml` (or platform equivalent).
//! Permission answers, the device location and the gallery directory all
//! come from this file, since a terminal has no camera or GPS of its own.
//!
//! # Environment Variables
//!
//! - `NEWSDESK_DATA_DIR`: Data directory (overridden by `--data-dir` flag)
//! - `RUST_LOG`: Log filter when neither `--verbose` nor `--quiet` is given

mod cli;
mod commands;
mod config;
mod platform;
mod util;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::util::Context;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // When quiet mode is enabled, suppress info-level logging
    let filter = if cli.quiet {
        EnvFilter::new("warn")
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let ctx = Context::new(Config::load(), cli.data_dir.as_deref(), cli.quiet);

    match cli.command {
        Commands::Feed { format } => commands::cmd_feed(&ctx, format).await,
        Commands::Photos { action } => commands::cmd_photos(&ctx, action).await,
        Commands::Capture { image } => commands::cmd_capture(&ctx, image).await,
        Commands::Live { option, image } => commands::cmd_live(&ctx, option, image).await,
        Commands::Config { action } => commands::cmd_config(&ctx, action),
    }
}
