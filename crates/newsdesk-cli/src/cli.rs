//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use newsdesk_core::GoLiveOption;

/// Output format for commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "newsdesk")]
#[command(author, version, about = "News reader with geotagged photo capture", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Directory holding the database and captured images
    #[arg(long, global = true, env = "NEWSDESK_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the news feed
    Feed {
        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Manage captured photos
    Photos {
        #[command(subcommand)]
        action: PhotosAction,
    },

    /// Capture a geotagged photo
    Capture {
        /// Image file to import as the captured photo (omit to cancel the camera)
        #[arg(short, long)]
        image: Option<PathBuf>,
    },

    /// Go live: youtube, camera or cancel
    Live {
        /// Action to take
        option: GoLiveOption,

        /// Image file to import when the action is `camera`
        #[arg(short, long)]
        image: Option<PathBuf>,
    },

    /// Manage CLI configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Photo subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum PhotosAction {
    /// List captured photos, newest first
    List {
        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Show one photo
    Show {
        /// Photo URI
        uri: String,
    },

    /// Remove a photo from the list
    Dismiss {
        /// Photo URI
        uri: String,
    },

    /// Copy a photo into the gallery directory
    Download {
        /// Photo URI
        uri: String,
    },
}

/// Configuration subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init,
}
