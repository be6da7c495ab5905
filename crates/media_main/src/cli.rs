//! Command-line interface definitions

use clap::Parser;
use std::path::PathBuf;

/// Classify evidence files and show which media panel would display them
#[derive(Parser, Debug)]
#[command(name = "media_view", version, about)]
pub struct Cli {
    /// Files to select, in order
    #[arg(required_unless_present = "init_config")]
    pub files: Vec<PathBuf>,

    /// Configuration file (defaults to the per-user config directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the panel width
    #[arg(long)]
    pub width: Option<u32>,

    /// Override the panel height
    #[arg(long)]
    pub height: Option<u32>,

    /// Treat every file as deleted (unallocated name entry)
    #[arg(long)]
    pub deleted: bool,

    /// Behave as if no audio/video playback backend is installed
    #[arg(long)]
    pub no_video: bool,

    /// Write the default configuration and exit
    #[arg(long)]
    pub init_config: bool,
}
