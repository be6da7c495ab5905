//! media_view - media content viewer for evidence files
//!
//! Main entry point.

mod app;
mod cli;

use anyhow::Result;
use clap::Parser;
use media_core::{LoggingConfig, MediaViewConfig};

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    let config_path = cli.config.clone().unwrap_or_else(MediaViewConfig::config_path);

    if cli.init_config {
        MediaViewConfig::default().save_to(&config_path)?;
        println!("Wrote {}", config_path.display());
        return Ok(());
    }

    // The log level lives in the config, so read it before logging starts
    // and report the outcome once a subscriber exists.
    let loaded = MediaViewConfig::read_from(&config_path);
    let level = match &loaded {
        Ok(Some(config)) => config.logging.level.clone(),
        _ => LoggingConfig::default().level,
    };

    // Initialize logging and panic hook first
    let _log_guard = media_log::init(&level)?;

    let config = match loaded {
        Ok(Some(config)) => {
            tracing::info!("Configuration loaded from {:?}", config_path);
            config
        }
        Ok(None) => {
            tracing::info!("Using default configuration");
            MediaViewConfig::default()
        }
        Err(e) => {
            tracing::error!("Invalid configuration {:?}: {:#}", config_path, e);
            return Err(e);
        }
    };

    if let Err(e) = media_log::cleanup_old_logs(config.logging.retain_days) {
        tracing::warn!("Failed to cleanup old logs: {}", e);
    }

    tracing::info!("media_view starting...");

    app::run(&cli, config)
}
