//! WhatsApp Console
//!
//! Desktop admin console for customers and their WhatsApp subscriptions.
//!
//! This is the main entry point for the Dioxus Desktop application.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use waconsole_core::{ConsoleConfig, Preferences};

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "waconsole", version, about = "Customers and WhatsApp subscriptions console")]
struct Args {
    /// Path to a TOML configuration file
    #[arg(long, short, env = "WACONSOLE_CONFIG")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = ConsoleConfig::load(args.config.as_deref())
        .context("Failed to load console configuration")?;
    let preferences = Preferences::load();

    tracing::info!(
        api = config.base_url(),
        dark_mode = preferences.dark_mode,
        language = preferences.language.code(),
        "Configuration loaded"
    );

    // Launch the Dioxus desktop application
    waconsole_ui::launch(config, preferences).context("Failed to start the console")?;

    Ok(())
}
