//! feed-cache command-line entry point.
//!
//! Loads, saves and validates the local feed cache. Logging goes to stderr so
//! stdout carries only command output.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use feedcache_core::{AppConfig, LocalFeedLoader};
use tracing_subscriber::EnvFilter;

mod commands;
mod remote;

#[derive(Debug, Parser)]
#[command(name = "feed-cache", version, about = "Inspect and maintain the local feed cache")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the cached feed as JSON (empty when missing or expired)
    Load,
    /// Replace the cache with a feed payload read from a file
    Save {
        /// Path to a `{"items": [...]}` feed payload
        #[arg(short, long)]
        input: PathBuf,
    },
    /// Delete the cache if it is unreadable or expired
    Validate,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .json()
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load().context("loading configuration")?;
    let store = commands::open_store(&config).await?;
    let loader = LocalFeedLoader::new(store, Utc::now);

    match cli.command {
        Command::Load => println!("{}", commands::load(&loader).await?),
        Command::Save { input } => {
            commands::save(&loader, &input).await?;
        }
        Command::Validate => loader.validate_cache().await,
    }

    Ok(())
}
