//! Subcommand implementations.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use feedcache_core::config::StoreBackend;
use feedcache_core::{AppConfig, FeedLoader, FeedStore, FileFeedStore, LocalFeedLoader, SqliteFeedStore};

use crate::remote;

/// Open the store selected by `config`, creating its directory if needed.
pub async fn open_store(config: &AppConfig) -> Result<Box<dyn FeedStore>> {
    let path = config.store_path();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| format!("creating cache directory {}", parent.display()))?;
    }

    let store: Box<dyn FeedStore> = match config.backend {
        StoreBackend::File => Box::new(FileFeedStore::new(path)?),
        StoreBackend::Sqlite => Box::new(SqliteFeedStore::open(path).await?),
    };

    tracing::debug!(backend = ?config.backend, path = %path.display(), "opened feed store");
    Ok(store)
}

/// Render the cached feed as a remote payload.
pub async fn load<S, C>(loader: &LocalFeedLoader<S, C>) -> Result<String>
where
    S: FeedStore,
    C: Fn() -> DateTime<Utc> + Send + Sync,
{
    let feed = loader.load().await.context("feed unavailable")?;
    tracing::info!(images = feed.len(), "loaded feed from cache");
    Ok(remote::to_payload(feed)?)
}

/// Replace the cache with the feed in the remote payload at `input`.
pub async fn save<S, C>(loader: &LocalFeedLoader<S, C>, input: &Path) -> Result<usize>
where
    S: FeedStore,
    C: Fn() -> DateTime<Utc> + Send + Sync,
{
    let payload = std::fs::read(input).with_context(|| format!("reading {}", input.display()))?;
    let feed = remote::map(&payload).with_context(|| format!("decoding feed payload {}", input.display()))?;
    let images = feed.len();

    loader.save(feed).await.context("saving feed to cache")?;
    tracing::info!(images, "saved feed to cache");
    Ok(images)
}
