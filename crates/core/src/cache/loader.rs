//! Cache use cases: load, save and validate.
//!
//! `LocalFeedLoader` performs no I/O itself. It sequences calls on its store
//! and applies the expiration policy to whatever the store returns.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::policy::FeedCachePolicy;
use super::store::{FeedStore, LocalFeedImage};
use crate::Error;
use crate::feed::{FeedImage, FeedLoader};

/// Serves the cached feed and keeps the cache current.
///
/// `current_date` is consulted every time a timestamp is needed, so tests can
/// pin the clock and production code can pass `Utc::now`.
pub struct LocalFeedLoader<S, C> {
    store: S,
    current_date: C,
    policy: FeedCachePolicy,
}

impl<S, C> LocalFeedLoader<S, C>
where
    S: FeedStore,
    C: Fn() -> DateTime<Utc> + Send + Sync,
{
    pub fn new(store: S, current_date: C) -> Self {
        Self { store, current_date, policy: FeedCachePolicy::default() }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Replace the cache with `feed`, stamped with the current date.
    ///
    /// The old cache is deleted first. If that fails nothing is inserted and
    /// the deletion error is returned; otherwise the insertion result is.
    pub async fn save(&self, feed: Vec<FeedImage>) -> Result<(), Error> {
        self.store.delete_cached_feed().await?;

        let local: Vec<LocalFeedImage> = feed.into_iter().map(LocalFeedImage::from).collect();
        let images = local.len();
        self.store.insert(local, (self.current_date)()).await?;

        tracing::debug!(images, "saved feed to cache");
        Ok(())
    }

    /// Delete the cache if it is unreadable or expired.
    ///
    /// Best-effort maintenance: a failed deletion is logged and dropped.
    pub async fn validate_cache(&self) {
        let should_delete = match self.store.retrieve().await {
            Err(e) => {
                tracing::warn!(error = %e, "cached feed is unreadable, deleting it");
                true
            }
            Ok(Some(cache)) => !self.policy.validate(cache.timestamp, (self.current_date)()),
            Ok(None) => false,
        };

        if !should_delete {
            return;
        }

        if let Err(e) = self.store.delete_cached_feed().await {
            tracing::warn!(error = %e, "failed to delete invalid feed cache");
        }
    }
}

#[async_trait]
impl<S, C> FeedLoader for LocalFeedLoader<S, C>
where
    S: FeedStore,
    C: Fn() -> DateTime<Utc> + Send + Sync,
{
    /// Deliver the cached feed while it is within the policy's max age.
    ///
    /// An empty or expired cache yields an empty feed. Loading never modifies
    /// the cache; cleaning up an unreadable cache is left to `validate_cache`.
    async fn load(&self) -> Result<Vec<FeedImage>, Error> {
        match self.store.retrieve().await? {
            Some(cache) if self.policy.validate(cache.timestamp, (self.current_date)()) => {
                Ok(cache.feed.into_iter().map(FeedImage::from).collect())
            }
            Some(_) | None => Ok(Vec::new()),
        }
    }
}
