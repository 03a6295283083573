//! The store capability the cache use cases are built on.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use url::Url;
use uuid::Uuid;

use crate::Error;
use crate::feed::FeedImage;

/// Store-side representation of a feed image.
///
/// Kept apart from [`FeedImage`] so persistence concerns never leak into the
/// domain type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalFeedImage {
    pub id: Uuid,
    pub description: Option<String>,
    pub location: Option<String>,
    pub url: Url,
}

impl From<FeedImage> for LocalFeedImage {
    fn from(image: FeedImage) -> Self {
        Self { id: image.id, description: image.description, location: image.location, url: image.url }
    }
}

impl From<LocalFeedImage> for FeedImage {
    fn from(image: LocalFeedImage) -> Self {
        Self { id: image.id, description: image.description, location: image.location, url: image.url }
    }
}

/// The single snapshot a store holds: the feed in caller order plus the
/// instant it was saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedFeed {
    pub feed: Vec<LocalFeedImage>,
    pub timestamp: DateTime<Utc>,
}

/// Persistence over one physical slot.
///
/// Implementations execute their operations one at a time, in the order they
/// were issued, and complete each exactly once. Operations are never run
/// interleaved against the backing resource.
#[async_trait]
pub trait FeedStore: Send + Sync {
    /// Read the current snapshot.
    ///
    /// `Ok(None)` means nothing is cached. An unreadable or undecodable
    /// resource is an error, never `Ok(None)`. Retrieval never modifies the
    /// stored snapshot.
    async fn retrieve(&self) -> Result<Option<CachedFeed>, Error>;

    /// Replace whatever is stored with `feed` saved at `timestamp`.
    ///
    /// On failure the previously stored snapshot is left untouched.
    async fn insert(&self, feed: Vec<LocalFeedImage>, timestamp: DateTime<Utc>) -> Result<(), Error>;

    /// Remove the stored snapshot. Deleting an empty cache succeeds.
    async fn delete_cached_feed(&self) -> Result<(), Error>;
}

#[async_trait]
impl<T: FeedStore + ?Sized> FeedStore for Box<T> {
    async fn retrieve(&self) -> Result<Option<CachedFeed>, Error> {
        (**self).retrieve().await
    }

    async fn insert(&self, feed: Vec<LocalFeedImage>, timestamp: DateTime<Utc>) -> Result<(), Error> {
        (**self).insert(feed, timestamp).await
    }

    async fn delete_cached_feed(&self) -> Result<(), Error> {
        (**self).delete_cached_feed().await
    }
}

#[async_trait]
impl<T: FeedStore + ?Sized> FeedStore for std::sync::Arc<T> {
    async fn retrieve(&self) -> Result<Option<CachedFeed>, Error> {
        (**self).retrieve().await
    }

    async fn insert(&self, feed: Vec<LocalFeedImage>, timestamp: DateTime<Utc>) -> Result<(), Error> {
        (**self).insert(feed, timestamp).await
    }

    async fn delete_cached_feed(&self) -> Result<(), Error> {
        (**self).delete_cached_feed().await
    }
}
