//! File-backed feed store.
//!
//! The snapshot is encoded as JSON at a single path:
//!
//! ```json
//! { "records": [{ "id": "…", "description": null, "location": "…", "imageURL": "…" }],
//!   "savedAt": "2025-03-13T10:00:00Z" }
//! ```
//!
//! Writes never touch the canonical file in place. The encoded snapshot goes
//! to a temp file in the same directory, which is then renamed over the
//! canonical path, so a reader sees either the old snapshot or the new one.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

use super::store::{CachedFeed, FeedStore, LocalFeedImage};
use super::worker::Worker;
use crate::Error;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredFeed {
    records: Vec<StoredImage>,
    saved_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredImage {
    id: Uuid,
    description: Option<String>,
    location: Option<String>,
    #[serde(rename = "imageURL")]
    image_url: Url,
}

impl From<LocalFeedImage> for StoredImage {
    fn from(image: LocalFeedImage) -> Self {
        Self { id: image.id, description: image.description, location: image.location, image_url: image.url }
    }
}

impl From<StoredImage> for LocalFeedImage {
    fn from(image: StoredImage) -> Self {
        Self { id: image.id, description: image.description, location: image.location, url: image.image_url }
    }
}

impl From<StoredFeed> for CachedFeed {
    fn from(stored: StoredFeed) -> Self {
        Self { feed: stored.records.into_iter().map(LocalFeedImage::from).collect(), timestamp: stored.saved_at }
    }
}

/// Feed store persisting the snapshot to one JSON file.
///
/// Every operation runs on a private background thread, one at a time and in
/// issue order. Use a single instance per file: two instances pointing at the
/// same path do not coordinate with each other.
#[derive(Debug)]
pub struct FileFeedStore {
    store_path: PathBuf,
    worker: Worker,
}

impl FileFeedStore {
    /// Create a store for the file at `store_path`.
    ///
    /// Nothing is read or created until the first operation; the parent
    /// directory must exist for inserts to succeed.
    pub fn new(store_path: impl Into<PathBuf>) -> Result<Self, Error> {
        let worker = Worker::spawn("feed-cache-file-store")?;
        Ok(Self { store_path: store_path.into(), worker })
    }

    pub fn store_path(&self) -> &Path {
        &self.store_path
    }
}

#[async_trait]
impl FeedStore for FileFeedStore {
    async fn retrieve(&self) -> Result<Option<CachedFeed>, Error> {
        let path = self.store_path.clone();
        self.worker.call(move || read_snapshot(&path)).await
    }

    async fn insert(&self, feed: Vec<LocalFeedImage>, timestamp: DateTime<Utc>) -> Result<(), Error> {
        let path = self.store_path.clone();
        let stored = StoredFeed { records: feed.into_iter().map(StoredImage::from).collect(), saved_at: timestamp };
        self.worker.call(move || write_snapshot(&path, &stored)).await
    }

    async fn delete_cached_feed(&self) -> Result<(), Error> {
        let path = self.store_path.clone();
        self.worker.call(move || remove_snapshot(&path)).await
    }
}

fn read_snapshot(path: &Path) -> Result<Option<CachedFeed>, Error> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let stored: StoredFeed = serde_json::from_slice(&bytes)?;
    tracing::debug!(path = %path.display(), images = stored.records.len(), "retrieved cached feed");
    Ok(Some(stored.into()))
}

fn write_snapshot(path: &Path, stored: &StoredFeed) -> Result<(), Error> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = tempfile::Builder::new().prefix(".feed-cache-").suffix(".tmp").tempfile_in(dir)?;
    serde_json::to_writer(&mut temp, stored).map_err(|e| Error::Io(e.into()))?;
    temp.flush()?;
    temp.as_file().sync_all()?;

    // An unpersisted temp file is removed when dropped, leaving the old snapshot in place.
    temp.persist(path).map_err(|e| Error::Io(e.error))?;

    tracing::debug!(path = %path.display(), images = stored.records.len(), "inserted cached feed");
    Ok(())
}

fn remove_snapshot(path: &Path) -> Result<(), Error> {
    match fs::remove_file(path) {
        Ok(()) => {
            tracing::debug!(path = %path.display(), "deleted cached feed");
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}
