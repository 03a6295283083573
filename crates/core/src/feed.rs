//! Feed domain model.

use async_trait::async_trait;
use url::Url;
use uuid::Uuid;

use crate::Error;

/// One item of the feed: an image with optional caption data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedImage {
    pub id: Uuid,
    pub description: Option<String>,
    pub location: Option<String>,
    pub url: Url,
}

impl FeedImage {
    pub fn new(id: Uuid, description: Option<String>, location: Option<String>, url: Url) -> Self {
        Self { id, description, location, url }
    }
}

/// Anything that can deliver the current feed.
#[async_trait]
pub trait FeedLoader: Send + Sync {
    async fn load(&self) -> Result<Vec<FeedImage>, Error>;
}
