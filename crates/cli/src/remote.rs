//! Remote feed payload mapping.
//!
//! The remote API delivers `{"items": [{"id", "description", "location", "image"}]}`.
//! `load` prints the cache in the same shape, so its output can be saved again.

use feedcache_core::FeedImage;
use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize)]
pub struct RemoteFeedItem {
    pub id: Uuid,
    pub description: Option<String>,
    pub location: Option<String>,
    pub image: Url,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RemoteFeed {
    pub items: Vec<RemoteFeedItem>,
}

impl From<RemoteFeedItem> for FeedImage {
    fn from(item: RemoteFeedItem) -> Self {
        FeedImage::new(item.id, item.description, item.location, item.image)
    }
}

impl From<FeedImage> for RemoteFeedItem {
    fn from(image: FeedImage) -> Self {
        Self { id: image.id, description: image.description, location: image.location, image: image.url }
    }
}

/// Decode a remote payload into feed images, keeping item order.
pub fn map(payload: &[u8]) -> Result<Vec<FeedImage>, serde_json::Error> {
    let feed: RemoteFeed = serde_json::from_slice(payload)?;
    Ok(feed.items.into_iter().map(FeedImage::from).collect())
}

/// Encode feed images as a remote payload.
pub fn to_payload(feed: Vec<FeedImage>) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&RemoteFeed { items: feed.into_iter().map(RemoteFeedItem::from).collect() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_items() {
        let payload = br#"{"items": [
            {"id": "73a7f70c-75da-4c2e-b5a3-eed40dc53aad", "description": "a description", "location": null,
             "image": "https://a-url.com/1.png"},
            {"id": "ba298a85-6275-48d3-8315-9c8c7b1cd67b", "image": "https://a-url.com/2.png"}
        ]}"#;

        let feed = map(payload).unwrap();

        assert_eq!(feed.len(), 2);
        assert_eq!(feed[0].description.as_deref(), Some("a description"));
        assert_eq!(feed[0].location, None);
        assert_eq!(feed[1].url.as_str(), "https://a-url.com/2.png");
    }

    #[test]
    fn test_map_empty_items() {
        assert!(map(br#"{"items": []}"#).unwrap().is_empty());
    }

    #[test]
    fn test_map_rejects_invalid_payload() {
        assert!(map(b"invalid json").is_err());
        assert!(map(br#"{"items": [{"id": "not-a-uuid", "image": "https://a-url.com"}]}"#).is_err());
    }

    #[test]
    fn test_payload_can_be_mapped_back() {
        let payload = br#"{"items": [{"id": "73a7f70c-75da-4c2e-b5a3-eed40dc53aad", "description": null,
            "location": "a location", "image": "https://a-url.com/1.png"}]}"#;
        let feed = map(payload).unwrap();

        let encoded = to_payload(feed.clone()).unwrap();

        assert_eq!(map(encoded.as_bytes()).unwrap(), feed);
    }
}
