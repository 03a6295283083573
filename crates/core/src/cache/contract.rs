//! Behaviour every `FeedStore` must share.
//!
//! Each backend's test module calls these assertions against its own store,
//! so both realizations are held to one contract.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};
use url::Url;
use uuid::Uuid;

use super::store::{CachedFeed, FeedStore, LocalFeedImage};
use crate::feed::FeedImage;

pub(crate) fn unique_image() -> FeedImage {
    let id = Uuid::new_v4();
    FeedImage::new(
        id,
        Some("a description".to_string()),
        Some("a location".to_string()),
        Url::parse(&format!("https://images.example.com/{id}")).unwrap(),
    )
}

pub(crate) fn unique_feed() -> (Vec<FeedImage>, Vec<LocalFeedImage>) {
    let models = vec![unique_image(), FeedImage { description: None, location: None, ..unique_image() }];
    let local = models.iter().cloned().map(LocalFeedImage::from).collect();
    (models, local)
}

pub(crate) fn unique_local_feed() -> Vec<LocalFeedImage> {
    unique_feed().1
}

pub(crate) fn any_timestamp() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2025-03-13T10:00:00.123456789Z").unwrap().with_timezone(&Utc)
}

pub(crate) async fn assert_retrieve_delivers_empty_on_empty_cache<S: FeedStore>(sut: &S) {
    assert_eq!(sut.retrieve().await.unwrap(), None);
}

pub(crate) async fn assert_retrieve_has_no_side_effects_on_empty_cache<S: FeedStore>(sut: &S) {
    assert_eq!(sut.retrieve().await.unwrap(), None);
    assert_eq!(sut.retrieve().await.unwrap(), None);
}

pub(crate) async fn assert_retrieve_delivers_found_values_on_non_empty_cache<S: FeedStore>(sut: &S) {
    let feed = unique_local_feed();
    let timestamp = any_timestamp();

    sut.insert(feed.clone(), timestamp).await.unwrap();

    assert_eq!(sut.retrieve().await.unwrap(), Some(CachedFeed { feed, timestamp }));
}

pub(crate) async fn assert_retrieve_has_no_side_effects_on_non_empty_cache<S: FeedStore>(sut: &S) {
    let feed = unique_local_feed();
    let timestamp = any_timestamp();

    sut.insert(feed.clone(), timestamp).await.unwrap();

    let expected = Some(CachedFeed { feed, timestamp });
    assert_eq!(sut.retrieve().await.unwrap(), expected);
    assert_eq!(sut.retrieve().await.unwrap(), expected);
}

pub(crate) async fn assert_retrieve_delivers_failure_on_retrieval_error<S: FeedStore>(sut: &S) {
    assert!(sut.retrieve().await.is_err(), "Expected retrieval failure");
}

pub(crate) async fn assert_retrieve_has_no_side_effects_on_failure<S: FeedStore>(sut: &S) {
    let first = sut.retrieve().await.expect_err("Expected retrieval failure");
    let second = sut.retrieve().await.expect_err("Expected retrieval failure");
    assert_eq!(first.to_string(), second.to_string());
}

pub(crate) async fn assert_insert_delivers_no_error_on_empty_cache<S: FeedStore>(sut: &S) {
    assert!(sut.insert(unique_local_feed(), any_timestamp()).await.is_ok());
}

pub(crate) async fn assert_insert_delivers_no_error_on_non_empty_cache<S: FeedStore>(sut: &S) {
    sut.insert(unique_local_feed(), any_timestamp()).await.unwrap();
    assert!(sut.insert(unique_local_feed(), any_timestamp()).await.is_ok());
}

pub(crate) async fn assert_insert_overrides_previously_inserted_cache_values<S: FeedStore>(sut: &S) {
    sut.insert(unique_local_feed(), any_timestamp()).await.unwrap();

    let latest_feed = vec![unique_local_feed().remove(0)];
    let latest_timestamp = any_timestamp() + Duration::hours(1);
    sut.insert(latest_feed.clone(), latest_timestamp).await.unwrap();

    assert_eq!(sut.retrieve().await.unwrap(), Some(CachedFeed { feed: latest_feed, timestamp: latest_timestamp }));
}

pub(crate) async fn assert_insert_preserves_feed_order<S: FeedStore>(sut: &S) {
    let mut feed = unique_local_feed();
    feed.extend(unique_local_feed());
    feed.push(feed[0].clone());

    sut.insert(feed.clone(), any_timestamp()).await.unwrap();

    let cached = sut.retrieve().await.unwrap().expect("Expected cached feed");
    assert_eq!(cached.feed, feed);
}

pub(crate) async fn assert_insert_delivers_error_on_insertion_error<S: FeedStore>(sut: &S) {
    assert!(sut.insert(unique_local_feed(), any_timestamp()).await.is_err(), "Expected insertion failure");
}

pub(crate) async fn assert_insert_has_no_side_effects_on_insertion_error<S: FeedStore>(sut: &S) {
    let _ = sut.insert(unique_local_feed(), any_timestamp()).await;
    assert_eq!(sut.retrieve().await.unwrap(), None);
}

pub(crate) async fn assert_delete_delivers_no_error_on_empty_cache<S: FeedStore>(sut: &S) {
    assert!(sut.delete_cached_feed().await.is_ok());
}

pub(crate) async fn assert_delete_has_no_side_effects_on_empty_cache<S: FeedStore>(sut: &S) {
    sut.delete_cached_feed().await.unwrap();
    assert_eq!(sut.retrieve().await.unwrap(), None);
}

pub(crate) async fn assert_delete_delivers_no_error_on_non_empty_cache<S: FeedStore>(sut: &S) {
    sut.insert(unique_local_feed(), any_timestamp()).await.unwrap();
    assert!(sut.delete_cached_feed().await.is_ok());
}

pub(crate) async fn assert_delete_empties_previously_inserted_cache<S: FeedStore>(sut: &S) {
    sut.insert(unique_local_feed(), any_timestamp()).await.unwrap();
    sut.delete_cached_feed().await.unwrap();
    assert_eq!(sut.retrieve().await.unwrap(), None);
}

pub(crate) async fn assert_delete_delivers_error_on_deletion_error<S: FeedStore>(sut: &S) {
    assert!(sut.delete_cached_feed().await.is_err(), "Expected deletion failure");
}

/// Issues insert, delete, insert without waiting in between and checks that
/// they complete in issue order, leaving only the last insert behind.
///
/// Must run on the current-thread runtime so spawned tasks are first polled in
/// spawn order.
pub(crate) async fn assert_side_effects_run_serially<S: FeedStore + 'static>(sut: Arc<S>) {
    let completed = Arc::new(Mutex::new(Vec::new()));
    let last_feed = unique_local_feed();
    let last_timestamp = any_timestamp() + Duration::minutes(5);

    let first_insert = tokio::spawn({
        let (sut, completed) = (sut.clone(), completed.clone());
        async move {
            sut.insert(unique_local_feed(), any_timestamp()).await.unwrap();
            completed.lock().unwrap().push("insert A");
        }
    });
    let delete = tokio::spawn({
        let (sut, completed) = (sut.clone(), completed.clone());
        async move {
            sut.delete_cached_feed().await.unwrap();
            completed.lock().unwrap().push("delete");
        }
    });
    let second_insert = tokio::spawn({
        let (sut, completed, feed) = (sut.clone(), completed.clone(), last_feed.clone());
        async move {
            sut.insert(feed, last_timestamp).await.unwrap();
            completed.lock().unwrap().push("insert B");
        }
    });

    for op in [first_insert, delete, second_insert] {
        op.await.unwrap();
    }

    assert_eq!(*completed.lock().unwrap(), vec!["insert A", "delete", "insert B"]);
    assert_eq!(sut.retrieve().await.unwrap(), Some(CachedFeed { feed: last_feed, timestamp: last_timestamp }));
}
