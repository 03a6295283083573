//! Local cache for the most recently fetched feed.
//!
//! The cache holds exactly one snapshot (the feed plus the time it was saved)
//! and replaces it wholesale on every save. It provides:
//!
//! - A `FeedStore` capability with file-backed and SQLite realizations
//! - Serial execution of store operations on a single background worker
//! - A fixed-age expiration policy
//! - Load, save and validate use cases on top of any store

pub mod file_store;
pub mod loader;
pub mod policy;
pub mod sqlite;
pub mod store;

mod worker;

#[cfg(test)]
pub(crate) mod contract;

pub use crate::Error;

pub use file_store::FileFeedStore;
pub use loader::LocalFeedLoader;
pub use policy::FeedCachePolicy;
pub use sqlite::SqliteFeedStore;
pub use store::{CachedFeed, FeedStore, LocalFeedImage};
