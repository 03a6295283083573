//! Core types and shared functionality for feed-cache.
//!
//! This crate provides:
//! - Feed domain model and the `FeedLoader` seam
//! - Local feed cache with file-backed and SQLite backends
//! - Unified error types
//! - Configuration structures

pub mod cache;
pub mod config;
pub mod error;
pub mod feed;

pub use cache::{CachedFeed, FeedCachePolicy, FeedStore, FileFeedStore, LocalFeedImage, LocalFeedLoader, SqliteFeedStore};
pub use config::AppConfig;
pub use error::Error;
pub use feed::{FeedImage, FeedLoader};
