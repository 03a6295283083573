//! SQLite-backed feed store.
//!
//! Uses tokio-rusqlite, which owns the connection on a background thread and
//! runs every call there in order. That thread is the store's serial queue:
//! insert and delete each run inside one transaction, so a failure rolls the
//! slot back to its previous state.

pub mod connection;
pub mod feed_store;
pub mod migrations;

pub use connection::SqliteFeedStore;
