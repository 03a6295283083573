//! Unified error types for feed-cache.
//!
//! The message prefix carries a stable code so callers can classify a
//! failure without matching on the variant.

use tokio_rusqlite::rusqlite;

/// Unified error types for the feed cache engine.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading, writing or removing the backing file failed.
    #[error("CACHE_IO: {0}")]
    Io(#[from] std::io::Error),

    /// The backing resource exists but does not hold a valid snapshot.
    #[error("CACHE_DECODE: {0}")]
    Decode(String),

    /// Database operation failed.
    #[error("CACHE_ERROR: {0}")]
    Database(tokio_rusqlite::Error),

    /// Migration failed to apply.
    #[error("CACHE_ERROR: migration failed: {0}")]
    MigrationFailed(String),

    /// The store's background worker is gone and can no longer run jobs.
    #[error("CACHE_CLOSED: store worker is no longer running")]
    StoreClosed,
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(err.to_string())
    }
}

impl From<tokio_rusqlite::Error<Error>> for Error {
    fn from(err: tokio_rusqlite::Error<Error>) -> Self {
        match err {
            tokio_rusqlite::Error::Error(e) => e,
            tokio_rusqlite::Error::ConnectionClosed => Error::Database(tokio_rusqlite::Error::ConnectionClosed),
            tokio_rusqlite::Error::Close(c) => Error::Database(tokio_rusqlite::Error::Close(c)),
            _ => Error::Database(tokio_rusqlite::Error::ConnectionClosed),
        }
    }
}

impl From<tokio_rusqlite::Error<rusqlite::Error>> for Error {
    fn from(err: tokio_rusqlite::Error<rusqlite::Error>) -> Self {
        Error::Database(err)
    }
}

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        Error::Database(tokio_rusqlite::Error::Error(err))
    }
}
