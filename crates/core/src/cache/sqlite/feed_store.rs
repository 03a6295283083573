//! `FeedStore` operations over the SQLite schema.
//!
//! The snapshot lives in the single `feed_cache` row (its timestamp) and the
//! `feed_images` rows (the feed, keyed by position so caller order survives).

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio_rusqlite::params;
use tokio_rusqlite::rusqlite;
use url::Url;
use uuid::Uuid;

use super::connection::SqliteFeedStore;
use crate::Error;
use crate::cache::store::{CachedFeed, FeedStore, LocalFeedImage};

type ImageRow = (String, Option<String>, Option<String>, String);

#[async_trait]
impl FeedStore for SqliteFeedStore {
    async fn retrieve(&self) -> Result<Option<CachedFeed>, Error> {
        self.conn
            .call(|conn| -> Result<Option<CachedFeed>, Error> {
                let timestamp = match conn.query_row("SELECT timestamp FROM feed_cache WHERE id = 1", [], |row| {
                    row.get::<_, String>(0)
                }) {
                    Ok(timestamp) => decode_timestamp(&timestamp)?,
                    Err(rusqlite::Error::QueryReturnedNoRows) => return Ok(None),
                    Err(e) => return Err(e.into()),
                };

                let mut stmt = conn.prepare("SELECT id, description, location, url FROM feed_images ORDER BY position")?;
                let rows = stmt.query_map([], |row| -> rusqlite::Result<ImageRow> {
                    Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
                })?;

                let mut feed = Vec::new();
                for row in rows {
                    feed.push(decode_image(row?)?);
                }

                tracing::debug!(images = feed.len(), "retrieved cached feed");
                Ok(Some(CachedFeed { feed, timestamp }))
            })
            .await
            .map_err(Error::from)
    }

    async fn insert(&self, feed: Vec<LocalFeedImage>, timestamp: DateTime<Utc>) -> Result<(), Error> {
        let timestamp = timestamp.to_rfc3339();
        self.conn
            .call(move |conn| -> Result<(), Error> {
                let tx = conn.transaction()?;
                tx.execute("DELETE FROM feed_images", [])?;
                tx.execute("DELETE FROM feed_cache", [])?;
                tx.execute("INSERT INTO feed_cache (id, timestamp) VALUES (1, ?1)", params![timestamp])?;
                {
                    let mut stmt = tx.prepare(
                        "INSERT INTO feed_images (position, id, description, location, url)
                        VALUES (?1, ?2, ?3, ?4, ?5)",
                    )?;
                    for (position, image) in feed.iter().enumerate() {
                        stmt.execute(params![
                            position as i64,
                            image.id.to_string(),
                            &image.description,
                            &image.location,
                            image.url.as_str(),
                        ])?;
                    }
                }
                tx.commit()?;

                tracing::debug!(images = feed.len(), "inserted cached feed");
                Ok(())
            })
            .await
            .map_err(Error::from)
    }

    async fn delete_cached_feed(&self) -> Result<(), Error> {
        self.conn
            .call(|conn| -> Result<(), Error> {
                let tx = conn.transaction()?;
                let images = tx.execute("DELETE FROM feed_images", [])?;
                tx.execute("DELETE FROM feed_cache", [])?;
                tx.commit()?;

                tracing::debug!(images, "deleted cached feed");
                Ok(())
            })
            .await
            .map_err(Error::from)
    }
}

fn decode_timestamp(value: &str) -> Result<DateTime<Utc>, Error> {
    DateTime::parse_from_rfc3339(value)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| Error::Decode(format!("invalid cache timestamp {value:?}: {e}")))
}

fn decode_image((id, description, location, url): ImageRow) -> Result<LocalFeedImage, Error> {
    let id = Uuid::parse_str(&id).map_err(|e| Error::Decode(format!("invalid image id {id:?}: {e}")))?;
    let url = Url::parse(&url).map_err(|e| Error::Decode(format!("invalid image url {url:?}: {e}")))?;
    Ok(LocalFeedImage { id, description, location, url })
}
