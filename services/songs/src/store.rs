//! Storage seam between the HTTP handlers and the songs table.

use async_trait::async_trait;

use crate::models::song::Song;

#[cfg(test)]
pub mod memory;

/// Canonical schema for the songs table. Unquoted identifiers fold to lower
/// case, so the view columns land as `originalviews` / `latestviews`.
pub const CREATE_SONGS_TABLE: &str = "CREATE TABLE IF NOT EXISTS songs ( \
    id BIGSERIAL PRIMARY KEY, \
    name VARCHAR NOT NULL, \
    url VARCHAR NOT NULL UNIQUE, \
    originalViews INTEGER NOT NULL, \
    latestViews INTEGER NOT NULL DEFAULT 0 )";

#[async_trait]
pub trait SongStore: Send + Sync {
    /// Idempotently create the songs table.
    async fn ensure_schema(&self) -> anyhow::Result<()>;

    /// All songs in storage order.
    async fn list(&self) -> anyhow::Result<Vec<Song>>;

    /// Insert a song with `latestViews` left at its default.
    async fn insert(&self, name: &str, url: &str, original_views: i32) -> anyhow::Result<()>;

    /// Rename the song stored under `url`, returning the number of rows touched.
    async fn rename(&self, url: &str, new_name: &str) -> anyhow::Result<u64>;

    /// Remove the song stored under `url`, returning the number of rows touched.
    async fn delete(&self, url: &str) -> anyhow::Result<u64>;

    /// Round trip to the backing store.
    async fn ping(&self) -> anyhow::Result<()>;
}
