use async_trait::async_trait;
use sqlx::{PgPool, postgres::PgPoolOptions};
use tracing::{debug, instrument};

use crate::models::song::Song;
use crate::store::{CREATE_SONGS_TABLE, SongStore};

#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub async fn new(database_url: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        debug!(max_connections, "connecting to postgres");

        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl SongStore for Database {
    #[instrument(skip(self), level = "trace")]
    async fn ensure_schema(&self) -> anyhow::Result<()> {
        sqlx::query(CREATE_SONGS_TABLE).execute(&self.pool).await?;
        Ok(())
    }

    #[instrument(skip(self), level = "trace")]
    async fn list(&self) -> anyhow::Result<Vec<Song>> {
        let songs = sqlx::query_as::<_, Song>(
            "SELECT name, url, originalviews, latestviews FROM songs"
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(songs)
    }

    #[instrument(skip(self), level = "trace")]
    async fn insert(&self, name: &str, url: &str, original_views: i32) -> anyhow::Result<()> {
        sqlx::query(
            "INSERT INTO songs (name, url, originalviews) VALUES ($1, $2, $3)"
        )
        .bind(name)
        .bind(url)
        .bind(original_views)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    #[instrument(skip(self), level = "trace")]
    async fn rename(&self, url: &str, new_name: &str) -> anyhow::Result<u64> {
        let result = sqlx::query(
            "UPDATE songs SET name = $1 WHERE url = $2"
        )
        .bind(new_name)
        .bind(url)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self), level = "trace")]
    async fn delete(&self, url: &str) -> anyhow::Result<u64> {
        let result = sqlx::query(
            "DELETE FROM songs WHERE url = $1"
        )
        .bind(url)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn ping(&self) -> anyhow::Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
