use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use anyhow::{anyhow, bail};
use async_trait::async_trait;

use crate::models::song::Song;
use crate::store::SongStore;

/// In-process stand-in for the songs table. Mirrors the postgres behaviour the
/// handlers rely on: the table must be created before use and `url` is unique.
#[derive(Default)]
pub struct MemorySongStore {
    rows: Mutex<Vec<Song>>,
    table_exists: AtomicBool,
    fail_schema: bool,
    fail_statements: bool,
    offline: bool,
    statements: AtomicUsize,
}

impl MemorySongStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose schema guard always fails.
    pub fn failing_schema() -> Self {
        Self {
            fail_schema: true,
            ..Self::default()
        }
    }

    /// A store whose schema guard succeeds but whose statements all fail.
    pub fn failing_statements() -> Self {
        Self {
            fail_statements: true,
            ..Self::default()
        }
    }

    /// A store that rejects every call.
    pub fn offline() -> Self {
        Self {
            offline: true,
            ..Self::default()
        }
    }

    pub fn rows(&self) -> Vec<Song> {
        self.rows.lock().unwrap().clone()
    }

    /// Number of statements attempted, whether or not they succeeded. The
    /// schema guard is not counted.
    pub fn statements(&self) -> usize {
        self.statements.load(Ordering::SeqCst)
    }

    fn begin(&self) -> anyhow::Result<()> {
        self.statements.fetch_add(1, Ordering::SeqCst);
        if self.offline {
            bail!("connection refused");
        }
        if !self.table_exists.load(Ordering::SeqCst) {
            bail!("relation \"songs\" does not exist");
        }
        if self.fail_statements {
            bail!("canceling statement due to statement timeout");
        }
        Ok(())
    }
}

#[async_trait]
impl SongStore for MemorySongStore {
    async fn ensure_schema(&self) -> anyhow::Result<()> {
        if self.offline || self.fail_schema {
            bail!("permission denied for schema public");
        }
        self.table_exists.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn list(&self) -> anyhow::Result<Vec<Song>> {
        self.begin()?;
        Ok(self.rows())
    }

    async fn insert(&self, name: &str, url: &str, original_views: i32) -> anyhow::Result<()> {
        self.begin()?;
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|s| s.url == url) {
            return Err(anyhow!(
                "duplicate key value violates unique constraint \"songs_url_key\""
            ));
        }
        rows.push(Song {
            name: name.to_string(),
            url: url.to_string(),
            original_views,
            latest_views: 0,
        });
        Ok(())
    }

    async fn rename(&self, url: &str, new_name: &str) -> anyhow::Result<u64> {
        self.begin()?;
        let mut rows = self.rows.lock().unwrap();
        let mut touched = 0;
        for song in rows.iter_mut().filter(|s| s.url == url) {
            song.name = new_name.to_string();
            touched += 1;
        }
        Ok(touched)
    }

    async fn delete(&self, url: &str) -> anyhow::Result<u64> {
        self.begin()?;
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|s| s.url != url);
        Ok((before - rows.len()) as u64)
    }

    async fn ping(&self) -> anyhow::Result<()> {
        if self.offline {
            bail!("connection refused");
        }
        Ok(())
    }
}
