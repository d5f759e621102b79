use std::sync::Arc;

use axum::{Json, http::StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::{
    errors::SongError,
    models::song::{
        CreateSongRequest, DeleteSongRequest, SongList, UpdateSongRequest, decode_request,
    },
    store::SongStore,
};

#[derive(Clone)]
pub struct SongController {
    store: Arc<dyn SongStore>,
}

impl SongController {
    pub fn new(store: Arc<dyn SongStore>) -> Self {
        SongController { store }
    }

    // Any failure here aborts the request before the primary statement runs.
    async fn _ensure_table(&self) -> Result<(), SongError> {
        self.store.ensure_schema().await.map_err(SongError::Schema)
    }

    fn _decode<T: DeserializeOwned + Default>(body: &[u8]) -> Result<T, SongError> {
        Ok(decode_request(body)?)
    }

    pub async fn list_songs(&self) -> Result<Json<SongList>, SongError> {
        self._ensure_table().await?;
        let items = self.store.list().await.map_err(SongError::Query)?;
        debug!("listing {} songs", items.len());
        Ok(Json(SongList { items }))
    }

    pub async fn create_song(&self, body: &[u8]) -> Result<(StatusCode, String), SongError> {
        let req: CreateSongRequest = Self::_decode(body)?;
        self._ensure_table().await?;

        self.store
            .insert(&req.name, &req.url, req.original_views)
            .await
            .map_err(SongError::Insert)?;

        info!("Inserted song {:?} at {:?}", req.name, req.url);
        Ok((
            StatusCode::CREATED,
            format!("Success inserting song: {:?}", req.name),
        ))
    }

    pub async fn update_song(&self, body: &[u8]) -> Result<(StatusCode, String), SongError> {
        let req: UpdateSongRequest = Self::_decode(body)?;
        self._ensure_table().await?;

        let rows = self
            .store
            .rename(&req.url, &req.new_name)
            .await
            .map_err(SongError::Update)?;

        info!("Renamed song at {:?} ({} rows)", req.url, rows);
        Ok((
            StatusCode::CREATED,
            format!("Success updating song with url: {:?}", req.url),
        ))
    }

    pub async fn delete_song(&self, body: &[u8]) -> Result<(StatusCode, String), SongError> {
        let req: DeleteSongRequest = Self::_decode(body)?;
        self._ensure_table().await?;

        let rows = self
            .store
            .delete(&req.url)
            .await
            .map_err(SongError::Delete)?;

        info!("Deleted song at {:?} ({} rows)", req.url, rows);
        Ok((
            StatusCode::CREATED,
            format!("Success deleting song with url: {:?}", req.url),
        ))
    }
}
