use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

/// Failures of the song handlers. Each one ends the current request with a
/// 500 and the rendered message as a plain-text body.
#[derive(Debug, Error)]
pub enum SongError {
    #[error("Error decoding json in req body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Error creating database table: {0:#}")]
    Schema(anyhow::Error),

    #[error("Error reading songs: {0:#}")]
    Query(anyhow::Error),

    #[error("Error inserting song: {0:#}")]
    Insert(anyhow::Error),

    #[error("Error updating song: {0:#}")]
    Update(anyhow::Error),

    #[error("Error deleting song: {0:#}")]
    Delete(anyhow::Error),
}

impl IntoResponse for SongError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        error!("{}", message);
        (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
    }
}
