use std::sync::Arc;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::warn;

use crate::store::SongStore;

#[derive(Clone)]
pub struct RootController {
    store: Arc<dyn SongStore>,
}

impl RootController {
    pub fn new(store: Arc<dyn SongStore>) -> Self {
        RootController { store }
    }

    pub async fn root(&self) -> Response {
        (
            StatusCode::OK,
            format!("songs service v{}", env!("CARGO_PKG_VERSION")),
        )
            .into_response()
    }

    pub async fn health_check(&self) -> Response {
        match self.store.ping().await {
            Ok(()) => (StatusCode::OK, Json(json!({"status": "ok"}))).into_response(),
            Err(e) => {
                warn!("Health check failed: {:#}", e);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(json!({"status": "unavailable", "error": format!("{:#}", e)})),
                )
                    .into_response()
            }
        }
    }
}
