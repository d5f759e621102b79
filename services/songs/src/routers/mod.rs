use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::controllers::{RootController, SongController};
use crate::store::SongStore;

pub mod root;
pub mod song;

pub use root::{health_check_route, root_route};
pub use song::{create_song_route, delete_song_route, list_songs_route, update_song_route};

/// Router state. Every controller shares the one store handed in by `main`.
#[derive(Clone)]
pub struct AppState {
    pub root: RootController,
    pub songs: SongController,
}

impl AppState {
    pub fn new(store: Arc<dyn SongStore>) -> Self {
        AppState {
            root: RootController::new(store.clone()),
            songs: SongController::new(store),
        }
    }
}

pub fn app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Core routes
        .route("/", get(root_route))
        .route("/health", get(health_check_route))
        // Songs
        .route(
            "/songs",
            get(list_songs_route)
                .post(create_song_route)
                .put(update_song_route)
                .delete(delete_song_route),
        )
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
