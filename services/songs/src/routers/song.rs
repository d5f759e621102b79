use axum::{body::Bytes, extract::State, response::Response, response::IntoResponse};

use crate::routers::AppState;

// Bodies are taken raw so decode failures surface as server errors rather than
// the extractor's 4xx rejections.

pub async fn list_songs_route(State(state): State<AppState>) -> Response {
    state.songs.list_songs().await.into_response()
}

pub async fn create_song_route(State(state): State<AppState>, body: Bytes) -> Response {
    state.songs.create_song(&body).await.into_response()
}

pub async fn update_song_route(State(state): State<AppState>, body: Bytes) -> Response {
    state.songs.update_song(&body).await.into_response()
}

pub async fn delete_song_route(State(state): State<AppState>, body: Bytes) -> Response {
    state.songs.delete_song(&body).await.into_response()
}
