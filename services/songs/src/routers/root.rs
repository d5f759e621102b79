use axum::extract::State;
use crate::routers::AppState;

pub async fn root_route(State(state): State<AppState>) -> impl axum::response::IntoResponse {
    state.root.root().await
}

pub async fn health_check_route(State(state): State<AppState>) -> impl axum::response::IntoResponse {
    state.root.health_check().await
}
