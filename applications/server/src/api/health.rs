/// Health check route
use crate::state::AppState;
use axum::{extract::State, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub playlists: usize,
}

/// GET /health - Liveness plus the number of registered playlists
pub async fn health(State(app_state): State<AppState>) -> Json<HealthResponse> {
    let playlists = app_state.store.read().await.len();

    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        playlists,
    })
}
