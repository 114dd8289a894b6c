/// Songs API routes
use axum::{http::StatusCode, Json};
use mixtape_core::Song;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SongResponse {
    pub message: String,
    pub song: Song,
}

/// POST /songs
/// Validate a song payload and echo it back; nothing is stored
pub async fn create_song(Json(song): Json<Song>) -> (StatusCode, Json<SongResponse>) {
    tracing::debug!("Song created: {}", song);

    (
        StatusCode::CREATED,
        Json(SongResponse {
            message: "Song created".to_string(),
            song,
        }),
    )
}
