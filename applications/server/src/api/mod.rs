/// API route modules
pub mod health;
pub mod playlists;
pub mod songs;

use crate::state::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the HTTP router over `app_state`
///
/// `/playlists/:name/songs/sort` is a static segment and wins over the
/// `:title` parameter, so it carries its own DELETE for a song titled "sort".
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        // Songs
        .route("/songs", post(songs::create_song))
        // Playlists
        .route(
            "/playlists",
            get(playlists::list_playlists).post(playlists::create_playlist),
        )
        .route("/playlists/:name", get(playlists::get_playlist))
        .route(
            "/playlists/:name/songs",
            post(playlists::add_song_to_playlist),
        )
        .route(
            "/playlists/:name/songs/sort",
            post(playlists::sort_playlist).delete(playlists::remove_song_titled_sort),
        )
        .route(
            "/playlists/:name/songs/:title",
            delete(playlists::remove_song_by_title),
        )
        .route("/playlists/:name/remove", post(playlists::remove_song))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
