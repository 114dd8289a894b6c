/// Playlists API routes
use crate::{error::Result, extract::OptionalJson, state::AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use mixtape_core::{MixtapeError, Song, SortKey};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct SortRequest {
    /// One of `title`, `artist`, `genre`; defaults to `title`
    pub by: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RemoveSongRequest {
    /// Remove this exact song; takes precedence over `from_end`
    pub song: Option<Song>,

    /// Pop from the back instead of the front
    #[serde(default)]
    pub from_end: bool,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    fn new(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            message: message.into(),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct PlaylistResponse {
    pub playlist: String,
    pub songs: Vec<Song>,
}

#[derive(Debug, Serialize)]
pub struct PlaylistListResponse {
    pub playlists: Vec<String>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct RemovedSongResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub song: Option<Song>,
}

fn missing_playlist_message(name: &str) -> String {
    format!("Playlist {} does not exist!", name)
}

/// GET /playlists
/// List playlist names in alphabetical order
pub async fn list_playlists(State(app_state): State<AppState>) -> Json<PlaylistListResponse> {
    let store = app_state.store.read().await;
    let playlists: Vec<String> = store.names().map(str::to_string).collect();

    Json(PlaylistListResponse {
        total: playlists.len(),
        playlists,
    })
}

/// POST /playlists
/// Create a new empty playlist
pub async fn create_playlist(
    State(app_state): State<AppState>,
    Json(req): Json<CreatePlaylistRequest>,
) -> Result<(StatusCode, Json<MessageResponse>)> {
    let mut store = app_state.store.write().await;

    match store.create(req.name.as_str()) {
        Ok(()) => tracing::info!("Playlist {} created", req.name),
        Err(err @ MixtapeError::AlreadyExists(_)) if !app_state.strict_status => {
            tracing::warn!("{}", err);
        }
        Err(err) => return Err(err.into()),
    }

    Ok((
        StatusCode::CREATED,
        MessageResponse::new(format!("Playlist {} created.", req.name)),
    ))
}

/// GET /playlists/:name
/// Get a playlist with its songs in current order
pub async fn get_playlist(
    Path(name): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<PlaylistResponse>> {
    let store = app_state.store.read().await;
    let playlist = store.get(&name)?;

    tracing::debug!("Fetched playlist {} ({} songs)", name, playlist.len());

    Ok(Json(PlaylistResponse {
        playlist: playlist.name().to_string(),
        songs: playlist.songs().to_vec(),
    }))
}

/// POST /playlists/:name/songs
/// Append a song to a playlist
pub async fn add_song_to_playlist(
    Path(name): Path<String>,
    State(app_state): State<AppState>,
    Json(song): Json<Song>,
) -> Result<Json<MessageResponse>> {
    let title = song.title.clone();
    let mut store = app_state.store.write().await;

    match store.add_song(&name, song) {
        Ok(()) => {
            tracing::info!("Added {} to {}", title, name);
            Ok(MessageResponse::new(format!(
                "Song {} added to {}.",
                title, name
            )))
        }
        Err(err @ MixtapeError::PlaylistNotFound(_)) if !app_state.strict_status => {
            tracing::warn!("{}", err);
            Ok(MessageResponse::new(missing_playlist_message(&name)))
        }
        Err(err) => Err(err.into()),
    }
}

/// DELETE /playlists/:name/songs/:title
/// Remove a song by title
pub async fn remove_song_by_title(
    Path((name, title)): Path<(String, String)>,
    State(app_state): State<AppState>,
) -> Result<Json<MessageResponse>> {
    remove_titled(&app_state, &name, &title).await
}

/// DELETE /playlists/:name/songs/sort
/// Remove a song titled "sort", whose path is taken by the sort route
pub async fn remove_song_titled_sort(
    Path(name): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<MessageResponse>> {
    remove_titled(&app_state, &name, "sort").await
}

async fn remove_titled(
    app_state: &AppState,
    name: &str,
    title: &str,
) -> Result<Json<MessageResponse>> {
    let mut store = app_state.store.write().await;
    let removed = store.get_mut(name)?.remove_by_title(title)?;

    tracing::info!("Removed {} from {}", removed, name);

    Ok(MessageResponse::new(format!(
        "Song {} removed from {}.",
        removed.title, name
    )))
}

/// POST /playlists/:name/songs/sort
/// Stable sort of a playlist by title, artist or genre
pub async fn sort_playlist(
    Path(name): Path<String>,
    State(app_state): State<AppState>,
    OptionalJson(body): OptionalJson<SortRequest>,
) -> Result<Json<MessageResponse>> {
    let by = body
        .and_then(|req| req.by)
        .unwrap_or_else(|| SortKey::default().to_string());

    // Unknown keys are skipped unless strict
    let key = match by.parse::<SortKey>() {
        Ok(key) => Some(key),
        Err(err) if !app_state.strict_status => {
            tracing::warn!("{}; leaving {} unsorted", err, name);
            None
        }
        Err(err) => return Err(err.into()),
    };

    let mut store = app_state.store.write().await;
    let playlist = match store.get_mut(&name) {
        Ok(playlist) => playlist,
        Err(err) if !app_state.strict_status => {
            tracing::warn!("{}", err);
            return Ok(MessageResponse::new(missing_playlist_message(&name)));
        }
        Err(err) => return Err(err.into()),
    };

    if let Some(key) = key {
        playlist.sort_by(key);
        tracing::info!("Sorted {} by {}", name, key);
    }

    Ok(MessageResponse::new(format!(
        "Songs in {} sorted by {}.",
        name, by
    )))
}

/// POST /playlists/:name/remove
/// Remove a given song, or pop from the front (default) or back
pub async fn remove_song(
    Path(name): Path<String>,
    State(app_state): State<AppState>,
    OptionalJson(body): OptionalJson<RemoveSongRequest>,
) -> Result<Json<RemovedSongResponse>> {
    let req = body.unwrap_or_default();

    let mut store = app_state.store.write().await;
    let playlist = store.get_mut(&name)?;

    let removed = match (&req.song, req.from_end) {
        (Some(song), _) => playlist.remove_song(song),
        (None, true) => playlist.remove_last(),
        (None, false) => playlist.remove_first(),
    };

    match removed {
        Ok(song) => {
            tracing::info!("Removed {} from {}", song, name);
            Ok(Json(RemovedSongResponse {
                message: format!("Removed {} from {}.", song, name),
                song: Some(song),
            }))
        }
        Err(err @ MixtapeError::EmptyPlaylist(_)) if !app_state.strict_status => {
            tracing::warn!("{}", err);
            Ok(Json(RemovedSongResponse {
                message: format!("Playlist {} is empty.", name),
                song: None,
            }))
        }
        Err(err) => Err(err.into()),
    }
}
