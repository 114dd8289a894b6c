/// Core error types for Mixtape
use thiserror::Error;

/// Result type alias using `MixtapeError`
pub type Result<T> = std::result::Result<T, MixtapeError>;

/// Core error type for playlist operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MixtapeError {
    /// A playlist with this name is already registered
    #[error("Playlist already exists: {0}")]
    AlreadyExists(String),

    /// Playlist not found
    #[error("Playlist not found: {0}")]
    PlaylistNotFound(String),

    /// No matching song in the playlist
    #[error("Song not found in {playlist}: {song}")]
    SongNotFound { playlist: String, song: String },

    /// Pop from a playlist with no songs
    #[error("Playlist is empty: {0}")]
    EmptyPlaylist(String),

    /// Unrecognized sort key
    #[error("Invalid sort key: {0} (expected title, artist or genre)")]
    InvalidSortKey(String),
}

impl MixtapeError {
    /// Create a song not found error
    pub fn song_not_found(playlist: impl Into<String>, song: impl Into<String>) -> Self {
        Self::SongNotFound {
            playlist: playlist.into(),
            song: song.into(),
        }
    }

    /// True for both playlist and song lookups that came up empty
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PlaylistNotFound(_) | Self::SongNotFound { .. })
    }
}
