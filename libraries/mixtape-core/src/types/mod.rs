mod playlist;
mod song;

pub use playlist::Playlist;
pub use song::Song;
