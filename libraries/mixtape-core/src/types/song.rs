/// Song value type
use serde::{Deserialize, Serialize};
use std::fmt;

/// A song as it appears in a playlist
///
/// Songs have no identity beyond their fields: two songs with the same
/// title, artist and genre are interchangeable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Song {
    /// Song title
    pub title: String,

    /// Performing artist
    pub artist: String,

    /// Genre label
    pub genre: String,
}

impl Song {
    /// Create a new song
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            genre: genre.into(),
        }
    }
}

impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {} ({})", self.title, self.artist, self.genre)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_format() {
        let song = Song::new("HUMBLE.", "Kendrick Lamar", "Rap");
        assert_eq!(song.to_string(), "HUMBLE. by Kendrick Lamar (Rap)");
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(Song::new("X", "Y", "Pop"), Song::new("X", "Y", "Pop"));
        assert_ne!(Song::new("X", "Y", "Pop"), Song::new("X", "Y", "Rock"));
    }

    #[test]
    fn json_shape() {
        let song = Song::new("Pony", "Ginuwine", "R&B");
        let value = serde_json::to_value(&song).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "title": "Pony", "artist": "Ginuwine", "genre": "R&B" })
        );
    }
}
