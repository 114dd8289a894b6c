/// Playlist domain type
use crate::error::{MixtapeError, Result};
use crate::ordering::{self, SortKey};
use crate::types::Song;
use std::fmt;

/// Named, ordered sequence of songs
///
/// Song order is significant: it is the only index used by positional
/// removal. The playlist remembers the key of its most recent sort so that
/// title lookups can use binary search only when the order allows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    /// Playlist name (unique within a store)
    name: String,

    /// Songs in playback order
    songs: Vec<Song>,

    /// Key of the last sort, cleared when a song is appended
    sorted_by: Option<SortKey>,
}

impl Playlist {
    /// Create an empty playlist
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            songs: Vec::new(),
            sorted_by: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Key of the most recent sort, if the order is still known
    pub fn sorted_by(&self) -> Option<SortKey> {
        self.sorted_by
    }

    /// Append a song to the end of the playlist
    ///
    /// Duplicates are allowed.
    pub fn add_song(&mut self, song: Song) {
        self.songs.push(song);
        self.sorted_by = None;
    }

    /// Remove the first song equal to `song`
    pub fn remove_song(&mut self, song: &Song) -> Result<Song> {
        let index = self
            .songs
            .iter()
            .position(|s| s == song)
            .ok_or_else(|| MixtapeError::song_not_found(&self.name, song.to_string()))?;

        Ok(self.songs.remove(index))
    }

    /// Remove and return the song at the front
    pub fn remove_first(&mut self) -> Result<Song> {
        if self.songs.is_empty() {
            return Err(MixtapeError::EmptyPlaylist(self.name.clone()));
        }
        Ok(self.songs.remove(0))
    }

    /// Remove and return the song at the back
    pub fn remove_last(&mut self) -> Result<Song> {
        self.songs
            .pop()
            .ok_or_else(|| MixtapeError::EmptyPlaylist(self.name.clone()))
    }

    /// Remove a song by exact title
    ///
    /// Uses binary search when the playlist was last sorted by title and
    /// nothing has been appended since; otherwise falls back to a linear
    /// scan for the first matching title.
    pub fn remove_by_title(&mut self, title: &str) -> Result<Song> {
        let index = match self.sorted_by {
            Some(SortKey::Title) => ordering::find_by_title(&self.songs, title),
            _ => self.songs.iter().position(|s| s.title == title),
        };

        let index = index.ok_or_else(|| MixtapeError::song_not_found(&self.name, title))?;
        Ok(self.songs.remove(index))
    }

    /// Stable sort of the songs by `key`
    pub fn sort_by(&mut self, key: SortKey) {
        let songs = std::mem::take(&mut self.songs);
        self.songs = ordering::sort_songs(songs, key);
        self.sorted_by = Some(key);
    }

    /// Human-readable listing of the playlist
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Playlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Playlist: {}\nSongs: ", self.name)?;
        for (i, song) in self.songs.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{song}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playlist_with(titles: &[&str]) -> Playlist {
        let mut playlist = Playlist::new("Test");
        for title in titles {
            playlist.add_song(Song::new(*title, "Artist", "Genre"));
        }
        playlist
    }

    fn titles(playlist: &Playlist) -> Vec<&str> {
        playlist.songs().iter().map(|s| s.title.as_str()).collect()
    }

    #[test]
    fn add_appends_in_order() {
        let playlist = playlist_with(&["One", "Two", "One"]);
        assert_eq!(titles(&playlist), vec!["One", "Two", "One"]);
        assert_eq!(playlist.len(), 3);
    }

    #[test]
    fn add_then_remove_restores_sequence() {
        let mut playlist = playlist_with(&["A", "B"]);
        let before = playlist.songs().to_vec();

        let song = Song::new("C", "Other", "Jazz");
        playlist.add_song(song.clone());
        let removed = playlist.remove_song(&song).unwrap();

        assert_eq!(removed, song);
        assert_eq!(playlist.songs(), before.as_slice());
    }

    #[test]
    fn remove_song_takes_first_match_only() {
        let mut playlist = playlist_with(&["A", "B", "A"]);
        playlist
            .remove_song(&Song::new("A", "Artist", "Genre"))
            .unwrap();
        assert_eq!(titles(&playlist), vec!["B", "A"]);
    }

    #[test]
    fn remove_missing_song_fails() {
        let mut playlist = playlist_with(&["A"]);
        let err = playlist
            .remove_song(&Song::new("A", "Someone Else", "Genre"))
            .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(playlist.len(), 1);
    }

    #[test]
    fn remove_first_and_last_on_single_song() {
        let mut playlist = playlist_with(&["Only"]);
        assert_eq!(playlist.remove_first().unwrap().title, "Only");
        assert!(playlist.is_empty());
        assert_eq!(
            playlist.remove_first(),
            Err(MixtapeError::EmptyPlaylist("Test".to_string()))
        );

        let mut playlist = playlist_with(&["Only"]);
        assert_eq!(playlist.remove_last().unwrap().title, "Only");
        assert!(playlist.is_empty());
        assert_eq!(
            playlist.remove_last(),
            Err(MixtapeError::EmptyPlaylist("Test".to_string()))
        );
    }

    #[test]
    fn remove_first_and_last_ends() {
        let mut playlist = playlist_with(&["A", "B", "C"]);
        assert_eq!(playlist.remove_last().unwrap().title, "C");
        assert_eq!(playlist.remove_first().unwrap().title, "A");
        assert_eq!(titles(&playlist), vec!["B"]);
    }

    #[test]
    fn sort_sets_marker_and_add_clears_it() {
        let mut playlist = playlist_with(&["X", "B"]);
        assert_eq!(playlist.sorted_by(), None);

        playlist.sort_by(SortKey::Title);
        assert_eq!(titles(&playlist), vec!["B", "X"]);
        assert_eq!(playlist.sorted_by(), Some(SortKey::Title));

        // Removal keeps the order sorted
        playlist.remove_last().unwrap();
        assert_eq!(playlist.sorted_by(), Some(SortKey::Title));

        playlist.add_song(Song::new("A", "Artist", "Genre"));
        assert_eq!(playlist.sorted_by(), None);
    }

    #[test]
    fn remove_by_title_on_sorted_playlist() {
        let mut playlist = playlist_with(&["Pony", "No Scrubs", "Can We Talk", "Kiss of Life"]);
        playlist.sort_by(SortKey::Title);

        let removed = playlist.remove_by_title("No Scrubs").unwrap();
        assert_eq!(removed.title, "No Scrubs");
        assert_eq!(titles(&playlist), vec!["Can We Talk", "Kiss of Life", "Pony"]);

        assert!(playlist.remove_by_title("No Scrubs").unwrap_err().is_not_found());
    }

    #[test]
    fn remove_by_title_on_unsorted_playlist() {
        // Binary search would miss "A" here; the linear fallback does not
        let mut playlist = playlist_with(&["Z", "M", "A"]);
        assert_eq!(playlist.remove_by_title("A").unwrap().title, "A");

        let mut playlist = playlist_with(&["A", "B"]);
        playlist.sort_by(SortKey::Artist);
        playlist.add_song(Song::new("0", "Artist", "Genre"));
        assert_eq!(playlist.remove_by_title("0").unwrap().title, "0");
    }

    #[test]
    fn marker_follows_latest_sort() {
        let mut playlist = Playlist::new("Mix");
        playlist.add_song(Song::new("A", "z", "Genre"));
        playlist.add_song(Song::new("B", "y", "Genre"));
        playlist.add_song(Song::new("C", "x", "Genre"));

        playlist.sort_by(SortKey::Title);
        playlist.sort_by(SortKey::Artist);
        assert_eq!(playlist.sorted_by(), Some(SortKey::Artist));
        assert_eq!(titles(&playlist), vec!["C", "B", "A"]);

        // Titles are now descending; only a scan finds "A"
        assert_eq!(playlist.remove_by_title("A").unwrap().title, "A");
        assert_eq!(titles(&playlist), vec!["C", "B"]);
    }

    #[test]
    fn render_lists_songs() {
        let mut playlist = Playlist::new("Mix");
        assert_eq!(playlist.render(), "Playlist: Mix\nSongs: ");

        playlist.add_song(Song::new("X", "Y", "Pop"));
        playlist.add_song(Song::new("B", "C", "Rock"));
        assert_eq!(
            playlist.render(),
            "Playlist: Mix\nSongs: X by Y (Pop), B by C (Rock)"
        );
    }
}
