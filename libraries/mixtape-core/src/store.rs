//! Playlist registry
//!
//! Maps playlist names to playlists. Names are unique and entries are never
//! removed for the lifetime of the store.

use crate::error::{MixtapeError, Result};
use crate::ordering::SortKey;
use crate::types::{Playlist, Song};
use std::collections::btree_map::{BTreeMap, Entry};

/// Name-to-playlist registry
///
/// The store is plain owned data: callers that share it between tasks wrap
/// it in a lock (see the server's `AppState`).
#[derive(Debug, Clone, Default)]
pub struct PlaylistStore {
    entries: BTreeMap<String, Playlist>,
}

impl PlaylistStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new empty playlist
    ///
    /// An existing playlist with the same name is left untouched and
    /// `AlreadyExists` is returned.
    pub fn create(&mut self, name: impl Into<String>) -> Result<()> {
        match self.entries.entry(name.into()) {
            Entry::Occupied(entry) => Err(MixtapeError::AlreadyExists(entry.key().clone())),
            Entry::Vacant(entry) => {
                let playlist = Playlist::new(entry.key().clone());
                entry.insert(playlist);
                Ok(())
            }
        }
    }

    /// Look up a playlist by name
    pub fn get(&self, name: &str) -> Result<&Playlist> {
        self.entries
            .get(name)
            .ok_or_else(|| MixtapeError::PlaylistNotFound(name.to_string()))
    }

    /// Look up a playlist by name for mutation
    pub fn get_mut(&mut self, name: &str) -> Result<&mut Playlist> {
        self.entries
            .get_mut(name)
            .ok_or_else(|| MixtapeError::PlaylistNotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Append a song to the named playlist
    pub fn add_song(&mut self, name: &str, song: Song) -> Result<()> {
        self.get_mut(name)?.add_song(song);
        Ok(())
    }

    /// Sort the named playlist in place
    pub fn sort_playlist(&mut self, name: &str, key: SortKey) -> Result<()> {
        self.get_mut(name)?.sort_by(key);
        Ok(())
    }

    /// Playlist names in alphabetical order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Playlists in name order
    pub fn iter(&self) -> impl Iterator<Item = &Playlist> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
