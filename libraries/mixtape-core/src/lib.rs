//! Mixtape Core
//!
//! In-memory playlist model and ordering algorithms for Mixtape.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Song`, `Playlist`
//! - **Registry**: `PlaylistStore`, the name-to-playlist map
//! - **Ordering Engine**: stable merge sort and binary search by key
//! - **Error Handling**: unified `MixtapeError` and `Result` types
//!
//! Nothing here does I/O or locking; the server crate owns both.
//!
//! # Example
//!
//! ```rust
//! use mixtape_core::{find_by_title, PlaylistStore, Song, SortKey};
//!
//! let mut store = PlaylistStore::new();
//! store.create("A").unwrap();
//! store.add_song("A", Song::new("X", "Y", "Pop")).unwrap();
//! store.add_song("A", Song::new("B", "C", "Rock")).unwrap();
//!
//! store.sort_playlist("A", SortKey::Title).unwrap();
//!
//! let songs = store.get("A").unwrap().songs();
//! assert_eq!(songs[0].title, "B");
//! assert_eq!(find_by_title(songs, "X"), Some(1));
//! ```

#![forbid(unsafe_code)]

pub mod demo;
pub mod error;
pub mod ordering;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use error::{MixtapeError, Result};
pub use ordering::{binary_search_by_key, find_by_title, merge_sort_by, sort_songs, SortKey};
pub use store::PlaylistStore;
pub use types::{Playlist, Song};
