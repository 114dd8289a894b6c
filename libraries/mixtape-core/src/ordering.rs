//! Ordering engine
//!
//! Stable merge sort parameterized by a key extractor, and binary search
//! over sequences that are already sorted by that key.

use crate::error::MixtapeError;
use crate::types::Song;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Field a playlist can be ordered by
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Order by song title
    #[default]
    Title,
    /// Order by artist name
    Artist,
    /// Order by genre label
    Genre,
}

impl SortKey {
    /// All recognized keys
    pub const ALL: [SortKey; 3] = [SortKey::Title, SortKey::Artist, SortKey::Genre];

    /// Extract the field this key orders by
    pub fn extract(self, song: &Song) -> &str {
        match self {
            SortKey::Title => &song.title,
            SortKey::Artist => &song.artist,
            SortKey::Genre => &song.genre,
        }
    }

    /// Name used on the wire
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Title => "title",
            SortKey::Artist => "artist",
            SortKey::Genre => "genre",
        }
    }
}

impl FromStr for SortKey {
    type Err = MixtapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(SortKey::Title),
            "artist" => Ok(SortKey::Artist),
            "genre" => Ok(SortKey::Genre),
            other => Err(MixtapeError::InvalidSortKey(other.to_string())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort `items` by the key returned from `key`
///
/// Classic top-down merge sort:
/// 1. Sequences of length 0 or 1 are returned untouched
/// 2. Otherwise split at the midpoint and sort both halves recursively
/// 3. Merge by repeatedly taking the smaller head, preferring the left
///    half on ties
///
/// The left preference makes the sort stable. Runs in O(n log n) time with
/// O(n) scratch space per merge level.
pub fn merge_sort_by<T, K, F>(items: Vec<T>, key: F) -> Vec<T>
where
    K: Ord + ?Sized,
    F: Fn(&T) -> &K,
{
    sort_recursive(items, &key)
}

fn sort_recursive<T, K, F>(mut items: Vec<T>, key: &F) -> Vec<T>
where
    K: Ord + ?Sized,
    F: Fn(&T) -> &K,
{
    if items.len() <= 1 {
        return items;
    }

    let right = items.split_off(items.len() / 2);
    let left = sort_recursive(items, key);
    let right = sort_recursive(right, key);

    merge(left, right, key)
}

fn merge<T, K, F>(left: Vec<T>, right: Vec<T>, key: &F) -> Vec<T>
where
    K: Ord + ?Sized,
    F: Fn(&T) -> &K,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => key(l) <= key(r),
            _ => break,
        };

        if take_left {
            merged.extend(left.next());
        } else {
            merged.extend(right.next());
        }
    }

    // At most one side still has elements
    merged.extend(left);
    merged.extend(right);
    merged
}

/// Sort songs by one of the recognized fields
pub fn sort_songs(songs: Vec<Song>, by: SortKey) -> Vec<Song> {
    merge_sort_by(songs, |song: &Song| by.extract(song))
}

/// Locate `target` in `items`, which must be sorted ascending by `key`
///
/// Returns the index of an element whose key equals `target`, or `None`.
/// When several elements share the key, the index is whichever one the
/// bisection lands on first. Unsorted input gives an unspecified answer.
pub fn binary_search_by_key<T, K, F>(items: &[T], target: &K, key: F) -> Option<usize>
where
    K: Ord + ?Sized,
    F: Fn(&T) -> &K,
{
    let mut low = 0;
    let mut high = items.len();

    while low < high {
        let mid = low + (high - low) / 2;
        match key(&items[mid]).cmp(target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }

    None
}

/// Binary search a title-sorted slice of songs
pub fn find_by_title(songs: &[Song], title: &str) -> Option<usize> {
    binary_search_by_key(songs, title, |song: &Song| song.title.as_str())
}
