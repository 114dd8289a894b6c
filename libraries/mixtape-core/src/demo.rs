//! Demo catalogue
//!
//! Three genre playlists used to seed a fresh store for demos and manual
//! testing.

use crate::error::Result;
use crate::store::PlaylistStore;
use crate::types::Song;

/// Playlist names and songs of the demo catalogue, in seeding order
pub fn catalogue() -> Vec<(&'static str, Vec<Song>)> {
    vec![
        (
            "Hip Hop Essentials",
            vec![
                Song::new("N.Y. State of Mind", "Nas", "Hip Hop"),
                Song::new("All of the Lights", "Kanye West", "Hip Hop"),
                Song::new("No Role Modelz", "J. Cole", "Hip Hop"),
                Song::new("Straight Outta Compton", "N.W.A", "Hip Hop"),
                Song::new("C.R.E.A.M.", "Wu-Tang Clan", "Hip Hop"),
            ],
        ),
        (
            "Classic Rap",
            vec![
                Song::new("Big Poppa", "The Notorious B.I.G.", "Rap"),
                Song::new("HUMBLE.", "Kendrick Lamar", "Rap"),
                Song::new("Party Up (Up In Here)", "DMX", "Rap"),
                Song::new("Gold Digger", "Kanye West", "Rap"),
                Song::new("Lose Yourself", "Eminem", "Rap"),
            ],
        ),
        (
            "Timeless R&B",
            vec![
                Song::new("Kiss of Life", "Mary J. Blige", "R&B"),
                Song::new("Pony", "Ginuwine", "R&B"),
                Song::new("Can We Talk", "Tevin Campbell", "R&B"),
                Song::new("Let\u{2019}s Get It On", "Marvin Gaye", "R&B"),
                Song::new("No Scrubs", "TLC", "R&B"),
            ],
        ),
    ]
}

/// Create the demo playlists in `store` and fill them
///
/// Fails with `AlreadyExists` if any demo playlist name is taken; playlists
/// seeded before the conflict are kept.
pub fn seed(store: &mut PlaylistStore) -> Result<()> {
    for (name, songs) in catalogue() {
        store.create(name)?;
        for song in songs {
            store.add_song(name, song)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MixtapeError;

    #[test]
    fn seeds_three_playlists_of_five() {
        let mut store = PlaylistStore::new();
        seed(&mut store).unwrap();

        assert_eq!(store.len(), 3);
        for playlist in store.iter() {
            assert_eq!(playlist.len(), 5, "{}", playlist.name());
        }
        assert_eq!(
            store.get("Classic Rap").unwrap().songs()[1].title,
            "HUMBLE."
        );
    }

    #[test]
    fn seeding_twice_conflicts() {
        let mut store = PlaylistStore::new();
        seed(&mut store).unwrap();

        assert_eq!(
            seed(&mut store),
            Err(MixtapeError::AlreadyExists("Hip Hop Essentials".to_string()))
        );
        assert_eq!(store.get("Hip Hop Essentials").unwrap().len(), 5);
    }
}
