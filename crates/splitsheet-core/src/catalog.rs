//! The in-memory song catalog.
//!
//! A [`Catalog`] is loaded once and then only read. Construction checks the
//! structural invariants callers rely on (unique song ids, split
//! percentages within 0–100, splits attached to the song they name) and
//! logs, but accepts, songs whose splits do not add up to 100.
//!
//! # Example
//!
//! ```
//! use splitsheet_core::Catalog;
//!
//! let catalog = Catalog::seed().unwrap();
//! assert!(!catalog.songs().is_empty());
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::error::{Error, Result};
use crate::model::{Alert, ContributorId, Song, SongId};

const SEED_CATALOG: &str = include_str!("../data/seed_catalog.json");

/// Tolerance used when checking that splits add up to a whole song.
const SPLIT_TOTAL_TOLERANCE: f64 = 0.01;

/// On-disk shape of a catalog file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    songs: Vec<Song>,

    #[serde(default)]
    alerts: Vec<Alert>,
}

/// A validated, read-only collection of songs and dashboard alerts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    songs: Vec<Song>,
    alerts: Vec<Alert>,
}

impl Catalog {
    /// Build a catalog from songs, validating them.
    pub fn from_songs(songs: Vec<Song>) -> Result<Self> {
        validate_songs(&songs)?;
        Ok(Self {
            songs,
            alerts: Vec::new(),
        })
    }

    #[must_use]
    pub fn with_alerts(mut self, alerts: Vec<Alert>) -> Self {
        self.alerts = alerts;
        self
    }

    /// The demo catalog bundled with the crate.
    pub fn seed() -> Result<Self> {
        Self::from_json(SEED_CATALOG)
    }

    /// Parse a catalog from JSON text.
    pub fn from_json(content: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(content)?;
        Self::from_file(file)
    }

    /// Parse a catalog from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(content)?;
        Self::from_file(file)
    }

    /// Load a catalog from disk.
    ///
    /// Files ending in `.json` are read as JSON; anything else as TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let catalog = if is_json {
            Self::from_json(&content)
        } else {
            Self::from_toml(&content)
        }
        .map_err(|e| match e {
            Error::InvalidData(msg) => {
                Error::InvalidData(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })?;

        log::info!(
            "Loaded {} songs and {} alerts from {}",
            catalog.songs.len(),
            catalog.alerts.len(),
            path.display()
        );
        Ok(catalog)
    }

    fn from_file(file: CatalogFile) -> Result<Self> {
        Ok(Self::from_songs(file.songs)?.with_alerts(file.alerts))
    }

    /// Serialize the catalog back to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        let file = CatalogFile {
            songs: self.songs.clone(),
            alerts: self.alerts.clone(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    #[must_use]
    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    #[must_use]
    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Look up a song by id.
    pub fn song(&self, id: &SongId) -> Result<&Song> {
        self.songs
            .iter()
            .find(|song| &song.id == id)
            .ok_or_else(|| Error::NotFound {
                entity: "song",
                id: id.to_string(),
            })
    }

    /// Songs crediting `id` as writer, publisher, or split holder, in
    /// catalog order.
    pub fn songs_for_contributor<'a>(
        &'a self,
        id: &'a ContributorId,
    ) -> impl Iterator<Item = &'a Song> + 'a {
        self.songs.iter().filter(move |song| song.involves(id))
    }
}

fn validate_songs(songs: &[Song]) -> Result<()> {
    let mut seen: HashSet<&SongId> = HashSet::with_capacity(songs.len());

    for song in songs {
        if !seen.insert(&song.id) {
            return Err(Error::InvalidData(format!(
                "duplicate song id {}",
                song.id
            )));
        }

        for split in &song.splits {
            if split.song_id != song.id {
                return Err(Error::InvalidData(format!(
                    "split {} names song {} but is attached to song {}",
                    split.id, split.song_id, song.id
                )));
            }
            if !split.is_valid_percentage() {
                return Err(Error::InvalidData(format!(
                    "split {} on song {} has percentage {} outside 0-100",
                    split.id, song.id, split.percentage
                )));
            }
        }

        let total: f64 = song.splits.iter().map(|s| s.percentage).sum();
        if !song.splits.is_empty() && (total - 100.0).abs() > SPLIT_TOTAL_TOLERANCE {
            log::warn!(
                "Splits for song {} ('{}') total {}%, not 100%",
                song.id,
                song.title,
                total
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Contributor, Split};

    fn two_songs() -> Vec<Song> {
        vec![
            Song::new("1", "Moonlight Sonata")
                .with_writer(Contributor::writer("w1", "Ludwig van Beethoven")),
            Song::new("2", "Bohemian Rhapsody")
                .with_writer(Contributor::writer("w2", "Freddie Mercury")),
        ]
    }

    #[test]
    fn test_seed_catalog_parses() {
        let catalog = Catalog::seed().unwrap();
        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog.alerts().len(), 2);
        assert!(catalog.song(&SongId::from("5")).unwrap().iswc.is_pending());
    }

    #[test]
    fn test_song_lookup_not_found() {
        let catalog = Catalog::from_songs(two_songs()).unwrap();
        let err = catalog.song(&SongId::from("99")).unwrap_err();
        assert!(matches!(err, Error::NotFound { entity: "song", .. }));
    }

    #[test]
    fn test_duplicate_song_ids_rejected() {
        let mut songs = two_songs();
        songs.push(Song::new("1", "Another Moonlight"));
        let err = Catalog::from_songs(songs).unwrap_err();
        assert!(matches!(err, Error::InvalidData(_)));
    }

    #[test]
    fn test_out_of_range_percentage_rejected() {
        let song = Song::new("1", "Yesterday")
            .with_split(Contributor::writer("w3", "Paul McCartney"), 120.0);
        assert!(Catalog::from_songs(vec![song]).is_err());
    }

    #[test]
    fn test_split_for_other_song_rejected() {
        let mut song = Song::new("1", "Yesterday");
        song.splits.push(Split::new(
            "s1",
            "2",
            Contributor::writer("w3", "Paul McCartney"),
            50.0,
        ));
        assert!(Catalog::from_songs(vec![song]).is_err());
    }

    #[test]
    fn test_partial_splits_accepted() {
        let song = Song::new("1", "Yesterday")
            .with_split(Contributor::writer("w3", "Paul McCartney"), 50.0);
        let catalog = Catalog::from_songs(vec![song]).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_songs_for_contributor_keeps_catalog_order() {
        let catalog = Catalog::seed().unwrap();
        let freddie = ContributorId::from("w2");
        let ids: Vec<&str> = catalog
            .songs_for_contributor(&freddie)
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(ids, vec!["2", "5"]);
    }

    #[test]
    fn test_json_round_trip_preserves_catalog() {
        let catalog = Catalog::seed().unwrap();
        let json = catalog.to_json().unwrap();
        let reloaded = Catalog::from_json(&json).unwrap();
        assert_eq!(reloaded, catalog);
    }
}
