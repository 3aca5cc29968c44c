//! The catalog query engine.
//!
//! [`search`] filters songs by a case-insensitive substring match on the
//! title, the ISWC, and every writer and publisher name. The writers and
//! publishers behind the matching songs are then flattened and
//! deduplicated by contributor id, keeping the order in which each id was
//! first seen.
//!
//! All three lists are computed for every query. `total_results` counts
//! all of them, whichever [`ResultType`] the caller is showing.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use splitsheet_core::model::{Contributor, ContributorId, Song};
use splitsheet_core::Catalog;

use crate::error::SearchError;

/// Which derived list a caller intends to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultType {
    #[default]
    Songs,
    Writers,
    Publishers,
}

impl ResultType {
    pub const ALL: [Self; 3] = [Self::Songs, Self::Writers, Self::Publishers];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Songs => "songs",
            Self::Writers => "writers",
            Self::Publishers => "publishers",
        }
    }
}

impl fmt::Display for ResultType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResultType {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SearchError::UnknownResultType(s.to_string()))
    }
}

/// The outcome of one query.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchResult {
    pub result_type: ResultType,
    pub songs: Vec<Song>,
    pub writers: Vec<Contributor>,
    pub publishers: Vec<Contributor>,

    /// Songs plus deduplicated writers plus deduplicated publishers.
    pub total_results: usize,
}

/// A borrowed view of the list named by a result's [`ResultType`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SelectedResults<'a> {
    Songs(&'a [Song]),
    Writers(&'a [Contributor]),
    Publishers(&'a [Contributor]),
}

impl SelectedResults<'_> {
    #[must_use]
    pub const fn len(&self) -> usize {
        match self {
            Self::Songs(songs) => songs.len(),
            Self::Writers(contributors) | Self::Publishers(contributors) => contributors.len(),
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SearchResult {
    #[must_use]
    pub fn selected(&self) -> SelectedResults<'_> {
        match self.result_type {
            ResultType::Songs => SelectedResults::Songs(&self.songs),
            ResultType::Writers => SelectedResults::Writers(&self.writers),
            ResultType::Publishers => SelectedResults::Publishers(&self.publishers),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_results == 0
    }
}

/// Search the catalog.
///
/// An empty query matches every song. The query is matched as-is (no
/// trimming), lowercased once, and compared against lowercased fields.
#[must_use]
pub fn search(catalog: &Catalog, query: &str, result_type: ResultType) -> SearchResult {
    let needle = query.to_lowercase();

    let songs: Vec<Song> = catalog
        .songs()
        .iter()
        .filter(|song| needle.is_empty() || song_matches(song, &needle))
        .cloned()
        .collect();

    let writers = unique_contributors(songs.iter().flat_map(|song| &song.writers));
    let publishers = unique_contributors(songs.iter().flat_map(|song| &song.publishers));
    let total_results = songs.len() + writers.len() + publishers.len();

    log::debug!(
        "Search '{}' ({}): {} songs, {} writers, {} publishers",
        query,
        result_type,
        songs.len(),
        writers.len(),
        publishers.len()
    );

    SearchResult {
        result_type,
        songs,
        writers,
        publishers,
        total_results,
    }
}

/// Whether any searchable field of `song` contains `needle`.
///
/// Assumes `needle` is already lowercase.
fn song_matches(song: &Song, needle: &str) -> bool {
    contains_lower(&song.title, needle)
        || contains_lower(song.iswc.as_str(), needle)
        || song.writers.iter().any(|w| contains_lower(&w.name, needle))
        || song.publishers.iter().any(|p| contains_lower(&p.name, needle))
}

fn contains_lower(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Deduplicate by contributor id, keeping the first occurrence.
fn unique_contributors<'a>(contributors: impl Iterator<Item = &'a Contributor>) -> Vec<Contributor> {
    let mut seen: HashSet<&ContributorId> = HashSet::new();
    contributors
        .filter(|c| seen.insert(&c.id))
        .cloned()
        .collect()
}
