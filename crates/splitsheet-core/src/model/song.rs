use serde::{Deserialize, Serialize};

use crate::model::contributor::Contributor;
use crate::model::ids::{ContributorId, SongId};
use crate::model::iswc::Iswc;
use crate::model::split::Split;

/// A registered musical work together with its rights holders.
///
/// Writers, publishers, and splits embed full [`Contributor`] records.
/// Any of those lists may be absent in source data; they then
/// deserialize as empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    pub id: SongId,
    pub title: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alternate_titles: Vec<String>,

    #[serde(default)]
    pub iswc: Iswc,

    #[serde(default)]
    pub writers: Vec<Contributor>,

    #[serde(default)]
    pub publishers: Vec<Contributor>,

    #[serde(default)]
    pub splits: Vec<Split>,

    /// Location of a short audio preview.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_preview: Option<String>,
}

impl Song {
    #[must_use]
    pub fn new(id: impl Into<SongId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            alternate_titles: Vec::new(),
            iswc: Iswc::Pending,
            writers: Vec::new(),
            publishers: Vec::new(),
            splits: Vec::new(),
            audio_preview: None,
        }
    }

    #[must_use]
    pub fn with_iswc(mut self, iswc: &str) -> Self {
        self.iswc = Iswc::parse(iswc);
        self
    }

    #[must_use]
    pub fn with_alternate_title(mut self, title: impl Into<String>) -> Self {
        self.alternate_titles.push(title.into());
        self
    }

    #[must_use]
    pub fn with_writer(mut self, writer: Contributor) -> Self {
        self.writers.push(writer);
        self
    }

    #[must_use]
    pub fn with_publisher(mut self, publisher: Contributor) -> Self {
        self.publishers.push(publisher);
        self
    }

    /// Attach a split for `contributor`, numbering it after the splits
    /// already present.
    #[must_use]
    pub fn with_split(mut self, contributor: Contributor, percentage: f64) -> Self {
        let split_id = format!("{}-s{}", self.id, self.splits.len() + 1);
        let split = Split::new(split_id, self.id.clone(), contributor, percentage);
        self.splits.push(split);
        self
    }

    #[must_use]
    pub fn with_audio_preview(mut self, url: impl Into<String>) -> Self {
        self.audio_preview = Some(url.into());
        self
    }

    /// Whether `id` is credited on this song in any capacity.
    #[must_use]
    pub fn involves(&self, id: &ContributorId) -> bool {
        self.writers.iter().any(|c| &c.id == id)
            || self.publishers.iter().any(|c| &c.id == id)
            || self.splits.iter().any(|s| &s.contributor.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_song_new_is_pending() {
        let song = Song::new("5", "New Song Title");
        assert!(song.iswc.is_pending());
        assert!(song.writers.is_empty());
        assert!(song.splits.is_empty());
    }

    #[test]
    fn test_song_builder_numbers_splits() {
        let paul = Contributor::writer("w3", "Paul McCartney");
        let john = Contributor::writer("w4", "John Lennon");
        let song = Song::new("3", "Yesterday")
            .with_iswc("T-456789123-0")
            .with_writer(paul.clone())
            .with_writer(john.clone())
            .with_split(paul, 50.0)
            .with_split(john, 20.0);

        assert_eq!(song.splits.len(), 2);
        assert_eq!(song.splits[0].id.as_str(), "3-s1");
        assert_eq!(song.splits[1].id.as_str(), "3-s2");
        assert_eq!(song.splits[1].song_id, song.id);
    }

    #[test]
    fn test_song_builder_extras() {
        let song = Song::new("1", "Moonlight Sonata")
            .with_alternate_title("Piano Sonata No. 14")
            .with_alternate_title("Sonata quasi una fantasia")
            .with_audio_preview("https://example.com/previews/moonlight.mp3");

        assert_eq!(
            song.alternate_titles,
            vec!["Piano Sonata No. 14", "Sonata quasi una fantasia"]
        );
        assert_eq!(
            song.audio_preview.as_deref(),
            Some("https://example.com/previews/moonlight.mp3")
        );
    }

    #[test]
    fn test_missing_lists_deserialize_empty() {
        let song: Song = serde_json::from_str(r#"{"id": "9", "title": "Sketch"}"#).unwrap();
        assert!(song.writers.is_empty());
        assert!(song.publishers.is_empty());
        assert!(song.splits.is_empty());
        assert!(song.iswc.is_pending());
    }

    #[test]
    fn test_involves_checks_all_credits() {
        let song = Song::new("1", "Moonlight Sonata")
            .with_writer(Contributor::writer("w1", "Ludwig van Beethoven"))
            .with_split(Contributor::publisher("p1", "Classical Music Publishing"), 25.0);

        assert!(song.involves(&ContributorId::from("w1")));
        assert!(song.involves(&ContributorId::from("p1")));
        assert!(!song.involves(&ContributorId::from("w2")));
    }
}
