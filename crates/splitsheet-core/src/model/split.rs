use serde::{Deserialize, Serialize};

use crate::model::contributor::Contributor;
use crate::model::ids::{SongId, SplitId};

/// A percentage ownership share held by one contributor on one song.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Split {
    pub id: SplitId,
    pub song_id: SongId,
    pub contributor: Contributor,

    /// Share of the song, from 0 to 100.
    pub percentage: f64,
}

impl Split {
    #[must_use]
    pub fn new(
        id: impl Into<SplitId>,
        song_id: impl Into<SongId>,
        contributor: Contributor,
        percentage: f64,
    ) -> Self {
        Self {
            id: id.into(),
            song_id: song_id.into(),
            contributor,
            percentage,
        }
    }

    #[must_use]
    pub fn is_valid_percentage(&self) -> bool {
        self.percentage.is_finite() && (0.0..=100.0).contains(&self.percentage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_bounds() {
        let writer = Contributor::writer("w1", "Paul McCartney");
        assert!(Split::new("s1", "1", writer.clone(), 0.0).is_valid_percentage());
        assert!(Split::new("s2", "1", writer.clone(), 100.0).is_valid_percentage());
        assert!(!Split::new("s3", "1", writer.clone(), 100.5).is_valid_percentage());
        assert!(!Split::new("s4", "1", writer.clone(), -1.0).is_valid_percentage());
        assert!(!Split::new("s5", "1", writer, f64::NAN).is_valid_percentage());
    }
}
