//! Ownership aggregation over a song's splits.
//!
//! Nothing here assumes the splits add up to 100: partial sheets report
//! the remainder as unallocated, and songs without splits report
//! everything unallocated.

use serde::Serialize;
use std::cmp::Ordering;

use splitsheet_core::model::{ContributorId, ContributorRole, Song, Split};

/// The share of a song that a complete split sheet allocates.
pub const WHOLE_SONG: f64 = 100.0;

const COMPLETE_TOLERANCE: f64 = 0.01;

/// Derived ownership figures for one song.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OwnershipSummary {
    /// Splits ordered by percentage, largest first. Equal shares keep
    /// their original order.
    pub breakdown: Vec<Split>,
    pub writer_share: f64,
    pub publisher_share: f64,
}

impl OwnershipSummary {
    #[must_use]
    pub fn for_song(song: &Song) -> Self {
        let mut breakdown = song.splits.clone();
        // sort_by is stable, so ties stay in sheet order
        breakdown.sort_by(|a, b| {
            b.percentage
                .partial_cmp(&a.percentage)
                .unwrap_or(Ordering::Equal)
        });

        let share_of = |role: ContributorRole| -> f64 {
            song.splits
                .iter()
                .filter(|s| s.contributor.role == role)
                .map(|s| s.percentage)
                .sum()
        };

        Self {
            writer_share: share_of(ContributorRole::Writer),
            publisher_share: share_of(ContributorRole::Publisher),
            breakdown,
        }
    }

    #[must_use]
    pub fn allocated(&self) -> f64 {
        self.writer_share + self.publisher_share
    }

    #[must_use]
    pub fn unallocated(&self) -> f64 {
        (WHOLE_SONG - self.allocated()).max(0.0)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        (self.allocated() - WHOLE_SONG).abs() <= COMPLETE_TOLERANCE
    }

    /// The share held by `id`. When they hold several splits, the largest
    /// one is reported.
    #[must_use]
    pub fn share_for(&self, id: &ContributorId) -> Option<f64> {
        self.breakdown
            .iter()
            .find(|s| &s.contributor.id == id)
            .map(|s| s.percentage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use splitsheet_core::model::Contributor;

    fn yesterday() -> Song {
        let paul = Contributor::writer("w3", "Paul McCartney");
        let john = Contributor::writer("w4", "John Lennon");
        let sony = Contributor::publisher("p3", "Sony/ATV Music Publishing");
        Song::new("3", "Yesterday")
            .with_writer(paul.clone())
            .with_writer(john.clone())
            .with_publisher(sony.clone())
            .with_split(paul, 50.0)
            .with_split(john, 20.0)
            .with_split(sony, 30.0)
    }

    #[test]
    fn test_breakdown_sorted_descending() {
        let summary = OwnershipSummary::for_song(&yesterday());
        let percentages: Vec<f64> = summary.breakdown.iter().map(|s| s.percentage).collect();
        assert_eq!(percentages, vec![50.0, 30.0, 20.0]);
    }

    #[test]
    fn test_role_shares() {
        let summary = OwnershipSummary::for_song(&yesterday());
        assert!((summary.writer_share - 70.0).abs() < f64::EPSILON);
        assert!((summary.publisher_share - 30.0).abs() < f64::EPSILON);
        assert!(summary.is_complete());
        assert!(summary.unallocated().abs() < f64::EPSILON);
    }

    #[test]
    fn test_ties_keep_sheet_order() {
        let a = Contributor::writer("a", "A");
        let b = Contributor::writer("b", "B");
        let song = Song::new("1", "Tied").with_split(a, 50.0).with_split(b, 50.0);

        let summary = OwnershipSummary::for_song(&song);
        assert_eq!(summary.breakdown[0].contributor.id.as_str(), "a");
        assert_eq!(summary.breakdown[1].contributor.id.as_str(), "b");
    }

    #[test]
    fn test_partial_splits_report_unallocated() {
        let song = Song::new("1", "Demo").with_split(Contributor::writer("w1", "Writer"), 40.0);
        let summary = OwnershipSummary::for_song(&song);

        assert!(!summary.is_complete());
        assert!((summary.unallocated() - 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_no_splits() {
        let summary = OwnershipSummary::for_song(&Song::new("9", "Sketch"));
        assert!(summary.breakdown.is_empty());
        assert!((summary.unallocated() - WHOLE_SONG).abs() < f64::EPSILON);
        assert_eq!(summary.share_for(&ContributorId::from("w1")), None);
    }

    #[test]
    fn test_over_allocation_clamps_unallocated() {
        let song = Song::new("1", "Oversold")
            .with_split(Contributor::writer("w1", "A"), 80.0)
            .with_split(Contributor::publisher("p1", "B"), 40.0);
        let summary = OwnershipSummary::for_song(&song);
        assert!(summary.unallocated().abs() < f64::EPSILON);
        assert!(!summary.is_complete());
    }

    #[test]
    fn test_share_for_contributor() {
        let summary = OwnershipSummary::for_song(&yesterday());
        assert_eq!(summary.share_for(&ContributorId::from("w4")), Some(20.0));
        assert_eq!(summary.share_for(&ContributorId::from("w9")), None);
    }
}
