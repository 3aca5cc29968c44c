//! Contributor dashboards: a contributor's portfolio plus the alerts that
//! concern it.

use chrono::NaiveDate;
use serde::Serialize;

use splitsheet_core::model::{Alert, AlertId, AlertKind, ContributorId, Song, UserProfile};
use splitsheet_core::Catalog;

use crate::error::SearchError;

/// Path prefix alerts use to point at a song.
const SONG_PATH_PREFIX: &str = "/songs/";

/// Overview of one contributor's songs and notifications.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub contributor_id: ContributorId,
    pub total_songs: usize,

    /// Every song crediting the contributor, in catalog order.
    pub songs: Vec<Song>,

    /// Most recently catalogued songs first.
    pub recent_songs: Vec<Song>,

    /// Newest first.
    pub alerts: Vec<Alert>,
}

impl Dashboard {
    /// Build the dashboard for `contributor_id`.
    ///
    /// Catalog alerts are kept when they point at one of the
    /// contributor's songs or at nothing in particular. Every pending
    /// song in the portfolio gets a warning dated `today` unless the
    /// catalog already carries one for it.
    #[must_use]
    pub fn build(
        catalog: &Catalog,
        contributor_id: &ContributorId,
        recent_limit: usize,
        today: NaiveDate,
    ) -> Self {
        let portfolio: Vec<&Song> = catalog.songs_for_contributor(contributor_id).collect();

        let recent_songs = portfolio
            .iter()
            .rev()
            .take(recent_limit)
            .map(|&song| song.clone())
            .collect();

        let mut alerts: Vec<Alert> = catalog
            .alerts()
            .iter()
            .filter(|alert| concerns_portfolio(alert, &portfolio))
            .cloned()
            .collect();

        for song in portfolio.iter().filter(|song| song.iswc.is_pending()) {
            let message = pending_message(song);
            if alerts.iter().any(|alert| alert.message == message) {
                continue;
            }
            alerts.push(
                Alert::new(
                    AlertId::from(format!("pending-{}", song.id)),
                    AlertKind::Warning,
                    message,
                    today,
                )
                .with_action_url(format!("{SONG_PATH_PREFIX}{}", song.id)),
            );
        }

        alerts.sort_by(|a, b| b.date.cmp(&a.date));

        log::debug!(
            "Dashboard for {}: {} songs, {} alerts",
            contributor_id,
            portfolio.len(),
            alerts.len()
        );

        Self {
            contributor_id: contributor_id.clone(),
            total_songs: portfolio.len(),
            songs: portfolio.into_iter().cloned().collect(),
            recent_songs,
            alerts,
        }
    }

    /// Build the dashboard for a signed-in user's linked contributor.
    pub fn for_user(
        catalog: &Catalog,
        user: &UserProfile,
        recent_limit: usize,
        today: NaiveDate,
    ) -> Result<Self, SearchError> {
        let contributor_id = user
            .contributor_id
            .as_ref()
            .ok_or_else(|| SearchError::NoContributor(user.id.clone()))?;
        Ok(Self::build(catalog, contributor_id, recent_limit, today))
    }

    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.alerts.iter().filter(|alert| !alert.is_read).count()
    }

    /// Mark an alert as read. Returns `true` if an unread alert changed.
    pub fn mark_read(&mut self, id: &AlertId) -> bool {
        match self.alerts.iter_mut().find(|alert| &alert.id == id) {
            Some(alert) if !alert.is_read => {
                alert.is_read = true;
                true
            }
            _ => false,
        }
    }

    /// Mark every alert as read, returning how many were unread.
    pub fn mark_all_read(&mut self) -> usize {
        let mut changed = 0;
        for alert in self.alerts.iter_mut().filter(|alert| !alert.is_read) {
            alert.is_read = true;
            changed += 1;
        }
        changed
    }
}

fn pending_message(song: &Song) -> String {
    format!("ISWC pending for '{}'", song.title)
}

fn concerns_portfolio(alert: &Alert, portfolio: &[&Song]) -> bool {
    let Some(url) = alert.action_url.as_deref() else {
        return true;
    };
    match url.strip_prefix(SONG_PATH_PREFIX) {
        Some(song_id) => portfolio.iter().any(|song| song.id.as_str() == song_id),
        None => true,
    }
}
