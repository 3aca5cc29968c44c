use anyhow::Result;
use std::fmt::{self, Write};

use splitsheet_core::model::{AlertKind, ContributorId};
use splitsheet_search::Dashboard;

use crate::config::Config;

/// Print a contributor's dashboard.
pub fn show_dashboard(
    config: &Config,
    contributor: String,
    recent: Option<usize>,
    all: bool,
) -> Result<()> {
    let catalog = super::load_catalog(config)?;
    let contributor_id = ContributorId::from(contributor);
    let recent_limit = recent.unwrap_or(config.recent_songs);
    let today = chrono::Local::now().date_naive();

    let dashboard = Dashboard::build(&catalog, &contributor_id, recent_limit, today);
    if dashboard.total_songs == 0 {
        log::warn!("No songs in the catalog credit contributor {}", contributor_id);
    }

    let mut out = String::new();
    render_dashboard(&mut out, &dashboard, all)?;
    print!("{}", out);

    Ok(())
}

fn render_dashboard(out: &mut impl Write, dashboard: &Dashboard, all: bool) -> fmt::Result {
    let unread = dashboard.unread_count();

    writeln!(out, "\n📊 Contributor Dashboard ({})\n", dashboard.contributor_id)?;
    writeln!(out, "  Total songs: {}", dashboard.total_songs)?;
    write!(out, "  Alerts: {}", dashboard.alerts.len())?;
    if unread > 0 {
        write!(out, " ({} unread)", unread)?;
    }
    writeln!(out)?;

    let (heading, songs) = if all {
        ("My Songs", &dashboard.songs)
    } else {
        ("Recent Songs", &dashboard.recent_songs)
    };
    writeln!(out, "\n{}", heading)?;
    if songs.is_empty() {
        writeln!(out, "  (none)")?;
    }
    for song in songs {
        writeln!(out, "  {}  [{}]  ISWC: {}", song.title, song.id, song.iswc)?;
    }

    writeln!(out, "\nAlerts")?;
    if dashboard.alerts.is_empty() {
        writeln!(out, "  (none)")?;
    }
    for alert in &dashboard.alerts {
        let marker = match alert.kind {
            AlertKind::Warning => "⚠",
            AlertKind::Info => "ℹ",
            AlertKind::Success => "✓",
        };
        write!(out, "  {} {}  {}", marker, alert.date, alert.message)?;
        if !alert.is_read {
            write!(out, "  [new]")?;
        }
        if let Some(url) = &alert.action_url {
            write!(out, "  → {}", url)?;
        }
        writeln!(out)?;
    }

    Ok(())
}
