use anyhow::{Context, Result};
use std::fmt::{self, Write};

use splitsheet_core::model::{Contributor, Song, SongId};
use splitsheet_search::OwnershipSummary;

use crate::config::Config;

/// Width of the percentage bar in the ownership breakdown.
const BAR_WIDTH: usize = 20;

/// Print the detail view for one song.
pub fn show_song(config: &Config, id: String) -> Result<()> {
    let catalog = super::load_catalog(config)?;
    let song = catalog
        .song(&SongId::from(id))
        .context("Song not found")?;

    let mut out = String::new();
    render_song(&mut out, song)?;
    print!("{}", out);

    Ok(())
}

fn render_song(out: &mut impl Write, song: &Song) -> fmt::Result {
    let summary = OwnershipSummary::for_song(song);

    writeln!(out, "\n🎵 {}\n", song.title)?;
    writeln!(out, "  ISWC: {}", song.iswc)?;
    if !song.alternate_titles.is_empty() {
        writeln!(out, "  Also known as: {}", song.alternate_titles.join(", "))?;
    }
    if let Some(preview) = &song.audio_preview {
        writeln!(out, "  Preview: {}", preview)?;
    }

    writeln!(out, "\nOwnership Split")?;
    if summary.breakdown.is_empty() {
        writeln!(out, "  No splits registered")?;
    }
    for split in &summary.breakdown {
        writeln!(
            out,
            "  {:<32} {:<9} {} {}%",
            split.contributor.name,
            split.contributor.role.label(),
            bar(split.percentage),
            split.percentage
        )?;
    }
    writeln!(
        out,
        "  Writers {}% · Publishers {}%",
        summary.writer_share, summary.publisher_share
    )?;
    if !summary.is_complete() {
        writeln!(out, "  ⚠ Unallocated: {}%", summary.unallocated())?;
    }

    writeln!(out, "\nWriters")?;
    render_contributors(out, &song.writers, &summary)?;
    writeln!(out, "\nPublishers")?;
    render_contributors(out, &song.publishers, &summary)
}

fn render_contributors(
    out: &mut impl Write,
    contributors: &[Contributor],
    summary: &OwnershipSummary,
) -> fmt::Result {
    if contributors.is_empty() {
        return writeln!(out, "  (none)");
    }
    for contributor in contributors {
        write!(out, "  {}", contributor.name)?;
        if let Some(share) = summary.share_for(&contributor.id) {
            write!(out, "  {}% share", share)?;
        }
        writeln!(out)?;
        if let Some(ipi) = &contributor.ipi_number {
            writeln!(out, "    IPI: {}", ipi)?;
        }
        if let Some(url) = &contributor.contact_url {
            writeln!(out, "    Contact: {}", url)?;
        }
    }
    Ok(())
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn bar(percentage: f64) -> String {
    let filled = ((percentage.clamp(0.0, 100.0) / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}
