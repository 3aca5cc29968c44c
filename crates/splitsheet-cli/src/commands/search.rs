use anyhow::{Context, Result};
use std::fmt::{self, Write};

use splitsheet_core::model::{Contributor, Song};
use splitsheet_search::{ResultType, SearchRequest, SearchResult, SelectedResults};

use crate::config::Config;

/// Writers shown on a song card before collapsing into "+N more".
const CARD_WRITERS: usize = 2;

/// Search the catalog and print the selected result list.
pub fn run_search(config: &Config, query: String, result_type: ResultType, json: bool) -> Result<()> {
    let catalog = super::load_catalog(config)?;
    let request = SearchRequest::new(query, result_type);
    log::debug!("Running search {}", request.to_query_string());

    let result = request.run(&catalog);

    if json {
        let out = serde_json::to_string_pretty(&result).context("Failed to serialize results")?;
        println!("{}", out);
    } else {
        let mut out = String::new();
        render_results(&mut out, &result)?;
        print!("{}", out);
    }

    Ok(())
}

fn render_results(out: &mut impl Write, result: &SearchResult) -> fmt::Result {
    if result.is_empty() {
        writeln!(out, "No results found")?;
    } else {
        writeln!(out, "{} results found", result.total_results)?;
    }
    writeln!(out)?;

    match result.selected() {
        SelectedResults::Songs(songs) if !songs.is_empty() => {
            for song in songs {
                render_song_card(out, song)?;
            }
        }
        SelectedResults::Writers(contributors) | SelectedResults::Publishers(contributors)
            if !contributors.is_empty() =>
        {
            for contributor in contributors {
                render_contributor(out, contributor)?;
            }
        }
        _ => {
            writeln!(out, "No {} found", result.result_type)?;
            writeln!(out, "Try adjusting your search or filters")?;
        }
    }

    Ok(())
}

fn render_song_card(out: &mut impl Write, song: &Song) -> fmt::Result {
    writeln!(out, "  {}  [{}]", song.title, song.id)?;

    let mut writers: Vec<String> = song
        .writers
        .iter()
        .take(CARD_WRITERS)
        .map(|w| w.name.clone())
        .collect();
    let more = song.writers.len().saturating_sub(CARD_WRITERS);
    if more > 0 {
        writers.push(format!("+{} more", more));
    }
    if !writers.is_empty() {
        writeln!(out, "    {}", writers.join(", "))?;
    }

    write!(out, "    ISWC: {}", song.iswc)?;
    if let Some(publisher) = song.publishers.first() {
        write!(out, "  ·  {}", publisher.name)?;
    }
    writeln!(out)?;
    writeln!(out)
}

fn render_contributor(out: &mut impl Write, contributor: &Contributor) -> fmt::Result {
    write!(out, "  {} ({})", contributor.name, contributor.role)?;
    if let Some(ipi) = &contributor.ipi_number {
        write!(out, "  IPI: {}", ipi)?;
    }
    writeln!(out)
}
