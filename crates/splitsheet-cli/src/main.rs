use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use splitsheet_search::ResultType;

mod commands;
mod config;

use config::Config;

#[derive(Debug, Parser)]
#[command(name = "splitsheet", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Catalog file to browse (default: the bundled demo catalog)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Search songs, writers, and publishers
    ///
    /// Matches the query case-insensitively against song titles, ISWC codes,
    /// writer names, and publisher names. An empty query lists the whole
    /// catalog.
    ///
    /// The writers and publishers behind the matching songs are listed once
    /// each, in the order they first appear. The result count covers songs,
    /// writers, and publishers together, whichever list --type shows.
    Search {
        /// Text to look for
        #[arg(default_value = "")]
        query: String,

        /// Which list to show: songs, writers, or publishers
        #[arg(long = "type", short = 't', default_value = "songs")]
        result_type: ResultType,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show a song with its contributors and ownership split
    Song {
        /// Song identifier
        id: String,
    },
    /// Show a contributor's songs and alerts
    Dashboard {
        /// Contributor identifier (e.g. w2)
        contributor: String,

        /// Number of recent songs to list (default: config recent_songs)
        #[arg(long, conflicts_with = "all")]
        recent: Option<usize>,

        /// List every song crediting the contributor
        #[arg(long)]
        all: bool,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, clap::Subcommand)]
enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Print one value, or the whole config file
    Get { key: Option<String> },
    /// Set a value in the config file
    Set { key: String, value: String },
    /// Print the config file path
    Path,
    /// Create the config file with defaults
    Init,
    /// Print an example config file
    Example,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load()?.with_catalog_path(cli.catalog);
    config.logging.init()?;

    match cli.command {
        Commands::Search {
            query,
            result_type,
            json,
        } => {
            commands::run_search(&config, query, result_type, json)?;
        }
        Commands::Song { id } => {
            commands::show_song(&config, id)?;
        }
        Commands::Dashboard {
            contributor,
            recent,
            all,
        } => {
            commands::show_dashboard(&config, contributor, recent, all)?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show_config(&config)?,
            ConfigAction::Get { key } => commands::config::get_config(&config, key)?,
            ConfigAction::Set { key, value } => commands::config::set_config(key, value)?,
            ConfigAction::Path => commands::config::show_path()?,
            ConfigAction::Init => commands::config::init_config()?,
            ConfigAction::Example => commands::config::show_example()?,
        },
    }

    Ok(())
}
