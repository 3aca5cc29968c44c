pub mod config;
pub mod dashboard;
pub mod search;
pub mod song;

use anyhow::{Context, Result};
use splitsheet_core::Catalog;

use crate::config::Config;

pub use dashboard::show_dashboard;
pub use search::run_search;
pub use song::show_song;

/// Load the catalog named by the configuration, or the bundled seed.
pub fn load_catalog(config: &Config) -> Result<Catalog> {
    match &config.catalog_path {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display())),
        None => {
            log::debug!("No catalog configured, using bundled demo catalog");
            Catalog::seed().context("Failed to load bundled catalog")
        }
    }
}
