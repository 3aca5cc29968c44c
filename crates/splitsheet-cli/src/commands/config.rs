use anyhow::{Context, Result};
use toml_edit::{value, DocumentMut};

use crate::config::{self, Config};

const VALID_KEYS: &str = "catalog_path, recent_songs, logging.level, logging.coloured";

/// Show the current effective configuration.
pub fn show_config(config: &Config) -> Result<()> {
    println!("Current Configuration");
    println!("=====================\n");

    println!("Config file: {}", config::config_file_path().display());

    let exists = config::config_file_path().exists();
    println!("File exists: {}\n", if exists { "yes" } else { "no (using defaults)" });

    println!("Settings:");
    println!(
        "  catalog_path: {}",
        config
            .catalog_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| String::from("<bundled demo catalog>"))
    );
    println!("  recent_songs: {}", config.recent_songs);
    println!("  logging.level: {:?}", config.logging.level);
    println!("  logging.coloured: {}", config.logging.coloured);

    println!("\nPriority: CLI args > ENV vars (SPLITSHEET_*) > Config file > Defaults");

    Ok(())
}

/// Get a specific config value, or print the whole file.
pub fn get_config(config: &Config, key: Option<String>) -> Result<()> {
    let Some(key) = key else {
        let config_path = config::config_file_path();

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)
                .context("Failed to read config file")?;
            print!("{}", contents);
        } else {
            println!("Config file does not exist: {}", config_path.display());
            println!("\nRun 'splitsheet config init' to create it.");
        }
        return Ok(());
    };

    match key.as_str() {
        "catalog_path" => match &config.catalog_path {
            Some(path) => println!("{}", path.display()),
            None => println!("<not set>"),
        },
        "recent_songs" => println!("{}", config.recent_songs),
        "logging.level" => println!("{:?}", config.logging.level),
        "logging.coloured" => println!("{}", config.logging.coloured),
        _ => {
            anyhow::bail!("Unknown config key: {}\n\nValid keys: {}", key, VALID_KEYS);
        }
    }

    Ok(())
}

/// Set a config value, preserving the rest of the file.
pub fn set_config(key: String, raw: String) -> Result<()> {
    let config_path = config::config_file_path();
    config::ensure_config_file()?;

    let contents = std::fs::read_to_string(&config_path)
        .context("Failed to read config file")?;
    let updated = update_document(&contents, &key, &raw)?;

    std::fs::write(&config_path, updated)
        .context("Failed to write config file")?;

    println!("✓ Updated {} = {}", key, raw);
    println!("  in {}", config_path.display());

    Ok(())
}

fn update_document(contents: &str, key: &str, raw: &str) -> Result<String> {
    let mut doc: DocumentMut = contents.parse().context("Config file is not valid TOML")?;

    match key {
        "catalog_path" => {
            doc["catalog_path"] = value(raw);
        }
        "recent_songs" => {
            let count: i64 = raw
                .parse()
                .ok()
                .filter(|n| *n >= 0)
                .with_context(|| format!("recent_songs must be a non-negative integer, got '{}'", raw))?;
            doc["recent_songs"] = value(count);
        }
        "logging.level" => {
            let level = raw.to_ascii_lowercase();
            if !["trace", "debug", "info", "warn", "error"].contains(&level.as_str()) {
                anyhow::bail!("logging.level must be one of trace, debug, info, warn, error");
            }
            doc["logging"]["level"] = value(level);
        }
        "logging.coloured" => {
            let coloured: bool = raw
                .parse()
                .with_context(|| format!("logging.coloured must be true or false, got '{}'", raw))?;
            doc["logging"]["coloured"] = value(coloured);
        }
        _ => {
            anyhow::bail!("Unknown config key: {}\n\nValid keys: {}", key, VALID_KEYS);
        }
    }

    Ok(doc.to_string())
}

/// Show the config file path.
pub fn show_path() -> Result<()> {
    let config_path = config::config_file_path();
    println!("{}", config_path.display());
    Ok(())
}

/// Show example configuration.
pub fn show_example() -> Result<()> {
    print!("{}", config::example_config());
    Ok(())
}

/// Initialize config file with defaults.
pub fn init_config() -> Result<()> {
    let created = config::ensure_config_file()?;
    let config_path = config::config_file_path();

    if created {
        println!("✓ Created config file: {}", config_path.display());
        println!("\nEdit this file to configure splitsheet.");
    } else {
        println!("Config file already exists: {}", config_path.display());
    }

    Ok(())
}
