use anyhow::{Context, Result};
use confyg::{env, Confygery};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for splitsheet.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (SPLITSHEET_* prefix)
/// 3. Config file (~/.config/splitsheet/config.toml)
/// 4. Built-in defaults (lowest priority)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Catalog file to browse (JSON or TOML).
    ///
    /// Can be set via:
    /// - CLI: --catalog /path/to/catalog.toml
    /// - ENV: SPLITSHEET_CATALOG_PATH
    /// - Config: catalog_path = "/path/to/catalog.toml"
    /// - Default: the bundled demo catalog
    pub catalog_path: Option<PathBuf>,

    /// How many songs the dashboard lists as recent.
    pub recent_songs: usize,

    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            recent_songs: 3,
            logging: LoggingConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for twyg::LogLevel {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Self::Trace,
            LogLevel::Debug => Self::Debug,
            LogLevel::Info => Self::Info,
            LogLevel::Warn => Self::Warn,
            LogLevel::Error => Self::Error,
        }
    }
}

/// Log records go to stderr; stdout carries command output such as
/// `search --json`.
const LOG_OUTPUT: twyg::Output = twyg::Output::Stderr;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    pub coloured: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            coloured: true,
        }
    }
}

impl LoggingConfig {
    /// Install the global logger.
    pub fn init(&self) -> Result<()> {
        let opts = twyg::OptsBuilder::new()
            .coloured(self.coloured)
            .output(LOG_OUTPUT)
            .level(self.level.into())
            .build()
            .map_err(|e| anyhow::anyhow!("Invalid logging options: {:?}", e))?;
        twyg::setup(opts).map_err(|e| anyhow::anyhow!("Failed to set up logging: {:?}", e))?;
        Ok(())
    }
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// Searches for config file at: ~/.config/splitsheet/config.toml
    /// Reads environment variables with SPLITSHEET_ prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        let config_path = config_file_path();

        let mut builder = Confygery::new()
            .context("Failed to create config builder")?;

        if config_path.exists() {
            let path_str = config_path.to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder.add_file(path_str)
                .context("Failed to load config file")?;
        }

        let env_opts = env::Options::with_top_level("splitsheet");
        builder.add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder.build()
            .context("Failed to build configuration")?;

        Ok(config)
    }

    /// Apply CLI overrides on top of the loaded configuration.
    #[must_use]
    pub fn with_catalog_path(mut self, catalog_path: Option<PathBuf>) -> Self {
        if catalog_path.is_some() {
            self.catalog_path = catalog_path;
        }
        self
    }
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/splitsheet/config.toml
/// - macOS: ~/Library/Application Support/splitsheet/config.toml
/// - Windows: %APPDATA%\splitsheet\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("splitsheet")
        .join("config.toml")
}

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r#"# Splitsheet Configuration File
#
# Configuration is loaded from multiple sources with the following priority:
# 1. CLI arguments (highest priority)
# 2. Environment variables (SPLITSHEET_* prefix)
# 3. This config file
# 4. Built-in defaults (lowest priority)

# Catalog of songs, contributors, and splits (JSON or TOML)
#
# Can also be set via:
# - CLI: splitsheet --catalog /custom/catalog.toml search moon
# - Environment: SPLITSHEET_CATALOG_PATH=/custom/catalog.toml
#
# Default: the demo catalog bundled with splitsheet
#catalog_path = "/path/to/catalog.toml"

# Number of songs shown under "Recent Songs" on the dashboard
recent_songs = 3

[logging]
# One of: trace, debug, info, warn, error
level = "info"
coloured = true
"#
}

/// Create default config file if it doesn't exist.
///
/// Returns true if a new file was created, false if it already existed.
pub fn ensure_config_file() -> Result<bool> {
    let config_path = config_file_path();

    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .context("Failed to create config directory")?;
    }

    std::fs::write(&config_path, example_config())
        .context("Failed to write config file")?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.catalog_path.is_none());
        assert_eq!(config.recent_songs, 3);
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn test_config_load() {
        // Should not fail even if config file doesn't exist
        let result = Config::load();
        assert!(result.is_ok());
    }

    #[test]
    fn test_cli_catalog_overrides_config() {
        let config = Config::default().with_catalog_path(Some(PathBuf::from("/tmp/catalog.toml")));
        assert_eq!(config.catalog_path, Some(PathBuf::from("/tmp/catalog.toml")));

        let config = config.with_catalog_path(None);
        assert_eq!(config.catalog_path, Some(PathBuf::from("/tmp/catalog.toml")));
    }

    #[test]
    fn test_logs_go_to_stderr() {
        assert!(matches!(LOG_OUTPUT, twyg::Output::Stderr));
    }

    #[test]
    fn test_example_config_parses() {
        let config: Config = toml::from_str(example_config()).unwrap();
        assert_eq!(config.recent_songs, 3);
        assert!(config.logging.coloured);
    }
}
