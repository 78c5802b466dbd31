//! Configuration loading and API endpoint resolution
//!
//! Resolution priority order, highest first:
//! 1. Command-line argument
//! 2. Environment variable
//! 3. TOML config file (`~/.config/soundify/config.toml` on Linux)
//! 4. Compiled default
//!
//! A missing or unparseable config file degrades to the defaults with a
//! warning; it never terminates the client.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default API base path when nothing else is configured
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000/api";

/// Environment variable overriding the API base URL
pub const API_URL_ENV: &str = "SOUNDIFY_API_URL";

/// Environment variable overriding the log level filter
pub const LOG_LEVEL_ENV: &str = "SOUNDIFY_LOG";

const DEFAULT_LOG_LEVEL: &str = "info";

/// Schema of the optional TOML config file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub api_url: Option<String>,
    pub log_level: Option<String>,
}

impl TomlConfig {
    /// Load the config file from its platform default location
    pub fn load() -> TomlConfig {
        match config_file_path() {
            Some(path) => TomlConfig::load_from(&path),
            None => TomlConfig::default(),
        }
    }

    /// Load from an explicit path; a missing file is not an error
    pub fn load_from(path: &Path) -> TomlConfig {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(_) => return TomlConfig::default(),
        };

        match toml::from_str(&contents) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Ignoring unparseable config file"
                );
                TomlConfig::default()
            }
        }
    }
}

/// Default config file location for the platform
pub fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("soundify").join("config.toml"))
}

/// Resolve the API base URL: CLI arg > env var > config file > default
pub fn resolve_api_url(cli_arg: Option<&str>) -> String {
    resolve_api_url_with(cli_arg, &TomlConfig::load())
}

/// API URL resolution against an already-loaded file config
pub fn resolve_api_url_with(cli_arg: Option<&str>, file: &TomlConfig) -> String {
    // Priority 1: Command-line argument
    if let Some(url) = cli_arg {
        return url.to_string();
    }

    // Priority 2: Environment variable
    if let Ok(url) = std::env::var(API_URL_ENV) {
        if !url.is_empty() {
            return url;
        }
    }

    // Priority 3: TOML config file
    if let Some(url) = &file.api_url {
        return url.clone();
    }

    // Priority 4: Compiled default
    DEFAULT_API_URL.to_string()
}

/// Resolve the log level filter: CLI arg > env var > config file > "info"
pub fn resolve_log_level(cli_arg: Option<&str>) -> String {
    resolve_log_level_with(cli_arg, &TomlConfig::load())
}

/// Log level resolution against an already-loaded file config
pub fn resolve_log_level_with(cli_arg: Option<&str>, file: &TomlConfig) -> String {
    if let Some(level) = cli_arg {
        return level.to_string();
    }

    if let Ok(level) = std::env::var(LOG_LEVEL_ENV) {
        if !level.is_empty() {
            return level;
        }
    }

    if let Some(level) = &file.log_level {
        return level.clone();
    }

    DEFAULT_LOG_LEVEL.to_string()
}
