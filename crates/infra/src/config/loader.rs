//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. Reads a `.env` file from the working directory, if any
//! 2. Attempts to load from `BALLKEEPER_*` environment variables
//! 3. If `BALLKEEPER_API_BASE_URL` is unset, falls back to a config file
//! 4. Probes multiple paths for config files (JSON or TOML)
//! 5. Without any file, uses built-in defaults
//!
//! ## Environment Variables
//! - `BALLKEEPER_API_BASE_URL`: Backend base URL (required for env loading)
//! - `BALLKEEPER_API_TIMEOUT_MS`: Per-request HTTP timeout
//! - `BALLKEEPER_API_MAX_ATTEMPTS`: HTTP-level attempts per request
//! - `BALLKEEPER_CALENDAR_WINDOW_MARGIN_DAYS`: Days fetched around the anchor
//! - `BALLKEEPER_CALENDAR_FETCH_TIMEOUT_MS`: Timeout of one calendar fetch
//! - `BALLKEEPER_CALENDAR_RETRY_MAX_ATTEMPTS`: Attempts per calendar fetch
//! - `BALLKEEPER_CALENDAR_REFETCH_ON_GRANULARITY`: Refetch on zoom change
//!   (true/false)
//! - `BALLKEEPER_CALENDAR_DEFAULT_GRANULARITY`: day, week, month or agenda
//! - `BALLKEEPER_NOTIFICATIONS_ENABLED`: Open the push channel on sign-in
//! - `BALLKEEPER_LOG_LEVEL`: Filter used when `RUST_LOG` is unset
//! - `BALLKEEPER_LOG_JSON`: Emit JSON log lines (true/false)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./ballkeeper.json` or `./ballkeeper.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. `../../config.json` or `../../config.toml` (grandparent directory)
//! 5. Relative to executable location

use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use ballkeeper_domain::{BallkeeperError, Config, Result};

/// Load configuration with automatic fallback strategy
///
/// # Errors
/// Returns `BallkeeperError::Config` if a source exists but is invalid, or
/// if the resulting configuration fails validation.
pub fn load() -> Result<Config> {
    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!(path = %path.display(), "Loaded .env file");
    }

    let config = match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            config
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            match probe_config_paths() {
                Some(path) => load_from_file(Some(path))?,
                None => {
                    tracing::info!("No config file found, using defaults");
                    Config::default()
                }
            }
        }
    };

    config.validate()?;
    Ok(config)
}

/// Load configuration from environment variables
///
/// `BALLKEEPER_API_BASE_URL` must be present; every other variable is
/// optional and falls back to the default.
///
/// # Errors
/// Returns `BallkeeperError::Config` if the base URL is missing or a variable
/// has an invalid value.
pub fn load_from_env() -> Result<Config> {
    let mut config = Config::default();

    config.api.base_url = env_var("BALLKEEPER_API_BASE_URL")?;
    config.api.timeout_ms = env_parse("BALLKEEPER_API_TIMEOUT_MS", config.api.timeout_ms)?;
    config.api.max_attempts = env_parse("BALLKEEPER_API_MAX_ATTEMPTS", config.api.max_attempts)?;

    let calendar = &mut config.calendar;
    calendar.window_margin_days =
        env_parse("BALLKEEPER_CALENDAR_WINDOW_MARGIN_DAYS", calendar.window_margin_days)?;
    calendar.fetch_timeout_ms =
        env_parse("BALLKEEPER_CALENDAR_FETCH_TIMEOUT_MS", calendar.fetch_timeout_ms)?;
    calendar.retry_max_attempts =
        env_parse("BALLKEEPER_CALENDAR_RETRY_MAX_ATTEMPTS", calendar.retry_max_attempts)?;
    calendar.refetch_on_granularity_change = env_bool(
        "BALLKEEPER_CALENDAR_REFETCH_ON_GRANULARITY",
        calendar.refetch_on_granularity_change,
    );
    calendar.default_granularity =
        env_parse("BALLKEEPER_CALENDAR_DEFAULT_GRANULARITY", calendar.default_granularity)?;

    config.notifications.enabled =
        env_bool("BALLKEEPER_NOTIFICATIONS_ENABLED", config.notifications.enabled);

    if let Ok(level) = std::env::var("BALLKEEPER_LOG_LEVEL") {
        config.logging.level = level;
    }
    config.logging.json = env_bool("BALLKEEPER_LOG_JSON", config.logging.json);

    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
/// Sections and fields missing from the file keep their defaults.
///
/// # Errors
/// Returns `BallkeeperError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(BallkeeperError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            BallkeeperError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| BallkeeperError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content, format chosen by extension.
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| BallkeeperError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| BallkeeperError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(BallkeeperError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(candidate_files(&cwd));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(candidate_files(exe_dir));
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

fn candidate_files(base: &Path) -> Vec<PathBuf> {
    vec![
        base.join("config.json"),
        base.join("config.toml"),
        base.join("ballkeeper.json"),
        base.join("ballkeeper.toml"),
        base.join("../config.json"),
        base.join("../config.toml"),
        base.join("../../config.json"),
        base.join("../../config.toml"),
    ]
}

/// Get required environment variable
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        BallkeeperError::Config(format!("Missing required environment variable: {}", key))
    })
}

/// Parse an optional environment variable, keeping `default` when unset.
fn env_parse<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| BallkeeperError::Config(format!("Invalid value for {}: {}", key, e))),
        Err(_) => Ok(default),
    }
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
