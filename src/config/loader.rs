//! Configuration file loading with precedence handling.
//!
//! Precedence chain: defaults → config file → environment → CLI flags.

use crate::source::CatalogSource;
use crate::state::reveal::{DEFAULT_INITIAL_VISIBLE, DEFAULT_REVEAL_STEP};
use crate::state::sort::SortMode;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const ENV_CONFIG: &str = "SKYFARE_CONFIG";
/// Environment variable overriding the catalog location.
pub const ENV_CATALOG: &str = "SKYFARE_CATALOG";
/// Environment variable overriding the initial sort mode.
pub const ENV_SORT: &str = "SKYFARE_SORT";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permissions, not a file, ...).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A setting has a value outside its domain.
    #[error("Invalid value for {key}: {reason}")]
    InvalidValue {
        /// Setting name (config key or environment variable).
        key: String,
        /// What is wrong with it.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional. Corresponds to `~/.config/skyfare/config.toml`.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Catalog file path or URL.
    #[serde(default)]
    pub catalog: Option<String>,

    /// Sort mode on startup: "cheap", "fast" or "optimal".
    #[serde(default)]
    pub default_sort: Option<String>,

    /// Results shown before any "load more".
    #[serde(default)]
    pub initial_visible: Option<usize>,

    /// Results added per "load more".
    #[serde(default)]
    pub reveal_step: Option<usize>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Configuration after applying precedence rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Where to load tickets from.
    pub catalog: CatalogSource,
    /// Sort mode on startup.
    pub default_sort: SortMode,
    /// Results shown before any "load more".
    pub initial_visible: usize,
    /// Results added per "load more".
    pub reveal_step: usize,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            catalog: CatalogSource::default(),
            default_sort: SortMode::default(),
            initial_visible: DEFAULT_INITIAL_VISIBLE,
            reveal_step: DEFAULT_REVEAL_STEP,
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// `~/.local/state/skyfare/skyfare.log` on Linux, the platform state
/// directory elsewhere, or the working directory when there is none.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("skyfare").join("skyfare.log")
    } else {
        PathBuf::from("skyfare.log")
    }
}

/// Resolve default config file path.
///
/// Returns `None` if the platform has no config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("skyfare").join("config.toml"))
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if the file doesn't exist.
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Load configuration with precedence handling.
///
/// Path precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `SKYFARE_CONFIG` environment variable
/// 3. Default path `~/.config/skyfare/config.toml`
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

fn parse_sort(key: &str, value: &str) -> Result<SortMode, ConfigError> {
    value.parse().map_err(|e: crate::state::UnknownSortMode| ConfigError::InvalidValue {
        key: key.to_string(),
        reason: e.to_string(),
    })
}

/// Merge config file into defaults.
///
/// # Errors
///
/// Returns `InvalidValue` for an unrecognized `default_sort`.
pub fn merge_config(config_file: Option<ConfigFile>) -> Result<ResolvedConfig, ConfigError> {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return Ok(defaults);
    };

    let default_sort = match config.default_sort {
        Some(name) => parse_sort("default_sort", &name)?,
        None => defaults.default_sort,
    };

    Ok(ResolvedConfig {
        catalog: config
            .catalog
            .as_deref()
            .map(CatalogSource::parse)
            .unwrap_or(defaults.catalog),
        default_sort,
        initial_visible: config.initial_visible.unwrap_or(defaults.initial_visible),
        reveal_step: config.reveal_step.unwrap_or(defaults.reveal_step),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    })
}

/// Apply environment variable overrides.
///
/// Checks `SKYFARE_CATALOG` and `SKYFARE_SORT`.
///
/// # Errors
///
/// Returns `InvalidValue` if `SKYFARE_SORT` names no sort mode.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> Result<ResolvedConfig, ConfigError> {
    if let Ok(catalog) = std::env::var(ENV_CATALOG) {
        config.catalog = CatalogSource::parse(&catalog);
    }

    if let Ok(sort) = std::env::var(ENV_SORT) {
        config.default_sort = parse_sort(ENV_SORT, &sort)?;
    }

    Ok(config)
}

/// Apply CLI argument overrides. Only flags the user actually passed are
/// `Some`.
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    catalog_override: Option<String>,
    sort_override: Option<SortMode>,
) -> ResolvedConfig {
    if let Some(catalog) = catalog_override {
        config.catalog = CatalogSource::parse(&catalog);
    }

    if let Some(sort) = sort_override {
        config.default_sort = sort;
    }

    config
}

/// Run the whole chain: file, then env, then CLI.
///
/// # Errors
///
/// Propagates file and value errors from each stage.
pub fn resolve_config(
    config_path: Option<PathBuf>,
    catalog_override: Option<String>,
    sort_override: Option<SortMode>,
) -> Result<ResolvedConfig, ConfigError> {
    let file = load_config_with_precedence(config_path)?;
    let merged = merge_config(file)?;
    let with_env = apply_env_overrides(merged)?;
    Ok(apply_cli_overrides(with_env, catalog_override, sort_override))
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
