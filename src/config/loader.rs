//! Configuration file loading with precedence handling.

use crate::layout::{DateStamper, LabelHeights};
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "BUBBLECELL_CONFIG";

/// Environment variable overriding the item width.
pub const ITEM_WIDTH_ENV: &str = "BUBBLECELL_ITEM_WIDTH";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A setting parsed but its value is unusable.
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue {
        /// Setting name.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/bubblecell/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// List item width in points.
    #[serde(default)]
    pub item_width: Option<f64>,

    /// Minutes east of UTC used for day keys and time labels.
    #[serde(default)]
    pub utc_offset_minutes: Option<i32>,

    /// Height of a visible date separator.
    #[serde(default)]
    pub date_separator_height: Option<f64>,

    /// Height of a visible sender name.
    #[serde(default)]
    pub sender_name_height: Option<f64>,

    /// Height of the time label.
    #[serde(default)]
    pub time_label_height: Option<f64>,

    /// Height of a visible failed-send strip.
    #[serde(default)]
    pub failed_strip_height: Option<f64>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// List item width in points.
    pub item_width: f64,
    /// Minutes east of UTC.
    pub utc_offset_minutes: i32,
    /// Visible label heights.
    pub label_heights: LabelHeights,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            item_width: 375.0,
            utc_offset_minutes: 0,
            label_heights: LabelHeights::default(),
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Check that every value is usable by the layout engine.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for a non-positive or non-finite
    /// item width, an offset of a day or more, or a negative label height.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.item_width.is_finite() || self.item_width <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "item_width",
                reason: format!("must be a positive number, got {}", self.item_width),
            });
        }

        self.date_stamper()?;

        let heights = [
            ("date_separator_height", self.label_heights.date_separator),
            ("sender_name_height", self.label_heights.sender_name),
            ("time_label_height", self.label_heights.time_label),
            ("failed_strip_height", self.label_heights.failed_strip),
        ];
        for (field, value) in heights {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: format!("must be zero or positive, got {}", value),
                });
            }
        }
        Ok(())
    }

    /// Date stamper for the configured offset.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` when the offset is out of range.
    pub fn date_stamper(&self) -> Result<DateStamper, ConfigError> {
        DateStamper::from_offset_minutes(self.utc_offset_minutes).ok_or_else(|| {
            ConfigError::InvalidValue {
                field: "utc_offset_minutes",
                reason: format!(
                    "must be less than a day in either direction, got {}",
                    self.utc_offset_minutes
                ),
            }
        })
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/bubblecell/bubblecell.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("bubblecell").join("bubblecell.log")
    } else {
        PathBuf::from("bubblecell.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
/// Returns `Err` if file exists but cannot be read or parsed.
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
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

/// Resolve default config file path.
///
/// Returns `~/.config/bubblecell/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("bubblecell").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (like CLI `--config`)
/// 2. `BUBBLECELL_CONFIG` environment variable
/// 3. Default path `~/.config/bubblecell/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
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

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    let heights = defaults.label_heights;
    ResolvedConfig {
        item_width: config.item_width.unwrap_or(defaults.item_width),
        utc_offset_minutes: config
            .utc_offset_minutes
            .unwrap_or(defaults.utc_offset_minutes),
        label_heights: LabelHeights {
            date_separator: config
                .date_separator_height
                .unwrap_or(heights.date_separator),
            sender_name: config.sender_name_height.unwrap_or(heights.sender_name),
            time_label: config.time_label_height.unwrap_or(heights.time_label),
            failed_strip: config.failed_strip_height.unwrap_or(heights.failed_strip),
        },
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `BUBBLECELL_ITEM_WIDTH`: Override item width (unparsable values are ignored)
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(raw) = std::env::var(ITEM_WIDTH_ENV) {
        match raw.trim().parse::<f64>() {
            Ok(width) => config.item_width = width,
            Err(e) => warn!(value = %raw, error = %e, "Ignoring unparsable {}", ITEM_WIDTH_ENV),
        }
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    item_width_override: Option<f64>,
    utc_offset_override: Option<i32>,
) -> ResolvedConfig {
    if let Some(width) = item_width_override {
        config.item_width = width;
    }

    if let Some(offset) = utc_offset_override {
        config.utc_offset_minutes = offset;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
