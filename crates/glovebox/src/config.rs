//! Configuration management for glovebox.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default configuration directory name.
const CONFIG_DIR_NAME: &str = "glovebox";

/// Environment variable prefix. Nested keys are separated by `__`,
/// e.g. `GLOVEBOX_SERVICE__DEFAULT_INTERVAL_MONTHS=12`.
const ENV_PREFIX: &str = "GLOVEBOX_";

/// Longest service interval accepted, in months.
pub const MAX_INTERVAL_MONTHS: u32 = 1200;

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `GLOVEBOX_`)
/// 2. TOML config file at `~/.config/glovebox/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Clock configuration.
    pub clock: ClockConfig,
    /// Service schedule configuration.
    pub service: ServiceConfig,
    /// Output configuration.
    pub output: OutputConfig,
}

/// Which wall clock dates are evaluated against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeZoneSetting {
    /// The host's local time zone.
    #[default]
    Local,
    /// Coordinated Universal Time.
    Utc,
}

/// Clock-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// Time zone in which date-only values mean midnight.
    pub time_zone: TimeZoneSetting,
}

/// Service schedule configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Interval used when none is given on the command line.
    /// Set to 0 for none.
    pub default_interval_months: u32,
}

/// Output format for classification results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Plain,
    /// Pretty-printed JSON.
    Json,
}

/// Output-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format.
    pub format: OutputFormat,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            default_interval_months: 6,
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// A missing file is not an error; defaults and environment still apply.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, parsing or validation fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);
        Self::layered(&config_file, ENV_PREFIX)
    }

    fn layered(config_file: &Path, env_prefix: &str) -> Result<Self> {
        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(config_file))
            .merge(Env::prefixed(env_prefix).split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a specific configuration file, which must exist.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigNotFound`] if the file is missing, or any
    /// loading or validation error.
    pub fn load_existing(path: PathBuf) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::ConfigNotFound { path });
        }
        Self::load_from(Some(path))
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.service.default_interval_months > MAX_INTERVAL_MONTHS {
            return Err(Error::ConfigValidation {
                message: format!(
                    "default_interval_months ({}) cannot exceed {MAX_INTERVAL_MONTHS}",
                    self.service.default_interval_months
                ),
            });
        }

        Ok(())
    }

    /// The configured default interval, `None` when disabled.
    #[must_use]
    pub fn default_interval(&self) -> Option<u32> {
        Some(self.service.default_interval_months).filter(|months| *months > 0)
    }
}
