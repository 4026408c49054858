//! Configuration management for the Zero fundamentals service.
//!
//! The service shares the Zero configuration directory at `~/.codecoder/`.
//!
//! # Configuration Priority
//!
//! 1. Default values
//! 2. `config.json`, then `fundamentals.json` merged into the `fundamentals` section
//! 3. Environment variables (ZERO_* prefix)
//!
//! # Environment Variable Mapping
//!
//! ## Observability
//! - `ZERO_LOG_LEVEL` → observability.log_level
//! - `ZERO_LOG_FORMAT` → observability.log_format
//!
//! ## Fundamentals
//! - `ZERO_FUNDAMENTALS_CACHE_CAPACITY` → fundamentals.cache_capacity
//! - `ZERO_FUNDAMENTALS_WINDOW_SIZE` → fundamentals.window_size
//! - `ZERO_FUNDAMENTALS_BASE_URL` → fundamentals.provider.base_url
//! - `ZERO_FUNDAMENTALS_CHECK_TRADING_DAY` → fundamentals.check_trading_day

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config_loader::load_modular_config;

/// Get the configuration directory path.
pub fn config_dir() -> PathBuf {
    directories::UserDirs::new().map_or_else(
        || PathBuf::from(".codecoder"),
        |dirs| dirs.home_dir().join(".codecoder"),
    )
}

// ============================================================================
// Observability Configuration
// ============================================================================

/// Observability configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error)
    /// Aliases: "level" for backward compatibility with existing config files
    #[serde(default = "default_log_level", alias = "level")]
    pub log_level: String,

    /// Log format (json, pretty)
    /// Aliases: "format" for backward compatibility with existing config files
    #[serde(default = "default_log_format", alias = "format")]
    pub log_format: String,

    /// Additional module targets to exclude from logging.
    ///
    /// These modules will be set to `warn` level on top of the built-in
    /// noisy modules.
    #[serde(default)]
    pub excluded_targets: Vec<String>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
            excluded_targets: Vec::new(),
        }
    }
}

fn default_log_level() -> String {
    "info".into()
}

fn default_log_format() -> String {
    "pretty".into()
}

// ============================================================================
// Fundamentals Configuration
// ============================================================================

/// Financial statement ingestion settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FundamentalsConfig {
    /// Total snapshot count above which the cache is cleared
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,

    /// Number of trailing periods requested before the anchor period
    #[serde(default = "default_window_size")]
    pub window_size: usize,

    /// Reject query dates that are not in the trading calendar
    #[serde(default)]
    pub check_trading_day: bool,

    /// Path to a JSON array of `YYYY-MM-DD` trading days
    #[serde(default)]
    pub trading_calendar: Option<PathBuf>,

    /// Upstream statement provider
    #[serde(default)]
    pub provider: EastmoneyConfig,
}

impl Default for FundamentalsConfig {
    fn default() -> Self {
        Self {
            cache_capacity: default_cache_capacity(),
            window_size: default_window_size(),
            check_trading_day: false,
            trading_calendar: None,
            provider: EastmoneyConfig::default(),
        }
    }
}

fn default_cache_capacity() -> usize {
    1000
}

fn default_window_size() -> usize {
    4
}

/// Eastmoney datacenter endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EastmoneyConfig {
    /// Datacenter query endpoint
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// `source` query parameter
    #[serde(default = "default_source")]
    pub source: String,

    /// `client` query parameter
    #[serde(default = "default_client")]
    pub client: String,
}

impl Default for EastmoneyConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            source: default_source(),
            client: default_client(),
        }
    }
}

fn default_base_url() -> String {
    "https://datacenter.eastmoney.com/securities/api/data/get".into()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7)".into()
}

fn default_source() -> String {
    "HSF10".into()
}

fn default_client() -> String {
    "PC".into()
}

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Observability configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,

    /// Financial statement ingestion configuration
    #[serde(default)]
    pub fundamentals: FundamentalsConfig,
}

impl Config {
    /// Load configuration from the default directory.
    ///
    /// Missing files fall back to defaults.
    pub fn load() -> Result<Self> {
        Self::load_from_dir(&config_dir())
    }

    /// Load configuration from a specific directory.
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let value = load_modular_config(Some(dir.to_path_buf()))?;
        if value.as_object().is_some_and(|obj| obj.is_empty()) {
            tracing::info!("Config files not found, using defaults");
        }

        serde_json::from_value(value)
            .with_context(|| format!("Failed to parse config from {}", dir.display()))
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))
    }

    /// Load configuration with environment variable overrides.
    pub fn load_with_env() -> Result<Self> {
        let mut config = Self::load()?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides to the configuration.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary key lookup.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(level) = lookup("ZERO_LOG_LEVEL") {
            self.observability.log_level = level;
        }
        if let Some(format) = lookup("ZERO_LOG_FORMAT") {
            self.observability.log_format = format;
        }

        if let Some(capacity) = lookup("ZERO_FUNDAMENTALS_CACHE_CAPACITY") {
            match capacity.parse() {
                Ok(c) => self.fundamentals.cache_capacity = c,
                Err(_) => tracing::warn!(value = %capacity, "Ignoring invalid ZERO_FUNDAMENTALS_CACHE_CAPACITY"),
            }
        }
        if let Some(window) = lookup("ZERO_FUNDAMENTALS_WINDOW_SIZE") {
            match window.parse() {
                Ok(w) => self.fundamentals.window_size = w,
                Err(_) => tracing::warn!(value = %window, "Ignoring invalid ZERO_FUNDAMENTALS_WINDOW_SIZE"),
            }
        }
        if let Some(url) = lookup("ZERO_FUNDAMENTALS_BASE_URL") {
            self.fundamentals.provider.base_url = url;
        }
        if let Some(flag) = lookup("ZERO_FUNDAMENTALS_CHECK_TRADING_DAY") {
            self.fundamentals.check_trading_day = matches!(
                flag.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            );
        }
    }
}
