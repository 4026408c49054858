//! Configuration validation.
//!
//! Provides validation logic for configuration fields to ensure
//! all required values are present and within valid ranges.

use std::path::Path;
use thiserror::Error;

use crate::config::{Config, EastmoneyConfig, FundamentalsConfig, ObservabilityConfig};

/// Largest supported trailing window.
pub const MAX_WINDOW_SIZE: usize = 20;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];
const LOG_FORMATS: &[&str] = &["json", "pretty"];

/// Configuration validation error.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Multiple validation errors: {0:?}")]
    Multiple(Vec<ValidationError>),
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Trait for validatable configuration sections.
pub trait Validate {
    /// Validate this configuration section.
    fn validate(&self) -> ValidationResult<()>;
}

impl Config {
    /// Validate the entire configuration.
    pub fn validate(&self) -> ValidationResult<()> {
        let mut errors = Vec::new();

        if let Err(e) = self.observability.validate() {
            errors.push(e);
        }

        if let Err(e) = self.fundamentals.validate() {
            errors.push(e);
        }

        collect(errors)
    }

    /// Load, apply environment overrides, and validate configuration.
    pub fn load_and_validate() -> anyhow::Result<Self> {
        Self::load_with_env()?.validated()
    }

    /// Same as [`Config::load_and_validate`], reading a single file.
    pub fn load_and_validate_from(path: &Path) -> anyhow::Result<Self> {
        let mut config = Self::load_from(path)?;
        config.apply_env_overrides();
        config.validated()
    }

    fn validated(self) -> anyhow::Result<Self> {
        self.validate().map_err(|e| anyhow::anyhow!("{}", e))?;
        Ok(self)
    }
}

fn collect(mut errors: Vec<ValidationError>) -> ValidationResult<()> {
    if errors.is_empty() {
        Ok(())
    } else if errors.len() == 1 {
        Err(errors.remove(0))
    } else {
        Err(ValidationError::Multiple(errors))
    }
}

impl Validate for ObservabilityConfig {
    fn validate(&self) -> ValidationResult<()> {
        let level = self.log_level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ValidationError::InvalidValue {
                field: "observability.log_level".into(),
                reason: format!("must be one of {}", LOG_LEVELS.join(", ")),
            });
        }

        if !LOG_FORMATS.contains(&self.log_format.as_str()) {
            return Err(ValidationError::InvalidValue {
                field: "observability.log_format".into(),
                reason: format!("must be one of {}", LOG_FORMATS.join(", ")),
            });
        }

        Ok(())
    }
}

impl Validate for FundamentalsConfig {
    fn validate(&self) -> ValidationResult<()> {
        let mut errors = Vec::new();

        if self.cache_capacity == 0 {
            errors.push(ValidationError::InvalidValue {
                field: "fundamentals.cache_capacity".into(),
                reason: "must be greater than 0".into(),
            });
        }

        if self.window_size > MAX_WINDOW_SIZE {
            errors.push(ValidationError::InvalidValue {
                field: "fundamentals.window_size".into(),
                reason: format!("must be at most {MAX_WINDOW_SIZE}"),
            });
        }

        if self.check_trading_day && self.trading_calendar.is_none() {
            errors.push(ValidationError::MissingField {
                field: "fundamentals.trading_calendar".into(),
            });
        }

        if let Err(e) = self.provider.validate() {
            errors.push(e);
        }

        collect(errors)
    }
}

impl Validate for EastmoneyConfig {
    fn validate(&self) -> ValidationResult<()> {
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidValue {
                field: "fundamentals.provider.timeout_secs".into(),
                reason: "must be greater than 0".into(),
            });
        }

        match url::Url::parse(&self.base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(()),
            Ok(url) => Err(ValidationError::InvalidValue {
                field: "fundamentals.provider.base_url".into(),
                reason: format!("unsupported scheme '{}'", url.scheme()),
            }),
            Err(e) => Err(ValidationError::InvalidValue {
                field: "fundamentals.provider.base_url".into(),
                reason: e.to_string(),
            }),
        }
    }
}
