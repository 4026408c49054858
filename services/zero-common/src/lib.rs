//! Zero Common - Shared configuration, errors, and logging for the Zero fundamentals service.
//!
//! This crate provides:
//! - Configuration types and modular loading
//! - Configuration validation
//! - Error types and handling utilities
//! - Logging setup and trace ID helpers

#![warn(clippy::all)]
#![allow(clippy::pedantic)]

pub mod config;
pub mod config_loader;
pub mod error;
pub mod logging;
pub mod validation;

pub use config::{Config, EastmoneyConfig, FundamentalsConfig, ObservabilityConfig};
pub use error::{Error, Result, ResultExt};
pub use validation::{Validate, ValidationError, ValidationResult};
