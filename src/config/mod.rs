//! Configuration management for version-notifier
//!
//! This module provides a layered configuration system that loads settings from:
//! 1. Default values (embedded in structs)
//! 2. TOML configuration file
//! 3. Environment variables (highest priority)
//!
//! The library API in [`crate::notifier`] never reads configuration itself;
//! this layer exists for the binary and other callers that want it.
//!
//! # Usage
//!
//! ```no_run
//! use version_notifier::config::Config;
//!
//! let config = Config::load().expect("Failed to load configuration");
//! println!("Polling every {}", config.poll.interval);
//! ```
//!
//! # Environment Variables
//!
//! Configuration can be overridden using environment variables with the pattern:
//! `VERSION_NOTIFIER__<section>__<key>`
//!
//! Examples:
//! - `VERSION_NOTIFIER__ENDPOINT__HOST=http://127.0.0.1:5000`
//! - `VERSION_NOTIFIER__QUERY__APPLICATION=my-app`
//! - `VERSION_NOTIFIER__POLL__INTERVAL=10m`
//!
//! # Configuration File
//!
//! By default, the configuration is loaded from `config/version-notifier.toml`.
//! This can be overridden using the `VERSION_NOTIFIER_CONFIG` environment variable.

mod models;
mod sources;
mod validation;

pub use crate::humanize::HumanDuration;
pub use models::{Config, EndpointSettings, PollSettings, QuerySettings, TelemetryConfig};
pub use sources::{CONFIG_ENV_VAR, DEFAULT_CONFIG_PATH};
pub use validation::ValidationError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] ValidationError),
}

impl Config {
    /// Load configuration from all sources (file + environment)
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file is malformed or
    /// validation fails.
    pub fn load() -> Result<Self, ConfigError> {
        let config = sources::load()?;
        validation::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: std::path::PathBuf) -> Result<Self, ConfigError> {
        let config = sources::load_from_sources(path)?;
        validation::validate(&config)?;
        Ok(config)
    }

    /// Load without validating, so command-line overrides can fill gaps first
    pub fn load_unvalidated(path: Option<std::path::PathBuf>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => sources::load_from_sources(path)?,
            None => sources::load()?,
        };
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validation::validate(self)?;
        Ok(())
    }
}
