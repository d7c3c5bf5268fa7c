//! # Configuration
//!
//! Layered configuration for the ambient parts of the crate. Batching itself has
//! no knobs; configuration only decides how route times are displayed and how
//! logging is set up.
//!
//! Layers, lowest precedence first:
//!
//! 1. built-in defaults
//! 2. an optional `config/pickup_batching.{toml,yaml,json}` file (or an explicit path)
//! 3. `PICKUP_BATCHING_*` environment variables
//!
//! ```rust,no_run
//! use pickup_batching::config::BatchingConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = BatchingConfig::load()?;
//! println!("logging at {}", config.log_level);
//! # Ok(())
//! # }
//! ```

use crate::constants::{DEFAULT_CONFIG_FILE, ENV_PREFIX};
use crate::error::{BatchingError, Result};
use chrono::FixedOffset;
use config::{Config, ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Largest UTC offset in use anywhere (UTC+14, Line Islands).
const MAX_OFFSET_MINUTES: i32 = 14 * 60;

/// Output style of the console log layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchingConfig {
    pub environment: String,
    /// `EnvFilter` directive, e.g. `info` or `pickup_batching=debug`.
    pub log_level: String,
    pub log_format: LogFormat,
    /// Fixed offset used when rendering pickup times. `None` uses the host's local zone.
    pub display_utc_offset_minutes: Option<i32>,
}

impl Default for BatchingConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            log_level: "debug".to_string(),
            log_format: LogFormat::Pretty,
            display_utc_offset_minutes: None,
        }
    }
}

impl BatchingConfig {
    /// Load defaults, the default config file if present, then environment overrides.
    pub fn load() -> Result<Self> {
        let builder = Self::defaults_builder()?
            .add_source(File::with_name(DEFAULT_CONFIG_FILE).required(false))
            .add_source(Self::environment_source());
        Self::finish(builder)
    }

    /// Load defaults, a required config file at `path`, then environment overrides.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let path_str = path.to_str().ok_or_else(|| {
            BatchingError::Configuration(format!(
                "Config path is not valid UTF-8: {}",
                path.display()
            ))
        })?;

        let builder = Self::defaults_builder()?
            .add_source(File::with_name(path_str).required(true))
            .add_source(Self::environment_source());
        Self::finish(builder)
    }

    /// Defaults plus environment overrides only; no file lookup.
    pub fn from_env() -> Result<Self> {
        let builder = Self::defaults_builder()?.add_source(Self::environment_source());
        Self::finish(builder)
    }

    pub fn validate(&self) -> Result<()> {
        if self.environment.trim().is_empty() {
            return Err(BatchingError::Configuration(
                "environment cannot be empty".to_string(),
            ));
        }

        EnvFilter::try_new(&self.log_level).map_err(|e| {
            BatchingError::Configuration(format!("Invalid log_level '{}': {e}", self.log_level))
        })?;

        if let Some(minutes) = self.display_utc_offset_minutes {
            if !(-MAX_OFFSET_MINUTES..=MAX_OFFSET_MINUTES).contains(&minutes) {
                return Err(BatchingError::Configuration(format!(
                    "Invalid display_utc_offset_minutes: {minutes} (allowed: ±{MAX_OFFSET_MINUTES})"
                )));
            }
        }

        Ok(())
    }

    /// Display zone for pickup times, if a fixed offset is configured.
    pub fn display_offset(&self) -> Option<FixedOffset> {
        self.display_utc_offset_minutes
            .and_then(|minutes| FixedOffset::east_opt(minutes * 60))
    }

    fn defaults_builder() -> Result<ConfigBuilder<config::builder::DefaultState>> {
        let defaults = Self::default();
        let builder = Config::builder()
            .set_default("environment", defaults.environment)?
            .set_default("log_level", defaults.log_level)?
            .set_default("log_format", "pretty")?;
        Ok(builder)
    }

    fn environment_source() -> Environment {
        Environment::with_prefix(ENV_PREFIX).try_parsing(true)
    }

    fn finish(builder: ConfigBuilder<config::builder::DefaultState>) -> Result<Self> {
        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}
