//! # Structured Logging Module
//!
//! Environment-aware structured logging for hosts embedding the batching engine
//! (the route preview binary, driver-app backends, test harnesses).

use crate::config::{BatchingConfig, LogFormat};
use crate::error::{BatchingError, Result};
use chrono::Utc;
use std::sync::OnceLock;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize structured logging from the environment alone.
pub fn init_structured_logging() -> Result<()> {
    let environment = get_environment();
    let config = BatchingConfig {
        log_level: get_log_level(&environment),
        environment,
        ..Default::default()
    };
    init_with_config(&config)
}

/// Initialize structured logging using a loaded configuration.
///
/// Only the first call installs a subscriber; later calls are no-ops. A global
/// subscriber installed by someone else is left in place.
pub fn init_with_config(config: &BatchingConfig) -> Result<()> {
    let filter = EnvFilter::try_new(&config.log_level).map_err(|e| {
        BatchingError::Logging(format!("Invalid log filter '{}': {e}", config.log_level))
    })?;

    LOGGER_INITIALIZED.get_or_init(|| {
        let layer = match config.log_format {
            LogFormat::Pretty => fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_ansi(true)
                .with_filter(filter)
                .boxed(),
            LogFormat::Json => fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_ansi(false)
                .json()
                .with_filter(filter)
                .boxed(),
        };

        if tracing_subscriber::registry().with(layer).try_init().is_err() {
            tracing::debug!("Global tracing subscriber already initialized - keeping existing subscriber");
        }

        tracing::info!(
            environment = %config.environment,
            log_level = %config.log_level,
            log_format = ?config.log_format,
            "STRUCTURED LOGGING: initialized"
        );
    });

    Ok(())
}

/// Get current environment from environment variables
fn get_environment() -> String {
    std::env::var("PICKUP_BATCHING_ENV")
        .or_else(|_| std::env::var("APP_ENV"))
        .unwrap_or_else(|_| "development".to_string())
}

/// Get log level based on environment
fn get_log_level(environment: &str) -> String {
    match environment {
        "production" => "info".to_string(),
        _ => "debug".to_string(),
    }
}

/// Log a structured record of one batching pass
pub fn log_batch_operation(
    operation: &str,
    driver_id: Option<&str>,
    total_pickups: usize,
    total_batches: usize,
    details: Option<&str>,
) {
    tracing::info!(
        operation = %operation,
        driver_id = driver_id,
        total_pickups = total_pickups,
        total_batches = total_batches,
        details = details,
        timestamp = %Utc::now().to_rfc3339(),
        "BATCH_OPERATION"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_detection() {
        std::env::set_var("PICKUP_BATCHING_ENV", "test_override");
        let env = get_environment();
        assert_eq!(env, "test_override");
        std::env::remove_var("PICKUP_BATCHING_ENV");
    }

    #[test]
    fn test_log_level_mapping() {
        assert_eq!(get_log_level("test"), "debug");
        assert_eq!(get_log_level("development"), "debug");
        assert_eq!(get_log_level("production"), "info");
        assert_eq!(get_log_level("unknown"), "debug");
    }

    #[test]
    fn test_repeated_init_is_harmless() {
        assert!(init_with_config(&BatchingConfig::default()).is_ok());
        assert!(init_with_config(&BatchingConfig {
            log_format: LogFormat::Json,
            ..Default::default()
        })
        .is_ok());
        log_batch_operation("batch_pickups", Some("driver-1"), 3, 2, None);
    }

    #[test]
    fn test_invalid_filter_is_reported() {
        let config = BatchingConfig {
            log_level: "pickup_batching=loudest".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            init_with_config(&config),
            Err(BatchingError::Logging(_))
        ));
    }
}
