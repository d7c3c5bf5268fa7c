//! # Error Types
//!
//! The batching engine itself is infallible: malformed pickups degrade into the
//! `unknown` batch or the epoch-zero route slot. Errors only arise at the edges
//! of the crate, when decoding record-store documents, loading configuration,
//! or installing the logging subscriber.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BatchingError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid pickup record at index {index}: {message}")]
    InvalidRecord { index: usize, message: String },

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Logging error: {0}")]
    Logging(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for BatchingError {
    fn from(err: config::ConfigError) -> Self {
        BatchingError::Configuration(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BatchingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_record_display_names_index() {
        let err = BatchingError::InvalidRecord {
            index: 3,
            message: "missing string `id`".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid pickup record at index 3: missing string `id`"
        );
    }

    #[test]
    fn test_config_error_conversion() {
        let err: BatchingError = config::ConfigError::Message("bad offset".to_string()).into();
        assert!(matches!(err, BatchingError::Configuration(ref msg) if msg.contains("bad offset")));
    }
}
