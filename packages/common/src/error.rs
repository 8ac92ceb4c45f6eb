//! Error handling for everything around the classifier
//!
//! Classification itself is total; these errors only arise while reading
//! input, loading configuration or writing output.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the hash_sight presenter and CLI
#[derive(Debug, Error)]
pub enum SightError {
    /// I/O failure while reading input or writing output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file exists but could not be used
    #[error("Configuration error in {}: {reason}", path.display())]
    Config {
        /// Path of the offending configuration file
        path: PathBuf,
        /// What went wrong
        reason: String,
    },

    /// JSON encoding or decoding failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SightError {
    /// Create a configuration error
    #[must_use]
    pub fn config(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Short machine-friendly name of the error kind, used in log lines
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::Config { .. } => "config",
            Self::Serialization(_) => "serialization",
        }
    }
}

/// Result type for hash_sight operations
pub type Result<T> = std::result::Result<T, SightError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_names_the_file() {
        let err = SightError::config("/tmp/hash-sight.json", "expected a JSON object");
        assert_eq!(
            err.to_string(),
            "Configuration error in /tmp/hash-sight.json: expected a JSON object"
        );
        assert_eq!(err.kind(), "config");
    }

    #[test]
    fn io_errors_convert() {
        fn fails() -> Result<()> {
            Err::<(), _>(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))?;
            Ok(())
        }
        let err = fails().expect_err("io error should propagate");
        assert_eq!(err.kind(), "io");
        assert!(err.to_string().starts_with("I/O error"));
    }
}
