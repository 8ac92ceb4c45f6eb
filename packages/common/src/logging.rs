//! Structured logging infrastructure
//!
//! Provides env_logger-based logging. Raw user input is never written to the
//! log; helpers here reduce it to a length and a short SHA-256 fingerprint.

use log::{debug, error, info};
use sha2::{Digest, Sha256};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Logging bootstrap and helpers backed by `env_logger`
pub struct LoggingTransformer;

impl LoggingTransformer {
    /// Initialize logging (call once at application startup)
    ///
    /// Levels come from the `RUST_LOG` environment variable, e.g.
    /// `RUST_LOG=sight_identify=trace,hash_sight=debug`.
    pub fn init() {
        INIT_LOGGER.call_once(|| {
            env_logger::Builder::from_default_env()
                .format_timestamp_micros()
                .init();

            info!("Structured logging initialized");
        });
    }

    /// Initialize logging for test environments
    ///
    /// Safe to call from every test; only the first call installs a logger.
    pub fn init_test() {
        let _ = env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init();
    }

    /// Log an input change without exposing the input itself
    pub fn log_input_change(source: &str, input: &str) {
        debug!(
            "Input changed: {source} (chars: {}, fingerprint: {})",
            input.chars().count(),
            Self::fingerprint(input)
        );
    }

    /// Log a failed CLI operation
    pub fn log_failure<E: std::error::Error>(operation: &str, error: &E) {
        error!("{}", Self::describe_failure(operation, error));
    }

    /// Log line for a failed operation, naming the concrete error type
    #[must_use]
    pub fn describe_failure<E: std::error::Error>(operation: &str, error: &E) -> String {
        format!(
            "Operation failed: {operation} (error_type: {}): {error}",
            std::any::type_name::<E>()
        )
    }

    /// Short SHA-256 fingerprint of a string for log correlation
    ///
    /// Returns `#` followed by the first 12 hex characters of the digest.
    #[must_use]
    pub fn fingerprint(input: &str) -> String {
        let hash = Sha256::digest(input.as_bytes());
        let hex_hash = format!("{hash:x}");
        format!("#{}", &hex_hash[..12])
    }
}
