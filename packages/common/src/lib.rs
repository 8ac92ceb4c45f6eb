//! Common infrastructure shared by the hash_sight crates
//!
//! This crate provides:
//! - The `SightError` type used on every fallible path outside classification
//! - `env_logger` bootstrap and privacy-preserving log helpers
//! - The on-disk configuration for the `hash-sight` CLI

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod logging;

pub use config::SightConfig;
pub use error::{Result, SightError};
pub use logging::LoggingTransformer;
