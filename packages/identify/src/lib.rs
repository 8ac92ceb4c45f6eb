//! Identify likely cryptographic hash types from the shape of a string
//!
//! Classification is pure pattern inspection: string length, character set
//! and a couple of format signatures. Nothing is hashed or verified.
//!
//! ```
//! use sight_identify::{identify, Confidence, HashType};
//!
//! let result = identify("5d41402abc4b2a76b9719d911017c592").unwrap();
//! assert_eq!(result.hash_type(), HashType::Md5);
//! assert_eq!(result.confidence(), Confidence::High);
//!
//! assert!(identify("   ").is_none());
//! ```

#![forbid(unsafe_code)]

pub mod classifier;
pub mod confidence;
pub mod hash_type;
pub mod result;
pub mod rules;
pub mod subject;

pub use classifier::identify;
pub use confidence::{BadgeVariant, Confidence};
pub use hash_type::{HashType, ParseHashTypeError};
pub use result::ClassificationResult;
pub use rules::{rules, shadowed_rules, Rule, Shape};
pub use subject::{is_trimmable, Subject};
