//! Classification result value type

use crate::confidence::Confidence;
use crate::hash_type::HashType;
use serde::Serialize;
use std::fmt;

/// Outcome of classifying one input string
///
/// Serializes with the field names `type`, `confidence`, `description`,
/// `length` and `pattern`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ClassificationResult {
    #[serde(rename = "type")]
    hash_type: HashType,
    confidence: Confidence,
    description: &'static str,
    length: usize,
    pattern: &'static str,
}

impl ClassificationResult {
    /// Build the result for `hash_type` with the given character count
    #[must_use]
    pub fn new(hash_type: HashType, length: usize) -> Self {
        Self {
            hash_type,
            confidence: hash_type.confidence(),
            description: hash_type.description(),
            length,
            pattern: hash_type.pattern(),
        }
    }

    /// The matched hash type
    #[must_use]
    pub fn hash_type(&self) -> HashType {
        self.hash_type
    }

    /// How uniquely the pattern identifies the type
    #[must_use]
    pub fn confidence(&self) -> Confidence {
        self.confidence
    }

    /// Fixed explanation of the type
    #[must_use]
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Character count of the input the rule measured
    #[must_use]
    pub fn length(&self) -> usize {
        self.length
    }

    /// Fixed description of the matched shape
    #[must_use]
    pub fn pattern(&self) -> &'static str {
        self.pattern
    }
}

impl fmt::Display for ClassificationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} confidence)", self.hash_type, self.confidence)
    }
}
