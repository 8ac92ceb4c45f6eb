//! Confidence levels and their badge styling

use serde::Serialize;
use std::fmt;

/// How uniquely a matched pattern identifies its hash type
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// Shared by many formats
    Low,
    /// Ambiguous between a few formats
    Medium,
    /// Unique shape
    High,
}

/// Visual weight of a confidence badge
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BadgeVariant {
    /// Filled, most prominent
    Default,
    /// Muted fill
    Secondary,
    /// Border only
    Outline,
}

impl Confidence {
    /// Lowercase name as it appears in output
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    /// Badge variant used when rendering this confidence
    #[must_use]
    pub fn badge(self) -> BadgeVariant {
        match self {
            Self::High => BadgeVariant::Default,
            Self::Medium => BadgeVariant::Secondary,
            Self::Low => BadgeVariant::Outline,
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badges_follow_confidence() {
        assert_eq!(Confidence::High.badge(), BadgeVariant::Default);
        assert_eq!(Confidence::Medium.badge(), BadgeVariant::Secondary);
        assert_eq!(Confidence::Low.badge(), BadgeVariant::Outline);
    }

    #[test]
    fn ordering() {
        assert!(Confidence::High > Confidence::Medium);
        assert!(Confidence::Medium > Confidence::Low);
    }
}
