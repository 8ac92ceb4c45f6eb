//! First-match-wins classification over the rule table

use crate::result::ClassificationResult;
use crate::rules::rules;
use crate::subject::Subject;
use tracing::trace;

/// Classify `raw` as a likely hash type
///
/// Returns `None` only when `raw` is empty or whitespace. Every other input
/// produces a result, falling back to `Unknown`.
#[must_use]
pub fn identify(raw: &str) -> Option<ClassificationResult> {
    let subject = Subject::new(raw)?;
    rules().iter().find_map(|rule| {
        let result = rule.apply(&subject)?;
        trace!(
            rule = rule.order(),
            hash_type = %result.hash_type(),
            length = result.length(),
            "Matched hash rule"
        );
        Some(result)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Confidence, HashType};

    const MD5_HELLO: &str = "5d41402abc4b2a76b9719d911017c592";

    #[test]
    fn md5_wins_over_ntlm() {
        let result = identify(MD5_HELLO).expect("hex input classifies");
        assert_eq!(result.hash_type(), HashType::Md5);
        assert_eq!(result.confidence(), Confidence::High);
        assert_eq!(result.length(), 32);
    }

    #[test]
    fn blank_input() {
        assert_eq!(identify(""), None);
        assert_eq!(identify("   \t\n"), None);
    }

    #[test]
    fn one_digit_too_many() {
        let input = format!("{MD5_HELLO}0");
        let result = identify(&input).expect("hex input classifies");
        assert_eq!(result.hash_type(), HashType::UnknownHex);
        assert_eq!(result.length(), 33);
    }

    #[test]
    fn hex_rules_measure_trimmed_input() {
        let input = format!("  {}\n", MD5_HELLO.to_uppercase());
        let result = identify(&input).expect("hex input classifies");
        assert_eq!(result.hash_type(), HashType::Md5);
        assert_eq!(result.length(), 32);

        let result = identify(" abc ").expect("hex input classifies");
        assert_eq!(result.hash_type(), HashType::UnknownHex);
        assert_eq!(result.length(), 3);
    }

    #[test]
    fn fallback_measures_raw_input() {
        let result = identify("  not a hash!  ").expect("text classifies");
        assert_eq!(result.hash_type(), HashType::Unknown);
        assert_eq!(result.confidence(), Confidence::Low);
        assert_eq!(result.length(), 15);
    }
}
