//! Holds the current input and its latest classification

use sight_common::LoggingTransformer;
use sight_identify::{identify, ClassificationResult};

/// What the presenter should show for its current input
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View<'a> {
    /// No input yet
    Placeholder,
    /// Input is present but only whitespace; nothing is shown
    Blank,
    /// A classified input
    Result {
        /// The latest classification
        result: &'a ClassificationResult,
        /// The raw input, echoed read-only
        input: &'a str,
    },
}

/// Re-classifies on every input change and keeps the latest result
#[derive(Debug, Default)]
pub struct Presenter {
    input: String,
    result: Option<ClassificationResult>,
}

impl Presenter {
    /// Create a presenter with empty input
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the input and classify it
    pub fn set_input(&mut self, input: impl Into<String>) -> Option<&ClassificationResult> {
        self.input = input.into();
        LoggingTransformer::log_input_change("presenter", &self.input);
        self.result = identify(&self.input);
        self.result.as_ref()
    }

    /// The current raw input
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The latest classification, if any
    #[must_use]
    pub fn result(&self) -> Option<&ClassificationResult> {
        self.result.as_ref()
    }

    /// What to display for the current state
    #[must_use]
    pub fn view(&self) -> View<'_> {
        match (&self.result, self.input.is_empty()) {
            (_, true) => View::Placeholder,
            (None, false) => View::Blank,
            (Some(result), false) => View::Result {
                result,
                input: &self.input,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sight_identify::HashType;

    #[test]
    fn starts_with_placeholder() {
        let presenter = Presenter::new();
        assert_eq!(presenter.view(), View::Placeholder);
        assert!(presenter.result().is_none());
    }

    #[test]
    fn tracks_latest_input() {
        let mut presenter = Presenter::new();

        let first = presenter
            .set_input("da39a3ee5e6b4b0d3255bfef95601890afd80709")
            .map(ClassificationResult::hash_type);
        assert_eq!(first, Some(HashType::Sha1));

        presenter.set_input("hello there");
        match presenter.view() {
            View::Result { result, input } => {
                assert_eq!(result.hash_type(), HashType::Unknown);
                assert_eq!(input, "hello there");
            }
            other => panic!("unexpected view {other:?}"),
        }

        presenter.set_input("");
        assert_eq!(presenter.view(), View::Placeholder);
    }

    #[test]
    fn whitespace_shows_nothing() {
        let mut presenter = Presenter::new();
        assert!(presenter.set_input("   ").is_none());
        assert_eq!(presenter.view(), View::Blank);
    }
}
