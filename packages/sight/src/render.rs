//! Text and JSON rendering of presenter views

use crate::presenter::View;
use sight_common::Result;
use sight_identify::{rules, shadowed_rules, BadgeVariant, ClassificationResult, Confidence};

/// Shown before any input is entered
pub const PLACEHOLDER: &str = "Enter a hash above to see the identification results";

const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Renders views as terminal text or JSON
#[derive(Clone, Copy, Debug)]
pub struct Renderer {
    color: bool,
    show_input: bool,
}

impl Renderer {
    /// Create a renderer
    #[must_use]
    pub fn new(color: bool, show_input: bool) -> Self {
        Self { color, show_input }
    }

    /// Render a view as a text card; a blank view renders as an empty string
    #[must_use]
    pub fn render(&self, view: &View<'_>) -> String {
        match view {
            View::Placeholder => format!("{PLACEHOLDER}\n"),
            View::Blank => String::new(),
            View::Result { result, input } => self.card(result, input),
        }
    }

    /// Render a view as one line of JSON; anything but a result is `null`
    pub fn render_json(&self, view: &View<'_>) -> Result<String> {
        let result = match view {
            View::Result { result, .. } => Some(*result),
            View::Placeholder | View::Blank => None,
        };
        let mut line = serde_json::to_string(&result)?;
        line.push('\n');
        Ok(line)
    }

    /// Confidence badge text, styled by its variant
    #[must_use]
    pub fn badge(&self, confidence: Confidence) -> String {
        let text = format!("{confidence} confidence");
        if !self.color {
            return text;
        }
        match confidence.badge() {
            BadgeVariant::Default => format!("{BOLD}{text}{RESET}"),
            BadgeVariant::Secondary => text,
            BadgeVariant::Outline => format!("[{text}]"),
        }
    }

    /// The supported types listing
    #[must_use]
    pub fn render_types(&self) -> String {
        let shadowed = shadowed_rules();
        let mut out = String::new();
        for rule in rules() {
            let ty = rule.hash_type();
            out.push_str(&format!(
                "{:>2}. {:<12} {}",
                rule.order(),
                ty.label(),
                self.badge(ty.confidence())
            ));
            if let Some((_, by)) = shadowed.iter().find(|(hidden, _)| *hidden == ty) {
                out.push_str(&format!(" (never reported: shadowed by {by})"));
            }
            out.push_str(&format!("\n    {}\n    {}\n", ty.pattern(), ty.description()));
        }
        out
    }

    fn card(&self, result: &ClassificationResult, input: &str) -> String {
        let mut out = format!(
            "{}  {}\n{}\nLength: {} characters\nPattern: {}\n",
            result.hash_type(),
            self.badge(result.confidence()),
            result.description(),
            result.length(),
            result.pattern()
        );
        if self.show_input {
            out.push_str(&format!("\nInput Hash:\n{input}\n"));
        }
        out
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(true, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presenter::Presenter;

    #[test]
    fn plain_card() {
        let mut presenter = Presenter::new();
        presenter.set_input("d41d8cd98f00b204e9800998ecf8427e");
        let text = Renderer::new(false, true).render(&presenter.view());
        assert_eq!(
            text,
            "MD5  high confidence\n\
             Message Digest Algorithm 5 - Legacy hash function (128-bit)\n\
             Length: 32 characters\n\
             Pattern: 32 hexadecimal characters\n\
             \n\
             Input Hash:\n\
             d41d8cd98f00b204e9800998ecf8427e\n"
        );
    }

    #[test]
    fn card_without_input_echo() {
        let mut presenter = Presenter::new();
        presenter.set_input("zzz");
        let text = Renderer::new(false, false).render(&presenter.view());
        assert!(text.starts_with("Unknown  low confidence\n"));
        assert!(!text.contains("Input Hash:"));
    }

    #[test]
    fn badges() {
        let renderer = Renderer::new(true, true);
        assert_eq!(renderer.badge(Confidence::High), "\x1b[1mhigh confidence\x1b[0m");
        assert_eq!(renderer.badge(Confidence::Medium), "medium confidence");
        assert_eq!(renderer.badge(Confidence::Low), "[low confidence]");
        assert_eq!(Renderer::new(false, true).badge(Confidence::Low), "low confidence");
    }

    #[test]
    fn placeholder_and_blank() {
        let renderer = Renderer::default();
        assert_eq!(renderer.render(&View::Placeholder), format!("{PLACEHOLDER}\n"));
        assert_eq!(renderer.render(&View::Blank), "");
        assert_eq!(
            renderer.render_json(&View::Blank).expect("null serializes"),
            "null\n"
        );
    }

    #[test]
    fn types_listing_marks_ntlm() {
        let listing = Renderer::new(false, true).render_types();
        assert!(listing.contains("NTLM/MD5"));
        assert!(listing.contains("(never reported: shadowed by MD5)"));
        assert_eq!(listing.matches("shadowed by").count(), 1);
    }

    #[test]
    fn types_listing_entry_layout() {
        let listing = Renderer::new(false, true).render_types();
        assert!(listing.starts_with(
            " 1. MD5          high confidence\n    \
             32 hexadecimal characters\n    \
             Message Digest Algorithm 5 - Legacy hash function (128-bit)\n \
             2. SHA-1        high confidence\n"
        ));
        assert!(listing.contains(
            " 6. NTLM/MD5     medium confidence (never reported: shadowed by MD5)\n"
        ));
        assert_eq!(listing.lines().count(), 33);
    }
}
