//! The input string as seen by the rules

/// Whether `c` is stripped from either end of the input before hex checks
///
/// Unicode `White_Space` plus the byte-order mark U+FEFF, minus NEL U+0085.
/// Pasted text and files saved with a BOM then trim the same way browser
/// input does.
#[must_use]
pub fn is_trimmable(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

/// Raw input paired with its cleaned (trimmed, lowercased) form
///
/// Format rules such as bcrypt and Base64 test `raw` case-sensitively and
/// without trimming; hex rules test `cleaned`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Subject<'a> {
    raw: &'a str,
    cleaned: String,
}

impl<'a> Subject<'a> {
    /// Build a subject, or `None` when `raw` is empty or only whitespace
    #[must_use]
    pub fn new(raw: &'a str) -> Option<Self> {
        let trimmed = raw.trim_matches(is_trimmable);
        if trimmed.is_empty() {
            return None;
        }
        Some(Self {
            raw,
            cleaned: trimmed.to_lowercase(),
        })
    }

    /// The input exactly as entered
    #[must_use]
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// The trimmed, lowercased input
    #[must_use]
    pub fn cleaned(&self) -> &str {
        &self.cleaned
    }

    /// Character count of the raw input
    #[must_use]
    pub fn raw_len(&self) -> usize {
        self.raw.chars().count()
    }

    /// Character count of the cleaned input
    #[must_use]
    pub fn cleaned_len(&self) -> usize {
        self.cleaned.chars().count()
    }

    /// Whether the cleaned input consists only of hex digits
    #[must_use]
    pub fn is_hex(&self) -> bool {
        self.cleaned.chars().all(|c| c.is_ascii_hexdigit())
    }
}
