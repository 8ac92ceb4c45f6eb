//! The ordered rule table
//!
//! Rules are evaluated top to bottom and the first match wins. Each rule is
//! described by the [`Shape`] of input it accepts, which drives both matching
//! and the shadowing analysis in [`shadowed_rules`].

use crate::hash_type::HashType;
use crate::result::ClassificationResult;
use crate::subject::Subject;
use once_cell::sync::Lazy;
use regex::Regex;

#[allow(clippy::expect_used)]
static BCRYPT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\$2[aby]?\$[0-9]{2}\$[./A-Za-z0-9]{53}$").expect("valid bcrypt regex")
});

#[allow(clippy::expect_used)]
static BASE64_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9+/]+=*$").expect("valid base64 regex"));

/// The set of inputs a rule accepts
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    /// Cleaned input is exactly this many hex digits
    HexOfLength(usize),
    /// Raw input is a bcrypt modular crypt string
    Bcrypt,
    /// Raw input uses the Base64 alphabet and its length is a multiple of 4
    Base64,
    /// Cleaned input is hex digits of any length
    AnyHex,
    /// Every non-blank input
    Anything,
}

impl Shape {
    /// Whether `subject` has this shape
    #[must_use]
    pub fn matches(self, subject: &Subject<'_>) -> bool {
        match self {
            Self::HexOfLength(len) => subject.cleaned_len() == len && subject.is_hex(),
            Self::Bcrypt => BCRYPT_RE.is_match(subject.raw()),
            Self::Base64 => BASE64_RE.is_match(subject.raw()) && subject.raw_len() % 4 == 0,
            Self::AnyHex => subject.is_hex(),
            Self::Anything => true,
        }
    }

    /// Whether every input of shape `other` also has this shape
    #[must_use]
    pub fn covers(self, other: Shape) -> bool {
        match (self, other) {
            (Self::Anything, _) => true,
            (Self::AnyHex, Self::HexOfLength(_)) => true,
            (a, b) => a == b,
        }
    }

    /// Whether the result length is measured on the cleaned input
    #[must_use]
    pub fn measures_cleaned(self) -> bool {
        matches!(self, Self::HexOfLength(_) | Self::AnyHex)
    }
}

/// One entry of the rule table
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rule {
    order: usize,
    hash_type: HashType,
    shape: Shape,
}

impl Rule {
    const fn new(order: usize, hash_type: HashType, shape: Shape) -> Self {
        Self {
            order,
            hash_type,
            shape,
        }
    }

    /// 1-based position in the evaluation order
    #[must_use]
    pub fn order(&self) -> usize {
        self.order
    }

    /// Type reported when this rule matches
    #[must_use]
    pub fn hash_type(&self) -> HashType {
        self.hash_type
    }

    /// Confidence reported when this rule matches
    #[must_use]
    pub fn confidence(&self) -> crate::Confidence {
        self.hash_type.confidence()
    }

    /// Inputs this rule accepts
    #[must_use]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Whether this rule accepts `subject`
    #[must_use]
    pub fn matches(&self, subject: &Subject<'_>) -> bool {
        self.shape.matches(subject)
    }

    /// Build this rule's result if it accepts `subject`
    #[must_use]
    pub fn apply(&self, subject: &Subject<'_>) -> Option<ClassificationResult> {
        if !self.matches(subject) {
            return None;
        }
        let length = if self.shape.measures_cleaned() {
            subject.cleaned_len()
        } else {
            subject.raw_len()
        };
        Some(ClassificationResult::new(self.hash_type, length))
    }
}

// NTLM/MD5 sits behind MD5 with an identical shape and never fires. It stays
// in place so results match the established output; see `shadowed_rules`.
static RULES: [Rule; 11] = [
    Rule::new(1, HashType::Md5, Shape::HexOfLength(32)),
    Rule::new(2, HashType::Sha1, Shape::HexOfLength(40)),
    Rule::new(3, HashType::Sha256, Shape::HexOfLength(64)),
    Rule::new(4, HashType::Sha512, Shape::HexOfLength(128)),
    Rule::new(5, HashType::Bcrypt, Shape::Bcrypt),
    Rule::new(6, HashType::NtlmMd5, Shape::HexOfLength(32)),
    Rule::new(7, HashType::Sha224, Shape::HexOfLength(56)),
    Rule::new(8, HashType::Sha384, Shape::HexOfLength(96)),
    Rule::new(9, HashType::Base64, Shape::Base64),
    Rule::new(10, HashType::UnknownHex, Shape::AnyHex),
    Rule::new(11, HashType::Unknown, Shape::Anything),
];

/// The rule table in evaluation order
#[must_use]
pub fn rules() -> &'static [Rule] {
    &RULES
}

/// Rules that can never fire, paired with the earlier rule that hides them
///
/// Returns `(shadowed, shadowing)` type pairs in table order.
#[must_use]
pub fn shadowed_rules() -> Vec<(HashType, HashType)> {
    RULES
        .iter()
        .enumerate()
        .filter_map(|(i, rule)| {
            RULES[..i]
                .iter()
                .find(|earlier| earlier.shape.covers(rule.shape))
                .map(|earlier| (rule.hash_type, earlier.hash_type))
        })
        .collect()
}
