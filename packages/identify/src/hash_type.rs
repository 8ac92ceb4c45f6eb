//! The closed set of hash type labels and their fixed strings

use crate::confidence::Confidence;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A hash type label inferred from surface pattern
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum HashType {
    /// 32 hex characters
    #[serde(rename = "MD5")]
    Md5,
    /// 40 hex characters
    #[serde(rename = "SHA-1")]
    Sha1,
    /// 64 hex characters
    #[serde(rename = "SHA-256")]
    Sha256,
    /// 128 hex characters
    #[serde(rename = "SHA-512")]
    Sha512,
    /// Modular crypt format with a `$2a$`, `$2b$` or `$2y$` prefix
    #[serde(rename = "bcrypt")]
    Bcrypt,
    /// 32 hex characters, ambiguous between NTLM and MD5
    #[serde(rename = "NTLM/MD5")]
    NtlmMd5,
    /// 56 hex characters
    #[serde(rename = "SHA-224")]
    Sha224,
    /// 96 hex characters
    #[serde(rename = "SHA-384")]
    Sha384,
    /// Base64 alphabet with optional padding
    #[serde(rename = "Base64")]
    Base64,
    /// Hex of a length no other rule claims
    #[serde(rename = "Unknown Hex")]
    UnknownHex,
    /// Anything else
    #[serde(rename = "Unknown")]
    Unknown,
}

impl HashType {
    /// Every label, in rule evaluation order
    pub const ALL: [HashType; 11] = [
        Self::Md5,
        Self::Sha1,
        Self::Sha256,
        Self::Sha512,
        Self::Bcrypt,
        Self::NtlmMd5,
        Self::Sha224,
        Self::Sha384,
        Self::Base64,
        Self::UnknownHex,
        Self::Unknown,
    ];

    /// Display label
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Md5 => "MD5",
            Self::Sha1 => "SHA-1",
            Self::Sha256 => "SHA-256",
            Self::Sha512 => "SHA-512",
            Self::Bcrypt => "bcrypt",
            Self::NtlmMd5 => "NTLM/MD5",
            Self::Sha224 => "SHA-224",
            Self::Sha384 => "SHA-384",
            Self::Base64 => "Base64",
            Self::UnknownHex => "Unknown Hex",
            Self::Unknown => "Unknown",
        }
    }

    /// Human-readable explanation of the type
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Md5 => "Message Digest Algorithm 5 - Legacy hash function (128-bit)",
            Self::Sha1 => "Secure Hash Algorithm 1 - Legacy but still common (160-bit)",
            Self::Sha256 => "Secure Hash Algorithm 256 - Modern cryptographic hash (256-bit)",
            Self::Sha512 => "Secure Hash Algorithm 512 - High security cryptographic hash (512-bit)",
            Self::Bcrypt => "bcrypt - Adaptive hash function designed for passwords",
            Self::NtlmMd5 => "Could be NTLM hash or MD5 - 32 hexadecimal characters",
            Self::Sha224 => "Secure Hash Algorithm 224 - Truncated SHA-256 (224-bit)",
            Self::Sha384 => "Secure Hash Algorithm 384 - Truncated SHA-512 (384-bit)",
            Self::Base64 => "Base64 encoded string - Could be an encoded hash",
            Self::UnknownHex => "Hexadecimal string of unknown hash type",
            Self::Unknown => "Unable to identify hash type from pattern",
        }
    }

    /// Human-readable description of the matched shape
    #[must_use]
    pub fn pattern(self) -> &'static str {
        match self {
            Self::Md5 | Self::NtlmMd5 => "32 hexadecimal characters",
            Self::Sha1 => "40 hexadecimal characters",
            Self::Sha256 => "64 hexadecimal characters",
            Self::Sha512 => "128 hexadecimal characters",
            Self::Bcrypt => "$2a$, $2b$, or $2y$ prefix with cost and salt",
            Self::Sha224 => "56 hexadecimal characters",
            Self::Sha384 => "96 hexadecimal characters",
            Self::Base64 => "Base64 characters (A-Z, a-z, 0-9, +, /)",
            Self::UnknownHex => "Hexadecimal characters only",
            Self::Unknown => "Mixed characters",
        }
    }

    /// Confidence reported whenever this type is matched
    #[must_use]
    pub fn confidence(self) -> Confidence {
        match self {
            Self::Md5
            | Self::Sha1
            | Self::Sha256
            | Self::Sha512
            | Self::Bcrypt
            | Self::Sha224
            | Self::Sha384 => Confidence::High,
            Self::NtlmMd5 | Self::Base64 => Confidence::Medium,
            Self::UnknownHex | Self::Unknown => Confidence::Low,
        }
    }
}

impl fmt::Display for HashType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a string names no known hash type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown hash type label: {0}")]
pub struct ParseHashTypeError(pub String);

impl FromStr for HashType {
    type Err = ParseHashTypeError;

    /// Parse a label, ignoring ASCII case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ty| ty.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseHashTypeError(s.to_string()))
    }
}
