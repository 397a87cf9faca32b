//! # Payload Encoding
//!
//! Base64 transport encoding of the serialized payload and the two-phase
//! decode strategy used when handing authentic bytes back to a serializer.
//!
//! ## Rules
//!
//! - Standard alphabet, padded on encode
//! - Canonical-only on decode: bad padding or non-zero trailing bits are rejected

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use super::errors::{ConfigError, Rejection};

/// Encode serialized bytes for the data half of a signed message.
pub fn encode_payload(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Strictly decode the data half of a signed message.
pub fn decode_payload(data: &str) -> Result<Vec<u8>, Rejection> {
    STANDARD.decode(data).map_err(|_| Rejection::BadEncoding)
}

/// One decode phase: the byte form offered to the serializer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodeCandidate {
    /// Decoded bytes wrapped in double quotes (historical text payloads)
    Quoted,
    /// Decoded bytes as-is
    Raw,
}

impl DecodeCandidate {
    /// Short name used in error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            DecodeCandidate::Quoted => "quoted",
            DecodeCandidate::Raw => "raw",
        }
    }

    /// Build this candidate's byte form from the decoded payload.
    pub fn prepare<'a>(&self, decoded: &'a [u8]) -> Cow<'a, [u8]> {
        match self {
            DecodeCandidate::Quoted => {
                let mut quoted = Vec::with_capacity(decoded.len() + 2);
                quoted.push(b'"');
                quoted.extend_from_slice(decoded);
                quoted.push(b'"');
                Cow::Owned(quoted)
            }
            DecodeCandidate::Raw => Cow::Borrowed(decoded),
        }
    }
}

/// Order of decode phases attempted on verify. First success wins.
///
/// Serde and [`FromStr`] accept the same case-sensitive names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DecodeStrategy {
    /// Quoted wrapper first, then raw bytes
    #[default]
    QuotedThenRaw,
    /// Raw bytes only. Use with binary serializers.
    #[serde(alias = "raw")]
    RawOnly,
}

impl DecodeStrategy {
    /// Phases in attempt order.
    pub fn candidates(&self) -> &'static [DecodeCandidate] {
        match self {
            DecodeStrategy::QuotedThenRaw => &[DecodeCandidate::Quoted, DecodeCandidate::Raw],
            DecodeStrategy::RawOnly => &[DecodeCandidate::Raw],
        }
    }

    /// Config-file name.
    pub fn as_str(&self) -> &'static str {
        match self {
            DecodeStrategy::QuotedThenRaw => "quoted-then-raw",
            DecodeStrategy::RawOnly => "raw-only",
        }
    }
}

impl fmt::Display for DecodeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DecodeStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "quoted-then-raw" => Ok(DecodeStrategy::QuotedThenRaw),
            "raw-only" | "raw" => Ok(DecodeStrategy::RawOnly),
            other => Err(ConfigError::UnknownDecodeStrategy(other.to_string())),
        }
    }
}
