//! # Verifier Errors
//!
//! Error taxonomy for generating and verifying signed messages.
//!
//! | Category | When |
//! |----------|------|
//! | [`ConfigError`] | Verifier cannot be built (missing serializer or secret) |
//! | [`Rejection`] | Signed message is empty, malformed, forged or badly encoded |
//! | [`SerializerError`] | The pluggable serializer failed |
//! | [`DeserializationFailure`] | Every decode phase failed on an authentic payload |

use std::fmt;
use thiserror::Error;

use super::encoding::DecodeCandidate;

/// Configuration errors. Always fatal; the caller must fix the setup.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// No serializer was supplied.
    #[error("serializer not set")]
    SerializerNotSet,

    /// No secret (or an empty secret) was supplied.
    #[error("secret not set")]
    SecretNotSet,

    /// The keyed-hash primitive refused the secret.
    #[error("secret rejected by {algorithm}: {reason}")]
    InvalidSecret {
        /// Name of the keyed hash that rejected the key
        algorithm: &'static str,
        /// Underlying reason
        reason: String,
    },

    /// Unknown keyed-hash algorithm name.
    #[error("unknown hash algorithm: {0}")]
    UnknownHashAlgorithm(String),

    /// Unknown decode strategy name.
    #[error("unknown decode strategy: {0}")]
    UnknownDecodeStrategy(String),

    /// Secret supplied through the environment is not valid hex.
    #[error("secret is not valid hex: {0}")]
    InvalidSecretEncoding(String),
}

/// Reasons a signed message is rejected as an invalid signature.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum Rejection {
    /// Input string was empty
    #[error("empty message")]
    EmptyMessage,

    /// Not exactly two non-empty `--`-separated parts
    #[error("malformed")]
    Malformed,

    /// Recomputed digest differs from the supplied one
    #[error("digest mismatch")]
    DigestMismatch,

    /// Data portion is not canonical standard base64
    #[error("bad encoding")]
    BadEncoding,
}

/// Errors raised by a [`Serializer`](crate::ports::outbound::Serializer).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SerializerError {
    /// Value could not be encoded
    #[error("encode failed: {0}")]
    Encode(String),

    /// Bytes could not be decoded into the target type
    #[error("decode failed: {0}")]
    Decode(String),
}

/// Every attempted decode phase failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeserializationFailure {
    /// One entry per attempted phase, in attempt order.
    pub attempts: Vec<(DecodeCandidate, SerializerError)>,
}

impl DeserializationFailure {
    /// Error from a specific phase, if that phase was attempted.
    pub fn error_for(&self, candidate: DecodeCandidate) -> Option<&SerializerError> {
        self.attempts
            .iter()
            .find(|(c, _)| *c == candidate)
            .map(|(_, e)| e)
    }
}

impl fmt::Display for DeserializationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.attempts.iter().map(|(c, _)| c.as_str()).collect();
        write!(f, "failed to deserialize {} data", names.join(" and "))?;
        for (candidate, err) in &self.attempts {
            write!(f, "; {}: {}", candidate.as_str(), err)?;
        }
        Ok(())
    }
}

/// Top-level error for verifier operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VerifierError {
    /// Verifier configuration is incomplete or invalid
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Signed message must be rejected
    #[error("invalid signature - {0}")]
    InvalidSignature(#[from] Rejection),

    /// Generate path: the value could not be serialized
    #[error("serialization failed: {0}")]
    Serialization(#[source] SerializerError),

    /// Verify path: authentic payload could not be deserialized
    #[error("{0}")]
    Deserialization(DeserializationFailure),
}

impl VerifierError {
    /// True for every error that means "reject this message".
    pub fn is_invalid_signature(&self) -> bool {
        matches!(self, VerifierError::InvalidSignature(_))
    }

    /// True for configuration errors.
    pub fn is_config(&self) -> bool {
        matches!(self, VerifierError::Config(_))
    }
}
