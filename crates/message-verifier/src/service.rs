//! # Message Verifier Service
//!
//! Application service that implements [`MessageVerifierApi`].
//!
//! ## Architecture
//!
//! - Built once through [`MessageVerifierBuilder`], which resolves the default
//!   keyed hash and rejects missing collaborators up front
//! - Immutable afterwards: no per-call state, `Send + Sync`, share behind `Arc`
//! - Delegates hashing and (de)serialization to the outbound ports
//!
//! ## Generate
//!
//! `serialize → base64 → digest(base64) → "<base64>--<hex digest>"`
//!
//! ## Verify
//!
//! `split → digest(data) → constant-time compare → strict base64 → decode phases`
//!
//! [`SignedPayloadApi`] exposes both pipelines without the serializer step.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use tracing::{debug, trace, warn};
use zeroize::Zeroizing;

use crate::adapters::keyed_hash::HashAlgorithm;
use crate::config::VerifierConfig;
use crate::domain::compare::digests_match;
use crate::domain::encoding::{decode_payload, encode_payload, DecodeCandidate, DecodeStrategy};
use crate::domain::envelope::{self, SignedMessage};
use crate::domain::errors::{
    ConfigError, DeserializationFailure, Rejection, SerializerError, VerifierError,
};
use crate::ports::inbound::{MessageVerifierApi, SignedPayloadApi};
use crate::ports::outbound::{KeyedHash, Serializer};

/// Secrets shorter than this draw a warning at build time.
pub const RECOMMENDED_SECRET_LEN: usize = 32;

/// Signs values into tamper-evident strings and verifies them back.
pub struct MessageVerifier<S: Serializer> {
    secret: Zeroizing<Vec<u8>>,
    hasher: Box<dyn KeyedHash>,
    serializer: S,
    decode_strategy: DecodeStrategy,
}

impl<S: Serializer> MessageVerifier<S> {
    /// Start building a verifier.
    pub fn builder() -> MessageVerifierBuilder<S> {
        MessageVerifierBuilder::new()
    }

    /// Build from a declarative config plus a serializer.
    pub fn from_config(config: &VerifierConfig, serializer: S) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut builder = Self::builder()
            .secret(config.secret())
            .hasher(config.hash)
            .serializer(serializer);
        if let Some(strategy) = config.decode_strategy {
            builder = builder.decode_strategy(strategy);
        }
        builder.build()
    }

    /// Name of the configured keyed hash.
    pub fn hash_name(&self) -> &'static str {
        self.hasher.name()
    }

    /// Length of the hex digest half of every signed message.
    pub fn digest_hex_len(&self) -> usize {
        self.hasher.output_size() * 2
    }

    /// Configured decode strategy.
    pub fn decode_strategy(&self) -> DecodeStrategy {
        self.decode_strategy
    }

    /// Run a single decode phase against an already-authenticated payload.
    pub fn try_deserialize<T: DeserializeOwned>(
        &self,
        candidate: DecodeCandidate,
        decoded: &[u8],
    ) -> Result<T, SerializerError> {
        self.serializer.deserialize(&candidate.prepare(decoded))
    }

    /// Run the configured decode phases in order. First success wins.
    pub fn deserialize_payload<T: DeserializeOwned>(
        &self,
        decoded: &[u8],
    ) -> Result<T, VerifierError> {
        let mut attempts = Vec::with_capacity(2);
        for &candidate in self.decode_strategy.candidates() {
            match self.try_deserialize(candidate, decoded) {
                Ok(value) => return Ok(value),
                Err(e) => attempts.push((candidate, e)),
            }
        }
        Err(VerifierError::Deserialization(DeserializationFailure {
            attempts,
        }))
    }
}

impl<S: Serializer> MessageVerifierApi for MessageVerifier<S> {
    fn generate<T: Serialize + ?Sized>(&self, value: &T) -> Result<String, VerifierError> {
        let serialized = self
            .serializer
            .serialize(value)
            .map_err(VerifierError::Serialization)?;
        self.sign_bytes(&serialized)
    }

    fn verify<T: DeserializeOwned>(&self, signed: &str) -> Result<T, VerifierError> {
        let decoded = self.verify_bytes(signed)?;
        self.deserialize_payload(&decoded)
    }

    fn digest_for(&self, data: &str) -> Result<String, VerifierError> {
        let digest = self.hasher.compute(&self.secret, data.as_bytes())?;
        Ok(hex::encode(digest))
    }
}

impl<S: Serializer> SignedPayloadApi for MessageVerifier<S> {
    fn sign_bytes(&self, payload: &[u8]) -> Result<String, VerifierError> {
        let encoded = encode_payload(payload);
        let digest = self.digest_for(&encoded)?;

        trace!(
            payload_len = payload.len(),
            encoded_len = encoded.len(),
            "generated signed message"
        );
        Ok(envelope::join(&encoded, &digest))
    }

    fn verify_bytes(&self, signed: &str) -> Result<Vec<u8>, VerifierError> {
        let message = SignedMessage::parse(signed)?;

        let expected = self.digest_for(message.data())?;
        if !digests_match(expected.as_bytes(), message.digest().as_bytes()) {
            return Err(Rejection::DigestMismatch.into());
        }

        let decoded = decode_payload(message.data())?;
        trace!(payload_len = decoded.len(), "verified signed message");
        Ok(decoded)
    }
}

impl<S: Serializer> fmt::Debug for MessageVerifier<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageVerifier")
            .field("secret", &"<redacted>")
            .field("hasher", &self.hasher.name())
            .field("serializer", &self.serializer.name())
            .field("decode_strategy", &self.decode_strategy)
            .finish()
    }
}

/// Builder for [`MessageVerifier`].
///
/// Secret and serializer are required. The keyed hash defaults to
/// [`HashAlgorithm::Sha1`] and the decode strategy to the serializer's
/// [`default_decode_strategy`](Serializer::default_decode_strategy).
pub struct MessageVerifierBuilder<S> {
    secret: Option<Zeroizing<Vec<u8>>>,
    hasher: Option<Box<dyn KeyedHash>>,
    serializer: Option<S>,
    decode_strategy: Option<DecodeStrategy>,
}

impl<S: Serializer> MessageVerifierBuilder<S> {
    /// Empty builder.
    pub fn new() -> Self {
        Self {
            secret: None,
            hasher: None,
            serializer: None,
            decode_strategy: None,
        }
    }

    /// Secret key. Copied into zeroize-on-drop storage.
    pub fn secret(mut self, secret: impl AsRef<[u8]>) -> Self {
        self.secret = Some(Zeroizing::new(secret.as_ref().to_vec()));
        self
    }

    /// Keyed hash primitive.
    pub fn hasher(mut self, hasher: impl KeyedHash + 'static) -> Self {
        self.hasher = Some(Box::new(hasher));
        self
    }

    /// Value codec.
    pub fn serializer(mut self, serializer: S) -> Self {
        self.serializer = Some(serializer);
        self
    }

    /// Decode phases attempted on verify. Overrides the serializer's default.
    pub fn decode_strategy(mut self, strategy: DecodeStrategy) -> Self {
        self.decode_strategy = Some(strategy);
        self
    }

    /// Check the configuration without building.
    ///
    /// # Errors
    /// * `ConfigError::SerializerNotSet`
    /// * `ConfigError::SecretNotSet` - missing or empty secret
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.serializer.is_none() {
            return Err(ConfigError::SerializerNotSet);
        }
        match &self.secret {
            Some(secret) if !secret.is_empty() => Ok(()),
            _ => Err(ConfigError::SecretNotSet),
        }
    }

    /// Validate and produce an immutable verifier.
    pub fn build(self) -> Result<MessageVerifier<S>, ConfigError> {
        self.validate()?;

        let (Some(secret), Some(serializer)) = (self.secret, self.serializer) else {
            return Err(ConfigError::SecretNotSet);
        };
        let hasher: Box<dyn KeyedHash> = match self.hasher {
            Some(hasher) => hasher,
            None => Box::new(HashAlgorithm::default()),
        };
        let decode_strategy = self
            .decode_strategy
            .unwrap_or_else(|| serializer.default_decode_strategy());

        if secret.len() < RECOMMENDED_SECRET_LEN {
            warn!(
                secret_len = secret.len(),
                recommended = RECOMMENDED_SECRET_LEN,
                "message verifier secret is shorter than recommended"
            );
        }
        debug!(
            hasher = hasher.name(),
            digest_bytes = hasher.output_size(),
            serializer = serializer.name(),
            decode_strategy = %decode_strategy,
            "message verifier ready"
        );

        Ok(MessageVerifier {
            secret,
            hasher,
            serializer,
            decode_strategy,
        })
    }
}

impl<S: Serializer> Default for MessageVerifierBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}
