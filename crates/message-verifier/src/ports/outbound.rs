//! # Outbound Ports (Driven Ports / SPI)
//!
//! The two collaborators a verifier is built from. Default implementations
//! live in [`crate::adapters`].

use crate::domain::encoding::DecodeStrategy;
use crate::domain::errors::{ConfigError, SerializerError};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Keyed hash primitive (HMAC-style).
///
/// Must be deterministic for a given key and input. Digest length is taken
/// from [`output_size`](KeyedHash::output_size) and never assumed elsewhere.
pub trait KeyedHash: Send + Sync {
    /// Algorithm name for logs and errors.
    fn name(&self) -> &'static str;

    /// Digest size in bytes.
    fn output_size(&self) -> usize;

    /// Compute the keyed digest of `data` under `key`.
    ///
    /// # Errors
    /// * `ConfigError::InvalidSecret` - the primitive does not accept `key`
    fn compute(&self, key: &[u8], data: &[u8]) -> Result<Vec<u8>, ConfigError>;
}

impl<H: KeyedHash + ?Sized> KeyedHash for Box<H> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn output_size(&self) -> usize {
        (**self).output_size()
    }

    fn compute(&self, key: &[u8], data: &[u8]) -> Result<Vec<u8>, ConfigError> {
        (**self).compute(key, data)
    }
}

/// Value ↔ bytes codec.
///
/// Must round-trip: `deserialize(serialize(v)) == v` for every valid `v`.
pub trait Serializer: Send + Sync {
    /// Format name for logs.
    fn name(&self) -> &'static str;

    /// Encode a value.
    fn serialize<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, SerializerError>;

    /// Decode bytes into a value.
    fn deserialize<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, SerializerError>;

    /// Decode phases used when the verifier is not given an explicit strategy.
    ///
    /// Formats where a quote-wrapped payload can itself decode (any binary
    /// length-prefixed format) must return [`DecodeStrategy::RawOnly`].
    fn default_decode_strategy(&self) -> DecodeStrategy {
        DecodeStrategy::QuotedThenRaw
    }
}
