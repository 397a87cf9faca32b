//! # Serializer Adapters
//!
//! - [`JsonSerializer`]: structured text via `serde_json`
//! - [`BincodeSerializer`]: compact binary via `bincode`; decodes raw bytes only

use bincode::Options;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::encoding::DecodeStrategy;
use crate::domain::errors::SerializerError;
use crate::ports::outbound::Serializer;

/// JSON codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSerializer;

impl Serializer for JsonSerializer {
    fn name(&self) -> &'static str {
        "json"
    }

    fn serialize<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, SerializerError> {
        serde_json::to_vec(value).map_err(|e| SerializerError::Encode(e.to_string()))
    }

    fn deserialize<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, SerializerError> {
        serde_json::from_slice(bytes).map_err(|e| SerializerError::Decode(e.to_string()))
    }
}

/// Bincode codec. Trailing bytes are rejected so a payload decodes one way only.
#[derive(Debug, Clone, Copy, Default)]
pub struct BincodeSerializer;

impl BincodeSerializer {
    fn options() -> impl Options {
        bincode::DefaultOptions::new().reject_trailing_bytes()
    }
}

impl Serializer for BincodeSerializer {
    fn name(&self) -> &'static str {
        "bincode"
    }

    fn serialize<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, SerializerError> {
        Self::options()
            .serialize(value)
            .map_err(|e| SerializerError::Encode(e.to_string()))
    }

    fn deserialize<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, SerializerError> {
        Self::options()
            .deserialize(bytes)
            .map_err(|e| SerializerError::Decode(e.to_string()))
    }

    // A quoted length-prefixed payload is often itself a valid encoding
    fn default_decode_strategy(&self) -> DecodeStrategy {
        DecodeStrategy::RawOnly
    }
}
