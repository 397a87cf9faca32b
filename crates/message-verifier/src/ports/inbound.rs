//! # Inbound Ports (Driving Ports / API)
//!
//! The public signing API.
//!
//! [`MessageVerifierApi`] is generic over the value type, so it cannot be a
//! trait object. Hosts that need `dyn` dispatch (plugin registries, per-tenant
//! verifier maps) use [`SignedPayloadApi`], which works on serialized bytes.

use crate::domain::errors::VerifierError;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Sign and verify tamper-evident messages.
///
/// Implementations hold no per-call mutable state and must be thread-safe
/// (`Send + Sync`). Not object-safe; see [`SignedPayloadApi`].
pub trait MessageVerifierApi: Send + Sync {
    /// Serialize `value` and return `<base64 data>--<hex digest>`.
    ///
    /// # Errors
    /// * `VerifierError::Serialization` - the serializer rejected `value`
    fn generate<T: Serialize + ?Sized>(&self, value: &T) -> Result<String, VerifierError>;

    /// Authenticate a signed message and recover its value.
    ///
    /// # Errors
    /// * `VerifierError::InvalidSignature` - empty, malformed, forged or badly encoded
    /// * `VerifierError::Deserialization` - authentic payload but no decode phase succeeded
    fn verify<T: DeserializeOwned>(&self, signed: &str) -> Result<T, VerifierError>;

    /// Lowercase hex keyed digest of `data` under the configured secret.
    fn digest_for(&self, data: &str) -> Result<String, VerifierError>;
}

/// Object-safe signing API over already-serialized payloads.
pub trait SignedPayloadApi: Send + Sync {
    /// Sign raw payload bytes. No serializer is involved.
    fn sign_bytes(&self, payload: &[u8]) -> Result<String, VerifierError>;

    /// Authenticate a signed message and return its payload bytes undecoded.
    ///
    /// # Errors
    /// * `VerifierError::InvalidSignature` - empty, malformed, forged or badly encoded
    fn verify_bytes(&self, signed: &str) -> Result<Vec<u8>, VerifierError>;
}
