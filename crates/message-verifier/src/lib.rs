//! # Message Verifier
//!
//! Tamper-evident signed messages for stateless tokens (remember-me cookies,
//! one-click unsubscribe links): a value is serialized, base64-encoded and
//! followed by a keyed digest of that encoding.
//!
//! ```text
//! <standard-base64(serialized payload)>--<hex(keyed-hash(secret, base64 payload))>
//! ```
//!
//! ## Architecture
//!
//! This crate follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): envelope, encoding, constant-time compare, errors
//! - **Ports Layer** (`ports/`): typed and byte-level API traits, plus the two
//!   collaborator traits
//! - **Adapters Layer** (`adapters/`): HMAC hashes, JSON and bincode serializers
//! - **Service Layer** (`service.rs`): the verifier and its builder
//!
//! ## Usage
//!
//! ```rust
//! use message_verifier::{JsonSerializer, MessageVerifier, MessageVerifierApi};
//!
//! let verifier = MessageVerifier::builder()
//!     .secret("s3cr3t-32-bytes-minimum-xxxxxxxx")
//!     .serializer(JsonSerializer)
//!     .build()?;
//!
//! let signed = verifier.generate("hello")?;
//! let value: String = verifier.verify(&signed)?;
//! assert_eq!(value, "hello");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Security Notes
//!
//! - A verifier cannot exist without a non-empty secret and a serializer
//! - Digests are compared in constant time once lengths match
//! - Base64 decoding is strict; non-canonical payloads are rejected
//! - Signed messages carry no expiry or purpose; that policy belongs to the caller

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use adapters::{BincodeSerializer, HashAlgorithm, JsonSerializer};
pub use config::VerifierConfig;
pub use domain::encoding::{DecodeCandidate, DecodeStrategy};
pub use domain::envelope::{SignedMessage, SEPARATOR};
pub use domain::errors::{
    ConfigError, DeserializationFailure, Rejection, SerializerError, VerifierError,
};
pub use ports::inbound::{MessageVerifierApi, SignedPayloadApi};
pub use ports::outbound::{KeyedHash, Serializer};
pub use service::{MessageVerifier, MessageVerifierBuilder};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
