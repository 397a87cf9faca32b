//! # Adapters Layer
//!
//! Built-in implementations of the outbound ports.

pub mod keyed_hash;
pub mod serializers;

pub use keyed_hash::HashAlgorithm;
pub use serializers::{BincodeSerializer, JsonSerializer};
