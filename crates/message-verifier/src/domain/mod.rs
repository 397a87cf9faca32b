//! # Domain Layer
//!
//! Pure signing logic with no I/O dependencies.
//! This is the inner layer of the hexagonal architecture.

pub mod compare;
pub mod encoding;
pub mod envelope;
pub mod errors;
