//! # Integration Tests
//!
//! Generate/verify flows through the public API only.

pub mod concurrency;
