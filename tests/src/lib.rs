//! # Message Verifier Test Suite
//!
//! Unified test crate.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── integration/   # End-to-end generate/verify flows through the public API
//! │   ├── flows.rs
//! │   └── concurrency.rs
//! │
//! └── exploits/      # Attack simulations
//!     ├── tampering.rs
//!     └── timing.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p mv-tests
//!
//! # By category
//! cargo test -p mv-tests integration::
//! cargo test -p mv-tests exploits::
//!
//! # Benchmarks
//! cargo bench -p mv-tests
//! ```

#![allow(dead_code)]

pub mod exploits;
pub mod integration;

use message_verifier::{JsonSerializer, MessageVerifier};
use serde::{Deserialize, Serialize};

/// Secret used across the suite (32 bytes).
pub const TEST_SECRET: &str = "s3cr3t-32-bytes-minimum-xxxxxxxx";

/// Install a test-writer subscriber honoring `RUST_LOG`. Safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Default verifier: HMAC-SHA1, JSON, quoted-then-raw decoding.
pub fn json_verifier() -> MessageVerifier<JsonSerializer> {
    init_tracing();
    match MessageVerifier::builder()
        .secret(TEST_SECRET)
        .serializer(JsonSerializer)
        .build()
    {
        Ok(verifier) => verifier,
        Err(e) => panic!("test verifier must build: {e}"),
    }
}

/// Typical remember-me token payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RememberMeToken {
    /// Account id
    pub user_id: u64,
    /// Account email
    pub email: String,
}

/// Typical one-click unsubscribe payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnsubscribeLink {
    /// Account id
    pub user_id: u64,
    /// Mailing lists to leave
    pub lists: Vec<String>,
}
