//! # Verifier Configuration
//!
//! Declarative settings for hosts that load the verifier from their own
//! config or the environment.
//!
//! ## Environment
//!
//! | Variable | Format | Default |
//! |----------|--------|---------|
//! | `MV_SECRET` | hex-encoded bytes | none (required) |
//! | `MV_HASH` | `sha1` / `sha256` / `sha512` | `sha1` |
//! | `MV_DECODE_STRATEGY` | `quoted-then-raw` / `raw-only` | serializer's default |

use std::fmt;
use tracing::info;
use zeroize::Zeroizing;

use crate::adapters::keyed_hash::HashAlgorithm;
use crate::domain::encoding::DecodeStrategy;
use crate::domain::errors::ConfigError;

/// Hex-encoded secret key.
pub const ENV_SECRET: &str = "MV_SECRET";
/// Keyed hash name.
pub const ENV_HASH: &str = "MV_HASH";
/// Decode strategy name.
pub const ENV_DECODE_STRATEGY: &str = "MV_DECODE_STRATEGY";

/// Verifier settings minus the serializer, which is a type-level choice.
#[derive(Clone, Default)]
pub struct VerifierConfig {
    secret: Zeroizing<Vec<u8>>,
    /// Keyed hash.
    pub hash: HashAlgorithm,
    /// Decode phases attempted on verify. `None` defers to the serializer.
    pub decode_strategy: Option<DecodeStrategy>,
}

impl VerifierConfig {
    /// Config with the given secret and defaults elsewhere.
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        Self {
            secret: Zeroizing::new(secret.as_ref().to_vec()),
            ..Self::default()
        }
    }

    /// Replace the keyed hash.
    pub fn with_hash(mut self, hash: HashAlgorithm) -> Self {
        self.hash = hash;
        self
    }

    /// Replace the decode strategy.
    pub fn with_decode_strategy(mut self, strategy: DecodeStrategy) -> Self {
        self.decode_strategy = Some(strategy);
        self
    }

    /// Secret bytes.
    pub fn secret(&self) -> &[u8] {
        &self.secret
    }

    /// Load from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup (environment, parsed file, test map).
    ///
    /// Missing keys keep their defaults; a missing secret is reported by
    /// [`validate`](Self::validate), not here.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(secret_hex) = lookup(ENV_SECRET) {
            let secret = hex::decode(secret_hex.trim())
                .map_err(|e| ConfigError::InvalidSecretEncoding(e.to_string()))?;
            config.secret = Zeroizing::new(secret);
            info!("Loaded message verifier secret from {}", ENV_SECRET);
        }
        if let Some(hash) = lookup(ENV_HASH) {
            config.hash = hash.parse()?;
        }
        if let Some(strategy) = lookup(ENV_DECODE_STRATEGY) {
            config.decode_strategy = Some(strategy.parse()?);
        }

        Ok(config)
    }

    /// Reject configs that cannot produce a working verifier.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.secret.is_empty() {
            return Err(ConfigError::SecretNotSet);
        }
        Ok(())
    }
}

impl fmt::Debug for VerifierConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VerifierConfig")
            .field("secret", &format_args!("<{} bytes>", self.secret.len()))
            .field("hash", &self.hash)
            .field("decode_strategy", &self.decode_strategy)
            .finish()
    }
}
