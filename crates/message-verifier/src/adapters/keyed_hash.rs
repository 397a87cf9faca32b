//! # HMAC Keyed Hashes
//!
//! | Algorithm | Digest | Hex length |
//! |-----------|--------|------------|
//! | HMAC-SHA1 (default) | 160-bit | 40 |
//! | HMAC-SHA256 | 256-bit | 64 |
//! | HMAC-SHA512 | 512-bit | 128 |

use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha1::Sha1;
use sha2::{Sha256, Sha512};
use std::fmt;
use std::str::FromStr;

use crate::domain::errors::ConfigError;
use crate::ports::outbound::KeyedHash;

type HmacSha1 = Hmac<Sha1>;
type HmacSha256 = Hmac<Sha256>;
type HmacSha512 = Hmac<Sha512>;

/// Built-in keyed hash selection.
///
/// Serde and [`FromStr`] accept the same names: `sha1` or `hmac-sha1`, and
/// so on. Matching is case-sensitive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    /// HMAC-SHA1, 20-byte digest
    #[default]
    #[serde(alias = "hmac-sha1")]
    Sha1,
    /// HMAC-SHA256, 32-byte digest
    #[serde(alias = "hmac-sha256")]
    Sha256,
    /// HMAC-SHA512, 64-byte digest
    #[serde(alias = "hmac-sha512")]
    Sha512,
}

impl HashAlgorithm {
    /// Config-file name.
    pub fn as_str(&self) -> &'static str {
        match self {
            HashAlgorithm::Sha1 => "sha1",
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Sha512 => "sha512",
        }
    }
}

impl KeyedHash for HashAlgorithm {
    fn name(&self) -> &'static str {
        match self {
            HashAlgorithm::Sha1 => "hmac-sha1",
            HashAlgorithm::Sha256 => "hmac-sha256",
            HashAlgorithm::Sha512 => "hmac-sha512",
        }
    }

    fn output_size(&self) -> usize {
        match self {
            HashAlgorithm::Sha1 => 20,
            HashAlgorithm::Sha256 => 32,
            HashAlgorithm::Sha512 => 64,
        }
    }

    fn compute(&self, key: &[u8], data: &[u8]) -> Result<Vec<u8>, ConfigError> {
        match self {
            HashAlgorithm::Sha1 => hmac_digest::<HmacSha1>(self.name(), key, data),
            HashAlgorithm::Sha256 => hmac_digest::<HmacSha256>(self.name(), key, data),
            HashAlgorithm::Sha512 => hmac_digest::<HmacSha512>(self.name(), key, data),
        }
    }
}

fn hmac_digest<M: Mac + KeyInit>(
    algorithm: &'static str,
    key: &[u8],
    data: &[u8],
) -> Result<Vec<u8>, ConfigError> {
    let mut mac = <M as KeyInit>::new_from_slice(key).map_err(|e| ConfigError::InvalidSecret {
        algorithm,
        reason: e.to_string(),
    })?;
    mac.update(data);
    Ok(mac.finalize().into_bytes().to_vec())
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HashAlgorithm {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "sha1" | "hmac-sha1" => Ok(HashAlgorithm::Sha1),
            "sha256" | "hmac-sha256" => Ok(HashAlgorithm::Sha256),
            "sha512" | "hmac-sha512" => Ok(HashAlgorithm::Sha512),
            other => Err(ConfigError::UnknownHashAlgorithm(other.to_string())),
        }
    }
}
