//! # Signed Message Envelope
//!
//! Wire form: `<base64 data>--<hex digest>`.
//!
//! The base64 alphabet has no `-`, so the separator can never appear inside
//! the data half produced by [`encode_payload`](super::encoding::encode_payload).

use super::errors::Rejection;

/// Separator between the data and digest halves.
pub const SEPARATOR: &str = "--";

/// Borrowed view of a structurally valid signed message. Not yet authenticated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignedMessage<'a> {
    data: &'a str,
    digest: &'a str,
}

impl<'a> SignedMessage<'a> {
    /// Split a signed string into its two halves.
    ///
    /// # Errors
    /// * `Rejection::EmptyMessage` - input is empty
    /// * `Rejection::Malformed` - not exactly two non-empty parts
    pub fn parse(signed: &'a str) -> Result<Self, Rejection> {
        if signed.is_empty() {
            return Err(Rejection::EmptyMessage);
        }

        let mut parts = signed.split(SEPARATOR);
        let (data, digest) = match (parts.next(), parts.next(), parts.next()) {
            (Some(data), Some(digest), None) => (data, digest),
            _ => return Err(Rejection::Malformed),
        };

        if data.is_empty() || digest.is_empty() {
            return Err(Rejection::Malformed);
        }

        Ok(Self { data, digest })
    }

    /// Base64 payload half.
    pub fn data(&self) -> &'a str {
        self.data
    }

    /// Hex digest half.
    pub fn digest(&self) -> &'a str {
        self.digest
    }
}

/// Join an encoded payload and its digest.
pub fn join(data: &str, digest: &str) -> String {
    let mut out = String::with_capacity(data.len() + SEPARATOR.len() + digest.len());
    out.push_str(data);
    out.push_str(SEPARATOR);
    out.push_str(digest);
    out
}
