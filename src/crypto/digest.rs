//! Keccak-256 message digests.

use std::fmt;

use super::keccak256;
use crate::error::CryptoError;

/// Length of a message digest in bytes.
pub const DIGEST_LEN: usize = 32;

/// A 32-byte Keccak-256 digest of a message. This is exactly what gets signed.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageDigest([u8; DIGEST_LEN]);

impl MessageDigest {
    /// Hashes the UTF-8 encoding of `message`.
    pub fn hash_message(message: &str) -> Self {
        Self(keccak256(message.as_bytes()))
    }

    /// Hashes untrusted bytes that must be a UTF-8 message.
    ///
    /// Invalid UTF-8 is rejected rather than lossily replaced.
    pub fn hash_utf8(bytes: &[u8]) -> Result<Self, CryptoError> {
        let message = std::str::from_utf8(bytes)?;
        Ok(Self::hash_message(message))
    }

    /// Wraps an existing 32-byte digest without hashing it again.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CryptoError> {
        let digest: [u8; DIGEST_LEN] = bytes
            .try_into()
            .map_err(|_| CryptoError::InvalidDigestLength(bytes.len()))?;
        Ok(Self(digest))
    }

    #[inline]
    pub const fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    #[inline]
    pub const fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for MessageDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MessageDigest({})", self.to_hex())
    }
}

impl fmt::Display for MessageDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
