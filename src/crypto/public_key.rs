//! secp256k1 public key in Ethereum's 64-byte form.

use std::fmt;

use secp256k1::PublicKey as SecpPublicKey;

use super::Address;
use crate::error::CryptoError;

/// Tag byte of a SEC1 uncompressed point.
const UNCOMPRESSED_TAG: u8 = 0x04;

/// A point on secp256k1, exposed as the concatenated X and Y coordinates.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PublicKey(SecpPublicKey);

impl PublicKey {
    /// Parses a public key from 64 raw bytes (X‖Y) or 65 bytes with the 0x04 tag.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        let mut tagged = [0u8; 65];
        match bytes.len() {
            64 => {
                tagged[0] = UNCOMPRESSED_TAG;
                tagged[1..].copy_from_slice(bytes);
            }
            65 if bytes[0] == UNCOMPRESSED_TAG => tagged.copy_from_slice(bytes),
            len => {
                return Err(CryptoError::InvalidPublicKey(format!(
                    "expected 64 bytes (or 65 with 0x04 prefix), got {}",
                    len
                )))
            }
        }

        SecpPublicKey::from_slice(&tagged)
            .map(Self)
            .map_err(|e| CryptoError::InvalidPublicKey(e.to_string()))
    }

    /// Parses a public key from hex, with or without a `0x` prefix.
    pub fn from_hex(s: &str) -> Result<Self, CryptoError> {
        let bytes = hex::decode(super::strip_hex_prefix(s))?;
        Self::from_bytes(&bytes)
    }

    /// Returns the uncompressed coordinates X‖Y without the prefix byte.
    pub fn to_bytes(&self) -> [u8; 64] {
        let serialized = self.0.serialize_uncompressed();
        let mut out = [0u8; 64];
        out.copy_from_slice(&serialized[1..]);
        out
    }

    /// Returns the 64-byte form as lowercase hex (128 chars, no prefix).
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Derives the Ethereum address of this key.
    #[inline]
    pub fn address(&self) -> Address {
        Address::from_public_key(self)
    }

    pub(crate) fn inner(&self) -> &SecpPublicKey {
        &self.0
    }
}

impl From<SecpPublicKey> for PublicKey {
    fn from(key: SecpPublicKey) -> Self {
        Self(key)
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", self.to_hex())
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
