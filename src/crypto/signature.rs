//! Raw-digest ECDSA signing and verification over secp256k1.
//!
//! The 32-byte digest is handed to ECDSA as-is; nothing here hashes it again.
//! Nonces are derived per RFC 6979, so signing the same digest with the same
//! key always yields the same signature.

use std::fmt;

use secp256k1::{ecdsa, Message, Secp256k1};

use super::{Keypair, MessageDigest, PublicKey};
use crate::error::CryptoError;

/// Length of a compact `r‖s` signature in bytes.
pub const SIGNATURE_LEN: usize = 64;

/// An ECDSA signature: the `(r, s)` pair, each a 32-byte big-endian integer mod n.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Signature(ecdsa::Signature);

impl Signature {
    /// Parses a compact 64-byte `r‖s` signature.
    ///
    /// Rejects a wrong length, a zero `r` or `s`, and any component that is not
    /// below the group order. High-S values are accepted.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        if bytes.len() != SIGNATURE_LEN {
            return Err(CryptoError::InvalidSignature(format!(
                "expected {} bytes, got {}",
                SIGNATURE_LEN,
                bytes.len()
            )));
        }
        let (r, s) = bytes.split_at(32);
        if r.iter().all(|&b| b == 0) || s.iter().all(|&b| b == 0) {
            return Err(CryptoError::InvalidSignature("r and s must be non-zero".into()));
        }

        ecdsa::Signature::from_compact(bytes)
            .map(Self)
            .map_err(|_| CryptoError::InvalidSignature("r or s is not below the group order".into()))
    }

    /// Parses a compact signature from hex, with or without a `0x` prefix.
    pub fn from_hex(s: &str) -> Result<Self, CryptoError> {
        let bytes = hex::decode(super::strip_hex_prefix(s))?;
        Self::from_bytes(&bytes)
    }

    /// Returns the compact `r‖s` encoding.
    pub fn to_bytes(&self) -> [u8; SIGNATURE_LEN] {
        self.0.serialize_compact()
    }

    pub fn r(&self) -> [u8; 32] {
        let mut r = [0u8; 32];
        r.copy_from_slice(&self.to_bytes()[..32]);
        r
    }

    pub fn s(&self) -> [u8; 32] {
        let mut s = [0u8; 32];
        s.copy_from_slice(&self.to_bytes()[32..]);
        s
    }

    /// Returns `r‖s` as 128 lowercase hex characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({})", self.to_hex())
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Signs `digest` directly with the keypair's private scalar.
///
/// The result is always low-S.
pub fn sign(digest: &MessageDigest, keypair: &Keypair) -> Signature {
    let secp = Secp256k1::signing_only();
    let message = Message::from_digest(*digest.as_bytes());
    Signature(secp.sign_ecdsa(&message, keypair.secret_key()))
}

/// Checks `signature` over `digest` against `public_key`.
///
/// Returns `false` on any mismatch. Both `s` and `n - s` are accepted, so every
/// pair that satisfies the ECDSA equation verifies.
pub fn verify(signature: &Signature, digest: &MessageDigest, public_key: &PublicKey) -> bool {
    let secp = Secp256k1::verification_only();
    let message = Message::from_digest(*digest.as_bytes());

    let mut normalized = signature.0;
    normalized.normalize_s();

    secp.verify_ecdsa(&message, &normalized, public_key.inner()).is_ok()
}
