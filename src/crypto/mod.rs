//! Cryptographic operations for Ethereum-style accounts.
//!
//! This module provides:
//! - Secure random key generation using secp256k1
//! - Ethereum address derivation using Keccak-256
//! - Message hashing and raw-digest ECDSA signing/verification

mod address;
mod digest;
mod keypair;
mod public_key;
mod signature;

pub use address::Address;
pub use digest::MessageDigest;
pub use keypair::Keypair;
pub use public_key::PublicKey;
pub use signature::{sign, verify, Signature};

use tiny_keccak::{Hasher, Keccak};

/// Keccak-256 of arbitrary bytes (output 32 bytes).
///
/// This is the legacy Keccak padding used by Ethereum, not FIPS-202 SHA3-256.
pub fn keccak256(input: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(input);
    let mut out = [0u8; 32];
    hasher.finalize(&mut out);
    out
}

/// Strips an optional `0x`/`0X` prefix from a hex string.
pub(crate) fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keccak_empty() {
        assert_eq!(
            hex::encode(keccak256(b"")),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn test_keccak_is_not_sha3() {
        // SHA3-256("My name is Christopher Eze") under FIPS-202 padding
        let sha3 = "c32ace71de17d093f73e4b0fef359c647580b8cf4d3c09bb3126cf19aa54f954";
        assert_ne!(hex::encode(keccak256(b"My name is Christopher Eze")), sha3);
    }

    #[test]
    fn test_strip_hex_prefix() {
        assert_eq!(strip_hex_prefix("0xabcd"), "abcd");
        assert_eq!(strip_hex_prefix("0Xabcd"), "abcd");
        assert_eq!(strip_hex_prefix("abcd"), "abcd");
    }
}
