//! secp256k1 keypair generation and import.

use std::fmt;

use rand::rngs::OsRng;
use rand::RngCore;
use secp256k1::{PublicKey as SecpPublicKey, Secp256k1, SecretKey};

use super::{Address, PublicKey};
use crate::error::CryptoError;

/// A private scalar together with its derived public key and address.
///
/// The secret is never shown by `Debug`.
#[derive(Clone)]
pub struct Keypair {
    secret_key: SecretKey,
    public_key: PublicKey,
    address: Address,
}

impl Keypair {
    /// Generates a new random keypair from the operating system's CSPRNG.
    ///
    /// Candidates outside `[1, n-1]` are discarded and redrawn, so the scalar
    /// stays uniform over the valid range.
    pub fn generate() -> Result<Self, CryptoError> {
        let mut candidate = [0u8; 32];
        loop {
            OsRng.try_fill_bytes(&mut candidate)?;
            match SecretKey::from_slice(&candidate) {
                Ok(secret_key) => return Ok(Self::from_secret(secret_key)),
                Err(_) => tracing::trace!("rejected out-of-range scalar, redrawing"),
            }
        }
    }

    /// Builds a keypair from an existing 32-byte big-endian scalar.
    pub fn from_secret_bytes(secret_bytes: [u8; 32]) -> Result<Self, CryptoError> {
        let secret_key = SecretKey::from_slice(&secret_bytes)
            .map_err(|_| CryptoError::InvalidPrivateKey("scalar must be in [1, n-1]".into()))?;
        Ok(Self::from_secret(secret_key))
    }

    /// Builds a keypair from 64 hex characters, with or without `0x` prefix.
    pub fn from_hex(s: &str) -> Result<Self, CryptoError> {
        let digits = super::strip_hex_prefix(s.trim());
        if digits.len() != 64 {
            return Err(CryptoError::InvalidPrivateKey(format!(
                "expected 64 hex characters, got {}",
                digits.len()
            )));
        }
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(digits, &mut bytes)?;
        Self::from_secret_bytes(bytes)
    }

    fn from_secret(secret_key: SecretKey) -> Self {
        let secp = Secp256k1::signing_only();
        let public_key = PublicKey::from(SecpPublicKey::from_secret_key(&secp, &secret_key));
        let address = public_key.address();

        Self {
            secret_key,
            public_key,
            address,
        }
    }

    /// Returns the private key as a hex string (without 0x prefix).
    pub fn private_key_hex(&self) -> String {
        hex::encode(self.private_key_bytes())
    }

    /// Returns the private key as 32 big-endian bytes.
    pub fn private_key_bytes(&self) -> [u8; 32] {
        self.secret_key.secret_bytes()
    }

    #[inline]
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// Returns a reference to the derived address.
    #[inline]
    pub fn address(&self) -> &Address {
        &self.address
    }

    pub(crate) fn secret_key(&self) -> &SecretKey {
        &self.secret_key
    }
}

impl fmt::Debug for Keypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keypair")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}
