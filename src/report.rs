//! The key → address → digest → signature → verification walkthrough.

use std::fmt;

use crate::crypto::{sign, verify, Keypair, MessageDigest, Signature};

/// Every value produced by one run of the pipeline.
#[derive(Debug, Clone)]
pub struct Report {
    pub keypair: Keypair,
    pub message: String,
    pub digest: MessageDigest,
    pub signature: Signature,
    pub valid: bool,
    /// Render the address with EIP-55 casing.
    pub checksum: bool,
}

impl Report {
    /// Derives, hashes, signs and verifies in a single forward pass.
    pub fn build(keypair: Keypair, message: impl Into<String>, checksum: bool) -> Self {
        let message = message.into();
        tracing::debug!(address = %keypair.address(), "derived address");

        let digest = MessageDigest::hash_message(&message);
        tracing::debug!(digest = %digest, bytes = message.len(), "hashed message");

        let signature = sign(&digest, &keypair);
        tracing::debug!(signature = %signature, "signed digest");

        let valid = verify(&signature, &digest, keypair.public_key());
        if valid {
            tracing::info!("signature verified");
        } else {
            tracing::error!("signature failed verification");
        }

        Self {
            keypair,
            message,
            digest,
            signature,
            valid,
            checksum,
        }
    }

    /// The address as printed: `0x` + 40 hex chars.
    pub fn address(&self) -> String {
        if self.checksum {
            self.keypair.address().to_checksum()
        } else {
            self.keypair.address().to_hex_prefixed()
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Private Key: {}", self.keypair.private_key_hex())?;
        writeln!(f, "Public Key: {}", self.keypair.public_key())?;
        writeln!(f, "Generated Address: {}", self.address())?;
        writeln!(f, "Original Message: {}", self.message)?;
        writeln!(f, "Hashed Message: {}", self.digest)?;
        writeln!(f, "Digital Signature: {}", self.signature)?;
        write!(f, "Signature Valid?: {}", self.valid)
    }
}
