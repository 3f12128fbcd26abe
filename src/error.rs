//! Error types for key, digest and signature handling.

/// Errors produced by the cryptographic operations.
///
/// A signature that does not match is not an error: [`crate::crypto::verify`]
/// reports it as `false`. These variants cover malformed input and a missing
/// entropy source only.
#[derive(Debug, thiserror::Error)]
pub enum CryptoError {
    #[error("Secure random source unavailable: {0}")]
    Entropy(#[from] rand::Error),

    #[error("Invalid private key: {0}")]
    InvalidPrivateKey(String),

    #[error("Invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Invalid encoding: message is not valid UTF-8 ({0})")]
    InvalidEncoding(#[from] std::str::Utf8Error),

    #[error("Invalid digest length: expected 32 bytes, got {0}")]
    InvalidDigestLength(usize),

    #[error("Invalid signature: {0}")]
    InvalidSignature(String),

    #[error("Invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}
