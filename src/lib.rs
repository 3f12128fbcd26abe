//! # eth_keysign
//!
//! Ethereum-style account primitives on secp256k1 and Keccak-256.
//!
//! ## Architecture
//!
//! - `crypto`: Key generation, address derivation, hashing, signing and verification
//! - `report`: The end-to-end walkthrough printed by the binary
//! - `config`: Runtime configuration
//! - `logging`: Tracing subscriber setup
//! - `error`: Error types

pub mod config;
pub mod crypto;
pub mod error;
pub mod logging;
pub mod report;

pub use config::Config;
pub use crypto::{keccak256, sign, verify, Address, Keypair, MessageDigest, PublicKey, Signature};
pub use error::CryptoError;
pub use report::Report;
