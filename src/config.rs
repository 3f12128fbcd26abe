//! Runtime configuration for the signing walkthrough.

use clap::{ArgAction, Parser};

/// Generate an Ethereum-style keypair, derive its address, then hash, sign
/// and verify a message with secp256k1 ECDSA over Keccak-256.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// First name used in the default message
    #[arg(long, default_value = "Christopher")]
    pub first_name: String,

    /// Last name used in the default message
    #[arg(long, default_value = "Eze")]
    pub last_name: String,

    /// Message to sign (overrides the composed "My name is ..." message)
    #[arg(short, long)]
    pub message: Option<String>,

    /// Existing private key to use instead of generating one (64 hex chars, optional 0x)
    #[arg(short = 'k', long)]
    pub private_key: Option<String>,

    /// Print the address with EIP-55 checksum casing
    #[arg(long, default_value = "false")]
    pub checksum: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Silence all log output
    #[arg(short, long, default_value = "false", conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Config {
    /// Validates the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref key) = self.private_key {
            let digits = key.trim();
            let digits = digits
                .strip_prefix("0x")
                .or_else(|| digits.strip_prefix("0X"))
                .unwrap_or(digits);

            if digits.len() != 64 {
                return Err(ConfigError::InvalidPrivateKey(
                    "must be 32 bytes (64 hex chars)".into(),
                ));
            }
            if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(ConfigError::InvalidPrivateKey(
                    "must contain only hex characters (0-9, a-f)".into(),
                ));
            }
        }

        if self.message.is_none() && (self.first_name.is_empty() || self.last_name.is_empty()) {
            return Err(ConfigError::InvalidMessage(
                "first and last name cannot be empty unless --message is given".into(),
            ));
        }

        Ok(())
    }

    /// Returns the message to sign.
    pub fn message(&self) -> String {
        match self.message {
            Some(ref message) => message.clone(),
            None => format!("My name is {} {}", self.first_name, self.last_name),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid private key: {0}")]
    InvalidPrivateKey(String),
    #[error("Invalid message: {0}")]
    InvalidMessage(String),
}
