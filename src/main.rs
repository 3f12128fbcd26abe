//! Ethereum key/sign walkthrough CLI
//!
//! Usage:
//!   eth_keysign                        # fresh key, default message
//!   eth_keysign -m "hello world"       # sign a custom message
//!   eth_keysign -k 0x<64 hex> --checksum -v

use std::process;

use clap::Parser;

use eth_keysign::logging::{init_logging, LoggingOptions};
use eth_keysign::{Config, Keypair, Report};

fn main() {
    let config = Config::parse();

    init_logging(LoggingOptions {
        verbosity: config.verbose,
        silent: config.quiet,
    });

    // Validate configuration
    if let Err(e) = config.validate() {
        eprintln!("Configuration error: {}", e);
        process::exit(1);
    }

    let keypair = match config.private_key {
        Some(ref hex_key) => {
            tracing::warn!("using supplied private key instead of generating one");
            Keypair::from_hex(hex_key)
        }
        None => Keypair::generate(),
    };

    let keypair = match keypair {
        Ok(keypair) => keypair,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let report = Report::build(keypair, config.message(), config.checksum);
    println!("{}", report);
}
