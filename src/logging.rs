//! Tracing subscriber setup.
//!
//! Diagnostics go to stderr so that stdout carries only the report.

use std::{env, io};

use tracing_subscriber::filter::{EnvFilter, LevelFilter};

const LOG_FILTER: &str = "RUST_LOG";

#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingOptions {
    pub verbosity: u8,
    pub silent: bool,
}

impl LoggingOptions {
    /// Level forced by the command line, if any. Takes precedence over `RUST_LOG`.
    pub fn level_filter(&self) -> Option<LevelFilter> {
        if self.silent {
            return Some(LevelFilter::OFF);
        }
        match self.verbosity {
            0 => None,
            1 => Some(LevelFilter::DEBUG), // -v
            _ => Some(LevelFilter::TRACE), // -vv
        }
    }
}

/// Installs the global subscriber.
///
/// `RUST_LOG` sets the minimum level when no flag overrides it; the default is `WARN`.
pub fn init_logging(options: LoggingOptions) {
    let env_filter = match env::var_os(LOG_FILTER) {
        Some(_) => EnvFilter::try_from_default_env().unwrap_or_else(|e| {
            eprintln!("Ignoring invalid `{}`: {}", LOG_FILTER, e);
            EnvFilter::new("warn")
        }),
        None => EnvFilter::new("warn"),
    };

    let builder = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(false)
        .with_level(true);

    // try_init: a subscriber may already be installed (tests)
    let _ = match options.level_filter() {
        Some(level) => builder.with_max_level(level).try_init(),
        None => builder.with_env_filter(env_filter).try_init(),
    };
}
