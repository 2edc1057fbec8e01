//! Shared utilities for demos.
//!
//! Provides:
//! - Command-line argument parsing
//! - Logging initialization
//! - Client construction from arguments

#![allow(dead_code)]

// ============================================================================
// Imports
// ============================================================================

use coffee_lpu237::{Client, Result, Scheme};
use tracing_subscriber::EnvFilter;

// ============================================================================
// Types
// ============================================================================

/// Command-line arguments for demos.
#[derive(Debug, Clone)]
pub struct Args {
    pub debug: bool,
    pub plain: bool,
    pub port: Option<u16>,
    pub filter: Option<String>,
}

impl Args {
    /// Parse command-line arguments.
    ///
    /// `--plain` uses `ws://`, `--port N` overrides the port and
    /// `--filter S` narrows the device list.
    pub fn parse() -> Self {
        let args: Vec<String> = std::env::args().collect();
        let value_of = |flag: &str| {
            args.iter()
                .position(|a| a == flag)
                .and_then(|i| args.get(i + 1))
                .cloned()
        };
        Self {
            debug: args.iter().any(|a| a == "--debug"),
            plain: args.iter().any(|a| a == "--plain"),
            port: value_of("--port").and_then(|p| p.parse().ok()),
            filter: value_of("--filter"),
        }
    }
}

// ============================================================================
// Functions
// ============================================================================

/// Initialize tracing/logging.
pub fn init_logging(debug: bool) {
    let filter = if debug {
        "coffee_lpu237=debug"
    } else {
        "coffee_lpu237=info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();
}

/// Build a client from the arguments.
pub fn client(args: &Args) -> Result<Client> {
    let mut builder = Client::builder();
    if args.plain {
        builder = builder.scheme(Scheme::Ws);
    }
    if let Some(port) = args.port {
        builder = builder.port(port);
    }
    builder.build()
}
