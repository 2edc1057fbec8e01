//! Session handshake and device enumeration.
//!
//! Demonstrates:
//! - Connecting and reading the session number
//! - Echo round trip
//! - Listing devices, optionally filtered
//!
//! Usage:
//!   cargo run --example 001_device_list -- --plain --port 443
//!   cargo run --example 001_device_list -- --filter hid#vid_134b

mod common;

// ============================================================================
// Imports
// ============================================================================

use coffee_lpu237::Result;
use common::Args;

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() {
    let args = Args::parse();
    common::init_logging(args.debug);

    if let Err(e) = run(args).await {
        eprintln!("\n[ERROR] {e}");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    println!("=== 001: Device List ===\n");

    let client = common::client(&args)?;
    println!("[1] Connecting to {}...", client.options().url()?);
    let session = client.connect().await?;
    println!("    ✓ Session {session}\n");

    println!("[2] Echo...");
    let echoed = client.echo_hex("a1b2").await?;
    println!("    ✓ Echoed {echoed}\n");

    println!("[3] Devices:");
    let devices = client.device_list(args.filter.as_deref()).await?;
    if devices.is_empty() {
        println!("    (none)");
    }
    for path in &devices {
        println!("    - {path}");
    }

    client.disconnect().await?;
    println!("\n[Done]");
    Ok(())
}
