//! System event monitoring.
//!
//! Demonstrates:
//! - Registering a system event handler
//! - Decoding plug-in / plug-out notifications
//!
//! Usage:
//!   cargo run --example 002_plug_events -- --plain

mod common;

// ============================================================================
// Imports
// ============================================================================

use coffee_lpu237::{ParsedSystemEvent, Result};
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
    println!("=== 002: Plug Events ===\n");

    let client = common::client(&args)?;
    client.set_system_event_handler(|event| match event.parse() {
        ParsedSystemEvent::DevicePlugIn { plugged_in, path } => {
            let verb = if plugged_in { "plugged in" } else { "removed" };
            println!("    [event] {path} {verb}");
        }
        ParsedSystemEvent::ServerClose => println!("    [event] server closing"),
        ParsedSystemEvent::Other(other) => println!("    [event] {other:?}"),
    });

    let session = client.connect().await?;
    println!("[1] Session {session}, waiting for events. Press Ctrl+C to exit...");
    tokio::signal::ctrl_c().await.ok();

    client.disconnect().await?;
    Ok(())
}
