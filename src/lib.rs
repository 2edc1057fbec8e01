//! Coffee LPU237 - Client library for the coffee device manager service.
//!
//! This library talks to the local coffee server over a WebSocket and
//! drives LPU237 magnetic stripe and iButton readers through it.
//!
//! # Architecture
//!
//! - **Gateway (Rust)**: Frames requests, correlates replies, fans out
//!   system events
//! - **Server (coffee)**: Owns the USB handles, runs kernels and file
//!   operations, pushes plug-in notifications
//!
//! Key design principles:
//!
//! - One [`Client`] owns one WebSocket connection and its event loop
//! - Replies are matched to requests in FIFO order per device index
//! - One [`Lpu237Controller`] per reader sequences multi-frame operations
//! - Event-driven: streaming reads push data through callbacks
//!
//! # Quick Start
//!
//! ```no_run
//! use coffee_lpu237::{Client, Result, Scheme};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = Client::builder().scheme(Scheme::Ws).build()?;
//!
//!     let session = client.connect().await?;
//!     println!("session {session}");
//!
//!     for path in client.device_list(Some("hid#vid_134b")).await? {
//!         println!("{path}");
//!     }
//!
//!     client.disconnect().await?;
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | [`Client`] gateway and its configuration |
//! | [`lpu237`] | Device transaction controller |
//! | [`keyboard`] | ASCII to HID / PS/2 scan code tables |
//! | [`error`] | Error types and [`Result`] alias |
//! | [`identifiers`] | Type-safe ID wrappers |
//! | [`protocol`] | Packet format and commands |
//! | [`transport`] | WebSocket connection and reply correlation |
//! | [`queue`] | Per-key FIFO map |

// ============================================================================
// Modules
// ============================================================================

/// Gateway to the coffee server.
///
/// Use [`Client::builder()`] to create a configured client.
pub mod client;

/// Error types and result aliases.
///
/// All fallible operations return [`Result<T>`] which uses [`Error`].
pub mod error;

/// Type-safe identifiers for sessions and device handles.
pub mod identifiers;

/// ASCII to keyboard scan code lookup tables.
pub mod keyboard;

/// LPU237 device transaction controller.
pub mod lpu237;

/// Packet format, action codes and server commands.
pub mod protocol;

/// FIFO queues keyed by device index.
pub mod queue;

/// WebSocket transport layer.
///
/// Handles the connection event loop and reply correlation.
pub mod transport;

// ============================================================================
// Re-exports
// ============================================================================

// Client types
pub use client::{Client, ClientBuilder, ClientOptions, Scheme};

// Controller types
pub use lpu237::{
    DeviceType, Lpu237, Lpu237Controller, MsrData, ParameterScope, ReadData, ReadHandler,
    TransactionState,
};

// Error types
pub use error::{Error, Result};

// Identifier types
pub use identifiers::{DeviceIndex, SessionNumber};

// Protocol types
pub use protocol::{ActionCode, DataField, Packet, ParsedSystemEvent, SystemEvent};

// Transport types
pub use transport::{Callbacks, DataCallback, ErrorCallback, ProgressCallback};
