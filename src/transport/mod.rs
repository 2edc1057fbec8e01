//! WebSocket transport layer.
//!
//! This module owns the single WebSocket connection to the coffee server
//! and matches every reply to the request that is waiting for it.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐                              ┌─────────────────┐
//! │  Client (Rust)  │                              │  coffee server  │
//! │                 │         WebSocket            │                 │
//! │  Connection     │◄────────────────────────────►│  device manager │
//! │  → Registry     │   wss://127.0.0.1:443        │  (HID devices)  │
//! └─────────────────┘                              └─────────────────┘
//! ```
//!
//! # Correlation
//!
//! Packets carry no request id. Each channel (`device_index`, 0 = manager)
//! has a FIFO queue of pending records; a reply always completes the oldest
//! record on its channel.
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `connection` | WebSocket connection and event loop |
//! | `pending` | Pending-request records and reply validation |

// ============================================================================
// Submodules
// ============================================================================

/// WebSocket connection and event loop.
pub mod connection;

/// Pending-request records.
pub mod pending;

// ============================================================================
// Re-exports
// ============================================================================

pub use connection::{Connection, SUB_PROTOCOL, SystemEventHandler};
pub use pending::{Callbacks, DataCallback, ErrorCallback, ProgressCallback};
