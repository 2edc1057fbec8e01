//! Coffee protocol message types.
//!
//! This module defines the message format for communication between the
//! client and the coffee device-management server.
//!
//! # Protocol Overview
//!
//! | Request type | Direction | Purpose |
//! |--------------|-----------|---------|
//! | `T` | Client → Server | Request |
//! | `R` | Server → Client | Reply to the oldest request on the channel |
//! | `S` | Server → Client | System event (plug-in, shutdown) |
//!
//! Replies carry no correlation id. They are matched by channel
//! (`device_index`) in FIFO order and checked against the action code.
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `command` | Kernel/file/advance/update command arrays |
//! | `event` | System event types |
//! | `packet` | Packet and field types |

// ============================================================================
// Submodules
// ============================================================================

/// Command-array requests organized by server module.
pub mod command;

/// System event types.
pub mod event;

/// Packet and field types.
pub mod packet;

// ============================================================================
// Re-exports
// ============================================================================

pub use command::{AdvanceCommand, Command, FileCommand, KernelCommand, UpdateCommand};
pub use event::{ParsedSystemEvent, SystemEvent};
pub use packet::{
    ActionCode, DataField, DataFieldType, DataStatus, Packet, PacketOwner, RequestType,
    validate_hex,
};
