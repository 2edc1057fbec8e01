//! Coffee server client.
//!
//! [`Client`] is the explicit session context: it owns one WebSocket
//! connection and exposes every server request as a method.
//!
//! # Module Structure
//!
//! | Module | Description |
//! |--------|-------------|
//! | `core` | Session lifecycle, echo, device list, control window |
//! | `device` | Device open/close and report I/O |
//! | `manager` | Kernel, file and advance commands |
//! | `update` | Independent bootloader |
//! | `builder` | Fluent configuration |
//! | `options` | Endpoint and timeout options |

// ============================================================================
// Submodules
// ============================================================================

mod builder;
mod core;
mod device;
mod manager;
mod options;
mod update;

// ============================================================================
// Re-exports
// ============================================================================

pub use builder::ClientBuilder;
pub use core::Client;
pub use options::{ClientOptions, DEFAULT_HOST, Scheme};
