//! LPU237 device transactions.
//!
//! The controller sequences multi-frame business operations on one device
//! over a [`Client`](crate::Client) and tracks a small state machine per
//! device index that decides how each reply is interpreted.
//!
//! # Module Structure
//!
//! | Module | Description |
//! |--------|-------------|
//! | `device` | [`Lpu237`] device object trait and read data types |
//! | `state` | [`TransactionState`] and the pure [`transition`] table |
//! | `controller` | [`Lpu237Controller`] |
//!
//! # Example
//!
//! ```ignore
//! use coffee_lpu237::lpu237::{Lpu237Controller, ReadHandler};
//!
//! let controller = Lpu237Controller::new(client, device);
//! controller.open().await?;
//!
//! let handler = ReadHandler::new(
//!     |data| println!("read {data:?}"),
//!     |error| eprintln!("read failed: {error}"),
//! );
//! controller.read_card(true, handler).await?;
//! ```

// ============================================================================
// Submodules
// ============================================================================

mod controller;
mod device;
mod state;

// ============================================================================
// Re-exports
// ============================================================================

pub use controller::{Lpu237Controller, Progress};
pub use device::{DeviceType, Lpu237, MsrData, ParameterScope, ReadData, ReadHandler, ReadKind};
pub use state::{Action, Frame, FrameContext, TransactionState, Transition, transition};

pub(crate) use state::TransactionBook;
