//! Error types for the coffee client.
//!
//! This module defines all error types used throughout the crate.
//!
//! # Usage
//!
//! All fallible operations return [`Result<T>`] which uses [`Error`]:
//!
//! ```ignore
//! use coffee_lpu237::{Client, Result};
//!
//! async fn example(client: &Client) -> Result<()> {
//!     let index = client.device_open("hid#vid_134b&pid_0206", false).await?;
//!     client.device_close(index).await?;
//!     Ok(())
//! }
//! ```
//!
//! # Error Categories
//!
//! | Category | Variants |
//! |----------|----------|
//! | Configuration | [`Error::Config`] |
//! | Connection | [`Error::NotConnected`], [`Error::Connection`], [`Error::ConnectionClosed`] |
//! | Validation | [`Error::UnknownDeviceIndex`], [`Error::UnknownInId`], [`Error::UnknownOutId`], [`Error::InvalidArgument`] |
//! | Protocol | [`Error::ActionMismatch`], [`Error::InvalidDataField`], [`Error::ServerRejected`] |
//! | Device | [`Error::DeviceNotOpen`], [`Error::Busy`], [`Error::Cancelled`], [`Error::DeviceResponse`], [`Error::UnsupportedDevice`] |
//! | Execution | [`Error::RequestTimeout`] |
//! | External | [`Error::Json`], [`Error::WebSocket`], [`Error::ChannelClosed`] |

// ============================================================================
// Imports
// ============================================================================

use std::result::Result as StdResult;

use thiserror::Error;
use tokio::sync::oneshot::error::RecvError;
use tokio_tungstenite::tungstenite::Error as WsError;

use crate::identifiers::DeviceIndex;
use crate::protocol::ActionCode;

// ============================================================================
// Result Alias
// ============================================================================

/// Result type alias using crate [`enum@Error`].
///
/// All fallible operations in this crate return this type.
pub type Result<T> = StdResult<T, Error>;

// ============================================================================
// Error Enum
// ============================================================================

/// Main error type for the crate.
///
/// Each variant includes relevant context for debugging.
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Configuration error.
    ///
    /// Returned when client options are invalid.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    // ========================================================================
    // Connection Errors
    // ========================================================================
    /// No session with the coffee server.
    ///
    /// Returned by every server operation issued before `connect()`.
    #[error("Not connected to server")]
    NotConnected,

    /// WebSocket connection failed.
    #[error("Connection failed: {message}")]
    Connection {
        /// Description of the connection error.
        message: String,
    },

    /// WebSocket connection closed while a request was outstanding.
    #[error("Connection closed")]
    ConnectionClosed,

    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// Device index is the undefined sentinel or otherwise unusable.
    #[error("Unknown device index: {device_index}")]
    UnknownDeviceIndex {
        /// The rejected index.
        device_index: DeviceIndex,
    },

    /// Input report id out of `0..=255`.
    #[error("Unknown in id: {in_id}")]
    UnknownInId {
        /// The rejected id.
        in_id: u32,
    },

    /// Output report id out of `0..=255`.
    #[error("Unknown out id: {out_id}")]
    UnknownOutId {
        /// The rejected id.
        out_id: u32,
    },

    /// Invalid argument supplied by the caller.
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument.
        message: String,
    },

    // ========================================================================
    // Protocol Errors
    // ========================================================================
    /// Reply carried a different action code than the request expects.
    #[error("Mismatched action: expected {expected}, got {actual}")]
    ActionMismatch {
        /// Action code the pending request waits for.
        expected: ActionCode,
        /// Action code found in the reply.
        actual: ActionCode,
    },

    /// Reply data field has an unexpected shape.
    #[error("Invalid data field: {message}")]
    InvalidDataField {
        /// Description of the format problem.
        message: String,
    },

    /// Server answered with an error status.
    #[error("Server rejected request: {message}")]
    ServerRejected {
        /// Status or detail reported by the server.
        message: String,
    },

    // ========================================================================
    // Device Errors
    // ========================================================================
    /// Operation requires an opened device handle.
    #[error("Device not open: {path}")]
    DeviceNotOpen {
        /// Device path.
        path: String,
    },

    /// Another transaction is already queued for the device.
    #[error("Device {device_index} is busy")]
    Busy {
        /// The busy device.
        device_index: DeviceIndex,
    },

    /// A read was cancelled before data arrived.
    #[error("Read cancelled on device {device_index}")]
    Cancelled {
        /// The device whose read was cancelled.
        device_index: DeviceIndex,
    },

    /// Device answered a frame with a negative or unparsable response.
    #[error("Device response error: {message}")]
    DeviceResponse {
        /// Description of the device failure.
        message: String,
    },

    /// Device type does not support the requested operation.
    #[error("Unsupported device type: {device_type}")]
    UnsupportedDevice {
        /// Device type tag.
        device_type: String,
    },

    // ========================================================================
    // Execution Errors
    // ========================================================================
    /// Request timeout.
    ///
    /// Only produced when a request timeout is configured.
    #[error("Request on device {device_index} timed out after {timeout_ms}ms")]
    RequestTimeout {
        /// Channel the request was issued on.
        device_index: DeviceIndex,
        /// Milliseconds waited before timeout.
        timeout_ms: u64,
    },

    // ========================================================================
    // External Errors
    // ========================================================================
    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// WebSocket error.
    #[error("WebSocket error: {0}")]
    WebSocket(#[from] WsError),

    /// A reply channel was dropped before it resolved.
    #[error("Channel closed")]
    ChannelClosed(#[from] RecvError),
}

// ============================================================================
// Error Constructors
// ============================================================================

impl Error {
    /// Creates a configuration error.
    #[inline]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Creates a connection error.
    #[inline]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Creates an unknown device index error.
    #[inline]
    pub fn unknown_device_index(device_index: DeviceIndex) -> Self {
        Self::UnknownDeviceIndex { device_index }
    }

    /// Creates an invalid argument error.
    #[inline]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Creates an action mismatch error.
    #[inline]
    pub fn action_mismatch(expected: ActionCode, actual: ActionCode) -> Self {
        Self::ActionMismatch { expected, actual }
    }

    /// Creates an invalid data field error.
    #[inline]
    pub fn invalid_data_field(message: impl Into<String>) -> Self {
        Self::InvalidDataField {
            message: message.into(),
        }
    }

    /// Creates a server rejected error.
    #[inline]
    pub fn server_rejected(message: impl Into<String>) -> Self {
        Self::ServerRejected {
            message: message.into(),
        }
    }

    /// Creates a device not open error.
    #[inline]
    pub fn device_not_open(path: impl Into<String>) -> Self {
        Self::DeviceNotOpen { path: path.into() }
    }

    /// Creates a busy error.
    #[inline]
    pub fn busy(device_index: DeviceIndex) -> Self {
        Self::Busy { device_index }
    }

    /// Creates a cancelled read error.
    #[inline]
    pub fn cancelled(device_index: DeviceIndex) -> Self {
        Self::Cancelled { device_index }
    }

    /// Creates a device response error.
    #[inline]
    pub fn device_response(message: impl Into<String>) -> Self {
        Self::DeviceResponse {
            message: message.into(),
        }
    }

    /// Creates an unsupported device error.
    #[inline]
    pub fn unsupported_device(device_type: impl Into<String>) -> Self {
        Self::UnsupportedDevice {
            device_type: device_type.into(),
        }
    }

    /// Creates a request timeout error.
    #[inline]
    pub fn request_timeout(device_index: DeviceIndex, timeout_ms: u64) -> Self {
        Self::RequestTimeout {
            device_index,
            timeout_ms,
        }
    }
}

// ============================================================================
// Error Predicates
// ============================================================================

impl Error {
    /// Returns `true` if this is a timeout error.
    #[inline]
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::RequestTimeout { .. })
    }

    /// Returns `true` if this is a cancelled read.
    #[inline]
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled { .. })
    }

    /// Returns `true` if this is a connection error.
    ///
    /// Connection errors invalidate the whole session.
    #[inline]
    #[must_use]
    pub fn is_connection_error(&self) -> bool {
        matches!(
            self,
            Self::NotConnected
                | Self::Connection { .. }
                | Self::ConnectionClosed
                | Self::WebSocket(_)
                | Self::ChannelClosed(_)
        )
    }

    /// Returns `true` if the server reply was malformed or unexpected.
    #[inline]
    #[must_use]
    pub fn is_protocol_error(&self) -> bool {
        matches!(
            self,
            Self::ActionMismatch { .. } | Self::InvalidDataField { .. } | Self::Json(_)
        )
    }

    /// Returns `true` if this error comes from argument validation.
    #[inline]
    #[must_use]
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownDeviceIndex { .. }
                | Self::UnknownInId { .. }
                | Self::UnknownOutId { .. }
                | Self::InvalidArgument { .. }
        )
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::connection("refused");
        assert_eq!(err.to_string(), "Connection failed: refused");
    }

    #[test]
    fn test_action_mismatch_display() {
        let err = Error::action_mismatch(ActionCode::DeviceSend, ActionCode::DeviceOpen);
        assert_eq!(err.to_string(), "Mismatched action: expected s, got o");
    }

    #[test]
    fn test_is_connection_error() {
        assert!(Error::NotConnected.is_connection_error());
        assert!(Error::ConnectionClosed.is_connection_error());
        assert!(Error::connection("x").is_connection_error());
        assert!(!Error::busy(DeviceIndex::new(1)).is_connection_error());
    }

    #[test]
    fn test_is_protocol_error() {
        assert!(Error::invalid_data_field("empty").is_protocol_error());
        assert!(
            Error::action_mismatch(ActionCode::Echo, ActionCode::Unknown).is_protocol_error()
        );
        assert!(!Error::server_rejected("error").is_protocol_error());
    }

    #[test]
    fn test_is_validation_error() {
        assert!(Error::UnknownInId { in_id: 256 }.is_validation_error());
        assert!(Error::UnknownOutId { out_id: 300 }.is_validation_error());
        assert!(Error::unknown_device_index(DeviceIndex::UNDEFINED).is_validation_error());
        assert!(!Error::NotConnected.is_validation_error());
    }

    #[test]
    fn test_cancelled_and_timeout() {
        assert!(Error::cancelled(DeviceIndex::new(3)).is_cancelled());
        assert!(Error::request_timeout(DeviceIndex::MANAGER, 100).is_timeout());
        assert!(!Error::ConnectionClosed.is_timeout());
    }

    #[tokio::test]
    async fn test_dropped_responder_is_channel_closed() {
        let (tx, rx) = tokio::sync::oneshot::channel::<()>();
        drop(tx);
        let err: Error = rx.await.unwrap_err().into();
        assert!(matches!(err, Error::ChannelClosed(_)));
        assert!(err.is_connection_error());
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<String>("invalid").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }
}
