//! Type-safe identifiers for sessions and device channels.
//!
//! Newtype wrappers keep channel ids and session numbers from being mixed
//! with plain integers at call sites.

// ============================================================================
// Imports
// ============================================================================

use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// DeviceIndex
// ============================================================================

/// Channel id used to correlate replies.
///
/// `0` is both the manager channel and the "undefined device" sentinel;
/// positive values are device handles issued by the server on open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceIndex(u32);

impl DeviceIndex {
    /// Manager/control channel.
    pub const MANAGER: Self = Self(0);

    /// Sentinel for a device that has not been opened.
    pub const UNDEFINED: Self = Self(0);

    /// Creates a device index from a raw value.
    #[inline]
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the raw value.
    #[inline]
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// Returns `true` for the undefined sentinel.
    #[inline]
    #[must_use]
    pub const fn is_undefined(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` for the manager channel.
    #[inline]
    #[must_use]
    pub const fn is_manager(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for DeviceIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for DeviceIndex {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

// ============================================================================
// SessionNumber
// ============================================================================

/// Session identity assigned by the server on connect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionNumber(u64);

impl SessionNumber {
    /// Creates a session number from a raw value.
    #[inline]
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw value.
    #[inline]
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SessionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manager_is_undefined() {
        assert_eq!(DeviceIndex::MANAGER, DeviceIndex::UNDEFINED);
        assert!(DeviceIndex::UNDEFINED.is_undefined());
        assert!(!DeviceIndex::new(5).is_undefined());
    }

    #[test]
    fn test_display() {
        assert_eq!(DeviceIndex::new(12).to_string(), "12");
        assert_eq!(SessionNumber::new(7).to_string(), "7");
    }

    #[test]
    fn test_serde_transparent() {
        let json = serde_json::to_string(&DeviceIndex::new(3)).expect("serialize");
        assert_eq!(json, "3");
        let session: SessionNumber = serde_json::from_str("42").expect("parse");
        assert_eq!(session.as_u64(), 42);
    }
}
