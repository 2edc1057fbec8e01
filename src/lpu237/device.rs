//! The LPU237 device object seen by the controller.
//!
//! Frame encoding and decoding belong to the device object. The controller
//! only asks it to queue request frames, hands back each response, and
//! collects decoded card or iButton data.

// ============================================================================
// Imports
// ============================================================================

use std::fmt;

use crate::error::Error;
use crate::identifiers::DeviceIndex;

// ============================================================================
// DeviceType
// ============================================================================

/// Reader variant, from the device type string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DeviceType {
    /// Magnetic stripe reader.
    Msr,
    /// iButton-only reader.
    IButton,
    /// MSR and iButton behind one handle; opened in shared mode.
    CompositeIButton,
    /// Not recognized.
    #[default]
    Unknown,
}

impl DeviceType {
    /// Parses the device type tag (`"msr"`, `"ibutton"`, `"compositive_ibutton"`).
    #[must_use]
    pub fn from_type_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "msr" | "lpu237" => Self::Msr,
            "ibutton" | "i_button" => Self::IButton,
            "compositive_ibutton" | "composite_ibutton" => Self::CompositeIButton,
            _ => Self::Unknown,
        }
    }

    /// Returns `true` for both iButton variants.
    #[inline]
    #[must_use]
    pub const fn is_ibutton(self) -> bool {
        matches!(self, Self::IButton | Self::CompositeIButton)
    }

    /// Returns `true` if the handle must be opened in shared mode.
    #[inline]
    #[must_use]
    pub const fn is_shared(self) -> bool {
        matches!(self, Self::CompositeIButton)
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Msr => "msr",
            Self::IButton => "ibutton",
            Self::CompositeIButton => "compositive_ibutton",
            Self::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

// ============================================================================
// ParameterScope
// ============================================================================

/// Which parameters a load reads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParameterScope {
    /// Every parameter, including key maps.
    #[default]
    All,
    /// Only the parameters needed to operate the reader.
    Min,
}

// ============================================================================
// Read data
// ============================================================================

/// Kind of read a transaction waits for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadKind {
    /// Magnetic card swipe.
    Msr,
    /// iButton touch.
    IButton,
}

/// One decoded card swipe.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MsrData {
    /// ISO1, ISO2, ISO3 track contents.
    pub tracks: [String; 3],
    /// Per-track error code; 0 means read without error.
    pub errors: [i16; 3],
}

impl MsrData {
    /// Returns `true` if every track read cleanly.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.errors.iter().all(|&code| code == 0)
    }
}

/// Data delivered to a read waiter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadData {
    /// Card swipe.
    Msr(MsrData),
    /// iButton key id.
    IButton(String),
}

// ============================================================================
// ReadHandler
// ============================================================================

/// Callback pair of a streaming read.
pub struct ReadHandler {
    on_data: Box<dyn Fn(ReadData) + Send + Sync>,
    on_error: Box<dyn Fn(Error) + Send + Sync>,
}

impl ReadHandler {
    /// Creates a handler from two closures.
    pub fn new<D, E>(on_data: D, on_error: E) -> Self
    where
        D: Fn(ReadData) + Send + Sync + 'static,
        E: Fn(Error) + Send + Sync + 'static,
    {
        Self {
            on_data: Box::new(on_data),
            on_error: Box::new(on_error),
        }
    }

    pub(crate) fn data(&self, data: ReadData) {
        (self.on_data)(data);
    }

    pub(crate) fn error(&self, error: Error) {
        (self.on_error)(error);
    }
}

impl fmt::Debug for ReadHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReadHandler").finish_non_exhaustive()
    }
}

// ============================================================================
// Lpu237
// ============================================================================

/// Device object driven by [`Lpu237Controller`](super::Lpu237Controller).
///
/// `generate_*` calls queue one or more request frames. The controller
/// peeks the front frame with [`get_tx_transaction`](Self::get_tx_transaction),
/// sends it, hands the reply to [`set_rx_transaction`](Self::set_rx_transaction)
/// and then calls [`set_from_rx`](Self::set_from_rx) which applies the pair
/// and drops it from the queue.
pub trait Lpu237: Send + 'static {
    /// Device path used to open the handle.
    fn path(&self) -> &str;

    /// Reader variant.
    fn device_type(&self) -> DeviceType;

    /// Handle issued by the server, [`DeviceIndex::UNDEFINED`] when closed.
    fn device_index(&self) -> DeviceIndex;

    /// Stores the handle.
    fn set_device_index(&mut self, device_index: DeviceIndex);

    /// Queues the system information requests.
    fn generate_get_system_information(&mut self) -> bool;

    /// Queues the parameter read requests.
    fn generate_get_parameters(&mut self, scope: ParameterScope) -> bool;

    /// Queues the parameter write requests.
    fn generate_set_parameters(&mut self) -> bool;

    /// Queues the OPOS read enable/disable requests.
    fn generate_enable_read(&mut self, enable: bool) -> bool;

    /// Queues the bootloader entry request.
    fn generate_run_bootloader(&mut self) -> bool;

    /// Number of request frames still queued.
    fn tx_transaction_count(&self) -> usize;

    /// Front request frame as hex, if any.
    fn get_tx_transaction(&self) -> Option<String>;

    /// Stores the hex reply for the front frame; `false` if it is malformed.
    fn set_rx_transaction(&mut self, rx: &str) -> bool;

    /// Applies the front request/reply pair and drops it; `false` on a
    /// negative response.
    fn set_from_rx(&mut self) -> bool;

    /// Drops every queued frame.
    fn clear_transaction(&mut self);

    /// Decodes an unsolicited card swipe report.
    fn set_msr_data_from_rx(&mut self, rx: &str) -> bool;

    /// Decodes an unsolicited iButton report.
    fn set_ibutton_data_from_rx(&mut self, rx: &str) -> bool;

    /// Takes the last decoded read.
    fn take_read_data(&mut self) -> Option<ReadData>;
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_type_from_str() {
        assert_eq!(DeviceType::from_type_str("MSR"), DeviceType::Msr);
        assert_eq!(DeviceType::from_type_str("ibutton"), DeviceType::IButton);
        assert_eq!(
            DeviceType::from_type_str("compositive_ibutton"),
            DeviceType::CompositeIButton
        );
        assert_eq!(DeviceType::from_type_str("scanner"), DeviceType::Unknown);
    }

    #[test]
    fn test_shared_only_for_composite() {
        assert!(DeviceType::CompositeIButton.is_shared());
        assert!(!DeviceType::IButton.is_shared());
        assert!(DeviceType::CompositeIButton.is_ibutton());
        assert!(!DeviceType::Msr.is_ibutton());
    }

    #[test]
    fn test_msr_clean() {
        let mut data = MsrData::default();
        assert!(data.is_clean());
        data.errors[1] = -3;
        assert!(!data.is_clean());
    }
}
