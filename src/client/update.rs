//! Independent bootloader (firmware update) requests.
//!
//! The update runs server-side. `start` stays registered on the device
//! channel and reports each `["success", current, total]` stage until the
//! last one arrives.

// ============================================================================
// Imports
// ============================================================================

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::identifiers::DeviceIndex;
use crate::protocol::{Command, Packet, UpdateCommand};
use crate::transport::pending::{Pending, UpdateWatch};
use crate::transport::{Callbacks, DataCallback, ErrorCallback, ProgressCallback};

use super::core::Client;

// ============================================================================
// Client - Update
// ============================================================================

impl Client {
    /// Sets one update parameter (e.g. `"fw_file"`) for the device.
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownDeviceIndex`] if undefined
    /// - [`Error::NotConnected`] if no session
    /// - [`Error::ServerRejected`] if refused
    pub async fn device_update_set_parameter(
        &self,
        device_index: DeviceIndex,
        key: &str,
        value: &str,
    ) -> Result<()> {
        if device_index.is_undefined() {
            return Err(Error::unknown_device_index(device_index));
        }
        let command = UpdateCommand::SetParameter {
            key: key.into(),
            value: value.into(),
        };
        self.command_on(device_index, command.into()).await?;
        Ok(())
    }

    /// Starts the firmware update.
    ///
    /// `on_progress` runs for each intermediate stage, `on_complete` once on
    /// the final stage. Returns `false` without sending when not connected or
    /// the index is undefined.
    pub fn device_update_start_with_callback(
        &self,
        device_index: DeviceIndex,
        on_complete: DataCallback,
        on_progress: Option<ProgressCallback>,
        on_error: ErrorCallback,
    ) -> bool {
        if device_index.is_undefined() {
            return false;
        }
        let (Ok(connection), Ok(session)) = (self.connection(), self.session()) else {
            return false;
        };

        let command = Command::from(UpdateCommand::Start { device_index });
        let packet = Packet::device(session, device_index, command.action_code())
            .with_strings(command.to_data_field());
        let watch = UpdateWatch {
            callbacks: Callbacks::new(on_complete, on_error),
            on_progress,
        };

        match connection.send(packet, Pending::UpdateStart(watch)) {
            Ok(()) => {
                debug!(%device_index, "Update started");
                true
            }
            Err(e) => {
                warn!(%device_index, error = %e, "Update start not sent");
                false
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use crate::client::ClientOptions;

    #[test]
    fn test_start_refused_without_session() {
        let client = Client::new(ClientOptions::default());
        let started = client.device_update_start_with_callback(
            DeviceIndex::new(2),
            Box::new(|_, _| {}),
            None,
            Box::new(|_, _| {}),
        );
        assert!(!started);
    }

    #[tokio::test]
    async fn test_set_parameter_rejects_undefined_index() {
        let client = Client::new(ClientOptions::default());
        let result = client
            .device_update_set_parameter(DeviceIndex::UNDEFINED, "fw_file", "a.rom")
            .await;
        assert!(matches!(result, Err(Error::UnknownDeviceIndex { .. })));
    }
}
