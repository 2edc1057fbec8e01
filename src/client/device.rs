//! Device channel requests.
//!
//! Every request is keyed by the device index it targets. Promise forms are
//! `async` and return `Result`; the `_with_callback` twins return `false`
//! without touching the network when validation fails and report the reply
//! through [`Callbacks`] on the event loop otherwise.
//!
//! | Operation | Action | Ids |
//! |-----------|--------|-----|
//! | `device_send` | `s` | `out_id` |
//! | `device_receive` | `r` | `in_id` |
//! | `device_transmit` | `t` | `in_id`, `out_id` |
//! | `device_cancel` | `x` | `in_id`, `out_id` |

// ============================================================================
// Imports
// ============================================================================

use tokio::sync::oneshot;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::identifiers::DeviceIndex;
use crate::protocol::{ActionCode, DataField, Packet, validate_hex};
use crate::transport::pending::{Completion, Pending};
use crate::transport::Callbacks;

use super::core::Client;

// ============================================================================
// Types
// ============================================================================

/// Reply of a queued device request.
pub(crate) type Reply = oneshot::Receiver<Result<DataField>>;

// ============================================================================
// Constants
// ============================================================================

/// Marker appended to the open request for shared access.
const SHARE_MARKER: &str = "share";

// ============================================================================
// Client - Open / Close
// ============================================================================

impl Client {
    /// Opens a device by path.
    ///
    /// Resolves with the new device index, or [`DeviceIndex::UNDEFINED`] when
    /// the server refuses. With `shared`, `"::"` in the path becomes `":"`
    /// and the `"share"` marker is appended.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] if `path` is empty
    /// - [`Error::NotConnected`] if no session
    pub async fn device_open(&self, path: &str, shared: bool) -> Result<DeviceIndex> {
        if path.is_empty() {
            return Err(Error::invalid_argument("device path must not be empty"));
        }

        let packet = Packet::manager(self.session()?, ActionCode::DeviceOpen);
        let packet = if shared {
            packet.with_strings([path.replace("::", ":"), SHARE_MARKER.to_string()])
        } else {
            packet.with_text(path)
        };

        let device_index = self.request(packet, Pending::DeviceOpen).await?;
        debug!(path, shared, %device_index, "Device open");
        Ok(device_index)
    }

    /// Closes a device handle.
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownDeviceIndex`] if `device_index` is undefined
    /// - [`Error::NotConnected`] if no session
    /// - [`Error::ServerRejected`] if the server refuses
    pub async fn device_close(&self, device_index: DeviceIndex) -> Result<()> {
        check_index(device_index)?;
        let packet = Packet::device(self.session()?, device_index, ActionCode::DeviceClose);
        self.request(packet, Pending::DeviceClose).await?;
        debug!(%device_index, "Device closed");
        Ok(())
    }
}

// ============================================================================
// Client - I/O (promise form)
// ============================================================================

impl Client {
    /// Writes a hex payload to an output report.
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownDeviceIndex`] / [`Error::UnknownOutId`] on bad input
    /// - [`Error::InvalidArgument`] if `hex` is not a hex string
    /// - [`Error::NotConnected`] if no session
    pub async fn device_send(
        &self,
        device_index: DeviceIndex,
        out_id: u32,
        hex: &str,
    ) -> Result<DataField> {
        let packet = self.send_packet(device_index, out_id, hex)?;
        self.device_io(packet).await
    }

    /// Reads one input report.
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownDeviceIndex`] / [`Error::UnknownInId`] on bad input
    /// - [`Error::NotConnected`] if no session
    pub async fn device_receive(&self, device_index: DeviceIndex, in_id: u32) -> Result<DataField> {
        let packet = self.receive_packet(device_index, in_id)?;
        self.device_io(packet).await
    }

    /// Writes a hex payload and reads the response report.
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownDeviceIndex`], [`Error::UnknownInId`] or
    ///   [`Error::UnknownOutId`] on bad input
    /// - [`Error::NotConnected`] if no session
    pub async fn device_transmit(
        &self,
        device_index: DeviceIndex,
        in_id: u32,
        out_id: u32,
        hex: &str,
    ) -> Result<DataField> {
        let packet = self.transmit_packet(device_index, in_id, out_id, hex)?;
        self.device_io(packet).await
    }

    /// Cancels the outstanding read on the device.
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownDeviceIndex`], [`Error::UnknownInId`] or
    ///   [`Error::UnknownOutId`] on bad input
    /// - [`Error::NotConnected`] if no session
    pub async fn device_cancel(
        &self,
        device_index: DeviceIndex,
        in_id: u32,
        out_id: u32,
    ) -> Result<DataField> {
        let packet = self.cancel_packet(device_index, in_id, out_id)?;
        self.device_io(packet).await
    }
}

// ============================================================================
// Client - I/O (callback form)
// ============================================================================

impl Client {
    /// Callback form of [`device_send`](Self::device_send).
    pub fn device_send_with_callback(
        &self,
        device_index: DeviceIndex,
        out_id: u32,
        hex: &str,
        callbacks: Callbacks,
    ) -> bool {
        self.device_io_with_callback(self.send_packet(device_index, out_id, hex), callbacks)
    }

    /// Callback form of [`device_receive`](Self::device_receive).
    pub fn device_receive_with_callback(
        &self,
        device_index: DeviceIndex,
        in_id: u32,
        callbacks: Callbacks,
    ) -> bool {
        self.device_io_with_callback(self.receive_packet(device_index, in_id), callbacks)
    }

    /// Callback form of [`device_transmit`](Self::device_transmit).
    pub fn device_transmit_with_callback(
        &self,
        device_index: DeviceIndex,
        in_id: u32,
        out_id: u32,
        hex: &str,
        callbacks: Callbacks,
    ) -> bool {
        self.device_io_with_callback(
            self.transmit_packet(device_index, in_id, out_id, hex),
            callbacks,
        )
    }

    /// Callback form of [`device_cancel`](Self::device_cancel).
    pub fn device_cancel_with_callback(
        &self,
        device_index: DeviceIndex,
        in_id: u32,
        out_id: u32,
        callbacks: Callbacks,
    ) -> bool {
        self.device_io_with_callback(self.cancel_packet(device_index, in_id, out_id), callbacks)
    }
}

// ============================================================================
// Client - Internal
// ============================================================================

impl Client {
    async fn device_io(&self, packet: Packet) -> Result<DataField> {
        let device_index = packet.device_index;
        let reply = self.queue_device_io(packet)?;
        self.wait(device_index, reply).await
    }

    /// Queues a receive now; await the reply with [`Client::wait`].
    ///
    /// The packet is on the wire, in order, before this returns, so callers
    /// can decide and send under their own lock.
    pub(crate) fn queue_receive(&self, device_index: DeviceIndex, in_id: u32) -> Result<Reply> {
        self.queue_device_io(self.receive_packet(device_index, in_id)?)
    }

    /// Queues a cancel now; see [`queue_receive`](Self::queue_receive).
    pub(crate) fn queue_cancel(
        &self,
        device_index: DeviceIndex,
        in_id: u32,
        out_id: u32,
    ) -> Result<Reply> {
        self.queue_device_io(self.cancel_packet(device_index, in_id, out_id)?)
    }

    fn queue_device_io(&self, packet: Packet) -> Result<Reply> {
        let connection = self.connection()?;
        let action = packet.action_code;
        let (tx, rx) = oneshot::channel();
        connection.send(
            packet,
            Pending::DeviceIo {
                action,
                completion: Completion::Promise(tx),
            },
        )?;
        Ok(rx)
    }

    fn device_io_with_callback(&self, packet: Result<Packet>, callbacks: Callbacks) -> bool {
        let packet = match packet {
            Ok(packet) => packet,
            Err(e) => {
                debug!(error = %e, "Callback request refused");
                return false;
            }
        };
        let Ok(connection) = self.connection() else {
            return false;
        };

        let action = packet.action_code;
        let pending = Pending::DeviceIo {
            action,
            completion: Completion::Callback(callbacks),
        };
        match connection.send(packet, pending) {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, %action, "Callback request not sent");
                false
            }
        }
    }

    fn send_packet(&self, device_index: DeviceIndex, out_id: u32, hex: &str) -> Result<Packet> {
        check_index(device_index)?;
        let out_id = check_out_id(out_id)?;
        validate_hex(hex)?;
        Ok(
            Packet::device(self.session()?, device_index, ActionCode::DeviceSend)
                .with_ids(0, out_id)
                .with_hex(hex),
        )
    }

    fn receive_packet(&self, device_index: DeviceIndex, in_id: u32) -> Result<Packet> {
        check_index(device_index)?;
        let in_id = check_in_id(in_id)?;
        Ok(
            Packet::device(self.session()?, device_index, ActionCode::DeviceReceive)
                .with_ids(in_id, 0),
        )
    }

    fn transmit_packet(
        &self,
        device_index: DeviceIndex,
        in_id: u32,
        out_id: u32,
        hex: &str,
    ) -> Result<Packet> {
        check_index(device_index)?;
        let in_id = check_in_id(in_id)?;
        let out_id = check_out_id(out_id)?;
        validate_hex(hex)?;
        Ok(
            Packet::device(self.session()?, device_index, ActionCode::DeviceTransmit)
                .with_ids(in_id, out_id)
                .with_hex(hex),
        )
    }

    fn cancel_packet(&self, device_index: DeviceIndex, in_id: u32, out_id: u32) -> Result<Packet> {
        check_index(device_index)?;
        let in_id = check_in_id(in_id)?;
        let out_id = check_out_id(out_id)?;
        Ok(
            Packet::device(self.session()?, device_index, ActionCode::DeviceCancel)
                .with_ids(in_id, out_id),
        )
    }
}

// ============================================================================
// Validation
// ============================================================================

fn check_index(device_index: DeviceIndex) -> Result<()> {
    if device_index.is_undefined() {
        return Err(Error::unknown_device_index(device_index));
    }
    Ok(())
}

fn check_in_id(in_id: u32) -> Result<u8> {
    u8::try_from(in_id).map_err(|_| Error::UnknownInId { in_id })
}

fn check_out_id(out_id: u32) -> Result<u8> {
    u8::try_from(out_id).map_err(|_| Error::UnknownOutId { out_id })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use crate::client::ClientOptions;

    fn noop_callbacks() -> Callbacks {
        Callbacks::new(Box::new(|_, _| {}), Box::new(|_, _| {}))
    }

    #[test]
    fn test_report_id_range() {
        assert_eq!(check_in_id(0).expect("0"), 0);
        assert_eq!(check_out_id(255).expect("255"), 255);
        assert!(matches!(check_in_id(256), Err(Error::UnknownInId { in_id: 256 })));
        assert!(matches!(check_out_id(300), Err(Error::UnknownOutId { out_id: 300 })));
    }

    #[tokio::test]
    async fn test_undefined_index_rejected_before_connection_check() {
        let client = Client::new(ClientOptions::default());
        let result = client.device_send(DeviceIndex::UNDEFINED, 1, "ff00").await;
        assert!(matches!(result, Err(Error::UnknownDeviceIndex { .. })));

        let result = client.device_close(DeviceIndex::UNDEFINED).await;
        assert!(matches!(result, Err(Error::UnknownDeviceIndex { .. })));
    }

    #[tokio::test]
    async fn test_bad_ids_rejected() {
        let client = Client::new(ClientOptions::default());
        let index = DeviceIndex::new(5);
        assert!(matches!(
            client.device_receive(index, 256).await,
            Err(Error::UnknownInId { .. })
        ));
        assert!(matches!(
            client.device_transmit(index, 0, 999, "00").await,
            Err(Error::UnknownOutId { .. })
        ));
    }

    #[tokio::test]
    async fn test_empty_path_rejected() {
        let client = Client::new(ClientOptions::default());
        assert!(matches!(
            client.device_open("", false).await,
            Err(Error::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_callback_forms_refuse_without_session() {
        let client = Client::new(ClientOptions::default());
        let index = DeviceIndex::new(5);
        assert!(!client.device_send_with_callback(index, 1, "ff00", noop_callbacks()));
        assert!(!client.device_receive_with_callback(index, 0, noop_callbacks()));
        assert!(!client.device_cancel_with_callback(index, 0, 0, noop_callbacks()));
        assert!(!client.device_transmit_with_callback(
            DeviceIndex::UNDEFINED,
            0,
            0,
            "00",
            noop_callbacks()
        ));
    }
}
