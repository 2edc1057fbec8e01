//! WebSocket connection and event loop.
//!
//! This module handles the WebSocket connection to the coffee server,
//! including request/reply correlation and system-event routing.
//!
//! # Event Loop
//!
//! The connection spawns a tokio task that handles:
//!
//! - Incoming packets from the server (replies, system events)
//! - Outgoing requests from the client API
//! - Reply correlation by channel, oldest request first
//! - System event handler callbacks
//!
//! The pending-request registry is only mutated inside the event loop or
//! under a short lock that is never held across an `.await`.

// ============================================================================
// Imports
// ============================================================================

use std::sync::Arc;

use futures_util::stream::SplitSink;
use futures_util::{SinkExt, StreamExt};
use parking_lot::Mutex;
use tokio::net::TcpStream;
use tokio::sync::{mpsc, oneshot};
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::tungstenite::client::IntoClientRequest;
use tokio_tungstenite::tungstenite::http::HeaderValue;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};
use tracing::{debug, error, trace, warn};

use crate::error::{Error, Result};
use crate::identifiers::{DeviceIndex, SessionNumber};
use crate::protocol::{ActionCode, Packet, SystemEvent};
use crate::queue::MapOfQueue;

use super::pending::{Outcome, Pending};

// ============================================================================
// Constants
// ============================================================================

/// WebSocket sub-protocol announced on the upgrade request.
pub const SUB_PROTOCOL: &str = "elpusk.protocol.coffee.manager";

// ============================================================================
// Types
// ============================================================================

/// Pending requests keyed by channel.
pub(crate) type Registry = MapOfQueue<DeviceIndex, Pending>;

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

type WsWrite = SplitSink<WsStream, Message>;

/// System event handler callback type.
///
/// Called on the event loop for every `request_type = "S"` packet. The
/// handler runs without any client lock held and may replace itself.
pub type SystemEventHandler = Arc<dyn Fn(SystemEvent) + Send + Sync>;

/// Called once when the event loop ends; the flag is `true` on transport error.
pub(crate) type CloseHook = Box<dyn FnOnce(bool) + Send>;

// ============================================================================
// ConnectionCommand
// ============================================================================

/// Internal commands for the event loop.
enum ConnectionCommand {
    /// Register a pending record and write its packet.
    Send { packet: Packet, pending: Pending },
    /// Close the socket; the record resolves on loop exit.
    Close {
        responder: oneshot::Sender<Result<Option<SessionNumber>>>,
    },
}

// ============================================================================
// Shared
// ============================================================================

/// State shared between the API handles and the event loop.
struct Shared {
    /// Pending-request registry.
    registry: Mutex<Registry>,
    /// Session number from the connect handshake.
    session: Mutex<Option<SessionNumber>>,
    /// System event handler.
    event_handler: Arc<Mutex<Option<SystemEventHandler>>>,
}

// ============================================================================
// Connection
// ============================================================================

/// WebSocket connection to the coffee server.
///
/// Handles reply correlation and system-event routing.
/// The connection spawns an internal event loop task.
///
/// # Thread Safety
///
/// `Connection` is `Send + Sync` and can be shared across tasks.
#[derive(Clone)]
pub struct Connection {
    /// Channel for sending commands to the event loop.
    command_tx: mpsc::UnboundedSender<ConnectionCommand>,
    /// Shared with the event loop.
    shared: Arc<Shared>,
}

impl Connection {
    /// Opens the WebSocket and spawns the event loop.
    ///
    /// The returned receiver resolves with the session number carried by the
    /// first message the server sends.
    ///
    /// # Errors
    ///
    /// - [`Error::WebSocket`] if the handshake fails
    pub(crate) async fn open(
        url: &str,
        event_handler: Arc<Mutex<Option<SystemEventHandler>>>,
        on_close: CloseHook,
    ) -> Result<(Self, oneshot::Receiver<Result<SessionNumber>>)> {
        let mut request = url.into_client_request()?;
        request.headers_mut().insert(
            "Sec-WebSocket-Protocol",
            HeaderValue::from_static(SUB_PROTOCOL),
        );

        let (ws_stream, _) = connect_async(request).await?;
        debug!(url, "WebSocket connected");

        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (connect_tx, connect_rx) = oneshot::channel();

        let mut registry = Registry::new();
        registry.push(DeviceIndex::MANAGER, Pending::Connect(connect_tx));

        let shared = Arc::new(Shared {
            registry: Mutex::new(registry),
            session: Mutex::new(None),
            event_handler,
        });

        tokio::spawn(Self::run_event_loop(
            ws_stream,
            command_rx,
            Arc::clone(&shared),
            on_close,
        ));

        Ok((Self { command_tx, shared }, connect_rx))
    }

    /// Queues a request; the record is registered right before the write.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConnectionClosed`] if the event loop has stopped. The
    /// record is failed with the same error.
    pub(crate) fn send(&self, packet: Packet, pending: Pending) -> Result<()> {
        self.command_tx
            .send(ConnectionCommand::Send { packet, pending })
            .map_err(|e| {
                if let ConnectionCommand::Send { packet, pending } = e.0 {
                    pending.fail(packet.device_index, Error::ConnectionClosed);
                }
                Error::ConnectionClosed
            })
    }

    /// Closes the socket; resolves with the last session number once closed.
    pub(crate) fn close(&self) -> oneshot::Receiver<Result<Option<SessionNumber>>> {
        let (responder, rx) = oneshot::channel();
        if let Err(e) = self.command_tx.send(ConnectionCommand::Close { responder }) {
            if let ConnectionCommand::Close { responder } = e.0 {
                let _ = responder.send(Ok(None));
            }
        }
        rx
    }

    /// Returns `true` while the event loop is running.
    #[inline]
    #[must_use]
    pub fn is_open(&self) -> bool {
        !self.command_tx.is_closed()
    }

    /// Returns the session number, once the handshake completed.
    #[inline]
    #[must_use]
    pub fn session_number(&self) -> Option<SessionNumber> {
        *self.shared.session.lock()
    }

    /// Returns `true` if nothing is pending on `device_index`.
    #[must_use]
    pub fn is_idle(&self, device_index: DeviceIndex) -> bool {
        self.shared.registry.lock().is_empty(device_index)
    }

    /// Returns the number of pending requests across all channels.
    #[inline]
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.shared.registry.lock().total()
    }

    /// Event loop that handles WebSocket I/O.
    async fn run_event_loop(
        ws_stream: WsStream,
        mut command_rx: mpsc::UnboundedReceiver<ConnectionCommand>,
        shared: Arc<Shared>,
        on_close: CloseHook,
    ) {
        let (mut ws_write, mut ws_read) = ws_stream.split();
        let mut failure: Option<String> = None;

        loop {
            tokio::select! {
                // Incoming packets from the server
                message = ws_read.next() => {
                    match message {
                        Some(Ok(Message::Text(text))) => {
                            Self::handle_incoming_message(&text, &shared);
                        }

                        Some(Ok(Message::Close(_))) => {
                            debug!("WebSocket closed by server");
                            break;
                        }

                        Some(Err(e)) => {
                            error!(error = %e, "WebSocket error");
                            failure = Some(e.to_string());
                            break;
                        }

                        None => {
                            debug!("WebSocket stream ended");
                            break;
                        }

                        // Ignore Binary, Ping, Pong
                        _ => {}
                    }
                }

                // Requests from the client API
                command = command_rx.recv() => {
                    match command {
                        Some(ConnectionCommand::Send { packet, pending }) => {
                            if let Err(e) = Self::handle_send_command(
                                packet,
                                pending,
                                &mut ws_write,
                                &shared,
                            ).await {
                                error!(error = %e, "WebSocket write failed");
                                failure = Some(e.to_string());
                                break;
                            }
                        }

                        Some(ConnectionCommand::Close { responder }) => {
                            debug!("Close requested");
                            shared
                                .registry
                                .lock()
                                .push(DeviceIndex::MANAGER, Pending::Disconnect(responder));
                            let _ = ws_write.close().await;
                            break;
                        }

                        None => {
                            debug!("Command channel closed");
                            break;
                        }
                    }
                }
            }
        }

        command_rx.close();
        let is_error = failure.is_some();
        Self::fail_pending_requests(&shared, failure);
        on_close(is_error);

        debug!("Event loop terminated");
    }

    /// Routes one incoming text frame.
    fn handle_incoming_message(text: &str, shared: &Shared) {
        let packet = match Packet::from_json(text) {
            Ok(packet) => packet,
            Err(e) => {
                warn!(error = %e, text = %text, "Failed to parse incoming packet");
                return;
            }
        };

        if packet.is_system_event() {
            let event = SystemEvent::from_packet(packet);
            trace!(action = %event.action, "System event");
            let handler = shared.event_handler.lock().clone();
            if let Some(handler) = handler {
                handler(event);
            }
            return;
        }

        let channel = Self::reply_channel(&packet);
        let Some(pending) = shared.registry.lock().front(channel) else {
            warn!(%channel, action = %packet.action_code, "Reply for unknown request");
            return;
        };

        if let Pending::Connect(_) = pending {
            *shared.session.lock() = Some(packet.session_number);
        }

        // Completion runs without the registry lock: callbacks may issue requests.
        if let Outcome::Rearm(pending) = pending.complete(packet) {
            shared.registry.lock().push_front(channel, pending);
        }
    }

    /// Channel a reply belongs to.
    ///
    /// Open requests travel on the manager channel while their reply already
    /// names the new device handle.
    fn reply_channel(packet: &Packet) -> DeviceIndex {
        if packet.action_code == ActionCode::DeviceOpen {
            DeviceIndex::MANAGER
        } else {
            packet.device_index
        }
    }

    /// Registers the record and writes the packet.
    async fn handle_send_command(
        packet: Packet,
        pending: Pending,
        ws_write: &mut WsWrite,
        shared: &Shared,
    ) -> Result<()> {
        let device_index = packet.device_index;

        let json = match packet.to_json() {
            Ok(json) => json,
            Err(e) => {
                pending.fail(device_index, e);
                return Ok(());
            }
        };

        shared.registry.lock().push(device_index, pending);

        ws_write.send(Message::Text(json.into())).await?;

        trace!(%device_index, action = %packet.action_code, "Request sent");
        Ok(())
    }

    /// Fails every pending record; disconnect records resolve with the session.
    fn fail_pending_requests(shared: &Shared, failure: Option<String>) {
        let session = shared.session.lock().take();
        let pending = shared.registry.lock().drain();
        let count = pending.len();

        for (device_index, record) in pending {
            match record {
                Pending::Disconnect(tx) => {
                    let _ = tx.send(Ok(session));
                }
                record => {
                    let error = match &failure {
                        Some(message) => Error::connection(message.clone()),
                        None => Error::ConnectionClosed,
                    };
                    record.fail(device_index, error);
                }
            }
        }

        if count > 0 {
            debug!(count, "Failed pending requests on shutdown");
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_protocol() {
        assert_eq!(SUB_PROTOCOL, "elpusk.protocol.coffee.manager");
    }

    #[test]
    fn test_connection_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Connection>();
    }

    #[test]
    fn test_open_reply_routes_to_manager() {
        let session = SessionNumber::new(7);
        let open = Packet::device(session, DeviceIndex::new(3), ActionCode::DeviceOpen);
        assert_eq!(Connection::reply_channel(&open), DeviceIndex::MANAGER);

        let send = Packet::device(session, DeviceIndex::new(3), ActionCode::DeviceSend);
        assert_eq!(Connection::reply_channel(&send), DeviceIndex::new(3));
    }

    #[test]
    fn test_event_handler_may_clear_itself() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        use crate::protocol::RequestType;

        let slot: Arc<Mutex<Option<SystemEventHandler>>> = Arc::new(Mutex::new(None));
        let calls = Arc::new(AtomicUsize::new(0));
        let (own_slot, own_calls) = (Arc::clone(&slot), Arc::clone(&calls));
        *slot.lock() = Some(Arc::new(move |_| {
            own_calls.fetch_add(1, Ordering::SeqCst);
            *own_slot.lock() = None;
        }));

        let shared = Shared {
            registry: Mutex::new(Registry::new()),
            session: Mutex::new(None),
            event_handler: Arc::clone(&slot),
        };
        let event = Packet {
            request_type: RequestType::System,
            ..Packet::manager(SessionNumber::new(7), ActionCode::DevicePlugIn)
        }
        .with_strings(["P", "hid#vid_134b"]);
        let text = event.to_json().expect("serialize");

        Connection::handle_incoming_message(&text, &shared);
        Connection::handle_incoming_message(&text, &shared);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(slot.lock().is_none());
    }

    #[tokio::test]
    async fn test_open_refused() {
        let handler = Arc::new(Mutex::new(None));
        let result = Connection::open("ws://127.0.0.1:1", handler, Box::new(|_| {})).await;
        assert!(result.is_err());
    }
}
