//! Core Client struct, session lifecycle and manager requests.

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::oneshot;
use tokio::time::timeout;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::identifiers::{DeviceIndex, SessionNumber};
use crate::lpu237::TransactionBook;
use crate::protocol::{ActionCode, DataField, DataFieldType, Packet, SystemEvent, validate_hex};
use crate::transport::pending::{Pending, Responder};
use crate::transport::{Connection, SystemEventHandler};

use super::builder::ClientBuilder;
use super::options::ClientOptions;

// ============================================================================
// Types
// ============================================================================

/// Internal shared state for a client.
pub(crate) struct ClientInner {
    /// Connection options.
    options: ClientOptions,
    /// Current connection, if any.
    connection: Mutex<Option<Connection>>,
    /// Serializes concurrent `connect()` calls.
    connect_lock: tokio::sync::Mutex<()>,
    /// System event handler (shared with every connection).
    event_handler: Arc<Mutex<Option<SystemEventHandler>>>,
    /// Per-device transaction state used by device controllers.
    book: Arc<Mutex<TransactionBook>>,
}

// ============================================================================
// Client
// ============================================================================

/// A handle to one coffee server session.
///
/// The client owns the WebSocket connection, the pending-request registry
/// and the per-device transaction book. Cloning is cheap; all clones share
/// the same session.
///
/// # Example
///
/// ```no_run
/// use coffee_lpu237::Client;
///
/// # async fn example() -> coffee_lpu237::Result<()> {
/// let client = Client::builder().build()?;
/// let session = client.connect().await?;
/// println!("session {session}");
///
/// for path in client.device_list(None).await? {
///     println!("{path}");
/// }
///
/// client.disconnect().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    pub(crate) inner: Arc<ClientInner>,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("options", &self.inner.options)
            .field("session_number", &self.session_number())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Client - Constructor
// ============================================================================

impl Client {
    /// Creates a client that is not yet connected.
    #[must_use]
    pub fn new(options: ClientOptions) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                options,
                connection: Mutex::new(None),
                connect_lock: tokio::sync::Mutex::new(()),
                event_handler: Arc::new(Mutex::new(None)),
                book: Arc::new(Mutex::new(TransactionBook::default())),
            }),
        }
    }

    /// Creates a configuration builder.
    #[inline]
    #[must_use]
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }
}

// ============================================================================
// Client - Accessors
// ============================================================================

impl Client {
    /// Returns the connection options.
    #[inline]
    #[must_use]
    pub fn options(&self) -> &ClientOptions {
        &self.inner.options
    }

    /// Returns `true` while a session is established.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.open_connection().is_some()
    }

    /// Returns the server-assigned session number.
    #[must_use]
    pub fn session_number(&self) -> Option<SessionNumber> {
        self.open_connection()
            .and_then(|connection| connection.session_number())
    }

    /// Returns `true` if no request is outstanding on `device_index`.
    #[must_use]
    pub fn is_queue_empty(&self, device_index: DeviceIndex) -> bool {
        self.open_connection()
            .is_none_or(|connection| connection.is_idle(device_index))
    }

    /// Returns the per-device transaction book.
    #[inline]
    pub(crate) fn book(&self) -> &Arc<Mutex<TransactionBook>> {
        &self.inner.book
    }

    fn open_connection(&self) -> Option<Connection> {
        self.inner
            .connection
            .lock()
            .as_ref()
            .filter(|connection| connection.is_open())
            .cloned()
    }
}

// ============================================================================
// Client - Session
// ============================================================================

impl Client {
    /// Opens the WebSocket and waits for the server to assign a session.
    ///
    /// Returns the existing session number when already connected.
    ///
    /// # Errors
    ///
    /// - [`Error::Config`] if the options do not form a valid URL
    /// - [`Error::WebSocket`] if the handshake fails
    /// - [`Error::ConnectionClosed`] if the server closes before greeting
    pub async fn connect(&self) -> Result<SessionNumber> {
        let _guard = self.inner.connect_lock.lock().await;

        if let Some(session) = self.session_number() {
            debug!(%session, "Already connected");
            return Ok(session);
        }

        let url = self.inner.options.url()?;
        let book = Arc::clone(&self.inner.book);
        let on_close = Box::new(move |is_error: bool| {
            if is_error {
                warn!("Transport error, resetting every device transaction");
            }
            let transactions = book.lock().reset();
            for mut transaction in transactions {
                transaction.waiter.notify_error(Error::ConnectionClosed);
            }
        });

        let (connection, greeting) =
            Connection::open(&url, Arc::clone(&self.inner.event_handler), on_close).await?;
        *self.inner.connection.lock() = Some(connection);

        let session = self.wait(DeviceIndex::MANAGER, greeting).await?;
        info!(%session, url, "Connected to coffee server");
        Ok(session)
    }

    /// Closes the session.
    ///
    /// Resolves with the last session number once the socket is closed, or
    /// `None` immediately when not connected.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ChannelClosed`] if the event loop vanished.
    pub async fn disconnect(&self) -> Result<Option<SessionNumber>> {
        let Some(connection) = self.inner.connection.lock().take() else {
            return Ok(None);
        };
        if !connection.is_open() {
            return Ok(None);
        }

        let session = connection.close().await??;
        info!(session = ?session, "Disconnected");
        Ok(session)
    }

    /// Sets the handler for unsolicited system events.
    pub fn set_system_event_handler<F>(&self, handler: F)
    where
        F: Fn(SystemEvent) + Send + Sync + 'static,
    {
        *self.inner.event_handler.lock() = Some(Arc::new(handler));
    }

    /// Clears the system event handler.
    pub fn clear_system_event_handler(&self) {
        *self.inner.event_handler.lock() = None;
    }
}

// ============================================================================
// Client - Manager Requests
// ============================================================================

impl Client {
    /// Echoes a data field through the server.
    ///
    /// # Errors
    ///
    /// - [`Error::NotConnected`] if no session
    /// - [`Error::ActionMismatch`] if the reply is not an echo
    pub async fn echo(&self, field: DataField) -> Result<DataField> {
        let packet = Packet::manager(self.session()?, ActionCode::Echo)
            .with_data_field(DataFieldType::String, field);
        self.request(packet, Pending::Echo).await
    }

    /// Echoes a hex payload and returns the echoed text.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] if `hex` is not a hex-digit-pair string
    /// - [`Error::NotConnected`] if no session
    pub async fn echo_hex(&self, hex: &str) -> Result<String> {
        validate_hex(hex)?;
        let packet = Packet::manager(self.session()?, ActionCode::Echo).with_hex(hex);
        let field = self.request(packet, Pending::Echo).await?;
        field
            .as_text()
            .map(str::to_string)
            .ok_or_else(|| Error::invalid_data_field("empty echo"))
    }

    /// Echoes a plain string.
    ///
    /// # Errors
    ///
    /// - [`Error::NotConnected`] if no session
    pub async fn echo_string(&self, text: &str) -> Result<DataField> {
        let packet = Packet::manager(self.session()?, ActionCode::Echo).with_text(text);
        self.request(packet, Pending::Echo).await
    }

    /// Lists device paths, optionally filtered (e.g. `"hid#vid_134b"`).
    ///
    /// # Errors
    ///
    /// - [`Error::NotConnected`] if no session
    pub async fn device_list(&self, filter: Option<&str>) -> Result<Vec<String>> {
        let mut packet = Packet::manager(self.session()?, ActionCode::DeviceList);
        if let Some(filter) = filter {
            packet = packet.with_text(filter);
        }
        self.request(packet, Pending::DeviceList).await
    }

    /// Shows or hides the server control window.
    ///
    /// # Errors
    ///
    /// - [`Error::NotConnected`] if no session
    /// - [`Error::ServerRejected`] if the server refuses
    pub async fn control_show(&self, show: bool) -> Result<()> {
        let packet = Packet::manager(self.session()?, ActionCode::ControlShow)
            .with_text(if show { "show" } else { "hide" });
        self.request(packet, Pending::ControlShow).await
    }
}

// ============================================================================
// Client - Internal
// ============================================================================

impl Client {
    /// Returns the open connection or [`Error::NotConnected`].
    pub(crate) fn connection(&self) -> Result<Connection> {
        self.open_connection()
            .filter(|connection| connection.session_number().is_some())
            .ok_or(Error::NotConnected)
    }

    /// Returns the session number for outgoing packets.
    pub(crate) fn session(&self) -> Result<SessionNumber> {
        self.session_number().ok_or(Error::NotConnected)
    }

    /// Sends a request and waits for its typed reply.
    pub(crate) async fn request<T>(
        &self,
        packet: Packet,
        make_pending: impl FnOnce(Responder<T>) -> Pending,
    ) -> Result<T> {
        let connection = self.connection()?;
        let device_index = packet.device_index;
        let (tx, rx) = oneshot::channel();
        connection.send(packet, make_pending(tx))?;
        self.wait(device_index, rx).await
    }

    /// Waits on a reply channel, honoring the configured timeout.
    pub(crate) async fn wait<T>(
        &self,
        device_index: DeviceIndex,
        rx: oneshot::Receiver<Result<T>>,
    ) -> Result<T> {
        let Some(limit) = self.inner.options.request_timeout else {
            return rx.await?;
        };

        match timeout(limit, rx).await {
            Ok(reply) => reply?,
            Err(_) => {
                warn!(%device_index, timeout_ms = limit.as_millis() as u64, "Request timed out");
                Err(Error::request_timeout(device_index, limit.as_millis() as u64))
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

    #[test]
    fn test_client_is_clone_send_sync() {
        fn assert_traits<T: Clone + Send + Sync + fmt::Debug>() {}
        assert_traits::<Client>();
    }

    #[tokio::test]
    async fn test_requests_fail_when_not_connected() {
        let client = Client::new(ClientOptions::default());
        assert!(matches!(client.device_list(None).await, Err(Error::NotConnected)));
        assert!(matches!(client.echo_hex("a1b2").await, Err(Error::NotConnected)));
        assert!(matches!(client.control_show(true).await, Err(Error::NotConnected)));
    }

    #[tokio::test]
    async fn test_echo_hex_validates_before_io() {
        let client = Client::new(ClientOptions::default());
        assert!(matches!(
            client.echo_hex("xyz").await,
            Err(Error::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_disconnect_when_not_connected() {
        let client = Client::new(ClientOptions::default());
        let closed = tokio_test::block_on(client.disconnect());
        assert_eq!(tokio_test::assert_ok!(closed), None);
        assert!(client.session_number().is_none());
    }
}
