//! Per-device transaction controller.
//!
//! [`Lpu237Controller`] runs business operations (parameter load/save,
//! bootloader entry, card and iButton reads) against one device. Each
//! operation is an async sequence: the controller sends the front request
//! frame of the device object, waits for its reply, feeds the reply back,
//! and repeats while frames remain. Streaming reads run on a spawned task
//! that re-arms a receive after every report until the read is disabled.
//!
//! Locks on the device object and the transaction book are never held
//! across an `.await` or while a user callback runs.

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{debug, trace, warn};

use crate::client::Client;
use crate::error::{Error, Result};
use crate::identifiers::DeviceIndex;
use crate::protocol::{DataField, DataStatus};

use super::device::{DeviceType, Lpu237, MsrData, ParameterScope, ReadData, ReadHandler, ReadKind};
use super::state::{
    Action, Frame, FrameContext, TransactionBook, TransactionKind, TransactionState, Transaction,
    Waiter, transition,
};

// ============================================================================
// Types
// ============================================================================

/// Progress callback, called with `(current, total)` after each stage.
pub type Progress<'a> = &'a mut (dyn FnMut(usize, usize) + Send);

/// One `generate_*` call of a sequence.
#[derive(Debug, Clone, Copy)]
enum Step {
    SystemInformation,
    Parameters(ParameterScope),
    SetParameters,
    Bootloader,
}

/// Stage counter for progress reporting.
struct Stages<'a> {
    current: usize,
    on_progress: Option<Progress<'a>>,
}

impl<'a> Stages<'a> {
    fn new(on_progress: Option<Progress<'a>>) -> Self {
        Self {
            current: 0,
            on_progress,
        }
    }

    /// Counts one finished stage; `remaining` frames are still queued.
    fn complete(&mut self, remaining: usize) {
        self.current += 1;
        if let Some(on_progress) = self.on_progress.as_mut() {
            on_progress(self.current, self.current + remaining);
        }
    }
}

struct Inner<D> {
    client: Client,
    device: Mutex<D>,
    reader: Mutex<Option<JoinHandle<()>>>,
}

// ============================================================================
// Lpu237Controller
// ============================================================================

/// Drives one LPU237 device through a [`Client`].
///
/// Cloning is cheap; clones control the same device.
///
/// # Example
///
/// ```ignore
/// let controller = Lpu237Controller::new(client.clone(), device);
/// controller.open().await?;
/// controller.load_all_parameters(None).await?;
///
/// let card = controller.read_card_once().await?;
/// println!("{:?}", card.tracks);
///
/// controller.close().await?;
/// ```
pub struct Lpu237Controller<D: Lpu237> {
    inner: Arc<Inner<D>>,
}

impl<D: Lpu237> Clone for Lpu237Controller<D> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<D: Lpu237> fmt::Debug for Lpu237Controller<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lpu237Controller")
            .field("device_index", &self.device_index())
            .field("state", &self.transaction_state())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Lpu237Controller - Constructor and Accessors
// ============================================================================

impl<D: Lpu237> Lpu237Controller<D> {
    /// Creates a controller; the device is not opened yet.
    #[must_use]
    pub fn new(client: Client, device: D) -> Self {
        Self {
            inner: Arc::new(Inner {
                client,
                device: Mutex::new(device),
                reader: Mutex::new(None),
            }),
        }
    }

    /// Returns the client the controller talks through.
    #[inline]
    #[must_use]
    pub fn client(&self) -> &Client {
        &self.inner.client
    }

    /// Returns the device handle, undefined while closed.
    #[must_use]
    pub fn device_index(&self) -> DeviceIndex {
        self.inner.device.lock().device_index()
    }

    /// Returns `true` once the handle is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        !self.device_index().is_undefined()
    }

    /// Returns the transaction state; devices never seen report `Idle`.
    #[must_use]
    pub fn transaction_state(&self) -> TransactionState {
        let device_index = self.device_index();
        self.stored_state(device_index)
    }

    /// Returns `true` if no business operation is queued.
    #[must_use]
    pub fn is_queue_empty(&self) -> bool {
        let device_index = self.device_index();
        self.book().lock().is_queue_empty(device_index)
    }

    /// Runs `f` with the device object (e.g. to read loaded parameters).
    pub fn with_device<R>(&self, f: impl FnOnce(&D) -> R) -> R {
        f(&self.inner.device.lock())
    }

    fn book(&self) -> &Arc<Mutex<TransactionBook>> {
        self.inner.client.book()
    }
}

// ============================================================================
// Lpu237Controller - Open / Close
// ============================================================================

impl<D: Lpu237> Lpu237Controller<D> {
    /// Opens the device handle; shared iff the device is a composite iButton.
    ///
    /// Returns the current handle when already open.
    ///
    /// # Errors
    ///
    /// - [`Error::NotConnected`] if the client has no session
    /// - [`Error::DeviceNotOpen`] if the server refuses the open
    pub async fn open(&self) -> Result<DeviceIndex> {
        if !self.inner.client.is_connected() {
            return Err(Error::NotConnected);
        }

        let (path, shared, current) = {
            let device = self.inner.device.lock();
            (
                device.path().to_string(),
                device.device_type().is_shared(),
                device.device_index(),
            )
        };
        if !current.is_undefined() {
            return Ok(current);
        }

        let device_index = self.inner.client.device_open(&path, shared).await?;
        if device_index.is_undefined() {
            return Err(Error::device_not_open(path));
        }

        self.inner.device.lock().set_device_index(device_index);
        self.book().lock().state_or_idle(device_index);
        debug!(%device_index, path, shared, "Controller opened device");
        Ok(device_index)
    }

    /// Closes the handle and forgets its transactions. A no-op when closed.
    ///
    /// # Errors
    ///
    /// Returns the server error of the close request; local state is cleared
    /// either way.
    pub async fn close(&self) -> Result<()> {
        let device_index = self.device_index();
        if device_index.is_undefined() {
            return Ok(());
        }

        let reading = {
            let book = self.book().lock();
            match book.get(device_index).map(|t| t.kind) {
                Some(TransactionKind::Read(kind))
                    if book.state(device_index) == Some(TransactionState::WaitReadData) =>
                {
                    Some(kind)
                }
                _ => None,
            }
        };
        if let Some(kind) = reading
            && self.inner.client.is_connected()
            && let Err(e) = self.stop_read(kind).await
        {
            debug!(%device_index, error = %e, "Stopping read before close failed");
        }

        if let Some(reader) = self.inner.reader.lock().take() {
            reader.abort();
        }

        let waiters = self.book().lock().remove_device(device_index);
        for mut transaction in waiters {
            transaction.waiter.notify_error(Error::cancelled(device_index));
        }
        {
            let mut device = self.inner.device.lock();
            device.clear_transaction();
            device.set_device_index(DeviceIndex::UNDEFINED);
        }

        if self.inner.client.is_connected() {
            self.inner.client.device_close(device_index).await?;
        }
        debug!(%device_index, "Controller closed device");
        Ok(())
    }
}

// ============================================================================
// Lpu237Controller - Sequences
// ============================================================================

impl<D: Lpu237> Lpu237Controller<D> {
    /// Reads system information and then every parameter.
    ///
    /// # Errors
    ///
    /// - [`Error::NotConnected`] / [`Error::DeviceNotOpen`] on guard failure
    /// - [`Error::Busy`] if another operation is queued for the device
    /// - [`Error::DeviceResponse`] if the device rejects a frame
    pub async fn load_all_parameters(&self, progress: Option<Progress<'_>>) -> Result<()> {
        let steps = [
            Step::SystemInformation,
            Step::Parameters(ParameterScope::All),
        ];
        self.run_sequence(TransactionKind::LoadParameters, &steps, progress)
            .await
    }

    /// Reads system information and the minimal parameter set.
    ///
    /// # Errors
    ///
    /// Same as [`load_all_parameters`](Self::load_all_parameters).
    pub async fn load_min_parameters(&self, progress: Option<Progress<'_>>) -> Result<()> {
        let steps = [
            Step::SystemInformation,
            Step::Parameters(ParameterScope::Min),
        ];
        self.run_sequence(TransactionKind::LoadParameters, &steps, progress)
            .await
    }

    /// Writes the parameters held by the device object.
    ///
    /// # Errors
    ///
    /// Same as [`load_all_parameters`](Self::load_all_parameters).
    pub async fn save_parameters(&self, progress: Option<Progress<'_>>) -> Result<()> {
        self.run_sequence(TransactionKind::SaveParameters, &[Step::SetParameters], progress)
            .await
    }

    /// Switches the device into its bootloader.
    ///
    /// # Errors
    ///
    /// Same as [`load_all_parameters`](Self::load_all_parameters).
    pub async fn run_bootloader(&self) -> Result<()> {
        self.run_sequence(TransactionKind::RunBootloader, &[Step::Bootloader], None)
            .await
    }

    async fn run_sequence(
        &self,
        kind: TransactionKind,
        steps: &[Step],
        progress: Option<Progress<'_>>,
    ) -> Result<()> {
        let device_index = self.admit(Transaction::promise(kind))?;
        debug!(%device_index, ?kind, "Sequence started");

        let mut stages = Stages::new(progress);
        for &step in steps {
            let queued = {
                let mut device = self.inner.device.lock();
                match step {
                    Step::SystemInformation => device.generate_get_system_information(),
                    Step::Parameters(scope) => device.generate_get_parameters(scope),
                    Step::SetParameters => device.generate_set_parameters(),
                    Step::Bootloader => device.generate_run_bootloader(),
                }
            };
            if !queued {
                let message = format!("cannot build {step:?} request");
                self.notify_all(device_index, &message);
                return Err(Error::device_response(message));
            }
            self.drive(device_index, false, &mut stages).await?;
        }

        self.finish(device_index);
        debug!(%device_index, ?kind, stages = stages.current, "Sequence completed");
        Ok(())
    }

    /// Sends queued frames until the device has none left.
    ///
    /// Returns [`Action::Receive`] when `read_operation` and
    /// [`Action::Complete`] otherwise.
    async fn drive(
        &self,
        device_index: DeviceIndex,
        read_operation: bool,
        stages: &mut Stages<'_>,
    ) -> Result<Action> {
        loop {
            let tx = self.inner.device.lock().get_tx_transaction();
            let Some(tx) = tx else {
                let (action, next) = if read_operation {
                    (Action::Receive, TransactionState::WaitReadData)
                } else {
                    (Action::Complete, TransactionState::Idle)
                };
                self.set_state(device_index, next);
                return Ok(action);
            };

            self.set_state(device_index, TransactionState::WaitResponse);
            let field = match self
                .inner
                .client
                .device_transmit(device_index, 0, 0, &tx)
                .await
            {
                Ok(field) => field,
                Err(e) => return Err(self.abort(device_index, e)),
            };

            let frame = self.apply_response(&field);
            let remaining = self.inner.device.lock().tx_transaction_count();
            let ctx = self.context(device_index, read_operation, remaining > 0);
            let state = self.stored_state(device_index);
            let step = transition(state, frame, &ctx);
            self.set_state(device_index, step.next);
            trace!(%device_index, %state, ?frame, action = ?step.action, "Response frame");

            match step.action {
                Action::TransmitNext => stages.complete(remaining),
                Action::Complete | Action::Receive => {
                    stages.complete(remaining);
                    return Ok(step.action);
                }
                _ => {
                    self.inner.device.lock().clear_transaction();
                    let message = format!("device rejected request {tx}");
                    self.notify_all(device_index, &message);
                    return Err(Error::device_response(message));
                }
            }
        }
    }
}

// ============================================================================
// Lpu237Controller - Reads
// ============================================================================

impl<D: Lpu237> Lpu237Controller<D> {
    /// Enables or disables streaming card reads.
    ///
    /// While enabled every swipe goes to `handler`. Enabling while already
    /// reading is a no-op; disabling cancels the read and delivers one
    /// [`Error::Cancelled`] to the active handler. `handler` is only used
    /// when enabling.
    ///
    /// # Errors
    ///
    /// - [`Error::UnsupportedDevice`] if the device has no card reader
    /// - [`Error::Busy`] if another operation is queued for the device
    pub async fn read_card(&self, enable: bool, handler: ReadHandler) -> Result<()> {
        self.read(ReadKind::Msr, enable, handler).await
    }

    /// Enables or disables streaming iButton reads.
    ///
    /// # Errors
    ///
    /// Same as [`read_card`](Self::read_card).
    pub async fn read_ibutton(&self, enable: bool, handler: ReadHandler) -> Result<()> {
        self.read(ReadKind::IButton, enable, handler).await
    }

    /// Waits for exactly one card swipe.
    ///
    /// Read reporting is switched off again before the swipe is returned.
    ///
    /// # Errors
    ///
    /// - [`Error::Cancelled`] if the read is disabled or the device closed
    /// - otherwise same as [`read_card`](Self::read_card)
    pub async fn read_card_once(&self) -> Result<MsrData> {
        match self.read_once(ReadKind::Msr).await? {
            ReadData::Msr(data) => Ok(data),
            ReadData::IButton(_) => Err(Error::device_response("expected card data")),
        }
    }

    /// Waits for exactly one iButton touch and returns its key id.
    ///
    /// # Errors
    ///
    /// Same as [`read_card_once`](Self::read_card_once).
    pub async fn read_ibutton_once(&self) -> Result<String> {
        match self.read_once(ReadKind::IButton).await? {
            ReadData::IButton(key) => Ok(key),
            ReadData::Msr(_) => Err(Error::device_response("expected iButton data")),
        }
    }

    async fn read(&self, kind: ReadKind, enable: bool, handler: ReadHandler) -> Result<()> {
        if enable {
            self.start_read(kind, Waiter::Stream(Arc::new(handler)))
                .await
        } else {
            self.stop_read(kind).await
        }
    }

    async fn read_once(&self, kind: ReadKind) -> Result<ReadData> {
        let (tx, rx) = oneshot::channel();
        self.start_read(kind, Waiter::Once(Some(tx))).await?;
        let device_index = self.device_index();
        rx.await.map_err(|_| Error::cancelled(device_index))?
    }

    /// Resets the device with a cancel, then arms the read.
    async fn start_read(&self, kind: ReadKind, waiter: Waiter) -> Result<()> {
        let device_index = self.guard()?;
        self.check_read_kind(kind)?;

        {
            let mut book = self.book().lock();
            let state = book.state_or_idle(device_index);
            if state == TransactionState::WaitReadData
                && matches!(waiter, Waiter::Stream(_))
                && book
                    .get(device_index)
                    .is_some_and(|t| t.kind == TransactionKind::Read(kind))
            {
                trace!(%device_index, "Read already enabled");
                return Ok(());
            }
            if !book.is_queue_empty(device_index) {
                return Err(Error::busy(device_index));
            }
            book.push(device_index, Transaction::read(kind, waiter));
            book.set_state(device_index, TransactionState::WaitCancel);
        }

        debug!(%device_index, ?kind, "Arming read");
        let ack = self.inner.client.device_cancel(device_index, 0, 0).await;
        self.after_cancel(device_index, kind, ack).await
    }

    /// Marks the read as stopped and cancels it.
    async fn stop_read(&self, kind: ReadKind) -> Result<()> {
        let device_index = self.guard()?;

        // Cleared and cancelled under one lock: the reader re-arms under the
        // same lock, so its receive never goes out after this cancel.
        let sent = {
            let mut book = self.book().lock();
            match book.get_mut(device_index) {
                Some(t) if t.kind == TransactionKind::Read(kind) => t.read_requested = false,
                Some(_) => return Err(Error::busy(device_index)),
                None => return Ok(()),
            }
            self.inner.client.queue_cancel(device_index, 0, 0)
        };

        debug!(%device_index, ?kind, "Disabling read");
        let ack = match sent {
            Ok(reply) => self.inner.client.wait(device_index, reply).await,
            Err(e) => Err(e),
        };

        // The outstanding receive is answered before the cancel.
        let reader = self.inner.reader.lock().take();
        if let Some(reader) = reader {
            let _ = reader.await;
        }

        if self.stored_state(device_index) == TransactionState::WaitCancel {
            self.after_cancel(device_index, kind, ack).await
        } else {
            ack.map(|_| ())
        }
    }

    /// Handles the cancel acknowledgement.
    async fn after_cancel(
        &self,
        device_index: DeviceIndex,
        kind: ReadKind,
        ack: Result<DataField>,
    ) -> Result<()> {
        let field = match ack {
            Ok(field) => field,
            Err(e) => return Err(self.abort(device_index, e)),
        };
        let frame = match field.status() {
            DataStatus::Success | DataStatus::Cancel => Frame::Valid,
            _ => Frame::Invalid,
        };

        let ctx = self.context(device_index, false, false);
        let step = transition(self.stored_state(device_index), frame, &ctx);
        self.set_state(device_index, step.next);
        trace!(%device_index, ?frame, action = ?step.action, "Cancel acknowledged");

        match step.action {
            Action::SwitchOpos => {
                let enable = ctx.read_requested;
                if !self.inner.device.lock().generate_enable_read(enable) {
                    let message = "cannot build OPOS request";
                    self.notify_all(device_index, message);
                    return Err(Error::device_response(message));
                }
                let mut stages = Stages::new(None);
                match self.drive(device_index, enable, &mut stages).await? {
                    Action::Receive => self.spawn_reader(device_index, kind),
                    _ => self.finish(device_index),
                }
                Ok(())
            }
            Action::Receive => {
                self.spawn_reader(device_index, kind);
                Ok(())
            }
            Action::Complete => {
                self.finish(device_index);
                Ok(())
            }
            _ => {
                let message = format!("cancel not acknowledged: {:?}", field.first());
                self.notify_all(device_index, &message);
                Err(Error::device_response(message))
            }
        }
    }

    /// Ends a one-shot read: card readers stop reporting first, then the
    /// waiter gets its data with the device back in `Idle`.
    async fn finish_once(&self, device_index: DeviceIndex, kind: ReadKind, data: ReadData) {
        let waiter = {
            let mut book = self.book().lock();
            book.get_mut(device_index)
                .map(|t| std::mem::replace(&mut t.waiter, Waiter::Promise))
        };

        if kind == ReadKind::Msr {
            self.set_state(device_index, TransactionState::WaitResponse);
            let queued = self.inner.device.lock().generate_enable_read(false);
            if queued {
                let mut stages = Stages::new(None);
                match self.drive(device_index, false, &mut stages).await {
                    Ok(_) => self.finish(device_index),
                    Err(e) => debug!(%device_index, error = %e, "Disabling read after swipe failed"),
                }
            } else {
                self.notify_all(device_index, "cannot build OPOS request");
            }
        } else {
            self.finish(device_index);
        }

        if let Some(mut waiter) = waiter {
            waiter.deliver(data);
        }
    }

    fn spawn_reader(&self, device_index: DeviceIndex, kind: ReadKind) {
        let controller = self.clone();
        let handle = tokio::spawn(async move { controller.read_loop(device_index, kind).await });
        if let Some(previous) = self.inner.reader.lock().replace(handle) {
            previous.abort();
        }
        debug!(%device_index, ?kind, "Reader started");
    }

    /// Receives read reports until the transaction leaves `WaitReadData`.
    ///
    /// A read disabled before the next receive goes out ends as if the
    /// server had cancelled it.
    async fn read_loop(&self, device_index: DeviceIndex, kind: ReadKind) {
        loop {
            let armed = {
                let book = self.book().lock();
                match book.get(device_index) {
                    None => return,
                    Some(t) if !t.read_requested => None,
                    Some(_) => Some(self.inner.client.queue_receive(device_index, 0)),
                }
            };

            let frame = match armed {
                None => {
                    trace!(%device_index, "Read disabled before re-arm");
                    Frame::Cancel
                }
                Some(sent) => {
                    let reply = match sent {
                        Ok(reply) => self.inner.client.wait(device_index, reply).await,
                        Err(e) => Err(e),
                    };
                    match reply {
                        Ok(field) => self.apply_read(kind, &field),
                        Err(e) if e.is_connection_error() => {
                            self.abort(device_index, e);
                            return;
                        }
                        Err(e) => {
                            warn!(%device_index, error = %e, "Receive failed");
                            Frame::Invalid
                        }
                    }
                }
            };

            let ctx = self.context(device_index, true, false);
            let state = self.stored_state(device_index);
            let step = transition(state, frame, &ctx);
            self.set_state(device_index, step.next);
            trace!(%device_index, %state, ?frame, action = ?step.action, "Read frame");

            match step.action {
                Action::Deliver { rearm } => {
                    let Some(data) = self.inner.device.lock().take_read_data() else {
                        self.notify_all(device_index, "read report without data");
                        return;
                    };
                    if step.next == TransactionState::Idle {
                        self.finish_once(device_index, kind, data).await;
                        return;
                    }
                    if let Some(handler) = self.stream_handler(device_index) {
                        handler.data(data);
                    }
                    if !rearm {
                        return;
                    }
                }
                Action::NotifyFrontError => {
                    let once = {
                        let mut book = self.book().lock();
                        match book.get_mut(device_index).map(|t| &mut t.waiter) {
                            Some(Waiter::Once(tx)) => tx.take(),
                            _ => None,
                        }
                    };
                    if let Some(tx) = once {
                        let _ = tx.send(Err(Error::cancelled(device_index)));
                    } else if let Some(handler) = self.stream_handler(device_index) {
                        handler.error(Error::cancelled(device_index));
                    }
                    return;
                }
                _ => {
                    self.notify_all(device_index, "unexpected read report");
                    return;
                }
            }
        }
    }
}

// ============================================================================
// Lpu237Controller - Internal
// ============================================================================

impl<D: Lpu237> Lpu237Controller<D> {
    /// Checks the session and the handle.
    fn guard(&self) -> Result<DeviceIndex> {
        if !self.inner.client.is_connected() {
            return Err(Error::NotConnected);
        }
        let device = self.inner.device.lock();
        let device_index = device.device_index();
        if device_index.is_undefined() {
            return Err(Error::device_not_open(device.path()));
        }
        Ok(device_index)
    }

    /// Queues a business operation if the device is free.
    fn admit(&self, transaction: Transaction) -> Result<DeviceIndex> {
        let device_index = self.guard()?;
        let mut book = self.book().lock();
        book.state_or_idle(device_index);
        if !book.is_queue_empty(device_index) {
            return Err(Error::busy(device_index));
        }
        book.push(device_index, transaction);
        book.set_state(device_index, TransactionState::WaitResponse);
        Ok(device_index)
    }

    fn check_read_kind(&self, kind: ReadKind) -> Result<()> {
        let device_type = self.inner.device.lock().device_type();
        let supported = match kind {
            ReadKind::Msr => device_type == DeviceType::Msr,
            ReadKind::IButton => device_type.is_ibutton(),
        };
        if supported {
            Ok(())
        } else {
            Err(Error::unsupported_device(device_type.to_string()))
        }
    }

    fn stored_state(&self, device_index: DeviceIndex) -> TransactionState {
        self.book().lock().state(device_index).unwrap_or_default()
    }

    fn set_state(&self, device_index: DeviceIndex, state: TransactionState) {
        self.book().lock().set_state(device_index, state);
    }

    fn context(&self, device_index: DeviceIndex, read_operation: bool, more_tx: bool) -> FrameContext {
        let device_type = self.inner.device.lock().device_type();
        let book = self.book().lock();
        let front = book.get(device_index);
        FrameContext {
            device_type,
            read_requested: front.is_some_and(|t| t.read_requested),
            read_operation,
            promise_mode: front.is_none_or(|t| t.waiter.is_promise_mode()),
            more_tx,
        }
    }

    fn stream_handler(&self, device_index: DeviceIndex) -> Option<Arc<ReadHandler>> {
        match self.book().lock().get(device_index).map(|t| &t.waiter) {
            Some(Waiter::Stream(handler)) => Some(Arc::clone(handler)),
            _ => None,
        }
    }

    /// Feeds a response frame to the device object.
    fn apply_response(&self, field: &DataField) -> Frame {
        if field.status() == DataStatus::Cancel {
            return Frame::Cancel;
        }
        let Some(rx) = field.as_text() else {
            return Frame::Invalid;
        };
        let mut device = self.inner.device.lock();
        if device.set_rx_transaction(rx) && device.set_from_rx() {
            Frame::Valid
        } else {
            Frame::Invalid
        }
    }

    /// Feeds an unsolicited read report to the device object.
    fn apply_read(&self, kind: ReadKind, field: &DataField) -> Frame {
        if field.status() == DataStatus::Cancel {
            return Frame::Cancel;
        }
        let Some(rx) = field.as_text() else {
            return Frame::Invalid;
        };
        let mut device = self.inner.device.lock();
        let parsed = match kind {
            ReadKind::Msr => device.set_msr_data_from_rx(rx),
            ReadKind::IButton => device.set_ibutton_data_from_rx(rx),
        };
        if parsed { Frame::Valid } else { Frame::Invalid }
    }

    /// Drops the front transaction and returns to `Idle`.
    fn finish(&self, device_index: DeviceIndex) {
        let finished = {
            let mut book = self.book().lock();
            book.set_state(device_index, TransactionState::Idle);
            book.front(device_index)
        };
        if let Some(transaction) = finished {
            trace!(%device_index, kind = ?transaction.kind, "Transaction finished");
        }
    }

    /// Fails and drops every transaction of the device, back to `Idle`.
    fn notify_all(&self, device_index: DeviceIndex, message: &str) {
        let waiters = {
            let mut book = self.book().lock();
            book.set_state(device_index, TransactionState::Idle);
            book.take_all(device_index)
        };
        warn!(%device_index, count = waiters.len(), reason = message, "Failing device transactions");
        for mut transaction in waiters {
            transaction
                .waiter
                .notify_error(Error::device_response(message));
        }
    }

    /// Handles a failed request; transport failures forget the device state.
    fn abort(&self, device_index: DeviceIndex, error: Error) -> Error {
        self.inner.device.lock().clear_transaction();

        if error.is_connection_error() {
            let waiters = self.book().lock().remove_device(device_index);
            for mut transaction in waiters {
                transaction.waiter.notify_error(Error::ConnectionClosed);
            }
        } else {
            self.notify_all(device_index, &error.to_string());
        }
        error
    }
}
