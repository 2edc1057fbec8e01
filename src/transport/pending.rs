//! Pending-request records.
//!
//! One record waits for exactly one reply on its channel. Each request kind
//! carries its own typed responder, so reply validation and conversion are
//! checked exhaustively by `match`.

// ============================================================================
// Imports
// ============================================================================

use std::fmt;

use tokio::sync::oneshot;
use tracing::{debug, trace, warn};

use crate::error::{Error, Result};
use crate::identifiers::{DeviceIndex, SessionNumber};
use crate::protocol::{ActionCode, DataField, DataStatus, Packet};

// ============================================================================
// Types
// ============================================================================

/// One-shot reply channel.
pub(crate) type Responder<T> = oneshot::Sender<Result<T>>;

/// Called with the reply data of a callback-mode request.
pub type DataCallback = Box<dyn FnMut(DeviceIndex, DataField) + Send>;

/// Called when a callback-mode request fails.
pub type ErrorCallback = Box<dyn FnMut(DeviceIndex, Error) + Send>;

/// Called with `(current, total)` for each intermediate update stage.
pub type ProgressCallback = Box<dyn FnMut(DeviceIndex, usize, usize) + Send>;

// ============================================================================
// Callbacks
// ============================================================================

/// Success/error callback pair of a callback-mode request.
pub struct Callbacks {
    on_data: DataCallback,
    on_error: ErrorCallback,
    /// When `false`, callbacks receive [`DeviceIndex::UNDEFINED`].
    echo_index: bool,
}

impl Callbacks {
    /// Creates a callback pair.
    pub fn new(on_data: DataCallback, on_error: ErrorCallback) -> Self {
        Self {
            on_data,
            on_error,
            echo_index: true,
        }
    }

    /// Delivers the undefined sentinel instead of the channel id.
    #[must_use]
    pub fn without_index(mut self) -> Self {
        self.echo_index = false;
        self
    }

    fn index(&self, device_index: DeviceIndex) -> DeviceIndex {
        if self.echo_index {
            device_index
        } else {
            DeviceIndex::UNDEFINED
        }
    }

    fn data(&mut self, device_index: DeviceIndex, field: DataField) {
        let index = self.index(device_index);
        (self.on_data)(index, field);
    }

    fn error(&mut self, device_index: DeviceIndex, error: Error) {
        let index = self.index(device_index);
        (self.on_error)(index, error);
    }
}

impl fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks")
            .field("echo_index", &self.echo_index)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Completion
// ============================================================================

/// How a device I/O request reports its result.
#[derive(Debug)]
pub(crate) enum Completion {
    /// Awaited by the caller.
    Promise(Responder<DataField>),
    /// Delivered to callbacks on the event loop.
    Callback(Callbacks),
}

impl Completion {
    fn resolve(self, device_index: DeviceIndex, result: Result<DataField>) {
        match (self, result) {
            (Self::Promise(tx), result) => {
                let _ = tx.send(result);
            }
            (Self::Callback(mut callbacks), Ok(field)) => callbacks.data(device_index, field),
            (Self::Callback(mut callbacks), Err(e)) => callbacks.error(device_index, e),
        }
    }
}

// ============================================================================
// UpdateWatch
// ============================================================================

/// Multi-stage record of a firmware update; stays queued until the last stage.
pub(crate) struct UpdateWatch {
    pub callbacks: Callbacks,
    pub on_progress: Option<ProgressCallback>,
}

impl fmt::Debug for UpdateWatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpdateWatch")
            .field("on_progress", &self.on_progress.is_some())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Pending
// ============================================================================

/// A request awaiting its reply, tagged by the API call that issued it.
#[derive(Debug)]
pub(crate) enum Pending {
    /// Resolved by the first message after the socket opens.
    Connect(Responder<SessionNumber>),
    /// Resolved when the socket closes.
    Disconnect(Responder<Option<SessionNumber>>),
    Echo(Responder<DataField>),
    ControlShow(Responder<()>),
    DeviceList(Responder<Vec<String>>),
    DeviceOpen(Responder<DeviceIndex>),
    DeviceClose(Responder<()>),
    /// send / receive / transmit / cancel.
    DeviceIo {
        action: ActionCode,
        completion: Completion,
    },
    /// Kernel, file, advance and update-parameter commands.
    Command {
        action: ActionCode,
        responder: Responder<Vec<String>>,
    },
    UpdateStart(UpdateWatch),
}

/// What the event loop does with a record after a reply.
#[derive(Debug)]
pub(crate) enum Outcome {
    /// Record finished.
    Done,
    /// Record waits for another reply and goes back to the head of its queue.
    Rearm(Pending),
}

impl Pending {
    /// Action code the reply must carry, `None` when any reply is accepted.
    pub(crate) fn expected_action(&self) -> Option<ActionCode> {
        match self {
            Self::Connect(_) | Self::Disconnect(_) => None,
            Self::Echo(_) => Some(ActionCode::Echo),
            Self::ControlShow(_) => Some(ActionCode::ControlShow),
            Self::DeviceList(_) => Some(ActionCode::DeviceList),
            Self::DeviceOpen(_) => Some(ActionCode::DeviceOpen),
            Self::DeviceClose(_) => Some(ActionCode::DeviceClose),
            Self::DeviceIo { action, .. } | Self::Command { action, .. } => Some(*action),
            Self::UpdateStart(_) => Some(ActionCode::IndependentBootloader),
        }
    }

    /// Completes the record with a reply packet.
    pub(crate) fn complete(self, packet: Packet) -> Outcome {
        let device_index = packet.device_index;

        if let Some(expected) = self.expected_action()
            && expected != packet.action_code
        {
            warn!(
                %device_index,
                expected = %expected,
                actual = %packet.action_code,
                "Reply action mismatch"
            );
            self.fail(device_index, Error::action_mismatch(expected, packet.action_code));
            return Outcome::Done;
        }

        let field = packet.data_field;

        match self {
            Self::Connect(tx) => {
                debug!(session = %packet.session_number, "Session established");
                let _ = tx.send(Ok(packet.session_number));
            }
            Self::Disconnect(tx) => {
                trace!(%device_index, "Message while disconnecting dropped");
                return Outcome::Rearm(Self::Disconnect(tx));
            }
            Self::Echo(tx) => {
                let _ = tx.send(field.ok_or_else(|| Error::invalid_data_field("empty echo")));
            }
            Self::ControlShow(tx) => {
                let _ = tx.send(require_success(field).map(|_| ()));
            }
            Self::DeviceList(tx) => {
                let list = field.map(DataField::into_strings).unwrap_or_default();
                let _ = tx.send(Ok(list));
            }
            Self::DeviceOpen(tx) => {
                let index = match field.as_ref().map(DataField::status) {
                    Some(DataStatus::Success) => device_index,
                    _ => {
                        debug!(?field, "Device open refused");
                        DeviceIndex::UNDEFINED
                    }
                };
                let _ = tx.send(Ok(index));
            }
            Self::DeviceClose(tx) => {
                let _ = tx.send(require_success(field).map(|_| ()));
            }
            Self::DeviceIo { completion, .. } => {
                completion.resolve(device_index, device_reply(field));
            }
            Self::Command { responder, .. } => {
                let _ = responder.send(require_success(field));
            }
            Self::UpdateStart(watch) => return update_stage(watch, device_index, field),
        }

        Outcome::Done
    }

    /// Fails the record.
    pub(crate) fn fail(self, device_index: DeviceIndex, error: Error) {
        match self {
            Self::Connect(tx) => {
                let _ = tx.send(Err(error));
            }
            Self::Disconnect(tx) => {
                let _ = tx.send(Err(error));
            }
            Self::Echo(tx) => {
                let _ = tx.send(Err(error));
            }
            Self::ControlShow(tx) | Self::DeviceClose(tx) => {
                let _ = tx.send(Err(error));
            }
            Self::DeviceList(tx) => {
                let _ = tx.send(Err(error));
            }
            Self::DeviceOpen(tx) => {
                let _ = tx.send(Err(error));
            }
            Self::DeviceIo { completion, .. } => completion.resolve(device_index, Err(error)),
            Self::Command { responder, .. } => {
                let _ = responder.send(Err(error));
            }
            Self::UpdateStart(mut watch) => watch.callbacks.error(device_index, error),
        }
    }
}

// ============================================================================
// Reply helpers
// ============================================================================

/// Accepts `["success", ...]` and returns the elements after the status.
fn require_success(field: Option<DataField>) -> Result<Vec<String>> {
    let field = field.ok_or_else(|| Error::invalid_data_field("missing data field"))?;
    match field.status() {
        DataStatus::Success => {
            let mut items = field.into_strings();
            items.remove(0);
            Ok(items)
        }
        DataStatus::Error => Err(Error::server_rejected(field.into_strings().join(" "))),
        _ => Err(Error::invalid_data_field(format!(
            "unexpected status: {:?}",
            field.first()
        ))),
    }
}

/// Device I/O replies pass through unless the server reports an error.
fn device_reply(field: Option<DataField>) -> Result<DataField> {
    let field = field.ok_or_else(|| Error::invalid_data_field("missing data field"))?;
    if field.status() == DataStatus::Error {
        return Err(Error::server_rejected(field.into_strings().join(" ")));
    }
    Ok(field)
}

/// Advances a firmware update record by one reply.
fn update_stage(
    mut watch: UpdateWatch,
    device_index: DeviceIndex,
    field: Option<DataField>,
) -> Outcome {
    let Some(field) = field else {
        watch
            .callbacks
            .error(device_index, Error::invalid_data_field("missing data field"));
        return Outcome::Done;
    };

    match field.status() {
        DataStatus::Success if field.len() == 1 => {
            watch.callbacks.data(device_index, field);
            Outcome::Done
        }
        DataStatus::Success => {
            let current = field.get(1).and_then(|s| s.parse::<usize>().ok());
            let total = field.get(2).and_then(|s| s.parse::<usize>().ok());
            let (Some(current), Some(total)) = (current, total) else {
                watch
                    .callbacks
                    .error(device_index, Error::invalid_data_field("bad update stage"));
                return Outcome::Done;
            };

            if current + 1 >= total {
                watch.callbacks.data(device_index, field);
                return Outcome::Done;
            }

            if let Some(progress) = watch.on_progress.as_mut() {
                progress(device_index, current, total);
            }
            trace!(%device_index, current, total, "Update stage");
            Outcome::Rearm(Pending::UpdateStart(watch))
        }
        DataStatus::Error => {
            let message = field.into_strings().join(" ");
            watch
                .callbacks
                .error(device_index, Error::server_rejected(message));
            Outcome::Done
        }
        _ => {
            watch.callbacks.error(
                device_index,
                Error::invalid_data_field("unexpected update reply"),
            );
            Outcome::Done
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use parking_lot::Mutex;

    use crate::protocol::RequestType;

    fn reply(index: u32, action: ActionCode, field: Option<DataField>) -> Packet {
        Packet {
            request_type: RequestType::Response,
            session_number: SessionNumber::new(7),
            device_index: DeviceIndex::new(index),
            action_code: action,
            data_field: field,
            ..Packet::manager(SessionNumber::new(7), action)
        }
    }

    #[test]
    fn test_connect_takes_session_number() {
        let (tx, mut rx) = oneshot::channel();
        let outcome = Pending::Connect(tx).complete(reply(0, ActionCode::Echo, None));
        assert!(matches!(outcome, Outcome::Done));
        let session = rx.try_recv().expect("sent").expect("ok");
        assert_eq!(session.to_string(), "7");
    }

    #[test]
    fn test_action_mismatch_fails_record() {
        let (tx, mut rx) = oneshot::channel();
        let pending = Pending::DeviceIo {
            action: ActionCode::DeviceSend,
            completion: Completion::Promise(tx),
        };
        pending.complete(reply(5, ActionCode::DeviceOpen, Some("success".into())));
        let err = rx.try_recv().expect("sent").unwrap_err();
        assert!(matches!(err, Error::ActionMismatch { .. }));
    }

    #[test]
    fn test_device_open_refusal_resolves_undefined() {
        let (tx, mut rx) = oneshot::channel();
        Pending::DeviceOpen(tx).complete(reply(3, ActionCode::DeviceOpen, Some("error".into())));
        assert_eq!(rx.try_recv().expect("sent").expect("ok"), DeviceIndex::UNDEFINED);
    }

    #[test]
    fn test_device_open_success_resolves_index() {
        let (tx, mut rx) = oneshot::channel();
        Pending::DeviceOpen(tx).complete(reply(3, ActionCode::DeviceOpen, Some("success".into())));
        assert_eq!(rx.try_recv().expect("sent").expect("ok"), DeviceIndex::new(3));
    }

    #[test]
    fn test_command_strips_status() {
        let (tx, mut rx) = oneshot::channel();
        let pending = Pending::Command {
            action: ActionCode::FileOperation,
            responder: tx,
        };
        pending.complete(reply(
            0,
            ActionCode::FileOperation,
            Some(DataField::list(["success", "1024"])),
        ));
        assert_eq!(rx.try_recv().expect("sent").expect("ok"), ["1024"]);
    }

    #[test]
    fn test_command_error_is_rejected() {
        let (tx, mut rx) = oneshot::channel();
        let pending = Pending::Command {
            action: ActionCode::KernelOperation,
            responder: tx,
        };
        pending.complete(reply(
            0,
            ActionCode::KernelOperation,
            Some(DataField::list(["error", "not found"])),
        ));
        let err = rx.try_recv().expect("sent").unwrap_err();
        assert!(matches!(err, Error::ServerRejected { .. }));
    }

    #[test]
    fn test_disconnect_ignores_messages() {
        let (tx, _rx) = oneshot::channel();
        let outcome = Pending::Disconnect(tx).complete(reply(0, ActionCode::Echo, None));
        assert!(matches!(outcome, Outcome::Rearm(Pending::Disconnect(_))));
    }

    #[test]
    fn test_callback_without_index_gets_sentinel() {
        let seen = Arc::new(Mutex::new(None));
        let seen_clone = Arc::clone(&seen);
        let callbacks = Callbacks::new(
            Box::new(move |index, _| *seen_clone.lock() = Some(index)),
            Box::new(|_, _| {}),
        )
        .without_index();
        let pending = Pending::DeviceIo {
            action: ActionCode::DeviceReceive,
            completion: Completion::Callback(callbacks),
        };
        pending.complete(reply(4, ActionCode::DeviceReceive, Some("0102".into())));
        assert_eq!(*seen.lock(), Some(DeviceIndex::UNDEFINED));
    }

    #[test]
    fn test_update_rearms_until_last_stage() {
        let progress = Arc::new(Mutex::new(Vec::new()));
        let done = Arc::new(Mutex::new(false));
        let progress_clone = Arc::clone(&progress);
        let done_clone = Arc::clone(&done);

        let mut pending = Pending::UpdateStart(UpdateWatch {
            callbacks: Callbacks::new(
                Box::new(move |_, _| *done_clone.lock() = true),
                Box::new(|_, _| {}),
            ),
            on_progress: Some(Box::new(move |_, current, total| {
                progress_clone.lock().push((current, total));
            })),
        });

        for stage in 0..3 {
            let field = DataField::list(["success".to_string(), stage.to_string(), "3".into()]);
            match pending.complete(reply(2, ActionCode::IndependentBootloader, Some(field))) {
                Outcome::Rearm(next) => pending = next,
                Outcome::Done => {
                    assert_eq!(stage, 2);
                    break;
                }
            }
        }

        assert_eq!(*progress.lock(), vec![(0, 3), (1, 3)]);
        assert!(*done.lock());
    }

    #[test]
    fn test_update_single_success_completes() {
        let done = Arc::new(Mutex::new(false));
        let done_clone = Arc::clone(&done);
        let pending = Pending::UpdateStart(UpdateWatch {
            callbacks: Callbacks::new(
                Box::new(move |_, _| *done_clone.lock() = true),
                Box::new(|_, _| {}),
            ),
            on_progress: None,
        });
        let outcome = pending.complete(reply(
            2,
            ActionCode::IndependentBootloader,
            Some(DataField::list(["success"])),
        ));
        assert!(matches!(outcome, Outcome::Done));
        assert!(*done.lock());
    }
}
