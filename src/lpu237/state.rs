//! Transaction state machine and per-device transaction book.
//!
//! Every reply the controller sees for a device is a "frame completed"
//! event. [`transition`] maps `(state, frame, context)` to the action the
//! controller takes and the next state:
//!
//! | State | Frame | Action | Next |
//! |-------|-------|--------|------|
//! | Idle | any | notify all | Idle |
//! | WaitResponse | valid, more frames | transmit next | WaitResponse |
//! | WaitResponse | valid, read operation | receive | WaitReadData |
//! | WaitResponse | valid | complete | Idle |
//! | WaitResponse | invalid / cancel | notify all | Idle |
//! | WaitReadData | cancel | notify front | WaitCancel |
//! | WaitReadData | valid, promise | deliver | Idle |
//! | WaitReadData | valid, callback, read requested | deliver, re-arm | WaitReadData |
//! | WaitReadData | valid, callback, read stopped | deliver | WaitCancel |
//! | WaitReadData | invalid | notify all | Idle |
//! | WaitCancel | ack, MSR | switch OPOS | WaitResponse |
//! | WaitCancel | ack, iButton, read requested | receive | WaitReadData |
//! | WaitCancel | ack, iButton | complete | Idle |
//! | WaitCancel | invalid / unknown device | notify all | Idle |

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use tokio::sync::oneshot;

use crate::error::{Error, Result};
use crate::identifiers::DeviceIndex;
use crate::queue::MapOfQueue;

use super::device::{DeviceType, ReadData, ReadHandler, ReadKind};

// ============================================================================
// TransactionState
// ============================================================================

/// Per-device transaction state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TransactionState {
    /// No business operation in flight.
    #[default]
    Idle,
    /// Waiting for the reply to a request frame.
    WaitResponse,
    /// Waiting for unsolicited card or iButton data.
    WaitReadData,
    /// Waiting for the acknowledgement of a cancel.
    WaitCancel,
}

impl fmt::Display for TransactionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::WaitResponse => "wait_response",
            Self::WaitReadData => "wait_read_data",
            Self::WaitCancel => "wait_cancel",
        };
        f.write_str(name)
    }
}

// ============================================================================
// Transition
// ============================================================================

/// Classified reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    /// Parsed as a valid response or read report.
    Valid,
    /// Malformed or negative.
    Invalid,
    /// The server reports the read was cancelled.
    Cancel,
}

/// Facts about the device and its front transaction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameContext {
    pub device_type: DeviceType,
    /// The front waiter still wants data.
    pub read_requested: bool,
    /// The running sequence ends in a read.
    pub read_operation: bool,
    /// The front waiter wants exactly one read.
    pub promise_mode: bool,
    /// The device still has request frames queued.
    pub more_tx: bool,
}

/// What the controller does with a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Send the next queued request frame.
    TransmitNext,
    /// Report success to the front waiter and drop it.
    Complete,
    /// Arm a receive for read data.
    Receive,
    /// Hand read data to the front waiter; `rearm` keeps it queued.
    Deliver { rearm: bool },
    /// Fail only the front waiter.
    NotifyFrontError,
    /// Fail and drop every waiter of the device.
    NotifyAllError,
    /// Queue OPOS enable/disable frames and start sending them.
    SwitchOpos,
}

/// Result of [`transition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub action: Action,
    pub next: TransactionState,
}

impl Transition {
    const fn new(action: Action, next: TransactionState) -> Self {
        Self { action, next }
    }
}

/// Computes the reaction to one completed frame.
#[must_use]
pub fn transition(state: TransactionState, frame: Frame, ctx: &FrameContext) -> Transition {
    use Action::*;
    use TransactionState::*;

    match (state, frame) {
        (Idle, _) => Transition::new(NotifyAllError, Idle),

        (WaitResponse, Frame::Valid) if ctx.more_tx => Transition::new(TransmitNext, WaitResponse),
        (WaitResponse, Frame::Valid) if ctx.read_operation => Transition::new(Receive, WaitReadData),
        (WaitResponse, Frame::Valid) => Transition::new(Complete, Idle),
        (WaitResponse, _) => Transition::new(NotifyAllError, Idle),

        (WaitReadData, Frame::Cancel) => Transition::new(NotifyFrontError, WaitCancel),
        (WaitReadData, Frame::Valid) if ctx.promise_mode => {
            Transition::new(Deliver { rearm: false }, Idle)
        }
        (WaitReadData, Frame::Valid) if ctx.read_requested => {
            Transition::new(Deliver { rearm: true }, WaitReadData)
        }
        (WaitReadData, Frame::Valid) => Transition::new(Deliver { rearm: false }, WaitCancel),
        (WaitReadData, Frame::Invalid) => Transition::new(NotifyAllError, Idle),

        (WaitCancel, Frame::Invalid) => Transition::new(NotifyAllError, Idle),
        (WaitCancel, _) => match ctx.device_type {
            DeviceType::Msr => Transition::new(SwitchOpos, WaitResponse),
            DeviceType::IButton | DeviceType::CompositeIButton if ctx.read_requested => {
                Transition::new(Receive, WaitReadData)
            }
            DeviceType::IButton | DeviceType::CompositeIButton => Transition::new(Complete, Idle),
            DeviceType::Unknown => Transition::new(NotifyAllError, Idle),
        },
    }
}

// ============================================================================
// Transaction
// ============================================================================

/// Business operation a transaction belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TransactionKind {
    LoadParameters,
    SaveParameters,
    RunBootloader,
    Read(ReadKind),
}

/// Who waits for the outcome of a transaction.
pub(crate) enum Waiter {
    /// The awaiting controller call reports the result itself.
    Promise,
    /// Streaming read callbacks.
    Stream(Arc<ReadHandler>),
    /// One-shot read.
    Once(Option<oneshot::Sender<Result<ReadData>>>),
}

impl Waiter {
    /// Reports an error; a no-op for [`Waiter::Promise`].
    pub(crate) fn notify_error(&mut self, error: Error) {
        match self {
            Self::Promise => {}
            Self::Stream(handler) => handler.error(error),
            Self::Once(tx) => {
                if let Some(tx) = tx.take() {
                    let _ = tx.send(Err(error));
                }
            }
        }
    }

    /// Delivers read data.
    pub(crate) fn deliver(&mut self, data: ReadData) {
        match self {
            Self::Promise => {}
            Self::Stream(handler) => handler.data(data),
            Self::Once(tx) => {
                if let Some(tx) = tx.take() {
                    let _ = tx.send(Ok(data));
                }
            }
        }
    }

    pub(crate) fn is_promise_mode(&self) -> bool {
        !matches!(self, Self::Stream(_))
    }
}

impl fmt::Debug for Waiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Promise => f.write_str("Promise"),
            Self::Stream(_) => f.write_str("Stream"),
            Self::Once(_) => f.write_str("Once"),
        }
    }
}

/// Controller-level queue entry for one business operation.
#[derive(Debug)]
pub(crate) struct Transaction {
    pub kind: TransactionKind,
    pub read_requested: bool,
    pub waiter: Waiter,
}

impl Transaction {
    pub(crate) fn promise(kind: TransactionKind) -> Self {
        Self {
            kind,
            read_requested: false,
            waiter: Waiter::Promise,
        }
    }

    pub(crate) fn read(kind: ReadKind, waiter: Waiter) -> Self {
        Self {
            kind: TransactionKind::Read(kind),
            read_requested: true,
            waiter,
        }
    }
}

// ============================================================================
// TransactionBook
// ============================================================================

/// Per-device states and transaction queues.
#[derive(Debug, Default)]
pub(crate) struct TransactionBook {
    states: FxHashMap<DeviceIndex, TransactionState>,
    queue: MapOfQueue<DeviceIndex, Transaction>,
}

impl TransactionBook {
    /// Stored state; `None` for a device never seen since the last reset.
    pub(crate) fn state(&self, device_index: DeviceIndex) -> Option<TransactionState> {
        self.states.get(&device_index).copied()
    }

    /// Stored state, creating it as `Idle` on first reference.
    pub(crate) fn state_or_idle(&mut self, device_index: DeviceIndex) -> TransactionState {
        *self.states.entry(device_index).or_default()
    }

    pub(crate) fn set_state(&mut self, device_index: DeviceIndex, state: TransactionState) {
        self.states.insert(device_index, state);
    }

    pub(crate) fn push(&mut self, device_index: DeviceIndex, transaction: Transaction) {
        self.queue.push(device_index, transaction);
    }

    /// Pops the front transaction.
    pub(crate) fn front(&mut self, device_index: DeviceIndex) -> Option<Transaction> {
        self.queue.front(device_index)
    }

    pub(crate) fn get_mut(&mut self, device_index: DeviceIndex) -> Option<&mut Transaction> {
        self.queue.get_mut(device_index)
    }

    pub(crate) fn get(&self, device_index: DeviceIndex) -> Option<&Transaction> {
        self.queue.get(device_index)
    }

    pub(crate) fn is_queue_empty(&self, device_index: DeviceIndex) -> bool {
        self.queue.is_empty(device_index)
    }

    /// Removes every queued transaction of the device.
    pub(crate) fn take_all(&mut self, device_index: DeviceIndex) -> Vec<Transaction> {
        self.queue.delete(device_index)
    }

    /// Forgets the device: queue and state.
    pub(crate) fn remove_device(&mut self, device_index: DeviceIndex) -> Vec<Transaction> {
        self.states.remove(&device_index);
        self.queue.delete(device_index)
    }

    /// Forgets every device and returns the transactions that were queued.
    pub(crate) fn reset(&mut self) -> Vec<Transaction> {
        self.states.clear();
        self.queue
            .drain()
            .into_iter()
            .map(|(_, transaction)| transaction)
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use TransactionState::*;

    fn ctx(device_type: DeviceType) -> FrameContext {
        FrameContext {
            device_type,
            ..FrameContext::default()
        }
    }

    #[test]
    fn test_idle_rejects_every_frame() {
        for frame in [Frame::Valid, Frame::Invalid, Frame::Cancel] {
            let t = transition(Idle, frame, &ctx(DeviceType::Msr));
            assert_eq!(t, Transition::new(Action::NotifyAllError, Idle));
        }
    }

    #[test]
    fn test_wait_response_chain() {
        let more = FrameContext {
            more_tx: true,
            ..ctx(DeviceType::Msr)
        };
        assert_eq!(
            transition(WaitResponse, Frame::Valid, &more),
            Transition::new(Action::TransmitNext, WaitResponse)
        );

        let read = FrameContext {
            read_operation: true,
            ..ctx(DeviceType::Msr)
        };
        assert_eq!(
            transition(WaitResponse, Frame::Valid, &read),
            Transition::new(Action::Receive, WaitReadData)
        );

        assert_eq!(
            transition(WaitResponse, Frame::Valid, &ctx(DeviceType::Msr)),
            Transition::new(Action::Complete, Idle)
        );
        assert_eq!(
            transition(WaitResponse, Frame::Invalid, &more),
            Transition::new(Action::NotifyAllError, Idle)
        );
    }

    #[test]
    fn test_cancel_while_reading_moves_to_wait_cancel() {
        for promise_mode in [false, true] {
            let c = FrameContext {
                read_requested: true,
                promise_mode,
                ..ctx(DeviceType::IButton)
            };
            let t = transition(WaitReadData, Frame::Cancel, &c);
            assert_eq!(t.action, Action::NotifyFrontError);
            assert_eq!(t.next, WaitCancel);
        }
    }

    #[test]
    fn test_read_data_delivery() {
        let promise = FrameContext {
            read_requested: true,
            promise_mode: true,
            ..ctx(DeviceType::Msr)
        };
        assert_eq!(
            transition(WaitReadData, Frame::Valid, &promise),
            Transition::new(Action::Deliver { rearm: false }, Idle)
        );

        let streaming = FrameContext {
            read_requested: true,
            ..ctx(DeviceType::Msr)
        };
        assert_eq!(
            transition(WaitReadData, Frame::Valid, &streaming),
            Transition::new(Action::Deliver { rearm: true }, WaitReadData)
        );

        assert_eq!(
            transition(WaitReadData, Frame::Valid, &ctx(DeviceType::Msr)),
            Transition::new(Action::Deliver { rearm: false }, WaitCancel)
        );
    }

    #[test]
    fn test_wait_cancel_by_device_type() {
        assert_eq!(
            transition(WaitCancel, Frame::Valid, &ctx(DeviceType::Msr)).action,
            Action::SwitchOpos
        );

        let requested = FrameContext {
            read_requested: true,
            ..ctx(DeviceType::CompositeIButton)
        };
        assert_eq!(
            transition(WaitCancel, Frame::Valid, &requested),
            Transition::new(Action::Receive, WaitReadData)
        );
        assert_eq!(
            transition(WaitCancel, Frame::Cancel, &ctx(DeviceType::IButton)),
            Transition::new(Action::Complete, Idle)
        );
        assert_eq!(
            transition(WaitCancel, Frame::Valid, &ctx(DeviceType::Unknown)).action,
            Action::NotifyAllError
        );
        assert_eq!(
            transition(WaitCancel, Frame::Invalid, &ctx(DeviceType::Msr)).next,
            Idle
        );
    }

    #[test]
    fn test_book_lazy_idle_and_reset() {
        let mut book = TransactionBook::default();
        let index = DeviceIndex::new(4);
        assert_eq!(book.state(index), None);
        assert_eq!(book.state_or_idle(index), Idle);
        assert_eq!(book.state(index), Some(Idle));

        book.push(index, Transaction::promise(TransactionKind::LoadParameters));
        assert!(!book.is_queue_empty(index));

        let drained = book.reset();
        assert_eq!(drained.len(), 1);
        assert_eq!(drained[0].kind, TransactionKind::LoadParameters);
        assert_eq!(book.state(index), None);
        assert!(book.is_queue_empty(index));
    }

    #[test]
    fn test_once_waiter_notified_once() {
        let (tx, mut rx) = oneshot::channel();
        let mut waiter = Waiter::Once(Some(tx));
        assert!(waiter.is_promise_mode());
        waiter.notify_error(Error::cancelled(DeviceIndex::new(1)));
        waiter.deliver(ReadData::IButton("01".into()));
        assert!(rx.try_recv().expect("sent").is_err());
    }
}
