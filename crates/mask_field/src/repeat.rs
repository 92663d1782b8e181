//! Key-repeat timer for held keys (typically backspace).
//!
//! A held key is modeled as a worker thread that emits the same edit event
//! at a fixed interval until release. The handle is instance-scoped: one
//! per held key per field, owned by the adapter and cancelled on key-release
//! or blur, never a module-level global, so fields cannot interfere with
//! each other.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::event::EditEvent;
use crate::id::FieldId;

/// Repeating emitter of one edit event for one field.
///
/// Ticks arrive as `(FieldId, EditEvent)` on the channel the adapter
/// provided; the adapter drains them on its own cadence and feeds each
/// through [`MaskFieldStore::apply`](crate::MaskFieldStore::apply).
///
/// [`cancel`](RepeatTimer::cancel) is synchronous: it wakes and joins the
/// worker, so once it returns no further tick will ever be queued. Ticks
/// already queued before release are part of the hold and may still be
/// drained. Dropping the handle cancels.
#[derive(Debug)]
pub struct RepeatTimer {
    stop_tx: Sender<()>,
    worker: Option<JoinHandle<()>>,
}

impl RepeatTimer {
    /// Start emitting `event` for `id` every `interval` until cancelled.
    ///
    /// The first tick fires one interval after the keypress that the
    /// adapter already applied directly.
    pub fn start(
        id: FieldId,
        event: EditEvent,
        interval: Duration,
        tick_tx: Sender<(FieldId, EditEvent)>,
    ) -> Self {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();

        let worker = thread::spawn(move || {
            loop {
                match stop_rx.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => {
                        if tick_tx.send((id, event.clone())).is_err() {
                            // Receiver gone; nobody is listening anymore.
                            break;
                        }
                        log::trace!(
                            target: "mask.repeat",
                            "field {}: repeat {event:?}",
                            id.as_raw()
                        );
                    }
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
        });

        Self {
            stop_tx,
            worker: Some(worker),
        }
    }

    /// Convenience for the common case: a held backspace.
    pub fn backspace(
        id: FieldId,
        interval: Duration,
        tick_tx: Sender<(FieldId, EditEvent)>,
    ) -> Self {
        Self::start(id, EditEvent::Backspace, interval, tick_tx)
    }

    /// Stop the timer. Wakes the worker and waits for it to exit, so after
    /// this returns no further tick is queued.
    pub fn cancel(&mut self) {
        let _ = self.stop_tx.send(());
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

impl Drop for RepeatTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
