// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The shared device-event channel between native modules and the scripting
// runtime.
//
// Emission is fire-and-forget: sensor callbacks arrive on arbitrary platform
// threads and must never block. When no scripting side is attached (or its
// buffer is full) the event is dropped with a warning — the single non-fatal
// failure path of the bridge.

use std::sync::Mutex;

use crossbeam_channel::{Receiver, Sender, TrySendError};
use serde_json::Value;
use tracing::{debug, warn};

use tremor_core::types::DeviceEvent;

/// Name-keyed publish mechanism shared by all bridge modules.
///
/// The scripting runtime attaches to obtain the receiving end; modules emit
/// through the host. `Send + Sync` — the sender slot is mutex-guarded so
/// callbacks from any platform thread may publish.
pub struct DeviceEventEmitter {
    capacity: usize,
    sender: Mutex<Option<Sender<DeviceEvent>>>,
}

impl DeviceEventEmitter {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            sender: Mutex::new(None),
        }
    }

    /// Attach the scripting side, returning its event intake.
    ///
    /// Re-attaching replaces the previous channel: the old receiver drains
    /// whatever it already holds and then observes disconnect.
    pub fn attach(&self) -> Receiver<DeviceEvent> {
        let (tx, rx) = crossbeam_channel::bounded(self.capacity);
        let mut guard = self.sender.lock().expect("emitter lock poisoned");
        if guard.replace(tx).is_some() {
            debug!("event channel re-attached, previous channel replaced");
        }
        rx
    }

    /// Detach the scripting side. Subsequent emits are dropped with a
    /// warning until a new receiver attaches.
    pub fn detach(&self) {
        let mut guard = self.sender.lock().expect("emitter lock poisoned");
        *guard = None;
    }

    /// Whether a scripting side is currently attached.
    pub fn is_active(&self) -> bool {
        self.sender
            .lock()
            .expect("emitter lock poisoned")
            .is_some()
    }

    /// Publish an event. Never blocks; returns whether the event was
    /// handed to an attached channel.
    pub fn emit(&self, name: &str, payload: Option<Value>) -> bool {
        let guard = self.sender.lock().expect("emitter lock poisoned");
        let Some(tx) = guard.as_ref() else {
            warn!(event = name, "event channel inactive, dropping event");
            return false;
        };

        match tx.try_send(DeviceEvent::new(name, payload)) {
            Ok(()) => true,
            Err(TrySendError::Full(_)) => {
                warn!(event = name, "event channel full, dropping event");
                false
            }
            Err(TrySendError::Disconnected(_)) => {
                // Receiver dropped without detaching — same outcome as an
                // inactive channel.
                warn!(event = name, "event channel disconnected, dropping event");
                false
            }
        }
    }
}
