// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The motion-sensing capability seam.
//
// Shake detection itself (accelerometer sampling, thresholding, debouncing)
// is a platform concern and lives behind this trait — a platform integration
// crate supplies the real implementation, desktop/CI builds and tests use
// the stub.

use std::sync::{Arc, Mutex};

use tracing::debug;

use tremor_core::error::Result;

/// Callback registered with a detector, invoked once per detected shake.
///
/// Invocations arrive on whatever thread the platform implementation uses
/// internally — the listener must not assume a thread and must not block.
pub type ShakeListener = Arc<dyn Fn() + Send + Sync>;

/// Platform motion-sensing capability.
///
/// Contract: `start` begins sensing with the given listener (at most one);
/// `stop` is synchronous and unconditional. After `stop`, the listener must
/// no longer be invoked even if the platform delivers a late signal.
pub trait ShakeDetector {
    fn start(&mut self, listener: ShakeListener) -> Result<()>;
    fn stop(&mut self);
}

impl std::fmt::Debug for dyn ShakeDetector + Send {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ShakeDetector")
    }
}

// ---------------------------------------------------------------------------
// Stub implementation for desktop/CI builds and tests
// ---------------------------------------------------------------------------

struct StubState {
    listener: Option<ShakeListener>,
    started: bool,
}

/// Manually-triggered detector used where no motion hardware exists.
///
/// `handle()` returns a `StubHandle` that simulates platform shake signals;
/// a signal arriving after `stop` is ignored, matching the contract above.
pub struct StubDetector {
    state: Arc<Mutex<StubState>>,
}

impl StubDetector {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(StubState {
                listener: None,
                started: false,
            })),
        }
    }

    /// A trigger handle that stays valid independent of the detector's
    /// ownership (the signal source outlives start/stop, as real sensor
    /// plumbing does).
    pub fn handle(&self) -> StubHandle {
        StubHandle {
            state: Arc::clone(&self.state),
        }
    }
}

impl Default for StubDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl ShakeDetector for StubDetector {
    fn start(&mut self, listener: ShakeListener) -> Result<()> {
        let mut state = self.state.lock().expect("detector lock poisoned");
        state.listener = Some(listener);
        state.started = true;
        debug!("stub detector started");
        Ok(())
    }

    fn stop(&mut self) {
        let mut state = self.state.lock().expect("detector lock poisoned");
        state.listener = None;
        state.started = false;
        debug!("stub detector stopped");
    }
}

/// Trigger side of a `StubDetector`.
#[derive(Clone)]
pub struct StubHandle {
    state: Arc<Mutex<StubState>>,
}

impl StubHandle {
    /// Simulate a platform shake signal.
    ///
    /// Invokes the registered listener iff the detector is started; a late
    /// signal after `stop` is swallowed. The listener runs outside the state
    /// lock so it may call back into start/stop without deadlocking.
    pub fn shake(&self) {
        let listener = {
            let state = self.state.lock().expect("detector lock poisoned");
            if !state.started {
                debug!("shake signal after stop, ignored");
                return;
            }
            state.listener.clone()
        };
        if let Some(listener) = listener {
            listener();
        }
    }
}
