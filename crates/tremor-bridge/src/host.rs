// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The host context — the scripting runtime's native face.
//
// Owns the device-event emitter and the system-service locator. The context
// is Arc-backed and cheaply cloneable so the embedding application can hand
// it to the module registry, to commands and to background threads without
// lifetime gymnastics. Detector callbacks hold a `HostHandle` (a weak
// back-reference) and look up liveness at call time rather than keeping the
// context alive from a sensor thread.

use std::sync::{Arc, Mutex, Weak};

use tracing::{debug, info};

use tremor_core::config::HostConfig;
use tremor_core::error::{Result, TremorError};
use tremor_core::types::ServiceId;

use crate::detector::ShakeDetector;
use crate::emitter::DeviceEventEmitter;

struct HostInner {
    emitter: DeviceEventEmitter,
    /// Motion-sensing capability slot. `take`-semantics: a capability is
    /// owned by exactly one module once acquired.
    motion: Mutex<Option<Box<dyn ShakeDetector + Send>>>,
}

/// Shared handle to the embedding host. Clones share one context.
#[derive(Clone)]
pub struct HostContext {
    inner: Arc<HostInner>,
}

impl HostContext {
    pub fn new(config: HostConfig) -> Self {
        info!(
            event_buffer_capacity = config.event_buffer_capacity,
            "host context created"
        );
        Self {
            inner: Arc::new(HostInner {
                emitter: DeviceEventEmitter::new(config.event_buffer_capacity),
                motion: Mutex::new(None),
            }),
        }
    }

    /// The shared device-event channel.
    pub fn emitter(&self) -> &DeviceEventEmitter {
        &self.inner.emitter
    }

    /// Install the platform motion-sensing capability.
    ///
    /// Called by the embedding application before modules initialize.
    /// Installing a second capability replaces an unclaimed one.
    pub fn provide_motion_detector(&self, detector: Box<dyn ShakeDetector + Send>) {
        let mut slot = self.inner.motion.lock().expect("service lock poisoned");
        if slot.replace(detector).is_some() {
            debug!(service = %ServiceId::MotionSensing, "unclaimed capability replaced");
        }
    }

    /// System-service lookup for the motion-sensing capability.
    ///
    /// Ownership transfers to the caller; a second acquisition (or one
    /// without a prior provider) fails with `ServiceUnavailable`.
    pub fn acquire_motion_detector(&self) -> Result<Box<dyn ShakeDetector + Send>> {
        let mut slot = self.inner.motion.lock().expect("service lock poisoned");
        slot.take()
            .ok_or(TremorError::ServiceUnavailable(ServiceId::MotionSensing))
    }

    /// Weak back-reference for detector callbacks.
    pub fn downgrade(&self) -> HostHandle {
        HostHandle {
            inner: Arc::downgrade(&self.inner),
        }
    }
}

/// Weak reference to a `HostContext`, held by sensor callbacks.
///
/// Upgrading fails once the embedding application has dropped the context,
/// at which point the callback drops its event instead of delivering into
/// a torn-down host.
#[derive(Clone)]
pub struct HostHandle {
    inner: Weak<HostInner>,
}

impl HostHandle {
    pub fn upgrade(&self) -> Option<HostContext> {
        self.inner.upgrade().map(|inner| HostContext { inner })
    }
}
