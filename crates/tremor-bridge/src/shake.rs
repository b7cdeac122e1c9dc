// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The shake bridge module.
//
// Translates the platform's shake signal into a single named event on the
// device-event channel. No detection logic lives here — the module acquires
// the motion-sensing capability from the host's service locator, starts it
// with its lifetime, and stops it on destroy.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;
use tracing::{info, instrument, warn};

use tremor_core::error::Result;

use crate::detector::{ShakeDetector, ShakeListener};
use crate::host::HostContext;
use crate::registry::NativeModule;

/// Event name the scripting side subscribes on. Exposed through the
/// module's constants so callers never hard-code it.
pub const SHAKE_EVENT_NAME: &str = "SHAKE";

const MODULE_NAME: &str = "ShakeModule";

/// Bridges the platform shake signal to a `"SHAKE"` event with no payload.
///
/// Lifecycle is one-way: sensing begins at `initialize` and ends at
/// `destroy`; the instance is not restartable — the host creates a new one
/// on the next context bring-up.
#[derive(Debug)]
pub struct ShakeModule {
    detector: Box<dyn ShakeDetector + Send>,
    sensing: bool,
}

impl ShakeModule {
    /// Acquire the motion-sensing capability from the host and start it.
    ///
    /// The registered listener holds only a weak back-reference to the host:
    /// at shake time it looks up liveness and delivers through whatever the
    /// current event channel is. With the host gone or the channel inactive
    /// the event is dropped with a warning — non-fatal, no retries.
    #[instrument(skip_all)]
    pub fn initialize(host: &HostContext) -> Result<Self> {
        let handle = host.downgrade();
        let listener: ShakeListener = Arc::new(move || match handle.upgrade() {
            Some(host) => {
                // The emitter logs and drops if no channel is attached.
                host.emitter().emit(SHAKE_EVENT_NAME, None);
            }
            None => {
                warn!(module = MODULE_NAME, "host context torn down, dropping shake event");
            }
        });

        let detector = host.acquire_motion_detector()?;
        let mut module = Self {
            detector,
            sensing: false,
        };
        module.start_sensing(listener)?;

        info!(module = MODULE_NAME, "shake module initialized");
        Ok(module)
    }

    /// Start the detector unless already sensing.
    fn start_sensing(&mut self, listener: ShakeListener) -> Result<()> {
        if self.sensing {
            return Ok(());
        }
        self.detector.start(listener)?;
        self.sensing = true;
        Ok(())
    }

    /// Whether the underlying capability is currently started.
    pub fn is_sensing(&self) -> bool {
        self.sensing
    }
}

impl NativeModule for ShakeModule {
    fn name(&self) -> &'static str {
        MODULE_NAME
    }

    fn constants(&self) -> HashMap<String, Value> {
        HashMap::from([("eventName".to_string(), Value::from(SHAKE_EVENT_NAME))])
    }

    fn destroy(&mut self) {
        if self.sensing {
            self.detector.stop();
            self.sensing = false;
            info!(module = MODULE_NAME, "shake module destroyed, sensing stopped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detector::{StubDetector, StubHandle};
    use tremor_core::config::HostConfig;
    use tremor_core::error::TremorError;
    use tremor_core::types::{DeviceEvent, ServiceId};

    /// Host with a stub detector installed; returns the shake trigger.
    fn host_with_stub() -> (HostContext, StubHandle) {
        let host = HostContext::new(HostConfig::default());
        let detector = StubDetector::new();
        let trigger = detector.handle();
        host.provide_motion_detector(Box::new(detector));
        (host, trigger)
    }

    #[test]
    fn initialize_starts_sensing() {
        let (host, _trigger) = host_with_stub();
        let module = ShakeModule::initialize(&host).expect("initialize");
        assert!(module.is_sensing());
    }

    #[test]
    fn initialize_without_capability_fails() {
        let host = HostContext::new(HostConfig::default());
        let err = ShakeModule::initialize(&host).unwrap_err();
        assert!(matches!(
            err,
            TremorError::ServiceUnavailable(ServiceId::MotionSensing)
        ));
    }

    #[test]
    fn shake_emits_exactly_one_event_with_empty_payload() {
        let (host, trigger) = host_with_stub();
        let rx = host.emitter().attach();
        let _module = ShakeModule::initialize(&host).expect("initialize");

        trigger.shake();

        let event = rx.try_recv().expect("one event delivered");
        assert_eq!(event, DeviceEvent::signal(SHAKE_EVENT_NAME));
        assert!(rx.try_recv().is_err(), "exactly one event");
    }

    #[test]
    fn shake_with_inactive_channel_delivers_nothing() {
        let (host, trigger) = host_with_stub();
        let _module = ShakeModule::initialize(&host).expect("initialize");

        // No channel attached: the signal is logged and dropped.
        trigger.shake();

        let rx = host.emitter().attach();
        assert!(rx.try_recv().is_err(), "nothing was queued for delivery");
    }

    #[test]
    fn shake_after_destroy_is_not_processed() {
        let (host, trigger) = host_with_stub();
        let rx = host.emitter().attach();
        let mut module = ShakeModule::initialize(&host).expect("initialize");

        module.destroy();
        trigger.shake();

        assert!(!module.is_sensing());
        assert!(rx.try_recv().is_err(), "capability was stopped");
    }

    /// Detector that counts how many times `start` ran.
    struct CountingDetector {
        starts: Arc<std::sync::atomic::AtomicUsize>,
    }

    impl ShakeDetector for CountingDetector {
        fn start(&mut self, _listener: ShakeListener) -> Result<()> {
            self.starts
                .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            Ok(())
        }

        fn stop(&mut self) {}
    }

    #[test]
    fn second_start_is_a_noop() {
        let starts = Arc::new(std::sync::atomic::AtomicUsize::new(0));
        let host = HostContext::new(HostConfig::default());
        host.provide_motion_detector(Box::new(CountingDetector {
            starts: Arc::clone(&starts),
        }));

        let mut module = ShakeModule::initialize(&host).expect("initialize");
        assert!(module.is_sensing());

        // A second start while already sensing must not restart the
        // underlying capability.
        module
            .start_sensing(Arc::new(|| {}))
            .expect("second start");
        assert!(module.is_sensing());
        assert_eq!(starts.load(std::sync::atomic::Ordering::SeqCst), 1);
    }

    #[test]
    fn destroy_is_idempotent() {
        let (host, _trigger) = host_with_stub();
        let mut module = ShakeModule::initialize(&host).expect("initialize");

        module.destroy();
        assert!(!module.is_sensing());
        module.destroy();
        assert!(!module.is_sensing());
    }

    #[test]
    fn constants_are_stable_across_sensing_states() {
        let (host, _trigger) = host_with_stub();
        let mut module = ShakeModule::initialize(&host).expect("initialize");

        let expected =
            HashMap::from([("eventName".to_string(), Value::from("SHAKE"))]);
        assert_eq!(module.constants(), expected);

        module.destroy();
        assert_eq!(module.constants(), expected);
    }

    #[test]
    fn name_is_constant_across_instances() {
        let (first_host, _t1) = host_with_stub();
        let (second_host, _t2) = host_with_stub();

        let first = ShakeModule::initialize(&first_host).expect("first");
        let second = ShakeModule::initialize(&second_host).expect("second");

        assert_eq!(first.name(), "ShakeModule");
        assert_eq!(first.name(), second.name());
    }

    #[test]
    fn shake_after_host_dropped_is_swallowed() {
        let (host, trigger) = host_with_stub();
        let _rx = host.emitter().attach();
        let _module = ShakeModule::initialize(&host).expect("initialize");

        drop(host);
        // The listener's weak handle no longer upgrades; the signal is
        // logged and dropped rather than delivered into a dead host.
        trigger.shake();
    }
}
