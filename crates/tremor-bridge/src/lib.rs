// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Tremor — Native-side bridge between platform gesture signals and an
// embedded scripting runtime.
//
// The host context owns the device-event channel and the system-service
// locator; bridge modules (registered by stable name) translate platform
// signals into named events on that channel. The motion-sensing capability
// sits behind the `ShakeDetector` trait so platform integrations can be
// substituted or mocked in tests.

pub mod detector;
pub mod emitter;
pub mod host;
pub mod registry;
pub mod shake;

pub use detector::{ShakeDetector, ShakeListener, StubDetector, StubHandle};
pub use emitter::DeviceEventEmitter;
pub use host::{HostContext, HostHandle};
pub use registry::{ModuleRegistry, NativeModule};
pub use shake::{SHAKE_EVENT_NAME, ShakeModule};
