// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Tremor gesture event bridge.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single occurrence published on the name-keyed device-event channel.
///
/// Events cross the native/scripting boundary as JSON, so the payload is an
/// optional `serde_json::Value`. Discrete gesture events (shake, etc.) carry
/// no payload at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceEvent {
    /// Event name the scripting side subscribes on.
    pub name: String,
    /// Optional JSON payload. `None` for pure signals.
    pub payload: Option<Value>,
}

impl DeviceEvent {
    pub fn new(name: impl Into<String>, payload: Option<Value>) -> Self {
        Self {
            name: name.into(),
            payload,
        }
    }

    /// A payload-less event — a pure "this happened" signal.
    pub fn signal(name: impl Into<String>) -> Self {
        Self::new(name, None)
    }
}

/// Identifier accepted by the host's system-service locator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceId {
    /// The platform motion-sensing capability (accelerometer-backed).
    MotionSensing,
}

impl std::fmt::Display for ServiceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceId::MotionSensing => write!(f, "motion-sensing"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signal_has_no_payload() {
        let event = DeviceEvent::signal("SHAKE");
        assert_eq!(event.name, "SHAKE");
        assert!(event.payload.is_none());
    }

    #[test]
    fn event_round_trips_through_json() {
        let event = DeviceEvent::new("orientation", Some(serde_json::json!({ "pitch": 0.5 })));
        let json = serde_json::to_string(&event).expect("serialize");
        let back: DeviceEvent = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, event);
    }

    #[test]
    fn service_id_display_is_stable() {
        assert_eq!(ServiceId::MotionSensing.to_string(), "motion-sensing");
    }
}
