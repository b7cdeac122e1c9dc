// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Host configuration.

use serde::{Deserialize, Serialize};

/// Settings for the native host context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostConfig {
    /// Capacity of the bounded device-event channel. When the scripting side
    /// stops draining, the channel fills and further events are dropped —
    /// emission is fire-and-forget and must never block a sensor callback.
    pub event_buffer_capacity: usize,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            event_buffer_capacity: 64,
        }
    }
}
